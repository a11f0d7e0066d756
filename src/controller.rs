//! Reconciliation controller.
//!
//! Owns one engine instance per attached host widget, rebuilds its
//! configuration when options change, and mediates all traffic between
//! host-value-changed events and engine validation queries.
//!
//! Single-threaded by design: both event sources (option mutations and host
//! value changes) deliver serially, and each handler runs to completion
//! before the next event. The engine is shared with the registered validator
//! through `Rc<RefCell<_>>`; a parallel platform would put this behind a
//! single owner instead.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::compiler::{ConfigError, compile};
use crate::config::{CompiledConfig, ConfigUpdate};
use crate::engine::MaskingEngine;
use crate::focus::{FocusResolver, ShadowInput};
use crate::host::{HostWidget, ValidateCtx, ValidatorFn, ValidatorId};
use crate::options::MaskOptions;
use crate::validate::validation_message;

/// Glue between one host widget and one masking engine.
pub struct MaskController<E> {
    engine: Rc<RefCell<E>>,
    options: MaskOptions,
    config: CompiledConfig,
    unmasked: String,
    registration: ValidatorId,
}

impl<E: MaskingEngine + 'static> MaskController<E> {
    /// Attach a masking engine to `host`.
    ///
    /// Compiles the initial options, builds the engine via `build` around a
    /// shadow-aware adapter for the host's native input node, and appends a
    /// validator to the host's list. Compilation runs first, so a bad
    /// configuration never constructs an engine or touches the host.
    pub fn attach<H, R, F>(
        host: &mut H,
        resolver: R,
        options: MaskOptions,
        build: F,
    ) -> Result<Self, ConfigError>
    where
        H: HostWidget,
        R: FocusResolver,
        F: FnOnce(ShadowInput<R>, &CompiledConfig) -> E,
    {
        let config = compile(&options)?;
        let adapter = ShadowInput::new(host.native_input(), resolver);
        let engine = Rc::new(RefCell::new(build(adapter, &config)));
        let registration = host.register_validator(Self::validator(Rc::clone(&engine)));
        log::debug!("mask attached: mode {:?}", config.mode);
        Ok(MaskController {
            engine,
            options,
            config,
            unmasked: String::new(),
            registration,
        })
    }

    /// The validator entry registered with the host, closed over the shared
    /// engine. Invoked by the host's sweep, not by the controller.
    fn validator(engine: Rc<RefCell<E>>) -> ValidatorFn {
        Box::new(move |ctx: &ValidateCtx| {
            let engine = engine.borrow();
            validation_message(engine.is_complete(), &engine.raw_input_value(), ctx.required)
        })
    }

    /// Canonical option-mutation point: recompile and push the new
    /// configuration into the live engine.
    ///
    /// Most modes first force a transient lazy (placeholder-hidden) state so
    /// the engine never re-renders placeholders against a half-applied
    /// configuration; the full configuration then restores `lazy = false`.
    /// On error the engine keeps its previous configuration untouched.
    pub fn set_options(&mut self, options: MaskOptions) -> Result<(), ConfigError> {
        let config = compile(&options)?;
        {
            let mut engine = self.engine.borrow_mut();
            if config.mode.uses_lazy_transition() {
                engine.update_options(ConfigUpdate::Lazy(true));
            }
            engine.update_options(ConfigUpdate::Full(config.clone()));
        }
        log::debug!("mask reconfigured: mode {:?}", config.mode);
        self.options = options;
        self.config = config;
        Ok(())
    }

    /// Handle an external value change reported by the host widget.
    ///
    /// Resyncs the engine from the host control (skipped for numeric masks,
    /// where the engine is already the source of truth), pushes the accepted
    /// value back to the control, republishes the unmasked value from actual
    /// engine state, then triggers the host's validator sweep.
    pub fn on_host_value_changed<H: HostWidget>(&mut self, host: &mut H) -> &str {
        {
            let mut engine = self.engine.borrow_mut();
            if self.config.mode.resyncs_engine_value() {
                engine.update_value();
            }
            engine.update_control();
            // Always re-read: a rejected value leaves engine state unchanged.
            self.unmasked = engine.unmasked_value();
        }
        log::trace!("host value reconciled, unmasked {:?}", self.unmasked);
        host.validate();
        &self.unmasked
    }

    /// The unmasked output value, republished on every reconciliation.
    pub fn unmasked(&self) -> &str {
        &self.unmasked
    }

    /// The options currently applied.
    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// The configuration currently applied.
    pub fn config(&self) -> &CompiledConfig {
        &self.config
    }

    /// Shared read access to the engine.
    pub fn engine(&self) -> Ref<'_, E> {
        self.engine.borrow()
    }

    /// Exclusive access to the engine, for integration layers that feed it
    /// directly.
    pub fn engine_mut(&self) -> RefMut<'_, E> {
        self.engine.borrow_mut()
    }

    /// Detach from `host`, removing the validator registered at attach time.
    pub fn detach<H: HostWidget>(self, host: &mut H) {
        host.remove_validator(self.registration);
        log::debug!("mask detached");
    }
}

//! Interface to the external masking engine.
//!
//! The engine owns tokenization and parsing of raw keystrokes into a typed
//! value; this crate only configures it and reads its state back.

use crate::config::ConfigUpdate;

/// The masking engine bound to one input control.
///
/// State exposed through the read accessors is owned and mutated exclusively
/// by the engine; callers read it, never write it.
pub trait MaskingEngine {
    /// Apply a partial or full reconfiguration to the live engine.
    fn update_options(&mut self, update: ConfigUpdate);

    /// Resync engine state from the host control's literal value
    /// (engine ← host). A rejected value leaves engine state unchanged, so
    /// callers re-read the accessors afterwards instead of assuming the
    /// write took.
    fn update_value(&mut self);

    /// Push the engine's rendered/accepted value back to the host control
    /// (host ← engine).
    fn update_control(&mut self);

    /// The semantic value with structural characters stripped.
    fn unmasked_value(&self) -> String;

    /// The literal field content as typed; `""` when empty.
    fn raw_input_value(&self) -> String;

    /// True only when every mandatory block is fully satisfied.
    fn is_complete(&self) -> bool;
}

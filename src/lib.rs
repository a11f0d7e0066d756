//! Input-mask binding core.
//!
//! Compiles a declarative option set into the configuration consumed by a
//! masking engine, keeps that configuration live as options change, and
//! reconciles engine state with a host input widget on every external value
//! change.
//!
//! The engine and the host widget stay outside this crate, behind the
//! [`MaskingEngine`] and [`HostWidget`] traits; [`MaskController`] is the
//! glue that owns one engine per attached host. Focus resolution through
//! nested shadow boundaries is handled by [`is_active`] over a
//! [`FocusResolver`].
//!
//! # Example
//!
//! ```rust
//! use maskbind::{BlockDef, MaskOptions, MaskType, Mode, compile};
//!
//! let options = MaskOptions {
//!     mask_type: MaskType::Date,
//!     mask: Some("DD.MM.YYYY".into()),
//!     min_year: Some(2000),
//!     max_year: Some(2030),
//!     ..MaskOptions::default()
//! };
//!
//! let config = compile(&options).unwrap();
//! assert_eq!(config.mode, Mode::DateBuiltin);
//! assert_eq!(config.placeholder_char, '_');
//! assert_eq!(
//!     config.blocks.get("YYYY"),
//!     Some(&BlockDef::Range { from: 2000, to: 2030, max_length: Some(4), overwrite: false })
//! );
//! ```

mod blocks;
mod compiler;
mod config;
mod controller;
mod engine;
mod focus;
mod host;
mod options;
mod validate;

pub use blocks::{
    BlockDef, BlockSet, NumberMask, RADIX_DEFAULT, YEAR_MAX_DEFAULT, YEAR_MIN_DEFAULT,
    builtin_blocks,
};
pub use compiler::{ConfigError, compile};
pub use config::{CompiledConfig, ConfigUpdate, DATE_PATTERN, MaskSource, Mode, PLACEHOLDER_CHAR};
pub use controller::MaskController;
pub use engine::MaskingEngine;
pub use focus::{ElementId, FocusResolver, ShadowInput, is_active};
pub use host::{HostWidget, ValidateCtx, ValidatorFn, ValidatorId};
pub use options::{MaskOptions, MaskType};
pub use validate::{EMPTY_MESSAGE, INCOMPLETE_MESSAGE, validation_message};

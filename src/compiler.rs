//! Mask-option compiler.
//!
//! Transforms a declarative [`MaskOptions`] set into the engine-facing
//! [`CompiledConfig`]. Pure and total: equal options compile to structurally
//! equal configurations, and every failure is reported before any engine is
//! touched.

use std::fmt;

use regex::Regex;

use crate::blocks::{self, BlockSet, NumberMask};
use crate::config::{CompiledConfig, DATE_PATTERN, MaskSource, Mode, PLACEHOLDER_CHAR};
use crate::options::{MaskOptions, MaskType};

/// Errors that make a configuration uncompilable.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The `regexp` mask is not a syntactically valid regular expression.
    InvalidRegex { source: String, message: String },
    /// The `NR` range bounds are out of order.
    InvertedRange { from: i64, to: i64 },
    /// The numeric bounds are out of order.
    InvertedNumberBounds { min: f64, max: f64 },
    /// The `YYYY` year bounds are out of order.
    InvertedYearBounds { min_year: i64, max_year: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRegex { source, message } => {
                write!(f, "Invalid mask regular expression {source:?}: {message}")
            }
            ConfigError::InvertedRange { from, to } => {
                write!(f, "Range bounds out of order: from {from} > to {to}")
            }
            ConfigError::InvertedNumberBounds { min, max } => {
                write!(f, "Number bounds out of order: min {min} > max {max}")
            }
            ConfigError::InvertedYearBounds { min_year, max_year } => {
                write!(f, "Year bounds out of order: {min_year} > {max_year}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Compile `options` into the engine-facing configuration.
///
/// Bound ordering is checked for every mask type, so a shape error in a
/// field the active type ignores still fails fast. The structural fields
/// (`placeholder_char`, `lazy`, `overwrite`) are fixed regardless of input.
pub fn compile(options: &MaskOptions) -> Result<CompiledConfig, ConfigError> {
    check_bounds(options)?;

    let mode = resolve_mode(options);
    let (mask, pattern) = match mode {
        Mode::Pattern => (pattern_source(options), None),
        Mode::Regexp => (regex_source(options)?, None),
        Mode::DateBuiltin => (pattern_source(options), Some(DATE_PATTERN.to_string())),
        Mode::DateExternal => (MaskSource::Date, None),
        Mode::Number => (MaskSource::Number(NumberMask::from_options(options)), None),
    };

    Ok(CompiledConfig {
        mode,
        mask,
        placeholder_char: PLACEHOLDER_CHAR,
        lazy: false,
        overwrite: true,
        pattern,
        blocks: resolve_blocks(options),
    })
}

/// Pick the compiler branch. A caller-supplied block set switches the date
/// type into delegated control; the two date strategies never merge.
fn resolve_mode(options: &MaskOptions) -> Mode {
    match options.mask_type {
        MaskType::Pattern => Mode::Pattern,
        MaskType::Regexp => Mode::Regexp,
        MaskType::Date if options.blocks.is_some() => Mode::DateExternal,
        MaskType::Date => Mode::DateBuiltin,
        MaskType::Number => Mode::Number,
    }
}

/// A supplied block set replaces the built-in one entirely; there is no
/// per-token merge.
fn resolve_blocks(options: &MaskOptions) -> BlockSet {
    match &options.blocks {
        Some(blocks) => blocks.clone(),
        None => blocks::builtin_blocks(options),
    }
}

fn pattern_source(options: &MaskOptions) -> MaskSource {
    match options.mask.as_deref() {
        Some(mask) if !mask.is_empty() => MaskSource::Pattern(mask.to_string()),
        _ => MaskSource::Any,
    }
}

fn regex_source(options: &MaskOptions) -> Result<MaskSource, ConfigError> {
    let Some(mask) = options.mask.as_deref().filter(|mask| !mask.is_empty()) else {
        return Ok(MaskSource::Any);
    };
    // Multiline to match the engine's line-by-line semantics; iteration over
    // matches stands in for a global flag.
    match Regex::new(&format!("(?m){mask}")) {
        Ok(regex) => Ok(MaskSource::Regex(regex)),
        Err(err) => Err(ConfigError::InvalidRegex {
            source: mask.to_string(),
            message: err.to_string(),
        }),
    }
}

/// The engine's behavior on inverted ranges is undefined, so out-of-order
/// bound pairs are rejected here no matter which type is active.
fn check_bounds(options: &MaskOptions) -> Result<(), ConfigError> {
    match (options.from, options.to) {
        (Some(from), Some(to)) if from > to => {
            return Err(ConfigError::InvertedRange { from, to });
        }
        _ => {}
    }
    match (options.min, options.max) {
        (Some(min), Some(max)) if min > max => {
            return Err(ConfigError::InvertedNumberBounds { min, max });
        }
        _ => {}
    }
    match (options.min_year, options.max_year) {
        (Some(min_year), Some(max_year)) if min_year > max_year => {
            return Err(ConfigError::InvertedYearBounds { min_year, max_year });
        }
        _ => {}
    }
    Ok(())
}

//! Engine-facing configuration data produced by the compiler.

use regex::Regex;

use crate::blocks::{BlockSet, NumberMask};

/// Placeholder character rendered for unfilled mask positions.
pub const PLACEHOLDER_CHAR: char = '_';

/// Fixed literal template for the built-in date mode. Backtick-escaped
/// separators render but are not editable.
pub const DATE_PATTERN: &str = "DD{.}`MM{.}`YYYY HH:mm";

/// Resolved mask source handed to the engine.
#[derive(Debug, Clone)]
pub enum MaskSource {
    /// Literal pattern in the engine's block-placeholder syntax.
    Pattern(String),
    /// Compiled multiline regular expression.
    Regex(Regex),
    /// Semantic calendar-date marker; structure comes entirely from blocks.
    Date,
    /// Whole-field numeric mask; bounds live at the top level rather than
    /// inside a block because the field is masked as one number.
    Number(NumberMask),
    /// Match-everything fallback when no mask is configured, so the engine
    /// is always constructible.
    Any,
}

impl PartialEq for MaskSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MaskSource::Pattern(a), MaskSource::Pattern(b)) => a == b,
            (MaskSource::Regex(a), MaskSource::Regex(b)) => a.as_str() == b.as_str(),
            (MaskSource::Date, MaskSource::Date) => true,
            (MaskSource::Number(a), MaskSource::Number(b)) => a == b,
            (MaskSource::Any, MaskSource::Any) => true,
            _ => false,
        }
    }
}

/// Which compiler branch produced a configuration.
///
/// The mode also carries the two reconciliation quirks the observed engine
/// integrations disagree on, so they stay explicit per mode instead of being
/// inferred as universal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pattern,
    Regexp,
    /// Date with the built-in block set and the fixed [`DATE_PATTERN`].
    DateBuiltin,
    /// Date deferring entirely to caller-supplied blocks.
    DateExternal,
    Number,
}

impl Mode {
    /// Whether a host value change resyncs the engine from the host control.
    ///
    /// Numeric masks treat the engine as the source of truth immediately and
    /// skip the engine←host step.
    pub fn resyncs_engine_value(self) -> bool {
        !matches!(self, Mode::Number)
    }

    /// Whether reconfiguration goes through the transient placeholder-hidden
    /// step before the full configuration is applied.
    pub fn uses_lazy_transition(self) -> bool {
        !matches!(self, Mode::DateExternal)
    }
}

/// The compiled, engine-facing configuration. Immutable per compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledConfig {
    pub mode: Mode,
    pub mask: MaskSource,
    /// Always `'_'`.
    pub placeholder_char: char,
    /// Always `false`: placeholders render eagerly.
    pub lazy: bool,
    /// Always `true`: typing over a full mask overwrites.
    pub overwrite: bool,
    /// Fixed literal template, present only for [`Mode::DateBuiltin`].
    pub pattern: Option<String>,
    pub blocks: BlockSet,
}

/// A partial or full engine reconfiguration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    /// Toggle placeholder-hidden mode; every other option keeps its value.
    Lazy(bool),
    /// Replace the whole configuration.
    Full(CompiledConfig),
}

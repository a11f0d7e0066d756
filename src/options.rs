//! Declarative mask options, the externally settable configuration surface.

use crate::blocks::BlockSet;

/// Selects which compiled-configuration branch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskType {
    /// Literal pattern string in the engine's block-placeholder syntax.
    #[default]
    Pattern,
    /// Regular expression source.
    Regexp,
    /// Calendar date/time.
    Date,
    /// Whole-field decimal number.
    Number,
}

/// The full declarative option set.
///
/// Exactly one [`MaskType`] is active at a time; fields irrelevant to the
/// active type are ignored by the compiler. Ordering constraints between
/// bound pairs (`from`/`to`, `min`/`max`, `min_year`/`max_year`) are checked
/// by [`compile`](crate::compile) for every type.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskOptions {
    pub mask_type: MaskType,
    /// Pattern text (`Pattern`/`Date`) or regex source (`Regexp`).
    pub mask: Option<String>,
    /// When present, replaces the built-in block set wholesale.
    pub blocks: Option<BlockSet>,

    // Numeric family, consumed by the `N` block and the `Number` type.
    pub scale: Option<u32>,
    pub thousands_separator: Option<char>,
    pub radix: Option<char>,
    /// Accepted fraction-separator characters, mapped onto `radix`.
    pub map_to_radix: Vec<char>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub signed: bool,
    pub normalize_zeros: bool,
    pub pad_fractional_zeros: bool,

    // Date bounds, consumed by the `YYYY` block.
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,

    // Range block bounds, consumed by the `NR` block.
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub overwrite_on_full: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions {
            mask_type: MaskType::default(),
            mask: None,
            blocks: None,
            scale: None,
            thousands_separator: None,
            radix: None,
            map_to_radix: Vec::new(),
            min: None,
            max: None,
            signed: false,
            // Leading/trailing zero normalization is on unless switched off.
            normalize_zeros: true,
            pad_fractional_zeros: false,
            min_year: None,
            max_year: None,
            from: None,
            to: None,
            overwrite_on_full: false,
        }
    }
}

impl MaskOptions {
    /// Options for `mask_type` with everything else defaulted.
    pub fn for_type(mask_type: MaskType) -> Self {
        MaskOptions {
            mask_type,
            ..MaskOptions::default()
        }
    }
}

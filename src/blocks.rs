//! Built-in block set: named sub-masks bound to tokens inside a pattern.

use std::collections::BTreeMap;

use phf::{Map, phf_map};

use crate::options::MaskOptions;

/// Default `YYYY` bounds, wide enough to be a practical no-op constraint.
pub const YEAR_MIN_DEFAULT: i64 = 1000;
pub const YEAR_MAX_DEFAULT: i64 = 9999;

/// Numeric radix used when the options leave it unset.
pub const RADIX_DEFAULT: char = '.';

/// A whole-field or per-block decimal number mask.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberMask {
    pub radix: char,
    pub thousands_separator: Option<char>,
    pub map_to_radix: Vec<char>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub scale: Option<u32>,
    pub signed: bool,
    pub normalize_zeros: bool,
    pub pad_fractional_zeros: bool,
}

impl NumberMask {
    /// Lift the numeric family of fields out of the options.
    pub fn from_options(options: &MaskOptions) -> Self {
        NumberMask {
            radix: options.radix.unwrap_or(RADIX_DEFAULT),
            thousands_separator: options.thousands_separator,
            map_to_radix: options.map_to_radix.clone(),
            min: options.min,
            max: options.max,
            scale: options.scale,
            signed: options.signed,
            normalize_zeros: options.normalize_zeros,
            pad_fractional_zeros: options.pad_fractional_zeros,
        }
    }
}

/// One named sub-mask.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockDef {
    /// Inclusive integer range `[from, to]`.
    Range {
        from: i64,
        to: i64,
        /// Rendered width; `None` lets the engine derive it.
        max_length: Option<u32>,
        /// Whether a full block is overwritten by further typing.
        overwrite: bool,
    },
    /// Bounded decimal number.
    Number(NumberMask),
}

/// Token name → block descriptor, deterministically ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockSet(BTreeMap<String, BlockDef>);

impl BlockSet {
    pub fn new() -> Self {
        BlockSet(BTreeMap::new())
    }

    pub fn insert(&mut self, token: impl Into<String>, def: BlockDef) {
        self.0.insert(token.into(), def);
    }

    pub fn get(&self, token: &str) -> Option<&BlockDef> {
        self.0.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BlockDef)> {
        self.0.iter().map(|(token, def)| (token.as_str(), def))
    }
}

impl FromIterator<(String, BlockDef)> for BlockSet {
    fn from_iter<I: IntoIterator<Item = (String, BlockDef)>>(iter: I) -> Self {
        BlockSet(iter.into_iter().collect())
    }
}

struct FixedRange {
    from: i64,
    to: i64,
    max_length: Option<u32>,
}

/// Date/time tokens whose ranges never depend on the options.
const FIXED_RANGES: Map<&'static str, FixedRange> = phf_map! {
    "DD" => FixedRange { from: 1, to: 31, max_length: Some(2) },
    "MM" => FixedRange { from: 1, to: 12, max_length: Some(2) },
    "HH" => FixedRange { from: 0, to: 23, max_length: Some(2) },
    "mm" => FixedRange { from: 0, to: 59, max_length: Some(2) },
    "ss" => FixedRange { from: 0, to: 59, max_length: None },
};

/// Build the built-in block set from the current options.
///
/// `YYYY`, `N` and `NR` read their bounds from the options, so the set is
/// rebuilt on every compilation and bound edits take effect without
/// reattachment. `NR` is emitted only when both of its bounds are configured.
pub fn builtin_blocks(options: &MaskOptions) -> BlockSet {
    let mut blocks = BlockSet::new();

    for (token, range) in FIXED_RANGES.entries() {
        blocks.insert(
            *token,
            BlockDef::Range {
                from: range.from,
                to: range.to,
                max_length: range.max_length,
                overwrite: false,
            },
        );
    }

    blocks.insert(
        "YYYY",
        BlockDef::Range {
            from: options.min_year.unwrap_or(YEAR_MIN_DEFAULT),
            to: options.max_year.unwrap_or(YEAR_MAX_DEFAULT),
            max_length: Some(4),
            overwrite: false,
        },
    );

    blocks.insert("N", BlockDef::Number(NumberMask::from_options(options)));

    if let (Some(from), Some(to)) = (options.from, options.to) {
        blocks.insert(
            "NR",
            BlockDef::Range {
                from,
                to,
                max_length: Some(to.to_string().len() as u32),
                overwrite: options.overwrite_on_full,
            },
        );
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tokens_have_calendar_ranges() {
        let blocks = builtin_blocks(&MaskOptions::default());
        assert_eq!(
            blocks.get("DD"),
            Some(&BlockDef::Range {
                from: 1,
                to: 31,
                max_length: Some(2),
                overwrite: false
            })
        );
        assert_eq!(
            blocks.get("MM"),
            Some(&BlockDef::Range {
                from: 1,
                to: 12,
                max_length: Some(2),
                overwrite: false
            })
        );
        assert_eq!(
            blocks.get("HH"),
            Some(&BlockDef::Range {
                from: 0,
                to: 23,
                max_length: Some(2),
                overwrite: false
            })
        );
        assert_eq!(
            blocks.get("mm"),
            Some(&BlockDef::Range {
                from: 0,
                to: 59,
                max_length: Some(2),
                overwrite: false
            })
        );
        // `ss` has no fixed rendered width.
        assert_eq!(
            blocks.get("ss"),
            Some(&BlockDef::Range {
                from: 0,
                to: 59,
                max_length: None,
                overwrite: false
            })
        );
    }

    #[test]
    fn year_defaults_are_wide() {
        let blocks = builtin_blocks(&MaskOptions::default());
        assert_eq!(
            blocks.get("YYYY"),
            Some(&BlockDef::Range {
                from: 1000,
                to: 9999,
                max_length: Some(4),
                overwrite: false
            })
        );
    }

    #[test]
    fn year_bounds_come_from_options() {
        let options = MaskOptions {
            min_year: Some(2000),
            max_year: Some(2030),
            ..MaskOptions::default()
        };
        let blocks = builtin_blocks(&options);
        assert_eq!(
            blocks.get("YYYY"),
            Some(&BlockDef::Range {
                from: 2000,
                to: 2030,
                max_length: Some(4),
                overwrite: false
            })
        );
    }

    #[test]
    fn number_block_reads_numeric_options() {
        let options = MaskOptions {
            scale: Some(2),
            radix: Some(','),
            map_to_radix: vec!['.', ','],
            min: Some(0.0),
            max: Some(100.0),
            signed: true,
            ..MaskOptions::default()
        };
        let blocks = builtin_blocks(&options);
        let Some(BlockDef::Number(number)) = blocks.get("N") else {
            panic!("N must be a number block");
        };
        assert_eq!(number.scale, Some(2));
        assert_eq!(number.radix, ',');
        assert_eq!(number.map_to_radix, vec!['.', ',']);
        assert_eq!(number.min, Some(0.0));
        assert_eq!(number.max, Some(100.0));
        assert!(number.signed);
        assert!(number.normalize_zeros);
        assert!(!number.pad_fractional_zeros);
    }

    #[test]
    fn range_block_needs_both_bounds() {
        let mut options = MaskOptions {
            from: Some(1),
            ..MaskOptions::default()
        };
        assert!(!builtin_blocks(&options).contains("NR"));

        options.to = Some(250);
        options.overwrite_on_full = true;
        let blocks = builtin_blocks(&options);
        assert_eq!(
            blocks.get("NR"),
            Some(&BlockDef::Range {
                from: 1,
                to: 250,
                max_length: Some(3),
                overwrite: true
            })
        );
    }
}

//! Validation messages derived from engine parse state.

use itertools::Itertools;

/// The value is non-empty but does not satisfy every mandatory block.
pub const INCOMPLETE_MESSAGE: &str = "You need to fill value according to the mask";

/// The field is required and the value is empty.
pub const EMPTY_MESSAGE: &str = "Value cannot be empty";

/// Derive the validation message for the given engine state.
///
/// Two rules compose the result, evaluated in order and joined with `;`:
/// incomplete non-empty input, then empty input while required. `None`
/// means the value is valid; a genuinely empty, non-required field is
/// always valid regardless of completeness.
pub fn validation_message(is_complete: bool, raw_input: &str, required: bool) -> Option<String> {
    let mut messages = Vec::new();

    if !is_complete && !raw_input.is_empty() {
        messages.push(INCOMPLETE_MESSAGE);
    }
    if raw_input.is_empty() && required {
        messages.push(EMPTY_MESSAGE);
    }

    if messages.is_empty() {
        None
    } else {
        Some(messages.iter().join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_field_reports_only_emptiness() {
        // Incomplete, but the fill-mask rule needs non-empty input.
        assert_eq!(
            validation_message(false, "", true),
            Some("Value cannot be empty".into())
        );
    }

    #[test]
    fn partial_input_reports_only_the_mask_rule() {
        assert_eq!(
            validation_message(false, "12", false),
            Some("You need to fill value according to the mask".into())
        );
        // Required plays no part while input is non-empty.
        assert_eq!(
            validation_message(false, "12", true),
            Some("You need to fill value according to the mask".into())
        );
    }

    #[test]
    fn empty_optional_field_is_valid() {
        assert_eq!(validation_message(false, "", false), None);
        assert_eq!(validation_message(true, "", false), None);
    }

    #[test]
    fn complete_input_is_valid() {
        assert_eq!(validation_message(true, "01.01.2020", true), None);
    }
}

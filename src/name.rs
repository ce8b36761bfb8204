//! Cardholder name display formatting.

use crate::mask::NAME_PLACEHOLDER;

/// Formats the cardholder name for display.
///
/// An empty name renders as the fixed `"FULL NAME"` label; any other value
/// passes through unchanged - no trimming, casing, or length limiting.
///
/// # Example
///
/// ```
/// use cc_display::name::format_name;
///
/// assert_eq!(format_name(""), "FULL NAME");
/// assert_eq!(format_name("Jane Doe"), "Jane Doe");
/// ```
pub fn format_name(raw: &str) -> String {
    if raw.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        raw.to_string()
    }
}

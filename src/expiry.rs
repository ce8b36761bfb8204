//! Expiry date display formatting.
//!
//! Normalizes a raw month/year string into the fixed `MM/YY[YY]` display
//! shape, masking positions the user has not typed yet. Unparseable input
//! degrades to the fully-masked placeholder rather than erroring.
//!
//! # Example
//!
//! ```
//! use cc_display::expiry::format_expiry;
//!
//! assert_eq!(format_expiry("1225"), "12/25");
//! assert_eq!(format_expiry("12/25"), "12/25");
//! assert_eq!(format_expiry("1"), "1•/••");
//! assert_eq!(format_expiry(""), "••/••");
//! assert_eq!(format_expiry("13/ab"), "••/••");
//! ```

use crate::mask::{pad_to_width, EXPIRY_PLACEHOLDER};

/// Month digits shown before the `/`.
const MONTH_DIGITS: usize = 2;

/// Maximum digits in a formatted expiry: 2 for the month plus up to 4 for
/// the year.
const MAX_EXPIRY_DIGITS: usize = 6;

/// Formats a raw expiry string for display.
///
/// A single `/` separator is removed before interpretation, so `"12/25"`
/// and `"1225"` are equivalent. Input containing anything but digits after
/// that (including a second `/`) returns the placeholder. Short input is
/// right-padded with the mask glyph to at least four positions; digits past
/// six are dropped.
///
/// Idempotent on its own placeholder: `format_expiry("••/••")` is `"••/••"`.
pub fn format_expiry(raw: &str) -> String {
    if raw.is_empty() {
        return EXPIRY_PLACEHOLDER.to_string();
    }

    // Remove one '/' if present; a second one fails the digit check below.
    let cleaned: String = match raw.split_once('/') {
        Some((month, year)) => {
            let mut s = String::with_capacity(raw.len() - 1);
            s.push_str(month);
            s.push_str(year);
            s
        }
        None => raw.to_string(),
    };

    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return EXPIRY_PLACEHOLDER.to_string();
    }

    let mut chars: Vec<char> = cleaned.chars().collect();
    pad_to_width(&mut chars, MONTH_DIGITS + 2);

    let month: String = chars[..MONTH_DIGITS].iter().collect();
    let year_end = chars.len().min(MAX_EXPIRY_DIGITS);
    let year: String = chars[MONTH_DIGITS..year_end].iter().collect();

    format!("{}/{}", month, year)
}

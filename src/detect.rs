//! Card network detection using BIN/IIN prefix matching.
//!
//! The Bank Identification Number (BIN), also known as Issuer Identification
//! Number (IIN), is the leading digit group of a card number. This module
//! pattern-matches on those prefixes to classify a raw number into one of
//! the display networks.
//!
//! Detection is total: empty input, non-numeric input, and unmatched
//! prefixes all classify as [`CardType::Unknown`] rather than erroring.

use crate::CardType;

/// Classifies a raw card number string into a network.
///
/// Separator characters (spaces, dashes, anything non-digit) are ignored;
/// classification looks only at the leading digits. An empty string or a
/// string with no recognizable prefix yields `CardType::Unknown`, whose
/// display width is 16.
///
/// # Example
///
/// ```
/// use cc_display::detect::detect_type;
/// use cc_display::CardType;
///
/// assert_eq!(detect_type("4111111111111111"), CardType::Visa);
/// assert_eq!(detect_type("378282246310005"), CardType::Amex);
/// assert_eq!(detect_type(""), CardType::Unknown);
/// assert_eq!(detect_type("9999"), CardType::Unknown);
/// ```
#[inline]
pub fn detect_type(number: &str) -> CardType {
    // Only the first 4 digits are ever needed to discriminate.
    let mut prefix = [0u8; 4];
    let mut len = 0;
    for c in number.chars() {
        if let Some(d) = c.to_digit(10) {
            prefix[len] = d as u8;
            len += 1;
            if len == prefix.len() {
                break;
            }
        }
    }

    detect_from_digits(&prefix[..len])
}

/// Classifies from a slice of leading digits (0-9).
///
/// More specific patterns come before general ones where ranges overlap.
#[inline]
pub fn detect_from_digits(digits: &[u8]) -> CardType {
    match digits {
        // Mastercard: 51-55 or 2221-2720
        [5, 1..=5, ..] => CardType::Mastercard,
        [2, 2, 2, 1..=9, ..] => CardType::Mastercard, // 2221-2229
        [2, 2, 3..=9, _, ..] => CardType::Mastercard, // 2230-2299
        [2, 3..=6, _, _, ..] => CardType::Mastercard, // 2300-2699
        [2, 7, 0..=1, _, ..] => CardType::Mastercard, // 2700-2719
        [2, 7, 2, 0, ..] => CardType::Mastercard,     // 2720

        // American Express: 34 or 37
        [3, 4, ..] | [3, 7, ..] => CardType::Amex,

        // Visa: starts with 4
        [4, ..] => CardType::Visa,

        // Discover: 6011, 644-649, 65
        [6, 0, 1, 1, ..] => CardType::Discover,
        [6, 4, 4..=9, ..] => CardType::Discover,
        [6, 5, ..] => CardType::Discover,

        _ => CardType::Unknown,
    }
}

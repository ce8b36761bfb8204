//! Card number display formatting.
//!
//! Renders a raw, possibly-partial number at the fixed width its network
//! implies: over-long input is truncated, missing positions are filled with
//! the mask glyph, and grouping separators are inserted at the network's
//! conventional offsets.
//!
//! # Grouping conventions
//!
//! - **Visa/Mastercard/Discover/unknown** (16 positions): `XXXX XXXX XXXX XXXX`
//! - **American Express** (15 positions): `XXXX XXXXXX XXXXX`
//!
//! # Example
//!
//! ```
//! use cc_display::format::format_number;
//! use cc_display::CardType;
//!
//! assert_eq!(
//!     format_number(Some("4111111111111111"), CardType::Visa),
//!     "4111 1111 1111 1111"
//! );
//! assert_eq!(
//!     format_number(Some("378282246310005"), CardType::Amex),
//!     "3782 822463 10005"
//! );
//! assert_eq!(
//!     format_number(None, CardType::Unknown),
//!     "•••• •••• •••• ••••"
//! );
//! ```

use crate::mask::pad_to_width;
use crate::CardType;

/// Separator inserted between digit groups.
const SEPARATOR: char = ' ';

/// Returns the digit grouping pattern for a network.
#[inline]
const fn grouping_for_type(card_type: CardType) -> &'static [usize] {
    match card_type {
        // Amex: 4-6-5
        CardType::Amex => &[4, 6, 5],
        // Standard: groups of 4
        _ => &[4, 4, 4, 4],
    }
}

/// Returns the number of grouping separators inserted for a network.
///
/// Useful for callers sizing fixed-width layouts: the formatted number is
/// always `card_type.width() + separator_count(card_type)` characters long.
#[inline]
pub const fn separator_count(card_type: CardType) -> usize {
    grouping_for_type(card_type).len() - 1
}

/// Formats a raw card number for display at its network's fixed width.
///
/// The raw string is taken as-is (no digit filtering): characters beyond
/// the width are dropped, missing positions are right-padded with the mask
/// glyph, and separators are inserted per the network's grouping. Total -
/// any input, including `None`, produces a string of deterministic shape.
pub fn format_number(number: Option<&str>, card_type: CardType) -> String {
    let width = card_type.width();

    let mut chars: Vec<char> = match number {
        Some(raw) => raw.chars().take(width).collect(),
        None => Vec::with_capacity(width),
    };
    pad_to_width(&mut chars, width);

    let groups = grouping_for_type(card_type);
    let mut result = String::with_capacity(width + groups.len() - 1);
    let mut pos = 0;

    for (i, &group_size) in groups.iter().enumerate() {
        if i > 0 {
            result.push(SEPARATOR);
        }
        for c in &chars[pos..pos + group_size] {
            result.push(*c);
        }
        pos += group_size;
    }

    result
}

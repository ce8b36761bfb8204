//! Mask glyph and field placeholders.
//!
//! Every field formatter substitutes the bullet glyph for digits it does not
//! have, so absent or partial input still renders at its full fixed shape.
//! The placeholder constants here are the fully-masked renders a card face
//! shows before the user has typed anything.

/// The filler glyph substituted for unknown or absent digits.
pub const MASK_CHAR: char = '•';

/// Fully-masked expiry placeholder.
pub const EXPIRY_PLACEHOLDER: &str = "••/••";

/// Fully-masked security code placeholder.
pub const CVC_PLACEHOLDER: &str = "•••";

/// Placeholder label shown for an empty cardholder name.
pub const NAME_PLACEHOLDER: &str = "FULL NAME";

/// Returns a string of `n` mask glyphs.
#[inline]
pub fn mask_fill(n: usize) -> String {
    MASK_CHAR.to_string().repeat(n)
}

/// Right-pads `chars` with mask glyphs until it is `width` long.
///
/// Already-long-enough input is left untouched.
#[inline]
pub(crate) fn pad_to_width(chars: &mut Vec<char>, width: usize) {
    while chars.len() < width {
        chars.push(MASK_CHAR);
    }
}

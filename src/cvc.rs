//! Security code (CVC/CVV/CID) display formatting.
//!
//! The code is clamped to the four positions a card face ever shows; an
//! absent code renders as the fully-masked placeholder. No digit
//! enforcement happens here - the engine displays what it was given.

use crate::mask::CVC_PLACEHOLDER;

/// Maximum characters a security code renders.
const MAX_CVC_CHARS: usize = 4;

/// Formats a raw security code for display.
///
/// `None` yields the three-glyph placeholder `"•••"`; anything longer than
/// four characters is truncated to four; everything else passes through
/// unchanged.
///
/// # Example
///
/// ```
/// use cc_display::cvc::format_cvc;
///
/// assert_eq!(format_cvc(None), "•••");
/// assert_eq!(format_cvc(Some("123")), "123");
/// assert_eq!(format_cvc(Some("12345")), "1234");
/// ```
pub fn format_cvc(raw: Option<&str>) -> String {
    match raw {
        None => CVC_PLACEHOLDER.to_string(),
        Some(cvc) => cvc.chars().take(MAX_CVC_CHARS).collect(),
    }
}

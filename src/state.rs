//! Display state: raw field inputs, detected network, formatted output.
//!
//! `CardDisplayState` holds the network classification for the lifetime of
//! a display session. It is recomputed exactly once per number-input change
//! and is otherwise stable - name, expiry, and cvc changes never retrigger
//! detection. The four field formatters are pure functions of the state and
//! the current inputs, combined here by [`CardDisplayState::render`].

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cvc::format_cvc;
use crate::detect::detect_type;
use crate::expiry::format_expiry;
use crate::format::format_number;
use crate::mask::mask_fill;
use crate::name::format_name;
use crate::CardType;

/// Raw, unvalidated field values as received from the input layer.
///
/// `Default` gives the all-absent state, which renders as the four
/// placeholders. The number and security code are sensitive; the struct
/// zeroes its buffers on drop and masks them in `Debug` output.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct CardFields {
    /// Raw card number, `None` when the user has not typed one.
    pub number: Option<String>,
    /// Cardholder name, possibly empty.
    pub name: String,
    /// Raw expiry, possibly empty, optionally containing one `/`.
    pub expiry: String,
    /// Raw security code, `None` when absent.
    pub cvc: Option<String>,
}

impl CardFields {
    /// Creates the all-absent field set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for CardFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask the sensitive fields in debug output
        f.debug_struct("CardFields")
            .field(
                "number",
                &self.number.as_deref().map(|n| mask_fill(n.chars().count())),
            )
            .field("name", &self.name)
            .field("expiry", &self.expiry)
            .field(
                "cvc",
                &self.cvc.as_deref().map(|c| mask_fill(c.chars().count())),
            )
            .finish()
    }
}

/// The four display-ready strings plus the network they were rendered for.
///
/// Each field is total: always produced, always of deterministic shape
/// given its inputs. The rendering layer uses `card_type` to select
/// network-specific styling and imagery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedFields {
    /// Padded, masked, grouped number, e.g. `"4111 1111 1111 1111"`.
    pub number: String,
    /// Cardholder name or the `"FULL NAME"` placeholder.
    pub name: String,
    /// Expiry in `MM/YY[YY]` shape, masked where not yet typed.
    pub expiry: String,
    /// Security code clamped to four characters, or `"•••"`.
    pub cvc: String,
    /// The network the number field was formatted for.
    pub card_type: CardType,
}

impl fmt::Display for FormattedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.card_type, self.number, self.expiry)
    }
}

/// Network classification state for one display session.
///
/// Starts at `Unknown` (width 16) and transitions on every number-input
/// change via the detector; a self-transition (`Unknown` to `Unknown`) is
/// normal. A caller-supplied type override bypasses detection entirely,
/// fixing the displayed network until cleared.
///
/// # Example
///
/// ```
/// use cc_display::{CardDisplayState, CardType};
///
/// let mut state = CardDisplayState::new();
/// assert_eq!(state.card_type(), CardType::Unknown);
/// assert_eq!(state.width(), 16);
///
/// state.set_number(Some("378282246310005"));
/// assert_eq!(state.card_type(), CardType::Amex);
/// assert_eq!(state.width(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardDisplayState {
    /// Last detector result; kept current even while overridden.
    detected: CardType,
    /// Caller-supplied network, displayed in place of the detected one.
    override_type: Option<CardType>,
}

impl CardDisplayState {
    /// Creates a fresh session state: `Unknown`, width 16.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with the network fixed by the caller.
    ///
    /// Detection still runs on number changes but the displayed type stays
    /// `card_type` until [`clear_type_override`](Self::clear_type_override).
    pub fn with_type(card_type: CardType) -> Self {
        Self {
            detected: CardType::Unknown,
            override_type: Some(card_type),
        }
    }

    /// Returns the network currently in effect (override wins).
    #[inline]
    pub fn card_type(&self) -> CardType {
        self.override_type.unwrap_or(self.detected)
    }

    /// Returns the display width implied by the current network.
    #[inline]
    pub fn width(&self) -> usize {
        self.card_type().width()
    }

    /// Observes a number-input change and reclassifies.
    ///
    /// This is the only transition trigger; `None` and `""` both reset the
    /// detected network to `Unknown`.
    pub fn set_number(&mut self, number: Option<&str>) {
        self.detected = match number {
            Some(raw) => detect_type(raw),
            None => CardType::Unknown,
        };
    }

    /// Fixes the displayed network, bypassing detection.
    pub fn set_type_override(&mut self, card_type: CardType) {
        self.override_type = Some(card_type);
    }

    /// Removes the override; the last detected network takes effect again.
    pub fn clear_type_override(&mut self) {
        self.override_type = None;
    }

    /// Formats all four fields against the current state.
    ///
    /// Pure with respect to the state: rendering never mutates it, and the
    /// number field is formatted at the width of the network in effect.
    pub fn render(&self, fields: &CardFields) -> FormattedFields {
        let card_type = self.card_type();
        FormattedFields {
            number: format_number(fields.number.as_deref(), card_type),
            name: format_name(&fields.name),
            expiry: format_expiry(&fields.expiry),
            cvc: format_cvc(fields.cvc.as_deref()),
            card_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visa_fields() -> CardFields {
        CardFields {
            number: Some("4111111111111111".to_string()),
            name: "Jane Doe".to_string(),
            expiry: "1225".to_string(),
            cvc: Some("123".to_string()),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CardDisplayState::new();
        assert_eq!(state.card_type(), CardType::Unknown);
        assert_eq!(state.width(), 16);
    }

    #[test]
    fn test_transition_on_number_change() {
        let mut state = CardDisplayState::new();

        state.set_number(Some("4111111111111111"));
        assert_eq!(state.card_type(), CardType::Visa);

        state.set_number(Some("378282246310005"));
        assert_eq!(state.card_type(), CardType::Amex);
        assert_eq!(state.width(), 15);

        // Self-transition back to unknown
        state.set_number(Some("junk"));
        assert_eq!(state.card_type(), CardType::Unknown);
        state.set_number(None);
        assert_eq!(state.card_type(), CardType::Unknown);
    }

    #[test]
    fn test_override_bypasses_detection() {
        let mut state = CardDisplayState::with_type(CardType::Discover);
        state.set_number(Some("4111111111111111"));
        assert_eq!(state.card_type(), CardType::Discover);

        // Clearing the override reveals the last detected network
        state.clear_type_override();
        assert_eq!(state.card_type(), CardType::Visa);
    }

    #[test]
    fn test_render_full_fields() {
        let mut state = CardDisplayState::new();
        let fields = visa_fields();
        state.set_number(fields.number.as_deref());

        let out = state.render(&fields);
        assert_eq!(out.number, "4111 1111 1111 1111");
        assert_eq!(out.name, "Jane Doe");
        assert_eq!(out.expiry, "12/25");
        assert_eq!(out.cvc, "123");
        assert_eq!(out.card_type, CardType::Visa);
    }

    #[test]
    fn test_render_default_fields_is_all_placeholders() {
        let state = CardDisplayState::new();
        let out = state.render(&CardFields::default());
        assert_eq!(out.number, "•••• •••• •••• ••••");
        assert_eq!(out.name, "FULL NAME");
        assert_eq!(out.expiry, "••/••");
        assert_eq!(out.cvc, "•••");
        assert_eq!(out.card_type, CardType::Unknown);
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let mut state = CardDisplayState::new();
        state.set_number(Some("4111111111111111"));
        let before = state;

        // Rendering amex-prefixed input without a number change observes
        // the stale classification, as specified
        let fields = CardFields {
            number: Some("378282246310005".to_string()),
            name: String::new(),
            expiry: String::new(),
            cvc: None,
        };
        let out = state.render(&fields);
        assert_eq!(out.card_type, CardType::Visa);
        assert_eq!(state, before);
    }

    #[test]
    fn test_debug_masks_sensitive_fields() {
        let fields = visa_fields();
        let debug = format!("{:?}", fields);
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("\"123\""));
        assert!(debug.contains("Jane Doe"));
    }

    #[test]
    fn test_formatted_display_line() {
        let state = CardDisplayState::new();
        let line = state.render(&CardFields::default()).to_string();
        assert!(line.starts_with("unknown"));
        assert!(line.contains("••/••"));
    }
}

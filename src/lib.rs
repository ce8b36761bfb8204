//! # cc_display
//!
//! Credit card display formatting for Rust.
//!
//! Turns raw, possibly-partial card field input (number, name, expiry,
//! security code) into fixed-width, partially-masked, display-ready
//! strings, and classifies the card network from the number so a rendering
//! layer can pick the right styling and imagery.
//!
//! ## Features
//!
//! - Network detection from BIN prefixes (visa, mastercard, amex, discover)
//! - Fixed-width number rendering with mask padding and brand grouping
//! - Expiry, security-code, and name placeholders for partial input
//! - Fail-soft throughout: every formatter is total, nothing ever errors
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_display::{CardDisplayState, CardFields, CardType};
//!
//! let mut state = CardDisplayState::new();
//! let mut fields = CardFields::new();
//!
//! // A fresh card face renders as all placeholders
//! let blank = state.render(&fields);
//! assert_eq!(blank.number, "•••• •••• •••• ••••");
//! assert_eq!(blank.name, "FULL NAME");
//! assert_eq!(blank.expiry, "••/••");
//! assert_eq!(blank.cvc, "•••");
//!
//! // The user types; the state observes each number change
//! fields.number = Some("4111111111111111".to_string());
//! state.set_number(fields.number.as_deref());
//!
//! let out = state.render(&fields);
//! assert_eq!(out.card_type, CardType::Visa);
//! assert_eq!(out.number, "4111 1111 1111 1111");
//! ```
//!
//! ## Partial input
//!
//! ```rust
//! use cc_display::{CardDisplayState, CardFields};
//!
//! let mut state = CardDisplayState::new();
//! let fields = CardFields {
//!     number: Some("378282".to_string()),
//!     name: String::new(),
//!     expiry: "12".to_string(),
//!     cvc: None,
//! };
//! state.set_number(fields.number.as_deref());
//!
//! let out = state.render(&fields);
//! // Amex width is 15, grouped 4-6-5, missing digits masked
//! assert_eq!(out.number, "3782 82•••• •••••");
//! assert_eq!(out.expiry, "12/••");
//! ```
//!
//! ## Forcing a network
//!
//! ```rust
//! use cc_display::{CardDisplayState, CardFields, CardType};
//!
//! // A caller-supplied type bypasses detection, e.g. to preview styling
//! let state = CardDisplayState::with_type(CardType::Amex);
//! let out = state.render(&CardFields::new());
//! assert_eq!(out.card_type, CardType::Amex);
//! assert_eq!(out.number, "•••• •••••• •••••");
//! ```
//!
//! ## Field widths
//!
//! | Network | Width | Grouping |
//! |---------|-------|----------|
//! | Visa | 16 | 4-4-4-4 |
//! | Mastercard | 16 | 4-4-4-4 |
//! | American Express | 15 | 4-6-5 |
//! | Discover | 16 | 4-4-4-4 |
//! | unknown | 16 | 4-4-4-4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for `CardType` and `FormattedFields` |
//!
//! ## Design
//!
//! Every formatter substitutes a masked placeholder for input it cannot
//! interpret instead of returning an error; "no network matched" is a
//! normal value, not a failure. Raw inputs (`CardFields`) zero their
//! buffers on drop and mask the number and security code in `Debug`
//! output. No unsafe code (`#![deny(unsafe_code)]`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod cvc;
pub mod detect;
pub mod expiry;
pub mod format;
pub mod mask;
pub mod name;
pub mod state;

// Re-export main types at crate root
pub use card::CardType;
pub use state::{CardDisplayState, CardFields, FormattedFields};

// Re-export the mask glyph and placeholders
pub use mask::{CVC_PLACEHOLDER, EXPIRY_PLACEHOLDER, MASK_CHAR, NAME_PLACEHOLDER};

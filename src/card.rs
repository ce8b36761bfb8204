//! Card network types for display formatting.
//!
//! This module provides the `CardType` enum identifying the card network a
//! number belongs to, together with the fixed display width each network
//! implies. The rendering layer keys styling and imagery off the lowercase
//! network name.

use std::fmt;
use std::str::FromStr;

/// Card networks recognized by the display engine.
///
/// Each variant maps to a fixed number of digit positions: American Express
/// cards render 15 digits, every other network (and an unclassified number)
/// renders 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// No network detected - prefix unmatched, width 16
    #[default]
    Unknown,
    /// Visa - Prefix 4, width 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, width 16
    Mastercard,
    /// American Express - Prefix 34, 37, width 15
    Amex,
    /// Discover - Prefix 6011, 644-649, 65, width 16
    Discover,
}

impl CardType {
    /// Returns the number of digit positions rendered for this network.
    #[inline]
    pub const fn width(&self) -> usize {
        match self {
            Self::Amex => 15,
            _ => 16,
        }
    }

    /// Returns the lowercase network name used by rendering layers to
    /// select styling and imagery.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
        }
    }

    /// Returns true if a network was detected.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unrecognized network name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardTypeError(());

impl fmt::Display for ParseCardTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized card network name")
    }
}

impl std::error::Error for ParseCardTypeError {}

impl FromStr for CardType {
    type Err = ParseCardTypeError;

    /// Parses the lowercase network names produced by [`CardType::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "visa" => Ok(Self::Visa),
            "mastercard" => Ok(Self::Mastercard),
            "amex" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            _ => Err(ParseCardTypeError(())),
        }
    }
}

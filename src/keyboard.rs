//! Input classes for text fields.
//!
//! A [`KeyboardType`] describes what kind of text a field expects. Terminals
//! have no soft keyboard to swap, so the value travels from the row to the
//! field for hosts that want to render a hint; it does not change which keys
//! are delivered.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The input class a text field is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    /// Generic text entry.
    #[default]
    Default,
    /// ASCII-only text.
    AsciiCapable,
    /// Digits and punctuation.
    NumbersAndPunctuation,
    /// Digits only.
    NumberPad,
    /// Digits with a decimal separator.
    DecimalPad,
    /// Telephone numbers.
    PhonePad,
    /// Email addresses.
    EmailAddress,
    /// URLs.
    Url,
}

impl KeyboardType {
    /// Every keyboard type, in declaration order.
    pub const ALL: [KeyboardType; 8] = [
        KeyboardType::Default,
        KeyboardType::AsciiCapable,
        KeyboardType::NumbersAndPunctuation,
        KeyboardType::NumberPad,
        KeyboardType::DecimalPad,
        KeyboardType::PhonePad,
        KeyboardType::EmailAddress,
        KeyboardType::Url,
    ];

    /// The kebab-case name used by `Display`, `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            KeyboardType::Default => "default",
            KeyboardType::AsciiCapable => "ascii-capable",
            KeyboardType::NumbersAndPunctuation => "numbers-and-punctuation",
            KeyboardType::NumberPad => "number-pad",
            KeyboardType::DecimalPad => "decimal-pad",
            KeyboardType::PhonePad => "phone-pad",
            KeyboardType::EmailAddress => "email-address",
            KeyboardType::Url => "url",
        }
    }
}

impl fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        KeyboardType::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::UnknownKeyboardType(s.to_string()))
    }
}

//! Validated partner names.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which of the two form fields a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NameSlot {
    #[default]
    First,
    Second,
}

impl NameSlot {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            NameSlot::First => "Partner 1",
            NameSlot::Second => "Partner 2",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            NameSlot::First => "Enter first name",
            NameSlot::Second => "Enter second name",
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            NameSlot::First => NameSlot::Second,
            NameSlot::Second => NameSlot::First,
        }
    }
}

impl fmt::Display for NameSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The only error at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("{slot} is empty")]
    Empty { slot: NameSlot },
    #[error("{slot} contains '{ch}'; only letters and spaces are allowed")]
    DisallowedCharacter { slot: NameSlot, ch: char },
}

impl InvalidInput {
    #[must_use]
    pub const fn slot(&self) -> NameSlot {
        match self {
            InvalidInput::Empty { slot } | InvalidInput::DisallowedCharacter { slot, .. } => *slot,
        }
    }
}

/// Letters and whitespace are the whole alphabet.
#[must_use]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

/// A name that passed validation: only ASCII letters and whitespace,
/// and non-empty after trimming. Stored trimmed, case preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(slot: NameSlot, raw: &str) -> Result<Self, InvalidInput> {
        if let Some(ch) = raw.chars().find(|c| !is_allowed_char(*c)) {
            return Err(InvalidInput::DisallowedCharacter { slot, ch });
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::Empty { slot });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidInput, Name, NameSlot};

    #[test]
    fn trims_and_keeps_case() {
        let name = Name::parse(NameSlot::First, "  Mary Jane ").unwrap();
        assert_eq!(name.as_str(), "Mary Jane");
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            Name::parse(NameSlot::First, ""),
            Err(InvalidInput::Empty {
                slot: NameSlot::First
            })
        );
    }

    #[test]
    fn whitespace_only_is_rejected() {
        let err = Name::parse(NameSlot::Second, " \t  ").unwrap_err();
        assert_eq!(err.slot(), NameSlot::Second);
        assert!(matches!(err, InvalidInput::Empty { .. }));
    }

    #[test]
    fn digits_are_rejected() {
        assert_eq!(
            Name::parse(NameSlot::First, "Al1ce"),
            Err(InvalidInput::DisallowedCharacter {
                slot: NameSlot::First,
                ch: '1'
            })
        );
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        let err = Name::parse(NameSlot::Second, "Zoë").unwrap_err();
        assert!(matches!(err, InvalidInput::DisallowedCharacter { ch: 'ë', .. }));
    }

    #[test]
    fn error_message_names_the_field() {
        let err = Name::parse(NameSlot::Second, "Bob!").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Partner 2 contains '!'; only letters and spaces are allowed"
        );
    }
}

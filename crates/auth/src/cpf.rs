//! CPF (Brazilian national ID) value object and input boundary.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pontual_core::ValueObject;

/// A CPF is exactly 11 ASCII digits, without separators.
pub const CPF_LEN: usize = 11;

/// Why a CPF string was rejected. The messages are the inline form copy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpfParseError {
    #[error("CPF deve ter exatamente 11 dígitos")]
    Length,
    #[error("CPF deve conter apenas números")]
    NonDigit,
}

/// Validated CPF. Construction goes through [`Cpf::parse`], so a held value
/// always satisfies the 11-ASCII-digit invariant (including when
/// deserialized from storage).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(s: &str) -> Result<Self, CpfParseError> {
        if s.len() != CPF_LEN {
            return Err(CpfParseError::Length);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CpfParseError::NonDigit);
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Cpf {}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = CpfParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}

/// CPF input boundary: mirrors the form field, which strips every non-digit
/// character and truncates at 11 digits as the user types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpfField {
    digits: String,
}

impl CpfField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field content with the digits of `raw`, capped at
    /// [`CPF_LEN`]. Dots, dashes and anything else non-numeric are dropped
    /// before length validation ever sees the value.
    pub fn set(&mut self, raw: &str) {
        self.digits = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CPF_LEN)
            .collect();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_eleven_digits() {
        let cpf = Cpf::parse("12345678901").unwrap();
        assert_eq!(cpf.as_str(), "12345678901");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(Cpf::parse("123").unwrap_err(), CpfParseError::Length);
        assert_eq!(Cpf::parse("123456789012").unwrap_err(), CpfParseError::Length);
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!(Cpf::parse("1234567890a").unwrap_err(), CpfParseError::NonDigit);
        assert_eq!(Cpf::parse("123.456.789").unwrap_err(), CpfParseError::NonDigit);
    }

    #[test]
    fn deserialization_enforces_the_invariant() {
        let ok: Result<Cpf, _> = serde_json::from_str("\"12345678901\"");
        assert!(ok.is_ok());

        let bad: Result<Cpf, _> = serde_json::from_str("\"123\"");
        assert!(bad.is_err());
    }

    #[test]
    fn field_strips_formatting_characters() {
        let mut field = CpfField::new();
        field.set("123.456.789-01");
        assert_eq!(field.as_str(), "12345678901");
    }

    #[test]
    fn field_truncates_at_eleven_digits() {
        let mut field = CpfField::new();
        field.set("123456789012345");
        assert_eq!(field.as_str(), "12345678901");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whatever is typed, the field holds at most 11
            /// characters and only ASCII digits.
            #[test]
            fn field_only_ever_holds_digits(raw in ".*") {
                let mut field = CpfField::new();
                field.set(&raw);
                prop_assert!(field.as_str().len() <= CPF_LEN);
                prop_assert!(field.as_str().bytes().all(|b| b.is_ascii_digit()));
            }

            /// Property: eleven typed digits always produce a parseable CPF.
            #[test]
            fn eleven_digits_parse(raw in "[0-9]{11}") {
                let mut field = CpfField::new();
                field.set(&raw);
                prop_assert!(Cpf::parse(field.as_str()).is_ok());
            }
        }
    }
}

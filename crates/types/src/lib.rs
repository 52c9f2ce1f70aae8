//! # ABDM Types
//!
//! Validated identifier types shared by the generator, the REST API and the CLI.
//!
//! Two identifier shapes are accepted:
//! - **Aadhaar**: exactly 12 ASCII digits, e.g. `123456789012`
//! - **ABHA**: the literal marker `ABHA` followed by exactly 10 ASCII digits, e.g.
//!   `ABHA1234567890`
//!
//! Anything else is rejected. Once an [`Identifier`] has been constructed the rest of the
//! workspace can assume it is well formed, in particular that its last four characters are
//! ASCII digits.

use std::fmt;
use std::str::FromStr;

/// Length of an Aadhaar number.
pub const AADHAAR_LEN: usize = 12;

/// Literal marker every ABHA number starts with.
pub const ABHA_PREFIX: &str = "ABHA";

/// Number of digits following [`ABHA_PREFIX`].
pub const ABHA_DIGITS: usize = 10;

/// Total length of an ABHA number.
pub const ABHA_LEN: usize = ABHA_PREFIX.len() + ABHA_DIGITS;

/// Number of trailing characters used to derive a seed.
pub const SUFFIX_LEN: usize = 4;

/// Errors that can occur when validating an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The input was empty
    #[error("identifier cannot be empty")]
    Empty,
    /// The input is neither an Aadhaar nor an ABHA number
    #[error("invalid identifier format: expected 12 digits or ABHA followed by 10 digits")]
    InvalidFormat,
}

/// The kind of a validated identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
pub enum IdentifierKind {
    /// 12-digit national identity number.
    Aadhaar,
    /// Health-account number.
    #[serde(rename = "ABHA")]
    Abha,
}

impl IdentifierKind {
    /// Classifies a raw string without allocating.
    ///
    /// Returns `None` for anything that is not a well-formed Aadhaar or ABHA number.
    pub fn classify(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();

        if bytes.len() == AADHAAR_LEN && bytes.iter().all(u8::is_ascii_digit) {
            return Some(Self::Aadhaar);
        }

        if bytes.len() == ABHA_LEN
            && input.starts_with(ABHA_PREFIX)
            && bytes[ABHA_PREFIX.len()..].iter().all(u8::is_ascii_digit)
        {
            return Some(Self::Abha);
        }

        None
    }

    /// Wire label, as it appears in `patient_info.identifier_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar",
            Self::Abha => "ABHA",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated Aadhaar or ABHA number.
///
/// The input is taken verbatim: no trimming or case folding is applied, so `abha1234567890`
/// and ` 123456789012` are both rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    value: String,
    kind: IdentifierKind,
}

impl Identifier {
    /// Validates `input` and wraps it.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw identifier, for example a query-string value
    ///
    /// # Returns
    ///
    /// Returns the validated [`Identifier`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Empty`] if `input` is empty, or
    /// [`IdentifierError::InvalidFormat`] if it matches neither accepted shape.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, IdentifierError> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let kind = IdentifierKind::classify(input).ok_or(IdentifierError::InvalidFormat)?;
        Ok(Self {
            value: input.to_owned(),
            kind,
        })
    }

    /// Returns the identifier as supplied.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the identifier kind.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// Returns the last [`SUFFIX_LEN`] characters. Always ASCII digits.
    pub fn suffix(&self) -> &str {
        &self.value[self.value.len() - SUFFIX_LEN..]
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Identifier::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_aadhaar() {
        let id = Identifier::parse("123456789012").expect("valid aadhaar");
        assert_eq!(id.kind(), IdentifierKind::Aadhaar);
        assert_eq!(id.as_str(), "123456789012");
        assert_eq!(id.suffix(), "9012");
    }

    #[test]
    fn test_parse_abha() {
        let id = Identifier::parse("ABHA1234567890").expect("valid abha");
        assert_eq!(id.kind(), IdentifierKind::Abha);
        assert_eq!(id.suffix(), "7890");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Identifier::parse(""), Err(IdentifierError::Empty));
        assert_eq!(Identifier::parse("   "), Err(IdentifierError::InvalidFormat));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "abc",
            "12345678901",
            "1234567890123",
            "12345678901a",
            "abha1234567890",
            "ABHA123456789",
            "ABHA12345678901",
            "ABHA12345678x0",
            "XBHA1234567890",
            " 123456789012",
            "123456789012 ",
            "١٢٣٤٥٦٧٨٩٠١٢",
            "12345678901234",
        ] {
            assert_eq!(
                Identifier::parse(input),
                Err(IdentifierError::InvalidFormat),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(IdentifierKind::Aadhaar.to_string(), "Aadhaar");
        assert_eq!(IdentifierKind::Abha.to_string(), "ABHA");
        assert_eq!(
            serde_json::to_string(&IdentifierKind::Abha).unwrap(),
            "\"ABHA\""
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Identifier = serde_json::from_str("\"ABHA0000000001\"").unwrap();
        assert_eq!(ok.kind(), IdentifierKind::Abha);

        let err = serde_json::from_str::<Identifier>("\"ABHA\"").unwrap_err();
        assert!(err.to_string().contains("invalid identifier format"));
    }

    proptest! {
        #[test]
        fn prop_twelve_digits_are_aadhaar(s in "[0-9]{12}") {
            prop_assert_eq!(IdentifierKind::classify(&s), Some(IdentifierKind::Aadhaar));
        }

        #[test]
        fn prop_abha_prefix_and_ten_digits_are_abha(digits in "[0-9]{10}") {
            let s = format!("ABHA{digits}");
            prop_assert_eq!(IdentifierKind::classify(&s), Some(IdentifierKind::Abha));
        }

        #[test]
        fn prop_other_lengths_are_invalid(s in "\\PC{0,40}") {
            prop_assume!(s.len() != AADHAAR_LEN && s.len() != ABHA_LEN);
            prop_assert_eq!(IdentifierKind::classify(&s), None);
        }

        #[test]
        fn prop_non_digit_in_numeric_part_is_invalid(
            digits in "[0-9]{12}",
            pos in 0usize..12,
            bad in "[^0-9]",
        ) {
            let mut chars: Vec<char> = digits.chars().collect();
            chars[pos] = bad.chars().next().unwrap();
            let s: String = chars.iter().collect();
            prop_assert_ne!(IdentifierKind::classify(&s), Some(IdentifierKind::Aadhaar));

            let tail: String = chars[AADHAAR_LEN - ABHA_DIGITS..].iter().collect();
            let abha = format!("ABHA{tail}");
            if pos >= AADHAAR_LEN - ABHA_DIGITS {
                prop_assert_eq!(IdentifierKind::classify(&abha), None);
            }
        }

        #[test]
        fn prop_wrong_prefix_is_invalid(prefix in "[A-Za-z]{4}", digits in "[0-9]{10}") {
            prop_assume!(prefix != ABHA_PREFIX);
            let s = format!("{prefix}{digits}");
            prop_assert_eq!(IdentifierKind::classify(&s), None);
        }
    }
}

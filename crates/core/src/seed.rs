//! Seed derivation.
//!
//! Every record is generated from a seed taken from the last four digits of the identifier, so
//! `123456789012` and `ABHA0000009012` share seed `9012` and therefore share every
//! seeded field.

use abdm_types::Identifier;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Numeric seed in the range `0..=9999`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(u16);

impl Seed {
    /// Derives the seed from the identifier's four-digit suffix.
    ///
    /// Infallible: a validated [`Identifier`] always ends in four ASCII digits.
    pub fn from_identifier(identifier: &Identifier) -> Self {
        let value = identifier
            .suffix()
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Builds a fresh generator for this seed.
    ///
    /// Each call returns an independent stream starting from the same state; nothing is shared
    /// between callers.
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(u64::from(self.0))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seed_uses_last_four_digits() {
        let aadhaar = Identifier::parse("123456789012").unwrap();
        let abha = Identifier::parse("ABHA0000009012").unwrap();

        assert_eq!(Seed::from_identifier(&aadhaar).value(), 9012);
        assert_eq!(Seed::from_identifier(&aadhaar), Seed::from_identifier(&abha));
    }

    #[test]
    fn test_seed_keeps_leading_zeros_numeric() {
        let id = Identifier::parse("ABHA1234560007").unwrap();
        assert_eq!(Seed::from_identifier(&id).value(), 7);
        assert_eq!(Seed::from_identifier(&id).to_string(), "7");
    }

    #[test]
    fn test_rng_streams_are_independent_and_repeatable() {
        let seed = Seed::from_identifier(&Identifier::parse("111122223333").unwrap());
        let mut a = seed.rng();
        let first: Vec<u32> = (0..8).map(|_| a.gen()).collect();

        let mut b = seed.rng();
        let second: Vec<u32> = (0..8).map(|_| b.gen()).collect();

        assert_eq!(first, second);
    }
}

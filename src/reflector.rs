//! Reflector: fixed-point-free involution that turns the signal around.

use std::str::FromStr;

use crate::config::parse_tokens;
use crate::error::RotorCryptError;
use crate::utils::alphabet::{
    involution_from_pairs, letters_from_str, pair_up, Letter, ALPHABET_SIZE,
};

/// Number of pairs a reflector must wire.
const REFLECTOR_PAIRS: usize = ALPHABET_SIZE / 2;

/// Fully paired involutive substitution with no fixed points.
///
/// Every one of the 26 indices is paired with exactly one different index,
/// which is what makes the machine's per-letter map self-inverse and
/// guarantees no letter ever encrypts to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    table: [Letter; ALPHABET_SIZE],
}

impl Reflector {
    /// Creates a reflector from exactly 13 disjoint pairs.
    ///
    /// # Errors
    /// - [`RotorCryptError::FixedPointInReflector`] if a pair joins an index to itself.
    /// - [`RotorCryptError::DuplicateMapping`] if an index appears in two pairs.
    /// - [`RotorCryptError::IncompleteOrOddPairing`] if fewer than 13 pairs are given.
    /// - [`RotorCryptError::TooManyTokens`] if more than 13 pairs are given.
    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Result<Self, RotorCryptError> {
        if let Some(&(a, _)) = pairs.iter().find(|(a, b)| a == b) {
            return Err(RotorCryptError::FixedPointInReflector { index: a.index() });
        }
        let table = involution_from_pairs(pairs)?;
        if pairs.len() != REFLECTOR_PAIRS {
            return Err(RotorCryptError::IncompleteOrOddPairing {
                count: pairs.len() * 2,
            });
        }
        Ok(Reflector { table })
    }

    /// Creates a reflector from a 26-letter wiring string such as the
    /// historical `"YRUHQSLDPXNGOKMIEBFZCWVJAT"`.
    ///
    /// # Errors
    /// Same as [`from_pairs`](Self::from_pairs), plus
    /// [`RotorCryptError::InvalidInputCharacter`] for characters outside `A..=Z`
    /// and [`RotorCryptError::DuplicateMapping`] if the wiring is not an involution.
    pub fn from_wiring(wiring: &str) -> Result<Self, RotorCryptError> {
        let targets = letters_from_str(wiring)?;
        if targets.len() != ALPHABET_SIZE {
            return Err(RotorCryptError::IncompleteOrOddPairing {
                count: targets.len(),
            });
        }
        let mut pairs = Vec::with_capacity(REFLECTOR_PAIRS);
        for (source, &target) in Letter::all().zip(&targets) {
            if targets[target.index()] != source {
                return Err(RotorCryptError::DuplicateMapping {
                    index: target.index(),
                });
            }
            if source <= target {
                pairs.push((source, target));
            }
        }
        Reflector::from_pairs(&pairs)
    }

    /// Applies the reflection.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.table[letter.index()]
    }
}

impl FromStr for Reflector {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = parse_tokens(s)?;
        if tokens.len() > ALPHABET_SIZE {
            return Err(RotorCryptError::TooManyTokens {
                count: tokens.len(),
                max: ALPHABET_SIZE,
            });
        }
        Reflector::from_pairs(&pair_up(&tokens)?)
    }
}

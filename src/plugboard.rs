//! Plugboard: involutive letter swaps at machine entry and exit.
//!
//! Each configured pair `(a, b)` swaps `a` and `b`; every index not named by
//! a pair passes through unchanged. The board may be left partially (or
//! entirely) unplugged.

use std::str::FromStr;

use crate::config::parse_tokens;
use crate::error::RotorCryptError;
use crate::utils::alphabet::{identity_table, involution_from_pairs, pair_up, Letter, ALPHABET_SIZE};

/// Fixed involutive substitution applied on both sides of the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [Letter; ALPHABET_SIZE],
}

impl Plugboard {
    /// Creates a plugboard with no cables: every letter maps to itself.
    pub fn identity() -> Self {
        Plugboard {
            table: identity_table(),
        }
    }

    /// Creates a plugboard from disjoint swap pairs.
    ///
    /// # Errors
    /// - [`RotorCryptError::DuplicateMapping`] if an index appears in more
    ///   than one pair or is paired with itself.
    /// - [`RotorCryptError::TooManyTokens`] if more than 26 indices are named.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Letter, Plugboard};
    ///
    /// let a = Letter::new(0).unwrap();
    /// let b = Letter::new(1).unwrap();
    /// let pb = Plugboard::from_pairs(&[(a, b)]).unwrap();
    /// assert_eq!(pb.substitute(a), b);
    /// assert_eq!(pb.substitute(b), a);
    /// ```
    pub fn from_pairs(pairs: &[(Letter, Letter)]) -> Result<Self, RotorCryptError> {
        Ok(Plugboard {
            table: involution_from_pairs(pairs)?,
        })
    }

    /// Applies the swap table.
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.table[letter.index()]
    }

    /// Returns the configured pairs, each reported once with the lower index first.
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .filter_map(|l| {
                let other = self.substitute(l);
                (l < other).then_some((l, other))
            })
            .collect()
    }
}

impl FromStr for Plugboard {
    type Err = RotorCryptError;

    /// Parses whitespace-separated index tokens, consumed pairwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = parse_tokens(s)?;
        if tokens.len() > ALPHABET_SIZE {
            return Err(RotorCryptError::TooManyTokens {
                count: tokens.len(),
                max: ALPHABET_SIZE,
            });
        }
        Plugboard::from_pairs(&pair_up(&tokens)?)
    }
}

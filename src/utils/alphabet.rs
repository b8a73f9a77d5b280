//! Alphabet index type shared by every substitution table.
//!
//! The cipher core never works with raw characters. Plaintext is turned into
//! [`Letter`] values on the way in and back into `'A'..='Z'` on the way out,
//! so the tables stay free of text-encoding concerns.

use std::fmt;

use crate::error::RotorCryptError;

/// Number of symbols in the machine alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// An index in `[0, 25]`, bijective with the letters `'A'..='Z'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Letter(u8);

impl Letter {
    /// The letter `'A'` (index 0).
    pub const A: Letter = Letter(0);

    /// Creates a letter from its index.
    ///
    /// # Returns
    /// `None` if `index >= 26`.
    pub const fn new(index: usize) -> Option<Letter> {
        if index < ALPHABET_SIZE {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Creates a letter from an uppercase ASCII character.
    ///
    /// # Returns
    /// `None` for anything outside `'A'..='Z'`.
    pub fn from_char(c: char) -> Option<Letter> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Returns the index in `[0, 25]`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the uppercase character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Adds `delta` modulo 26.
    ///
    /// Uses the Euclidean remainder, so negative deltas wrap into `[0, 25]`
    /// instead of producing a negative index.
    pub fn shift(self, delta: i32) -> Letter {
        let n = ALPHABET_SIZE as i32;
        Letter((self.0 as i32 + delta).rem_euclid(n) as u8)
    }

    /// Iterates `A..=Z` in index order.
    pub fn all() -> impl Iterator<Item = Letter> + Clone {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Builds a letter from an index known to be below 26.
///
/// Crate-internal tables index with `usize` in `0..26`; this keeps that
/// conversion in one place.
pub(crate) fn letter(index: usize) -> Letter {
    debug_assert!(index < ALPHABET_SIZE);
    Letter((index % ALPHABET_SIZE) as u8)
}

/// Identity table: every index maps to itself.
pub(crate) fn identity_table() -> [Letter; ALPHABET_SIZE] {
    std::array::from_fn(letter)
}

/// Checks that `table` maps every index to a distinct target.
///
/// # Errors
/// Returns [`RotorCryptError::DuplicateMapping`] naming the first target hit twice.
pub(crate) fn check_bijection(table: &[Letter; ALPHABET_SIZE]) -> Result<(), RotorCryptError> {
    let mut seen = [false; ALPHABET_SIZE];
    for target in table {
        if std::mem::replace(&mut seen[target.index()], true) {
            return Err(RotorCryptError::DuplicateMapping {
                index: target.index(),
            });
        }
    }
    Ok(())
}

/// Builds an involutive table from disjoint pairs.
///
/// Indices not named by any pair map to themselves.
///
/// # Errors
/// - [`RotorCryptError::TooManyTokens`] if more than 26 indices are named.
/// - [`RotorCryptError::DuplicateMapping`] if an index appears twice, including
///   a pair of an index with itself.
pub(crate) fn involution_from_pairs(
    pairs: &[(Letter, Letter)],
) -> Result<[Letter; ALPHABET_SIZE], RotorCryptError> {
    if pairs.len() * 2 > ALPHABET_SIZE {
        return Err(RotorCryptError::TooManyTokens {
            count: pairs.len() * 2,
            max: ALPHABET_SIZE,
        });
    }

    let mut table = identity_table();
    let mut used = [false; ALPHABET_SIZE];
    for &(a, b) in pairs {
        for side in [a, b] {
            if std::mem::replace(&mut used[side.index()], true) {
                return Err(RotorCryptError::DuplicateMapping {
                    index: side.index(),
                });
            }
        }
        table[a.index()] = b;
        table[b.index()] = a;
    }
    Ok(table)
}

/// Converts a string of uppercase letters such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidInputCharacter`] for anything outside `A..=Z`.
pub(crate) fn letters_from_str(s: &str) -> Result<Vec<Letter>, RotorCryptError> {
    s.chars()
        .map(|c| {
            Letter::from_char(c).ok_or(RotorCryptError::InvalidInputCharacter { character: c })
        })
        .collect()
}

/// Groups a flat token list into pairs.
///
/// # Errors
/// Returns [`RotorCryptError::IncompleteOrOddPairing`] for an odd token count.
pub(crate) fn pair_up(tokens: &[Letter]) -> Result<Vec<(Letter, Letter)>, RotorCryptError> {
    if !tokens.len().is_multiple_of(2) {
        return Err(RotorCryptError::IncompleteOrOddPairing {
            count: tokens.len(),
        });
    }
    Ok(tokens.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Letter::new(0), Some(Letter::A));
        assert_eq!(Letter::new(25).map(Letter::index), Some(25));
        assert_eq!(Letter::new(26), None);
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(Letter::from_char('A'), Some(Letter::A));
        assert_eq!(Letter::from_char('Z').map(Letter::index), Some(25));
        assert_eq!(Letter::from_char('a'), None);
        assert_eq!(Letter::from_char('['), None);
        for l in Letter::all() {
            assert_eq!(Letter::from_char(l.to_char()), Some(l));
        }
    }

    #[test]
    fn test_shift_wraps_both_directions() {
        assert_eq!(letter(25).shift(1), Letter::A);
        assert_eq!(Letter::A.shift(-1), letter(25));
        assert_eq!(letter(3).shift(-30), letter(25));
        assert_eq!(letter(7).shift(52), letter(7));
    }

    #[test]
    fn test_all_has_26_letters() {
        assert_eq!(Letter::all().count(), ALPHABET_SIZE);
    }

    #[test]
    fn test_check_bijection() {
        assert!(check_bijection(&identity_table()).is_ok());
        let mut table = identity_table();
        table[3] = letter(4);
        assert_eq!(
            check_bijection(&table),
            Err(RotorCryptError::DuplicateMapping { index: 4 })
        );
    }

    #[test]
    fn test_involution_from_pairs() {
        let table = involution_from_pairs(&[(letter(0), letter(1)), (letter(5), letter(9))]).unwrap();
        assert_eq!(table[0], letter(1));
        assert_eq!(table[1], letter(0));
        assert_eq!(table[5], letter(9));
        assert_eq!(table[9], letter(5));
        assert_eq!(table[2], letter(2));
    }

    #[test]
    fn test_involution_rejects_reuse() {
        let err = involution_from_pairs(&[(letter(0), letter(1)), (letter(1), letter(2))]);
        assert_eq!(err, Err(RotorCryptError::DuplicateMapping { index: 1 }));
        let err = involution_from_pairs(&[(letter(6), letter(6))]);
        assert_eq!(err, Err(RotorCryptError::DuplicateMapping { index: 6 }));
    }

    #[test]
    fn test_letters_from_str() {
        assert_eq!(letters_from_str("AZ").unwrap(), vec![Letter::A, letter(25)]);
        assert_eq!(
            letters_from_str("Ab"),
            Err(RotorCryptError::InvalidInputCharacter { character: 'b' })
        );
    }

    #[test]
    fn test_pair_up_odd() {
        assert_eq!(
            pair_up(&[letter(0), letter(1), letter(2)]),
            Err(RotorCryptError::IncompleteOrOddPairing { count: 3 })
        );
        assert!(pair_up(&[]).unwrap().is_empty());
    }
}

//! Rotor: position-dependent substitution with notch-driven carries.
//!
//! A rotor is a fixed wiring permutation mounted at a rotational offset.
//! Instead of physically rotating the table, every lookup shifts the input
//! contact forward by the offset, reads the wiring, and shifts the result back:
//!
//! ```text
//! right contact = letter + offset          (mod 26)
//! left contact  = wiring(right contact)
//! result        = left contact - offset    (mod 26)
//! ```
//!
//! The return path does the same with the inverse wiring. The inverse table
//! is built once at construction; the forward table never changes afterwards,
//! so the two cannot drift apart.

use std::str::FromStr;

use crate::config::parse_tokens;
use crate::error::RotorCryptError;
use crate::utils::alphabet::{check_bijection, letter, letters_from_str, Letter, ALPHABET_SIZE};

/// A single cipher rotor.
///
/// Holds the forward wiring (right-hand contact to left-hand contact), its
/// precomputed inverse, the notch positions and the current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: [Letter; ALPHABET_SIZE],
    inverse: [Letter; ALPHABET_SIZE],
    notches: Vec<Letter>,
    offset: Letter,
}

impl Rotor {
    /// Creates a rotor at offset 0.
    ///
    /// # Parameters
    /// - `wiring`: `wiring[r]` is the left-hand contact wired to right-hand contact `r`.
    /// - `notches`: Offsets at which this rotor carries into its neighbour.
    ///
    /// # Errors
    /// - [`RotorCryptError::DuplicateMapping`] if two right-hand contacts share a
    ///   left-hand target, or a notch is listed twice.
    /// - [`RotorCryptError::NoNotchConfigured`] if `notches` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Letter, Rotor};
    ///
    /// let wiring: [Letter; 26] = std::array::from_fn(|i| Letter::new((i + 1) % 26).unwrap());
    /// let rotor = Rotor::new(wiring, &[Letter::A]).unwrap();
    /// assert_eq!(rotor.wiring(Letter::A), Letter::new(1).unwrap());
    /// ```
    pub fn new(wiring: [Letter; ALPHABET_SIZE], notches: &[Letter]) -> Result<Self, RotorCryptError> {
        check_bijection(&wiring)?;
        if notches.is_empty() {
            return Err(RotorCryptError::NoNotchConfigured);
        }
        let mut seen = [false; ALPHABET_SIZE];
        for notch in notches {
            if std::mem::replace(&mut seen[notch.index()], true) {
                return Err(RotorCryptError::DuplicateMapping {
                    index: notch.index(),
                });
            }
        }

        let mut inverse = [Letter::A; ALPHABET_SIZE];
        for (right, left) in wiring.iter().enumerate() {
            inverse[left.index()] = letter(right);
        }

        Ok(Rotor {
            wiring,
            inverse,
            notches: notches.to_vec(),
            offset: Letter::A,
        })
    }

    /// Creates a rotor from letter strings, e.g. `("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q")`.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidInputCharacter`] for characters outside `A..=Z`.
    /// - [`RotorCryptError::IncompleteRotorWiring`] unless `wiring` has exactly 26 letters.
    /// - Everything [`new`](Self::new) reports.
    pub fn from_wiring(wiring: &str, notches: &str) -> Result<Self, RotorCryptError> {
        let contacts = letters_from_str(wiring)?;
        let table: [Letter; ALPHABET_SIZE] = contacts.as_slice().try_into().map_err(|_| {
            RotorCryptError::IncompleteRotorWiring {
                supplied: contacts.len(),
            }
        })?;
        Rotor::new(table, &letters_from_str(notches)?)
    }

    /// Forward wiring lookup, right-hand contact to left-hand contact.
    pub fn wiring(&self, contact: Letter) -> Letter {
        self.wiring[contact.index()]
    }

    /// Inverse wiring lookup: the unique `i` with `wiring(i) == contact`.
    pub fn wiring_inverse(&self, contact: Letter) -> Letter {
        self.inverse[contact.index()]
    }

    /// Maps a signal entering on the right and leaving on the left.
    pub fn map_r_to_l(&self, letter: Letter) -> Letter {
        let offset = self.offset.index() as i32;
        let r_contact = letter.shift(offset);
        self.wiring(r_contact).shift(-offset)
    }

    /// Maps a signal entering on the left and leaving on the right.
    pub fn map_l_to_r(&self, letter: Letter) -> Letter {
        let offset = self.offset.index() as i32;
        let l_contact = letter.shift(offset);
        self.wiring_inverse(l_contact).shift(-offset)
    }

    /// Advances the offset by one position, wrapping from 25 to 0.
    pub fn rotate_one_step(&mut self) {
        self.offset = self.offset.shift(1);
    }

    /// Current rotational offset.
    pub fn offset(&self) -> Letter {
        self.offset
    }

    /// Sets the rotational offset (starting position).
    pub fn set_offset(&mut self, offset: Letter) {
        self.offset = offset;
    }

    /// Configured notch positions, in configuration order.
    pub fn notches(&self) -> &[Letter] {
        &self.notches
    }

    /// Whether the current offset is one of the notch positions.
    pub fn is_at_notch(&self) -> bool {
        self.notches.contains(&self.offset)
    }
}

impl FromStr for Rotor {
    type Err = RotorCryptError;

    /// Parses 26 wiring tokens in right-hand contact order followed by one or
    /// more notch tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = parse_tokens(s)?;
        if tokens.len() < ALPHABET_SIZE {
            return Err(RotorCryptError::IncompleteRotorWiring {
                supplied: tokens.len(),
            });
        }
        let (wiring, notches) = tokens.split_at(ALPHABET_SIZE);
        let mut table = [Letter::A; ALPHABET_SIZE];
        table.copy_from_slice(wiring);
        Rotor::new(table, notches)
    }
}

//! Machine: rotor stack orchestration and the per-letter signal path.
//!
//! Rotors are held in signal-entry order. `rotors[0]` is the rightmost,
//! operator-facing rotor wired to the plugboard; the last rotor sits next to
//! the reflector. One letter travels:
//!
//! ```text
//! plugboard → step → rotors[0] … rotors[n-1] (right to left)
//!           → reflector
//!           → rotors[n-1] … rotors[0] (left to right) → plugboard
//! ```
//!
//! # Stepping
//!
//! Stepping is a single pass from `rotors[0]` outward using each rotor's
//! offset from *before* this turn. `rotors[0]` always steps. `rotors[i]`
//! steps when `rotors[i - 1]` stepped this turn and sat on one of its notches
//! before stepping. Carries cascade like an odometer; a rotor that does not
//! step never moves its neighbour, so the pawl-driven double step of the
//! historical hardware is not reproduced.

use crate::error::RotorCryptError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::Letter;

/// A complete rotor cipher machine.
///
/// Owns its plugboard, reflector and rotors outright. Encrypting advances the
/// rotor offsets, so each instance is one independent cipher stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    plugboard: Plugboard,
    reflector: Reflector,
    rotors: Vec<Rotor>,
    initial_offsets: Vec<Letter>,
}

/// Builder for [`Machine`].
///
/// Created by [`Machine::builder`]. The plugboard defaults to no cables and
/// every rotor keeps the offset it was configured with unless
/// [`positions`](Self::positions) overrides them.
#[derive(Debug, Clone)]
pub struct MachineBuilder {
    plugboard: Plugboard,
    reflector: Reflector,
    rotors: Vec<Rotor>,
    positions: Option<Vec<Letter>>,
}

impl MachineBuilder {
    /// Sets the plugboard.
    pub fn plugboard(mut self, plugboard: Plugboard) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Appends a rotor further from the plugboard than those already added.
    pub fn rotor(mut self, rotor: Rotor) -> Self {
        self.rotors.push(rotor);
        self
    }

    /// Sets starting offsets, one per rotor in signal-entry order.
    pub fn positions(mut self, positions: &[Letter]) -> Self {
        self.positions = Some(positions.to_vec());
        self
    }

    /// Assembles the machine.
    ///
    /// # Errors
    /// - [`RotorCryptError::NoRotors`] if no rotor was added.
    /// - [`RotorCryptError::MissingRotorPosition`] if fewer positions than rotors
    ///   were supplied.
    pub fn build(self) -> Result<Machine, RotorCryptError> {
        if self.rotors.is_empty() {
            return Err(RotorCryptError::NoRotors);
        }

        let mut machine = Machine {
            initial_offsets: self.rotors.iter().map(Rotor::offset).collect(),
            plugboard: self.plugboard,
            reflector: self.reflector,
            rotors: self.rotors,
        };
        if let Some(positions) = &self.positions {
            machine.set_offsets(positions)?;
            machine.initial_offsets = machine.offsets();
        }

        tracing::debug!(
            rotors = machine.rotors.len(),
            offsets = ?machine.initial_offsets,
            plugs = machine.plugboard.pairs().len(),
            "Assembled rotor machine"
        );
        Ok(machine)
    }
}

impl Machine {
    /// Starts building a machine around `reflector`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector, Rotor};
    ///
    /// let machine = Machine::builder(Reflector::from_wiring("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap())
    ///     .rotor(Rotor::from_wiring("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V").unwrap())
    ///     .rotor(Rotor::from_wiring("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E").unwrap())
    ///     .rotor(Rotor::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap())
    ///     .build();
    /// assert!(machine.is_ok());
    /// ```
    pub fn builder(reflector: Reflector) -> MachineBuilder {
        MachineBuilder {
            plugboard: Plugboard::identity(),
            reflector,
            rotors: Vec::new(),
            positions: None,
        }
    }

    /// Advances the rotor stack by one turn.
    pub fn step(&mut self) {
        let count = self.rotors.len();
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            let carry = rotor.is_at_notch();
            rotor.rotate_one_step();
            if !carry {
                break;
            }
            if i + 1 < count {
                tracing::trace!(rotor = i, offset = %rotor.offset(), "Notch carry into next rotor");
            }
        }
    }

    /// Encrypts one letter, stepping the rotors first.
    ///
    /// Encrypting the same letter twice in a row generally gives different
    /// results because the offsets move between calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Letter, Machine, Reflector, Rotor};
    ///
    /// let mut machine = Machine::builder(Reflector::from_wiring("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap())
    ///     .rotor(Rotor::from_wiring("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let c = machine.encrypt(Letter::A);
    /// assert_ne!(c, Letter::A);
    /// ```
    pub fn encrypt(&mut self, letter: Letter) -> Letter {
        let entry = self.plugboard.substitute(letter);
        self.step();

        let forward = self
            .rotors
            .iter()
            .fold(entry, |signal, rotor| rotor.map_r_to_l(signal));
        let reflected = self.reflector.substitute(forward);
        let back = self
            .rotors
            .iter()
            .rev()
            .fold(reflected, |signal, rotor| rotor.map_l_to_r(signal));

        self.plugboard.substitute(back)
    }

    /// Encrypts a sequence of letters.
    pub fn encrypt_letters(&mut self, letters: &[Letter]) -> Vec<Letter> {
        letters.iter().map(|&l| self.encrypt(l)).collect()
    }

    /// Encrypts uppercase text, skipping whitespace.
    ///
    /// The whole input is checked before any letter is encrypted, so a
    /// rejected input leaves the rotor offsets untouched.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidInputCharacter`] for the first
    /// character that is neither whitespace nor `A..=Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, Reflector, Rotor};
    ///
    /// let mut machine = Machine::builder(Reflector::from_wiring("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap())
    ///     .rotor(Rotor::from_wiring("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V").unwrap())
    ///     .rotor(Rotor::from_wiring("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E").unwrap())
    ///     .rotor(Rotor::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(machine.encrypt_text("AAAAA").unwrap(), "BDZGO");
    /// ```
    pub fn encrypt_text(&mut self, text: &str) -> Result<String, RotorCryptError> {
        let letters = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Letter::from_char(c).ok_or(RotorCryptError::InvalidInputCharacter { character: c })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self
            .encrypt_letters(&letters)
            .into_iter()
            .map(Letter::to_char)
            .collect())
    }

    /// Current offsets, in signal-entry order.
    pub fn offsets(&self) -> Vec<Letter> {
        self.rotors.iter().map(Rotor::offset).collect()
    }

    /// Sets every rotor offset.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MissingRotorPosition`] naming the first rotor
    /// without a position; offsets are left unchanged in that case. Extra
    /// positions are ignored.
    pub fn set_offsets(&mut self, offsets: &[Letter]) -> Result<(), RotorCryptError> {
        if offsets.len() < self.rotors.len() {
            return Err(RotorCryptError::MissingRotorPosition {
                rotor: offsets.len(),
            });
        }
        for (rotor, &offset) in self.rotors.iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
        Ok(())
    }

    /// Restores the offsets the machine was built with.
    pub fn reset(&mut self) {
        for (rotor, &offset) in self.rotors.iter_mut().zip(&self.initial_offsets) {
            rotor.set_offset(offset);
        }
    }

    /// Rotors in signal-entry order.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }
}

//! Electromechanical rotor cipher machine.
//!
//! A plugboard, a stack of rotors and a reflector compose into a reciprocal
//! substitution cipher. Rotor offsets advance before every letter through a
//! notch-driven stepping mechanism, so the substitution changes letter by
//! letter.
//!
//! The core works on alphabet indices ([`Letter`]) only; the [`config`]
//! module turns whitespace-separated index files into validated components.
//!
//! # Architecture
//!
//! ```text
//! Letter     (index 0..=25, shared by every table)
//!     ↓
//! Plugboard  (partial involution, applied on entry and exit)
//! Rotor      (wiring permutation + offset + notches, forward and inverse lookups)
//! Reflector  (full involution without fixed points)
//!     ↓ composed and owned by
//! Machine    (stepping policy + signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two machines set to the same start state:
//!
//! ```
//! use rotorcrypt::{Machine, Reflector, Rotor};
//!
//! fn machine() -> Machine {
//!     Machine::builder(Reflector::from_wiring("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap())
//!         .rotor(Rotor::from_wiring("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V").unwrap())
//!         .rotor(Rotor::from_wiring("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E").unwrap())
//!         .rotor(Rotor::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap())
//!         .build()
//!         .unwrap()
//! }
//!
//! let ciphertext = machine().encrypt_text("HELLOWORLD").unwrap();
//! assert_eq!(ciphertext, "ILBDAAMTAZ");
//!
//! let plaintext = machine().encrypt_text(&ciphertext).unwrap();
//! assert_eq!(plaintext, "HELLOWORLD");
//! ```
//!
//! Rewinding a single machine with [`Machine::reset`]:
//!
//! ```
//! use rotorcrypt::{Letter, Machine, Reflector, Rotor};
//!
//! let mut m = Machine::builder(Reflector::from_wiring("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap())
//!     .rotor(Rotor::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap())
//!     .positions(&[Letter::new(10).unwrap()])
//!     .build()
//!     .unwrap();
//!
//! let c = m.encrypt_text("ROTOR").unwrap();
//! m.reset();
//! assert_eq!(m.encrypt_text(&c).unwrap(), "ROTOR");
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

mod machine;
mod plugboard;
mod reflector;
mod rotor;
pub(crate) mod utils;

pub use config::MachineConfig;
pub use error::RotorCryptError;
pub use machine::{Machine, MachineBuilder};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use utils::alphabet::{Letter, ALPHABET_SIZE};

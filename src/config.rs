//! Configuration loading: token parsing and file readers.
//!
//! Every configuration source is a whitespace-separated list of decimal
//! indices in `[0, 25]`:
//!
//! - plugboard: pairs of indices, each pair a swap (may be empty)
//! - reflector: exactly 13 pairs covering all 26 indices
//! - rotor: 26 wiring indices in right-hand contact order, then one or more notches
//! - positions: one starting offset per rotor, in the same order as the rotors
//!
//! Readers return a validated component or an error naming the offending
//! file; a machine is never built from a partially valid configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::RotorCryptError;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::Letter;

/// Splits `text` on whitespace and converts every token to a [`Letter`].
///
/// # Errors
/// Returns [`RotorCryptError::MalformedToken`] for the first token that is not
/// made only of ASCII digits or whose value is outside `[0, 25]`.
///
/// # Examples
///
/// ```
/// use rotorcrypt::config::parse_tokens;
///
/// let letters = parse_tokens("0 25\n7").unwrap();
/// assert_eq!(letters.len(), 3);
/// assert!(parse_tokens("3 -1").is_err());
/// ```
pub fn parse_tokens(text: &str) -> Result<Vec<Letter>, RotorCryptError> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            let malformed = || RotorCryptError::MalformedToken {
                token: token.to_string(),
                position,
            };
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            token
                .parse::<usize>()
                .ok()
                .and_then(Letter::new)
                .ok_or_else(malformed)
        })
        .collect()
}

/// Reads a file to a string.
///
/// # Errors
/// Returns [`RotorCryptError::ConfigurationFileUnreadable`] on any I/O failure.
fn read_config(path: &Path) -> Result<String, RotorCryptError> {
    fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Cannot open configuration file");
        RotorCryptError::ConfigurationFileUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

/// Reads and parses a configuration file into `T`, tagging errors with the path.
fn load<T>(path: &Path, kind: &'static str) -> Result<T, RotorCryptError>
where
    T: FromStr<Err = RotorCryptError>,
{
    let text = read_config(path)?;
    text.parse::<T>().map_err(|e| {
        tracing::warn!(path = %path.display(), kind, error = %e, "Rejected configuration file");
        e.in_file(path)
    })
}

/// Loads a plugboard configuration file.
pub fn load_plugboard(path: impl AsRef<Path>) -> Result<Plugboard, RotorCryptError> {
    load(path.as_ref(), "plugboard")
}

/// Loads a reflector configuration file.
pub fn load_reflector(path: impl AsRef<Path>) -> Result<Reflector, RotorCryptError> {
    load(path.as_ref(), "reflector")
}

/// Loads a rotor configuration file.
pub fn load_rotor(path: impl AsRef<Path>) -> Result<Rotor, RotorCryptError> {
    load(path.as_ref(), "rotor")
}

/// Loads a rotor starting-position file.
///
/// Only token syntax is checked here; the machine builder matches the count
/// against the rotor stack.
pub fn load_positions(path: impl AsRef<Path>) -> Result<Vec<Letter>, RotorCryptError> {
    let path = path.as_ref();
    let text = read_config(path)?;
    parse_tokens(&text).map_err(|e| {
        tracing::warn!(path = %path.display(), kind = "positions", error = %e, "Rejected configuration file");
        e.in_file(path)
    })
}

/// File locations describing a complete machine.
///
/// Rotor files are listed in signal-entry order: the first file is the
/// rightmost rotor, the one wired to the plugboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MachineConfig {
    /// Plugboard file
    pub plugboard: PathBuf,
    /// Reflector file
    pub reflector: PathBuf,
    /// Rotor files, rightmost first
    pub rotors: Vec<PathBuf>,
    /// Starting positions file; all rotors start at 0 when absent
    pub positions: Option<PathBuf>,
}

impl MachineConfig {
    /// Loads every file, validates it and assembles the machine.
    ///
    /// # Errors
    /// The first error met, tagged with the file it came from. A positions
    /// file with fewer entries than rotors yields
    /// [`RotorCryptError::MissingRotorPosition`]; extra entries are ignored.
    pub fn build(&self) -> Result<Machine, RotorCryptError> {
        let plugboard = load_plugboard(&self.plugboard)?;
        let reflector = load_reflector(&self.reflector)?;

        let mut builder = Machine::builder(reflector).plugboard(plugboard);
        for path in &self.rotors {
            builder = builder.rotor(load_rotor(path)?);
        }

        if let Some(path) = &self.positions {
            builder = builder.positions(&load_positions(path)?);
        }

        builder.build().map_err(|e| match &self.positions {
            Some(path) if matches!(e, RotorCryptError::MissingRotorPosition { .. }) => {
                tracing::warn!(path = %path.display(), kind = "positions", error = %e, "Rejected configuration file");
                e.in_file(path)
            }
            _ => e,
        })
    }
}

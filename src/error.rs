//! Error types for the rotorcrypt library.
//!
//! Every error is raised while a component or machine is being configured.
//! Once a [`Machine`](crate::Machine) exists, encrypting a letter cannot fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while configuring plugboards, reflectors, rotors and machines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorCryptError {
    /// Configuration source could not be opened or read.
    #[error("Cannot read configuration file {}: {reason}", path.display())]
    ConfigurationFileUnreadable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },

    /// Token is not a decimal index in [0, 25].
    #[error("Malformed token {token:?} at position {position}: expected an index in 0..=25")]
    MalformedToken {
        /// Offending token text
        token: String,
        /// Zero-based token position within its source
        position: usize,
    },

    /// Index configured more than once as the source or target of a mapping.
    #[error("Index {index} is mapped more than once")]
    DuplicateMapping {
        /// Index that appeared twice
        index: usize,
    },

    /// Odd number of tokens for a pairwise table, or a reflector left unpaired indices.
    #[error("Incomplete or odd pairing: {count} indices supplied")]
    IncompleteOrOddPairing {
        /// Number of indices supplied
        count: usize,
    },

    /// More tokens than a pairwise table can hold.
    #[error("Too many parameters: {count} supplied, at most {max} allowed")]
    TooManyTokens {
        /// Number of tokens supplied
        count: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Reflector maps an index to itself.
    #[error("Reflector maps index {index} to itself")]
    FixedPointInReflector {
        /// Index paired with itself
        index: usize,
    },

    /// Rotor wiring has fewer than 26 entries or is not a bijection.
    #[error("Incomplete rotor wiring: {supplied} of 26 contacts mapped")]
    IncompleteRotorWiring {
        /// Number of wiring entries supplied
        supplied: usize,
    },

    /// Rotor has no notch positions.
    #[error("Rotor has no notch positions")]
    NoNotchConfigured,

    /// Machine assembled without any rotors.
    #[error("Machine requires at least one rotor")]
    NoRotors,

    /// No starting position supplied for a rotor.
    #[error("No starting position supplied for rotor {rotor}")]
    MissingRotorPosition {
        /// Zero-based rotor index, counted from the plugboard side
        rotor: usize,
    },

    /// Plaintext contains a character outside `A..=Z`.
    #[error("Invalid input character {character:?}: input must be A-Z")]
    InvalidInputCharacter {
        /// Rejected character
        character: char,
    },

    /// Configuration error tagged with the file it came from.
    #[error("In {}: {source}", path.display())]
    InFile {
        /// File whose content was rejected
        path: PathBuf,
        /// Error raised by its content
        source: Box<RotorCryptError>,
    },
}

impl RotorCryptError {
    /// Attaches the originating file to a content error.
    ///
    /// Errors that already name a file are returned unchanged.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            err @ (RotorCryptError::ConfigurationFileUnreadable { .. }
            | RotorCryptError::InFile { .. }) => err,
            other => RotorCryptError::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the underlying error, looking through any [`InFile`](Self::InFile) wrapper.
    pub fn root(&self) -> &RotorCryptError {
        match self {
            RotorCryptError::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}

//! Loading machines from configuration files.
//!
//! Each test writes its files into its own scratch directory under the
//! system temp dir and removes it afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use rotorcrypt::config::{load_plugboard, load_positions, load_reflector, load_rotor};
use rotorcrypt::{MachineConfig, RotorCryptError};

const ROTOR_I: &str = "4 10 12 5 11 6 3 16 21 25 13 19 14 22 24 7 23 20 18 15 0 8 1 17 2 9 16";
const ROTOR_II: &str = "0 9 3 10 18 8 17 20 23 1 11 7 22 19 12 2 16 6 25 13 15 24 5 21 14 4 4";
const ROTOR_III: &str = "1 3 5 7 9 11 2 15 17 19 23 21 25 13 24 4 8 22 6 0 10 12 20 18 16 14 21";
const REFLECTOR_B: &str = "0 24 1 17 2 20 3 7 4 16 5 18 6 11 8 15 9 23 10 13 12 14 19 25 21 22";

struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("rotorcrypt-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Scratch { dir }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn missing(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn standard_config(scratch: &Scratch, positions: Option<&str>) -> MachineConfig {
    MachineConfig {
        plugboard: scratch.file("null.pb", ""),
        reflector: scratch.file("B.rf", REFLECTOR_B),
        rotors: vec![
            scratch.file("III.rot", ROTOR_III),
            scratch.file("II.rot", ROTOR_II),
            scratch.file("I.rot", ROTOR_I),
        ],
        positions: positions.map(|p| scratch.file("rotor.pos", p)),
    }
}

fn assert_in_file(err: RotorCryptError, expected_path: &Path, expected: RotorCryptError) {
    match err {
        RotorCryptError::InFile { path, source } => {
            assert_eq!(path, expected_path);
            assert_eq!(*source, expected);
        }
        other => panic!("expected InFile, got {:?}", other),
    }
}

#[test]
fn machine_from_files_matches_known_vector() {
    let scratch = Scratch::new("vector");
    let mut machine = standard_config(&scratch, None).build().unwrap();
    assert_eq!(machine.encrypt_text("AAAAA").unwrap(), "BDZGO");
}

#[test]
fn positions_file_sets_start_offsets() {
    let scratch = Scratch::new("positions");
    // signal-entry order: III on U, II on D, I on A
    let mut machine = standard_config(&scratch, Some("20 3 0")).build().unwrap();
    assert_eq!(machine.encrypt_text("AAAA").unwrap(), "EQEZ");
}

#[test]
fn extra_positions_ignored() {
    let scratch = Scratch::new("extra-positions");
    let machine = standard_config(&scratch, Some("1 2 3 4 5")).build().unwrap();
    let offsets: Vec<usize> = machine.offsets().iter().map(|l| l.index()).collect();
    assert_eq!(offsets, vec![1, 2, 3]);
}

#[test]
fn short_positions_file_rejected() {
    let scratch = Scratch::new("short-positions");
    let config = standard_config(&scratch, Some("1 2"));
    let err = config.build().unwrap_err();
    assert_in_file(
        err,
        config.positions.as_deref().unwrap(),
        RotorCryptError::MissingRotorPosition { rotor: 2 },
    );
}

#[test]
fn unreadable_rotor_file_reported() {
    let scratch = Scratch::new("unreadable");
    let mut config = standard_config(&scratch, None);
    config.rotors[1] = scratch.missing("nope.rot");
    match config.build() {
        Err(RotorCryptError::ConfigurationFileUnreadable { path, .. }) => {
            assert_eq!(path, scratch.missing("nope.rot"))
        }
        other => panic!("expected ConfigurationFileUnreadable, got {:?}", other),
    }
}

#[test]
fn duplicate_rotor_target_names_file() {
    let scratch = Scratch::new("dup-rotor");
    let path = scratch.file(
        "bad.rot",
        "0 0 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 0",
    );
    let err = load_rotor(&path).unwrap_err();
    assert_eq!(err.root(), &RotorCryptError::DuplicateMapping { index: 0 });
    assert_in_file(err, &path, RotorCryptError::DuplicateMapping { index: 0 });
}

#[test]
fn rotor_without_notch_rejected() {
    let scratch = Scratch::new("no-notch");
    let tokens: Vec<String> = (0..26).map(|i| i.to_string()).collect();
    let path = scratch.file("plain.rot", &tokens.join(" "));
    assert_in_file(
        load_rotor(&path).unwrap_err(),
        &path,
        RotorCryptError::NoNotchConfigured,
    );
}

#[test]
fn malformed_plugboard_token_rejected() {
    let scratch = Scratch::new("bad-pb");
    let path = scratch.file("bad.pb", "0 1\n2 b");
    assert_in_file(
        load_plugboard(&path).unwrap_err(),
        &path,
        RotorCryptError::MalformedToken {
            token: "b".to_string(),
            position: 3,
        },
    );
}

#[test]
fn partial_reflector_rejected() {
    let scratch = Scratch::new("partial-rf");
    let path = scratch.file("partial.rf", "0 1 2 3 4 5");
    assert_in_file(
        load_reflector(&path).unwrap_err(),
        &path,
        RotorCryptError::IncompleteOrOddPairing { count: 6 },
    );
}

#[test]
fn malformed_positions_rejected() {
    let scratch = Scratch::new("bad-pos");
    let path = scratch.file("bad.pos", "0 30");
    assert_in_file(
        load_positions(&path).unwrap_err(),
        &path,
        RotorCryptError::MalformedToken {
            token: "30".to_string(),
            position: 1,
        },
    );
}

//! Shared alphabet and table helpers.

pub mod alphabet;

//! Testing infrastructure for todoview integration tests.
//!
//! This crate provides utilities for writing CLI integration tests:
//! - `TestWorld`: isolated data directory plus script files, runs the binary
//! - `assertions`: checks on the JSON `content` envelope
//! - `fixtures`: sample action scripts

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

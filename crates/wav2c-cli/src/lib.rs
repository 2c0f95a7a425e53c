//! wav2c CLI library.
//!
//! This crate provides the command implementations behind the `wav2c`
//! binary, which turns WAV clips into C headers for firmware builds.

pub mod commands;

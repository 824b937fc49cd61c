//! Morse code text codec
//!
//! Encodes letters and digits into separator-joined ITU Morse codes and back.
//! The command-line front end lives in `main.rs`; config is exposed here so
//! it can be tested.

pub mod config;
pub mod morse;

pub use morse::{decode, encode, Codec, MorseError, SymbolTable, Timing};

// src/morse/mod.rs  --  Symbol tables, codec, timing
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;
pub mod timing;

pub use codec::{check_separator, decode, encode, Codec};
pub use error::MorseError;
pub use table::SymbolTable;
pub use timing::{tone_sequence, Timing, ToneSeq};

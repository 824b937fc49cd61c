// src/morse/error.rs  --  Codec error type
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Failure of a single encode or decode call. There is never partial output.
pub enum MorseError {
    /// Input or separator the codec refuses to work with
    #[error("{0}")]
    InvalidInput(String),
    /// A character (encode) or token (decode) with no table entry
    #[error("unknown character {0}")]
    UnknownCharacter(String),
}

impl MorseError {
    pub(crate) fn invalid(msg: &str) -> Self {
        Self::InvalidInput(msg.to_string())
    }
}

/// Printable ASCII and spaces as-is, every other byte as `\xNN`.
pub(crate) fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b == b' ' || b.is_ascii_graphic() {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("\\x{b:02x}"));
        }
    }
    out
}

pub type Result<T> = std::result::Result<T, MorseError>;

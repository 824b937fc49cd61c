// src/morse/decoder.rs  --  Separator-joined Morse codes → lowercase text
use super::error::{escape_bytes, MorseError, Result};
use super::table::SymbolTable;

/// Decode `input`, splitting on `separator` and resolving each token through
/// the reverse table. All-or-nothing: the first token that does not resolve
/// (empty tokens included) fails the call with the whole input attached.
/// Input that is not UTF-8 is reported with its non-printable bytes escaped
/// as `\xNN`.
pub fn decode_with(table: &SymbolTable, input: &[u8], separator: &str) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    if separator.is_empty() {
        return Err(MorseError::invalid("separator can't be empty"));
    }

    let text = std::str::from_utf8(input)
        .map_err(|_| MorseError::UnknownCharacter(escape_bytes(input)))?;

    let mut out = String::with_capacity(text.len() / 2 + 1);
    for token in text.split(separator) {
        match table.char_for(token) {
            Some(ch) => out.push(ch),
            None => {
                log::debug!("[decoder] unresolved token {token:?}");
                return Err(MorseError::UnknownCharacter(text.to_string()));
            }
        }
    }
    log::trace!("[decoder] {} bytes → {} chars", input.len(), out.len());
    Ok(out)
}

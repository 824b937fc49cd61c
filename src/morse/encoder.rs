// src/morse/encoder.rs  --  Text bytes → separator-joined Morse codes
use super::error::{escape_bytes, MorseError, Result};
use super::table::SymbolTable;

/// Encode `input` with `table`, joining per-character codes with `separator`.
///
/// Spaces are rejected outright. Any other byte without a table entry
/// (punctuation, control or non-ASCII bytes) fails with `UnknownCharacter`.
pub fn encode_with(table: &SymbolTable, input: &[u8], separator: &str) -> Result<String> {
    if input.contains(&b' ') {
        return Err(MorseError::invalid("can't contain spaces"));
    }

    // longest standard code is 5 elements
    let mut out = String::with_capacity(input.len() * (5 + separator.len()));
    for (i, &b) in input.iter().enumerate() {
        let code = lookup(table, b)?;
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(code);
    }
    log::trace!("[encoder] {} bytes → {} chars", input.len(), out.len());
    Ok(out)
}

/// Per-character codes without joining; used for timing.
pub fn codes_with(table: &SymbolTable, input: &[u8]) -> Result<Vec<&'static str>> {
    if input.contains(&b' ') {
        return Err(MorseError::invalid("can't contain spaces"));
    }
    input.iter().map(|&b| lookup(table, b)).collect()
}

fn lookup(table: &SymbolTable, b: u8) -> Result<&'static str> {
    let found = if b.is_ascii() { table.code_for(char::from(b)) } else { None };
    found.ok_or_else(|| {
        let shown = escape_bytes(&[b]);
        log::debug!("[encoder] no code for {shown}");
        MorseError::UnknownCharacter(shown)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(s: &str, sep: &str) -> Result<String> {
        encode_with(SymbolTable::standard(), s.as_bytes(), sep)
    }

    #[test]
    fn test_known_words() {
        assert_eq!(enc("1", "/").unwrap(), ".----");
        assert_eq!(enc("F", "/").unwrap(), "..-.");
        assert_eq!(enc("SOS", "/").unwrap(), ".../---/...");
        assert_eq!(enc("dongle", "|").unwrap(), "-..|---|-.|--.|.-..|.");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(enc("F", "/"), enc("f", "/"));
        assert_eq!(enc("DoNgLe", "|"), enc("dongle", "|"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(enc("", "/").unwrap(), "");
        assert_eq!(enc("", "").unwrap(), "");
    }

    #[test]
    fn test_separator_only_between_codes() {
        assert_eq!(enc("e", "  ").unwrap(), ".");
        assert_eq!(enc("et", "<>").unwrap(), ".<>-");
        assert_eq!(enc("et", "").unwrap(), ".-");
    }

    #[test]
    fn test_space_rejected() {
        assert_eq!(
            enc("hello world", "/"),
            Err(MorseError::InvalidInput("can't contain spaces".into()))
        );
        assert!(enc(" ", "/").is_err());
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(enc("hi!", "/"), Err(MorseError::UnknownCharacter("!".into())));
        assert_eq!(enc("a\tb", "/"), Err(MorseError::UnknownCharacter("\\x09".into())));
        assert_eq!(
            encode_with(SymbolTable::standard(), &[b'a', 0xc3, 0xa9], "/"),
            Err(MorseError::UnknownCharacter("\\xc3".into()))
        );
    }

    #[test]
    fn test_codes_with() {
        let codes = codes_with(SymbolTable::standard(), b"Sos").unwrap();
        assert_eq!(codes, vec!["...", "---", "..."]);
        assert!(codes_with(SymbolTable::standard(), b"s s").is_err());
    }
}

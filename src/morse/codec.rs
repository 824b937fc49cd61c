// src/morse/codec.rs  --  Separator validation + table/separator bundle
use super::decoder::decode_with;
use super::encoder::{codes_with, encode_with};
use super::error::{MorseError, Result};
use super::table::SymbolTable;

/// A separator containing a dot or dash would make decoding ambiguous.
pub fn check_separator(separator: &str) -> Result<()> {
    if separator.contains(['.', '-']) {
        return Err(MorseError::invalid("separator can't contain '.' or '-'"));
    }
    Ok(())
}

/// Encode with the standard table.
pub fn encode(input: impl AsRef<[u8]>, separator: &str) -> Result<String> {
    check_separator(separator)?;
    encode_with(SymbolTable::standard(), input.as_ref(), separator)
}

/// Decode with the standard table.
pub fn decode(input: impl AsRef<[u8]>, separator: &str) -> Result<String> {
    check_separator(separator)?;
    decode_with(SymbolTable::standard(), input.as_ref(), separator)
}

/// A table reference plus a separator checked once up front.
#[derive(Debug, Clone)]
pub struct Codec<'t> {
    table:     &'t SymbolTable,
    separator: String,
}

impl Codec<'static> {
    pub fn new(separator: &str) -> Result<Self> {
        Codec::with_table(SymbolTable::standard(), separator)
    }

    /// Skips separator validation; the caller guarantees it is unambiguous.
    pub fn unchecked(separator: &str) -> Self {
        Self { table: SymbolTable::standard(), separator: separator.to_string() }
    }
}

impl<'t> Codec<'t> {
    pub fn with_table(table: &'t SymbolTable, separator: &str) -> Result<Self> {
        check_separator(separator)?;
        Ok(Self { table, separator: separator.to_string() })
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String> {
        encode_with(self.table, input.as_ref(), &self.separator)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<String> {
        decode_with(self.table, input.as_ref(), &self.separator)
    }

    /// Per-character codes of `input`, unjoined
    pub fn codes(&self, input: impl AsRef<[u8]>) -> Result<Vec<&'static str>> {
        codes_with(self.table, input.as_ref())
    }

    pub fn separator(&self) -> &str { &self.separator }
    pub fn table(&self) -> &'t SymbolTable { self.table }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert_eq!(encode("SOS", "/").unwrap(), ".../---/...");
        assert_eq!(encode(b"1".as_slice(), "/").unwrap(), ".----");
        assert_eq!(decode(".../---/...", "/").unwrap(), "sos");
        assert_eq!(decode(String::from("-..|---|-.|--.|.-..|."), "|").unwrap(), "dongle");
    }

    #[test]
    fn test_space_and_unknown_errors() {
        assert!(matches!(encode("hello world", "/"), Err(MorseError::InvalidInput(_))));
        assert!(matches!(decode("hello world", "/"), Err(MorseError::UnknownCharacter(_))));
    }

    #[test]
    fn test_ambiguous_separator() {
        for sep in [".", "-", "/-", " . "] {
            let want = Err(MorseError::InvalidInput("separator can't contain '.' or '-'".into()));
            assert_eq!(encode("ab", sep), want);
            assert_eq!(decode(".-", sep), want);
            assert!(Codec::new(sep).is_err());
        }
    }

    #[test]
    fn test_unchecked_skips_validation() {
        let codec = Codec::unchecked(".");
        assert_eq!(codec.encode("et").unwrap(), "..-");
        assert_eq!(codec.separator(), ".");
    }

    #[test]
    fn test_custom_table() {
        let table = SymbolTable::from_pairs([('?', "..--.."), ('e', ".")]).unwrap();
        let codec = Codec::with_table(&table, "/").unwrap();
        assert_eq!(codec.encode("e?E").unwrap(), "./..--../.");
        assert_eq!(codec.decode("./..--..").unwrap(), "e?");
        assert_eq!(codec.encode("a"), Err(MorseError::UnknownCharacter("a".into())));
    }

    #[test]
    fn test_codec_round_trip() {
        let codec = Codec::new(" / ").unwrap();
        let code = codec.encode("CQ73").unwrap();
        assert_eq!(code, "-.-. / --.- / --... / ...--");
        assert_eq!(codec.decode(&code).unwrap(), "cq73");
    }
}

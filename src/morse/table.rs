// src/morse/table.rs  --  Character ↔ code lookup tables
use super::error::{MorseError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// ITU Morse code, letters and digits
const ITU: [(char, &str); 36] = [
    ('a', ".-"),    ('b', "-..."),  ('c', "-.-."),  ('d', "-.."),
    ('e', "."),     ('f', "..-."),  ('g', "--."),   ('h', "...."),
    ('i', ".."),    ('j', ".---"),  ('k', "-.-"),   ('l', ".-.."),
    ('m', "--"),    ('n', "-."),    ('o', "---"),   ('p', ".--."),
    ('q', "--.-"),  ('r', ".-."),   ('s', "..."),   ('t', "-"),
    ('u', "..-"),   ('v', "...-"),  ('w', ".--"),   ('x', "-..-"),
    ('y', "-.--"),  ('z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"),
    ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."),
    ('8', "---.."), ('9', "----."),
];

static STANDARD: OnceLock<SymbolTable> = OnceLock::new();

/// Forward and reverse tables, built together and never mutated afterwards.
/// Characters are stored lowercase; lookups fold ASCII case.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(char, &'static str)>,
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// The shared ITU table, built on first use.
    pub fn standard() -> &'static SymbolTable {
        STANDARD.get_or_init(|| {
            log::trace!("[table] building standard table ({} entries)", ITU.len());
            Self::build(ITU)
        })
    }

    /// Build a custom table. Characters must be printable ASCII and every
    /// code a non-empty run of `.`/`-`. Characters (case-folded) and codes
    /// must be unique.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, &'static str)>,
    {
        let pairs: Vec<_> = pairs.into_iter().collect();
        for (i, &(ch, code)) in pairs.iter().enumerate() {
            if !ch.is_ascii_graphic() {
                return Err(MorseError::InvalidInput(format!(
                    "table characters must be printable ASCII, got {ch:?}"
                )));
            }
            if code.is_empty() || !code.bytes().all(|b| b == b'.' || b == b'-') {
                return Err(MorseError::InvalidInput(format!(
                    "code for '{ch}' must be dots and dashes, got {code:?}"
                )));
            }
            let lower = ch.to_ascii_lowercase();
            for &(other, other_code) in &pairs[..i] {
                if other.to_ascii_lowercase() == lower {
                    return Err(MorseError::InvalidInput(format!("duplicate character '{ch}'")));
                }
                if other_code == code {
                    return Err(MorseError::InvalidInput(format!(
                        "code {code} used for both '{other}' and '{ch}'"
                    )));
                }
            }
        }
        Ok(Self::build(pairs))
    }

    fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, &'static str)>,
    {
        let entries: Vec<_> = pairs
            .into_iter()
            .map(|(ch, code)| (ch.to_ascii_lowercase(), code))
            .collect();
        let forward = entries.iter().copied().collect();
        let reverse = entries.iter().map(|&(ch, code)| (code, ch)).collect();
        Self { entries, forward, reverse }
    }

    pub fn code_for(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch.to_ascii_lowercase()).copied()
    }

    pub fn char_for(&self, code: &str) -> Option<char> {
        self.reverse.get(code).copied()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_letters_and_digits() {
        let t = SymbolTable::standard();
        assert_eq!(t.len(), 36);
        for ch in ('a'..='z').chain('0'..='9') {
            assert!(t.code_for(ch).is_some(), "missing {ch}");
        }
        assert_eq!(t.code_for('?'), None);
        assert_eq!(t.code_for(' '), None);
    }

    #[test]
    fn test_lookup_folds_case() {
        let t = SymbolTable::standard();
        assert_eq!(t.code_for('F'), Some("..-."));
        assert_eq!(t.code_for('f'), Some("..-."));
    }

    #[test]
    fn test_reverse_is_inverse() {
        let t = SymbolTable::standard();
        for (ch, code) in t.iter() {
            assert_eq!(t.char_for(code), Some(ch));
        }
        assert_eq!(t.char_for("......."), None);
        assert_eq!(t.char_for(""), None);
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(SymbolTable::standard(), SymbolTable::standard()));
    }

    #[test]
    fn test_from_pairs_rejects_bad_codes() {
        assert!(SymbolTable::from_pairs([('a', ".-"), ('b', ".-")]).is_err());
        assert!(SymbolTable::from_pairs([('a', ".-"), ('A', "-")]).is_err());
        assert!(SymbolTable::from_pairs([('a', "")]).is_err());
        assert!(SymbolTable::from_pairs([('a', ".x")]).is_err());
        assert!(SymbolTable::from_pairs([(' ', "..--")]).is_err());
        assert!(SymbolTable::from_pairs([('é', "..-..")]).is_err());
    }

    #[test]
    fn test_from_pairs_custom() {
        let t = SymbolTable::from_pairs([('?', "..--.."), ('E', ".")]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.code_for('e'), Some("."));
        assert_eq!(t.char_for("..--.."), Some('?'));
    }
}

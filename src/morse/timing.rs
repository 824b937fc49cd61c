// src/morse/timing.rs  --  WPM → element durations (PARIS standard) + airtime
use std::time::Duration;

pub type ToneSeq = Vec<(bool, Duration)>; // (key_down, duration)

/// All timing derived from a single dot length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub dot:        Duration,  // 1 unit
    pub dash:       Duration,  // 3 units
    pub elem_gap:   Duration,  // 1 unit  (between dits/dahs in same char)
    pub char_gap:   Duration,  // 3 units (between characters)
    pub word_gap:   Duration,  // 7 units (between words)
}

impl Timing {
    /// PARIS standard: dot = 1200 ms / wpm
    pub fn from_wpm(wpm: u8) -> Self {
        let dot_ms = 1200 / wpm.max(1) as u64;
        Self {
            dot:      Duration::from_millis(dot_ms),
            dash:     Duration::from_millis(dot_ms * 3),
            elem_gap: Duration::from_millis(dot_ms),
            char_gap: Duration::from_millis(dot_ms * 3),
            word_gap: Duration::from_millis(dot_ms * 7),
        }
    }

    /// Farnsworth: characters at `char_wpm`, gaps stretched to `eff_wpm`.
    /// An effective speed above the character speed leaves the gaps alone.
    pub fn farnsworth(char_wpm: u8, eff_wpm: u8) -> Self {
        let base = Self::from_wpm(char_wpm);
        let eff = Self::from_wpm(eff_wpm);
        Self {
            char_gap: base.char_gap.max(eff.char_gap),
            word_gap: base.word_gap.max(eff.word_gap),
            ..base
        }
    }

    /// Total keying time of `words`, each a list of per-character codes
    pub fn airtime(&self, words: &[Vec<&str>]) -> Duration {
        tone_sequence(words, self).iter().map(|(_, d)| *d).sum()
    }
}

/// Key-down/key-up schedule for `words`. Gaps go only between elements,
/// characters and words, never after the last one.
pub fn tone_sequence(words: &[Vec<&str>], t: &Timing) -> ToneSeq {
    let mut seq = Vec::new();
    for (wi, word) in words.iter().enumerate() {
        for (ci, code) in word.iter().enumerate() {
            for (ei, el) in code.bytes().enumerate() {
                if ei > 0 { seq.push((false, t.elem_gap)); }
                seq.push((true, if el == b'-' { t.dash } else { t.dot }));
            }
            if ci + 1 < word.len() { seq.push((false, t.char_gap)); }
        }
        if wi + 1 < words.len() { seq.push((false, t.word_gap)); }
    }
    seq
}

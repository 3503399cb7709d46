mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| table::MAPPING.iter().copied().collect());

/// Longest key in the table, in codepoints. Bounds the greedy scan window.
static MAX_KEY_CHARS: Lazy<usize> = Lazy::new(|| {
    table::MAPPING
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(1)
});

/// How grapheme units are matched against the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// One codepoint at a time. Bug-compatible with the original deployment:
    /// multi-codepoint table keys (virama clusters, conjuncts) never match
    /// and their codepoints resolve individually or pass through.
    Literal,
    /// Greedy longest-match-first scan, so multi-codepoint keys resolve.
    LongestMatch,
}

impl MatchMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "literal" => Some(Self::Literal),
            "longest" => Some(Self::LongestMatch),
            _ => None,
        }
    }
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::LongestMatch
    }
}

/// Maps Sinhala Unicode text to a Latin phonetic approximation.
///
/// Total and pure: every codepoint either resolves through the table or is
/// copied through unchanged, so any input (including empty) produces output.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator {
    mode: MatchMode,
}

impl Transliterator {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn transliterate(&self, text: &str) -> String {
        match self.mode {
            MatchMode::Literal => Self::transliterate_literal(text),
            MatchMode::LongestMatch => Self::transliterate_longest(text),
        }
    }

    fn transliterate_literal(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let key: &str = ch.encode_utf8(&mut buf);
            match TABLE.get(key) {
                Some(phonetic) => out.push_str(phonetic),
                None => out.push(ch),
            }
        }
        out
    }

    fn transliterate_longest(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        while pos < chars.len() {
            let window = MAX_KEY_CHARS.min(chars.len() - pos);
            let mut matched = None;

            for len in (1..=window).rev() {
                let candidate: String = chars[pos..pos + len].iter().collect();
                if let Some(phonetic) = TABLE.get(candidate.as_str()) {
                    matched = Some((len, *phonetic));
                    break;
                }
            }

            match matched {
                Some((len, phonetic)) => {
                    out.push_str(phonetic);
                    pos += len;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }

        out
    }
}

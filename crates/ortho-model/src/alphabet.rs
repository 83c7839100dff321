//! Canonical alphabet: the closed set of symbols considered correct.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::rule::CorrespondenceTable;

/// Default extra symbols accepted next to the table targets (hyphen, em dash).
pub const DEFAULT_EXTRA_SYMBOLS: [&str; 2] = ["-", "—"];

/// Ordered, deduplicated list of canonical symbols.
///
/// Symbols may be longer than one character (digraphs); `chars` holds every
/// character that occurs in any symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<String>,
    chars: BTreeSet<char>,
}

impl Alphabet {
    /// Build an alphabet from symbols, keeping first-seen order.
    /// Empty symbols are ignored.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut alphabet = Self::default();
        for symbol in symbols {
            alphabet.push(symbol.as_ref());
        }
        alphabet
    }

    /// Extra symbols first, then every table target in sorted order.
    pub fn from_table<S: AsRef<str>>(table: &CorrespondenceTable, extra: &[S]) -> Self {
        let mut targets: Vec<&str> = table.targets().collect();
        targets.sort_unstable();
        let mut alphabet = Self::new(extra);
        for target in targets {
            alphabet.push(target);
        }
        alphabet
    }

    fn push(&mut self, symbol: &str) {
        if symbol.is_empty() || self.contains_symbol(symbol) {
            return;
        }
        self.chars.extend(symbol.chars());
        self.symbols.push(symbol.to_string());
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn chars(&self) -> &BTreeSet<char> {
        &self.chars
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    pub fn contains_char(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

//! Detection of characters outside the canonical alphabet.

use regex::{Regex, RegexBuilder};

use ortho_model::{Alphabet, IncorrectSymbol};

use crate::error::{Result, TransformError};

/// Compiled matcher for characters that are neither in the alphabet nor a space.
///
/// Matching is case-insensitive: `K` is correct when `k` is in the alphabet.
#[derive(Debug, Clone)]
pub struct SymbolValidator {
    pattern: Regex,
}

impl SymbolValidator {
    pub fn new(alphabet: &Alphabet) -> Result<Self> {
        let pattern = RegexBuilder::new(&incorrect_symbol_class(alphabet))
            .case_insensitive(true)
            .build()
            .map_err(TransformError::SymbolPattern)?;
        Ok(Self { pattern })
    }

    /// Every offending character, left to right, with its byte span.
    pub fn find(&self, text: &str) -> Vec<IncorrectSymbol> {
        self.pattern
            .find_iter(text)
            .map(|m| IncorrectSymbol {
                symbol: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    pub fn is_clean(&self, text: &str) -> bool {
        !self.pattern.is_match(text)
    }
}

/// One-shot form of [`SymbolValidator::find`].
///
/// Prefer building a [`SymbolValidator`] once when checking many strings.
pub fn find_incorrect_symbols(text: &str, alphabet: &Alphabet) -> Result<Vec<IncorrectSymbol>> {
    Ok(SymbolValidator::new(alphabet)?.find(text))
}

/// Negated class of the alphabet characters plus space.
fn incorrect_symbol_class(alphabet: &Alphabet) -> String {
    let mut class = String::from("[^ ");
    let mut buf = [0u8; 4];
    for ch in alphabet.chars() {
        class.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
    }
    class.push(']');
    class
}

//! Rule-driven orthography conversion.
//!
//! A [`CorrespondenceTable`] is compiled once into an [`OrthoConverter`]:
//! every active rule becomes a case-insensitive regex, applied in table order.
//! After substitution, spaces are protected with a tab sentinel so that
//! optional segmentation can tell word boundaries from symbol boundaries.

use std::borrow::Cow;

use regex::{NoExpand, Regex, RegexBuilder};

use ortho_model::{Alphabet, CorrespondenceTable, DEFAULT_EXTRA_SYMBOLS, IncorrectSymbol};

use crate::error::{Result, TransformError};
use crate::symbols::SymbolValidator;

/// Marker inserted next to every space before segmentation.
pub const WORD_SENTINEL: &str = "\t";

/// A space with its sentinel: `" "` becomes `" \t "`.
const MARKED_SPACE: &str = " \t ";

/// Separator between words in segmented output.
const WORD_BOUNDARY: &str = "  ";

/// Conversion settings that are not part of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Symbols accepted as correct in addition to the table targets.
    pub extra_symbols: Vec<String>,
    /// Split output into space-separated symbols, words separated by two spaces.
    pub segment: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            extra_symbols: DEFAULT_EXTRA_SYMBOLS.iter().map(ToString::to_string).collect(),
            segment: false,
        }
    }
}

impl ConvertOptions {
    #[must_use]
    pub fn with_extra_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_segment(mut self, segment: bool) -> Self {
        self.segment = segment;
        self
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    row: usize,
    pattern: Regex,
    replace_to: String,
}

/// A correspondence table compiled for repeated use.
#[derive(Debug, Clone)]
pub struct OrthoConverter {
    rules: Vec<CompiledRule>,
    alphabet: Alphabet,
    validator: SymbolValidator,
    segmenter: Regex,
    segment: bool,
}

impl OrthoConverter {
    /// Compile every active rule of `table`.
    ///
    /// Fails on the first rule whose `letter` is empty or not a valid regex.
    pub fn new(table: &CorrespondenceTable, options: &ConvertOptions) -> Result<Self> {
        let mut rules = Vec::new();
        for (row, rule) in table.active_rules() {
            if rule.letter.is_empty() {
                return Err(TransformError::EmptyPattern { row });
            }
            let pattern = RegexBuilder::new(&rule.letter)
                .case_insensitive(true)
                .build()
                .map_err(|source| TransformError::InvalidPattern {
                    row,
                    pattern: rule.letter.clone(),
                    source,
                })?;
            tracing::debug!(row, pattern = %rule.letter, target = %rule.replace_to, "compiled rule");
            rules.push(CompiledRule {
                row,
                pattern,
                replace_to: rule.replace_to.clone(),
            });
        }

        let alphabet = Alphabet::from_table(table, &options.extra_symbols);
        let validator = SymbolValidator::new(&alphabet)?;
        let segmenter = build_segmenter(table, &options.extra_symbols)?;

        Ok(Self {
            rules,
            alphabet,
            validator,
            segmenter,
            segment: options.segment,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of active (compiled) rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Table rows of the compiled rules, in application order.
    pub fn rule_rows(&self) -> Vec<usize> {
        self.rules.iter().map(|rule| rule.row).collect()
    }

    pub fn segments(&self) -> bool {
        self.segment
    }

    /// Convert `text` to the canonical orthography.
    pub fn convert(&self, text: &str) -> String {
        let substituted = self.substitute(text);
        self.finish(&substituted)
    }

    /// Convert `text` and report the characters left outside the alphabet.
    ///
    /// Spans refer to the substituted text before segmentation, which is
    /// the same as the output when segmentation is off.
    pub fn convert_with_issues(&self, text: &str) -> (String, Vec<IncorrectSymbol>) {
        let substituted = self.substitute(text);
        let issues = self.validator.find(&substituted);
        (self.finish(&substituted), issues)
    }

    /// Apply the active rules in table order.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(replaced) = rule.pattern.replace_all(&out, NoExpand(&rule.replace_to))
            {
                out = replaced;
            }
        }
        out
    }

    /// Segment `text` into canonical symbols without applying any rule.
    pub fn segment_text(&self, text: &str) -> String {
        self.render_segments(&mark_spaces(text))
    }

    fn finish(&self, substituted: &str) -> String {
        let marked = mark_spaces(substituted);
        if self.segment {
            self.render_segments(&marked)
        } else {
            marked.replace(MARKED_SPACE, " ")
        }
    }

    /// Join symbol matches with one space and sentinel runs with two.
    fn render_segments(&self, marked: &str) -> String {
        let mut out = String::with_capacity(marked.len() * 2);
        let mut boundary = false;
        for found in self.segmenter.find_iter(marked) {
            let token = found.as_str();
            if token == WORD_SENTINEL {
                boundary = true;
                continue;
            }
            if boundary {
                out.push_str(WORD_BOUNDARY);
                boundary = false;
            } else if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
        if boundary {
            out.push_str(WORD_BOUNDARY);
        }
        out
    }
}

fn mark_spaces(text: &str) -> String {
    text.replace(' ', MARKED_SPACE)
}

/// Alternation of table targets (table order), extra symbols, then the sentinel.
///
/// Alternatives are tried leftmost-first, so a digraph only wins over its
/// first letter when it comes earlier in the table.
fn build_segmenter<S: AsRef<str>>(table: &CorrespondenceTable, extra: &[S]) -> Result<Regex> {
    let mut symbols: Vec<&str> = table.targets().collect();
    for symbol in extra {
        symbols.push(symbol.as_ref());
    }
    let mut alternatives: Vec<String> = Vec::with_capacity(symbols.len() + 1);
    for symbol in symbols {
        let escaped = regex::escape(symbol);
        if !symbol.is_empty() && !alternatives.contains(&escaped) {
            alternatives.push(escaped);
        }
    }
    alternatives.push(regex::escape(WORD_SENTINEL));
    Regex::new(&alternatives.join("|")).map_err(TransformError::SymbolPattern)
}

/// Convert a single string with a freshly compiled table.
///
/// Convenience for one-off calls; batch callers should build an
/// [`OrthoConverter`] once and reuse it.
pub fn convert_to_ortho<S: AsRef<str>>(
    text: &str,
    table: &CorrespondenceTable,
    correct_symbols: &[S],
    segment: bool,
) -> Result<String> {
    let options = ConvertOptions::default()
        .with_extra_symbols(correct_symbols.iter().map(|s| s.as_ref().to_string()))
        .with_segment(segment);
    Ok(OrthoConverter::new(table, &options)?.convert(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortho_model::CorrespondenceRule;

    fn table(rules: &[(&str, &str)]) -> CorrespondenceTable {
        CorrespondenceTable::new(
            rules
                .iter()
                .map(|(letter, target)| CorrespondenceRule::new(*letter, *target))
                .collect(),
        )
    }

    #[test]
    fn replaces_case_insensitively() {
        let converter = OrthoConverter::new(&table(&[("c", "k")]), &ConvertOptions::default()).unwrap();

        assert_eq!(converter.convert("Cat cot"), "kat kot");
    }

    #[test]
    fn inactive_rules_never_fire() {
        let mut table = table(&[("c", "k")]);
        table.push(CorrespondenceRule::inactive("a", "o"));
        let converter = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap();

        assert_eq!(converter.convert("cat"), "kat");
        assert_eq!(converter.rule_rows(), vec![1]);
        assert!(converter.alphabet().contains_symbol("o"));
    }

    #[test]
    fn padded_flags_never_fire() {
        let table = CorrespondenceTable::new(vec![
            CorrespondenceRule {
                letter: "c".to_string(),
                replace: " yes".to_string(),
                replace_to: "k".to_string(),
            },
            CorrespondenceRule {
                letter: "t".to_string(),
                replace: "yes ".to_string(),
                replace_to: "d".to_string(),
            },
        ]);
        let converter = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap();

        assert_eq!(converter.rule_count(), 0);
        assert_eq!(converter.convert("cat"), "cat");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let forward = table(&[("c", "k"), ("k", "q")]);
        let backward = table(&[("k", "q"), ("c", "k")]);
        let options = ConvertOptions::default();

        assert_eq!(OrthoConverter::new(&forward, &options).unwrap().convert("ck"), "qq");
        assert_eq!(OrthoConverter::new(&backward, &options).unwrap().convert("ck"), "kq");
    }

    #[test]
    fn replacement_is_literal() {
        let converter = OrthoConverter::new(&table(&[("(a)", "$1x")]), &ConvertOptions::default()).unwrap();
        assert_eq!(converter.convert("a"), "$1x");
    }

    #[test]
    fn empty_target_deletes_matches() {
        let converter = OrthoConverter::new(&table(&[("'", "")]), &ConvertOptions::default()).unwrap();
        assert_eq!(converter.convert("k'at"), "kat");
    }

    #[test]
    fn unsegmented_output_keeps_spaces() {
        let converter = OrthoConverter::new(&table(&[("c", "k")]), &ConvertOptions::default()).unwrap();

        assert_eq!(converter.convert("cat  dog "), "kat  dog ");
    }

    #[test]
    fn segmentation_splits_symbols_and_marks_words() {
        let table = table(&[("c", "k"), ("a", "a"), ("t", "t"), ("d", "d"), ("o", "o"), ("g", "g")]);
        let options = ConvertOptions::default().with_segment(true);
        let converter = OrthoConverter::new(&table, &options).unwrap();

        assert_eq!(converter.convert("cat dog"), "k a t  d o g");
        assert_eq!(converter.convert("cat-dog"), "k a t - d o g");
    }

    #[test]
    fn segmentation_drops_unknown_characters() {
        let table = table(&[("a", "a"), ("t", "t")]);
        let converter =
            OrthoConverter::new(&table, &ConvertOptions::default().with_segment(true)).unwrap();

        assert_eq!(converter.convert("at?"), "a t");
    }

    #[test]
    fn digraphs_follow_table_order() {
        let digraph_first = table(&[("kh", "кӀ"), ("k", "к")]);
        let converter =
            OrthoConverter::new(&digraph_first, &ConvertOptions::default().with_segment(true))
                .unwrap();

        assert_eq!(converter.convert("khk"), "кӀ к");
    }

    #[test]
    fn segmenting_twice_keeps_the_symbols() {
        let table = table(&[("a", "a"), ("b", "b")]);
        let converter =
            OrthoConverter::new(&table, &ConvertOptions::default().with_segment(true)).unwrap();

        let once = converter.convert("ab ba");
        let twice = converter.segment_text(&once);

        assert_eq!(once, "a b  b a");
        assert_eq!(
            twice.split_whitespace().collect::<Vec<_>>(),
            once.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn issues_are_reported_on_request() {
        let converter = OrthoConverter::new(&table(&[("c", "k")]), &ConvertOptions::default()).unwrap();

        let (text, issues) = converter.convert_with_issues("cat");

        assert_eq!(text, "kat");
        let symbols: Vec<&str> = issues.iter().map(|i| i.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["a", "t"]);
    }

    #[test]
    fn invalid_pattern_names_the_row() {
        let table = table(&[("c", "k"), ("(", "x")]);

        let err = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap_err();

        assert!(matches!(err, TransformError::InvalidPattern { row: 2, .. }));
    }

    #[test]
    fn empty_active_pattern_is_rejected() {
        let err = OrthoConverter::new(&table(&[("", "x")]), &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, TransformError::EmptyPattern { row: 1 }));
    }

    #[test]
    fn convert_to_ortho_matches_documented_example() {
        let table = table(&[("c", "k")]);

        assert_eq!(
            convert_to_ortho("cat-dog", &table, &["-", "—"], false).unwrap(),
            "kat-dog"
        );
    }
}

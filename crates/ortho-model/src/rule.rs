//! Correspondence rules and the ordered table that holds them.

use serde::{Deserialize, Serialize};

/// Flag value that marks a rule as active.
pub const ACTIVE_FLAG: &str = "yes";

/// One row of the correspondence table.
///
/// `letter` is a regular expression matched case-insensitively; every match
/// is replaced by `replace_to` when the rule is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrespondenceRule {
    pub letter: String,
    pub replace: String,
    pub replace_to: String,
}

impl CorrespondenceRule {
    /// Create an active rule.
    pub fn new(letter: impl Into<String>, replace_to: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            replace: ACTIVE_FLAG.to_string(),
            replace_to: replace_to.into(),
        }
    }

    /// Create a rule whose flag is not `yes`.
    ///
    /// Inactive rules never fire but their target still belongs to the
    /// canonical alphabet.
    pub fn inactive(letter: impl Into<String>, replace_to: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            replace: "no".to_string(),
            replace_to: replace_to.into(),
        }
    }

    /// Returns true if the `replace` flag is exactly `yes`.
    ///
    /// Padded or capitalized flags (`" yes"`, `"Yes"`) leave the rule inactive.
    pub fn is_active(&self) -> bool {
        self.replace == ACTIVE_FLAG
    }
}

/// Correspondence rules in file order.
///
/// Order matters: a later rule may rewrite what an earlier rule produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrespondenceTable {
    rules: Vec<CorrespondenceRule>,
}

impl CorrespondenceTable {
    pub fn new(rules: Vec<CorrespondenceRule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: CorrespondenceRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[CorrespondenceRule] {
        &self.rules
    }

    /// Active rules with their 1-based row number in the table.
    pub fn active_rules(&self) -> impl Iterator<Item = (usize, &CorrespondenceRule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is_active())
            .map(|(idx, rule)| (idx + 1, rule))
    }

    /// Non-empty `replace_to` values of every row, active or not, in table order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|rule| rule.replace_to.as_str())
            .filter(|target| !target.is_empty())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

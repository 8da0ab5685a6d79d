//! Replacement rules and ordered rule sets.

pub mod builtin;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RewriteError, RewriteResult};

pub use builtin::service_page_rules;
pub use loader::{load_rule_set, parse_rule_blocks};

/// An exact (old, new) substring pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Literal text to find
    pub old: String,
    /// Literal text written in its place
    pub new: String,
}

impl ReplacementRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Reject rules that cannot be applied literally.
    ///
    /// An empty `old` would match at every character boundary.
    pub fn validate(&self) -> RewriteResult<()> {
        if self.old.is_empty() {
            return Err(RewriteError::invalid_rule(format!(
                "old text must not be empty (new text: {:?})",
                self.new
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // split('\n') keeps trailing newlines and '\r'
        writeln!(f, "<<<<<<< SEARCH")?;
        for line in self.old.split('\n') {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "=======")?;
        for line in self.new.split('\n') {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, ">>>>>>> REPLACE")?;
        Ok(())
    }
}

/// A named, ordered list of rules applied one after another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub name: String,
    pub rules: Vec<ReplacementRule>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule, builder style
    pub fn with_rule(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.rules.push(ReplacementRule::new(old, new));
        self
    }

    pub fn push(&mut self, rule: ReplacementRule) {
        self.rules.push(rule);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReplacementRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate every rule and require at least one
    pub fn validate(&self) -> RewriteResult<()> {
        if self.rules.is_empty() {
            return Err(RewriteError::parse_error(format!(
                "rule set '{}' contains no rules",
                self.name
            )));
        }
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate().map_err(|e| match e {
                RewriteError::InvalidRule { message } => {
                    RewriteError::invalid_rule(format!("rule {}: {}", index + 1, message))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ReplacementRule;
    type IntoIter = std::slice::Iter<'a, ReplacementRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

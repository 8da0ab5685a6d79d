//! Applies a rule set to a document in one linear pass.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::diff::{self, LineStats};
use crate::document::Document;
use crate::error::RewriteResult;
use crate::rules::{ReplacementRule, RuleSet};

/// What one rule did during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Zero-based position in the rule set
    pub index: usize,
    pub rule: ReplacementRule,
    /// Non-overlapping occurrences replaced
    pub occurrences: usize,
}

impl RuleOutcome {
    pub fn matched(&self) -> bool {
        self.occurrences > 0
    }
}

/// Result of rewriting one file
#[derive(Debug, Clone)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub original: String,
    pub rewritten: String,
    pub outcomes: Vec<RuleOutcome>,
    /// False for dry runs
    pub written: bool,
}

impl RewriteReport {
    pub fn changed(&self) -> bool {
        self.original != self.rewritten
    }

    /// Number of rules that replaced at least one occurrence
    pub fn rules_fired(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matched()).count()
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.occurrences).sum()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.matched())
    }

    pub fn line_stats(&self) -> LineStats {
        diff::line_stats(&self.original, &self.rewritten)
    }

    /// Unified diff of the pass, empty if nothing changed
    pub fn diff(&self) -> String {
        diff::unified_diff(
            &self.path.to_string_lossy(),
            &self.original,
            &self.rewritten,
        )
    }

    /// Human-readable summary of the pass
    pub fn summary(&self) -> String {
        let stats = self.line_stats();
        let replacements = self.total_replacements();
        let mut summary = format!(
            "{}: {}/{} rules fired, {} replacement{}, +{} -{} lines",
            self.path.display(),
            self.rules_fired(),
            self.outcomes.len(),
            replacements,
            if replacements == 1 { "" } else { "s" },
            stats.inserted,
            stats.deleted
        );

        let unmatched: Vec<String> = self
            .unmatched()
            .map(|o| (o.index + 1).to_string())
            .collect();
        if !unmatched.is_empty() {
            summary.push_str(&format!("\nno match for rules: {}", unmatched.join(", ")));
        }
        if !self.written {
            summary.push_str("\n(dry run, file not written)");
        }
        summary
    }
}

/// Drives an ordered rule set over a file
#[derive(Debug, Clone)]
pub struct TextRewriter {
    rules: RuleSet,
    dry_run: bool,
}

impl TextRewriter {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            dry_run: false,
        }
    }

    /// Run the pass without writing the file back
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Apply every rule, in order, to the document's current buffer.
    ///
    /// A rule whose old text is missing contributes nothing; it is not an error.
    pub fn apply(&self, document: &mut Document) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let occurrences = document.apply(rule);
                debug!(
                    "Rule {}/{}: {} occurrence(s) of {:?}",
                    index + 1,
                    self.rules.len(),
                    occurrences,
                    rule.old
                );
                RuleOutcome {
                    index,
                    rule: rule.clone(),
                    occurrences,
                }
            })
            .collect()
    }

    /// Rewrite text held in memory
    pub fn rewrite_text(&self, text: &str) -> (String, Vec<RuleOutcome>) {
        let mut document = Document::from_text(PathBuf::new(), text);
        let outcomes = self.apply(&mut document);
        (document.into_content(), outcomes)
    }

    /// Load, rewrite and (unless dry-running) overwrite one file.
    ///
    /// The file is written even when no rule matched.
    pub fn rewrite_file(&self, path: impl AsRef<Path>) -> RewriteResult<RewriteReport> {
        let path = path.as_ref();
        let mut document = Document::load(path)?;
        let original = document.content().to_string();

        let outcomes = self.apply(&mut document);

        if !self.dry_run {
            document.save()?;
        }

        let report = RewriteReport {
            path: path.to_path_buf(),
            original,
            rewritten: document.into_content(),
            outcomes,
            written: !self.dry_run,
        };

        info!(
            "Rewrote {} with rule set '{}': {}/{} rules fired, {} replacements",
            path.display(),
            self.rules.name,
            report.rules_fired(),
            report.outcomes.len(),
            report.total_replacements()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RewriteError;
    use crate::rules::service_page_rules;
    use std::fs;
    use tempfile::tempdir;

    const SERVICE_PAGE: &str = r#"const services = [
  {
    title: "Digital Marketing Strategy",
    subtitle: "Growth Arrows, Spark Trails, and Dynamic Analytics Bars.",
    deliverables: [
      "Full Media Buying Strategy",
      "A/B Test Funnel Setup",
      "Proprietary Analytics Dashboard",
      "Monthly Performance Forecasts",
    ],
    trust: "Managed $50M+ in ad spend with an average 4x ROAS.",
  },
  {
    title: "Google My Business Mastery",
    deliverables: [
      "Review Generation Strategy",
      "Local Citation Cleanup",
      "GMB Posting Schedule",
    ],
  },
];
"#;

    #[test]
    fn test_marketing_title_is_replaced() {
        let rewriter = TextRewriter::new(service_page_rules());
        let (text, _) = rewriter.rewrite_text(SERVICE_PAGE);

        assert!(text.contains(r#"title: "Digital Marketing & Ads""#));
        assert!(!text.contains(r#"title: "Digital Marketing Strategy""#));
    }

    #[test]
    fn test_list_entries_replaced_independently() {
        let rewriter = TextRewriter::new(service_page_rules());
        let (text, _) = rewriter.rewrite_text(SERVICE_PAGE);

        assert!(text.contains(r#""Facebook/Instagram Ads","#));
        assert!(text.contains(r#""LinkedIn & YouTube Ads","#));
        assert!(!text.contains("A/B Test Funnel Setup"));
        assert!(!text.contains("Proprietary Analytics Dashboard"));
        assert!(text.contains(r#""Google Ads Management","#));
        assert!(text.contains("const services = ["));
    }

    #[test]
    fn test_absent_pattern_raises_no_error() {
        let rewriter = TextRewriter::new(service_page_rules());
        let (text, outcomes) = rewriter.rewrite_text(SERVICE_PAGE);

        let geo = outcomes
            .iter()
            .find(|o| o.rule.old == r#""Geo-Targeted Content""#)
            .unwrap();
        assert_eq!(geo.occurrences, 0);
        assert!(!text.contains("GMB Profile Optimization"));
    }

    #[test]
    fn test_single_occurrence_property() {
        let rewriter = TextRewriter::new(service_page_rules());
        let (text, outcomes) = rewriter.rewrite_text(SERVICE_PAGE);

        let single: Vec<&RuleOutcome> = outcomes.iter().filter(|o| o.occurrences == 1).collect();
        assert_eq!(single.len(), 11);
        for outcome in single {
            assert!(!text.contains(&outcome.rule.old));
            assert_eq!(text.matches(outcome.rule.new.as_str()).count(), 1);
        }
    }

    #[test]
    fn test_rules_chain_in_order() {
        let forward = TextRewriter::new(RuleSet::new("chain").with_rule("A", "B").with_rule("B", "C"));
        let (text, outcomes) = forward.rewrite_text("A");
        assert_eq!(text, "C");
        assert_eq!(outcomes[1].occurrences, 1);

        let reversed = TextRewriter::new(RuleSet::new("chain").with_rule("B", "C").with_rule("A", "B"));
        let (text, _) = reversed.rewrite_text("A");
        assert_eq!(text, "B");
    }

    #[test]
    fn test_second_run_finds_nothing() {
        let rewriter = TextRewriter::new(service_page_rules());
        let (once, _) = rewriter.rewrite_text(SERVICE_PAGE);
        let (twice, outcomes) = rewriter.rewrite_text(&once);

        assert_eq!(once, twice);
        assert!(outcomes.iter().all(|o| o.occurrences == 0));
    }

    #[test]
    fn test_rewrite_file_writes_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, SERVICE_PAGE).unwrap();

        let report = TextRewriter::new(service_page_rules())
            .rewrite_file(&path)
            .unwrap();

        assert!(report.written);
        assert!(report.changed());
        assert_eq!(fs::read_to_string(&path).unwrap(), report.rewritten);
        // both copy paragraphs, the GMB subtitle and the geo entry are absent
        assert_eq!(report.rules_fired(), 11);
        let unmatched: Vec<usize> = report.unmatched().map(|o| o.index).collect();
        assert_eq!(unmatched, vec![2, 9, 10, 11]);
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, SERVICE_PAGE).unwrap();

        let report = TextRewriter::new(service_page_rules())
            .dry_run(true)
            .rewrite_file(&path)
            .unwrap();

        assert!(!report.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), SERVICE_PAGE);
        assert!(report.diff().contains("+    title: \"Digital Marketing & Ads\","));
        assert!(report.summary().contains("dry run"));
    }

    #[test]
    fn test_unchanged_file_is_still_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "nothing to see").unwrap();

        let report = TextRewriter::new(service_page_rules())
            .rewrite_file(&path)
            .unwrap();

        assert!(report.written);
        assert!(!report.changed());
        assert_eq!(report.rules_fired(), 0);
        assert!(report.diff().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = TextRewriter::new(service_page_rules()).rewrite_file(dir.path().join("nope.tsx"));
        assert!(matches!(result, Err(RewriteError::Io { .. })));
    }

    #[test]
    fn test_summary_pluralizes_replacements() {
        let rewriter = TextRewriter::new(RuleSet::new("ads").with_rule("Ads", "Campaigns"));
        let (rewritten, outcomes) = rewriter.rewrite_text("Ads\nAds\n");
        let report = RewriteReport {
            path: PathBuf::from("page.tsx"),
            original: "Ads\nAds\n".to_string(),
            rewritten,
            outcomes,
            written: false,
        };

        assert!(report.summary().starts_with("page.tsx: 1/1 rules fired, 2 replacements,"));
    }

    #[test]
    fn test_summary_lists_unmatched_rules() {
        let rewriter = TextRewriter::new(RuleSet::new("two").with_rule("x", "y").with_rule("q", "r"));
        let (rewritten, outcomes) = rewriter.rewrite_text("x\n");
        let report = RewriteReport {
            path: PathBuf::from("page.tsx"),
            original: "x\n".to_string(),
            rewritten,
            outcomes,
            written: true,
        };

        let summary = report.summary();
        assert!(summary.starts_with("page.tsx: 1/2 rules fired, 1 replacement, +1 -1 lines"));
        assert!(summary.contains("no match for rules: 2"));
    }
}

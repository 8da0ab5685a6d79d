use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{ReplacementRule, RuleSet};
use crate::error::{map_io_err, RewriteError, RewriteResult};

lazy_static! {
    static ref SEARCH_MARKER: Regex = Regex::new(r"^<{7,}\s*SEARCH\s*$").unwrap();
    static ref DIVIDER_MARKER: Regex = Regex::new(r"^={7,}\s*$").unwrap();
    static ref REPLACE_MARKER: Regex = Regex::new(r"^>{7,}\s*REPLACE\s*$").unwrap();
}

/// Load a rule set from disk.
///
/// `json`, `yaml`/`yml` and `toml` files deserialize a [`RuleSet`]; any other
/// extension is read as SEARCH/REPLACE blocks. The result is validated.
pub fn load_rule_set(path: impl AsRef<Path>) -> RewriteResult<RuleSet> {
    let path = path.as_ref();
    debug!("Loading rules from {}", path.display());

    let content = fs::read_to_string(path).map_err(map_io_err(path))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let mut set: RuleSet = match ext {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => {
            let mut set = RuleSet::new("");
            set.rules = parse_rule_blocks(&content)?;
            set
        }
    };

    if set.name.is_empty() {
        set.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    set.validate()?;
    debug!("Loaded {} rules from {}", set.len(), path.display());
    Ok(set)
}

/// Block delimiters recognized by [`parse_rule_blocks`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Search,
    Divider,
    Replace,
}

impl Marker {
    fn of(line: &str) -> Option<Self> {
        if SEARCH_MARKER.is_match(line) {
            Some(Marker::Search)
        } else if DIVIDER_MARKER.is_match(line) {
            Some(Marker::Divider)
        } else if REPLACE_MARKER.is_match(line) {
            Some(Marker::Replace)
        } else {
            None
        }
    }
}

/// Where the parser currently is relative to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Search,
    Replace,
}

impl Section {
    fn describe(self) -> &'static str {
        match self {
            Section::Outside => "outside a block",
            Section::Search => "in SEARCH block",
            Section::Replace => "in REPLACE block",
        }
    }
}

/// Parse SEARCH/REPLACE blocks into rules, in file order.
///
/// Lines between blocks are ignored. Body lines are split on `\n` only, so a
/// `\r` before the newline stays part of the text, and are rejoined with `\n`.
pub fn parse_rule_blocks(text: &str) -> RewriteResult<Vec<ReplacementRule>> {
    let mut rules = Vec::new();
    let mut section = Section::Outside;
    let mut block_start = 0;
    let mut search: Vec<&str> = Vec::new();
    let mut replace: Vec<&str> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let line_number = index + 1;

        match (section, Marker::of(line)) {
            (Section::Outside, None) => {}
            (Section::Outside, Some(Marker::Search)) => {
                block_start = line_number;
                search.clear();
                replace.clear();
                section = Section::Search;
            }
            (Section::Search, None) => search.push(line),
            (Section::Search, Some(Marker::Divider)) => {
                if search.is_empty() {
                    return Err(RewriteError::syntax_error(
                        block_start,
                        "SEARCH block cannot be empty",
                    ));
                }
                section = Section::Replace;
            }
            (Section::Replace, None) => replace.push(line),
            (Section::Replace, Some(Marker::Replace)) => {
                rules.push(ReplacementRule::new(search.join("\n"), replace.join("\n")));
                section = Section::Outside;
            }
            (current, Some(_)) => {
                return Err(RewriteError::syntax_error(
                    line_number,
                    format!("Unexpected marker {}: {}", current.describe(), line),
                ));
            }
        }
    }

    match section {
        Section::Outside => {}
        Section::Search => {
            return Err(RewriteError::syntax_error(
                block_start,
                "Unclosed SEARCH block - missing ======= marker",
            ))
        }
        Section::Replace => {
            return Err(RewriteError::syntax_error(
                block_start,
                "Unclosed block - missing REPLACE marker",
            ))
        }
    }

    if rules.is_empty() {
        return Err(RewriteError::parse_error("No SEARCH/REPLACE blocks found"));
    }

    Ok(rules)
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{map_io_err, RewriteError, RewriteResult};
use crate::rules::builtin::{COMPLETION_MESSAGE, SERVICE_PAGE_PATH};
use crate::rules::{load_rule_set, service_page_rules, RuleSet};

/// Settings for one rewrite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// File rewritten in place
    pub target: PathBuf,
    /// Rule file; the built-in service page rules when unset
    pub rules: Option<PathBuf>,
    /// Compute the rewrite without writing it
    pub dry_run: bool,
    /// Print a per-run summary
    pub report: bool,
    /// Printed after the file has been written
    pub completion_message: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(SERVICE_PAGE_PATH),
            rules: None,
            dry_run: false,
            report: false,
            completion_message: COMPLETION_MESSAGE.to_string(),
        }
    }
}

impl RewriteConfig {
    /// Load from a json, yaml or toml file; missing fields take defaults
    pub fn load(path: &Path) -> RewriteResult<Self> {
        debug!("Loading config from {}", path.display());
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = fs::read_to_string(path).map_err(map_io_err(path))?;

        match ext {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            _ => Err(RewriteError::UnsupportedFormat(format!(
                "config extension '{}'",
                ext
            ))),
        }
    }

    /// The rule set this run applies
    pub fn resolve_rules(&self) -> RewriteResult<RuleSet> {
        match &self.rules {
            Some(path) => load_rule_set(path),
            None => Ok(service_page_rules()),
        }
    }
}

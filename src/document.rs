use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{map_io_err, RewriteResult};
use crate::rules::ReplacementRule;

/// In-memory text buffer loaded from, and written back to, one file
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    /// Read the whole file as UTF-8.
    ///
    /// The handle is closed before this returns, so no mutation ever happens
    /// while the file is open.
    pub fn load(path: impl AsRef<Path>) -> RewriteResult<Self> {
        let path = path.as_ref();
        debug!("Reading document: {}", path.display());

        let content = fs::read_to_string(path).map_err(map_io_err(path))?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Wrap text that did not come from disk
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// Replace every non-overlapping occurrence of `rule.old`, left to right.
    ///
    /// Returns the number of occurrences replaced; zero leaves the buffer untouched.
    pub fn apply(&mut self, rule: &ReplacementRule) -> usize {
        if rule.old.is_empty() {
            return 0;
        }

        let occurrences = self.content.matches(rule.old.as_str()).count();
        if occurrences > 0 {
            self.content = self.content.replace(rule.old.as_str(), &rule.new);
        }
        occurrences
    }

    /// Truncate the file and write the current buffer
    pub fn save(&self) -> RewriteResult<()> {
        debug!(
            "Writing document: {} ({} bytes)",
            self.path.display(),
            self.content.len()
        );
        fs::write(&self.path, &self.content).map_err(map_io_err(&self.path))
    }
}

// copyedit - literal copy-text rewriting for page source files

pub mod config;
pub mod diff;
pub mod document;
pub mod error;
pub mod rewriter;
pub mod rules;

pub use config::RewriteConfig;
pub use document::Document;
pub use error::{RewriteError, RewriteResult};
pub use rewriter::{RewriteReport, RuleOutcome, TextRewriter};
pub use rules::{ReplacementRule, RuleSet};

use anyhow::{anyhow, Result};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr, keeping stdout for command output.
///
/// `RUST_LOG` wins when set; otherwise only errors are shown, or debug
/// output for this crate when `verbose` is true.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("copyedit=debug"),
        Err(_) => EnvFilter::new("error"),
    };

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("copyedit v{} logging initialized", version());
    Ok(())
}

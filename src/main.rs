use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use copyedit::{RewriteConfig, TextRewriter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to rewrite in place
    #[arg(short, long)]
    target: Option<PathBuf>,

    /// Rule file (json, yaml, toml, or SEARCH/REPLACE blocks)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Configuration file (json, yaml or toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a diff instead of writing the file (`--dry-run=false` to turn off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    dry_run: Option<bool>,

    /// Print a summary of which rules fired (`--report=false` to turn off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    report: Option<bool>,

    /// Print the active rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config file values, overridden by any flags given
    fn into_config(self) -> Result<RewriteConfig> {
        let mut config = match &self.config {
            Some(path) => RewriteConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => RewriteConfig::default(),
        };

        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(rules) = self.rules {
            config.rules = Some(rules);
        }
        if let Some(dry_run) = self.dry_run {
            config.dry_run = dry_run;
        }
        if let Some(report) = self.report {
            config.report = report;
        }

        Ok(config)
    }
}

/// Resolve config and rules, rewrite the target, and print to `out`
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let list_rules = cli.list_rules;
    let config = cli.into_config()?;
    let rules = config
        .resolve_rules()
        .context("Failed to load replacement rules")?;

    if list_rules {
        for rule in &rules {
            write!(out, "{}", rule)?;
        }
        return Ok(());
    }

    info!(
        "Applying {} rules from '{}' to {}",
        rules.len(),
        rules.name,
        config.target.display()
    );

    let report = TextRewriter::new(rules)
        .dry_run(config.dry_run)
        .rewrite_file(&config.target)
        .with_context(|| format!("Failed to rewrite {}", config.target.display()))?;

    if config.dry_run {
        write!(out, "{}", report.diff())?;
    }
    if config.report {
        writeln!(out, "{}", report.summary())?;
    }
    if report.written {
        writeln!(out, "{}", config.completion_message)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    copyedit::init_with_logger(cli.verbose)?;

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

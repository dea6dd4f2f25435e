//! rebase-guard - pull request history policy gate
//!
//! Validates the current repository's git history before merge:
//!
//! - Pull requests must not contain merge commits
//! - Pull requests must be rebased onto the designated base branch
//!
//! Exits non-zero with one composed message per violated check.

use anyhow::Result;
use clap::Parser;
use rebase_guard::{telemetry, HistoryValidator, ShellExecutor, TriggerEnv, ValidationContext};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};

#[derive(Parser)]
#[command(name = "rebase-guard")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Enforce merge-commit-free, rebased pull request history", long_about = None)]
struct Cli {
    /// Branch pull requests must be rebased onto, without remote prefix
    #[arg(long, env = "INPUT_DEFAULT_BRANCH")]
    default_branch: String,

    /// Remote whose copy of the base branch is checked against
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Repository to validate
    #[arg(long, default_value = ".")]
    workdir: PathBuf,

    /// Emit JSON log lines and a JSON verdict on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init(cli.json, level);

    let ctx = ValidationContext::resolve(&cli.default_branch, &cli.remote, &TriggerEnv::capture())?;

    info!(
        base = %ctx.remote_base(),
        workdir = %cli.workdir.display(),
        "Validating pull request history"
    );

    let executor = Arc::new(ShellExecutor::new(Some(cli.workdir)));
    let report = HistoryValidator::new(executor).validate(&ctx).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.passed() {
        info!("All history checks passed");
        return Ok(());
    }

    for message in &report.messages {
        error!("{message}");
        if !cli.json {
            eprintln!("{message}");
        }
    }

    anyhow::bail!("Pull request history checks failed")
}

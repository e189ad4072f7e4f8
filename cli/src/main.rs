//! CLI for the Linear labeler.
//!
//! Reads CI inputs from the environment (or flags), labels the Linear issue
//! referenced by the pull request title, and reports the result through the
//! process exit status.

use clap::Parser;
use linear_labeler::{
    load_label_map, resolve_api_url, RunOutcome, Runner, RunnerConfig, RunnerError,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Linear Labeler - Add a label to the Linear issue named in a pull request title.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Linear personal API key.
    #[arg(long, env = "LINEAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Label token selecting the label to apply (e.g. `codex`).
    #[arg(long, env = "LINEAR_LABEL")]
    label: Option<String>,

    /// Pull request source branch.
    #[arg(long, env = "BRANCH_NAME")]
    branch_name: Option<String>,

    /// Pull request title.
    #[arg(long, env = "PR_TITLE")]
    pr_title: Option<String>,

    /// Linear GraphQL endpoint [default: https://api.linear.app/graphql].
    #[arg(long, env = "LINEAR_API_URL")]
    api_url: Option<String>,

    /// TOML file with extra label token mappings.
    #[arg(long, env = "LINEAR_LABEL_MAP")]
    label_map: Option<String>,

    /// Resolve the issue and label without applying it.
    #[arg(long)]
    dry_run: bool,

    /// Abort the run after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments; usage errors fail the run like any other error
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Run the main logic
    match run(args).await {
        Ok(outcome) => {
            print_summary(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Labeling failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Uses compact single-line output without module targets. The level is
/// taken from `RUST_LOG` and defaults to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the run configuration from parsed arguments.
///
/// Blank endpoint and label map values count as unset.
fn build_config(args: Args) -> Result<RunnerConfig, RunnerError> {
    let api_url = resolve_api_url(args.api_url.as_deref())?;
    let mut config = RunnerConfig::new(
        args.api_key,
        args.label,
        args.branch_name,
        args.pr_title,
        api_url,
    )
    .with_dry_run(args.dry_run);
    let label_map = args
        .label_map
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty());
    if let Some(path) = label_map {
        config = config.with_label_map(load_label_map(Path::new(path))?);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let runner = Runner::new(build_config(args)?);
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(outcome: &RunOutcome) {
    println!("\nSummary:");
    match outcome {
        RunOutcome::Skipped { branch } => {
            println!("  Result: Skipped");
            println!("  Branch: {}", branch.as_deref().unwrap_or("<unset>"));
        }
        RunOutcome::AlreadyLabeled { identifier, label } => {
            println!("  Result: Already labeled");
            println!("  Issue: {identifier}");
            println!("  Label: {label}");
        }
        RunOutcome::DryRun {
            identifier,
            label,
            issue_id,
            label_id,
        } => {
            println!("  Result: Dry Run");
            println!("  Would add label '{label}' ({label_id}) to {identifier} ({issue_id})");
        }
        RunOutcome::Labeled { identifier, label } => {
            println!("  Result: Labeled");
            println!("  Label '{label}' added to issue {identifier}");
        }
    }
}

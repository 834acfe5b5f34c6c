//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::error;

use crate::adapters::RunnerEnv;
use crate::app::api::{self, RunOptions};
use crate::app::commands::write_workflow_output;
use crate::app::logging;

#[derive(Parser)]
#[command(name = "label-tracker")]
#[command(version)]
#[command(
    about = "Apply a tracking label to qualifying issues when they change",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the triggering event and apply the tracking label when the issue qualifies
    #[clap(visible_alias = "s")]
    Sync {
        #[command(flatten)]
        event: EventArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Repository as owner/name (default: GITHUB_REPOSITORY)
        #[arg(long)]
        repo: Option<String>,
    },
    /// Classify the triggering event without contacting GitHub
    #[clap(visible_alias = "e")]
    Evaluate {
        #[command(flatten)]
        event: EventArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(Args)]
struct EventArgs {
    /// Event name (default: GITHUB_EVENT_NAME)
    #[arg(long)]
    event_name: Option<String>,
    /// Path to the webhook payload JSON (default: GITHUB_EVENT_PATH)
    #[arg(long)]
    event_path: Option<PathBuf>,
}

#[derive(Args)]
struct PolicyArgs {
    /// Tracking label to apply (default: the 'changed-label' input)
    #[arg(long)]
    changed_label: Option<String>,
    /// Comma-separated qualifying labels (default: the 'qualifying-labels' input)
    #[arg(long)]
    qualifying_labels: Option<String>,
    /// TOML file with 'changed-label' and 'qualifying-labels'
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn run_options(event: EventArgs, policy: PolicyArgs, repo: Option<String>) -> RunOptions {
    RunOptions {
        event_name: event.event_name,
        event_path: event.event_path,
        changed_label: policy.changed_label,
        qualifying_labels: policy.qualifying_labels,
        config_path: policy.config,
        repo,
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init();

    let env = RunnerEnv::capture();
    let result = match cli.command {
        Commands::Sync { event, policy, repo } => {
            api::sync_with_env(&env, run_options(event, policy, repo))
        }
        Commands::Evaluate { event, policy } => {
            api::evaluate_with_env(&env, run_options(event, policy, None))
        }
    }
    .and_then(|output| write_workflow_output(&output, &env));

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

//! CLI command structure using clap

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use commitlog_core::config::consts::CONFIG_ENV;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commitlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to commitlog.toml (defaults to ./commitlog.toml when present)
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a commit log from a change set file
    Render(RenderArgs),

    /// Validate a template
    Check {
        /// Template file (defaults to the configured template)
        template: Option<PathBuf>,

        /// Check the commit comment template instead of the log template
        #[arg(long)]
        comment: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview a template against the built-in sample change set
    Sample {
        /// Template file (defaults to the configured template)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Preview the commit comment template instead of the log template
        #[arg(long)]
        comment: bool,

        /// Report time, "YYYY-MM-DD HH:MM:SS" (defaults to now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<NaiveDateTime>,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Change set JSON file
    #[arg(long)]
    pub changes: PathBuf,

    /// Template file (defaults to the configured template)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Render the commit comment template instead of the log template
    #[arg(long)]
    pub comment: bool,

    /// Commit message (defaults to the change set's message)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Report time, "YYYY-MM-DD HH:MM:SS" (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<NaiveDateTime>,

    /// Keep files whose revision did not change
    #[arg(long)]
    pub keep_unchanged: bool,
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| format!("expected \"YYYY-MM-DD HH:MM:SS\": {}", e))
}

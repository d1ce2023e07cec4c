//! Render command - build a commit log from a change set file

use crate::cli::RenderArgs;
use crate::context::Context;
use crate::output::print_report;
use anyhow::{Result, anyhow};
use colored::Colorize;
use commitlog_core::CommitLog;
use commitlog_core::change::ChangeSetFile;
use std::path::PathBuf;

/// Render the configured (or given) template against a change set
///
/// Records whose old and new revision match are dropped first unless
/// `--keep-unchanged` or `report.keep_unchanged` is set.
pub fn run(args: RenderArgs, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;

    if args.template.is_none() && !ctx.enabled(args.comment) {
        eprintln!(
            "{} {} generation is disabled in the configuration",
            "!".yellow(),
            if args.comment { "Comment" } else { "Commit log" }
        );
        return Ok(());
    }

    let template = ctx.template_text(args.template.as_deref(), args.comment)?;

    let set = ChangeSetFile::from_file(&args.changes)?;
    let message = args
        .message
        .or_else(|| set.message.clone())
        .unwrap_or_default();

    let mut log = CommitLog::new(template, message).with_formats(ctx.config.format.clone());
    for record in set.into_records() {
        log.add(record);
    }

    if ctx.verbose {
        eprintln!(
            "{} Loaded {} file(s) from {}",
            "→".cyan(),
            log.index().file_count(),
            args.changes.display()
        );
    }

    if !(args.keep_unchanged || ctx.config.report.keep_unchanged) {
        let removed = log.finish_commit();
        if ctx.verbose && removed > 0 {
            eprintln!("{} Skipped {} unchanged file(s)", "→".cyan(), removed);
        }
    }

    let at = args
        .at
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let report = log
        .build(at)
        .map_err(|e| anyhow!("Template error: {}", e))?;

    print_report(&report)?;
    Ok(())
}

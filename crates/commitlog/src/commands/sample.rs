//! Sample command - preview a template with the built-in change set

use crate::context::Context;
use crate::output::print_report;
use anyhow::Result;
use chrono::NaiveDateTime;
use colored::Colorize;
use commitlog_core::sample::sample_commit_log;
use std::path::PathBuf;

/// Print the template rendered against sample data
///
/// Syntax errors are shown inline with an error marker instead of failing.
pub fn run(
    template: Option<PathBuf>,
    comment: bool,
    at: Option<NaiveDateTime>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let text = ctx.template_text(template.as_deref(), comment)?;

    if ctx.verbose {
        eprintln!("{} Previewing against the sample change set", "→".cyan());
    }

    let log = sample_commit_log(text).with_formats(ctx.config.format.clone());
    let at = at.unwrap_or_else(|| chrono::Local::now().naive_local());

    print_report(&log.preview(at))?;
    Ok(())
}

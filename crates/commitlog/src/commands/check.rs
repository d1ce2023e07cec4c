//! Check command - validate a template without rendering it

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::{Result, bail};
use colored::Colorize;
use commitlog_core::report::error_preview;
use commitlog_core::{Template, TemplateError};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct CheckOutput {
    ok: bool,
    nodes: Option<usize>,
    sections: Option<usize>,
    diagnostics: Vec<String>,
    error: Option<CheckError>,
}

#[derive(Debug, Serialize)]
struct CheckError {
    location: usize,
    message: String,
}

impl CheckOutput {
    fn from_result(result: &Result<Template, TemplateError>) -> Self {
        match result {
            Ok(template) => Self {
                ok: true,
                nodes: Some(template.node_count()),
                sections: Some(template.section_count()),
                diagnostics: template.diagnostics(),
                error: None,
            },
            Err(err) => Self {
                ok: false,
                nodes: None,
                sections: None,
                diagnostics: Vec::new(),
                error: Some(CheckError {
                    location: err.location(),
                    message: err.to_string(),
                }),
            },
        }
    }
}

/// Parse the template and report its shape or its first syntax error
///
/// Misplaced section placeholders are warnings; only syntax errors fail.
pub fn run(
    template: Option<PathBuf>,
    comment: bool,
    json: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let text = ctx.template_text(template.as_deref(), comment)?;

    let result = Template::parse(&text);

    if json {
        let output = CheckOutput::from_result(&result);
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else {
        match &result {
            Ok(parsed) => {
                print_text(&format!(
                    "{} Template OK ({} nodes, {} sections)",
                    "✓".green().bold(),
                    parsed.node_count(),
                    parsed.section_count()
                ))?;
                for diagnostic in parsed.diagnostics() {
                    print_text(&format!("  {} {}", "!".yellow(), diagnostic))?;
                }
            }
            Err(err) => {
                print_text(&error_preview(&text, err))?;
                print_text(&format!("{} Template has a syntax error", "✗".red().bold()))?;
            }
        }
    }

    if let Err(err) = result {
        bail!("template check failed at index {}", err.location());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_for_valid_template() {
        let result = Template::parse("[ALL_FILES][FILE_ENTRY]$FILE_NAME$[/FILE_ENTRY][/ALL_FILES]");
        let output = CheckOutput::from_result(&result);
        assert!(output.ok);
        assert_eq!(output.nodes, Some(5));
        assert_eq!(output.sections, Some(2));
        assert!(output.error.is_none());
    }

    #[test]
    fn test_check_output_for_syntax_error() {
        let result = Template::parse("Price is $5");
        let output = CheckOutput::from_result(&result);
        assert!(!output.ok);
        assert_eq!(output.nodes, None);
        assert_eq!(output.error.as_ref().map(|e| e.location), Some(9));
    }
}

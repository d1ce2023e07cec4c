//! Commit log report job
//!
//! Collects the change records of one commit, settles their post-commit
//! revisions and renders the configured template.

use crate::change::{ChangeIndex, ChangeRecord};
use crate::config::consts::ERROR_MARKER;
use crate::config::FormatConfig;
use crate::template::{ReportContext, Template, TemplateEngine, TemplateError};
use chrono::NaiveDateTime;

/// One commit's report: template text, message and the files committed
#[derive(Debug, Clone)]
pub struct CommitLog {
    template: String,
    message: String,
    formats: FormatConfig,
    index: ChangeIndex,
}

impl CommitLog {
    pub fn new(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            message: message.into(),
            formats: FormatConfig::default(),
            index: ChangeIndex::new(),
        }
    }

    pub fn with_formats(mut self, formats: FormatConfig) -> Self {
        self.formats = formats;
        self
    }

    pub fn add(&mut self, record: ChangeRecord) {
        self.index.add(record);
    }

    pub fn index(&self) -> &ChangeIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut ChangeIndex {
        &mut self.index
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Settle the index after the commit ran
    ///
    /// Looks up new revisions for records with a VCS handle, then drops
    /// every record that did not change. Returns the number dropped.
    pub fn finish_commit(&mut self) -> usize {
        let resolved = self.index.refresh_new_revisions();
        let removed = self.index.prune_no_ops();
        tracing::info!(
            "Commit finished: {} revision(s) resolved, {} unchanged file(s) dropped",
            resolved,
            removed
        );
        removed
    }

    /// Render the report
    pub fn build(&self, timestamp: NaiveDateTime) -> Result<String, TemplateError> {
        let template = Template::parse(&self.template)?;
        let context =
            ReportContext::new(self.message.clone(), timestamp).with_formats(self.formats.clone());
        Ok(TemplateEngine::new().render(&template, &self.index, &context))
    }

    /// Render the report, or show where the template broke
    ///
    /// On a syntax error the result is the template up to and including the
    /// offending character, an error marker and the error text.
    pub fn preview(&self, timestamp: NaiveDateTime) -> String {
        match self.build(timestamp) {
            Ok(text) => text,
            Err(err) => error_preview(&self.template, &err),
        }
    }
}

/// Template text cut after the error offset, followed by the marker and message
pub fn error_preview(template: &str, err: &TemplateError) -> String {
    let mut preview: String = template.chars().take(err.location() + 1).collect();
    preview.push_str(ERROR_MARKER);
    preview.push_str(&err.to_string());
    preview
}

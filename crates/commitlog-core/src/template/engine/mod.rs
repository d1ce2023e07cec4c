//! Template engine implementation

mod blocks;
mod names;
mod render;
mod tokenize;

use crate::change::ChangeIndex;
use crate::config::FormatConfig;
use crate::template::error::TemplateError;
use chrono::NaiveDateTime;

pub use blocks::{Item, Section, SectionKind};
pub use names::FileSelection;
pub use render::RenderSection;
pub use tokenize::{NodeKind, TemplateNode};

use render::Renderer;
use tokenize::TokenStream;

/// Parse template text into its flat node sequence
///
/// Fails on the first structural error; no partial result is returned.
pub fn parse(text: &str) -> Result<Vec<TemplateNode>, TemplateError> {
    TokenStream::new(text).collect()
}

/// A parsed template with its sections paired up
///
/// Parse once, render many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    items: Vec<Item>,
    node_count: usize,
}

impl Template {
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let nodes = parse(text)?;
        Ok(Self::from_nodes(&nodes))
    }

    pub fn from_nodes(nodes: &[TemplateNode]) -> Self {
        Self {
            items: blocks::build_items(nodes),
            node_count: nodes.len(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of nodes the template was parsed into
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of well-formed sections, nested ones included
    pub fn section_count(&self) -> usize {
        fn count(items: &[Item]) -> usize {
            items
                .iter()
                .map(|item| match item {
                    Item::Section(section) => 1 + count(&section.body),
                    _ => 0,
                })
                .sum()
        }
        count(&self.items)
    }

    /// Inline diagnostics for misplaced or unclosed block placeholders
    ///
    /// Unknown value placeholders are not included; whether a value name is
    /// legal depends on where it is rendered.
    pub fn diagnostics(&self) -> Vec<String> {
        fn collect(items: &[Item], out: &mut Vec<String>) {
            for item in items {
                match item {
                    Item::Invalid(diagnostic) => out.push(diagnostic.clone()),
                    Item::Section(section) => collect(&section.body, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.items, &mut out);
        out
    }
}

/// Values that are fixed for one report: message, clock and formats
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub formats: FormatConfig,
}

impl ReportContext {
    pub fn new(message: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            message: message.into(),
            timestamp,
            formats: FormatConfig::default(),
        }
    }

    pub fn with_formats(mut self, formats: FormatConfig) -> Self {
        self.formats = formats;
        self
    }
}

/// Template engine rendering parsed templates against a change index
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a parsed template
    ///
    /// Rendering never fails; unknown placeholders become inline text.
    pub fn render(&self, template: &Template, index: &ChangeIndex, context: &ReportContext) -> String {
        if template.node_count() == 0 {
            tracing::warn!("Rendering an empty template");
            return String::new();
        }

        let rendered = Renderer::new(index, context).render(template.items());
        debug_assert_eq!(rendered.used_nodes, template.node_count());

        tracing::debug!(
            "Rendered {} nodes into {} characters",
            rendered.used_nodes,
            rendered.text.chars().count()
        );
        rendered.text
    }

    /// Parse and render in one step
    pub fn render_text(
        &self,
        text: &str,
        index: &ChangeIndex,
        context: &ReportContext,
    ) -> Result<String, TemplateError> {
        let template = Template::parse(text)?;
        Ok(self.render(&template, index, context))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a node sequence against an index
///
/// Uses the default date formats.
pub fn build_report(
    nodes: &[TemplateNode],
    index: &ChangeIndex,
    message: &str,
    timestamp: NaiveDateTime,
) -> String {
    let template = Template::from_nodes(nodes);
    let context = ReportContext::new(message, timestamp);
    TemplateEngine::new().render(&template, index, &context)
}

#[cfg(test)]
mod tests;

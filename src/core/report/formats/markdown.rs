//! Markdown report generator
//!
//! Renders the summary as Markdown tables. These reports read well in GitHub,
//! GitLab and VS Code previews.

use crate::core::report::{ReportContext, ReportGenerator, SummaryView};
use askama::Template;
use std::error::Error;

/// Askama filters for the Markdown template
mod filters {
    use std::fmt::Display;

    /// Make free text safe inside a table cell: escape `|` and fold line breaks
    #[allow(clippy::unnecessary_wraps)]
    pub fn md_cell<T: Display>(value: T) -> askama::Result<String> {
        Ok(super::escape_cell(&value.to_string()))
    }
}

/// Escape pipes and backslashes, and collapse line breaks to single spaces
fn escape_cell(text: &str) -> String {
    let mut cell = String::with_capacity(text.len());
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !cell.is_empty() {
            cell.push(' ');
        }
        for c in line.chars() {
            if matches!(c, '|' | '\\') {
                cell.push('\\');
            }
            cell.push(c);
        }
    }
    cell
}

#[derive(Template)]
#[template(path = "summary.md", escape = "none")]
struct MarkdownSummary<'a> {
    view: &'a SummaryView,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ctx.view();
        Ok(MarkdownSummary { view: &view }.render()?)
    }
}

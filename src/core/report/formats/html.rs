//! HTML report generator
//!
//! Generates a self-contained HTML page with embedded CSS. The classification
//! badge uses the color tag as a CSS class (`badge-green`, `badge-red`, ...).

use crate::core::report::{ReportContext, ReportGenerator, SummaryView};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "summary.html")]
struct HtmlSummary<'a> {
    view: &'a SummaryView,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ctx.view();
        Ok(HtmlSummary { view: &view }.render()?)
    }
}

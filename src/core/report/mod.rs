//! Report generation module for grade summaries
//!
//! This module renders a student's course list and GPA summary into standalone
//! documents (Markdown, HTML). Templates live in `templates/` and are compiled in
//! with `askama`; this module prepares the preformatted values they display.

pub mod formats;

use crate::core::engine::{format_gpa, summarize, GpaSummary};
use crate::core::models::{Course, GradeScale};
use crate::core::store::OwnerKey;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Label shown for courses and groups without a term
pub const NO_TERM_LABEL: &str = "(no term)";

/// Data context for report generation
///
/// Aggregates everything a report shows, so every format renders from the same
/// snapshot.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Owner whose courses are reported
    pub owner: &'a OwnerKey,
    /// Active grading scale
    pub scale: &'static GradeScale,
    /// Course snapshot in insertion order
    pub courses: &'a [Course],
    /// Derived GPA figures
    pub summary: GpaSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context, computing the summary from `courses`
    ///
    /// # Panics
    /// Panics if a course carries a grade outside `scale`; stores validate grades on
    /// every write and load, so this indicates a bug.
    #[must_use]
    pub fn new(owner: &'a OwnerKey, scale: &'static GradeScale, courses: &'a [Course]) -> Self {
        Self {
            owner,
            scale,
            courses,
            summary: summarize(scale, courses),
        }
    }

    /// Preformatted values for templates
    #[must_use]
    pub fn view(&self) -> SummaryView {
        let summary = &self.summary;
        SummaryView {
            owner: self.owner.to_string(),
            scale: self.scale.kind().to_string(),
            gpa: summary.gpa_display(),
            cgpa: summary.cgpa_display(),
            classification: summary.classification.label().to_string(),
            color: summary.color.as_str().to_string(),
            total_credits: format_credits(summary.total_credits),
            course_count: summary.course_count,
            progress: format!("{:.0}", summary.progress.max(0.0)),
            terms: summary
                .terms
                .iter()
                .map(|term| TermRow {
                    term: term.term.as_deref().unwrap_or(NO_TERM_LABEL).to_string(),
                    gpa: format_gpa(term.gpa),
                    credits: format_credits(term.credits),
                    course_count: term.course_count,
                })
                .collect(),
            courses: self
                .courses
                .iter()
                .map(|course| CourseRow {
                    id: course.id.to_string(),
                    name: course.name.clone(),
                    term: course.term.as_deref().unwrap_or(NO_TERM_LABEL).to_string(),
                    credits: format_credits(course.credits),
                    grade: course.grade.label().to_string(),
                    points: self
                        .scale
                        .try_points(course.grade)
                        .map_or_else(|| "-".to_string(), |p| format!("{p:.1}")),
                })
                .collect(),
        }
    }
}

/// Template-ready summary; every number is already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    /// Owner key
    pub owner: String,
    /// Scale name
    pub scale: String,
    /// Current-period GPA
    pub gpa: String,
    /// Cumulative GPA
    pub cgpa: String,
    /// Classification label
    pub classification: String,
    /// Color tag name
    pub color: String,
    /// Credit total
    pub total_credits: String,
    /// Number of courses
    pub course_count: usize,
    /// CGPA as a whole percentage of the scale maximum
    pub progress: String,
    /// Per-term rows
    pub terms: Vec<TermRow>,
    /// Per-course rows
    pub courses: Vec<CourseRow>,
}

/// One row of the per-term table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRow {
    /// Term label
    pub term: String,
    /// Term GPA
    pub gpa: String,
    /// Term credits
    pub credits: String,
    /// Courses in the term
    pub course_count: usize,
}

/// One row of the course table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    /// Course id
    pub id: String,
    /// Course name
    pub name: String,
    /// Term label
    pub term: String,
    /// Credit hours
    pub credits: String,
    /// Grade label
    pub grade: String,
    /// Grade points on the active scale
    pub points: String,
}

/// Credits with one decimal
#[must_use]
pub fn format_credits(credits: f64) -> String {
    format!("{credits:.1}")
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Render `ctx` in `format` and write it to `output_path`
///
/// # Errors
/// Returns an error if rendering or writing fails
pub fn write_report(
    ctx: &ReportContext,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(ctx, output_path),
        ReportFormat::Html => HtmlReporter::new().generate(ctx, output_path),
    }
}

//! Grade engine: credit-weighted GPA, credit totals and degree classification
//!
//! Every function here is pure and recomputes from the full course slice it is
//! given. Nothing is cached and nothing is logged.

use crate::core::models::{ColorTag, Course, DegreeClassification, GradeScale};

/// Minimum credit load before any classification is awarded.
pub const MIN_CLASSIFIED_CREDITS: f64 = 3.0;

/// Credit-weighted GPA over `courses`
///
/// Courses with non-positive (or non-finite) credits are skipped in both the
/// numerator and the denominator. If nothing is left the result is exactly `0.0`.
/// No rounding is applied.
///
/// # Panics
/// Panics if a course carries a grade `scale` does not admit; see [`GradeScale::points`].
#[must_use]
pub fn compute_gpa(scale: &GradeScale, courses: &[Course]) -> f64 {
    let (points, credits) = courses
        .iter()
        .filter(|course| course.is_weighted())
        .fold((0.0, 0.0), |(points, credits), course| {
            (
                course.credits.mul_add(scale.points(course.grade), points),
                credits + course.credits,
            )
        });

    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// Plain sum of every course's credits, zero and negative entries included
///
/// This reports raw credit load, so unlike [`compute_gpa`] nothing is filtered.
#[must_use]
pub fn total_credits(courses: &[Course]) -> f64 {
    courses.iter().map(|course| course.credits).sum()
}

/// Two-decimal rendering of a GPA, rounding half away from zero
///
/// `0.125` renders as `"0.13"` and `2.375` as `"2.38"`.
#[must_use]
pub fn format_gpa(gpa: f64) -> String {
    let rounded = (gpa * 100.0).round() / 100.0;
    // -0.0 would otherwise print as "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.2}")
}

/// Degree classification for a GPA and credit total
///
/// Returns [`DegreeClassification::NotEnoughCredits`] below
/// [`MIN_CLASSIFIED_CREDITS`] regardless of `gpa`. Otherwise the first ladder band
/// whose cutpoint satisfies `gpa >= cutpoint` wins, and anything below the last
/// cutpoint is [`DegreeClassification::Fail`].
#[must_use]
pub fn classify(scale: &GradeScale, gpa: f64, total_credits: f64) -> DegreeClassification {
    if total_credits.is_nan() || total_credits < MIN_CLASSIFIED_CREDITS {
        return DegreeClassification::NotEnoughCredits;
    }

    scale
        .ladder()
        .iter()
        .find(|&&(cutpoint, _)| gpa >= cutpoint)
        .map_or(DegreeClassification::Fail, |&(_, band)| band)
}

/// Presentation color for a classification
#[must_use]
pub const fn color_for(classification: DegreeClassification) -> ColorTag {
    match classification {
        DegreeClassification::FirstClass => ColorTag::Green,
        DegreeClassification::SecondClassUpper => ColorTag::Blue,
        DegreeClassification::SecondClassLower => ColorTag::Teal,
        DegreeClassification::ThirdClass => ColorTag::Amber,
        DegreeClassification::Pass => ColorTag::Orange,
        DegreeClassification::Fail => ColorTag::Red,
        DegreeClassification::NotEnoughCredits => ColorTag::Neutral,
    }
}

/// GPA figures for one period
#[derive(Debug, Clone, PartialEq)]
pub struct TermGpa {
    /// Period label; `None` groups courses without a term
    pub term: Option<String>,
    /// Credit-weighted GPA of the period
    pub gpa: f64,
    /// Raw credit total of the period
    pub credits: f64,
    /// Number of courses in the period
    pub course_count: usize,
}

/// Per-period GPA, groups ordered by first appearance in `courses`
///
/// # Panics
/// Panics on a grade outside `scale`, like [`compute_gpa`].
#[must_use]
pub fn gpa_by_term(scale: &GradeScale, courses: &[Course]) -> Vec<TermGpa> {
    let mut groups: Vec<(Option<&str>, Vec<Course>)> = Vec::new();
    for course in courses {
        let term = course.term.as_deref();
        match groups.iter_mut().find(|(label, _)| *label == term) {
            Some((_, members)) => members.push(course.clone()),
            None => groups.push((term, vec![course.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(term, members)| TermGpa {
            term: term.map(str::to_string),
            gpa: compute_gpa(scale, &members),
            credits: total_credits(&members),
            course_count: members.len(),
        })
        .collect()
}

/// Everything a summary view shows, derived from one course snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct GpaSummary {
    /// GPA of the current (last-appearing) period
    pub gpa: f64,
    /// Cumulative GPA over every course
    pub cgpa: f64,
    /// Raw credit total over every course
    pub total_credits: f64,
    /// Number of courses
    pub course_count: usize,
    /// Classification of the CGPA
    pub classification: DegreeClassification,
    /// Color hint for the classification
    pub color: ColorTag,
    /// CGPA as a percentage of the scale maximum, capped at 100
    pub progress: f64,
    /// Per-period breakdown
    pub terms: Vec<TermGpa>,
}

impl GpaSummary {
    /// Formatted current-period GPA
    #[must_use]
    pub fn gpa_display(&self) -> String {
        format_gpa(self.gpa)
    }

    /// Formatted cumulative GPA
    #[must_use]
    pub fn cgpa_display(&self) -> String {
        format_gpa(self.cgpa)
    }
}

/// Build the full summary for a course snapshot
///
/// # Panics
/// Panics on a grade outside `scale`, like [`compute_gpa`].
#[must_use]
pub fn summarize(scale: &GradeScale, courses: &[Course]) -> GpaSummary {
    let cgpa = compute_gpa(scale, courses);
    let credits = total_credits(courses);
    let terms = gpa_by_term(scale, courses);
    let gpa = terms.last().map_or(0.0, |current| current.gpa);
    let classification = classify(scale, cgpa, credits);

    GpaSummary {
        gpa,
        cgpa,
        total_credits: credits,
        course_count: courses.len(),
        classification,
        color: color_for(classification),
        progress: (cgpa / scale.max_points() * 100.0).min(100.0),
        terms,
    }
}

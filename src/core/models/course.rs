//! Course model

use super::grade::{Grade, GradeScale, ScaleKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons a course entry is rejected at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    /// Name is empty or whitespace only
    #[error("course name must not be empty")]
    EmptyName,

    /// Credits are negative, NaN or infinite
    #[error("credits must be a finite number >= 0, got {0}")]
    InvalidCredits(f64),

    /// Label is not a known letter grade
    #[error("unknown grade '{0}'")]
    UnknownGrade(String),

    /// Label exists but the active scale does not use it
    #[error(
        "grade {grade} is not part of the {scale} scale (use one of: {allowed})",
        allowed = allowed_labels(.scale)
    )]
    GradeNotInScale {
        /// Offending grade
        grade: Grade,
        /// Active scale
        scale: ScaleKind,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn allowed_labels(scale: &ScaleKind) -> String {
    GradeScale::for_kind(*scale).labels()
}

/// Opaque course identifier, assigned by the store at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Wrap an existing identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier: the first 8 hex digits of a v4 UUID
    #[must_use]
    pub fn generate() -> Self {
        let mut hex = uuid::Uuid::new_v4().simple().to_string();
        hex.truncate(8);
        Self(hex)
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One course entry in a student's list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier, immutable
    pub id: CourseId,

    /// Course name (e.g., "Linear Algebra")
    pub name: String,

    /// Credit hours (can be fractional)
    pub credits: f64,

    /// Letter grade on the active scale
    pub grade: Grade,

    /// Optional period label (e.g., "2024/1") used to group courses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl Course {
    /// Create a new course without a term
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `name` - Course name
    /// * `credits` - Credit hours (can be fractional)
    /// * `grade` - Letter grade
    #[must_use]
    pub const fn new(id: CourseId, name: String, credits: f64, grade: Grade) -> Self {
        Self {
            id,
            name,
            credits,
            grade,
            term: None,
        }
    }

    /// Builder-style term setter
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = normalize_term(Some(term.into()));
        self
    }

    /// Whether this course carries weight in a GPA
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.credits.is_finite() && self.credits > 0.0
    }
}

/// Validated input for creating a course; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    name: String,
    credits: f64,
    grade: Grade,
    term: Option<String>,
}

impl NewCourse {
    /// Validate a new course entry
    ///
    /// # Errors
    /// Returns an error if the name is blank or the credits are negative or not finite.
    pub fn new(name: &str, credits: f64, grade: Grade) -> Result<Self, CourseError> {
        Ok(Self {
            name: validate_name(name)?,
            credits: validate_credits(credits)?,
            grade,
            term: None,
        })
    }

    /// Attach a period label; blank labels mean "no term"
    #[must_use]
    pub fn with_term(mut self, term: Option<String>) -> Self {
        self.term = normalize_term(term);
        self
    }

    /// Grade of the pending course
    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    /// Turn the entry into a stored course under `id`
    #[must_use]
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            name: self.name,
            credits: self.credits,
            grade: self.grade,
            term: self.term,
        }
    }
}

/// Field-by-field edit of an existing course
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    /// New name
    pub name: Option<String>,
    /// New credit hours
    pub credits: Option<f64>,
    /// New grade
    pub grade: Option<Grade>,
    /// New term; `Some(None)` clears it
    pub term: Option<Option<String>>,
}

impl CoursePatch {
    /// True when the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.credits.is_none() && self.grade.is_none() && self.term.is_none()
    }

    /// Apply every field or none of them
    ///
    /// # Errors
    /// Returns an error if any provided field is invalid; `course` is then untouched.
    pub fn apply(&self, course: &mut Course) -> Result<(), CourseError> {
        let name = self.name.as_deref().map(validate_name).transpose()?;
        let credits = self.credits.map(validate_credits).transpose()?;

        if let Some(name) = name {
            course.name = name;
        }
        if let Some(credits) = credits {
            course.credits = credits;
        }
        if let Some(grade) = self.grade {
            course.grade = grade;
        }
        if let Some(term) = &self.term {
            course.term = normalize_term(term.clone());
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, CourseError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CourseError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_credits(credits: f64) -> Result<f64, CourseError> {
    if credits.is_finite() && credits >= 0.0 {
        Ok(credits)
    } else {
        Err(CourseError::InvalidCredits(credits))
    }
}

fn normalize_term(term: Option<String>) -> Option<String> {
    term.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Course {
        Course::new(CourseId::from("c1"), "Linear Algebra".to_string(), 3.0, Grade::B)
    }

    #[test]
    fn test_course_creation() {
        let course = sample();

        assert_eq!(course.id.as_str(), "c1");
        assert_eq!(course.name, "Linear Algebra");
        assert!((course.credits - 3.0).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::B);
        assert!(course.term.is_none());
    }

    #[test]
    fn test_with_term_trims_and_drops_blank() {
        assert_eq!(sample().with_term(" 2024/1 ").term.as_deref(), Some("2024/1"));
        assert!(sample().with_term("   ").term.is_none());
    }

    #[test]
    fn test_is_weighted() {
        let mut course = sample();
        assert!(course.is_weighted());
        course.credits = 0.0;
        assert!(!course.is_weighted());
        course.credits = -1.0;
        assert!(!course.is_weighted());
        course.credits = f64::NAN;
        assert!(!course.is_weighted());
    }

    #[test]
    fn test_generated_ids_are_short_hex() {
        let id = CourseId::generate();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(CourseId::generate(), CourseId::generate());
    }

    #[test]
    fn test_new_course_validation() {
        assert_eq!(NewCourse::new("  ", 3.0, Grade::A), Err(CourseError::EmptyName));
        assert!(matches!(
            NewCourse::new("Lab", -0.5, Grade::A),
            Err(CourseError::InvalidCredits(_))
        ));
        assert!(NewCourse::new("Lab", f64::INFINITY, Grade::A).is_err());

        let half = NewCourse::new(" Lab ", 0.5, Grade::A).unwrap();
        let course = half.into_course(CourseId::from("x"));
        assert_eq!(course.name, "Lab");
        assert!((course.credits - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_credit_entry_is_accepted() {
        assert!(NewCourse::new("Seminar", 0.0, Grade::F).is_ok());
    }

    #[test]
    fn test_patch_applies_all_fields() {
        let mut course = sample().with_term("2023/2");
        let patch = CoursePatch {
            name: Some("Linear Algebra II".to_string()),
            credits: Some(4.0),
            grade: Some(Grade::A),
            term: Some(None),
        };
        patch.apply(&mut course).unwrap();

        assert_eq!(course.id.as_str(), "c1");
        assert_eq!(course.name, "Linear Algebra II");
        assert!((course.credits - 4.0).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::A);
        assert!(course.term.is_none());
    }

    #[test]
    fn test_invalid_patch_leaves_course_untouched() {
        let mut course = sample();
        let patch = CoursePatch {
            name: Some("Renamed".to_string()),
            credits: Some(-2.0),
            ..CoursePatch::default()
        };
        assert!(patch.apply(&mut course).is_err());
        assert_eq!(course, sample());
    }

    #[test]
    fn test_empty_patch() {
        assert!(CoursePatch::default().is_empty());
        let patch = CoursePatch {
            grade: Some(Grade::C),
            ..CoursePatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_course_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "c1");
        assert_eq!(json["grade"], "B");
        assert!(json.get("term").is_none());
    }
}

//! Data models for the GPA calculator

pub mod classification;
pub mod course;
pub mod grade;

pub use classification::{ColorTag, DegreeClassification};
pub use course::{Course, CourseError, CourseId, CoursePatch, NewCourse};
pub use grade::{Grade, GradeScale, ScaleKind, INSTITUTIONAL, STANDARD};

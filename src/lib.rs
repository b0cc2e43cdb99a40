//! Shared library for `udsgpa`
//!
//! Computes credit-weighted GPA and CGPA over a student's courses, maps the result
//! to a degree classification, and keeps per-owner course lists in a store.
//!
//! ```
//! use uds_gpa::engine::{compute_gpa, format_gpa};
//! use uds_gpa::models::{Course, CourseId, Grade, INSTITUTIONAL};
//!
//! let courses = vec![
//!     Course::new(CourseId::from("a"), "Algebra".to_string(), 3.0, Grade::A),
//!     Course::new(CourseId::from("b"), "Biology".to_string(), 2.0, Grade::BPlus),
//! ];
//! assert_eq!(format_gpa(compute_gpa(&INSTITUTIONAL, &courses)), "4.30");
//! ```

pub mod core;

pub use crate::core::{config, engine, get_version, models, report, store};

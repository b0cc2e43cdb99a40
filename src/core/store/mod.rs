//! Course persistence behind a narrow, owner-keyed interface
//!
//! The engine never touches storage. Callers load a snapshot with
//! [`CourseStore::list`], mutate through the store, and recompute from the new
//! snapshot. Every call names the [`OwnerKey`] whose records it touches; nothing is
//! inferred from ambient session state.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::models::{Course, CourseError, CourseId, CoursePatch, GradeScale, NewCourse};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Failures surfaced by a [`CourseStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Owner key is empty or contains characters unsafe for storage keys
    #[error("invalid owner key '{0}': use letters, digits, '.', '_', '-' or '@'")]
    InvalidOwner(String),

    /// No course with this id for the owner
    #[error("no course with id '{0}'")]
    NotFound(CourseId),

    /// Entry rejected by validation
    #[error("invalid course: {0}")]
    InvalidCourse(#[from] CourseError),

    /// Two stored records share an id
    #[error("duplicate course id '{id}' in {path}")]
    DuplicateId {
        /// File that holds the duplicates
        path: PathBuf,
        /// Repeated id
        id: CourseId,
    },

    /// Filesystem failure
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Course file is not valid JSON for the expected layout
    #[error("malformed course file {path}: {source}")]
    Malformed {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Course file was written by a newer, unknown layout
    #[error("unsupported course file version {found} in {path}")]
    UnsupportedVersion {
        /// Offending file
        path: PathBuf,
        /// Version found on disk
        found: u32,
    },

    /// Course file names a different owner than the one requested
    #[error("course file {path} belongs to '{found}', expected '{expected}'")]
    OwnerMismatch {
        /// Offending file
        path: PathBuf,
        /// Requested owner
        expected: String,
        /// Owner recorded in the file
        found: String,
    },
}

/// Identity key partitioning stored courses, e.g. a user id or email
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerKey(String);

impl OwnerKey {
    /// Validate an owner key
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidOwner`] for empty keys, `.`/`..`, or characters
    /// outside `[A-Za-z0-9._@-]`.
    pub fn new(raw: &str) -> Result<Self, StoreError> {
        let key = raw.trim();
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '@');
        if key.is_empty() || key == "." || key == ".." || !key.chars().all(allowed) {
            return Err(StoreError::InvalidOwner(raw.to_string()));
        }
        Ok(Self(key.to_string()))
    }

    /// Borrow the raw key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OwnerKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owner-keyed course persistence
///
/// Mutations validate input against the store's grading scale, so a course with a
/// grade from another scale never reaches the engine.
pub trait CourseStore {
    /// Scale every stored grade belongs to
    fn scale(&self) -> &'static GradeScale;

    /// Snapshot of the owner's courses in insertion order
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn list(&self, owner: &OwnerKey) -> Result<Vec<Course>, StoreError>;

    /// Store a new course and return it with its assigned id
    ///
    /// # Errors
    /// Returns an error if the grade is outside the scale or storage fails.
    fn add(&mut self, owner: &OwnerKey, course: NewCourse) -> Result<Course, StoreError>;

    /// Apply a field-by-field edit and return the updated course
    ///
    /// # Errors
    /// Returns an error if the id is unknown, the patch is invalid, or storage fails.
    fn update(
        &mut self,
        owner: &OwnerKey,
        id: &CourseId,
        patch: &CoursePatch,
    ) -> Result<Course, StoreError>;

    /// Delete one course and return it
    ///
    /// # Errors
    /// Returns an error if the id is unknown or storage fails.
    fn remove(&mut self, owner: &OwnerKey, id: &CourseId) -> Result<Course, StoreError>;

    /// Delete every course of the owner, returning how many were removed
    ///
    /// # Errors
    /// Returns an error if storage fails.
    fn clear(&mut self, owner: &OwnerKey) -> Result<usize, StoreError>;

    /// Look up one course
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    fn get(&self, owner: &OwnerKey, id: &CourseId) -> Result<Course, StoreError> {
        self.list(owner)?
            .into_iter()
            .find(|course| &course.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

/// Append `course` under a fresh id unique within `courses`
fn insert_new(
    courses: &mut Vec<Course>,
    scale: &GradeScale,
    course: NewCourse,
) -> Result<Course, StoreError> {
    scale.check(course.grade())?;
    let mut id = CourseId::generate();
    while courses.iter().any(|existing| existing.id == id) {
        id = CourseId::generate();
    }
    let stored = course.into_course(id);
    courses.push(stored.clone());
    Ok(stored)
}

/// Patch the course with `id` in place
fn patch_existing(
    courses: &mut [Course],
    scale: &GradeScale,
    id: &CourseId,
    patch: &CoursePatch,
) -> Result<Course, StoreError> {
    if let Some(grade) = patch.grade {
        scale.check(grade)?;
    }
    let course = courses
        .iter_mut()
        .find(|course| &course.id == id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;
    patch.apply(course)?;
    Ok(course.clone())
}

/// Remove and return the course with `id`
fn take_existing(courses: &mut Vec<Course>, id: &CourseId) -> Result<Course, StoreError> {
    let index = courses
        .iter()
        .position(|course| &course.id == id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;
    Ok(courses.remove(index))
}

//! JSON-file course store: one `<owner>.json` document per owner
//!
//! Each mutation loads the owner's file, applies the change and rewrites the
//! whole document through a temp file and a rename. Concurrent writers to the same
//! owner file are not detected; the last rename wins.

use super::{insert_new, patch_existing, take_existing, CourseStore, OwnerKey, StoreError};
use crate::core::models::{Course, CourseId, CoursePatch, GradeScale, NewCourse};
use logger::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// On-disk layout version written by this store
pub const FILE_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct CourseFile {
    version: u32,
    owner: String,
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
struct CourseFileRef<'a> {
    version: u32,
    owner: &'a str,
    courses: &'a [Course],
}

/// Persistent store rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    scale: &'static GradeScale,
}

impl JsonFileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, scale: &'static GradeScale) -> Self {
        Self {
            dir: dir.into(),
            scale,
        }
    }

    /// File holding `owner`'s courses
    #[must_use]
    pub fn path_for(&self, owner: &OwnerKey) -> PathBuf {
        self.dir.join(format!("{owner}.json"))
    }

    fn load(&self, owner: &OwnerKey) -> Result<Vec<Course>, StoreError> {
        let path = self.path_for(owner);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let file: CourseFile = serde_json::from_str(&content).map_err(|source| {
            StoreError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        if file.version > FILE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path,
                found: file.version,
            });
        }
        if file.owner != owner.as_str() {
            return Err(StoreError::OwnerMismatch {
                path,
                expected: owner.to_string(),
                found: file.owner,
            });
        }

        let mut seen = HashSet::new();
        for course in &file.courses {
            if !seen.insert(&course.id) {
                return Err(StoreError::DuplicateId {
                    path,
                    id: course.id.clone(),
                });
            }
            self.scale.check(course.grade)?;
            if !course.credits.is_finite() || course.credits < 0.0 {
                warn!(
                    "course {} in {} has invalid credits {}; it will not count towards GPA",
                    course.id,
                    path.display(),
                    course.credits
                );
            }
        }

        debug!("loaded {} course(s) from {}", file.courses.len(), path.display());
        Ok(file.courses)
    }

    fn save(&self, owner: &OwnerKey, courses: &[Course]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(owner);
        let document = CourseFileRef {
            version: FILE_VERSION,
            owner: owner.as_str(),
            courses,
        };
        let json = serde_json::to_string_pretty(&document).map_err(|source| {
            StoreError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("saved {} course(s) to {}", courses.len(), path.display());
        Ok(())
    }
}

impl CourseStore for JsonFileStore {
    fn scale(&self) -> &'static GradeScale {
        self.scale
    }

    fn list(&self, owner: &OwnerKey) -> Result<Vec<Course>, StoreError> {
        self.load(owner)
    }

    fn add(&mut self, owner: &OwnerKey, course: NewCourse) -> Result<Course, StoreError> {
        let mut courses = self.load(owner)?;
        let stored = insert_new(&mut courses, self.scale, course)?;
        self.save(owner, &courses)?;
        Ok(stored)
    }

    fn update(
        &mut self,
        owner: &OwnerKey,
        id: &CourseId,
        patch: &CoursePatch,
    ) -> Result<Course, StoreError> {
        let mut courses = self.load(owner)?;
        let updated = patch_existing(&mut courses, self.scale, id, patch)?;
        self.save(owner, &courses)?;
        Ok(updated)
    }

    fn remove(&mut self, owner: &OwnerKey, id: &CourseId) -> Result<Course, StoreError> {
        let mut courses = self.load(owner)?;
        let removed = take_existing(&mut courses, id)?;
        self.save(owner, &courses)?;
        Ok(removed)
    }

    fn clear(&mut self, owner: &OwnerKey) -> Result<usize, StoreError> {
        let courses = self.load(owner)?;
        if courses.is_empty() {
            return Ok(0);
        }
        self.save(owner, &[])?;
        Ok(courses.len())
    }
}

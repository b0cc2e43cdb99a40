//! In-memory course store, one list per owner

use super::{insert_new, patch_existing, take_existing, CourseStore, OwnerKey, StoreError};
use crate::core::models::{Course, CourseId, CoursePatch, GradeScale, NewCourse};
use logger::debug;
use std::collections::HashMap;

/// Volatile store, useful for tests and single-run tools
#[derive(Debug)]
pub struct MemoryStore {
    scale: &'static GradeScale,
    courses: HashMap<OwnerKey, Vec<Course>>,
}

impl MemoryStore {
    /// Empty store validating against `scale`
    #[must_use]
    pub fn new(scale: &'static GradeScale) -> Self {
        Self {
            scale,
            courses: HashMap::new(),
        }
    }
}

impl CourseStore for MemoryStore {
    fn scale(&self) -> &'static GradeScale {
        self.scale
    }

    fn list(&self, owner: &OwnerKey) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.get(owner).cloned().unwrap_or_default())
    }

    fn add(&mut self, owner: &OwnerKey, course: NewCourse) -> Result<Course, StoreError> {
        let list = self.courses.entry(owner.clone()).or_default();
        let stored = insert_new(list, self.scale, course)?;
        debug!("added course {} for {owner}", stored.id);
        Ok(stored)
    }

    fn update(
        &mut self,
        owner: &OwnerKey,
        id: &CourseId,
        patch: &CoursePatch,
    ) -> Result<Course, StoreError> {
        let list = self
            .courses
            .get_mut(owner)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let updated = patch_existing(list, self.scale, id, patch)?;
        debug!("updated course {id} for {owner}");
        Ok(updated)
    }

    fn remove(&mut self, owner: &OwnerKey, id: &CourseId) -> Result<Course, StoreError> {
        let list = self
            .courses
            .get_mut(owner)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = take_existing(list, id)?;
        debug!("removed course {id} for {owner}");
        Ok(removed)
    }

    fn clear(&mut self, owner: &OwnerKey) -> Result<usize, StoreError> {
        let removed = self.courses.remove(owner).map_or(0, |list| list.len());
        debug!("cleared {removed} course(s) for {owner}");
        Ok(removed)
    }
}

//! StudentStore implementation
//!
//! A `Vec` of records with linear id lookup.

use crate::error::{GradebookError, Result};
use crate::search;
use crate::sort::{self, SortKey, SortMethod, SortStats};
use crate::stats::{self, ClassExtremes};
use crate::student::{Student, StudentId, DEFAULT_NAME_LIMIT};

/// Owns every student record and its grade sequence
#[derive(Debug, Clone)]
pub struct StudentStore {
    students: Vec<Student>,
    name_limit: usize,
}

impl StudentStore {
    /// Create an empty store with the default name limit
    pub fn new() -> Self {
        Self::with_name_limit(DEFAULT_NAME_LIMIT)
    }

    /// Create an empty store truncating names to `name_limit` characters
    pub fn with_name_limit(name_limit: usize) -> Self {
        Self {
            students: Vec::new(),
            name_limit,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new student with no grades
    ///
    /// Fails with `DuplicateId` and leaves the store unchanged if the id is
    /// already present.
    pub fn add(&mut self, id: StudentId, name: &str) -> Result<()> {
        if self.index_of(id).is_some() {
            return Err(GradebookError::DuplicateId(id));
        }

        self.students.push(Student::new(id, name, self.name_limit));
        tracing::debug!("added student {}", id);
        Ok(())
    }

    /// Remove a student, shifting later records down by one
    pub fn delete(&mut self, id: StudentId) -> Result<Student> {
        let idx = self.require_index(id)?;
        let removed = self.students.remove(idx);
        tracing::debug!("deleted student {} at index {}", id, idx);
        Ok(removed)
    }

    /// Replace a student's name (same truncation rule as creation)
    pub fn update_name(&mut self, id: StudentId, name: &str) -> Result<()> {
        let idx = self.require_index(id)?;
        let limit = self.name_limit;
        self.students[idx].set_name(name, limit);
        tracing::debug!("renamed student {}", id);
        Ok(())
    }

    /// Append a grade and recompute the average. Returns the new average.
    ///
    /// Grade range is not checked here.
    pub fn add_grade(&mut self, id: StudentId, grade: f32) -> Result<f32> {
        let idx = self.require_index(id)?;
        let average = self.students[idx].push_grade(grade);
        tracing::debug!("student {} grade {} -> average {}", id, grade, average);
        Ok(average)
    }

    // =========================================================================
    // Sorting and Searching
    // =========================================================================

    /// Sort in place; invalidates every previously obtained index
    pub fn sort(&mut self, method: SortMethod, key: SortKey) -> SortStats {
        sort::sort_students(&mut self.students, method, key)
    }

    /// Recursive binary search over `lo..=hi`
    ///
    /// The store must already be sorted by id.
    pub fn binary_search_by_id(&self, target: StudentId, lo: usize, hi: usize) -> Option<usize> {
        search::binary_search_by_id(&self.students, target, lo, hi)
    }

    /// Merge-sort by id, then binary-search the whole store
    pub fn search_by_id(&mut self, target: StudentId) -> Option<usize> {
        self.sort(SortMethod::Merge, SortKey::Id);
        search::search_all(&self.students, target)
    }

    /// Highest and lowest averages with their indexes
    pub fn highest_lowest(&self) -> Option<ClassExtremes> {
        stats::highest_lowest(&self.students)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Record at a position, `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Record with a given id (linear scan)
    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.index_of(id).map(|idx| &self.students[idx])
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    pub fn name_limit(&self) -> usize {
        self.name_limit
    }

    fn index_of(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }

    fn require_index(&self, id: StudentId) -> Result<usize> {
        self.index_of(id).ok_or(GradebookError::StudentNotFound(id))
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a StudentStore {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

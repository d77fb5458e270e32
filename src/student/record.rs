//! Student record implementation

use crate::aggregate;

use super::StudentId;

/// One enrollee: id, name, grade sequence and the derived average
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    grades: Vec<f32>,
    average: f32,
}

impl Student {
    /// Create a student with no grades and a zero average
    ///
    /// The name is truncated to `name_limit` characters.
    pub fn new(id: StudentId, name: &str, name_limit: usize) -> Self {
        Self {
            id,
            name: truncate_name(name, name_limit),
            grades: Vec::new(),
            average: 0.0,
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in entry order
    pub fn grades(&self) -> &[f32] {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    pub fn average(&self) -> f32 {
        self.average
    }

    pub(crate) fn set_name(&mut self, name: &str, name_limit: usize) {
        self.name = truncate_name(name, name_limit);
    }

    /// Append a grade and recompute the average. Returns the new average.
    pub(crate) fn push_grade(&mut self, grade: f32) -> f32 {
        self.grades.push(grade);
        self.recalc_average();
        self.average
    }

    fn recalc_average(&mut self) {
        self.average = aggregate::mean(&self.grades);
    }
}

/// Cut `name` to at most `limit` characters without splitting a code point
pub fn truncate_name(name: &str, limit: usize) -> String {
    match name.char_indices().nth(limit) {
        Some((byte_idx, _)) => name[..byte_idx].to_string(),
        None => name.to_string(),
    }
}

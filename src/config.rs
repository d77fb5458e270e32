//! Configuration for Gradebook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{GradebookError, Result};

/// Main configuration for a Gradebook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding every student record
    pub data_file: PathBuf,

    /// Save after every successful mutation (add, grade, delete, update)
    pub autosave: bool,

    // -------------------------------------------------------------------------
    // Record Configuration
    // -------------------------------------------------------------------------
    /// Longest name kept, in characters; longer names are cut silently
    pub name_max_len: usize,

    // -------------------------------------------------------------------------
    // Input Validation (interactive boundary only)
    // -------------------------------------------------------------------------
    /// Lowest grade the menu accepts
    pub grade_min: f32,

    /// Highest grade the menu accepts
    pub grade_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/students.json"),
            autosave: true,
            name_max_len: crate::student::DEFAULT_NAME_LIMIT,
            grade_min: 0.0,
            grade_max: 100.0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the values are usable before a session starts
    pub fn validate(&self) -> Result<()> {
        if self.name_max_len == 0 {
            return Err(GradebookError::Config(
                "name_max_len must be at least 1".to_string(),
            ));
        }
        if !self.grade_min.is_finite() || !self.grade_max.is_finite() {
            return Err(GradebookError::Config(format!(
                "grade range must be finite, got {}..={}",
                self.grade_min, self.grade_max
            )));
        }
        if self.grade_min > self.grade_max {
            return Err(GradebookError::Config(format!(
                "grade_min {} exceeds grade_max {}",
                self.grade_min, self.grade_max
            )));
        }
        Ok(())
    }

    /// Whether the menu should accept this grade
    pub fn accepts_grade(&self, grade: f32) -> bool {
        grade >= self.grade_min && grade <= self.grade_max
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable saving after each mutation
    pub fn autosave(mut self, enabled: bool) -> Self {
        self.config.autosave = enabled;
        self
    }

    /// Set the name length limit (in characters)
    pub fn name_max_len(mut self, len: usize) -> Self {
        self.config.name_max_len = len;
        self
    }

    /// Set the accepted grade range (inclusive)
    pub fn grade_range(mut self, min: f32, max: f32) -> Self {
        self.config.grade_min = min;
        self.config.grade_max = max;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

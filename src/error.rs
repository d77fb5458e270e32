//! Error types for Gradebook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::student::StudentId;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for Gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Student with ID {0} already exists")]
    DuplicateId(StudentId),

    #[error("Student with ID {0} not found")]
    StudentNotFound(StudentId),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GradebookError {
    fn from(err: serde_json::Error) -> Self {
        GradebookError::Serialization(err.to_string())
    }
}

//! Student Module
//!
//! A single enrollee record.
//!
//! ## Invariants
//! - `average` always equals the arithmetic mean of `grades` (0 when empty)
//! - `average` is recomputed on every appended grade and cannot be set
//! - Grades keep entry order and are append-only
//! - Names are bounded; longer names are truncated silently

mod record;

pub use record::{truncate_name, Student};

/// Student identifier, unique within a store
pub type StudentId = i32;

/// Default name limit in characters
pub const DEFAULT_NAME_LIMIT: usize = 49;

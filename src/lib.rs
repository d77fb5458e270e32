//! # Gradebook
//!
//! A single-process, in-memory student record manager with:
//! - A record store with unique ids and derived averages
//! - Bubble, insertion and merge sort by id or average (all stable)
//! - Recursive binary search by id
//! - Class statistics and divide-and-conquer grade summation
//! - JSON file persistence and an interactive console menu
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Interactive Menu / CLI                       │
//! │            (input validation, rendering)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Gradebook (engine)                          │
//! │         (config, load on open, save on change/exit)          │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  Record Store   │◄───────────────┤   Persistence   │
//!   │   (Vec<Student>)│  replay/dump   │     (JSON)      │
//!   └────────┬────────┘                └─────────────────┘
//!            │
//!    ┌───────┼──────────┬─────────────┐
//!    ▼       ▼          ▼             ▼
//!  Sort    Search     Stats      Aggregate
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod aggregate;
pub mod student;
pub mod sort;
pub mod search;
pub mod stats;
pub mod store;
pub mod persistence;
pub mod engine;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GradebookError, Result};
pub use config::Config;
pub use engine::Gradebook;
pub use sort::{SortKey, SortMethod, SortStats};
pub use store::StudentStore;
pub use student::{Student, StudentId};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Persistence Module
//!
//! Saves and restores the full record store as one JSON document.
//!
//! ## File Format
//! ```text
//! {
//!   "students": [
//!     {
//!       "id": 1,
//!       "name": "Ada",
//!       "grades": [
//!         80.00,
//!         90.00
//!       ],
//!       "average": 85.00
//!     }
//!   ]
//! }
//! ```
//! Every number with a fractional part is written with two decimals.
//!
//! ## Loading Rules
//! - A missing file is an empty store, not an error
//! - Entries without a usable `id` or a non-empty `name` are skipped
//! - Grades are replayed through the store, so `average` is recomputed
//!   and the persisted value is never trusted

mod document;
mod file;
mod format;

pub use document::{decode, encode, LoadReport};
pub use file::{load, save};
pub use format::TwoDecimalFormatter;

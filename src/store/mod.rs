//! Record Store Module
//!
//! The in-memory collection of all student records.
//!
//! ## Responsibilities
//! - Unique ids across all records
//! - CRUD and grade accumulation with synchronous average recompute
//! - Order-preserving deletion (later records shift down)
//! - Sorting and binary search entry points
//!
//! ## Positional access
//! Indexes returned by [`StudentStore::binary_search_by_id`] and the
//! statistics scan, and references handed out by [`StudentStore::get`],
//! are ephemeral views. Any insert, delete or sort invalidates them; the
//! borrow checker enforces this for references, callers must re-resolve
//! indexes by id afterwards.

mod records;

pub use records::StudentStore;

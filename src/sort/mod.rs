//! Sorting Engine
//!
//! Three stable sorting algorithms over the student records, selected by
//! two orthogonal choices: a [`SortMethod`] and a [`SortKey`].
//!
//! ## Algorithms
//! ```text
//! ┌───────────┬──────────────┬──────────────┬───────────────┐
//! │ Method    │ Best         │ Worst        │ Extra space   │
//! ├───────────┼──────────────┼──────────────┼───────────────┤
//! │ Bubble    │ O(n) sorted  │ O(n²)        │ O(1)          │
//! │ Insertion │ O(n) sorted  │ O(n²)        │ O(1)          │
//! │ Merge     │ O(n log n)   │ O(n log n)   │ O(n) per merge│
//! └───────────┴──────────────┴──────────────┴───────────────┘
//! ```
//!
//! All three are stable: records that compare equal under the key keep
//! their relative order.

mod bubble;
mod insertion;
mod merge;

use std::cmp::Ordering;
use std::fmt;

use crate::student::Student;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;

/// Sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMethod {
    Bubble,
    Insertion,
    Merge,
}

/// Sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending integer identifier
    Id,

    /// Ascending average; equal averages compare equal
    Average,
}

impl SortKey {
    /// Compare two students under this key
    pub fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Average => a
                .average()
                .partial_cmp(&b.average())
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMethod::Bubble => "bubble",
            SortMethod::Insertion => "insertion",
            SortMethod::Merge => "merge",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Id => "id",
            SortKey::Average => "average",
        };
        f.write_str(name)
    }
}

/// Work counters reported by a sort
///
/// `passes` counts outer passes for bubble sort, insertion steps for
/// insertion sort and merge operations for merge sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub moves: usize,
    pub passes: usize,
}

/// Sort the records in place with the given method and key
///
/// No-op for zero or one record.
pub fn sort_students(students: &mut Vec<Student>, method: SortMethod, key: SortKey) -> SortStats {
    let mut stats = SortStats::default();
    if students.len() <= 1 {
        return stats;
    }

    let mut cmp = |a: &Student, b: &Student| key.compare(a, b);
    match method {
        SortMethod::Bubble => bubble_sort(students.as_mut_slice(), &mut cmp, &mut stats),
        SortMethod::Insertion => insertion_sort(students.as_mut_slice(), &mut cmp, &mut stats),
        SortMethod::Merge => {
            let items = std::mem::take(students);
            *students = merge_sort(items, &mut cmp, &mut stats);
        }
    }

    tracing::debug!(
        "sorted {} students by {} ({}): {} comparisons, {} moves",
        students.len(),
        key,
        method,
        stats.comparisons,
        stats.moves
    );
    stats
}

//! Search Engine
//!
//! Recursive binary search over records sorted ascending by id.
//!
//! The records must already be sorted by id. This is not checked; on
//! unsorted input the result is unspecified (but never a panic).

use std::cmp::Ordering;

use crate::student::{Student, StudentId};

/// Search `students[lo..=hi]` for `target`
///
/// Returns the index of the matching record, or `None` once the interval
/// is empty. Bounds past the end of the slice are treated as absent rather
/// than indexed.
pub fn binary_search_by_id(
    students: &[Student],
    target: StudentId,
    lo: usize,
    hi: usize,
) -> Option<usize> {
    if lo > hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;
    let candidate = students.get(mid)?;

    match candidate.id().cmp(&target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => {
            // Interval [lo, mid - 1] is empty when mid == 0
            let upper = mid.checked_sub(1)?;
            binary_search_by_id(students, target, lo, upper)
        }
        Ordering::Less => binary_search_by_id(students, target, mid + 1, hi),
    }
}

/// Search the whole slice
pub fn search_all(students: &[Student], target: StudentId) -> Option<usize> {
    let hi = students.len().checked_sub(1)?;
    binary_search_by_id(students, target, 0, hi)
}

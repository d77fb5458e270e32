//! Statistics
//!
//! Single-pass class extremes over student averages.

use crate::student::Student;

/// An average together with the position of the student holding it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub average: f32,
    pub index: usize,
}

/// Highest and lowest averages in one scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassExtremes {
    pub highest: Extreme,
    pub lowest: Extreme,
}

/// Find the highest and lowest averages, `None` for an empty slice
///
/// Ties keep the first occurrence: a later equal value never replaces the
/// current extreme.
pub fn highest_lowest(students: &[Student]) -> Option<ClassExtremes> {
    let (first, rest) = students.split_first()?;

    let start = Extreme {
        average: first.average(),
        index: 0,
    };
    let mut extremes = ClassExtremes {
        highest: start,
        lowest: start,
    };

    for (offset, student) in rest.iter().enumerate() {
        let average = student.average();
        let index = offset + 1;
        if average > extremes.highest.average {
            extremes.highest = Extreme { average, index };
        }
        if average < extremes.lowest.average {
            extremes.lowest = Extreme { average, index };
        }
    }

    Some(extremes)
}

//! Console rendering of store contents

use std::io::{self, Write};

use crate::stats::ClassExtremes;
use crate::store::StudentStore;
use crate::student::Student;

pub const NO_STUDENTS: &str = "No students.";

/// Summary table: id, name, average, grade count
pub fn write_summary<W: Write>(out: &mut W, store: &StudentStore) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "{}", NO_STUDENTS);
    }
    writeln!(out, "ID\tName\t\tAvg\t#grades")?;
    writeln!(out, "-----------------------------------------")?;
    for s in store {
        writeln!(
            out,
            "{}\t{:<15}\t{:.2}\t{}",
            s.id(),
            s.name(),
            s.average(),
            s.grade_count()
        )?;
    }
    Ok(())
}

/// One row per student with every grade
pub fn write_matrix<W: Write>(out: &mut W, store: &StudentStore) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "{}", NO_STUDENTS);
    }
    writeln!(out, "Grades Matrix (each row = student):")?;
    for (i, s) in store.iter().enumerate() {
        write!(out, "[{}] {} {:<12} | ", i, s.id(), s.name())?;
        if s.grades().is_empty() {
            write!(out, "(no grades)")?;
        } else {
            write!(out, "{}  (avg: {:.2})", format_grades(s.grades()), s.average())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// A search hit
pub fn write_found<W: Write>(out: &mut W, s: &Student) -> io::Result<()> {
    writeln!(
        out,
        "Found: ID={} Name={} Avg={:.2} #grades={}",
        s.id(),
        s.name(),
        s.average(),
        s.grade_count()
    )?;
    if !s.grades().is_empty() {
        writeln!(out, "Grades: {}", format_grades(s.grades()))?;
    }
    Ok(())
}

/// Highest and lowest averages
pub fn write_stats<W: Write>(out: &mut W, store: &StudentStore) -> io::Result<()> {
    let Some(ClassExtremes { highest, lowest }) = store.highest_lowest() else {
        return writeln!(out, "{}", NO_STUDENTS);
    };
    if let Some(h) = store.get(highest.index) {
        writeln!(out, "Highest average: ID={} Name={} Avg={:.2}", h.id(), h.name(), h.average())?;
    }
    if let Some(l) = store.get(lowest.index) {
        writeln!(out, "Lowest average:  ID={} Name={} Avg={:.2}", l.id(), l.name(), l.average())?;
    }
    Ok(())
}

/// `80.00, 90.50`
pub fn format_grades(grades: &[f32]) -> String {
    grades
        .iter()
        .map(|g| format!("{:.2}", g))
        .collect::<Vec<_>>()
        .join(", ")
}

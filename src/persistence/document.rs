//! Student document encoding and tolerant decoding

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::Result;
use crate::store::StudentStore;
use crate::student::{Student, StudentId};

use super::TwoDecimalFormatter;

/// Outcome of restoring a store from a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records re-inserted into the store
    pub loaded: usize,

    /// Entries dropped because a field was missing, malformed or duplicated
    pub skipped: usize,
}

#[derive(Serialize)]
struct StudentsDocument<'a> {
    students: Vec<StudentEntry<'a>>,
}

#[derive(Serialize)]
struct StudentEntry<'a> {
    id: StudentId,
    name: &'a str,
    grades: &'a [f32],
    average: f32,
}

impl<'a> From<&'a Student> for StudentEntry<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: student.id(),
            name: student.name(),
            grades: student.grades(),
            average: student.average(),
        }
    }
}

/// Serialize the whole store to JSON bytes
pub fn encode(store: &StudentStore) -> Result<Vec<u8>> {
    let document = StudentsDocument {
        students: store.iter().map(StudentEntry::from).collect(),
    };

    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, TwoDecimalFormatter::new());
    document.serialize(&mut ser)?;
    out.push(b'\n');
    Ok(out)
}

/// Why a single entry was not restored
#[derive(Debug, Error)]
enum SkipReason {
    #[error("missing or invalid id")]
    InvalidId,

    #[error("missing or empty name")]
    InvalidName,

    #[error("duplicate id {0}")]
    Duplicate(StudentId),
}

/// Parse `text` and replay every usable entry into `store`
///
/// Text that is not JSON is an error. Anything else that does not fit the
/// expected shape is skipped and counted in the report.
pub fn decode(text: &str, store: &mut StudentStore) -> Result<LoadReport> {
    let root: Value = serde_json::from_str(text)?;
    let mut report = LoadReport::default();

    let Some(entries) = root.get("students").and_then(Value::as_array) else {
        tracing::warn!("document has no students array, nothing restored");
        return Ok(report);
    };

    for (position, entry) in entries.iter().enumerate() {
        match restore_entry(entry, store) {
            Ok(()) => report.loaded += 1,
            Err(reason) => {
                report.skipped += 1;
                tracing::warn!("skipping student entry {}: {}", position, reason);
            }
        }
    }

    Ok(report)
}

fn restore_entry(entry: &Value, store: &mut StudentStore) -> std::result::Result<(), SkipReason> {
    let id = entry
        .get("id")
        .and_then(Value::as_i64)
        .and_then(|raw| StudentId::try_from(raw).ok())
        .ok_or(SkipReason::InvalidId)?;

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(SkipReason::InvalidName)?;

    store.add(id, name).map_err(|_| SkipReason::Duplicate(id))?;

    // The stored average is ignored; replaying grades recomputes it
    let grades = entry.get("grades").and_then(Value::as_array);
    let grades = grades
        .into_iter()
        .flatten()
        .filter_map(Value::as_f64)
        .map(|grade| grade as f32)
        .filter(|grade| grade.is_finite());
    for grade in grades {
        // The id was inserted just above, so this cannot miss
        let _ = store.add_grade(id, grade);
    }

    Ok(())
}

//! File-level save and load
//!
//! Saves go through a sibling temporary file and a rename, so a failed
//! save leaves the previous file untouched.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::StudentStore;

use super::{decode, encode, LoadReport};

/// Write the whole store to `path`, replacing any previous contents
pub fn save(store: &StudentStore, path: &Path) -> Result<()> {
    let bytes = encode(store)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path);
    if let Err(e) = write_file(&tmp_path, &bytes).and_then(|()| fs::rename(&tmp_path, path)) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            if cleanup.kind() != ErrorKind::NotFound {
                tracing::warn!("could not remove {}: {}", tmp_path.display(), cleanup);
            }
        }
        return Err(e.into());
    }

    tracing::info!("saved {} students to {}", store.len(), path.display());
    Ok(())
}

/// Replay the records stored at `path` into `store`
///
/// A missing file yields an empty report. Any other read failure, or text
/// that is not JSON, is returned as an error.
pub fn load(store: &mut StudentStore, path: &Path) -> Result<LoadReport> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("no data file at {}, starting empty", path.display());
            return Ok(LoadReport::default());
        }
        Err(e) => return Err(e.into()),
    };

    let report = decode(&text, store)?;
    tracing::info!(
        "loaded {} students from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped
    );
    Ok(report)
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `students.json` -> `students.json.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

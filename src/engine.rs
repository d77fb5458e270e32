//! Engine Module
//!
//! The top-level session that owns the record store.
//!
//! ## Responsibilities
//! - Load the data file on startup
//! - Hand the store to the interactive layer
//! - Save after mutations (when autosave is on) and once more on exit
//!
//! The in-memory store stays authoritative: a failed save is reported to
//! the caller and never rolls anything back.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::persistence::{self, LoadReport};
use crate::store::StudentStore;

/// A gradebook session: configuration plus the record store
pub struct Gradebook {
    /// Session configuration
    config: Config,

    /// Every student record
    store: StudentStore,

    /// What the startup load restored
    load_report: LoadReport,
}

impl Gradebook {
    /// Open a session, restoring records from `config.data_file`
    ///
    /// A missing data file starts an empty store.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let mut store = StudentStore::with_name_limit(config.name_max_len);
        let load_report = persistence::load(&mut store, &config.data_file)?;

        if load_report.skipped > 0 {
            tracing::warn!(
                "{} malformed entries in {} were dropped",
                load_report.skipped,
                config.data_file.display()
            );
        }

        Ok(Self {
            config,
            store,
            load_report,
        })
    }

    /// Open with default config and the given data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_file(path).build();
        Self::open(config)
    }

    /// An empty session that never reads the data file
    pub fn in_memory(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: StudentStore::with_name_limit(config.name_max_len),
            config,
            load_report: LoadReport::default(),
        })
    }

    /// Write every record to the data file
    pub fn save(&self) -> Result<()> {
        persistence::save(&self.store, &self.config.data_file)
    }

    /// Save if autosave is enabled; called after each successful mutation
    pub fn checkpoint(&self) -> Result<()> {
        if !self.config.autosave {
            return Ok(());
        }
        self.save()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StudentStore {
        &mut self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }
}

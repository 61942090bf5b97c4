//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use super::PlanStore;
use crate::{
    db::Database,
    error::{EnrollError, Result},
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/enroll/enroll.db` or `~/.local/share/enroll/enroll.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database file and schema.
    ///
    /// # Errors
    ///
    /// Returns `EnrollError::FileSystem` if the database directory cannot be
    /// created. Returns `EnrollError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<PlanStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| EnrollError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = PlanStore::new(db_path);
        store.with_database(|_db: &Database| Ok(())).await?;
        log::debug!("Plan store ready at {}", store.database_path().display());

        Ok(store)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("enroll")
            .place_data_file("enroll.db")
            .map_err(|e| EnrollError::XdgDirectory(e.to_string()))
    }
}

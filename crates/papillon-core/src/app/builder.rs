//! Builder for creating and configuring Papillon instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::Papillon;
use crate::{
    error::{PapillonError, Result},
    grades::{GradesService, Providers},
    storage::{MemoryStorage, SqliteStorage, Storage},
    stores::{AccountStore, GradesStore, MultiServiceStore, QrCodeStore},
    subjects::SubjectClassifier,
};

/// Builder for creating and configuring Papillon instances.
#[derive(Clone, Default)]
pub struct PapillonBuilder {
    database_path: Option<PathBuf>,
    providers: Providers,
}

impl PapillonBuilder {
    /// Creates a new builder with default settings and no grades client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/papillon/papillon.db` or
    /// `~/.local/share/papillon/papillon.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the vendor clients used by the grades dispatcher.
    pub fn with_providers(mut self, providers: Providers) -> Self {
        self.providers = providers;
        self
    }

    /// Builds an instance persisted in SQLite.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::FileSystem` if the database directory cannot be
    /// created, `PapillonError::XdgDirectory` if the default path cannot be
    /// resolved, and `PapillonError::Database` if initialization fails.
    pub async fn build(self) -> Result<Papillon> {
        let db_path = if let Some(path) = &self.database_path {
            path.clone()
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PapillonError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening database at {}", db_path.display());
        let storage = SqliteStorage::open(&db_path).await?;
        self.build_with_storage(Arc::new(storage)).await
    }

    /// Builds an instance that keeps everything in memory.
    pub async fn build_in_memory(self) -> Result<Papillon> {
        self.build_with_storage(Arc::new(MemoryStorage::new())).await
    }

    /// Builds an instance over any storage handle.
    pub async fn build_with_storage(self, storage: Arc<dyn Storage>) -> Result<Papillon> {
        let qrcodes = QrCodeStore::load(storage.clone()).await?;
        let accounts = Arc::new(AccountStore::load(storage.clone()).await?);
        let multi_service = Arc::new(MultiServiceStore::load(storage.clone()).await?);
        let grades_store = Arc::new(GradesStore::load(storage.clone()).await?);

        let subjects = SubjectClassifier::new(accounts.clone());
        let grades = GradesService::new(
            accounts.clone(),
            multi_service.clone(),
            grades_store,
            self.providers,
        );

        Ok(Papillon {
            qrcodes,
            accounts,
            multi_service,
            subjects,
            grades,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("papillon")
            .place_data_file("papillon.db")
            .map_err(|e| PapillonError::XdgDirectory(e.to_string()))
    }
}

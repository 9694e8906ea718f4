use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;

use super::Storage;
use crate::{
    db::Database,
    error::{PapillonError, Result},
};

/// Storage backed by the SQLite `kv_store` table.
///
/// Each call opens its own connection on a blocking thread, so the handle is
/// cheap to clone and share between stores.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    /// Opens (and if needed creates) the database at `db_path`.
    pub async fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        let path = db_path.clone();

        task::spawn_blocking(move || {
            let _db = Database::new(&path)?;
            Ok::<(), PapillonError>(())
        })
        .await
        .map_err(PapillonError::join)??;

        Ok(Self { db_path })
    }

    /// Lists the namespace keys currently stored.
    pub async fn keys(&self) -> Result<Vec<String>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.keys()
        })
        .await
        .map_err(PapillonError::join)?
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_value(&key)
        })
        .await
        .map_err(PapillonError::join)?
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_value(&key, &value)
        })
        .await
        .map_err(PapillonError::join)?
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_value(&key).map(|_| ())
        })
        .await
        .map_err(PapillonError::join)?
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("kv.db");

        let storage = SqliteStorage::open(&db_path).await.unwrap();
        storage.set("grades-storage", "{}").await.unwrap();
        storage.set("qrcode-storage", "[]").await.unwrap();

        let reopened = SqliteStorage::open(&db_path).await.unwrap();
        assert_eq!(
            reopened.get("grades-storage").await.unwrap().as_deref(),
            Some("{}")
        );
        assert_eq!(
            reopened.keys().await.unwrap(),
            vec!["grades-storage".to_string(), "qrcode-storage".to_string()]
        );

        reopened.remove("grades-storage").await.unwrap();
        assert_eq!(reopened.get("grades-storage").await.unwrap(), None);
    }
}

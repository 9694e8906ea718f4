//! Persistence handles injected into the stores.
//!
//! A [`Storage`] is an opaque key-value blob interface. Stores serialize their
//! whole state to JSON and write it under a fixed namespace key (see
//! [`keys`]). Two implementations exist:
//!
//! - [`SqliteStorage`]: the on-disk store used by the CLI
//! - [`MemoryStorage`]: an in-process map, used by tests
//!
//! ```rust
//! use papillon_core::storage::{MemoryStorage, Storage};
//!
//! # async fn example() -> papillon_core::Result<()> {
//! let storage = MemoryStorage::new();
//! storage.set("qrcode-storage", "[]").await?;
//! assert_eq!(storage.get("qrcode-storage").await?.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Namespace keys of the persisted stores.
pub mod keys {
    pub const QR_CODES: &str = "qrcode-storage";
    pub const ACCOUNTS: &str = "account-storage";
    pub const MULTI_SERVICE: &str = "multiservice-storage";
    pub const GRADES: &str = "grades-storage";
}

/// Opaque key-value blob storage.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns the blob stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the blob stored under `key`.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and deserializes the blob under `key`, falling back to the default
/// value when nothing has been stored yet.
pub async fn load_json<T>(storage: &dyn Storage, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match storage.get(key).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}

/// Serializes `value` and writes it under `key`.
pub async fn save_json<T>(storage: &dyn Storage, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw).await
}

//! Store for canteen QR codes.

use std::sync::Arc;

use jiff::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    error::{PapillonError, Result},
    models::QrCode,
    storage::{keys, load_json, save_json, Storage},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct QrCodeState {
    #[serde(default)]
    codes: Vec<QrCode>,
}

/// Persisted list of named QR codes.
///
/// Every mutation is written to storage before the in-memory snapshot
/// changes, so a failed write leaves the store as it was.
pub struct QrCodeStore {
    storage: Arc<dyn Storage>,
    codes: Mutex<Vec<QrCode>>,
}

impl QrCodeStore {
    /// Hydrates the store from `storage`.
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let state: QrCodeState = load_json(storage.as_ref(), keys::QR_CODES).await?;
        Ok(Self {
            storage,
            codes: Mutex::new(state.codes),
        })
    }

    /// Adds a QR code and persists the list.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::InvalidInput` if `name` or `data` is blank.
    pub async fn add(&self, name: &str, data: &str) -> Result<QrCode> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PapillonError::invalid_input("name")
                .with_reason("QR code name cannot be empty"));
        }
        let data = data.trim();
        if data.is_empty() {
            return Err(PapillonError::invalid_input("data")
                .with_reason("QR code payload cannot be empty"));
        }

        let mut codes = self.codes.lock().await;
        let code = QrCode {
            id: next_id(&codes, Timestamp::now().as_millisecond()),
            name: name.to_string(),
            data: data.to_string(),
        };

        let mut updated = codes.clone();
        updated.push(code.clone());
        self.persist(&updated).await?;
        *codes = updated;

        info!("Added QR code {} ({})", code.id, code.name);
        Ok(code)
    }

    /// Removes the QR code with the given id, returning it if it existed.
    pub async fn remove(&self, id: &str) -> Result<Option<QrCode>> {
        let mut codes = self.codes.lock().await;
        let Some(position) = codes.iter().position(|code| code.id == id) else {
            return Ok(None);
        };

        let mut updated = codes.clone();
        let removed = updated.remove(position);
        self.persist(&updated).await?;
        *codes = updated;

        info!("Removed QR code {id}");
        Ok(Some(removed))
    }

    pub async fn get(&self, id: &str) -> Option<QrCode> {
        self.codes.lock().await.iter().find(|code| code.id == id).cloned()
    }

    /// Snapshot of every QR code, in insertion order.
    pub async fn list(&self) -> Vec<QrCode> {
        self.codes.lock().await.clone()
    }

    async fn persist(&self, codes: &[QrCode]) -> Result<()> {
        let state = QrCodeState {
            codes: codes.to_vec(),
        };
        save_json(self.storage.as_ref(), keys::QR_CODES, &state).await
    }
}

/// Millisecond timestamp id, bumped past any id already in use.
fn next_id(codes: &[QrCode], now_ms: i64) -> String {
    let mut candidate = now_ms;
    loop {
        let id = candidate.to_string();
        if !codes.iter().any(|code| code.id == id) {
            return id;
        }
        candidate += 1;
    }
}

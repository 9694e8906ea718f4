//! Canteen QR code model.

use serde::{Deserialize, Serialize};

/// A scanned or imported QR code, named by the user.
///
/// Records are never updated after creation. Two records may carry the same
/// `data`; `id` is the only identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrCode {
    /// Millisecond timestamp of creation, as a string
    pub id: String,

    /// User-supplied label
    pub name: String,

    /// Raw scanned payload
    pub data: String,
}

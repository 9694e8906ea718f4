//! Persisted stores.
//!
//! Each store is an explicit object constructed over an injected
//! [`Storage`](crate::storage::Storage) handle. A store keeps its state in
//! memory behind a tokio lock, serializes it to JSON under its namespace key
//! on every mutation, and only swaps the in-memory copy once the write has
//! succeeded.

mod accounts;
mod grades;
mod multi_service;
mod qrcode;

pub use accounts::AccountStore;
pub use grades::GradesStore;
pub use multi_service::{FeatureAccounts, MultiServiceStore};
pub use qrcode::QrCodeStore;

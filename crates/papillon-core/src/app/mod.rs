//! Application handle tying storage, stores and services together.
//!
//! [`Papillon`] is what interfaces talk to. It is created by
//! [`PapillonBuilder`], owns one store per namespace over a shared
//! [`crate::storage::Storage`], and exposes the operations in [`handlers`] taking
//! [`crate::params`] structures and returning display wrappers.
//!
//! ```rust
//! use papillon_core::{params::AddQrCode, PapillonBuilder};
//!
//! # async fn example() -> papillon_core::Result<()> {
//! let app = PapillonBuilder::new().build_in_memory().await?;
//!
//! app.add_qrcode(&AddQrCode {
//!     name: "Cantine".to_string(),
//!     data: "0123456789".to_string(),
//! })
//! .await?;
//! assert_eq!(app.list_qrcodes().await.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    grades::GradesService,
    stores::{AccountStore, GradesStore, MultiServiceStore, QrCodeStore},
    subjects::SubjectClassifier,
};

pub mod builder;
pub mod handlers;


pub use builder::PapillonBuilder;

/// Main interface over the persisted stores.
pub struct Papillon {
    qrcodes: QrCodeStore,
    accounts: Arc<AccountStore>,
    multi_service: Arc<MultiServiceStore>,
    subjects: SubjectClassifier,
    grades: GradesService,
}

impl Papillon {
    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn multi_service(&self) -> &MultiServiceStore {
        &self.multi_service
    }

    pub fn grades_store(&self) -> &GradesStore {
        self.grades.store()
    }
}

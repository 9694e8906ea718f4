//! Core library for the Papillon school companion.
//!
//! This crate holds the persisted state of the application and the logic that
//! fills it:
//!
//! - [`stores`]: QR codes, accounts with their personalization, multi-service
//!   spaces and the grades cache, each persisted as a JSON blob through a
//!   [`storage::Storage`] handle
//! - [`grades`]: the dispatcher routing an account to its school-portal client
//! - [`subjects`]: colour, display name and emoji assignment for subjects
//! - [`qr_image`]: reading QR payloads from pictures and drawing symbols
//! - [`display`]: markdown formatting of models and operation results
//!
//! Interfaces use the [`Papillon`] handle built by [`PapillonBuilder`].
//!
//! # Quick Start
//!
//! ```rust
//! use papillon_core::{
//!     models::AccountService,
//!     params::{AddAccount, UpdateGrades, UpdatePeriods},
//!     PapillonBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = PapillonBuilder::new()
//!     .with_database_path(Some("papillon.db"))
//!     .build()
//!     .await?;
//!
//! // Offline accounts get a single built-in period
//! let account = app
//!     .add_account(&AddAccount {
//!         service: AccountService::Local,
//!         name: "Camille".to_string(),
//!         identity_provider: None,
//!         disabled_features: vec![],
//!     })
//!     .await?
//!     .resource;
//!
//! let outcome = app
//!     .update_periods(&UpdatePeriods {
//!         account_id: account.local_id.clone(),
//!     })
//!     .await?;
//! println!("{outcome}");
//!
//! app.update_grades(&UpdateGrades {
//!     account_id: account.local_id,
//!     period: None,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod db;
pub mod display;
pub mod error;
pub mod grades;
pub mod models;
pub mod params;
pub mod qr_image;
pub mod storage;
pub mod stores;
pub mod subjects;

// Re-export commonly used types
pub use app::{Papillon, PapillonBuilder};
pub use db::Database;
pub use display::{
    Accounts, CreateResult, DeleteResult, GradesReport, Periods, QrCodeSymbol, QrCodes,
};
pub use error::{PapillonError, Result};
pub use grades::{GradesProvider, GradesService, Providers, RefreshOutcome, SnapshotProvider};
pub use models::{Account, AccountService, MultiServiceFeature, Period, QrCode, SubjectData};
pub use subjects::SubjectClassifier;

//! Parameter structures for Papillon operations.
//!
//! Interface layers (the CLI today) define their own framework-specific
//! argument types and convert them into these structures, so the core stays
//! free of clap.
//!
//! ```ignore
//! #[derive(clap::Args)]
//! pub struct QrAddArgs {
//!     pub name: String,
//!     #[arg(long)]
//!     pub data: String,
//! }
//!
//! impl From<QrAddArgs> for AddQrCode {
//!     fn from(args: QrAddArgs) -> Self {
//!         AddQrCode { name: args.name, data: args.data }
//!     }
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{AccountService, MultiServiceFeature};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: String,
}

/// Parameters for storing a new QR code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddQrCode {
    /// Label shown in the list
    pub name: String,
    /// Raw payload, stored verbatim after trimming
    pub data: String,
}

/// Parameters for storing a QR code read from a picture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddQrCodeImage {
    /// Label shown in the list
    pub name: String,
    /// Image holding the symbol; the first symbol found is kept
    pub path: PathBuf,
}

/// Parameters for registering an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAccount {
    pub service: AccountService,
    pub name: String,
    #[serde(default)]
    pub identity_provider: Option<String>,
    /// Features the school instance switched off
    #[serde(default)]
    pub disabled_features: Vec<MultiServiceFeature>,
}

/// Delegates one feature of a multi-service space to a concrete account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkFeature {
    pub space_id: String,
    pub feature: MultiServiceFeature,
    pub account_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifySubject {
    pub account_id: String,
    /// Subject label as received from the school portal
    pub entry: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePeriods {
    pub account_id: String,
}

/// Parameters for refreshing grades.
///
/// Without a period, the stored default period is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGrades {
    pub account_id: String,
    #[serde(default)]
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowGrades {
    #[serde(default)]
    pub period: Option<String>,
}

//! Markdown formatting of models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes go through newtype wrappers so the same
//! data can be rendered differently as a list, a confirmation or a report.
//! Everything produces markdown for the CLI's terminal renderer.
//!
//! ```rust
//! use papillon_core::{display::CreateResult, models::QrCode};
//!
//! let code = QrCode {
//!     id: "1700000000000".to_string(),
//!     name: "Cantine".to_string(),
//!     data: "123456".to_string(),
//! };
//! let output = CreateResult::new(code).to_string();
//! assert!(output.contains("Added QR code with ID: 1700000000000"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Accounts, GradesReport, Periods, QrCodes};
pub use datetime::{EpochMillis, LocalDateTime};
pub use results::{CreateResult, DeleteResult, QrCodeSymbol, SubjectResult};

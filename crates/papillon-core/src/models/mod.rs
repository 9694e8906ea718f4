//! Domain models: accounts, QR codes, grades and subject assignments.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation concerns.

mod account;
mod grades;
mod qrcode;
mod service;
mod subject;

#[cfg(test)]
mod tests;

pub use account::{Account, Personalization, IUT_LANNION_PROVIDER};
pub use grades::{AverageOverview, Grade, GradeValue, GradesState, Period, SubjectAverage};
pub use qrcode::QrCode;
pub use service::{AccountService, MultiServiceFeature};
pub use subject::SubjectData;

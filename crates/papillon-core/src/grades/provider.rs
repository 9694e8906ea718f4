//! Vendor client seam.
//!
//! The vendor clients themselves (Pronote, EcoleDirecte, Skolengo, the IUT de
//! Lannion portal) live outside this crate. The dispatcher only sees them
//! through [`GradesProvider`] and picks one per account from [`Providers`].

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::{
    error::{PapillonError, Result},
    models::{Account, AverageOverview, Grade, Period},
};

/// Periods returned by a client, with the client's own default if it has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodsOutput {
    pub periods: Vec<Period>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradesOutput {
    pub grades: Vec<Grade>,
    pub averages: AverageOverview,
}

/// A vendor client able to list grading periods and fetch grades.
#[async_trait]
pub trait GradesProvider: Send + Sync {
    async fn grades_periods(&self, account: &Account) -> Result<PeriodsOutput>;

    async fn grades_and_averages(&self, account: &Account, period: &str) -> Result<GradesOutput>;
}

/// The vendor clients the dispatcher can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Pronote,
    EcoleDirecte,
    Skolengo,
    IutLannion,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Pronote => "Pronote",
            ProviderKind::EcoleDirecte => "EcoleDirecte",
            ProviderKind::Skolengo => "Skolengo",
            ProviderKind::IutLannion => "IUT de Lannion",
        };
        f.write_str(name)
    }
}

/// One optional client per vendor.
#[derive(Clone, Default)]
pub struct Providers {
    pronote: Option<Arc<dyn GradesProvider>>,
    ecole_directe: Option<Arc<dyn GradesProvider>>,
    skolengo: Option<Arc<dyn GradesProvider>>,
    iut_lannion: Option<Arc<dyn GradesProvider>>,
}

impl Providers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` as the client for `kind`.
    pub fn with(mut self, kind: ProviderKind, provider: Arc<dyn GradesProvider>) -> Self {
        *self.slot_mut(kind) = Some(provider);
        self
    }

    /// Registers the same client for every vendor.
    pub fn with_all(self, provider: Arc<dyn GradesProvider>) -> Self {
        self.with(ProviderKind::Pronote, provider.clone())
            .with(ProviderKind::EcoleDirecte, provider.clone())
            .with(ProviderKind::Skolengo, provider.clone())
            .with(ProviderKind::IutLannion, provider)
    }

    /// The client registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::ProviderUnavailable` if none was registered.
    pub fn get(&self, kind: ProviderKind) -> Result<Arc<dyn GradesProvider>> {
        let slot = match kind {
            ProviderKind::Pronote => &self.pronote,
            ProviderKind::EcoleDirecte => &self.ecole_directe,
            ProviderKind::Skolengo => &self.skolengo,
            ProviderKind::IutLannion => &self.iut_lannion,
        };
        slot.clone()
            .ok_or(PapillonError::ProviderUnavailable { provider: kind })
    }

    fn slot_mut(&mut self, kind: ProviderKind) -> &mut Option<Arc<dyn GradesProvider>> {
        match kind {
            ProviderKind::Pronote => &mut self.pronote,
            ProviderKind::EcoleDirecte => &mut self.ecole_directe,
            ProviderKind::Skolengo => &mut self.skolengo,
            ProviderKind::IutLannion => &mut self.iut_lannion,
        }
    }
}

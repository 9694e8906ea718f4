//! Grades dispatcher.
//!
//! [`GradesService`] routes an account to the client of its backend, fetches
//! periods or grades, and writes the result into the [`GradesStore`].
//!
//! # Routing
//!
//! | Service                | Source                                                  |
//! |------------------------|---------------------------------------------------------|
//! | Pronote                | Pronote client (returns its own default period)         |
//! | EcoleDirecte           | EcoleDirecte client (default period computed)           |
//! | Skolengo               | Skolengo client, unless the instance disabled grades    |
//! | Local (`iut-lannion`)  | IUT de Lannion client                                   |
//! | Local (other)          | built-in single period `Toutes`, no grades              |
//! | PapillonMultiService   | the account registered for the `Grades` feature         |
//! | canteen services       | `PapillonError::UnsupportedService`                     |
//!
//! # Failure handling
//!
//! Unsupported services always surface as errors. Client failures while
//! listing periods propagate; client failures while fetching grades are
//! logged and reported as [`RefreshOutcome::Failed`], leaving the store as it
//! was.

use std::sync::Arc;

use jiff::Timestamp;
use log::{error, info, warn};

use crate::{
    error::{PapillonError, Result},
    models::{Account, AccountService, AverageOverview, MultiServiceFeature, Period},
    stores::{AccountStore, GradesStore, MultiServiceStore},
};

mod provider;
mod snapshot;


pub use provider::{GradesOutput, GradesProvider, PeriodsOutput, ProviderKind, Providers};
pub use snapshot::{GradesSnapshot, SnapshotProvider};

/// Name of the single period of plain local accounts.
pub const LOCAL_PERIOD_NAME: &str = "Toutes";
const LOCAL_PERIOD_START: i64 = 1_609_459_200;
const LOCAL_PERIOD_END: i64 = 1_622_505_600;

/// Picks the period bracketing `now_ms`, else the first period.
///
/// Returns `None` only for an empty list.
pub fn default_period(periods: &[Period], now_ms: i64) -> Option<&str> {
    periods
        .iter()
        .find(|period| period.contains(now_ms))
        .or_else(|| periods.first())
        .map(|period| period.name.as_str())
}

/// What a refresh did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Periods were stored
    PeriodsUpdated {
        account: String,
        count: usize,
        default_period: String,
    },
    /// Grades and averages of one period were stored
    GradesUpdated {
        account: String,
        period: String,
        count: usize,
    },
    /// Multi-service space with no account serving grades
    NoGradesAccount { space: String },
    /// The school instance switched grades off
    FeatureUnsupported { account: String },
    /// The client returned no period
    NoPeriods { account: String },
    /// Fetching grades failed; nothing was stored
    Failed { account: String, message: String },
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(
            self,
            RefreshOutcome::PeriodsUpdated { .. } | RefreshOutcome::GradesUpdated { .. }
        )
    }
}

/// Where the grades of a concrete account come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Client(ProviderKind),
    LocalDefault,
    InstanceDisabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Direct(Source),
    Delegated,
}

/// Routes every service to its grades source.
fn route(account: &Account) -> Result<Route> {
    let route = match account.service {
        AccountService::Pronote => Route::Direct(Source::Client(ProviderKind::Pronote)),
        AccountService::EcoleDirecte => Route::Direct(Source::Client(ProviderKind::EcoleDirecte)),
        AccountService::Skolengo if !account.supports(MultiServiceFeature::Grades) => {
            Route::Direct(Source::InstanceDisabled)
        }
        AccountService::Skolengo => Route::Direct(Source::Client(ProviderKind::Skolengo)),
        AccountService::Local if account.is_iut_lannion() => {
            Route::Direct(Source::Client(ProviderKind::IutLannion))
        }
        AccountService::Local => Route::Direct(Source::LocalDefault),
        AccountService::PapillonMultiService => Route::Delegated,
        AccountService::Turboself
        | AccountService::Ard
        | AccountService::Izly
        | AccountService::Alise => {
            return Err(PapillonError::UnsupportedService {
                service: account.service,
            })
        }
    };
    Ok(route)
}

/// Keeps the default period named by the source, if it may name one and the
/// name is one of `periods`.
///
/// EcoleDirecte and Skolengo clients never pick the default period.
fn chosen_default(source: Source, default: Option<String>, periods: &[Period]) -> Option<String> {
    let default = match source {
        Source::Client(ProviderKind::EcoleDirecte | ProviderKind::Skolengo) => None,
        _ => default,
    }?;

    if periods.iter().any(|period| period.name == default) {
        Some(default)
    } else {
        warn!("Ignoring default period '{default}', not in the period list");
        None
    }
}

/// Fetches grades through the account's backend and fills the grades store.
pub struct GradesService {
    accounts: Arc<AccountStore>,
    multi_service: Arc<MultiServiceStore>,
    store: Arc<GradesStore>,
    providers: Providers,
}

impl GradesService {
    pub fn new(
        accounts: Arc<AccountStore>,
        multi_service: Arc<MultiServiceStore>,
        store: Arc<GradesStore>,
        providers: Providers,
    ) -> Self {
        Self {
            accounts,
            multi_service,
            store,
            providers,
        }
    }

    pub fn store(&self) -> &GradesStore {
        &self.store
    }

    /// Fetches the grading periods of `account` and stores them with the
    /// default period.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::UnsupportedService` for services without
    /// grades, `PapillonError::ProviderUnavailable` when no client is
    /// registered, and any client error unchanged.
    pub async fn update_grades_periods(&self, account: &Account) -> Result<RefreshOutcome> {
        let Some((account, source)) = self.resolve(account).await? else {
            return Ok(RefreshOutcome::NoGradesAccount {
                space: account.local_id.clone(),
            });
        };

        let output = match source {
            Source::InstanceDisabled => {
                error!(
                    "[update_grades_periods]: This Skolengo instance doesn't support Grades (account {})",
                    account.local_id
                );
                return Ok(RefreshOutcome::FeatureUnsupported {
                    account: account.local_id,
                });
            }
            Source::LocalDefault => PeriodsOutput {
                periods: vec![Period::new(
                    LOCAL_PERIOD_NAME,
                    Some(LOCAL_PERIOD_START),
                    Some(LOCAL_PERIOD_END),
                )],
                default: Some(LOCAL_PERIOD_NAME.to_string()),
            },
            Source::Client(kind) => self.providers.get(kind)?.grades_periods(&account).await?,
        };

        let PeriodsOutput { periods, default } = output;
        if periods.is_empty() {
            info!("No period returned for account {}", account.local_id);
            return Ok(RefreshOutcome::NoPeriods {
                account: account.local_id,
            });
        }

        let default = chosen_default(source, default, &periods);
        let Some(default_period) = default.or_else(|| {
            default_period(&periods, Timestamp::now().as_millisecond()).map(String::from)
        }) else {
            return Ok(RefreshOutcome::NoPeriods {
                account: account.local_id,
            });
        };

        let count = periods.len();
        self.store
            .update_periods(periods, default_period.clone())
            .await?;

        Ok(RefreshOutcome::PeriodsUpdated {
            account: account.local_id,
            count,
            default_period,
        })
    }

    /// Fetches the grades and averages of `period` and stores them.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::UnsupportedService` for services without
    /// grades. Client failures are logged and reported as
    /// [`RefreshOutcome::Failed`] instead.
    pub async fn update_grades_and_averages(
        &self,
        account: &Account,
        period: &str,
    ) -> Result<RefreshOutcome> {
        let Some((account, source)) = self.resolve(account).await? else {
            return Ok(RefreshOutcome::NoGradesAccount {
                space: account.local_id.clone(),
            });
        };

        let fetched = match source {
            Source::InstanceDisabled => {
                error!(
                    "[update_grades_and_averages]: This Skolengo instance doesn't support Grades (account {})",
                    account.local_id
                );
                return Ok(RefreshOutcome::FeatureUnsupported {
                    account: account.local_id,
                });
            }
            Source::LocalDefault => Ok(GradesOutput {
                grades: Vec::new(),
                averages: AverageOverview::zeroed(),
            }),
            Source::Client(kind) => match self.providers.get(kind) {
                Ok(client) => client.grades_and_averages(&account, period).await,
                Err(e) => Err(e),
            },
        };

        let output = match fetched {
            Ok(output) => output,
            Err(e) => {
                error!(
                    "grades not updated for account {} (period '{period}'), see: {e}",
                    account.local_id
                );
                return Ok(RefreshOutcome::Failed {
                    account: account.local_id,
                    message: e.to_string(),
                });
            }
        };

        let count = output.grades.len();
        self.store
            .update_grades_and_averages(period, output.grades, output.averages)
            .await?;

        Ok(RefreshOutcome::GradesUpdated {
            account: account.local_id,
            period: period.to_string(),
            count,
        })
    }

    /// Follows multi-service delegation down to a concrete account.
    ///
    /// Returns `None` when a space has no account registered for grades.
    async fn resolve(&self, account: &Account) -> Result<Option<(Account, Source)>> {
        let mut current = account.clone();
        let mut visited: Vec<String> = Vec::new();

        loop {
            match route(&current)? {
                Route::Direct(source) => return Ok(Some((current, source))),
                Route::Delegated => {
                    if visited.contains(&current.local_id) {
                        return Err(PapillonError::MultiServiceCycle {
                            local_id: current.local_id,
                        });
                    }

                    let target = self
                        .multi_service
                        .feature_account_id(MultiServiceFeature::Grades, &current.local_id)
                        .await;
                    let Some(target) = target else {
                        info!("No service set in multi-service space for feature \"Grades\"");
                        return Ok(None);
                    };
                    let Some(next) = self.accounts.get(&target).await else {
                        warn!(
                            "Space {} delegates grades to missing account {target}",
                            current.local_id
                        );
                        return Ok(None);
                    };

                    visited.push(current.local_id);
                    current = next;
                }
            }
        }
    }
}

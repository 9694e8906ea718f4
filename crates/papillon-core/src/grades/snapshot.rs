//! A [`GradesProvider`] serving data from a JSON export.
//!
//! The snapshot has the same camelCase layout the vendor clients produce:
//!
//! ```json
//! {
//!   "periods": [{ "name": "Trimestre 1", "startTimestamp": 0, "endTimestamp": 1 }],
//!   "default": "Trimestre 1",
//!   "grades": { "Trimestre 1": [] },
//!   "averages": { "Trimestre 1": { "overall": {}, "classOverall": {} } }
//! }
//! ```

use std::{collections::BTreeMap, path::Path};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GradesOutput, GradesProvider, PeriodsOutput};
use crate::{
    error::{PapillonError, Result},
    models::{Account, AverageOverview, Grade, Period},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradesSnapshot {
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub grades: BTreeMap<String, Vec<Grade>>,
    #[serde(default)]
    pub averages: BTreeMap<String, AverageOverview>,
}

#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    snapshot: GradesSnapshot,
}

impl SnapshotProvider {
    pub fn new(snapshot: GradesSnapshot) -> Self {
        Self { snapshot }
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Reads and parses a snapshot file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| PapillonError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl GradesProvider for SnapshotProvider {
    async fn grades_periods(&self, _account: &Account) -> Result<PeriodsOutput> {
        Ok(PeriodsOutput {
            periods: self.snapshot.periods.clone(),
            default: self.snapshot.default.clone(),
        })
    }

    async fn grades_and_averages(&self, _account: &Account, period: &str) -> Result<GradesOutput> {
        let grades = self
            .snapshot
            .grades
            .get(period)
            .ok_or_else(|| PapillonError::provider(format!("period '{period}' not in snapshot")))?;

        Ok(GradesOutput {
            grades: grades.clone(),
            averages: self
                .snapshot
                .averages
                .get(period)
                .cloned()
                .unwrap_or_default(),
        })
    }
}

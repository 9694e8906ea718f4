//! Grade, average and period payloads.
//!
//! These shapes are filled by the vendor clients and passed through to the
//! grades store without interpretation. Field names follow the camelCase
//! layout the clients emit.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A grading term scoping grade queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub name: String,

    /// Start of the term in milliseconds since the Unix epoch
    #[serde(default)]
    pub start_timestamp: Option<i64>,

    /// End of the term in milliseconds since the Unix epoch
    #[serde(default)]
    pub end_timestamp: Option<i64>,
}

impl Period {
    pub fn new(name: impl Into<String>, start: Option<i64>, end: Option<i64>) -> Self {
        Self {
            name: name.into(),
            start_timestamp: start,
            end_timestamp: end,
        }
    }

    /// Whether both bounds are known and bracket `now_ms`.
    pub fn contains(&self, now_ms: i64) -> bool {
        match (self.start_timestamp, self.end_timestamp) {
            (Some(start), Some(end)) => start <= now_ms && now_ms <= end,
            _ => false,
        }
    }
}

/// A single value of a grade (student mark, class average, maximum...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeValue {
    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub disabled: bool,

    /// Vendor status such as "Abs" or "Disp"
    #[serde(default)]
    pub status: Option<String>,
}

impl GradeValue {
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            disabled: false,
            status: None,
        }
    }

    /// A value the UI should grey out.
    pub fn disabled(value: Option<f64>) -> Self {
        Self {
            value,
            disabled: true,
            status: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: String,
    pub subject_name: String,

    #[serde(default)]
    pub description: String,

    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,

    #[serde(default = "default_coefficient")]
    pub coefficient: f64,

    pub out_of: GradeValue,
    pub student: GradeValue,

    #[serde(default)]
    pub average: Option<GradeValue>,
    #[serde(default)]
    pub max: Option<GradeValue>,
    #[serde(default)]
    pub min: Option<GradeValue>,

    #[serde(default)]
    pub is_bonus: bool,
    #[serde(default)]
    pub is_optional: bool,
}

fn default_coefficient() -> f64 {
    1.0
}

/// Averages for one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAverage {
    pub subject_name: String,
    pub average: GradeValue,

    #[serde(default)]
    pub class_average: GradeValue,
    #[serde(default)]
    pub max: GradeValue,
    #[serde(default)]
    pub min: GradeValue,
    #[serde(default)]
    pub out_of: Option<GradeValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AverageOverview {
    #[serde(default)]
    pub subjects: Vec<SubjectAverage>,
    pub overall: GradeValue,
    pub class_overall: GradeValue,
}

impl AverageOverview {
    /// Overview with both overall values empty and disabled.
    pub fn empty() -> Self {
        Self {
            subjects: Vec::new(),
            overall: GradeValue::disabled(None),
            class_overall: GradeValue::disabled(None),
        }
    }

    /// Overview used by accounts with no grade source: zero and disabled.
    pub fn zeroed() -> Self {
        Self {
            subjects: Vec::new(),
            overall: GradeValue::disabled(Some(0.0)),
            class_overall: GradeValue::disabled(Some(0.0)),
        }
    }
}

impl Default for AverageOverview {
    fn default() -> Self {
        Self::empty()
    }
}

/// Everything the grades store remembers, persisted as one blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradesState {
    #[serde(default)]
    pub periods: Vec<Period>,

    #[serde(default)]
    pub default_period: Option<String>,

    /// Grades keyed by period name
    #[serde(default)]
    pub grades: BTreeMap<String, Vec<Grade>>,

    /// Averages keyed by period name
    #[serde(default)]
    pub averages: BTreeMap<String, AverageOverview>,

    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

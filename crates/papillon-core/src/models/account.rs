//! Account model and per-account personalization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AccountService, MultiServiceFeature, SubjectData};

/// Identity provider identifier of the IUT de Lannion portal.
pub const IUT_LANNION_PROVIDER: &str = "iut-lannion";

/// A signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Identifier local to this device
    pub local_id: String,

    pub service: AccountService,

    /// Display name of the account owner
    pub name: String,

    /// Identity provider behind a `Local` account
    #[serde(default)]
    pub identity_provider: Option<String>,

    /// Features the school instance has switched off (Skolengo)
    #[serde(default)]
    pub disabled_features: Vec<MultiServiceFeature>,

    #[serde(default)]
    pub personalization: Personalization,
}

impl Account {
    /// Creates an account with a fresh local id and empty personalization.
    pub fn new(service: AccountService, name: impl Into<String>) -> Self {
        Self {
            local_id: uuid::Uuid::new_v4().to_string(),
            service,
            name: name.into(),
            identity_provider: None,
            disabled_features: Vec::new(),
            personalization: Personalization::default(),
        }
    }

    pub fn with_identity_provider(mut self, identifier: impl Into<String>) -> Self {
        self.identity_provider = Some(identifier.into());
        self
    }

    pub fn with_disabled_feature(mut self, feature: MultiServiceFeature) -> Self {
        if !self.disabled_features.contains(&feature) {
            self.disabled_features.push(feature);
        }
        self
    }

    /// Whether the school instance behind the account exposes `feature`.
    pub fn supports(&self, feature: MultiServiceFeature) -> bool {
        !self.disabled_features.contains(&feature)
    }

    /// Whether the account authenticates through the IUT de Lannion portal.
    pub fn is_iut_lannion(&self) -> bool {
        self.identity_provider.as_deref() == Some(IUT_LANNION_PROVIDER)
    }
}

/// User-customizable state attached to an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    /// Subject assignments keyed by normalized subject name
    #[serde(default)]
    pub subjects: BTreeMap<String, SubjectData>,

    /// Incremented on every change to `subjects`
    #[serde(default)]
    pub subjects_version: u64,
}

impl Personalization {
    /// Colours already handed out to this account's subjects.
    pub fn used_colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = self.subjects.values().map(|s| s.color.as_str()).collect();
        colors.sort_unstable();
        colors.dedup();
        colors
    }
}

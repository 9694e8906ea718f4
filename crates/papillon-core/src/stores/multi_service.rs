//! Registry of multi-service spaces.
//!
//! A multi-service space is an account of service
//! [`AccountService::PapillonMultiService`](crate::models::AccountService)
//! that delegates each [`MultiServiceFeature`] to a concrete account.

use std::{collections::BTreeMap, sync::Arc};

use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::MultiServiceFeature,
    storage::{keys, load_json, save_json, Storage},
};

/// Feature assignments of one space.
pub type FeatureAccounts = BTreeMap<MultiServiceFeature, String>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct MultiServiceState {
    /// Space local id → feature → concrete account local id
    #[serde(default)]
    spaces: BTreeMap<String, FeatureAccounts>,
}

pub struct MultiServiceStore {
    storage: Arc<dyn Storage>,
    spaces: RwLock<BTreeMap<String, FeatureAccounts>>,
}

impl MultiServiceStore {
    /// Hydrates the registry from `storage`.
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let state: MultiServiceState = load_json(storage.as_ref(), keys::MULTI_SERVICE).await?;
        Ok(Self {
            storage,
            spaces: RwLock::new(state.spaces),
        })
    }

    /// Delegates `feature` of the space `space_id` to `account_id`.
    pub async fn set_feature_account(
        &self,
        space_id: &str,
        feature: MultiServiceFeature,
        account_id: &str,
    ) -> Result<()> {
        let mut spaces = self.spaces.write().await;

        let mut updated = spaces.clone();
        updated
            .entry(space_id.to_string())
            .or_default()
            .insert(feature, account_id.to_string());
        self.persist(&updated).await?;
        *spaces = updated;

        info!("Space {space_id}: {feature} delegated to account {account_id}");
        Ok(())
    }

    /// Local id of the account serving `feature` inside `space_id`.
    pub async fn feature_account_id(
        &self,
        feature: MultiServiceFeature,
        space_id: &str,
    ) -> Option<String> {
        self.spaces
            .read()
            .await
            .get(space_id)
            .and_then(|features| features.get(&feature))
            .cloned()
    }

    /// Every assignment of the space, empty if the space is unknown.
    pub async fn space(&self, space_id: &str) -> FeatureAccounts {
        self.spaces
            .read()
            .await
            .get(space_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Forgets the space and all of its assignments.
    pub async fn remove_space(&self, space_id: &str) -> Result<bool> {
        let mut spaces = self.spaces.write().await;
        if !spaces.contains_key(space_id) {
            return Ok(false);
        }

        let mut updated = spaces.clone();
        updated.remove(space_id);
        self.persist(&updated).await?;
        *spaces = updated;

        info!("Removed multi-service space {space_id}");
        Ok(true)
    }

    async fn persist(&self, spaces: &BTreeMap<String, FeatureAccounts>) -> Result<()> {
        let state = MultiServiceState {
            spaces: spaces.clone(),
        };
        save_json(self.storage.as_ref(), keys::MULTI_SERVICE, &state).await
    }
}

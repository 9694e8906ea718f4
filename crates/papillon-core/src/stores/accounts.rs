//! Store for accounts and their personalization.

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    error::{PapillonError, Result},
    models::{Account, SubjectData},
    storage::{keys, load_json, save_json, Storage},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountState {
    #[serde(default)]
    accounts: Vec<Account>,
}

/// Persisted list of accounts.
pub struct AccountStore {
    storage: Arc<dyn Storage>,
    accounts: RwLock<Vec<Account>>,
}

impl AccountStore {
    /// Hydrates the store from `storage`.
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let state: AccountState = load_json(storage.as_ref(), keys::ACCOUNTS).await?;
        Ok(Self {
            storage,
            accounts: RwLock::new(state.accounts),
        })
    }

    /// Adds an account, replacing any account with the same local id.
    pub async fn add(&self, account: Account) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        let mut updated = accounts.clone();
        updated.retain(|existing| existing.local_id != account.local_id);
        updated.push(account.clone());
        self.persist(&updated).await?;
        *accounts = updated;

        info!("Added {} account {}", account.service, account.local_id);
        Ok(account)
    }

    pub async fn get(&self, local_id: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|account| account.local_id == local_id)
            .cloned()
    }

    /// Like [`AccountStore::get`], but a missing account is an error.
    pub async fn require(&self, local_id: &str) -> Result<Account> {
        self.get(local_id)
            .await
            .ok_or_else(|| PapillonError::AccountNotFound {
                local_id: local_id.to_string(),
            })
    }

    /// Version of the account's subject assignments, read without cloning
    /// the account.
    pub async fn subjects_version(&self, local_id: &str) -> Result<u64> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|account| account.local_id == local_id)
            .map(|account| account.personalization.subjects_version)
            .ok_or_else(|| PapillonError::AccountNotFound {
                local_id: local_id.to_string(),
            })
    }

    pub async fn list(&self) -> Vec<Account> {
        self.accounts.read().await.clone()
    }

    /// Removes an account, returning it if it existed.
    pub async fn remove(&self, local_id: &str) -> Result<Option<Account>> {
        let mut accounts = self.accounts.write().await;
        let Some(position) = accounts.iter().position(|a| a.local_id == local_id) else {
            return Ok(None);
        };

        let mut updated = accounts.clone();
        let removed = updated.remove(position);
        self.persist(&updated).await?;
        *accounts = updated;

        info!("Removed account {local_id}");
        Ok(Some(removed))
    }

    /// Records a subject assignment in the account's personalization and
    /// bumps the assignment version. Returns the updated account.
    pub async fn set_subject(
        &self,
        local_id: &str,
        subject: &str,
        data: SubjectData,
    ) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        let mut updated = accounts.clone();
        let account = updated
            .iter_mut()
            .find(|a| a.local_id == local_id)
            .ok_or_else(|| PapillonError::AccountNotFound {
                local_id: local_id.to_string(),
            })?;

        let personalization = &mut account.personalization;
        personalization.subjects.insert(subject.to_string(), data);
        personalization.subjects_version += 1;
        let result = account.clone();

        self.persist(&updated).await?;
        *accounts = updated;

        debug!(
            "Subject '{subject}' assigned for account {local_id} (version {})",
            result.personalization.subjects_version
        );
        Ok(result)
    }

    async fn persist(&self, accounts: &[Account]) -> Result<()> {
        let state = AccountState {
            accounts: accounts.to_vec(),
        };
        save_json(self.storage.as_ref(), keys::ACCOUNTS, &state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::AccountService, storage::MemoryStorage};

    async fn create_test_store() -> (Arc<MemoryStorage>, AccountStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = AccountStore::load(storage.clone())
            .await
            .expect("Failed to load store");
        (storage, store)
    }

    #[tokio::test]
    async fn test_add_get_remove() {
        let (_storage, store) = create_test_store().await;

        let account = store
            .add(Account::new(AccountService::Pronote, "Camille"))
            .await
            .unwrap();
        assert_eq!(store.get(&account.local_id).await, Some(account.clone()));
        assert_eq!(store.list().await.len(), 1);

        let removed = store.remove(&account.local_id).await.unwrap();
        assert_eq!(removed, Some(account.clone()));
        assert!(store.get(&account.local_id).await.is_none());
        assert_eq!(store.remove(&account.local_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_subjects_version_follows_assignments() {
        let (_storage, store) = create_test_store().await;
        let account = store
            .add(Account::new(AccountService::Pronote, "Camille"))
            .await
            .unwrap();

        let before = store.subjects_version(&account.local_id).await.unwrap();
        store
            .set_subject(
                &account.local_id,
                "histoire",
                SubjectData::new("#1E88E5", "Histoire", "📜"),
            )
            .await
            .unwrap();
        assert!(store.subjects_version(&account.local_id).await.unwrap() > before);

        let err = store.subjects_version("ghost").await.unwrap_err();
        assert!(matches!(err, PapillonError::AccountNotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_replaces_same_local_id() {
        let (_storage, store) = create_test_store().await;

        let mut account = Account::new(AccountService::Pronote, "Camille");
        store.add(account.clone()).await.unwrap();
        account.name = "Camille D.".into();
        store.add(account.clone()).await.unwrap();

        let accounts = store.list().await;
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Camille D.");
    }

    #[tokio::test]
    async fn test_require_missing_account() {
        let (_storage, store) = create_test_store().await;

        let err = store.require("nope").await.unwrap_err();
        assert!(matches!(err, PapillonError::AccountNotFound { .. }));
    }

    #[tokio::test]
    async fn test_set_subject_bumps_version_and_persists() {
        let (storage, store) = create_test_store().await;
        let account = store
            .add(Account::new(AccountService::EcoleDirecte, "Camille"))
            .await
            .unwrap();

        let updated = store
            .set_subject(
                &account.local_id,
                "mathematiques",
                SubjectData::new("#D1005A", "Mathématiques", "📐"),
            )
            .await
            .unwrap();
        assert_eq!(updated.personalization.subjects_version, 1);

        let reloaded = AccountStore::load(storage).await.unwrap();
        let account = reloaded.require(&account.local_id).await.unwrap();
        assert_eq!(
            account.personalization.subjects["mathematiques"].emoji,
            "📐"
        );
    }
}

//! Subject classification: colour, display name and emoji per subject.
//!
//! A subject label coming from a provider (`"MATHEMATIQUES"`,
//! `"Éducation physique et sportive"`...) is normalized to a key, then
//! resolved against the account's personalization. Unknown subjects get a
//! palette colour not yet used by the account, a display name and an emoji
//! matched from a keyword table; the assignment is persisted in the account.
//!
//! Results are memoized in a bounded cache keyed by the account, a content
//! hash of the normalized name and the version of the account's assignment
//! table, so any change to the table invalidates older entries.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use papillon_core::{
//!     models::{Account, AccountService},
//!     storage::MemoryStorage,
//!     stores::AccountStore,
//!     subjects::SubjectClassifier,
//! };
//!
//! # async fn example() -> papillon_core::Result<()> {
//! let accounts = Arc::new(AccountStore::load(Arc::new(MemoryStorage::new())).await?);
//! let account = accounts.add(Account::new(AccountService::Pronote, "Camille")).await?;
//!
//! let classifier = SubjectClassifier::new(accounts);
//! let maths = classifier.subject_data(&account.local_id, "Mathématiques appliquées").await?;
//! assert_eq!(maths.emoji, "📐");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::debug;
use moka::future::Cache;
use tokio::sync::Mutex;

use crate::{error::Result, models::SubjectData, stores::AccountStore};

mod emoji;
mod names;
mod palette;

pub use emoji::{closest_emoji, matching_keyword};
pub use names::{normalize_subject, pretty_name};
pub use palette::{pick_color, PALETTE};

/// Maximum number of memoized classifications.
const CACHE_CAPACITY: u64 = 2_048;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    account: String,
    subject: blake3::Hash,
    version: u64,
}

impl CacheKey {
    fn new(account: &str, subject: &str, version: u64) -> Self {
        Self {
            account: account.to_string(),
            subject: blake3::hash(subject.as_bytes()),
            version,
        }
    }
}

/// Resolves subject labels to [`SubjectData`], assigning new ones on demand.
pub struct SubjectClassifier {
    accounts: Arc<AccountStore>,
    cache: Cache<CacheKey, SubjectData>,
    assign_lock: Mutex<()>,
}

impl SubjectClassifier {
    pub fn new(accounts: Arc<AccountStore>) -> Self {
        Self::with_capacity(accounts, CACHE_CAPACITY)
    }

    pub fn with_capacity(accounts: Arc<AccountStore>, capacity: u64) -> Self {
        Self {
            accounts,
            cache: Cache::new(capacity),
            assign_lock: Mutex::new(()),
        }
    }

    /// Returns the colour, display name and emoji of `entry` for the account.
    ///
    /// A blank label yields [`SubjectData::unknown`] without touching the
    /// account.
    ///
    /// # Errors
    ///
    /// Returns `PapillonError::AccountNotFound` for an unknown account, or a
    /// storage error if the new assignment cannot be persisted.
    pub async fn subject_data(&self, account_id: &str, entry: &str) -> Result<SubjectData> {
        let subject = normalize_subject(entry);
        if subject.is_empty() {
            return Ok(SubjectData::unknown());
        }

        // Serializes assignment so two new subjects never read the same
        // set of used colours
        let _guard = self.assign_lock.lock().await;

        let version = self.accounts.subjects_version(account_id).await?;
        let key = CacheKey::new(account_id, &subject, version);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let account = self.accounts.require(account_id).await?;
        let personalization = &account.personalization;

        if let Some(existing) = personalization.subjects.get(&subject) {
            self.cache.insert(key, existing.clone()).await;
            return Ok(existing.clone());
        }

        let pretty = pretty_name(&subject, entry);
        if let Some(existing) = personalization
            .subjects
            .values()
            .find(|data| data.pretty == pretty)
        {
            self.cache.insert(key, existing.clone()).await;
            return Ok(existing.clone());
        }

        let color = {
            let used = personalization.used_colors();
            pick_color(&used, &mut rand::rng())
        };
        let data = SubjectData::new(color, pretty, closest_emoji(&subject));

        let updated = self
            .accounts
            .set_subject(account_id, &subject, data.clone())
            .await?;
        debug!("Assigned {} {} to subject '{subject}'", data.color, data.emoji);

        let key = CacheKey::new(
            account_id,
            &subject,
            updated.personalization.subjects_version,
        );
        self.cache.insert(key, data.clone()).await;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::PapillonError,
        models::{Account, AccountService},
        storage::MemoryStorage,
    };

    async fn create_test_classifier() -> (Arc<AccountStore>, SubjectClassifier, Account) {
        let accounts = Arc::new(
            AccountStore::load(Arc::new(MemoryStorage::new()))
                .await
                .expect("Failed to load accounts"),
        );
        let account = accounts
            .add(Account::new(AccountService::Pronote, "Camille"))
            .await
            .expect("Failed to add account");
        let classifier = SubjectClassifier::new(accounts.clone());
        (accounts, classifier, account)
    }

    #[tokio::test]
    async fn test_blank_subject_is_unknown() {
        let (accounts, classifier, account) = create_test_classifier().await;

        let data = classifier.subject_data(&account.local_id, "   ").await.unwrap();
        assert_eq!(data, SubjectData::unknown());

        let account = accounts.require(&account.local_id).await.unwrap();
        assert!(account.personalization.subjects.is_empty());
    }

    #[tokio::test]
    async fn test_assignment_is_persisted_and_stable() {
        let (accounts, classifier, account) = create_test_classifier().await;

        let first = classifier
            .subject_data(&account.local_id, "Mathématiques appliquées")
            .await
            .unwrap();
        assert_eq!(first.emoji, "📐");
        assert_eq!(first.pretty, "Mathématiques appliquées");
        assert!(PALETTE.contains(&first.color.as_str()));

        let again = classifier
            .subject_data(&account.local_id, "MATHÉMATIQUES APPLIQUÉES")
            .await
            .unwrap();
        assert_eq!(again, first);

        let stored = accounts.require(&account.local_id).await.unwrap();
        assert_eq!(
            stored.personalization.subjects.get("mathematiques appliquees"),
            Some(&first)
        );
        assert_eq!(stored.personalization.subjects_version, 1);
    }

    #[tokio::test]
    async fn test_distinct_subjects_get_distinct_colors() {
        let (_accounts, classifier, account) = create_test_classifier().await;

        let subjects = [
            "Mathématiques appliquées",
            "Éducation physique et sportive",
            "Philosophie",
            "Sciences de l'ingénieur",
            "Musique",
            "Latin",
            "Arts",
            "Allemand",
            "Espagnol",
            "Italien",
            "Anglais",
            "Technologie industrielle",
            "Gestion",
            "Culture générale",
            "Traitement du signal",
            "Expression",
            "Stage",
            "Économie",
            "Histoire",
            "Physique",
            "Numérique",
            "Travaux dirigés",
        ];
        assert_eq!(subjects.len(), PALETTE.len());

        let mut colors = Vec::new();
        for subject in subjects {
            let data = classifier
                .subject_data(&account.local_id, subject)
                .await
                .unwrap();
            assert!(
                !colors.contains(&data.color),
                "{subject} reused colour {}",
                data.color
            );
            colors.push(data.color);
        }

        // Palette exhausted: a 23rd subject still gets a palette colour
        let extra = classifier
            .subject_data(&account.local_id, "Vie de classe")
            .await
            .unwrap();
        assert!(PALETTE.contains(&extra.color.as_str()));
    }

    #[tokio::test]
    async fn test_same_pretty_name_reuses_existing_assignment() {
        let (accounts, classifier, account) = create_test_classifier().await;

        let svt = classifier
            .subject_data(&account.local_id, "SVT")
            .await
            .unwrap();
        let long = classifier
            .subject_data(&account.local_id, "Sciences de la vie et de la terre")
            .await
            .unwrap();
        assert_eq!(svt, long);

        let stored = accounts.require(&account.local_id).await.unwrap();
        assert_eq!(stored.personalization.subjects.len(), 1);
    }

    #[tokio::test]
    async fn test_cached_entry_is_served_for_current_version() {
        let (accounts, classifier, account) = create_test_classifier().await;

        let version = accounts.subjects_version(&account.local_id).await.unwrap();
        let memo = SubjectData::new("#000000", "Memo", "🧠");
        classifier
            .cache
            .insert(
                CacheKey::new(&account.local_id, "physique", version),
                memo.clone(),
            )
            .await;

        let data = classifier
            .subject_data(&account.local_id, "Physique")
            .await
            .unwrap();
        assert_eq!(data, memo);

        // Nothing was assigned, so the version did not move
        let stored = accounts.require(&account.local_id).await.unwrap();
        assert!(stored.personalization.subjects.is_empty());
        assert_eq!(stored.personalization.subjects_version, version);
    }

    #[tokio::test]
    async fn test_unknown_account() {
        let (_accounts, classifier, _account) = create_test_classifier().await;

        let err = classifier.subject_data("missing", "Maths").await.unwrap_err();
        assert!(matches!(err, PapillonError::AccountNotFound { .. }));
    }
}

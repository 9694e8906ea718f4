//! Store for periods, grades and averages.

use std::sync::Arc;

use jiff::Timestamp;
use log::info;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::{AverageOverview, Grade, GradesState, Period},
    storage::{keys, load_json, save_json, Storage},
};

/// Shared grades cache written by the dispatcher.
pub struct GradesStore {
    storage: Arc<dyn Storage>,
    state: RwLock<GradesState>,
}

impl GradesStore {
    /// Hydrates the store from `storage`.
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let state: GradesState = load_json(storage.as_ref(), keys::GRADES).await?;
        Ok(Self {
            storage,
            state: RwLock::new(state),
        })
    }

    /// Replaces the known periods and the selected default period.
    pub async fn update_periods(&self, periods: Vec<Period>, default_period: String) -> Result<()> {
        let mut state = self.state.write().await;

        let mut updated = state.clone();
        info!(
            "Storing {} period(s), default '{default_period}'",
            periods.len()
        );
        updated.periods = periods;
        updated.default_period = Some(default_period);
        updated.updated_at = Some(Timestamp::now());
        save_json(self.storage.as_ref(), keys::GRADES, &updated).await?;
        *state = updated;
        Ok(())
    }

    /// Replaces the grades and averages of one period.
    pub async fn update_grades_and_averages(
        &self,
        period: &str,
        grades: Vec<Grade>,
        averages: AverageOverview,
    ) -> Result<()> {
        let mut state = self.state.write().await;

        let mut updated = state.clone();
        info!("Storing {} grade(s) for period '{period}'", grades.len());
        updated.grades.insert(period.to_string(), grades);
        updated.averages.insert(period.to_string(), averages);
        updated.updated_at = Some(Timestamp::now());
        save_json(self.storage.as_ref(), keys::GRADES, &updated).await?;
        *state = updated;
        Ok(())
    }

    /// Snapshot of the whole store.
    pub async fn state(&self) -> GradesState {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::GradeValue, storage::MemoryStorage};

    fn sample_grade() -> Grade {
        Grade {
            id: "g1".into(),
            subject_name: "Mathématiques".into(),
            description: "Contrôle".into(),
            timestamp: 0,
            coefficient: 2.0,
            out_of: GradeValue::new(20.0),
            student: GradeValue::new(14.0),
            average: None,
            max: None,
            min: None,
            is_bonus: false,
            is_optional: false,
        }
    }

    #[tokio::test]
    async fn test_updates_are_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let store = GradesStore::load(storage.clone()).await.unwrap();
        assert_eq!(store.state().await, GradesState::default());

        store
            .update_periods(vec![Period::new("T1", Some(0), Some(10))], "T1".into())
            .await
            .unwrap();
        store
            .update_grades_and_averages("T1", vec![sample_grade()], AverageOverview::empty())
            .await
            .unwrap();

        let reloaded = GradesStore::load(storage).await.unwrap();
        let state = reloaded.state().await;
        assert_eq!(state.default_period.as_deref(), Some("T1"));
        assert_eq!(state.periods.len(), 1);
        assert_eq!(state.grades["T1"], vec![sample_grade()]);
        assert!(state.updated_at.is_some());
    }
}

mod common;

use std::{io::Write, sync::Arc};

use common::{create_test_app, SNAPSHOT_JSON};
use papillon_core::{
    models::AccountService,
    params::{AddAccount, LinkFeature, UpdateGrades, UpdatePeriods},
    GradesReport, MultiServiceFeature, Providers, RefreshOutcome, SnapshotProvider,
};
use tempfile::NamedTempFile;

fn snapshot_providers() -> Providers {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT_JSON.as_bytes()).unwrap();
    let provider = SnapshotProvider::from_file(file.path()).unwrap();
    Providers::new().with_all(Arc::new(provider))
}

fn account(service: AccountService, name: &str) -> AddAccount {
    AddAccount {
        service,
        name: name.to_string(),
        identity_provider: None,
        disabled_features: vec![],
    }
}

#[tokio::test]
async fn test_periods_then_grades_from_snapshot() {
    let (_temp_dir, app) = create_test_app(snapshot_providers()).await;
    let camille = app
        .add_account(&account(AccountService::Pronote, "Camille"))
        .await
        .unwrap()
        .resource;

    let outcome = app
        .update_periods(&UpdatePeriods {
            account_id: camille.local_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::PeriodsUpdated {
            account: camille.local_id.clone(),
            count: 2,
            default_period: "Trimestre 2".to_string(),
        }
    );

    let outcome = app
        .update_grades(&UpdateGrades {
            account_id: camille.local_id.clone(),
            period: None,
        })
        .await
        .unwrap();
    assert!(matches!(outcome, RefreshOutcome::GradesUpdated { count: 2, .. }));

    let state = app.grades_state().await;
    let grades = &state.grades["Trimestre 2"];
    assert_eq!(grades[1].coefficient, 2.0);
    assert_eq!(grades[1].student.status.as_deref(), Some("Abs"));

    let report = GradesReport {
        state: &state,
        period: Some("Trimestre 2"),
    }
    .to_string();
    assert!(report.contains("**MATHEMATIQUES** 14.50/20.00"));
    assert!(report.contains("Abs/20.00"));
    assert!(report.contains("Overall: 14.50 (class: 12.10)"));
}

#[tokio::test]
async fn test_unknown_period_is_caught() {
    let (_temp_dir, app) = create_test_app(snapshot_providers()).await;
    let camille = app
        .add_account(&account(AccountService::EcoleDirecte, "Camille"))
        .await
        .unwrap()
        .resource;

    let outcome = app
        .update_grades(&UpdateGrades {
            account_id: camille.local_id,
            period: Some("Trimestre 9".to_string()),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, RefreshOutcome::Failed { .. }));
    assert!(app.grades_state().await.grades.is_empty());
}

#[tokio::test]
async fn test_multi_service_space_routes_through_link() {
    let (_temp_dir, app) = create_test_app(snapshot_providers()).await;
    let space = app
        .add_account(&account(AccountService::PapillonMultiService, "Espace"))
        .await
        .unwrap()
        .resource;
    let skolengo = app
        .add_account(&account(AccountService::Skolengo, "Camille"))
        .await
        .unwrap()
        .resource;

    let outcome = app
        .update_periods(&UpdatePeriods {
            account_id: space.local_id.clone(),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, RefreshOutcome::NoGradesAccount { .. }));

    app.link_feature(&LinkFeature {
        space_id: space.local_id.clone(),
        feature: MultiServiceFeature::Grades,
        account_id: skolengo.local_id.clone(),
    })
    .await
    .unwrap();

    let outcome = app
        .update_periods(&UpdatePeriods {
            account_id: space.local_id,
        })
        .await
        .unwrap();
    match outcome {
        RefreshOutcome::PeriodsUpdated { account, .. } => assert_eq!(account, skolengo.local_id),
        other => panic!("unexpected outcome {other:?}"),
    }
}

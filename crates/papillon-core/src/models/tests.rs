//! Tests for the models module.

use super::*;
use crate::error::PapillonError;

#[test]
fn test_account_service_from_str() {
    assert_eq!("pronote".parse::<AccountService>().unwrap(), AccountService::Pronote);
    assert_eq!("EcoleDirecte".parse::<AccountService>().unwrap(), AccountService::EcoleDirecte);
    assert_eq!("ecole_directe".parse::<AccountService>().unwrap(), AccountService::EcoleDirecte);
    assert_eq!(
        "multi-service".parse::<AccountService>().unwrap(),
        AccountService::PapillonMultiService
    );
    assert_eq!("ARD".parse::<AccountService>().unwrap(), AccountService::Ard);
}

#[test]
fn test_unknown_service_names_the_value() {
    let err = "moodle".parse::<AccountService>().unwrap_err();
    match &err {
        PapillonError::UnknownService { name } => assert_eq!(name, "moodle"),
        other => panic!("Expected UnknownService, got {other:?}"),
    }
    assert!(err.to_string().contains("moodle"));
}

#[test]
fn test_service_as_str_roundtrips_through_serde() {
    for service in AccountService::ALL {
        let json = serde_json::to_string(&service).unwrap();
        assert_eq!(json, format!("\"{}\"", service.as_str()));
        assert_eq!(service.as_str().parse::<AccountService>().unwrap(), service);
    }
}

#[test]
fn test_feature_from_str() {
    assert_eq!(
        "Grades".parse::<MultiServiceFeature>().unwrap(),
        MultiServiceFeature::Grades
    );
    assert!("cooking".parse::<MultiServiceFeature>().is_err());
}

#[test]
fn test_period_contains() {
    let period = Period::new("Trimestre 1", Some(1_000), Some(2_000));
    assert!(period.contains(1_000));
    assert!(period.contains(1_500));
    assert!(period.contains(2_000));
    assert!(!period.contains(2_001));

    let open = Period::new("Open", Some(1_000), None);
    assert!(!open.contains(1_500));
}

#[test]
fn test_account_feature_support() {
    let account = Account::new(AccountService::Skolengo, "Camille")
        .with_disabled_feature(MultiServiceFeature::Grades)
        .with_disabled_feature(MultiServiceFeature::Grades);

    assert_eq!(account.disabled_features.len(), 1);
    assert!(!account.supports(MultiServiceFeature::Grades));
    assert!(account.supports(MultiServiceFeature::Timetable));
}

#[test]
fn test_account_iut_lannion() {
    let plain = Account::new(AccountService::Local, "Local");
    assert!(!plain.is_iut_lannion());

    let iut = Account::new(AccountService::Local, "IUT").with_identity_provider(IUT_LANNION_PROVIDER);
    assert!(iut.is_iut_lannion());
}

#[test]
fn test_accounts_get_distinct_local_ids() {
    let a = Account::new(AccountService::Pronote, "A");
    let b = Account::new(AccountService::Pronote, "B");
    assert_ne!(a.local_id, b.local_id);
}

#[test]
fn test_used_colors_are_deduplicated() {
    let mut personalization = Personalization::default();
    personalization
        .subjects
        .insert("maths".into(), SubjectData::new("#D1005A", "Maths", "📐"));
    personalization
        .subjects
        .insert("physique".into(), SubjectData::new("#D1005A", "Physique", "🧪"));

    assert_eq!(personalization.used_colors(), vec!["#D1005A"]);
}

#[test]
fn test_grade_deserializes_with_defaults() {
    let json = r#"{
        "id": "g1",
        "subjectName": "Mathématiques",
        "outOf": { "value": 20 },
        "student": { "value": 15.5 }
    }"#;
    let grade: Grade = serde_json::from_str(json).unwrap();

    assert_eq!(grade.coefficient, 1.0);
    assert_eq!(grade.student.value, Some(15.5));
    assert!(!grade.student.disabled);
    assert!(grade.average.is_none());
}

#[test]
fn test_average_overview_variants() {
    let empty = AverageOverview::empty();
    assert_eq!(empty.overall.value, None);
    assert!(empty.overall.disabled);

    let zeroed = AverageOverview::zeroed();
    assert_eq!(zeroed.class_overall.value, Some(0.0));
    assert!(zeroed.class_overall.disabled);
}

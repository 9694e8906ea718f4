use papillon_core::{
    storage::{SqliteStorage, Storage},
    Database,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_set_get_remove_value() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.get_value("qrcode-storage").unwrap(), None);

    db.set_value("qrcode-storage", r#"{"codes":[]}"#).unwrap();
    db.set_value("qrcode-storage", r#"{"codes":[1]}"#).unwrap();
    assert_eq!(
        db.get_value("qrcode-storage").unwrap().as_deref(),
        Some(r#"{"codes":[1]}"#)
    );

    assert!(db.remove_value("qrcode-storage").unwrap());
    assert!(!db.remove_value("qrcode-storage").unwrap());
    assert_eq!(db.get_value("qrcode-storage").unwrap(), None);
}

#[test]
fn test_keys_are_sorted() {
    let (_temp_file, mut db) = create_test_db();

    db.set_value("grades-storage", "{}").unwrap();
    db.set_value("account-storage", "{}").unwrap();

    assert_eq!(
        db.keys().unwrap(),
        vec!["account-storage".to_string(), "grades-storage".to_string()]
    );
}

#[tokio::test]
async fn test_sqlite_storage_shares_database() {
    let temp_file = NamedTempFile::new().unwrap();
    let first = SqliteStorage::open(temp_file.path()).await.unwrap();
    let second = SqliteStorage::open(temp_file.path()).await.unwrap();

    first.set("account-storage", "{}").await.unwrap();
    assert_eq!(
        second.get("account-storage").await.unwrap().as_deref(),
        Some("{}")
    );
    assert_eq!(second.keys().await.unwrap(), vec!["account-storage"]);

    second.remove("account-storage").await.unwrap();
    assert_eq!(first.get("account-storage").await.unwrap(), None);
}

use papillon_core::{Papillon, PapillonBuilder, Providers};
use tempfile::TempDir;

/// Helper function to create an app over a temporary database
pub async fn create_test_app(providers: Providers) -> (TempDir, Papillon) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let app = PapillonBuilder::new()
        .with_database_path(Some(&db_path))
        .with_providers(providers)
        .build()
        .await
        .expect("Failed to create app");
    (temp_dir, app)
}

/// Snapshot with two trimesters, the second holding two grades
#[allow(dead_code)]
pub const SNAPSHOT_JSON: &str = r#"{
  "periods": [
    { "name": "Trimestre 1", "startTimestamp": 1693526400000, "endTimestamp": 1701302400000 },
    { "name": "Trimestre 2", "startTimestamp": 1701388800000, "endTimestamp": 1709164800000 }
  ],
  "default": "Trimestre 2",
  "grades": {
    "Trimestre 1": [],
    "Trimestre 2": [
      {
        "id": "n1",
        "subjectName": "MATHEMATIQUES",
        "description": "Interrogation",
        "timestamp": 1702000000000,
        "outOf": { "value": 20 },
        "student": { "value": 14.5 }
      },
      {
        "id": "n2",
        "subjectName": "HISTOIRE-GEOGRAPHIE",
        "coefficient": 2,
        "outOf": { "value": 20 },
        "student": { "status": "Abs" }
      }
    ]
  },
  "averages": {
    "Trimestre 2": {
      "subjects": [],
      "overall": { "value": 14.5 },
      "classOverall": { "value": 12.1 }
    }
  }
}"#;

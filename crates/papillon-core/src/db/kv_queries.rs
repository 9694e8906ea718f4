//! Key-value blob queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";
const SELECT_KEYS_SQL: &str = "SELECT key FROM kv_store ORDER BY key";

impl super::Database {
    /// Returns the blob stored under `key`, if any.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Stores `value` under `key`, replacing any previous blob.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_VALUE_SQL, params![key, value, &now])
            .db_context("Failed to write value")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Deletes the blob stored under `key`. Returns whether a row existed.
    pub fn remove_value(&mut self, key: &str) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete value")?;
        Ok(affected > 0)
    }

    /// Lists every stored key in lexical order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_KEYS_SQL)
            .db_context("Failed to prepare query")?;

        let keys = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to list keys")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to read key")?;
        Ok(keys)
    }
}

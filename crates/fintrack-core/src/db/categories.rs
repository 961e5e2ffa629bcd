//! Category operations

use rusqlite::{params, ErrorCode};
use tracing::info;

use super::Database;
use crate::error::{Error, Result};

impl Database {
    /// List all category names, oldest first
    pub fn list_categories(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT name FROM categories ORDER BY id")?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(names)
    }

    /// Check whether a category with exactly this name exists
    pub fn category_exists(&self, name: &str) -> Result<bool> {
        let conn = self.conn()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?)",
            params![name],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    pub fn count_categories(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert a new category
    ///
    /// Returns `Error::DuplicateCategory` if the name is already taken
    /// (case-sensitive).
    pub fn insert_category(&self, name: &str) -> Result<i64> {
        let conn = self.conn()?;

        match conn.execute("INSERT INTO categories (name) VALUES (?)", params![name]) {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                info!("Created category '{}' (id {})", name, id);
                Ok(id)
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateCategory(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

//! JSON export of the full transaction history

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::{Database, NEWEST_FIRST};
use crate::error::Result;

/// File written by every export, relative to the export directory
pub const EXPORT_FILE_NAME: &str = "transactions_export.json";

/// A transaction row as written to the export file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionExport {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Creation time exactly as stored (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub timestamp: String,
}

impl Database {
    /// Snapshot of every transaction, newest first
    pub fn export_all(&self) -> Result<Vec<TransactionExport>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT id, amount, category, description, timestamp FROM transactions {}",
            NEWEST_FIRST
        );
        let mut stmt = conn.prepare(&sql)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(TransactionExport {
                    id: row.get(0)?,
                    amount: row.get(1)?,
                    category: row.get(2)?,
                    description: row.get(3)?,
                    timestamp: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Write the snapshot as a pretty JSON array into `dir`, replacing any
    /// previous export
    ///
    /// Returns the written path and the number of exported transactions.
    pub fn write_json_export(&self, dir: &Path) -> Result<(PathBuf, usize)> {
        let transactions = self.export_all()?;
        let json = serde_json::to_string_pretty(&transactions)?;

        let path = dir.join(EXPORT_FILE_NAME);
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&path).map_err(|e| e.error)?;

        info!(
            "Exported {} transactions to {}",
            transactions.len(),
            path.display()
        );
        Ok((path, transactions.len()))
    }
}

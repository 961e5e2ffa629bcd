//! Transaction operations

use std::collections::BTreeMap;

use rusqlite::{params, Row};
use tracing::{debug, info};

use super::{parse_datetime, Database, NEWEST_FIRST};
use crate::error::Result;
use crate::models::Transaction;

fn row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    let timestamp: String = row.get(4)?;
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        timestamp: parse_datetime(&timestamp),
    })
}

impl Database {
    /// Append a transaction and return its ID
    ///
    /// The category is not checked here; callers validate it first.
    pub fn insert_transaction(
        &self,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO transactions (amount, category, description) VALUES (?, ?, ?)",
            params![amount, category, description],
        )?;

        let id = conn.last_insert_rowid();
        info!("Recorded transaction {} ({:.2} in {})", id, amount, category);
        Ok(id)
    }

    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Sum of all transaction amounts (0.0 when there are none)
    pub fn sum_total(&self) -> Result<f64> {
        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM transactions",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Per-category sums, keyed by category name
    ///
    /// Categories without transactions are absent rather than zero.
    pub fn sum_by_category(&self) -> Result<BTreeMap<String, f64>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT category, SUM(amount) FROM transactions GROUP BY category")?;

        let sums = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()?;

        Ok(sums)
    }

    /// List transactions newest first, optionally limited to one category
    pub fn list_transactions(&self, category: Option<&str>) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let transactions = match category {
            Some(cat) => {
                let sql = format!(
                    "SELECT id, amount, category, description, timestamp FROM transactions WHERE category = ? {}",
                    NEWEST_FIRST
                );
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(params![cat], row_to_transaction)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let sql = format!(
                    "SELECT id, amount, category, description, timestamp FROM transactions {}",
                    NEWEST_FIRST
                );
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], row_to_transaction)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
        };

        debug!(
            "Listed {} transactions (category filter: {:?})",
            transactions.len(),
            category
        );
        Ok(transactions)
    }
}

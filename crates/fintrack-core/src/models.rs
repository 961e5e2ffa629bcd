//! Domain models for Fintrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories seeded on first run, in display order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Income",
    "Food",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Other",
];

/// A recorded ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Negative = expense, positive = income
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// One-line rendering used by transaction listings
    pub fn summary_line(&self) -> String {
        format!(
            "${:.2} ({}) - {}",
            self.amount, self.category, self.description
        )
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an animal. Deletion is a one-way status transition,
/// never a physical removal of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum AnimalStatus {
    Active,
    Deleted,
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimalStatus::Active => write!(f, "Active"),
            AnimalStatus::Deleted => write!(f, "Deleted"),
        }
    }
}

/// Direction of money movement in a financial record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

use core_types::{Animal, BreedingRecord, FinancialRecord, HealthRecord, TransactionType, WeightRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many health records an animal profile shows (callers supply them
/// newest-first, so these are the most recent ones).
pub const PROFILE_HEALTH_LIMIT: usize = 10;

/// How many weight rows an animal profile shows (callers supply them
/// oldest-first, so these are the trailing, most recent entries).
pub const PROFILE_WEIGHT_LIMIT: usize = 20;

/// Herd-level tallies: one pass each over species, gender and status.
/// Missing genders are bucketed under "Unknown".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HerdSummary {
    pub total: usize,
    pub by_species: BTreeMap<String, usize>,
    pub by_gender: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

impl HerdSummary {
    pub fn from_animals(animals: &[Animal]) -> Self {
        let mut summary = Self {
            total: animals.len(),
            ..Self::default()
        };
        for animal in animals {
            *summary.by_species.entry(animal.species.clone()).or_insert(0) += 1;
            let gender = animal
                .gender
                .clone()
                .unwrap_or_else(|| "Unknown".to_string());
            *summary.by_gender.entry(gender).or_insert(0) += 1;
            *summary.by_status.entry(animal.status.to_string()).or_insert(0) += 1;
        }
        summary
    }
}

/// Income/expense totals plus an expense breakdown by category. Records
/// without a category land in the "Uncategorized" bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net: f64,
    pub expenses_by_category: BTreeMap<String, f64>,
}

impl FinancialSummary {
    pub fn from_records(records: &[FinancialRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.transaction_type {
                TransactionType::Income => summary.total_income += record.amount,
                TransactionType::Expense => {
                    summary.total_expenses += record.amount;
                    let category = record
                        .category
                        .clone()
                        .unwrap_or_else(|| "Uncategorized".to_string());
                    *summary.expenses_by_category.entry(category).or_insert(0.0) +=
                        record.amount;
                }
            }
        }
        summary.net = summary.total_income - summary.total_expenses;
        summary
    }
}

/// Record counts grouped by record type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
}

impl HealthSummary {
    pub fn from_records(records: &[HealthRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            *summary.by_type.entry(record.record_type.clone()).or_insert(0) += 1;
        }
        summary
    }
}

/// Breeding outcome tallies. A record counts as successful only when its
/// nullable `success` flag is explicitly true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreedingSummary {
    pub total: usize,
    pub successful: usize,
}

impl BreedingSummary {
    pub fn from_records(records: &[BreedingRecord]) -> Self {
        Self {
            total: records.len(),
            successful: records
                .iter()
                .filter(|r| r.success == Some(true))
                .count(),
        }
    }

    /// Success rate formatted to one decimal, or "N/A" for an empty input so
    /// an empty herd never divides by zero.
    pub fn success_rate_label(&self) -> String {
        if self.total == 0 {
            "N/A".to_string()
        } else {
            format!("{:.1}%", self.successful as f64 / self.total as f64 * 100.0)
        }
    }
}

/// The slice of health records an animal profile renders: the first
/// `PROFILE_HEALTH_LIMIT` entries of the caller-sorted (newest-first) input.
pub fn profile_health_slice(records: &[HealthRecord]) -> &[HealthRecord] {
    &records[..records.len().min(PROFILE_HEALTH_LIMIT)]
}

/// The slice of weight records an animal profile renders: the trailing
/// `PROFILE_WEIGHT_LIMIT` entries of the caller-sorted (oldest-first) input.
pub fn profile_weight_slice(records: &[WeightRecord]) -> &[WeightRecord] {
    &records[records.len().saturating_sub(PROFILE_WEIGHT_LIMIT)..]
}

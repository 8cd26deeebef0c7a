use crate::enums::{AnimalStatus, TransactionType};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single animal on the farm, identified by the store-assigned `id` and the
/// farm's human-assigned `tag_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Animal {
    pub id: i64,
    pub tag_number: String,
    pub name: Option<String>,
    pub species: String,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub color: Option<String>,
    pub status: AnimalStatus,
    pub acquisition_date: Option<NaiveDate>,
    pub acquisition_type: Option<String>,
    pub source: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// The caller-supplied field set for inserting an animal. The store assigns
/// `id`, `status` and the creation timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub tag_number: String,
    pub name: Option<String>,
    pub species: String,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub color: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub acquisition_type: Option<String>,
    pub source: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// A partial update for an animal. `None` fields are left untouched; a field
/// cannot be cleared back to NULL through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalPatch {
    pub tag_number: Option<String>,
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub color: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub acquisition_type: Option<String>,
    pub source: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// A veterinary event for one animal: checkup, treatment, vaccination,
/// surgery, emergency or other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HealthRecord {
    pub id: i64,
    pub animal_id: i64,
    pub record_date: NaiveDate,
    pub record_type: String,
    pub diagnosis: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub medications: Option<String>,
    pub dosage: Option<String>,
    pub veterinarian: Option<String>,
    pub next_checkup: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewHealthRecord {
    pub animal_id: i64,
    pub record_date: NaiveDate,
    pub record_type: String,
    pub diagnosis: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub medications: Option<String>,
    pub dosage: Option<String>,
    pub veterinarian: Option<String>,
    pub next_checkup: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// A partial update for a health record, the only history kind that supports
/// full-field update after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordPatch {
    pub record_date: Option<NaiveDate>,
    pub record_type: Option<String>,
    pub diagnosis: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub medications: Option<String>,
    pub dosage: Option<String>,
    pub veterinarian: Option<String>,
    pub next_checkup: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vaccination {
    pub id: i64,
    pub animal_id: i64,
    pub vaccine_name: String,
    pub vaccination_date: NaiveDate,
    pub batch_number: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVaccination {
    pub animal_id: i64,
    pub vaccine_name: String,
    pub vaccination_date: NaiveDate,
    pub batch_number: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub veterinarian: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// A breeding event referencing a dam and optionally a sire. `success` is
/// nullable: `None` means the outcome is not yet known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BreedingRecord {
    pub id: i64,
    pub dam_id: i64,
    pub sire_id: Option<i64>,
    pub breeding_date: NaiveDate,
    pub breeding_method: Option<String>,
    pub expected_delivery: Option<NaiveDate>,
    pub actual_delivery: Option<NaiveDate>,
    pub number_of_offspring: Option<i64>,
    pub complications: Option<String>,
    pub success: Option<bool>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBreedingRecord {
    pub dam_id: i64,
    pub sire_id: Option<i64>,
    pub breeding_date: NaiveDate,
    pub breeding_method: Option<String>,
    pub expected_delivery: Option<NaiveDate>,
    pub actual_delivery: Option<NaiveDate>,
    pub number_of_offspring: Option<i64>,
    pub complications: Option<String>,
    pub success: Option<bool>,
    pub notes: Option<String>,
}

/// The result of a breeding record, optionally linked to the animal row the
/// offspring became.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Offspring {
    pub id: i64,
    pub breeding_record_id: i64,
    pub animal_id: Option<i64>,
    pub birth_weight: Option<f64>,
    pub birth_status: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOffspring {
    pub breeding_record_id: i64,
    pub animal_id: Option<i64>,
    pub birth_weight: Option<f64>,
    pub birth_status: Option<String>,
}

/// A feeding event. `animal_id` of `None` means a herd-wide feeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FeedRecord {
    pub id: i64,
    pub record_date: NaiveDate,
    pub animal_id: Option<i64>,
    pub feed_type: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub cost: Option<f64>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFeedRecord {
    pub record_date: NaiveDate,
    pub animal_id: Option<i64>,
    pub feed_type: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub cost: Option<f64>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WeightRecord {
    pub id: i64,
    pub animal_id: i64,
    pub weight_date: NaiveDate,
    pub weight: f64,
    pub body_condition_score: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWeightRecord {
    pub animal_id: i64,
    pub weight_date: NaiveDate,
    pub weight: f64,
    pub body_condition_score: Option<f64>,
    pub notes: Option<String>,
}

/// An income or expense transaction, optionally tied to one animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FinancialRecord {
    pub id: i64,
    pub transaction_date: NaiveDate,
    pub transaction_type: TransactionType,
    pub category: Option<String>,
    pub amount: f64,
    pub description: Option<String>,
    pub animal_id: Option<i64>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFinancialRecord {
    pub transaction_date: NaiveDate,
    pub transaction_type: TransactionType,
    pub category: Option<String>,
    pub amount: f64,
    pub description: Option<String>,
    pub animal_id: Option<i64>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// Daily milk yields for a dairy animal. `total_yield` is caller-computed as
/// morning plus evening, never derived by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MilkProduction {
    pub id: i64,
    pub animal_id: i64,
    pub production_date: NaiveDate,
    pub morning_yield: Option<f64>,
    pub evening_yield: Option<f64>,
    pub total_yield: Option<f64>,
    pub fat_content: Option<f64>,
    pub quality_grade: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMilkProduction {
    pub animal_id: i64,
    pub production_date: NaiveDate,
    pub morning_yield: Option<f64>,
    pub evening_yield: Option<f64>,
    pub total_yield: Option<f64>,
    pub fat_content: Option<f64>,
    pub quality_grade: Option<String>,
    pub notes: Option<String>,
}

/// Daily egg collection for poultry. `flock_id` loosely reuses an animal id
/// as a flock identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EggProduction {
    pub id: i64,
    pub production_date: NaiveDate,
    pub flock_id: Option<i64>,
    pub eggs_collected: Option<i64>,
    pub eggs_broken: Option<i64>,
    pub eggs_sold: Option<i64>,
    pub price_per_egg: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEggProduction {
    pub production_date: NaiveDate,
    pub flock_id: Option<i64>,
    pub eggs_collected: Option<i64>,
    pub eggs_broken: Option<i64>,
    pub eggs_sold: Option<i64>,
    pub price_per_egg: Option<f64>,
    pub notes: Option<String>,
}

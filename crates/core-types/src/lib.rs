//! # Farmstead Core Types
//!
//! This crate defines the shared vocabulary of the whole system: one struct per
//! record kind stored by the `database` crate and consumed by the `reports`
//! crate, plus the closed enums used for status and transaction columns.
//!
//! ## Architectural Principles
//!
//! - **Layer 0 Data:** This is a pure data crate. It contains no behavior beyond
//!   construction helpers and formatting impls, and depends on nothing else in
//!   the workspace. Every other crate depends on it.
//! - **Typed Records:** Records are fixed, explicitly-typed structs with named
//!   optional fields, not untyped maps. Nullable columns are `Option`s, so a
//!   "partial record" is expressed in the type system rather than by omitting
//!   keys.

pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{AnimalStatus, TransactionType};
pub use structs::{
    Animal, AnimalPatch, BreedingRecord, EggProduction, FeedRecord, FinancialRecord, HealthRecord,
    HealthRecordPatch, MilkProduction, NewAnimal, NewBreedingRecord, NewEggProduction,
    NewFeedRecord, NewFinancialRecord, NewHealthRecord, NewMilkProduction, NewOffspring,
    NewVaccination, NewWeightRecord, Offspring, Vaccination, WeightRecord,
};

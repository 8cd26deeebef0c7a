//! # Farmstead Reports Crate
//!
//! This crate is the Report Compiler: it turns in-memory record collections
//! into paginated, Word-compatible documents with summary statistics, tables
//! and narrative sections.
//!
//! ## Architectural Principles
//!
//! - **Pure Consumer:** This crate never touches the database. Callers fetch
//!   records (pre-sorted per report kind) and pass plain slices in; the
//!   compiler returns the path of the generated document.
//! - **Stateless Summaries:** The aggregation logic lives in standalone
//!   summary structs (`HerdSummary`, `FinancialSummary`, ...) that take raw
//!   records as input. This keeps the arithmetic trivially testable without
//!   rendering a single page.
//! - **All-or-Nothing Output:** Documents are assembled in memory and written
//!   in one shot; a failure never leaves a partial file on disk.
//!
//! ## Public API
//!
//! - `ReportGenerator`: The main struct with one `generate_*` method per
//!   report kind (Animal Profile, Herd, Financial, Health, Breeding).
//! - The summary structs, for callers that want the numbers without the
//!   document.
//! - `ReportError`: The specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod generator;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use error::ReportError;
pub use generator::ReportGenerator;
pub use summary::{
    BreedingSummary, FinancialSummary, HealthSummary, HerdSummary, PROFILE_HEALTH_LIMIT,
    PROFILE_WEIGHT_LIMIT,
};

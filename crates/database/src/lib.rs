//! # Farmstead Database Crate
//!
//! This crate is the Record Store: a high-level, application-specific
//! interface to the SQLite file that holds every farm record. It is the
//! system's "permanent archive."
//!
//! ## Architectural Principles
//!
//! - **Adapter Layer:** This crate encapsulates all database-specific logic.
//!   It provides a clean, typed API to the rest of the application, hiding the
//!   underlying SQL and storage details.
//! - **No Business Rules:** Beyond tag-number uniqueness and foreign-key
//!   references, the store enforces nothing. Validation of user input belongs
//!   to the presentation layer, before data ever reaches this crate.
//! - **Durable Writes:** Every mutating call is its own atomic commit; there
//!   are no buffered or batched writes. Record volumes are small (one farm,
//!   human data-entry pace), so simplicity wins over throughput.
//!
//! ## Public API
//!
//! - `connect`: Opens the SQLite file and returns the process-lifetime pool.
//! - `run_migrations`: A utility to apply schema migrations at startup.
//! - `DbRepository`: The main struct that holds the connection pool and
//!   provides all the high-level data access methods (e.g., `add_animal`).
//! - `RecordFilter`: Optional animal/date-range constraints for list calls.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::{DbRepository, RecordFilter};

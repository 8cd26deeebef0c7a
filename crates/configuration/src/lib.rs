use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, ReportSettings, Settings};

/// Loads the application configuration from an optional `farmstead.toml` file.
///
/// Every setting carries a sensible default, so a missing file yields a fully
/// working configuration: the database lands in `farm_records.db` and reports
/// in the `reports/` directory next to the binary.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("database.path", "farm_records.db")?
        .set_default("reports.output_dir", "reports")?
        // Tells the builder to look for a file named `farmstead.toml`
        .add_source(config::File::with_name("farmstead").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}

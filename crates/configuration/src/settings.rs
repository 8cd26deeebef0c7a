use serde::Deserialize;

/// The top-level, strongly-typed view of `farmstead.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub reports: ReportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Path of the SQLite database file. Created on first use if missing.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// Directory where generated report documents are written.
    pub output_dir: String,
}

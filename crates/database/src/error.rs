use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("A storage constraint was violated: {0}")]
    ConstraintViolation(String),

    #[error("The requested record was not found in the database.")]
    NotFound,
}

impl DbError {
    /// Classifies an `sqlx` error, surfacing uniqueness and foreign-key
    /// failures as `ConstraintViolation` so callers can react to bad input
    /// distinctly from infrastructure faults.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return DbError::NotFound;
        }
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return DbError::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        DbError::ConnectionError(err)
    }
}

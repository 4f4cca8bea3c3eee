use tokio_postgres::error::SqlState;

/// Failure taxonomy for record store operations.
///
/// Driver errors are classified once, here, by SQLSTATE. Services branch on
/// these variants and never inspect `tokio_postgres::Error` themselves.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the write (SQLSTATE 23505).
    #[error("unique constraint violated")]
    UniqueViolation,
    /// A FOREIGN KEY constraint rejected the write (SQLSTATE 23503).
    #[error("foreign key constraint violated")]
    ForeignKeyViolation,
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// Any other driver or infrastructure failure.
    #[error("store failure: {0}")]
    Other(#[source] super::PgErr),
}

impl From<super::PgErr> for StoreError {
    fn from(e: super::PgErr) -> Self {
        match e.code() {
            Some(code) if *code == SqlState::UNIQUE_VIOLATION => Self::UniqueViolation,
            Some(code) if *code == SqlState::FOREIGN_KEY_VIOLATION => Self::ForeignKeyViolation,
            _ => Self::Other(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_generic() {
        assert_eq!(
            StoreError::UniqueViolation.to_string(),
            "unique constraint violated"
        );
        assert_eq!(StoreError::NotFound.to_string(), "record not found");
    }
}

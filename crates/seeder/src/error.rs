//! Error types for the seeding run.

/// Error raised by a seed step. The only failure class a step can hit is a
/// database operation failing; connectivity, constraint violations, and bad
/// SQL all surface here.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message_includes_source() {
        let err = SeedError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }
}

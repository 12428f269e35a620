/// Errors that can occur within the storage layer.
///
/// # Examples
///
/// ```rust
/// use traction_storage::error::StorageError;
///
/// let err = StorageError::from(sea_orm::DbErr::Custom("connection pool exhausted".into()));
/// assert!(err.to_string().contains("connection pool"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An underlying database error (connectivity, constraint, or write failure).
    #[error("Storage: database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

use thiserror::Error;

use solace_core::error::CoreError;
use solace_core::id::EntityId;
use solace_core::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("precondition failed for key: {key}")]
    PreconditionFailed { key: String },

    #[error("gave up writing {key} after repeated concurrent modifications")]
    Conflict { key: String },

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("no {collection} record with id {id}")]
    RecordNotFound { collection: &'static str, id: EntityId },

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

}

impl From<CoreError> for StorageError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Serialization(e) => StorageError::Serialization(e),
            CoreError::Validation(fields) => StorageError::Validation(fields),
            CoreError::RecordNotFound { collection, id } => {
                StorageError::RecordNotFound { collection, id }
            }
        }
    }
}

use thiserror::Error;

use crate::id::EntityId;
use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("no {collection} record with id {id}")]
    RecordNotFound { collection: &'static str, id: EntityId },
}

use thiserror::Error;

use crate::domain::TodoId;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Complete or delete was given an id absent from the store.
    #[error("no todo found for id={0}")]
    NotFound(TodoId),

    /// A textual id did not parse as a ULID.
    #[error("invalid todo id: {0}")]
    InvalidId(#[from] ulid::DecodeError),
}

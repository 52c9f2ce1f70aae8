use abdm_types::IdentifierError;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;

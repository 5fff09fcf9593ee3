use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum SuffixTreeError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("no string registered at index={index}")]
    NotFound { index: usize },
}

impl SuffixTreeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> SuffixTreeError {
        SuffixTreeError::InvalidArgument { reason: reason.into() }
    }
}

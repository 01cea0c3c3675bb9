use thiserror::Error;

/// Recoverable runtime conditions. Every one of these is a local failure
/// surfaced to the immediate caller; nothing here terminates the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("attribute not found: {key}")]
    AttributeNotFound { key: String },

    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid numeric literal {text:?}")]
    InvalidNumericLiteral { text: String },

    #[error("method takes {expected} argument(s), {got} were passed")]
    ArityMismatch { expected: u8, got: u8 },

    #[error("dangling object handle {bits:#x}")]
    DanglingHandle { bits: u64 },

    #[error("object has no attribute store")]
    MissingStore,

    #[error("attribute {key:?} does not hold {expected}")]
    PayloadMismatch { key: String, expected: &'static str },

    #[error("method owner {owner:?} is not in the receiver's ancestry")]
    UnknownAncestor { owner: String },
}

pub type RtResult<T> = Result<T, RuntimeError>;

impl RuntimeError {
    pub fn attribute_not_found(key: &str) -> Self {
        RuntimeError::AttributeNotFound {
            key: key.to_string(),
        }
    }

    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        RuntimeError::IndexOutOfRange { index, len }
    }

    pub fn invalid_numeric_literal(text: &str) -> Self {
        RuntimeError::InvalidNumericLiteral {
            text: text.to_string(),
        }
    }

    pub fn payload_mismatch(key: &str, expected: &'static str) -> Self {
        RuntimeError::PayloadMismatch {
            key: key.to_string(),
            expected,
        }
    }

    pub fn unknown_ancestor(owner: &str) -> Self {
        RuntimeError::UnknownAncestor {
            owner: owner.to_string(),
        }
    }
}

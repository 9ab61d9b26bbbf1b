use thiserror::Error;

/// Reasons an octet field or a converter call can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OctetError {
    #[error("octet is empty")]
    Empty,
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("not a whole number: {0}")]
    NotAnInteger(String),
    #[error("octet out of range 0-255: {0}")]
    OutOfRange(String),
    #[error("invalid argument: {0} is not an octet")]
    InvalidArgument(u32),
    #[error("expected 4 octet fields, got {0}")]
    FieldCount(usize),
    #[error("invalid render config: {0}")]
    Config(String),
}

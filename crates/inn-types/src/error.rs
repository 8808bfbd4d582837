use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown room tier: {0}")]
    UnknownTier(String),

    #[error("invalid tier selector {0}: expected 1, 2 or 3")]
    InvalidSelector(u8),
}

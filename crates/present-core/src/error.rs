//! Error types for the PRESENT primitive.

use thiserror::Error;

/// Errors raised while constructing a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key length is not accepted by the cipher.
    #[error("invalid key size: {0} bytes")]
    InvalidKeySize(usize),
    /// Round count must be at least one.
    #[error("round count must be at least 1")]
    InvalidRoundCount,
}

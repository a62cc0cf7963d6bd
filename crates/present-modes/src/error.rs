//! Error types for the chaining layer.

use present_core::CipherError;
use thiserror::Error;

/// Errors surfaced by CBC/CFB operations. Raised before any block is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Salt length differs from the cipher block size.
    #[error("salt must be {expected} bytes, got {actual}")]
    InvalidSaltLength {
        /// Block size of the cipher.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// Ciphertext is empty or not a whole number of blocks.
    #[error("ciphertext length {len} is not a positive multiple of block size {block_size}")]
    InvalidCiphertextLength {
        /// Length that was supplied.
        len: usize,
        /// Block size of the cipher.
        block_size: usize,
    },
    /// The cipher could not be constructed from the key.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}

//! PKCS#7 block padding with a non-failing removal policy.
//!
//! Removing padding never returns an error. When the trailing bytes are not a
//! well-formed pad, typically after decrypting under the wrong key, the caller
//! receives [`Unpadded::Raw`] with the still-padded bytes and the reason.
//! Callers must apply their own sanity checks to detect garbage plaintext.

use thiserror::Error;
use tracing::debug;

/// Reason a trailing pad was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// There were no bytes to unpad.
    #[error("no data to unpad")]
    Empty,
    /// Data is not a whole number of blocks.
    #[error("length {len} is not a multiple of block size {block_size}")]
    Misaligned {
        /// Length of the data.
        len: usize,
        /// Expected block size.
        block_size: usize,
    },
    /// Final byte is zero or larger than the block size.
    #[error("pad length {0} out of range")]
    BadLength(u8),
    /// Pad bytes do not all equal the pad length.
    #[error("pad bytes disagree with pad length")]
    Inconsistent,
}

/// Result of removing padding from decrypted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unpadded {
    /// Padding was well formed and has been stripped.
    Valid(Vec<u8>),
    /// Padding was malformed; `bytes` is the full decrypted buffer.
    Raw {
        /// Decrypted bytes, padding still attached.
        bytes: Vec<u8>,
        /// Why the pad was rejected.
        reason: PaddingError,
    },
}

impl Unpadded {
    /// True when the padding validated.
    pub fn is_valid(&self) -> bool {
        matches!(self, Unpadded::Valid(_))
    }

    /// The rejection reason for a raw fallback.
    pub fn padding_error(&self) -> Option<PaddingError> {
        match self {
            Unpadded::Valid(_) => None,
            Unpadded::Raw { reason, .. } => Some(*reason),
        }
    }

    /// Borrows the bytes, whichever variant this is.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Unpadded::Valid(bytes) | Unpadded::Raw { bytes, .. } => bytes,
        }
    }

    /// Best-effort plaintext: stripped when valid, raw otherwise.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Unpadded::Valid(bytes) | Unpadded::Raw { bytes, .. } => bytes,
        }
    }
}

/// Appends `n` bytes of value `n`, with `n` in `1..=block_size`.
///
/// # Panics
///
/// Panics when `block_size` is 0 or above 255.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(
        (1..=255).contains(&block_size),
        "PKCS#7 block size must be in 1..=255"
    );
    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Validates the trailing pad and returns its length.
pub fn pad_len(data: &[u8], block_size: usize) -> Result<usize, PaddingError> {
    let last = *data.last().ok_or(PaddingError::Empty)?;
    if data.len() % block_size != 0 {
        return Err(PaddingError::Misaligned {
            len: data.len(),
            block_size,
        });
    }
    let n = usize::from(last);
    if n == 0 || n > block_size || n > data.len() {
        return Err(PaddingError::BadLength(last));
    }
    if data[data.len() - n..].iter().any(|&b| b != last) {
        return Err(PaddingError::Inconsistent);
    }
    Ok(n)
}

/// Strips the pad, falling back to the raw bytes when it is malformed.
pub fn unpad(mut data: Vec<u8>, block_size: usize) -> Unpadded {
    match pad_len(&data, block_size) {
        Ok(n) => {
            data.truncate(data.len() - n);
            Unpadded::Valid(data)
        }
        Err(reason) => {
            debug!(len = data.len(), %reason, "padding rejected, returning raw bytes");
            Unpadded::Raw {
                bytes: data,
                reason,
            }
        }
    }
}

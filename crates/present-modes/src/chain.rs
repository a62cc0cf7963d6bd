//! Input checks shared by the chaining modes.

use std::iter;

use crate::error::ModeError;

pub(crate) fn check_salt(block_size: usize, salt: &[u8]) -> Result<(), ModeError> {
    if salt.len() != block_size {
        return Err(ModeError::InvalidSaltLength {
            expected: block_size,
            actual: salt.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_ciphertext(block_size: usize, ciphertext: &[u8]) -> Result<(), ModeError> {
    if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
        return Err(ModeError::InvalidCiphertextLength {
            len: ciphertext.len(),
            block_size,
        });
    }
    Ok(())
}

/// Chaining input for each ciphertext block: the salt, then every ciphertext
/// block but the last.
pub(crate) fn predecessors<'a>(
    salt: &'a [u8],
    ciphertext: &'a [u8],
    block_size: usize,
) -> impl Iterator<Item = &'a [u8]> {
    iter::once(salt).chain(ciphertext.chunks_exact(block_size))
}

/// Chaining input for block `index`, for random access from parallel workers.
#[cfg(feature = "parallel")]
pub(crate) fn predecessor<'a>(
    salt: &'a [u8],
    ciphertext: &'a [u8],
    block_size: usize,
    index: usize,
) -> &'a [u8] {
    if index == 0 {
        salt
    } else {
        &ciphertext[(index - 1) * block_size..index * block_size]
    }
}

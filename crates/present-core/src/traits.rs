//! Capabilities shared by every block cipher in the workspace.

use crate::error::CipherError;

/// Single-block encryption over a fixed block size.
///
/// Both operations work in place. Passing a slice whose length is not
/// [`BlockCipher::block_size`] is a contract violation and panics.
pub trait BlockCipher {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut [u8]);
}

/// Construction of a cipher from raw key bytes.
pub trait KeyInit: Sized {
    /// Builds the cipher, rejecting key lengths it does not support.
    fn new_from_slice(key: &[u8]) -> Result<Self, CipherError>;
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        (**self).decrypt_block(block)
    }
}

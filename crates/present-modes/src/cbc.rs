//! Cipher Block Chaining.
//!
//! Encryption: `C_i = E(P_i ^ C_{i-1})` with `C_{-1}` the salt.
//! Decryption: `P_i = D(C_i) ^ C_{i-1}`, always chaining on the received
//! ciphertext, so blocks can be decrypted independently.

use present_core::{xor_in_place, BlockCipher};
use tracing::trace;

use crate::chain::{check_ciphertext, check_salt, predecessors};
use crate::error::ModeError;
use crate::padding::{pad, unpad, Unpadded};

/// Pads and encrypts `plaintext`, seeding the chain with `salt`.
pub fn encrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    plaintext: &[u8],
    salt: &[u8],
) -> Result<Vec<u8>, ModeError> {
    let block_size = cipher.block_size();
    check_salt(block_size, salt)?;

    let mut data = pad(plaintext, block_size);
    let mut previous = salt.to_vec();
    for block in data.chunks_exact_mut(block_size) {
        xor_in_place(block, &previous);
        cipher.encrypt_block(block);
        previous.copy_from_slice(block);
    }

    trace!(blocks = data.len() / block_size, "cbc encrypt");
    Ok(data)
}

/// Decrypts `ciphertext` and strips the padding.
pub fn decrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    ciphertext: &[u8],
    salt: &[u8],
) -> Result<Unpadded, ModeError> {
    let block_size = cipher.block_size();
    check_salt(block_size, salt)?;
    check_ciphertext(block_size, ciphertext)?;

    let mut data = ciphertext.to_vec();
    for (block, previous) in data
        .chunks_exact_mut(block_size)
        .zip(predecessors(salt, ciphertext, block_size))
    {
        cipher.decrypt_block(block);
        xor_in_place(block, previous);
    }

    trace!(blocks = data.len() / block_size, "cbc decrypt");
    Ok(unpad(data, block_size))
}

/// Same as [`decrypt`], spreading the blocks over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn decrypt_parallel<C: BlockCipher + Sync + ?Sized>(
    cipher: &C,
    ciphertext: &[u8],
    salt: &[u8],
) -> Result<Unpadded, ModeError> {
    use rayon::prelude::*;

    use crate::chain::predecessor;

    let block_size = cipher.block_size();
    check_salt(block_size, salt)?;
    check_ciphertext(block_size, ciphertext)?;

    let mut data = ciphertext.to_vec();
    data.par_chunks_mut(block_size)
        .enumerate()
        .for_each(|(index, block)| {
            cipher.decrypt_block(block);
            xor_in_place(block, predecessor(salt, ciphertext, block_size, index));
        });

    trace!(blocks = data.len() / block_size, "cbc parallel decrypt");
    Ok(unpad(data, block_size))
}

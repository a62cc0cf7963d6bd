//! Cipher Feedback with full-block feedback.
//!
//! Keystream `S_0 = E(salt)`, `S_i = E(C_{i-1})`; `C_i = P_i ^ S_i`.
//! Only the forward cipher is used in both directions.

use present_core::{xor_in_place, BlockCipher};
use tracing::trace;

use crate::chain::{check_ciphertext, check_salt, predecessors};
use crate::error::ModeError;
use crate::padding::{pad, unpad, Unpadded};

/// Pads and encrypts `plaintext`, seeding the feedback register with `salt`.
pub fn encrypt<C: BlockCipher + ?Sized>(
    cipher: &C,
    plaintext: &[u8],
    salt: &[u8],
) -> Result<Vec<u8>, ModeError> {
    let block_size = cipher.block_size();
    check_salt(block_size, salt)?;

    let mut data = pad(plaintext, block_size);
    let mut feedback = salt.to_vec();
    for block in data.chunks_exact_mut(block_size) {
        cipher.encrypt_block(&mut feedback);
        xor_in_place(block, &feedback);
        feedback.copy_from_slice(block);
    }

    trace!(blocks = data.len() / block_size, "cfb encrypt");
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
    let mut keystream = vec![0u8; block_size];
    for (block, previous) in data
        .chunks_exact_mut(block_size)
        .zip(predecessors(salt, ciphertext, block_size))
    {
        keystream.copy_from_slice(previous);
        cipher.encrypt_block(&mut keystream);
        xor_in_place(block, &keystream);
    }

    trace!(blocks = data.len() / block_size, "cfb decrypt");
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
            let mut keystream = predecessor(salt, ciphertext, block_size, index).to_vec();
            cipher.encrypt_block(&mut keystream);
            xor_in_place(block, &keystream);
        });

    trace!(blocks = data.len() / block_size, "cfb parallel decrypt");
    Ok(unpad(data, block_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use present_core::Present;

    #[test]
    fn first_block_is_plaintext_xor_encrypted_salt() {
        let cipher = Present::new(&[9u8; 16]).unwrap();
        let salt = [1u8; 8];
        let ct = encrypt(&cipher, b"TestData", &salt).unwrap();

        let mut expected = cipher.encrypt(&salt);
        xor_in_place(&mut expected, b"TestData");
        assert_eq!(&ct[..8], &expected);

        let mut second = cipher.encrypt(&expected);
        xor_in_place(&mut second, &[8u8; 8]);
        assert_eq!(&ct[8..], &second);
    }

    #[test]
    fn round_trip() {
        let cipher = Present::new(&[9u8; 10]).unwrap();
        let salt = [0xeeu8; 8];
        let pt = b"cipher feedback over several blocks";
        let ct = encrypt(&cipher, pt, &salt).unwrap();
        assert_eq!(ct.len() % 8, 0);
        assert_eq!(decrypt(&cipher, &ct, &salt).unwrap().into_bytes(), pt);
    }

    #[test]
    fn rejects_bad_salt() {
        let cipher = Present::new(&[0u8; 16]).unwrap();
        assert!(matches!(
            encrypt(&cipher, b"x", &[]),
            Err(ModeError::InvalidSaltLength { expected: 8, actual: 0 })
        ));
    }
}

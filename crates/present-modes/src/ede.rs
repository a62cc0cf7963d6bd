//! Encrypt-decrypt-encrypt composition of three keyed block ciphers.

use present_core::{BlockCipher, CipherError, KeyInit, Present};

/// PRESENT applied three times, `E_k3(D_k2(E_k1(x)))`.
pub type TriplePresent = Ede3<Present>;

/// Three-stage EDE composition over any block cipher.
///
/// With all three stages keyed identically the composition collapses to a
/// single encryption.
#[derive(Clone, Debug)]
pub struct Ede3<C> {
    stages: [C; 3],
}

impl<C: BlockCipher> Ede3<C> {
    /// Composes three independently keyed ciphers.
    ///
    /// # Panics
    ///
    /// Panics when the stages disagree on block size.
    pub fn new(k1: C, k2: C, k3: C) -> Self {
        let block_size = k1.block_size();
        assert!(
            k2.block_size() == block_size && k3.block_size() == block_size,
            "EDE stages must share a block size"
        );
        Self {
            stages: [k1, k2, k3],
        }
    }

    /// Two-key variant where the third stage reuses the first key.
    pub fn two_key(k1: C, k2: C) -> Self
    where
        C: Clone,
    {
        let k3 = k1.clone();
        Self::new(k1, k2, k3)
    }
}

impl<C: BlockCipher> BlockCipher for Ede3<C> {
    fn block_size(&self) -> usize {
        self.stages[0].block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let [k1, k2, k3] = &self.stages;
        k1.encrypt_block(block);
        k2.decrypt_block(block);
        k3.encrypt_block(block);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let [k1, k2, k3] = &self.stages;
        k3.decrypt_block(block);
        k2.encrypt_block(block);
        k1.decrypt_block(block);
    }
}

impl<C: BlockCipher + KeyInit + Clone> KeyInit for Ede3<C> {
    /// Splits the key into three equal sub-keys, or into two (third stage
    /// reusing the first) when thirds are not a valid sub-key length.
    fn new_from_slice(key: &[u8]) -> Result<Self, CipherError> {
        if !key.is_empty() && key.len() % 3 == 0 {
            let n = key.len() / 3;
            if let Ok(k1) = C::new_from_slice(&key[..n]) {
                let k2 = C::new_from_slice(&key[n..2 * n])?;
                let k3 = C::new_from_slice(&key[2 * n..])?;
                return Ok(Self::new(k1, k2, k3));
            }
        }
        if !key.is_empty() && key.len() % 2 == 0 {
            let n = key.len() / 2;
            if let Ok(k1) = C::new_from_slice(&key[..n]) {
                let k2 = C::new_from_slice(&key[n..])?;
                return Ok(Self::two_key(k1, k2));
            }
        }
        Err(CipherError::InvalidKeySize(key.len()))
    }
}

//! Key types for PRESENT.

use crate::error::CipherError;

/// Accepted PRESENT key, either 80 or 128 bits wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentKey {
    /// 80-bit key (10 bytes).
    Key80([u8; 10]),
    /// 128-bit key (16 bytes).
    Key128([u8; 16]),
}

impl PresentKey {
    /// Loads the key into the 128-bit schedule register, left-aligned.
    pub(crate) fn register(&self) -> u128 {
        match self {
            PresentKey::Key80(bytes) => {
                let mut wide = [0u8; 16];
                wide[..10].copy_from_slice(bytes);
                u128::from_be_bytes(wide)
            }
            PresentKey::Key128(bytes) => u128::from_be_bytes(*bytes),
        }
    }
}

impl From<[u8; 10]> for PresentKey {
    fn from(value: [u8; 10]) -> Self {
        Self::Key80(value)
    }
}

impl From<[u8; 16]> for PresentKey {
    fn from(value: [u8; 16]) -> Self {
        Self::Key128(value)
    }
}

impl TryFrom<&[u8]> for PresentKey {
    type Error = CipherError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.len() {
            10 => {
                let mut bytes = [0u8; 10];
                bytes.copy_from_slice(value);
                Ok(Self::Key80(bytes))
            }
            16 => {
                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(value);
                Ok(Self::Key128(bytes))
            }
            len => Err(CipherError::InvalidKeySize(len)),
        }
    }
}

/// Expanded round keys, one 64-bit word per round.
///
/// Only produced by [`crate::expand_key`], so it always holds at least one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub(crate) Vec<u64>);

impl RoundKeys {
    /// Returns the round key at the requested index.
    #[inline]
    pub fn get(&self, round: usize) -> u64 {
        self.0[round]
    }

    /// Number of round keys, equal to the configured round count.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a schedule built by [`crate::expand_key`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key applied after the final round.
    #[inline]
    pub fn last(&self) -> u64 {
        self.0[self.0.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighty_bit_key_is_left_aligned() {
        let key = PresentKey::from([0xffu8; 10]);
        assert_eq!(key.register(), u128::MAX << 48);
    }

    #[test]
    fn rejects_other_lengths() {
        for len in [0usize, 1, 8, 9, 11, 15, 17, 24, 32] {
            let bytes = vec![0u8; len];
            assert_eq!(
                PresentKey::try_from(bytes.as_slice()),
                Err(CipherError::InvalidKeySize(len))
            );
        }
    }
}

//! PRESENT key schedule and block encryption/decryption.

use crate::block::{load, store, Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::{PresentKey, RoundKeys};
use crate::round::{add_round_key, inv_p_layer, inv_sbox_layer, p_layer, sbox_layer};
use crate::sbox::sbox;
use crate::traits::{BlockCipher, KeyInit};

/// Default number of rounds.
pub const DEFAULT_ROUNDS: usize = 32;

const TOP_NIBBLE_SHIFT: u32 = 124;

/// Static cipher parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentConfig {
    /// Number of rounds, and therefore of round keys.
    pub rounds: usize,
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

/// Expands a key into `rounds` round keys.
///
/// The key sits in a 128-bit register. Each step emits the top 64 bits, rotates
/// the register left by 61, passes the top nibble through the S-box and mixes
/// the round counter into bits 15 and up. Zero rounds is rejected.
pub fn expand_key(key: &PresentKey, rounds: usize) -> Result<RoundKeys, CipherError> {
    if rounds == 0 {
        return Err(CipherError::InvalidRoundCount);
    }
    let mut register = key.register();
    let mut round_keys = Vec::with_capacity(rounds);

    for counter in 1..=rounds {
        round_keys.push((register >> 64) as u64);

        register = register.rotate_left(61);
        let top = (register >> TOP_NIBBLE_SHIFT) as u8;
        register &= !(0xfu128 << TOP_NIBBLE_SHIFT);
        register |= u128::from(sbox(top)) << TOP_NIBBLE_SHIFT;
        register ^= (counter as u128) << 15;
    }

    Ok(RoundKeys(round_keys))
}

/// Encrypts a single 8-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = load(block);
    let last = round_keys.len() - 1;

    for round in 0..last {
        state = add_round_key(state, round_keys.get(round));
        state = sbox_layer(state);
        state = p_layer(state);
    }
    state = add_round_key(state, round_keys.get(last));

    store(state)
}

/// Decrypts a single 8-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = load(block);
    let last = round_keys.len() - 1;

    state = add_round_key(state, round_keys.get(last));
    for round in (0..last).rev() {
        state = inv_p_layer(state);
        state = inv_sbox_layer(state);
        state = add_round_key(state, round_keys.get(round));
    }

    store(state)
}

/// PRESENT instance holding its expanded key schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Present {
    round_keys: RoundKeys,
}

impl Present {
    /// Builds a 32-round cipher from a 10 or 16 byte key.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::with_config(key, PresentConfig::default())
    }

    /// Builds a cipher with explicit configuration.
    pub fn with_config(key: &[u8], config: PresentConfig) -> Result<Self, CipherError> {
        let key = PresentKey::try_from(key)?;
        Self::from_key(&key, config)
    }

    /// Builds a cipher from an already validated key.
    pub fn from_key(key: &PresentKey, config: PresentConfig) -> Result<Self, CipherError> {
        Ok(Self {
            round_keys: expand_key(key, config.rounds)?,
        })
    }

    /// Number of rounds this instance runs.
    pub fn rounds(&self) -> usize {
        self.round_keys.len()
    }

    /// The expanded key schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

fn as_block(bytes: &[u8]) -> Block {
    assert_eq!(
        bytes.len(),
        BLOCK_SIZE,
        "PRESENT operates on {BLOCK_SIZE}-byte blocks"
    );
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    block
}

impl BlockCipher for Present {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let out = self.encrypt(&as_block(block));
        block.copy_from_slice(&out);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let out = self.decrypt(&as_block(block));
        block.copy_from_slice(&out);
    }
}

impl KeyInit for Present {
    fn new_from_slice(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn schedule_of_zero_key() {
        let key = PresentKey::from([0u8; 16]);
        let rks = expand_key(&key, DEFAULT_ROUNDS).unwrap();
        assert_eq!(rks.len(), DEFAULT_ROUNDS);
        assert_eq!(rks.get(0), 0);
        assert_eq!(rks.get(1), 0xc000_0000_0000_0000);
        assert_eq!(rks.get(2), 0xc000_0000_0000_1000);
    }

    #[test]
    fn first_round_key_is_top_of_key() {
        let key_bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        let rks = expand_key(&PresentKey::from(key_bytes), 4).unwrap();
        assert_eq!(rks.get(0), 0x0001_0203_0405_0607);

        let short: [u8; 10] = core::array::from_fn(|i| 0xa0 + i as u8);
        let rks = expand_key(&PresentKey::from(short), 4).unwrap();
        assert_eq!(rks.get(0), 0xa0a1_a2a3_a4a5_a6a7);
    }

    #[test]
    fn schedule_is_deterministic() {
        let key = PresentKey::from([0x5au8; 10]);
        assert_eq!(expand_key(&key, 32).unwrap(), expand_key(&key, 32).unwrap());
    }

    #[test]
    fn round_key_count_follows_config() {
        for rounds in [1usize, 2, 16, 31, 32, 64] {
            let cipher = Present::with_config(&[7u8; 16], PresentConfig { rounds }).unwrap();
            assert_eq!(cipher.rounds(), rounds);
            assert_eq!(cipher.round_keys().len(), rounds);
        }
    }

    #[test]
    fn zero_rounds_rejected() {
        assert_eq!(
            Present::with_config(&[0u8; 16], PresentConfig { rounds: 0 }),
            Err(CipherError::InvalidRoundCount)
        );
    }

    #[test]
    fn empty_schedule_cannot_be_expanded() {
        let key = PresentKey::from([0u8; 16]);
        assert_eq!(expand_key(&key, 0), Err(CipherError::InvalidRoundCount));
        let rks = expand_key(&key, 1).unwrap();
        assert_eq!(rks.len(), 1);
        assert!(!rks.is_empty());
        assert_eq!(rks.last(), rks.get(0));
        assert_eq!(encrypt_block(&[0u8; 8], &rks), [0u8; 8]);
    }

    #[test]
    fn known_answers_for_test_data() {
        let cases: [(&[u8], u64); 3] = [
            (&[0u8; 16], 0xa85a_bea3_05a7_c489),
            (&[0u8; 10], 0xa85a_bea3_05a7_c489),
            (&[0xffu8; 16], 0x66cd_4900_e894_c803),
        ];
        for (key, expected) in cases {
            let cipher = Present::new(key).unwrap();
            let ct = cipher.encrypt(b"TestData");
            assert_eq!(ct, expected.to_be_bytes(), "key {key:02x?}");
            assert_eq!(encrypt_block(b"TestData", cipher.round_keys()), ct);
            assert_eq!(decrypt_block(&ct, cipher.round_keys()), *b"TestData");
        }
    }

    #[test]
    fn key_size_validation() {
        assert!(Present::new(&[0u8; 10]).is_ok());
        assert!(Present::new(&[0u8; 16]).is_ok());
        assert_eq!(Present::new(&[0u8; 8]), Err(CipherError::InvalidKeySize(8)));
        assert_eq!(Present::new(&[0u8; 24]), Err(CipherError::InvalidKeySize(24)));
        assert_eq!(Present::new(&[]), Err(CipherError::InvalidKeySize(0)));
    }

    #[test]
    fn single_round_is_key_whitening() {
        let cipher = Present::with_config(&[0xffu8; 16], PresentConfig { rounds: 1 }).unwrap();
        let block = [0u8; 8];
        assert_eq!(cipher.encrypt(&block), [0xffu8; 8]);
    }

    #[test]
    fn encrypt_changes_block() {
        let cipher = Present::new(&[0u8; 16]).unwrap();
        let block = *b"TestData";
        let ct = cipher.encrypt(&block);
        assert_ne!(ct, block);
        assert_eq!(cipher.decrypt(&ct), block);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key80 = [0u8; 10];
            let mut key128 = [0u8; 16];
            let mut block = [0u8; 8];
            rng.fill_bytes(&mut key80);
            rng.fill_bytes(&mut key128);
            rng.fill_bytes(&mut block);
            for cipher in [Present::new(&key80).unwrap(), Present::new(&key128).unwrap()] {
                let ct = cipher.encrypt(&block);
                assert_eq!(cipher.decrypt(&ct), block);
                assert_eq!(cipher.encrypt(&block), ct);
            }
        }
    }

    #[test]
    fn trait_methods_work_in_place() {
        let cipher = Present::new(&[3u8; 10]).unwrap();
        let mut buf = *b"12345678";
        BlockCipher::encrypt_block(&cipher, &mut buf);
        assert_eq!(buf, cipher.encrypt(b"12345678"));
        BlockCipher::decrypt_block(&cipher, &mut buf);
        assert_eq!(&buf, b"12345678");
        assert_eq!(cipher.block_size(), 8);
    }

    #[test]
    #[should_panic(expected = "8-byte blocks")]
    fn short_slice_is_a_contract_violation() {
        let cipher = Present::new(&[0u8; 16]).unwrap();
        let mut buf = [0u8; 7];
        BlockCipher::encrypt_block(&cipher, &mut buf);
    }
}

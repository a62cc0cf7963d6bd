//! PRESENT-style 64-bit block cipher.
//!
//! This crate provides:
//! - The 80/128-bit key schedule over a 128-bit register.
//! - The 4-bit S-box layer and the 64-bit permutation layer.
//! - Single-block encryption and decryption.
//! - The [`BlockCipher`] and [`KeyInit`] traits chaining modes build on.
//!
//! The implementation favours clarity and testability; it is not constant-time
//! and should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;
mod traits;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, encrypt_block, expand_key, Present, PresentConfig, DEFAULT_ROUNDS,
};
pub use crate::error::CipherError;
pub use crate::key::{PresentKey, RoundKeys};
pub use crate::round::{INV_PERMUTATION, PERMUTATION};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::traits::{BlockCipher, KeyInit};

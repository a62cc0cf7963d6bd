//! Chaining mode selector and the encrypted output record.

use std::fmt;

use present_core::BlockCipher;
use serde::{Deserialize, Serialize};

use crate::error::ModeError;
use crate::padding::Unpadded;
use crate::{cbc, cfb};

/// Supported chaining modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Cipher Block Chaining.
    Cbc,
    /// Cipher Feedback.
    Cfb,
}

impl Mode {
    /// Encrypts `plaintext` under this mode.
    pub fn encrypt<C: BlockCipher + ?Sized>(
        self,
        cipher: &C,
        plaintext: &[u8],
        salt: &[u8],
    ) -> Result<Encrypted, ModeError> {
        let ciphertext = match self {
            Mode::Cbc => cbc::encrypt(cipher, plaintext, salt)?,
            Mode::Cfb => cfb::encrypt(cipher, plaintext, salt)?,
        };
        Ok(Encrypted {
            mode: self,
            salt: salt.to_vec(),
            ciphertext,
        })
    }

    /// Decrypts `ciphertext` under this mode.
    pub fn decrypt<C: BlockCipher + ?Sized>(
        self,
        cipher: &C,
        ciphertext: &[u8],
        salt: &[u8],
    ) -> Result<Unpadded, ModeError> {
        match self {
            Mode::Cbc => cbc::decrypt(cipher, ciphertext, salt),
            Mode::Cfb => cfb::decrypt(cipher, ciphertext, salt),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cbc => f.write_str("CBC"),
            Mode::Cfb => f.write_str("CFB"),
        }
    }
}

/// Ciphertext together with the fields needed to decrypt it.
///
/// `ciphertext` is a bare concatenation of blocks; mode and salt travel beside
/// it rather than inside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encrypted {
    /// Mode the ciphertext was produced with.
    pub mode: Mode,
    /// Salt that seeded the chain.
    pub salt: Vec<u8>,
    /// Encrypted blocks.
    pub ciphertext: Vec<u8>,
}

impl Encrypted {
    /// Splits into `(ciphertext, salt)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.ciphertext, self.salt)
    }

    /// Decrypts with the recorded mode and salt.
    pub fn decrypt<C: BlockCipher + ?Sized>(&self, cipher: &C) -> Result<Unpadded, ModeError> {
        self.mode.decrypt(cipher, &self.ciphertext, &self.salt)
    }

    /// Serializes the record with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a record with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

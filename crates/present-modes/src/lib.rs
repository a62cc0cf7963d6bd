//! CBC and CFB chaining over any fixed-size block cipher.
//!
//! The modes are generic over [`present_core::BlockCipher`], so the same code
//! drives a single [`Present`] instance or a composed [`TriplePresent`].
//! Plaintext is PKCS#7 padded; the salt seeds the chain and is returned next to
//! the ciphertext, never embedded in it.
//!
//! Decryption never fails on bad padding. It returns an [`Unpadded`] that is
//! either the validated plaintext or the raw decrypted bytes, so a wrong key
//! produces garbage rather than an error.
//!
//! ```
//! use present_core::Present;
//! use present_modes::{cbc_decrypt, cbc_encrypt, generate_salt};
//!
//! let key = [0u8; 16];
//! let salt = generate_salt(8);
//! let sealed = cbc_encrypt::<Present>(b"TestData", &key, &salt).unwrap();
//! let plain = cbc_decrypt::<Present>(&sealed.ciphertext, &key, &sealed.salt).unwrap();
//! assert_eq!(plain.into_bytes(), b"TestData");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cbc;
pub mod cfb;
mod chain;
mod ede;
mod envelope;
mod error;
pub mod padding;
mod salt;

pub use present_core::{BlockCipher, KeyInit, Present};

pub use crate::ede::{Ede3, TriplePresent};
pub use crate::envelope::{Encrypted, Mode};
pub use crate::error::ModeError;
pub use crate::padding::{PaddingError, Unpadded};
pub use crate::salt::{generate_salt, generate_salt_with};

/// Builds `C` from `key` and CBC-encrypts `plaintext` seeded with `salt`.
pub fn cbc_encrypt<C: BlockCipher + KeyInit>(
    plaintext: &[u8],
    key: &[u8],
    salt: &[u8],
) -> Result<Encrypted, ModeError> {
    Mode::Cbc.encrypt(&C::new_from_slice(key)?, plaintext, salt)
}

/// Builds `C` from `key` and CBC-decrypts `ciphertext`.
pub fn cbc_decrypt<C: BlockCipher + KeyInit>(
    ciphertext: &[u8],
    key: &[u8],
    salt: &[u8],
) -> Result<Unpadded, ModeError> {
    Mode::Cbc.decrypt(&C::new_from_slice(key)?, ciphertext, salt)
}

/// Builds `C` from `key` and CFB-encrypts `plaintext` seeded with `salt`.
pub fn cfb_encrypt<C: BlockCipher + KeyInit>(
    plaintext: &[u8],
    key: &[u8],
    salt: &[u8],
) -> Result<Encrypted, ModeError> {
    Mode::Cfb.encrypt(&C::new_from_slice(key)?, plaintext, salt)
}

/// Builds `C` from `key` and CFB-decrypts `ciphertext`.
pub fn cfb_decrypt<C: BlockCipher + KeyInit>(
    ciphertext: &[u8],
    key: &[u8],
    salt: &[u8],
) -> Result<Unpadded, ModeError> {
    Mode::Cfb.decrypt(&C::new_from_slice(key)?, ciphertext, salt)
}

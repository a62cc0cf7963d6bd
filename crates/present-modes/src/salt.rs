//! Salt (IV) generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Returns `len` bytes from the operating system CSPRNG.
pub fn generate_salt(len: usize) -> Vec<u8> {
    generate_salt_with(&mut OsRng, len)
}

/// Returns `len` bytes drawn from `rng`.
pub fn generate_salt_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    rng.fill_bytes(&mut salt);
    salt
}

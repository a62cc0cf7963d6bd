//! PRESENT round transformations over the 64-bit state.

use crate::sbox::{INV_SBOX, SBOX};

/// Destination position of every state bit under the permutation layer.
///
/// Bit `i` moves to `16 * i mod 63`; bit 63 is a fixed point, otherwise it
/// would collide with bit 0.
pub const PERMUTATION: [u8; 64] = build_permutation();

/// Inverse of [`PERMUTATION`]: source position of every destination bit.
pub const INV_PERMUTATION: [u8; 64] = invert_permutation(&PERMUTATION);

const fn build_permutation() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut i = 0;
    while i < 63 {
        table[i] = ((i * 16) % 63) as u8;
        i += 1;
    }
    table[63] = 63;
    table
}

const fn invert_permutation(table: &[u8; 64]) -> [u8; 64] {
    let mut inv = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        inv[table[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: u64, round_key: u64) -> u64 {
    state ^ round_key
}

#[inline]
fn substitute(state: u64, table: &[u8; 16]) -> u64 {
    let mut out = 0u64;
    for nibble in 0..16 {
        let shift = nibble * 4;
        let x = ((state >> shift) & 0xf) as usize;
        out |= u64::from(table[x]) << shift;
    }
    out
}

/// Applies the S-box to each of the 16 nibbles.
#[inline]
pub fn sbox_layer(state: u64) -> u64 {
    substitute(state, &SBOX)
}

/// Applies the inverse S-box to each of the 16 nibbles.
#[inline]
pub fn inv_sbox_layer(state: u64) -> u64 {
    substitute(state, &INV_SBOX)
}

#[inline]
fn permute(state: u64, table: &[u8; 64]) -> u64 {
    let mut out = 0u64;
    for (bit, &dst) in table.iter().enumerate() {
        out |= ((state >> bit) & 1) << dst;
    }
    out
}

/// Moves every state bit to its position in [`PERMUTATION`].
#[inline]
pub fn p_layer(state: u64) -> u64 {
    permute(state, &PERMUTATION)
}

/// Undoes [`p_layer`].
#[inline]
pub fn inv_p_layer(state: u64) -> u64 {
    permute(state, &INV_PERMUTATION)
}

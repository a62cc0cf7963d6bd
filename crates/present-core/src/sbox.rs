//! 4-bit substitution table and its inverse.

/// PRESENT S-box.
pub const SBOX: [u8; 16] = [
    0xc, 0x5, 0x6, 0xb, 0x9, 0x0, 0xa, 0xd, 0x3, 0xe, 0xf, 0x8, 0x4, 0x7, 0x1, 0x2,
];

/// Inverse of [`SBOX`], derived by indexing.
pub const INV_SBOX: [u8; 16] = invert(&SBOX);

const fn invert(table: &[u8; 16]) -> [u8; 16] {
    let mut inv = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        inv[table[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

/// Substitutes a single nibble (the upper four bits of `x` are ignored).
#[inline]
pub fn sbox(x: u8) -> u8 {
    SBOX[(x & 0x0f) as usize]
}

/// Inverse substitution of a single nibble.
#[inline]
pub fn inv_sbox(x: u8) -> u8 {
    INV_SBOX[(x & 0x0f) as usize]
}

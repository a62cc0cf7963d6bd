//! Block representation helpers.

/// Block size of the cipher in bytes.
pub const BLOCK_SIZE: usize = 8;

/// PRESENT block of 8 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Loads a block as the big-endian 64-bit cipher state.
#[inline]
pub(crate) fn load(block: &Block) -> u64 {
    u64::from_be_bytes(*block)
}

/// Stores a cipher state back into block form.
#[inline]
pub(crate) fn store(state: u64) -> Block {
    state.to_be_bytes()
}

/// XORs two equally sized byte slices, writing the result into `dst`.
///
/// # Panics
///
/// Panics when the slices differ in length.
#[inline]
pub fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    assert_eq!(dst.len(), rhs.len(), "xor_in_place needs equal lengths");
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

//! GHASH, the universal hash GCM uses for authentication.
//!
//! GHASH evaluates a polynomial over [`crate::gf128`] at the point `H`,
//! with one coefficient per 16-byte block of associated data, ciphertext,
//! and a trailing length block.

use crate::gf128::gf128_mul;

/// Absorb `aad` and `ct` into a GHASH state keyed by `h`, returning the
/// resulting 16-byte digest.
///
/// `h` is the hash subkey ($H = E_K(0^{128})$, see
/// [`crate::cipher::aead`]). Both `aad` and `ct` are zero-padded to a
/// multiple of 16 bytes on their final block; an empty input contributes
/// no block at all (not a block of zeros). A trailing length block —
/// the bit lengths of `aad` and `ct`, each as a big-endian 64-bit
/// integer — is always absorbed, even when both inputs are empty.
pub fn ghash(h: &[u8; 16], aad: &[u8], ct: &[u8]) -> [u8; 16] {
    let mut y = [0u8; 16];
    absorb(&mut y, h, aad);
    absorb(&mut y, h, ct);

    let mut len_block = [0u8; 16];
    len_block[0..8].copy_from_slice(&bit_len(aad).to_be_bytes());
    len_block[8..16].copy_from_slice(&bit_len(ct).to_be_bytes());
    update(&mut y, h, &len_block);

    y
}

/// Fold `data` into `y`, one 16-byte block at a time, zero-padding the
/// final short block.
fn absorb(y: &mut [u8; 16], h: &[u8; 16], data: &[u8]) {
    let mut chunks = data.chunks_exact(16);
    for chunk in &mut chunks {
        let block: [u8; 16] = chunk.try_into().expect("chunks_exact yields 16 bytes");
        update(y, h, &block);
    }

    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        let mut block = [0u8; 16];
        block[..remainder.len()].copy_from_slice(remainder);
        update(y, h, &block);
    }
}

/// $Y \leftarrow (Y \oplus \mathrm{block}) \cdot H$.
fn update(y: &mut [u8; 16], h: &[u8; 16], block: &[u8; 16]) {
    for (yb, bb) in y.iter_mut().zip(block.iter()) {
        *yb ^= bb;
    }
    *y = gf128_mul(y, h);
}

/// The bit length of `data`, per GCM's length-block convention.
///
/// Panics only if `data` is longer than `2^61` bytes, which would already
/// have been rejected by the length checks in [`crate::cipher::aead`].
fn bit_len(data: &[u8]) -> u64 {
    (data.len() as u64)
        .checked_mul(8)
        .expect("input length exceeds GCM's 2^64-1 bit limit")
}

//! The GCM counter-mode keystream generator.
//!
//! GCM's CTR is a restricted form of the general-purpose mode: the
//! counter only ever increments the low 32 bits of the block (`inc32`),
//! wrapping modulo $2^{32}$ rather than carrying into the rest of the
//! block, and the very first counter value's output ($S_0$) is reserved
//! for masking the authentication tag rather than being used as
//! keystream — encryption starts at $S_1$.

use super::block::{BLOCK_BYTES, BlockEncrypt};

/// A keystream generator seeded by an initial counter block `J0`.
///
/// `next_block` returns successive $S_1, S_2, \ldots$ — call it once to
/// get $S_0$ (the tag mask) via [`Ctr32::s0`], separately, since that
/// value must never be advanced past or reused as keystream.
pub struct Ctr32 {
    counter_block: [u8; BLOCK_BYTES],
}

impl Ctr32 {
    /// Seed a counter stream from the initial counter block `j0`.
    pub fn new(j0: [u8; BLOCK_BYTES]) -> Self {
        Ctr32 { counter_block: j0 }
    }

    /// $S_0 = E_K(J_0)$, the block used to mask the authentication tag.
    /// Does not advance the counter.
    pub fn s0<C: BlockEncrypt<RoundKeys = RK>, RK>(&self, cipher: &C, rk: &RK) -> [u8; BLOCK_BYTES] {
        cipher.encrypt_block(rk, &self.counter_block)
    }

    /// Advance to the next counter value and return $E_K$ of it: $S_1,
    /// S_2, \ldots$ on successive calls.
    pub fn next_block<C: BlockEncrypt<RoundKeys = RK>, RK>(
        &mut self,
        cipher: &C,
        rk: &RK,
    ) -> [u8; BLOCK_BYTES] {
        inc32(&mut self.counter_block);
        cipher.encrypt_block(rk, &self.counter_block)
    }

    /// XOR `data` with the keystream produced by repeated [`Self::next_block`]
    /// calls, in place. The final block is truncated to `data`'s length if
    /// it isn't a multiple of 16 bytes.
    pub fn apply_keystream<C: BlockEncrypt<RoundKeys = RK>, RK>(
        &mut self,
        cipher: &C,
        rk: &RK,
        data: &mut [u8],
    ) {
        for chunk in data.chunks_mut(BLOCK_BYTES) {
            let ks = self.next_block(cipher, rk);
            for (byte, k) in chunk.iter_mut().zip(ks.iter()) {
                *byte ^= k;
            }
        }
    }
}

/// Increment the last four bytes of `block`, interpreted as a big-endian
/// 32-bit integer, wrapping on overflow. The first twelve bytes are left
/// untouched.
fn inc32(block: &mut [u8; BLOCK_BYTES]) {
    let counter = u32::from_be_bytes(block[12..16].try_into().unwrap());
    block[12..16].copy_from_slice(&counter.wrapping_add(1).to_be_bytes());
}

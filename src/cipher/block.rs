pub mod sm4;
pub(crate) mod galois;
pub(crate) mod shuffle;
mod variant;

pub use sm4::{BLOCK_BYTES, KEY_BYTES, RoundKeys};
pub use variant::Sm4;

/// The encryption half of a [`BlockCipher`].
///
/// Takes a pre-derived round-key schedule rather than a raw key, so a
/// caller encrypting many blocks under one key expands it once and
/// reuses `RoundKeys` across every call.
pub trait BlockEncrypt {
    type RoundKeys;

    fn encrypt_block(&self, rk: &Self::RoundKeys, block: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES];
}

/// The decryption half of a [`BlockCipher`].
pub trait BlockDecrypt {
    type RoundKeys;

    fn decrypt_block(&self, rk: &Self::RoundKeys, block: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES];
}

/// A 128-bit block cipher encrypts and decrypts data one fixed-size block
/// at a time, under a round-key schedule derived ahead of time from the
/// key.
///
/// [`crate::cipher::ctr`] builds a keystream generator on top of this,
/// and [`crate::cipher::aead`] builds authenticated encryption on top of
/// that.
pub trait BlockCipher:
    BlockEncrypt<RoundKeys = <Self as BlockDecrypt>::RoundKeys> + BlockDecrypt
{
}

impl BlockEncrypt for Sm4 {
    type RoundKeys = RoundKeys;

    fn encrypt_block(&self, rk: &RoundKeys, block: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
        Sm4::encrypt_block(*self, rk, block)
    }
}

impl BlockDecrypt for Sm4 {
    type RoundKeys = RoundKeys;

    fn decrypt_block(&self, rk: &RoundKeys, block: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
        Sm4::decrypt_block(*self, rk, block)
    }
}

impl BlockCipher for Sm4 {}

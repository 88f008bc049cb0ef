//! SM4-GCM: authenticated encryption combining [`super::ctr`] with
//! [`crate::ghash`] keyed by the block cipher itself.
//!
//! See [`crate::doc::gcm`] for the construction this follows.

use docext::docext;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::Error;
use crate::ghash::ghash;
use crate::key::Key;
use crate::text::{Ciphertext, Plaintext, Tag};

use super::block::{BLOCK_BYTES, KEY_BYTES, RoundKeys, Sm4};
use super::ctr::Ctr32;

/// The largest plaintext GCM can authenticate: $2^{39} - 256$ bits.
const MAX_PLAINTEXT_BYTES: u64 = (1u64 << 39) / 8 - 32;

/// The largest associated data GCM can authenticate: $2^{64} - 1$ bits.
const MAX_AAD_BYTES: u64 = u64::MAX / 8;

/// An SM4-GCM context bound to a single 128-bit key.
///
/// Construct with [`Sm4Gcm::new`] (which lets the block cipher pick its
/// own fastest constant-time variant) or [`Sm4Gcm::with_variant`] to pin
/// one explicitly. The hash subkey $H = E_K(0^{128})$ is derived once at
/// construction and reused across every [`Self::seal`]/[`Self::open`]
/// call.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Sm4Gcm {
    #[zeroize(skip)]
    variant: Sm4,
    rk: RoundKeys,
    h: [u8; BLOCK_BYTES],
}

impl Sm4Gcm {
    /// Construct a context from a 128-bit key, letting the block cipher
    /// probe the host for its fastest constant-time realization.
    pub fn new(key: Key<[u8; KEY_BYTES]>) -> Self {
        Self::with_variant(key, Sm4::new())
    }

    /// Construct a context from a 128-bit key, pinning a specific SM4
    /// variant rather than probing for one.
    pub fn with_variant(key: Key<[u8; KEY_BYTES]>, variant: Sm4) -> Self {
        let rk = variant.key_schedule(&key.0);
        let h = variant.encrypt_block(&rk, &[0u8; BLOCK_BYTES]);
        Sm4Gcm { variant, rk, h }
    }

    /// Encrypt `plaintext` and authenticate it together with `aad`,
    /// under `nonce`.
    ///
    /// `nonce` may be any non-empty byte string; 12-byte nonces use the
    /// direct construction $J_0 = IV \| 0^{31} \| 1$, any other length is
    /// hashed down to a block via [`crate::ghash`] as described in
    /// [`crate::doc::gcm`]. `tag_len` must be in `1..=16`; shorter tags
    /// trade authentication strength for size and should only be used
    /// when the caller has a specific reason to.
    #[docext]
    pub fn seal(
        &self,
        nonce: &[u8],
        plaintext: Plaintext<&[u8]>,
        aad: &[u8],
        tag_len: usize,
    ) -> Result<(Ciphertext<Vec<u8>>, Tag<Vec<u8>>), Error> {
        validate_tag_len(tag_len)?;
        validate_nonce(nonce)?;
        validate_lengths(plaintext.0.len(), aad.len())?;

        let j0 = self.j0(nonce);
        let s0 = self.variant.encrypt_block(&self.rk, &j0);

        let mut ciphertext = plaintext.0.to_vec();
        let mut ctr = Ctr32::new(j0);
        ctr.apply_keystream(&self.variant, &self.rk, &mut ciphertext);

        let mac = ghash(&self.h, aad, &ciphertext);
        let tag = xor_mask(mac, s0);

        Ok((Ciphertext(ciphertext), Tag(tag[..tag_len].to_vec())))
    }

    /// Verify `tag` against `ciphertext` and `aad` under `nonce`, and
    /// only if it matches, decrypt and return the plaintext.
    ///
    /// The tag comparison is constant-time and happens entirely before
    /// any plaintext is computed, so a caller can never observe partial
    /// decryption of ciphertext that fails authentication.
    pub fn open(
        &self,
        nonce: &[u8],
        ciphertext: Ciphertext<&[u8]>,
        aad: &[u8],
        tag: Tag<&[u8]>,
    ) -> Result<Plaintext<Vec<u8>>, Error> {
        let tag_len = tag.0.len();
        validate_tag_len(tag_len)?;
        validate_nonce(nonce)?;
        validate_lengths(ciphertext.0.len(), aad.len())?;

        let j0 = self.j0(nonce);
        let s0 = self.variant.encrypt_block(&self.rk, &j0);

        let mac = ghash(&self.h, aad, ciphertext.0);
        let mut expected = xor_mask(mac, s0);

        let ok: bool = expected[..tag_len].ct_eq(tag.0).into();
        expected.zeroize();
        if !ok {
            return Err(Error::AuthFailure);
        }

        let mut plaintext = ciphertext.0.to_vec();
        let mut ctr = Ctr32::new(j0);
        ctr.apply_keystream(&self.variant, &self.rk, &mut plaintext);

        Ok(Plaintext(plaintext))
    }

    /// Derive the initial counter block for `nonce`.
    ///
    /// $J_0 = IV \| 0^{31} \| 1$ when $|IV| = 96$ bits. Otherwise $J_0 =
    /// \mathrm{GHASH}_H(IV \| 0^s \| [0]_{64} \| [|IV|]_{64})$, which is
    /// exactly what [`crate::ghash::ghash`] computes when `aad` is empty
    /// and the second input is `IV`: it zero-pads `IV` to a block
    /// boundary, contributes no block for the empty associated-data
    /// input, and appends a length block of `(0, bit_len(IV))`.
    #[docext]
    fn j0(&self, nonce: &[u8]) -> [u8; BLOCK_BYTES] {
        if nonce.len() == 12 {
            let mut j0 = [0u8; BLOCK_BYTES];
            j0[..12].copy_from_slice(nonce);
            j0[15] = 1;
            j0
        } else {
            ghash(&self.h, &[], nonce)
        }
    }
}

fn xor_mask(mut block: [u8; BLOCK_BYTES], mask: [u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
    for (b, m) in block.iter_mut().zip(mask.iter()) {
        *b ^= m;
    }
    block
}

fn validate_tag_len(tag_len: usize) -> Result<(), Error> {
    if (1..=BLOCK_BYTES).contains(&tag_len) {
        Ok(())
    } else {
        Err(Error::InvalidTagLen)
    }
}

fn validate_nonce(nonce: &[u8]) -> Result<(), Error> {
    if nonce.is_empty() {
        Err(Error::InvalidNonce)
    } else {
        Ok(())
    }
}

fn validate_lengths(data_len: usize, aad_len: usize) -> Result<(), Error> {
    if data_len as u64 > MAX_PLAINTEXT_BYTES || aad_len as u64 > MAX_AAD_BYTES {
        Err(Error::InputTooLong)
    } else {
        Ok(())
    }
}

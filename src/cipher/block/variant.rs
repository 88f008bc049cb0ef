//! Runtime selection between the three equivalent SM4 realizations.
//!
//! [`Sm4`] picks a substitution strategy once, at construction, and uses
//! it for every block the context ever processes. There is no build-time
//! feature flag for this: the same binary runs the fast path on hardware
//! that supports it and falls back transparently elsewhere, decided by
//! [`std::is_x86_feature_detected`] at runtime.

use super::sm4::{self, KEY_BYTES, RoundKeys};
use super::{galois, shuffle};

/// An SM4 block cipher context bound to one of three S-box realizations.
///
/// All three variants implement the identical GM/T 0002-2012 round
/// function and must agree byte-for-byte on every key and block; see
/// `test::sm4` for the cross-variant equivalence checks. Construct with
/// [`Sm4::new`] to let the context probe the host for its fastest
/// available realization, or with one of the `new_*` constructors to pin
/// a specific one (useful for testing, or for forcing the portable path
/// on hardware whose shuffle instructions can't be trusted).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sm4 {
    /// Plain 256-byte table lookup. Not constant-time.
    Scalar,
    /// Sixteen 16-byte sub-tables selected by masked comparison, or
    /// `pshufb` on `x86_64` with `SSSE3`.
    Shuffle,
    /// Algebraic-normal-form Boolean evaluation. Constant-time and
    /// platform-independent, at a throughput cost.
    Galois,
}

impl Sm4 {
    /// Probe the host for the fastest realization that's both available
    /// and constant-time, preferring the hardware-accelerated shuffle
    /// path, then falling back to the portable Galois evaluator.
    ///
    /// This never selects [`Sm4::Scalar`], since it isn't constant-time;
    /// use [`Sm4::new_scalar`] explicitly if that's what's wanted (for
    /// example, to cross-check the other two in tests).
    pub fn new() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::is_x86_feature_detected!("ssse3") {
                return Sm4::Shuffle;
            }
        }
        Sm4::Galois
    }

    /// Force the plain table-lookup realization.
    pub fn new_scalar() -> Self {
        Sm4::Scalar
    }

    /// Force the byte-shuffle realization, whether or not `SSSE3` is
    /// available (the portable fallback within it is still
    /// constant-time, just slower).
    pub fn new_shuffle() -> Self {
        Sm4::Shuffle
    }

    /// Force the algebraic-normal-form realization.
    pub fn new_galois() -> Self {
        Sm4::Galois
    }

    fn sbox(self) -> sm4::SboxFn {
        match self {
            Sm4::Scalar => sm4::sbox_scalar,
            Sm4::Shuffle => shuffle::sbox_shuffle,
            Sm4::Galois => galois::sbox_galois,
        }
    }

    /// Derive the round-key schedule for `key` using this variant's
    /// S-box realization.
    pub fn key_schedule(self, key: &[u8; KEY_BYTES]) -> RoundKeys {
        sm4::key_schedule(key, self.sbox())
    }

    /// Encrypt one 16-byte block under `rk`.
    pub fn encrypt_block(self, rk: &RoundKeys, block: &[u8; 16]) -> [u8; 16] {
        sm4::encrypt_block(rk, block, self.sbox())
    }

    /// Decrypt one 16-byte block under `rk`.
    pub fn decrypt_block(self, rk: &RoundKeys, block: &[u8; 16]) -> [u8; 16] {
        sm4::decrypt_block(rk, block, self.sbox())
    }
}

impl Default for Sm4 {
    fn default() -> Self {
        Sm4::new()
    }
}

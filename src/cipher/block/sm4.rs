//! SM4 is the block cipher standardized as GM/T 0002-2012.
//!
//! SM4 works on 128-bit blocks with a 128-bit key, 32 rounds. Each round
//! mixes three of the four running words with a round key, passes the
//! result through a byte-wise non-linear substitution (the [S-box](S_BOX)),
//! and then through a linear diffusion layer built from four rotations,
//! before XORing the result back into the remaining word. Unlike AES, the
//! same S-box and round structure are used for both encryption and
//! decryption — decryption simply runs the round keys in reverse order.
//!
//! This module implements the scalar reference. [`crate::cipher::block`]
//! also ships [byte-shuffle](super::shuffle) and
//! [algebraic-normal-form](super::galois) realizations of the S-box that are
//! required to produce bit-identical output to this one; see
//! [`super::variant`] for how a cipher context picks between them.
//!
//! See [`crate::doc::sm4`] for a walkthrough of the construction.

use zeroize::Zeroize;

/// SM4 operates on 128-bit (16-byte) blocks and keys.
pub const BLOCK_BYTES: usize = 16;

/// SM4 keys are 128 bits.
pub const KEY_BYTES: usize = 16;

/// Number of rounds in the SM4 round function.
const ROUNDS: usize = 32;

/// A function realizing the SM4 S-box: a fixed, non-linear byte
/// substitution. [`sbox_scalar`], [`super::shuffle::sbox_shuffle`], and
/// [`super::galois::sbox_galois`] must all agree on every input.
pub type SboxFn = fn(u8) -> u8;

/// The canonical SM4 substitution table, defined by GM/T 0002-2012.
///
/// Verified against the single-block test vector in §8(a) of the crate's
/// design notes: the source this crate was grounded on ships three copies
/// of this table, two of which are corrupted past the first eight rows
/// (duplicated/overlapping bytes); this is the corrected, canonical form.
pub const S_BOX: [u8; 256] = [
    0xd6, 0x90, 0xe9, 0xfe, 0xcc, 0xe1, 0x3d, 0xb7, 0x16, 0xb6, 0x14, 0xc2, 0x28, 0xfb, 0x2c, 0x05,
    0x2b, 0x67, 0x9a, 0x76, 0x2a, 0xbe, 0x04, 0xc3, 0xaa, 0x44, 0x13, 0x26, 0x49, 0x86, 0x06, 0x99,
    0x9c, 0x42, 0x50, 0xf4, 0x91, 0xef, 0x98, 0x7a, 0x33, 0x54, 0x0b, 0x43, 0xed, 0xcf, 0xac, 0x62,
    0xe4, 0xb3, 0x1c, 0xa9, 0xc9, 0x08, 0xe8, 0x95, 0x80, 0xdf, 0x94, 0xfa, 0x75, 0x8f, 0x3f, 0xa6,
    0x47, 0x07, 0xa7, 0xfc, 0xf3, 0x73, 0x17, 0xba, 0x83, 0x59, 0x3c, 0x19, 0xe6, 0x85, 0x4f, 0xa8,
    0x68, 0x6b, 0x81, 0xb2, 0x71, 0x64, 0xda, 0x8b, 0xf8, 0xeb, 0x0f, 0x4b, 0x70, 0x56, 0x9d, 0x35,
    0x1e, 0x24, 0x0e, 0x5e, 0x63, 0x58, 0xd1, 0xa2, 0x25, 0x22, 0x7c, 0x3b, 0x01, 0x21, 0x78, 0x87,
    0xd4, 0x00, 0x46, 0x57, 0x9f, 0xd3, 0x27, 0x52, 0x4c, 0x36, 0x02, 0xe7, 0xa0, 0xc4, 0xc8, 0x9e,
    0xea, 0xbf, 0x8a, 0xd2, 0x40, 0xc7, 0x38, 0xb5, 0xa3, 0xf7, 0xf2, 0xce, 0xf9, 0x61, 0x15, 0xa1,
    0xe0, 0xae, 0x5d, 0xa4, 0x9b, 0x34, 0x1a, 0x55, 0xad, 0x93, 0x32, 0x30, 0xf5, 0x8c, 0xb1, 0xe3,
    0x1d, 0xf6, 0xe2, 0x2e, 0x82, 0x66, 0xca, 0x60, 0xc0, 0x29, 0x23, 0xab, 0x0d, 0x53, 0x4e, 0x6f,
    0xd5, 0xdb, 0x37, 0x45, 0xde, 0xfd, 0x8e, 0x2f, 0x03, 0xff, 0x6a, 0x72, 0x6d, 0x6c, 0x5b, 0x51,
    0x8d, 0x1b, 0xaf, 0x92, 0xbb, 0xdd, 0xbc, 0x7f, 0x11, 0xd9, 0x5c, 0x41, 0x1f, 0x10, 0x5a, 0xd8,
    0x0a, 0xc1, 0x31, 0x88, 0xa5, 0xcd, 0x7b, 0xbd, 0x2d, 0x74, 0xd0, 0x12, 0xb8, 0xe5, 0xb4, 0xb0,
    0x89, 0x69, 0x97, 0x4a, 0x0c, 0x96, 0x77, 0x7e, 0x65, 0xb9, 0xf1, 0x09, 0xc5, 0x6e, 0xc6, 0x84,
    0x18, 0xf0, 0x7d, 0xec, 0x3a, 0xdc, 0x4d, 0x20, 0x79, 0xee, 0x5f, 0x3e, 0xd7, 0xcb, 0x39, 0x48,
];

/// The system parameter $FK_0..FK_3$ used to mask the master key before key
/// schedule expansion, defined by GM/T 0002-2012.
pub const FK: [u32; 4] = [0xA3B1BAC6, 0x56AA3350, 0x677D9197, 0xB27022DC];

/// The fixed parameters $CK_0..CK_{31}$ used in the key schedule.
///
/// Each word's bytes are $(4i+j) \cdot 7 \bmod 256$ for $j = 0..3$; computed
/// here from that definition rather than transcribed, so there's no table
/// to get wrong independently of the formula in the standard.
pub const CK: [u32; 32] = ck_table();

const fn ck_table() -> [u32; 32] {
    let mut ck = [0u32; 32];
    let mut i = 0;
    while i < 32 {
        let b0 = ((4 * i) * 7 % 256) as u8;
        let b1 = ((4 * i + 1) * 7 % 256) as u8;
        let b2 = ((4 * i + 2) * 7 % 256) as u8;
        let b3 = ((4 * i + 3) * 7 % 256) as u8;
        ck[i] = u32::from_be_bytes([b0, b1, b2, b3]);
        i += 1;
    }
    ck
}

/// The S-box realization used by the scalar reference: a plain 256-byte
/// table lookup.
///
/// This is **not** constant-time: the memory access pattern depends on the
/// secret byte `x`. It's kept as the reference implementation for its
/// simplicity and because it's what the other two variants are checked
/// against, not for use where side-channel resistance matters — prefer
/// [`super::shuffle::sbox_shuffle`] or [`super::galois::sbox_galois`] for
/// that.
pub fn sbox_scalar(x: u8) -> u8 {
    S_BOX[x as usize]
}

/// The expanded round-key schedule derived from a 128-bit master key.
///
/// Immutable once constructed. Zeroized on drop, since it's recoverable
/// back to the master key in the sense that it's equally sensitive
/// material.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct RoundKeys(pub(crate) [u32; ROUNDS]);

/// Derive the round-key schedule from `key`, using `sbox` for the
/// substitution step of the key-schedule transform $T'$.
///
/// $K_0..K_3 = MK_0..MK_3 \oplus FK_0..FK_3$; for $i = 0..31$, $K_{i+4} =
/// K_i \oplus T'(K_{i+1} \oplus K_{i+2} \oplus K_{i+3} \oplus CK_i)$, and
/// $RK_i = K_{i+4}$.
pub fn key_schedule(key: &[u8; KEY_BYTES], sbox: SboxFn) -> RoundKeys {
    let mk = [
        u32::from_be_bytes(key[0..4].try_into().unwrap()),
        u32::from_be_bytes(key[4..8].try_into().unwrap()),
        u32::from_be_bytes(key[8..12].try_into().unwrap()),
        u32::from_be_bytes(key[12..16].try_into().unwrap()),
    ];

    let mut k = [0u32; ROUNDS + 4];
    for i in 0..4 {
        k[i] = mk[i] ^ FK[i];
    }

    let mut rk = [0u32; ROUNDS];
    for i in 0..ROUNDS {
        let x = k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i];
        k[i + 4] = k[i] ^ t_prime(x, sbox);
        rk[i] = k[i + 4];
    }

    RoundKeys(rk)
}

/// Run the SM4 round function forward over `block` using `rk` in order
/// (encryption) and substitution function `sbox`.
pub fn encrypt_block(rk: &RoundKeys, block: &[u8; BLOCK_BYTES], sbox: SboxFn) -> [u8; BLOCK_BYTES] {
    crypt(rk, block, sbox, false)
}

/// Run the SM4 round function over `block` using `rk` in reverse order
/// (decryption) and substitution function `sbox`.
pub fn decrypt_block(rk: &RoundKeys, block: &[u8; BLOCK_BYTES], sbox: SboxFn) -> [u8; BLOCK_BYTES] {
    crypt(rk, block, sbox, true)
}

fn crypt(rk: &RoundKeys, block: &[u8; BLOCK_BYTES], sbox: SboxFn, reverse: bool) -> [u8; BLOCK_BYTES] {
    let mut x = [0u32; ROUNDS + 4];
    for i in 0..4 {
        x[i] = u32::from_be_bytes(block[i * 4..i * 4 + 4].try_into().unwrap());
    }

    for i in 0..ROUNDS {
        let round_key = if reverse { rk.0[ROUNDS - 1 - i] } else { rk.0[i] };
        let t = x[i + 1] ^ x[i + 2] ^ x[i + 3] ^ round_key;
        x[i + 4] = x[i] ^ t_fn(t, sbox);
    }

    let mut out = [0u8; BLOCK_BYTES];
    out[0..4].copy_from_slice(&x[ROUNDS + 3].to_be_bytes());
    out[4..8].copy_from_slice(&x[ROUNDS + 2].to_be_bytes());
    out[8..12].copy_from_slice(&x[ROUNDS + 1].to_be_bytes());
    out[12..16].copy_from_slice(&x[ROUNDS].to_be_bytes());
    out
}

/// $T(x) = L(\tau(x))$: the round transform, substitution followed by the
/// round diffusion layer.
fn t_fn(x: u32, sbox: SboxFn) -> u32 {
    l_transform(tau(x, sbox))
}

/// $T'(x) = L'(\tau(x))$: the key-schedule transform, substitution
/// followed by the lighter key-schedule diffusion layer.
fn t_prime(x: u32, sbox: SboxFn) -> u32 {
    l_prime_transform(tau(x, sbox))
}

/// $\tau$: apply the S-box to each of the four bytes of `x`.
fn tau(x: u32, sbox: SboxFn) -> u32 {
    let bytes = x.to_be_bytes().map(sbox);
    u32::from_be_bytes(bytes)
}

/// $L(b) = b \oplus (b \lll 2) \oplus (b \lll 10) \oplus (b \lll 18) \oplus
/// (b \lll 24)$.
fn l_transform(b: u32) -> u32 {
    b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
}

/// $L'(b) = b \oplus (b \lll 13) \oplus (b \lll 23)$.
fn l_prime_transform(b: u32) -> u32 {
    b ^ b.rotate_left(13) ^ b.rotate_left(23)
}

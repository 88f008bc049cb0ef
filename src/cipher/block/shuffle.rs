//! A byte-shuffle realization of the SM4 S-box.
//!
//! Splits [`super::sm4::S_BOX`] into sixteen 16-byte sub-tables, one per
//! high nibble, and selects both the sub-table and the entry within it by
//! a branchless equality mask rather than by indexing — a single 16-byte
//! shuffle keyed only on the low nibble is not enough to reconstruct the
//! full table, since distinct high nibbles map to unrelated rows.
//!
//! On `x86_64` with `SSSE3` available, the same row/column selection is
//! done sixteen bytes at a time with `pshufb`, which is exactly the
//! instruction this construction is shaped around.

use super::sm4::S_BOX;

/// Sub-tables of [`S_BOX`], one per high nibble: `ROWS[h][l]` is
/// `S_BOX[h << 4 | l]`.
const ROWS: [[u8; 16]; 16] = {
    let mut rows = [[0u8; 16]; 16];
    let mut h = 0;
    while h < 16 {
        let mut l = 0;
        while l < 16 {
            rows[h][l] = S_BOX[h * 16 + l];
            l += 1;
        }
        h += 1;
    }
    rows
};

/// The S-box realization for the byte-shuffle variant.
///
/// Selects a row by the high nibble of `x` and a byte within that row by
/// the low nibble, both via constant-time masked selection: every branch
/// below runs unconditionally over all sixteen candidates; only the
/// `mask` changes, so there is no data-dependent control flow or memory
/// address.
pub fn sbox_shuffle(x: u8) -> u8 {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("ssse3") {
            // SAFETY: guarded by the ssse3 runtime check above.
            return unsafe { sbox_shuffle_ssse3(x) };
        }
    }
    sbox_shuffle_portable(x)
}

fn sbox_shuffle_portable(x: u8) -> u8 {
    let hi = (x >> 4) as usize;
    let lo = (x & 0x0f) as usize;

    let mut row = [0u8; 16];
    for (h, candidate) in ROWS.iter().enumerate() {
        let mask = 0u8.wrapping_sub((h == hi) as u8);
        for j in 0..16 {
            row[j] |= candidate[j] & mask;
        }
    }

    let mut out = 0u8;
    for (l, byte) in row.iter().enumerate() {
        let mask = 0u8.wrapping_sub((l == lo) as u8);
        out |= byte & mask;
    }
    out
}

/// Apply [`sbox_shuffle`] to every byte of a full block in one pass, using
/// two `pshufb` shuffles (one per nibble) when `SSSE3` is available.
///
/// Falls back to sixteen scalar [`sbox_shuffle`] calls otherwise. Used by
/// [`super::variant`] to substitute an entire round word at once.
pub fn sbox_shuffle_block(block: &mut [u8; 16]) {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("ssse3") {
            // SAFETY: guarded by the ssse3 runtime check above.
            unsafe { sbox_shuffle_block_ssse3(block) };
            return;
        }
    }
    for byte in block.iter_mut() {
        *byte = sbox_shuffle_portable(*byte);
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "ssse3")]
unsafe fn sbox_shuffle_ssse3(x: u8) -> u8 {
    let mut block = [x; 16];
    sbox_shuffle_block_ssse3(&mut block);
    block[0]
}

/// One `pshufb` per high-nibble row, sixteen rows, each masked in with a
/// `pcmpeqb` against the broadcast high nibble, matching the portable
/// construction above but sixteen bytes wide.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "ssse3")]
unsafe fn sbox_shuffle_block_ssse3(block: &mut [u8; 16]) {
    use std::arch::x86_64::*;

    let x = _mm_loadu_si128(block.as_ptr() as *const __m128i);
    let low_mask = _mm_set1_epi8(0x0f);
    let lo = _mm_and_si128(x, low_mask);
    let hi = _mm_and_si128(_mm_srli_epi16(x, 4), low_mask);

    let mut acc = _mm_setzero_si128();
    for (h, row) in ROWS.iter().enumerate() {
        let table = _mm_loadu_si128(row.as_ptr() as *const __m128i);
        let shuffled = _mm_shuffle_epi8(table, lo);
        let h_vec = _mm_set1_epi8(h as i8);
        let mask = _mm_cmpeq_epi8(hi, h_vec);
        acc = _mm_or_si128(acc, _mm_and_si128(shuffled, mask));
    }

    _mm_storeu_si128(block.as_mut_ptr() as *mut __m128i, acc);
}

//! A GF(2) algebraic-normal-form realization of the SM4 S-box.
//!
//! Every output bit of [`super::sm4::S_BOX`] is a Boolean function of the
//! eight input bits, and every Boolean function has a unique
//! representation as a polynomial over $GF(2)$ in algebraic normal form
//! (ANF): a sum (XOR) of products (AND) of input bits. This module
//! derives those eight polynomials mechanically from the table, once,
//! via the Mobius transform, and evaluates them directly — so producing
//! a substituted byte never reads the table at a secret-dependent
//! address; it only does bitwise AND/XOR against a running byte and a
//! public loop counter.
//!
//! This is the slowest of the three variants (2048 bitwise ops per byte)
//! and exists as a software fallback with no platform-specific
//! intrinsics and no dependence on `S_BOX` access patterns at all.

use super::sm4::S_BOX;
use std::sync::OnceLock;

/// `coefficients()[bit][m]` is the algebraic-normal-form coefficient of
/// the monomial with bitmask `m` in the polynomial for output bit `bit`
/// (0 = least significant) of the S-box.
fn coefficients() -> &'static [[bool; 256]; 8] {
    static TABLES: OnceLock<[[bool; 256]; 8]> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut tables = [[false; 256]; 8];
        for (bit, table) in tables.iter_mut().enumerate() {
            for (x, coeff) in table.iter_mut().enumerate() {
                *coeff = (S_BOX[x] >> bit) & 1 == 1;
            }
            mobius_transform(table);
        }
        tables
    })
}

/// In-place Mobius transform over $GF(2)$: rewrites a truth table indexed
/// by input assignment into algebraic-normal-form coefficients indexed
/// by monomial, via the standard XOR subset-sum recurrence, one input
/// bit at a time.
fn mobius_transform(f: &mut [bool; 256]) {
    for bit in 0..8 {
        let stride = 1usize << bit;
        for x in 0..256 {
            if x & stride != 0 {
                f[x] ^= f[x ^ stride];
            }
        }
    }
}

/// The S-box realization for the ANF/Boolean-circuit variant.
///
/// For each output bit, sums (XORs) every monomial whose coefficient is
/// set, evaluating "is every bit this monomial needs present in `x`" with
/// a comparison rather than an index. The loop always runs all 256
/// monomials for all 8 bits regardless of `x`.
pub fn sbox_galois(x: u8) -> u8 {
    let tables = coefficients();
    let mut out = 0u8;
    for (bit, table) in tables.iter().enumerate() {
        let mut acc = 0u8;
        for (m, coeff) in table.iter().enumerate() {
            let term = ((x as usize & m) == m) as u8;
            acc ^= (*coeff as u8) & term;
        }
        out |= acc << bit;
    }
    out
}

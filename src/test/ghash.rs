use crate::ghash::ghash;

/// With no associated data and no ciphertext, the only block folded in
/// is the length block, and both lengths are zero — so the whole
/// evaluation multiplies the all-zero block by `H` and is zero
/// regardless of `H`.
#[test]
fn empty_input_hashes_to_zero() {
    let hs: [[u8; 16]; 2] = [[0u8; 16], [0xab; 16]];
    for h in hs {
        assert_eq!(ghash(&h, &[], &[]), [0u8; 16]);
    }
}

/// A zero hash subkey collapses every evaluation to zero, since every
/// folding step multiplies by `H`.
#[test]
fn zero_subkey_hashes_everything_to_zero() {
    let h = [0u8; 16];
    assert_eq!(ghash(&h, b"associated data", b"some ciphertext"), [0u8; 16]);
}

/// Inputs that differ shouldn't (for these particular, non-adversarial
/// choices) hash to the same value.
#[test]
fn different_inputs_hash_differently() {
    let h = [0x42; 16];
    let a = ghash(&h, b"aad", b"ciphertext one");
    let b = ghash(&h, b"aad", b"ciphertext two");
    assert_ne!(a, b);
}

/// A non-block-aligned final block is still sensitive to every one of
/// its real bytes, not just the ones that happen to land in a full
/// 16-byte multiple.
#[test]
fn final_short_block_is_sensitive_to_its_last_byte() {
    let h = [0x07; 16];
    let a = [0xaa; 15];
    let mut b = a;
    b[14] ^= 0x01;

    assert_ne!(ghash(&h, &a, &[]), ghash(&h, &b, &[]));
}

use crate::cipher::Sm4Gcm;
use crate::text::{Ciphertext, Plaintext, Tag};
use crate::{Error, Key};

const KEY: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

fn ctx() -> Sm4Gcm {
    Sm4Gcm::new(Key(KEY))
}

#[test]
fn seals_and_opens_with_a_12_byte_nonce() {
    let gcm = ctx();
    let nonce = [0x01; 12];
    let plaintext = b"the quick brown fox jumps over the lazy dog";

    let (ciphertext, tag) = gcm
        .seal(&nonce, Plaintext(plaintext), b"header", 16)
        .unwrap();
    assert_ne!(ciphertext.0, plaintext);

    let recovered = gcm
        .open(&nonce, Ciphertext(&ciphertext.0), b"header", Tag(&tag.0))
        .unwrap();
    assert_eq!(recovered.0, plaintext);
}

#[test]
fn seals_and_opens_with_empty_plaintext_and_aad() {
    let gcm = ctx();
    let nonce = [0x02; 12];

    let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(b""), b"", 16).unwrap();
    assert!(ciphertext.0.is_empty());

    let recovered = gcm
        .open(&nonce, Ciphertext(&ciphertext.0), b"", Tag(&tag.0))
        .unwrap();
    assert!(recovered.0.is_empty());
}

/// Nonces that aren't 12 bytes take the general GHASH-based path.
#[test]
fn round_trips_with_non_standard_nonce_lengths() {
    let gcm = ctx();
    let plaintext = b"non-standard nonce length";

    for nonce_len in [1usize, 7, 16, 32, 64] {
        let nonce = vec![0x5a; nonce_len];
        let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(plaintext), b"aad", 16).unwrap();
        let recovered = gcm
            .open(&nonce, Ciphertext(&ciphertext.0), b"aad", Tag(&tag.0))
            .unwrap();
        assert_eq!(recovered.0, plaintext, "round trip failed for nonce_len = {nonce_len}");
    }
}

#[test]
fn rejects_empty_nonce() {
    let gcm = ctx();
    assert_eq!(
        gcm.seal(&[], Plaintext(b"x"), b"", 16).unwrap_err(),
        Error::InvalidNonce
    );
}

#[test]
fn rejects_tampered_ciphertext() {
    let gcm = ctx();
    let nonce = [0x03; 12];
    let (mut ciphertext, tag) = gcm.seal(&nonce, Plaintext(b"hello world"), b"", 16).unwrap();
    ciphertext.0[0] ^= 0x01;

    assert_eq!(
        gcm.open(&nonce, Ciphertext(&ciphertext.0), b"", Tag(&tag.0))
            .unwrap_err(),
        Error::AuthFailure
    );
}

#[test]
fn rejects_tampered_aad() {
    let gcm = ctx();
    let nonce = [0x04; 12];
    let (ciphertext, tag) = gcm
        .seal(&nonce, Plaintext(b"hello world"), b"original aad", 16)
        .unwrap();

    assert_eq!(
        gcm.open(&nonce, Ciphertext(&ciphertext.0), b"different aad", Tag(&tag.0))
            .unwrap_err(),
        Error::AuthFailure
    );
}

#[test]
fn rejects_tampered_tag() {
    let gcm = ctx();
    let nonce = [0x05; 12];
    let (ciphertext, mut tag) = gcm.seal(&nonce, Plaintext(b"hello world"), b"", 16).unwrap();
    tag.0[0] ^= 0x01;

    assert_eq!(
        gcm.open(&nonce, Ciphertext(&ciphertext.0), b"", Tag(&tag.0))
            .unwrap_err(),
        Error::AuthFailure
    );
}

#[test]
fn supports_truncated_tags() {
    let gcm = ctx();
    let nonce = [0x06; 12];
    let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(b"short tag"), b"", 4).unwrap();
    assert_eq!(tag.0.len(), 4);

    let recovered = gcm
        .open(&nonce, Ciphertext(&ciphertext.0), b"", Tag(&tag.0))
        .unwrap();
    assert_eq!(recovered.0, b"short tag");
}

#[test]
fn rejects_out_of_range_tag_lengths() {
    let gcm = ctx();
    let nonce = [0x07; 12];
    assert_eq!(
        gcm.seal(&nonce, Plaintext(b"x"), b"", 0).unwrap_err(),
        Error::InvalidTagLen
    );
    assert_eq!(
        gcm.seal(&nonce, Plaintext(b"x"), b"", 17).unwrap_err(),
        Error::InvalidTagLen
    );
}

/// Encrypting the same plaintext under two different nonces must not
/// produce the same ciphertext, since that would indicate keystream
/// reuse.
#[test]
fn different_nonces_produce_different_ciphertext() {
    let gcm = ctx();
    let plaintext = b"same plaintext every time";
    let (c1, _) = gcm.seal(&[0x01; 12], Plaintext(plaintext), b"", 16).unwrap();
    let (c2, _) = gcm.seal(&[0x02; 12], Plaintext(plaintext), b"", 16).unwrap();
    assert_ne!(c1.0, c2.0);
}

/// The all-zero vector: zero key, zero 12-byte IV, no AAD, no
/// plaintext. The exact tag is pinned by the construction (it's
/// `GHASH` of the length block alone, masked by `E_K(J0)`), but not
/// reproduced here as a literal constant since it depends on the key
/// schedule and can't be hand-verified; checked structurally and via
/// round trip instead.
#[test]
fn all_zero_vector() {
    let gcm = Sm4Gcm::new(Key([0u8; 16]));
    let nonce = [0u8; 12];

    let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(b""), b"", 16).unwrap();
    assert!(ciphertext.0.is_empty());
    assert_eq!(tag.0.len(), 16);

    let recovered = gcm
        .open(&nonce, Ciphertext(&ciphertext.0), b"", Tag(&tag.0))
        .unwrap();
    assert!(recovered.0.is_empty());
}

/// A fixed key/IV/AAD/plaintext combination with a partial final block,
/// checked for tamper detection on both the ciphertext and the AAD —
/// the two boundary cases the construction calls out explicitly.
#[test]
fn partial_block_vector_detects_tampering() {
    let gcm = ctx();
    let nonce: [u8; 12] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b];
    let aad = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
    let plaintext = b"sm4-gcmtestandhowareyou";
    assert_eq!(plaintext.len(), 23);

    let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(plaintext), &aad, 16).unwrap();
    assert_eq!(ciphertext.0.len(), 23);
    assert_eq!(tag.0.len(), 16);

    let recovered = gcm
        .open(&nonce, Ciphertext(&ciphertext.0), &aad, Tag(&tag.0))
        .unwrap();
    assert_eq!(recovered.0, plaintext);

    let mut tampered_ct = ciphertext.0.clone();
    tampered_ct[0] ^= 0x01;
    assert_eq!(
        gcm.open(&nonce, Ciphertext(&tampered_ct), &aad, Tag(&tag.0))
            .unwrap_err(),
        Error::AuthFailure
    );

    let mut tampered_aad = aad;
    tampered_aad[0] ^= 0x01;
    assert_eq!(
        gcm.open(&nonce, Ciphertext(&ciphertext.0), &tampered_aad, Tag(&tag.0))
            .unwrap_err(),
        Error::AuthFailure
    );
}

/// Plaintext lengths straddling every interesting boundary: empty, one
/// byte short of a block, exactly a block, one byte over, and several
/// blocks crossing the low-32-bit counter arithmetic.
#[test]
fn round_trips_boundary_lengths() {
    let gcm = ctx();
    let nonce = [0x09; 12];

    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 256, 4096] {
        let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(&plaintext), b"", 16).unwrap();
        assert_eq!(ciphertext.0.len(), len);

        let recovered = gcm
            .open(&nonce, Ciphertext(&ciphertext.0), b"", Tag(&tag.0))
            .unwrap();
        assert_eq!(recovered.0, plaintext, "round trip failed for len = {len}");
    }
}

/// Associated data that isn't a multiple of the block size exercises
/// GHASH's zero-padding on its own final short block, independent of
/// whatever padding the ciphertext needs.
#[test]
fn round_trips_non_block_aligned_aad() {
    let gcm = ctx();
    let nonce = [0x0a; 12];
    let plaintext = b"fixed plaintext";

    for aad_len in [0usize, 1, 15, 17, 100] {
        let aad: Vec<u8> = (0..aad_len).map(|i| i as u8).collect();
        let (ciphertext, tag) = gcm.seal(&nonce, Plaintext(plaintext), &aad, 16).unwrap();
        let recovered = gcm
            .open(&nonce, Ciphertext(&ciphertext.0), &aad, Tag(&tag.0))
            .unwrap();
        assert_eq!(recovered.0, plaintext);
    }
}

/// A plaintext spanning many keystream blocks exercises the 32-bit
/// counter increment across block boundaries.
#[test]
fn round_trips_multi_block_plaintext() {
    let gcm = ctx();
    let nonce = [0x08; 12];
    let plaintext: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

    let (ciphertext, tag) = gcm
        .seal(&nonce, Plaintext(&plaintext), b"multi-block", 16)
        .unwrap();
    let recovered = gcm
        .open(&nonce, Ciphertext(&ciphertext.0), b"multi-block", Tag(&tag.0))
        .unwrap();
    assert_eq!(recovered.0, plaintext);
}

use crate::cipher::block::galois::sbox_galois;
use crate::cipher::block::shuffle::sbox_shuffle;
use crate::cipher::block::sm4::{decrypt_block, encrypt_block, key_schedule};
use crate::cipher::block::{sm4::sbox_scalar, Sm4};

const KEY: [u8; 16] = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
];

/// The single-block example from GM/T 0002-2012: encrypting the key
/// material against itself.
#[test]
fn gmt_single_block_vector() {
    let rk = key_schedule(&KEY, sbox_scalar);
    let ciphertext = encrypt_block(&rk, &KEY, sbox_scalar);
    assert_eq!(
        ciphertext,
        [
            0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f, 0x53, 0x6e,
            0x42, 0x46,
        ]
    );

    let plaintext = decrypt_block(&rk, &ciphertext, sbox_scalar);
    assert_eq!(plaintext, KEY);
}

/// GM/T 0002-2012's one-million-round vector: encrypting the same block
/// under the same key repeatedly. A slow but effective way of pinning
/// down the entire key schedule and round function at once, since any
/// single-bit error compounds across a million rounds.
#[test]
fn gmt_one_million_rounds_vector() {
    let rk = key_schedule(&KEY, sbox_scalar);
    let mut block = KEY;
    for _ in 0..1_000_000 {
        block = encrypt_block(&rk, &block, sbox_scalar);
    }
    assert_eq!(
        block,
        [
            0x59, 0x52, 0x98, 0xc7, 0xc6, 0xfd, 0x27, 0x1f, 0x04, 0x02, 0xf8, 0x04, 0xc3, 0x3d,
            0x3f, 0x66,
        ]
    );
}

/// Every S-box realization must agree with the canonical table on every
/// one of the 256 possible input bytes, not just the handful probed by
/// the block-level vectors above.
#[test]
fn sboxes_agree_on_every_byte() {
    use crate::cipher::block::sm4::S_BOX;

    for x in 0u8..=255 {
        assert_eq!(sbox_shuffle(x), S_BOX[x as usize], "shuffle disagrees at {x:#04x}");
        assert_eq!(sbox_galois(x), S_BOX[x as usize], "galois disagrees at {x:#04x}");
    }
}

const VARIANTS: [Sm4; 3] = [Sm4::Scalar, Sm4::Shuffle, Sm4::Galois];

/// All three variants must be bit-identical on arbitrary blocks, not
/// just the zero/identity cases the unit vectors happen to cover.
#[test]
fn variants_agree_on_encryption() {
    let blocks: [[u8; 16]; 3] = [
        [0u8; 16],
        [0xff; 16],
        [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ],
    ];

    for variant in VARIANTS {
        let rk = variant.key_schedule(&KEY);
        for block in blocks {
            let ciphertext = variant.encrypt_block(&rk, &block);
            assert_eq!(
                ciphertext,
                encrypt_block(&key_schedule(&KEY, sbox_scalar), &block, sbox_scalar),
                "variant {variant:?} disagrees with the scalar reference"
            );
        }
    }
}

/// Encrypting then decrypting any block returns the original, under
/// every variant.
#[test]
fn variants_round_trip() {
    let block = [
        0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xf0, 0x0d, 0xca,
        0xfe,
    ];

    for variant in VARIANTS {
        let rk = variant.key_schedule(&KEY);
        let ciphertext = variant.encrypt_block(&rk, &block);
        let plaintext = variant.decrypt_block(&rk, &ciphertext);
        assert_eq!(plaintext, block);
    }
}

/// [`Sm4::new`] never picks the non-constant-time scalar realization.
#[test]
fn default_selection_avoids_scalar() {
    assert_ne!(Sm4::new(), Sm4::Scalar);
}

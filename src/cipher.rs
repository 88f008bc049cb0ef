pub mod block;
pub mod aead;
pub mod ctr;

pub use aead::Sm4Gcm;
pub use block::{BlockCipher, BlockDecrypt, BlockEncrypt, Sm4};

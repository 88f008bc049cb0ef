
#[cfg(doc)]
pub mod doc;

mod cipher;
mod error;
mod gf128;
mod ghash;
mod key;
mod text;

pub use {
    cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, Sm4, Sm4Gcm},
    error::Error,
    key::Key,
    text::{Ciphertext, Plaintext, Tag},
};

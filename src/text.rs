/// Unencrypted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext<T>(pub T);

/// Encrypted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext<T>(pub T);

/// An authentication tag produced or verified by an AEAD operation.
///
/// Unlike [`Plaintext`] and [`Ciphertext`], a tag is never secret on its own
/// (it travels alongside the ciphertext), but it's still wrapped so it can't
/// be confused with plaintext or ciphertext bytes at a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<T>(pub T);

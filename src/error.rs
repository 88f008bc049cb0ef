use std::fmt;

/// Everything that can go wrong when setting up or running an SM4-GCM
/// operation.
///
/// `AuthFailure` is the only variant `open` may return on well-formed
/// input, and it must never be distinguishable (by value, message, or
/// timing) from any other internal cause of a failed verification — see
/// the constant-time tag comparison in [`crate::cipher::Sm4Gcm::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The IV length is not supported by this implementation's IV handling
    /// (see `Sm4Gcm`'s constructor docs for which lengths are accepted).
    InvalidNonce,
    /// `tag_len` was not in `1..=16`.
    InvalidTagLen,
    /// The plaintext or associated data exceeds the length GCM can
    /// authenticate (2^39 - 256 bits of plaintext, 2^64 - 1 bits of AAD).
    InputTooLong,
    /// The authentication tag did not match during `open`. No plaintext is
    /// released when this is returned.
    AuthFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidNonce => "unsupported IV length",
            Error::InvalidTagLen => "tag_len must be in 1..=16",
            Error::InputTooLong => "plaintext or associated data exceeds the GCM length limit",
            Error::AuthFailure => "authentication tag mismatch",
        })
    }
}

impl std::error::Error for Error {}

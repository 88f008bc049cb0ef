use zeroize::Zeroize;

/// Encryption/decryption key.
///
/// Wraps secret key material of any fixed-size representation `T`. The
/// wrapped value is zeroized when the `Key` is dropped, so callers do not
/// need to scrub key bytes themselves once they're handed off to a cipher
/// context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key<T: Zeroize>(pub T);

impl<T: Zeroize> Drop for Key<T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

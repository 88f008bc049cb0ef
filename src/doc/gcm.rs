//! The Galois/Counter Mode construction, as used here over SM4.
//!
//! GCM combines two primitives: encrypting the plaintext with a block
//! cipher in a restricted counter mode, and authenticating the
//! associated data and ciphertext together with GHASH, a universal hash
//! function evaluated over $GF(2^{128})$. Both are keyed off the same
//! underlying block cipher key.
//!
//! # The field
//!
//! Blocks are treated as elements of $GF(2)[u] / (u^{128} + u^7 + u^2 +
//! u + 1)$. The standard's bit convention maps the most significant bit
//! of the first byte to the coefficient of $u^0$, the least significant
//! bit of the last byte to the coefficient of $u^{127}$ — the opposite
//! of how most serialized integers are read. [`crate::gf128::gf128_mul`]
//! multiplies two blocks under this convention directly, without ever
//! converting to an intermediate integer representation, and reduces
//! using the byte $\mathrm{E1}_{16}$, which is the top byte XORed in on
//! overflow under this bit ordering (the reduction constant
//! $\mathrm{87}_{16}$ seen in some GCM descriptions corresponds to the
//! reversed convention and is not interchangeable with this one).
//!
//! # The hash subkey
//!
//! $H = E_K(0^{128})$: the block cipher applied to an all-zero block.
//! Every GHASH evaluation in a context is keyed by this one value,
//! derived once.
//!
//! # GHASH
//!
//! $\mathrm{GHASH}_H(A, C)$ folds the associated data $A$ and
//! ciphertext $C$, each zero-padded to a block boundary (an empty input
//! contributes no block), into an accumulator $Y$ initialized to zero:
//!
//! $$Y \leftarrow (Y \oplus \text{block}) \cdot H$$
//!
//! one block at a time, and finally folds in one more block holding the
//! bit lengths of $A$ and $C$ as two big-endian 64-bit integers. The
//! result is the authentication value.
//!
//! # The initial counter block
//!
//! For a 96-bit IV, $J_0 = IV \| 0^{31} \| 1$ directly. For any other
//! IV length, $J_0 = \mathrm{GHASH}_H(\varepsilon, IV)$ — the same
//! folding operation used for authentication, applied to the IV as the
//! second (ciphertext-position) input with no associated data, which
//! zero-pads the IV to a block boundary and appends a length block of
//! `(0, bit_len(IV))` exactly as NIST SP 800-38D specifies.
//!
//! # Encryption and the tag
//!
//! $S_0 = E_K(J_0)$ is reserved to mask the tag; the keystream used to
//! encrypt the plaintext starts at $S_1$, generated by incrementing only
//! the low 32 bits of the counter block ([`crate::cipher::ctr`]'s
//! `inc32`, wrapping modulo $2^{32}$ rather than carrying into the rest
//! of the block). The tag is
//!
//! $$T = \mathrm{MSB}_t\bigl(\mathrm{GHASH}_H(A, C) \oplus S_0\bigr)$$
//!
//! truncated to the requested tag length $t$.
//!
//! # Verifying before decrypting
//!
//! Since the tag depends only on $A$, $C$, and $H$ — not on the
//! plaintext — a verifier can recompute it directly from the received
//! ciphertext and compare, in constant time, before ever touching the
//! keystream. [`crate::cipher::Sm4Gcm::open`] does exactly this: no
//! plaintext byte is produced unless the tag already matched.

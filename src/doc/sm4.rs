//! SM4 (GM/T 0002-2012) in full.
//!
//! SM4 is an unbalanced Feistel cipher over 128-bit blocks with a
//! 128-bit key and 32 rounds. Split a block into four 32-bit words $X_0,
//! X_1, X_2, X_3$. Each round computes
//!
//! $$X_{i+4} = X_i \oplus T(X_{i+1} \oplus X_{i+2} \oplus X_{i+3} \oplus
//! RK_i)$$
//!
//! and the ciphertext is the last four words in reverse order, $(X_{35},
//! X_{34}, X_{33}, X_{32})$. Because only one word is updated per round
//! and the other three simply shift down, running the same round
//! function with the round keys in reverse order exactly undoes it —
//! SM4 needs no separate decryption circuit or inverse S-box, unlike
//! AES.
//!
//! # The round transform $T$
//!
//! $T = L \circ \tau$: first $\tau$ applies the S-box to each of the
//! four bytes of its input independently, then $L$ mixes the resulting
//! word by XORing it with four rotations of itself:
//!
//! $$L(B) = B \oplus (B \lll 2) \oplus (B \lll 10) \oplus (B \lll 18)
//! \oplus (B \lll 24)$$
//!
//! # The key schedule
//!
//! The round keys are derived from the master key $MK$ by the same
//! shape of recurrence, using a lighter diffusion layer $L'(B) = B
//! \oplus (B \lll 13) \oplus (B \lll 23)$ and two families of public
//! constants, $FK$ and $CK$:
//!
//! $$K_0, K_1, K_2, K_3 = MK_0 \oplus FK_0, \ldots, MK_3 \oplus FK_3$$
//! $$K_{i+4} = K_i \oplus T'(K_{i+1} \oplus K_{i+2} \oplus K_{i+3} \oplus
//! CK_i), \quad RK_i = K_{i+4}$$
//!
//! where $T' = L' \circ \tau$ uses the same S-box as the round function.
//!
//! # Three S-boxes, one function
//!
//! [`crate::cipher::block`] ships the S-box three ways: a direct
//! [table lookup](crate::cipher::block::sm4::sbox_scalar), a
//! [byte-shuffle](crate::cipher::block) construction that never indexes
//! memory by a secret byte, and a
//! [Boolean-circuit](crate::cipher::block) evaluation of the table's
//! algebraic normal form, for hosts where the shuffle instructions
//! aren't available. All three are required to agree on every input;
//! they differ only in how much of the substitution's secret-dependent
//! behavior leaks through memory access patterns, never in the value
//! they produce.

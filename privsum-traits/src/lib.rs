#![warn(missing_docs, unused_imports)]

//! _This is a part of **privsum**. For more information, head to the
//! [privsum](https://crates.io/crates/privsum) crate homepage._
//!
//! General traits for partially homomorphic cryptosystems and the functionality around them, such
//! as threading secure randomness through every probabilistic operation and selecting security
//! parameters.

use thiserror::Error;

/// Random number generation that is consistent with the dependencies' requirements.
pub mod randomness;

/// General notion of an asymmetric cryptosystem and its keys.
pub mod cryptosystems;

/// Traits for combining ciphertexts under the homomorphism of their cryptosystem.
pub mod homomorphic;

/// Concepts expressing the security level of a given cryptosystem instance.
pub mod security;

/// The error that arises when key generation produces unusable parameters. No partial key
/// material accompanies this error.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyGenerationError {
    /// A value that the secret key requires to be invertible shares a factor with the modulus.
    #[error("key material admits no modular inverse")]
    NoModularInverse,
}

/// The error that arises when encryption rejects its input rather than silently reducing it into
/// the message space.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EncryptionError {
    /// The plaintext lies outside the message space of the public key and would wrap around.
    #[error("plaintext lies outside the message space of this public key")]
    PlaintextOutOfRange,
}

//! _This is a part of **privsum**. For more information, head to the
//! [privsum](https://crates.io/crates/privsum) crate homepage._
//!
//! Implementations of partially homomorphic cryptosystems, along with a fixed-point encoding
//! that maps signed rational values into their plaintext domain.

/// Partially homomorphic cryptosystems with one key.
pub mod cryptosystems;

/// Fixed-point encoding of signed rational values into the plaintext domain.
pub mod encoding;

pub use privsum_traits;

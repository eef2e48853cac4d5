#![doc = include_str!("../README.md")]
#![warn(missing_docs, unused_imports)]

pub use privsum_he::cryptosystems;
pub use privsum_he::encoding;
pub use privsum_numbertheory;
pub use privsum_traits;

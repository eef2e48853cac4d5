use rug::Integer;
use thiserror::Error;

/// The error that arises when a value cannot be represented in the plaintext domain.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The scaled magnitude does not fit in the signed half of the plaintext domain.
    #[error("scaled value does not fit in the signed half of the plaintext domain")]
    Overflow,
    /// The value is NaN or infinite.
    #[error("value is not a finite number")]
    NotFinite,
}

/// Maps signed rational values into the integer plaintext domain $[0, n)$ and back, by scaling
/// them with a fixed positive factor. Negative values occupy the upper half of the domain, so a
/// plaintext $m > n / 2$ decodes to $m - n$.
///
/// Homomorphic results only decode correctly as long as every intermediate magnitude stays below
/// $n / 2$ after scaling. Note that both sides of a pipeline must use the same codec: decoding
/// with a different scale silently produces nonsense.
#[derive(Copy, Clone, Debug)]
pub struct FixedPointCodec {
    scale: u64,
}

impl FixedPointCodec {
    /// Creates a codec for the given scale. A scale of 1 encodes plain integers; a scale of
    /// $10^k$ retains $k$ decimal digits.
    pub fn new(scale: u64) -> Self {
        assert!(scale >= 1, "the scale must be a positive integer");

        FixedPointCodec { scale }
    }

    /// The scale factor of this codec.
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// Encodes a signed rational value as an integer in $[0, n)$ by rounding the scaled value to
    /// the nearest integer. Values whose scaled magnitude does not fit in the signed half of the
    /// domain are rejected, as are values that are NaN or infinite.
    /// ```
    /// # use privsum_he::encoding::FixedPointCodec;
    /// # use rug::Integer;
    /// let codec = FixedPointCodec::new(100);
    /// let modulus = Integer::from(1_000_003);
    ///
    /// let plaintext = codec.encode(-3.72, &modulus).unwrap();
    /// assert_eq!(codec.decode(plaintext, &modulus), -3.72);
    /// ```
    pub fn encode(&self, value: f64, modulus: &Integer) -> Result<Integer, EncodingError> {
        let scaled = (value * self.scale as f64).round();
        let encoded = Integer::from_f64(scaled).ok_or(EncodingError::NotFinite)?;

        let mut magnitude = Integer::from(encoded.abs_ref());
        magnitude <<= 1;
        if magnitude >= *modulus {
            return Err(EncodingError::Overflow);
        }

        if encoded < 0 {
            Ok(encoded + modulus)
        } else {
            Ok(encoded)
        }
    }

    /// Decodes a plaintext in $[0, n)$ back into a signed rational value, reinterpreting the
    /// upper half of the domain as negative.
    pub fn decode(&self, plaintext: Integer, modulus: &Integer) -> f64 {
        let half = Integer::from(modulus >> 1);

        let signed = if plaintext > half {
            plaintext - modulus
        } else {
            plaintext
        };

        signed.to_f64() / self.scale as f64
    }
}

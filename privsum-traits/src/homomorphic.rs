use crate::cryptosystems::{Associable, AssociatedCiphertext, EncryptionKey};
use std::ops::{Add, Mul};

/// A cryptosystem that is additively homomorphic: anyone who holds the public key can combine
/// two ciphertexts into one that decrypts to the sum of their plaintexts, and can fold plaintext
/// constants into a ciphertext. Every operation yields a new ciphertext.
pub trait HomomorphicAddition: EncryptionKey {
    /// Combines two ciphertexts so that the result decrypts to the sum of the two plaintexts.
    fn add(
        &self,
        ciphertext_a: Self::Ciphertext,
        ciphertext_b: Self::Ciphertext,
    ) -> Self::Ciphertext;

    /// Adds a plaintext constant to the plaintext underlying this ciphertext.
    fn add_constant(&self, ciphertext: Self::Ciphertext, constant: Self::Input)
        -> Self::Ciphertext;

    /// Multiplies the plaintext underlying this ciphertext by a plaintext constant.
    fn mul_constant(&self, ciphertext: Self::Ciphertext, constant: Self::Input)
        -> Self::Ciphertext;
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition> Add
    for AssociatedCiphertext<'pk, C, PK>
{
    type Output = AssociatedCiphertext<'pk, C, PK>;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.public_key, rhs.public_key);
        self.public_key
            .add(self.ciphertext, rhs.ciphertext)
            .associate(self.public_key)
    }
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition>
    Mul<PK::Input> for AssociatedCiphertext<'pk, C, PK>
{
    type Output = AssociatedCiphertext<'pk, C, PK>;

    fn mul(self, rhs: PK::Input) -> Self::Output {
        self.public_key
            .mul_constant(self.ciphertext, rhs)
            .associate(self.public_key)
    }
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition>
    AssociatedCiphertext<'pk, C, PK>
{
    /// Adds a plaintext constant to the plaintext underlying this ciphertext.
    pub fn add_constant(self, rhs: PK::Input) -> AssociatedCiphertext<'pk, C, PK> {
        self.public_key
            .add_constant(self.ciphertext, rhs)
            .associate(self.public_key)
    }
}

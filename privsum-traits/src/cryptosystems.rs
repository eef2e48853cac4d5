use crate::randomness::{GeneralRng, SecureRng};
use crate::security::BitsOfSecurity;
use crate::{EncryptionError, KeyGenerationError};
use std::fmt::Debug;

/// An asymmetric cryptosystem is a system of methods to encrypt plaintexts into ciphertexts, and
/// decrypt those ciphertexts back into plaintexts. Anyone who has access to the public key can
/// perform encryptions, but only those with the secret key can decrypt.
///
/// The struct that implements an `AsymmetricCryptosystem` holds the general parameters of that
/// cryptosystem. Depending on the cryptosystem, those parameters could play an important role in
/// deciding the level of security. As such, each cryptosystem should clearly indicate these.
pub trait AsymmetricCryptosystem {
    /// The public key, used for encrypting and for homomorphically combining ciphertexts.
    type PublicKey: EncryptionKey;
    /// The secret key, used only for decrypting.
    type SecretKey: DecryptionKey<Self::PublicKey>;

    /// Sets up an instance of this cryptosystem with parameters satisfying the security
    /// parameter.
    fn setup(security_param: &BitsOfSecurity) -> Self;

    /// Generates a public and secret key pair using a cryptographic RNG. When the generated
    /// parameters turn out to be unusable this fails as a whole, without returning any key
    /// material.
    fn generate_keys<R: SecureRng>(
        &self,
        rng: &mut GeneralRng<R>,
    ) -> Result<(Self::PublicKey, Self::SecretKey), KeyGenerationError>;
}

/// The encryption key.
pub trait EncryptionKey: Sized + Debug + PartialEq {
    /// The type of the constants that ciphertexts can be homomorphically combined with.
    type Input;
    /// The type of the plaintexts to be encrypted.
    type Plaintext;
    /// The type of an encrypted plaintext.
    type Ciphertext: Associable<Self>;

    /// Encrypt the plaintext using the public key and a cryptographic RNG, and immediately
    /// associate the resulting ciphertext with the public key.
    fn encrypt<'pk, R: SecureRng>(
        &'pk self,
        plaintext: &Self::Plaintext,
        rng: &mut GeneralRng<R>,
    ) -> Result<AssociatedCiphertext<'pk, Self::Ciphertext, Self>, EncryptionError> {
        Ok(self.encrypt_raw(plaintext, rng)?.associate(self))
    }

    /// Encrypt the plaintext using the public key and a cryptographic RNG. Rejects plaintexts
    /// that fall outside the message space rather than silently reducing them into it.
    fn encrypt_raw<R: SecureRng>(
        &self,
        plaintext: &Self::Plaintext,
        rng: &mut GeneralRng<R>,
    ) -> Result<Self::Ciphertext, EncryptionError>;
}

/// The decryption key.
pub trait DecryptionKey<PK: EncryptionKey> {
    /// Decrypt the ciphertext using the secret key and the public key it is associated with.
    fn decrypt<'pk>(
        &self,
        ciphertext: &AssociatedCiphertext<'pk, PK::Ciphertext, PK>,
    ) -> PK::Plaintext {
        self.decrypt_raw(ciphertext.public_key, &ciphertext.ciphertext)
    }

    /// Decrypt the ciphertext using the secret key and its related public key. Decryption never
    /// fails on a ciphertext produced under the same key pair; a ciphertext from a different key
    /// pair decrypts to an unrelated value.
    fn decrypt_raw(&self, public_key: &PK, ciphertext: &PK::Ciphertext) -> PK::Plaintext;
}

/// A ciphertext that carries a reference to the public key it was created under. Homomorphic
/// operations are only exposed on associated ciphertexts, so ciphertexts that belong to different
/// key pairs cannot be combined by accident.
#[derive(PartialEq, Debug)]
pub struct AssociatedCiphertext<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C>> {
    /// The underlying ciphertext.
    pub ciphertext: C,
    /// The public key this ciphertext was produced under.
    pub public_key: &'pk PK,
}

/// Functionality to easily turn a ciphertext into an associated ciphertext.
pub trait Associable<PK: EncryptionKey<Ciphertext = Self>>: Sized {
    /// 'Enriches' a ciphertext by associating it with a corresponding public key. This allows
    /// overloading the operators for homomorphic operations.
    fn associate<'pk>(self, public_key: &'pk PK) -> AssociatedCiphertext<'pk, Self, PK> {
        AssociatedCiphertext {
            ciphertext: self,
            public_key,
        }
    }
}

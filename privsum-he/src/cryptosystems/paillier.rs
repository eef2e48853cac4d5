use privsum_numbertheory::{gen_coprime, gen_rsa_modulus};
use privsum_traits::cryptosystems::{
    Associable, AsymmetricCryptosystem, DecryptionKey, EncryptionKey,
};
use privsum_traits::homomorphic::HomomorphicAddition;
use privsum_traits::randomness::GeneralRng;
use privsum_traits::randomness::SecureRng;
use privsum_traits::security::BitsOfSecurity;
use privsum_traits::{EncryptionError, KeyGenerationError};
use rug::ops::RemRounding;
use rug::Integer;
use serde::{Deserialize, Serialize};
use std::ops::Rem;

/// The Paillier cryptosystem.
#[derive(Copy, Clone)]
pub struct Paillier {
    modulus_size: u32,
}

/// Public key for the Paillier cryptosystem.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct PaillierPK {
    /// Public modulus n for encryption
    pub n: Integer,
    /// Public generator g for encryption
    pub g: Integer,
}

/// Decryption key for the Paillier cryptosystem.
pub struct PaillierSK {
    lambda: Integer,
    mu: Integer,
}

/// Ciphertext of the Paillier cryptosystem, which is additively homomorphic.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct PaillierCiphertext {
    /// Encrypted message (Ciphertext)
    pub c: Integer,
}

impl Associable<PaillierPK> for PaillierCiphertext {}

impl AsymmetricCryptosystem for Paillier {
    type PublicKey = PaillierPK;
    type SecretKey = PaillierSK;

    fn setup(security_param: &BitsOfSecurity) -> Self {
        Paillier {
            modulus_size: security_param.to_public_key_bit_length(),
        }
    }

    /// Generates a fresh Paillier keypair.
    /// ```
    /// # use privsum_traits::randomness::GeneralRng;
    /// # use privsum_he::cryptosystems::paillier::Paillier;
    /// # use privsum_traits::security::BitsOfSecurity;
    /// # use privsum_traits::cryptosystems::AsymmetricCryptosystem;
    /// # use rand_core::OsRng;
    /// let mut rng = GeneralRng::new(OsRng);
    /// let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    /// let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// ```
    fn generate_keys<R: SecureRng>(
        &self,
        rng: &mut GeneralRng<R>,
    ) -> Result<(PaillierPK, PaillierSK), KeyGenerationError> {
        let (n, lambda) = gen_rsa_modulus(self.modulus_size, rng);
        let n_squared = Integer::from(n.square_ref());

        let g = Integer::from(&n + 1);

        // mu = L(g^lambda mod n^2)^-1 mod n, where L(u) = (u - 1) / n
        let mut l_value = Integer::from(g.pow_mod_ref(&lambda, &n_squared).unwrap());
        l_value -= 1;
        l_value /= &n;

        let mu = l_value
            .invert(&n)
            .map_err(|_| KeyGenerationError::NoModularInverse)?;

        Ok((PaillierPK { n, g }, PaillierSK { lambda, mu }))
    }
}

impl EncryptionKey for PaillierPK {
    type Input = Integer;
    type Plaintext = Integer;
    type Ciphertext = PaillierCiphertext;

    /// Encrypts a plaintext integer using the Paillier public key. The plaintext must already lie
    /// in the message space $[0, n)$; anything outside of it is rejected.
    /// ```
    /// # use privsum_traits::randomness::GeneralRng;
    /// # use privsum_he::cryptosystems::paillier::Paillier;
    /// # use privsum_traits::security::BitsOfSecurity;
    /// # use privsum_traits::cryptosystems::{AsymmetricCryptosystem, EncryptionKey};
    /// # use rug::Integer;
    /// # use rand_core::OsRng;
    /// # let mut rng = GeneralRng::new(OsRng);
    /// # let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    /// # let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// let ciphertext = public_key.encrypt(&Integer::from(5), &mut rng).unwrap();
    /// ```
    fn encrypt_raw<R: SecureRng>(
        &self,
        plaintext: &Integer,
        rng: &mut GeneralRng<R>,
    ) -> Result<PaillierCiphertext, EncryptionError> {
        if *plaintext < 0 || *plaintext >= self.n {
            return Err(EncryptionError::PlaintextOutOfRange);
        }

        let n_squared = Integer::from(self.n.square_ref());
        let r = gen_coprime(&self.n, rng);

        let first = Integer::from(self.g.pow_mod_ref(plaintext, &n_squared).unwrap());
        let second = r.secure_pow_mod(&self.n, &n_squared);

        Ok(PaillierCiphertext {
            c: (first * second).rem(&n_squared),
        })
    }
}

impl DecryptionKey<PaillierPK> for PaillierSK {
    /// Decrypts an associated Paillier ciphertext using the secret key.
    /// ```
    /// # use privsum_traits::randomness::GeneralRng;
    /// # use privsum_he::cryptosystems::paillier::Paillier;
    /// # use privsum_traits::security::BitsOfSecurity;
    /// # use privsum_traits::cryptosystems::{AsymmetricCryptosystem, EncryptionKey, DecryptionKey};
    /// # use rug::Integer;
    /// # use rand_core::OsRng;
    /// # let mut rng = GeneralRng::new(OsRng);
    /// # let paillier = Paillier::setup(&BitsOfSecurity::ToyParameters);
    /// # let (public_key, secret_key) = paillier.generate_keys(&mut rng).unwrap();
    /// # let ciphertext = public_key.encrypt(&Integer::from(5), &mut rng).unwrap();
    /// println!("The decrypted message is {}", secret_key.decrypt(&ciphertext));
    /// // Prints: "The decrypted message is 5".
    /// ```
    fn decrypt_raw(&self, public_key: &PaillierPK, ciphertext: &PaillierCiphertext) -> Integer {
        let n_squared = Integer::from(public_key.n.square_ref());

        let mut inner = Integer::from(ciphertext.c.secure_pow_mod_ref(&self.lambda, &n_squared));
        inner -= 1;
        inner /= &public_key.n;
        inner *= &self.mu;

        inner.rem(&public_key.n)
    }
}

impl HomomorphicAddition for PaillierPK {
    fn add(
        &self,
        ciphertext_a: Self::Ciphertext,
        ciphertext_b: Self::Ciphertext,
    ) -> Self::Ciphertext {
        PaillierCiphertext {
            c: Integer::from(&ciphertext_a.c * &ciphertext_b.c)
                .rem(Integer::from(self.n.square_ref())),
        }
    }

    fn add_constant(
        &self,
        ciphertext: Self::Ciphertext,
        constant: Self::Input,
    ) -> Self::Ciphertext {
        let modulus = Integer::from(self.n.square_ref());
        let exponent = constant.rem_euc(&self.n);

        PaillierCiphertext {
            c: (ciphertext.c * Integer::from(self.g.pow_mod_ref(&exponent, &modulus).unwrap()))
                .rem(&modulus),
        }
    }

    fn mul_constant(
        &self,
        ciphertext: Self::Ciphertext,
        constant: Self::Input,
    ) -> Self::Ciphertext {
        let modulus = Integer::from(self.n.square_ref());
        let exponent = constant.rem_euc(&self.n);

        PaillierCiphertext {
            c: Integer::from(ciphertext.c.pow_mod_ref(&exponent, &modulus).unwrap()),
        }
    }
}

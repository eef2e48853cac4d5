use privsum_traits::randomness::{GeneralRng, SecureRng};
use rug::Integer;
use std::ops::Rem;

const REPS: u32 = 25;

/// The primes below 31. Checking divisibility by these catches most composite candidates before
/// the first Miller-Rabin exponentiation.
const SMALL_PRIMES: [u32; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Checks whether `candidate` is prime using `rounds` rounds of the Miller-Rabin test, after
/// trial division by the primes below 31. A prime is never rejected; a composite number is
/// accepted with probability at most $4^{-rounds}$. The witnesses are drawn uniformly from
/// $[2, n - 2]$ using `rng`.
pub fn is_probable_prime<R: SecureRng>(
    candidate: &Integer,
    rounds: u32,
    rng: &mut GeneralRng<R>,
) -> bool {
    if *candidate < 2 {
        return false;
    }

    for prime in SMALL_PRIMES.iter() {
        if *candidate == *prime {
            return true;
        }

        if candidate.is_divisible_u(*prime) {
            return false;
        }
    }

    // Write candidate - 1 as 2^s * d with d odd
    let minus_one = Integer::from(candidate - 1);
    let s = minus_one.find_one(0).unwrap();
    let d = Integer::from(&minus_one >> s);

    let upper = Integer::from(candidate - 3);

    'witnesses: for _ in 0..rounds {
        let base: Integer = Integer::from(upper.random_below_ref(&mut rng.rug_rng())) + 2;

        let mut x = Integer::from(base.pow_mod_ref(&d, candidate).unwrap());

        if x == 1 || x == minus_one {
            continue;
        }

        for _ in 0..(s - 1) {
            x = x.square().rem(candidate);

            if x == minus_one {
                continue 'witnesses;
            }
        }

        return false;
    }

    true
}

/// Generates a uniformly random prime number of a given bit length. So, the number contains
/// `bit_length` bits, of which the first and the last bit are always 1.
pub fn gen_prime<R: SecureRng>(bit_length: u32, rng: &mut GeneralRng<R>) -> Integer {
    loop {
        let mut candidate = Integer::from(Integer::random_bits(bit_length, &mut rng.rug_rng()));

        let set_bits = (Integer::from(1) << (bit_length - 1)) + Integer::from(1);
        candidate |= set_bits;

        if is_probable_prime(&candidate, REPS, rng) {
            return candidate;
        }
    }
}

/// Generates a uniformly random *safe* prime number of a given bit length. This is a prime $p$ of
/// the form $p = 2q + 1$, where $q$ is a smaller prime.
pub fn gen_safe_prime<R: SecureRng>(bit_length: u32, rng: &mut GeneralRng<R>) -> Integer {
    loop {
        let mut candidate = gen_prime(bit_length - 1, rng);

        candidate <<= 1;
        candidate |= Integer::from(1);

        // A safe prime larger than 7 is always 2 mod 3
        if candidate.mod_u(3) != 2 {
            continue;
        }

        if is_probable_prime(&candidate, REPS, rng) {
            return candidate;
        }
    }
}

/// Generates a uniformly random RSA modulus, which is the product of two distinct primes $p$ and
/// $q$ of equal bit length. This method returns both the modulus and $\lambda$, which is the
/// least common multiple of $p - 1$ and $q - 1$.
pub fn gen_rsa_modulus<R: SecureRng>(
    bit_length: u32,
    rng: &mut GeneralRng<R>,
) -> (Integer, Integer) {
    let p = gen_prime(bit_length / 2, rng);
    let mut q = gen_prime(bit_length / 2, rng);

    while q == p {
        q = gen_prime(bit_length / 2, rng);
    }

    let n = Integer::from(&p * &q);

    let lambda: Integer = (p - Integer::from(1)).lcm(&(q - Integer::from(1)));

    (n, lambda)
}

/// Generates a uniformly random coprime $x$ to the `other` integer $y$. This means that
/// $\gcd(x, y) = 1$.
pub fn gen_coprime<R: SecureRng>(other: &Integer, rng: &mut GeneralRng<R>) -> Integer {
    loop {
        let candidate = Integer::from(other.random_below_ref(&mut rng.rug_rng()));

        if Integer::from(candidate.gcd_ref(other)) == 1 {
            return candidate;
        }
    }
}

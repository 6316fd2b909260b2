//! Generate prime components for a MagicKey

use alloc::vec::Vec;
use log::{debug, trace, warn};
use num_bigint::{BigUint, RandPrime};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::{
    algorithms::rsa::compute_private_exponent_carmichael,
    errors::{Error, Result},
    generator::{MAX_KEY_SIZE, MIN_KEY_SIZE},
};

pub(crate) struct MagicKeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

/// Generates a two-prime RSA key pair with a modulus of `bit_size` bits.
///
/// Each round draws one probable prime of about `bit_size / 2` bits from `rng` and
/// keeps it when `gcd(exp, p - 1) = 1` and it differs from the prime already
/// kept. Both primes must be found within `max_rounds` rounds in total.
/// The private exponent is inverted modulo `lcm(p - 1, q - 1)`.
pub(crate) fn generate_key_with_exp<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    exp: &BigUint,
    max_rounds: usize,
) -> Result<MagicKeyComponents> {
    if !(MIN_KEY_SIZE..=MAX_KEY_SIZE).contains(&bit_size) {
        return Err(Error::InvalidKeySize { bits: bit_size });
    }

    // No prime p > 2 has p - 1 coprime to an even exponent.
    if exp.is_even() || *exp < BigUint::from(3u32) {
        return Err(Error::NonInvertibleExponent);
    }

    // `gen_prime` sets the top two bits of each prime, so a product of primes
    // of `a` and `b` bits always has exactly `a + b` bits.
    let split = [bit_size - bit_size / 2, bit_size / 2];
    let mut primes: Vec<BigUint> = Vec::with_capacity(2);
    let mut rounds = 0;

    while primes.len() < 2 {
        if rounds == max_rounds {
            warn!("prime search gave up after {rounds} rounds for a {bit_size}-bit key");
            return Err(Error::GenerationExhausted { rounds });
        }
        rounds += 1;

        let candidate = rng.gen_prime(split[primes.len()]);

        if !exp.gcd(&(&candidate - BigUint::one())).is_one() {
            trace!("round {rounds}: exponent shares a factor with p - 1");
            continue;
        }

        if primes.contains(&candidate) {
            trace!("round {rounds}: duplicate prime");
            continue;
        }

        primes.push(candidate);
    }

    let (p, q) = (&primes[0], &primes[1]);
    let n = p * q;
    let d = compute_private_exponent_carmichael(p, q, exp)?;

    debug!("generated {}-bit key in {rounds} rounds", n.bits());

    Ok(MagicKeyComponents {
        n,
        e: exp.clone(),
        d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::prime::probably_prime;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    const EXP: u64 = 65537;

    #[test]
    fn test_invalid_sizes() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let exp = BigUint::from(EXP);

        for bits in [0, 64, 511, 4097, 8192] {
            let res = generate_key_with_exp(&mut rng, bits, &exp, 100);
            assert_eq!(res.err(), Some(Error::InvalidKeySize { bits }));
        }
    }

    #[test]
    fn test_invalid_exponents() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);

        for exp in [0u64, 1, 2, 4, 65536] {
            let res = generate_key_with_exp(&mut rng, 512, &BigUint::from(exp), 100);
            assert_eq!(res.err(), Some(Error::NonInvertibleExponent));
        }
    }

    #[test]
    fn test_round_budget() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let exp = BigUint::from(EXP);

        let res = generate_key_with_exp(&mut rng, 512, &exp, 0);
        assert_eq!(res.err(), Some(Error::GenerationExhausted { rounds: 0 }));

        // a single round can find at most one of the two primes
        let res = generate_key_with_exp(&mut rng, 512, &exp, 1);
        assert_eq!(res.err(), Some(Error::GenerationExhausted { rounds: 1 }));
    }

    #[test]
    fn test_components_are_consistent() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let exp = BigUint::from(EXP);
        let components = generate_key_with_exp(&mut rng, 512, &exp, 100).unwrap();

        assert_eq!(components.n.bits(), 512);
        assert!(components.n.is_odd());
        assert_eq!(components.e, exp);
        assert!(!probably_prime(&components.n, 20));

        // e * d = 1 mod lambda(n) implies m^(e*d) = m mod n
        let m = BigUint::from(0x1234_5678u32);
        let c = m.modpow(&components.e, &components.n);
        assert_eq!(c.modpow(&components.d, &components.n), m);
    }

    macro_rules! key_generation {
        ($name:ident, $size:expr) => {
            #[test]
            fn $name() {
                let mut rng = ChaCha8Rng::from_seed([42; 32]);
                let exp = BigUint::from(EXP);
                for _ in 0..2 {
                    let components = generate_key_with_exp(&mut rng, $size, &exp, 100).unwrap();
                    assert_eq!(components.n.bits(), $size);
                }
            }
        };
    }

    key_generation!(key_generation_512, 512);
    key_generation!(key_generation_768, 768);
    key_generation!(key_generation_1024, 1024);
    key_generation!(key_generation_odd_size, 601);

    #[test]
    fn key_generation_small_exponent() {
        let mut rng = ChaCha8Rng::from_seed([3; 32]);
        let components = generate_key_with_exp(&mut rng, 512, &BigUint::from(3u32), 100).unwrap();
        assert_eq!(components.n.bits(), 512);
    }

    #[test]
    #[ignore = "slow without optimizations"]
    fn key_generation_4096() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let components =
            generate_key_with_exp(&mut rng, 4096, &BigUint::from(EXP), 100).unwrap();
        assert_eq!(components.n.bits(), 4096);
    }
}

//! Generic RSA implementation

use num_bigint::{BigUint, IntoBigUint, ModInverse};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Raw RSA public operation `m^e mod n`. No padding is performed.
#[inline]
pub(crate) fn rsa_encrypt<K: PublicKeyParts + ?Sized>(key: &K, m: &BigUint) -> BigUint {
    m.modpow(key.e(), key.n())
}

/// Raw RSA private operation `c^d mod n`. No padding is performed.
///
/// Fails with [`Error::PrivateKeyRequired`] when `key` has no private
/// exponent.
#[inline]
pub(crate) fn rsa_decrypt<K: PrivateKeyParts + ?Sized>(key: &K, c: &BigUint) -> Result<BigUint> {
    let d = key.d().ok_or(Error::PrivateKeyRequired)?;
    check_modulus(key)?;

    if c >= key.n() {
        return Err(Error::MessageTooLarge);
    }

    Ok(c.modpow(d, key.n()))
}

/// Rejects keys whose modulus cannot be used for any RSA operation.
#[inline]
pub(crate) fn check_modulus<K: PublicKeyParts + ?Sized>(key: &K) -> Result<()> {
    if key.n().is_zero() {
        return Err(Error::InvalidKey);
    }

    Ok(())
}

/// Computes the private exponent `d = exp^-1 mod lcm(p - 1, q - 1)`.
pub(crate) fn compute_private_exponent_carmichael(
    p: &BigUint,
    q: &BigUint,
    exp: &BigUint,
) -> Result<BigUint> {
    let p1 = p - BigUint::one();
    let q1 = q - BigUint::one();
    let lambda = p1.lcm(&q1);

    exp.clone()
        .mod_inverse(&lambda)
        .and_then(|d| d.into_biguint())
        .ok_or(Error::NonInvertibleExponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MagicKey;

    #[test]
    fn test_private_exponent_small_primes() {
        // p = 61, q = 53, lambda = lcm(60, 52) = 780
        let p = BigUint::from(61u32);
        let q = BigUint::from(53u32);
        let d = compute_private_exponent_carmichael(&p, &q, &BigUint::from(17u32)).unwrap();
        assert_eq!(d, BigUint::from(413u32));
        assert_eq!((d * BigUint::from(17u32)) % BigUint::from(780u32), BigUint::one());
    }

    #[test]
    fn test_private_exponent_not_invertible() {
        // gcd(3, lcm(6, 10)) = 3
        let res = compute_private_exponent_carmichael(
            &BigUint::from(7u32),
            &BigUint::from(11u32),
            &BigUint::from(3u32),
        );
        assert_eq!(res, Err(Error::NonInvertibleExponent));
    }

    #[test]
    fn test_raw_round_trip() {
        // n = 61 * 53
        let key = MagicKey::new(
            BigUint::from(3233u32),
            BigUint::from(17u32),
            Some(BigUint::from(413u32)),
        );
        let m = BigUint::from(65u32);
        let c = rsa_encrypt(&key, &m);
        assert_eq!(c, BigUint::from(2790u32));
        assert_eq!(rsa_decrypt(&key, &c).unwrap(), m);
    }

    #[test]
    fn test_decrypt_requires_private_exponent() {
        let key = MagicKey::new(BigUint::from(3233u32), BigUint::from(17u32), None);
        assert_eq!(
            rsa_decrypt(&key, &BigUint::from(2u32)),
            Err(Error::PrivateKeyRequired)
        );
    }

    #[test]
    fn test_decrypt_rejects_zero_modulus() {
        let key = MagicKey::new(BigUint::zero(), BigUint::from(17u32), Some(BigUint::one()));
        assert_eq!(rsa_decrypt(&key, &BigUint::zero()), Err(Error::InvalidKey));
    }
}

//! MagicSignatures `RSA-SHA256` signing as described in the
//! [Magic Signatures] draft: `EMSA-PKCS1-v1_5` over a SHA-256 digest,
//! signed with the raw RSA private operation.
//!
//! # Usage
//!
//! See [code example in the toplevel rustdoc](../index.html#signing-and-verifying).
//!
//! [Magic Signatures]: https://salmon-protocol.googlecode.com/svn/trunk/draft-panzer-magicsig-01.html

mod signature;
mod signing_key;
mod verifying_key;

pub use self::{signature::Signature, signing_key::SigningKey, verifying_key::VerifyingKey};

use alloc::vec::Vec;
use log::debug;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::algorithms::emsa::{emsa_pkcs1v15_encode, emsa_pkcs1v15_matches, emsa_pkcs1v15_prefix};
use crate::algorithms::pad::uint_to_be_pad;
use crate::algorithms::rsa::{check_modulus, rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Algorithm identifier carried alongside MagicSignatures.
pub const ALGORITHM: &str = "RSA-SHA256";

/// Signs `msg` with the private exponent of `key`.
///
/// The signature is exactly as long as the modulus in bytes. Signing is
/// deterministic: the same key and message always give the same signature.
pub fn sign<K: PrivateKeyParts + ?Sized>(key: &K, msg: &[u8]) -> Result<Vec<u8>> {
    sign_digest(key, &emsa_pkcs1v15_prefix::<Sha256>(), &Sha256::digest(msg))
}

/// Verifies `sig` over `msg` with the public part of `key`.
///
/// A signature that does not match is `Ok(false)`; only a key with a zero
/// modulus is an error.
pub fn verify<K: PublicKeyParts + ?Sized>(key: &K, msg: &[u8], sig: &[u8]) -> Result<bool> {
    verify_digest(
        key,
        &emsa_pkcs1v15_prefix::<Sha256>(),
        &Sha256::digest(msg),
        sig,
    )
}

#[inline]
fn sign_digest<K: PrivateKeyParts + ?Sized>(key: &K, prefix: &[u8], hashed: &[u8]) -> Result<Vec<u8>> {
    if !key.is_private() {
        return Err(Error::PrivateKeyRequired);
    }
    check_modulus(key)?;

    let k = key.modulus_len();
    let em = emsa_pkcs1v15_encode(prefix, hashed, k)?;
    let m = BigUint::from_bytes_be(&em);

    uint_to_be_pad(rsa_decrypt(key, &m)?, k)
}

#[inline]
fn verify_digest<K: PublicKeyParts + ?Sized>(
    key: &K,
    prefix: &[u8],
    hashed: &[u8],
    sig: &[u8],
) -> Result<bool> {
    check_modulus(key)?;

    let k = key.modulus_len();
    if sig.len() > k {
        debug!("signature rejected: {} bytes for a {k}-byte modulus", sig.len());
        return Ok(false);
    }

    let s = BigUint::from_bytes_be(sig);
    if &s >= key.n() {
        debug!("signature rejected: representative out of range");
        return Ok(false);
    }

    let Ok(expected) = emsa_pkcs1v15_encode(prefix, hashed, k) else {
        debug!("signature rejected: {k}-byte modulus cannot hold the digest");
        return Ok(false);
    };

    let em = uint_to_be_pad(rsa_encrypt(key, &s), k)?;
    let valid = emsa_pkcs1v15_matches(&em, &expected);
    if !valid {
        debug!("signature rejected: encoded message mismatch");
    }

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MagicKey;
    use num_traits::Zero;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    fn get_private_key() -> MagicKey {
        MagicKey::from_compact(
            "RSA.mVgY8RN6URBTstndvmUUPb4UZTdwvwmddSKE5z_jvKUEK6yk1u3rrC9yN8k6FilGj9K0eeUPe2hf4Pj-5CmHww==.AQAB.\
             Lgy_yL3hsLBngkFdDw1Jy9TmSRMiH6yihYetQ8jy-jZXdsZXd8V5ub3kuBHHk4M39i3TduIkcrjcsiWQb77D8Q==",
        )
        .unwrap()
    }

    #[test]
    fn test_sign_is_deterministic() {
        let key = get_private_key();
        let first = sign(&key, b"hello world").unwrap();
        let second = sign(&key, b"hello world").unwrap();

        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
        assert_ne!(first, sign(&key, b"hello world!").unwrap());
    }

    #[test]
    fn test_sign_requires_private_key() {
        let key = get_private_key().to_public_key();
        assert_eq!(sign(&key, b"msg"), Err(Error::PrivateKeyRequired));
    }

    #[test]
    fn test_zero_modulus_is_invalid() {
        let key = MagicKey::new(BigUint::zero(), BigUint::from(65537u32), Some(BigUint::from(3u32)));
        assert_eq!(sign(&key, b"msg"), Err(Error::InvalidKey));
        assert_eq!(verify(&key, b"msg", &[1, 2, 3]), Err(Error::InvalidKey));
    }

    #[test]
    fn test_small_modulus() {
        // 61 * 53 is far too small for a SHA-256 DigestInfo
        let key = MagicKey::new(
            BigUint::from(3233u32),
            BigUint::from(17u32),
            Some(BigUint::from(413u32)),
        );
        assert_eq!(sign(&key, b"msg"), Err(Error::MessageTooLarge));
        assert_eq!(verify(&key, b"msg", &[1]), Ok(false));
    }

    #[test]
    fn test_verify_rejects_out_of_range() {
        let key = get_private_key();
        let n = key.n().to_bytes_be();
        assert_eq!(verify(&key, b"msg", &n), Ok(false));
        assert_eq!(verify(&key, b"msg", &[0xff; 64]), Ok(false));
        assert_eq!(verify(&key, b"msg", &[0x01; 65]), Ok(false));
        assert_eq!(verify(&key, b"msg", &[]), Ok(false));
    }

    #[test]
    fn test_generated_key_round_trip() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let key = MagicKey::generate(&mut rng, 512).unwrap();

        let msgs: [&[u8]; 4] = [b"", b"x", b"This is a message", &[0u8; 1000]];
        for msg in msgs {
            let sig = sign(&key, msg).unwrap();
            assert!(verify(&key, msg, &sig).unwrap());
            assert!(verify(&key.to_public_key(), msg, &sig).unwrap());
        }
    }
}

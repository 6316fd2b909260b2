//! EMSA-PKCS1-v1_5 message encoding as described in [RFC3447 § 9.2].
//!
//! MagicSignatures signs `EM = 0x00 || 0x01 || PS || 0x00 || T`, where `T`
//! is the DER `DigestInfo` of the message digest and `PS` is `0xff` filler
//! stretching `EM` to the byte width of the modulus.
//!
//! [RFC3447 § 9.2]: https://datatracker.ietf.org/doc/html/rfc3447#section-9.2

use alloc::vec::Vec;
use const_oid::AssociatedOid;
use digest::Digest;
use subtle::ConstantTimeEq;

use crate::errors::{Error, Result};

/// Smallest amount of `0xff` filler the encoding allows.
const MIN_PS_LEN: usize = 8;

/// Builds `EM` for an already hashed message, `k` bytes long.
#[inline]
pub(crate) fn emsa_pkcs1v15_encode(prefix: &[u8], hashed: &[u8], k: usize) -> Result<Vec<u8>> {
    let hash_len = hashed.len();
    let t_len = prefix.len() + hash_len;
    if k < t_len + MIN_PS_LEN + 3 {
        return Err(Error::MessageTooLarge);
    }

    // EM = 0x00 || 0x01 || PS || 0x00 || T
    let mut em = vec![0xff; k];
    em[0] = 0;
    em[1] = 1;
    em[k - t_len - 1] = 0;
    em[k - t_len..k - hash_len].copy_from_slice(prefix);
    em[k - hash_len..k].copy_from_slice(hashed);

    Ok(em)
}

/// Compares a recovered block against the expected encoding without
/// branching on the contents.
#[inline]
pub(crate) fn emsa_pkcs1v15_matches(em: &[u8], expected: &[u8]) -> bool {
    bool::from(em.ct_eq(expected))
}

/// prefix = 0x30 <oid_len + 8 + digest_len> 0x30 <oid_len + 4> 0x06 <oid_len> oid 0x05 0x00 0x04 <digest_len>
#[inline]
pub(crate) fn emsa_pkcs1v15_prefix<D>() -> Vec<u8>
where
    D: Digest + AssociatedOid,
{
    let oid = D::OID.as_bytes();
    let oid_len = oid.len() as u8;
    let digest_len = <D as Digest>::output_size() as u8;
    let mut v = vec![
        0x30,
        oid_len + 8 + digest_len,
        0x30,
        oid_len + 4,
        0x6,
        oid_len,
    ];
    v.extend_from_slice(oid);
    v.extend_from_slice(&[0x05, 0x00, 0x04, digest_len]);
    v
}

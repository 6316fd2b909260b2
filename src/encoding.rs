//! Compact notation (`RSA.<n>.<e>.<d>`) encoding support.
//!
//! Every integer is written as URL-safe base64 of its minimal big-endian
//! bytes. Public keys end with a period after the exponent; private keys
//! append the private exponent after it.

use alloc::string::String;
use alloc::vec::Vec;
use log::trace;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::{
    b64url,
    errors::{Error, Result},
    key::MagicKey,
    traits::PrivateKeyParts,
};

/// Algorithm tag leading every compact notation key.
pub(crate) const KEY_TYPE: &str = "RSA";

/// Parses compact notation into a key.
pub(crate) fn parse(text: &str) -> Result<MagicKey> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut parts: Vec<&str> = compact.split('.').collect();
    // the public form is terminated by a period
    if parts.len() > 1 && parts.last() == Some(&"") {
        parts.pop();
    }

    let (key_type, components) = parts.split_first().ok_or(Error::MalformedKey)?;
    if *key_type != KEY_TYPE {
        trace!("rejecting key of type {key_type:?}");
        return Err(Error::MalformedKey);
    }

    match components {
        [n, e] => Ok(MagicKey::new(decode_uint(n)?, decode_uint(e)?, None)),
        [n, e, d] => Ok(MagicKey::new(
            decode_uint(n)?,
            decode_uint(e)?,
            Some(decode_uint(d)?),
        )),
        _ => {
            trace!("rejecting key with {} components", components.len());
            Err(Error::MalformedKey)
        }
    }
}

/// Writes `key` in compact notation, including the private exponent only
/// when asked for and present.
pub(crate) fn serialize<K: PrivateKeyParts + ?Sized>(key: &K, include_private: bool) -> String {
    let mut out = format!("{KEY_TYPE}.{}.{}.", encode_uint(key.n()), encode_uint(key.e()));

    if include_private {
        if let Some(d) = key.d() {
            let bytes = Zeroizing::new(d.to_bytes_be());
            out.push_str(&b64url::encode(&bytes, true));
        }
    }

    out
}

fn decode_uint(component: &str) -> Result<BigUint> {
    let bytes = Zeroizing::new(b64url::decode(component));
    if bytes.is_empty() {
        return Err(Error::MalformedKey);
    }

    Ok(BigUint::from_bytes_be(&bytes))
}

fn encode_uint(value: &BigUint) -> String {
    b64url::encode(&value.to_bytes_be(), true)
}

use ::signature::{Error, Result, SignatureEncoding};

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{Debug, Display, Formatter, LowerHex, UpperHex};

use crate::b64url;

/// MagicSignatures `RSA-SHA256` signature.
///
/// Holds the signature bytes at the full width of the signing key's
/// modulus. The [`Display`] form is the padded URL-safe base64 used on the
/// wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    pub(super) inner: Box<[u8]>,
}

impl Signature {
    /// Decode a signature from URL-safe base64, ignoring characters outside
    /// the alphabet.
    pub fn from_b64url(text: &str) -> Self {
        b64url::decode(text).into()
    }

    /// Encode the signature as URL-safe base64.
    pub fn to_b64url(&self, pad: bool) -> String {
        b64url::encode(&self.inner, pad)
    }

    /// Borrow the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl SignatureEncoding for Signature {
    type Repr = Box<[u8]>;
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            inner: bytes.into(),
        })
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            inner: bytes.into_boxed_slice(),
        }
    }
}

impl From<Signature> for Box<[u8]> {
    fn from(signature: Signature) -> Box<[u8]> {
        signature.inner
    }
}

impl Debug for Signature {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        fmt.debug_tuple("Signature")
            .field(&self.to_b64url(true))
            .finish()
    }
}

impl LowerHex for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in self.inner.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl UpperHex for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for byte in self.inner.iter() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_b64url(true))
    }
}

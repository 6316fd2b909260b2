use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use log::trace;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encoding;
use crate::errors::{Error, Result};
use crate::generator::{KeyGenerator, DEFAULT_EXPONENT};
use crate::magicsig;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// An RSA key in MagicSignatures form: a modulus, a public exponent and,
/// for private keys, a private exponent.
///
/// The modulus size is always derived from `n`.
#[derive(Clone)]
pub struct MagicKey {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent, absent for public keys
    d: Option<BigUint>,
}

/// Raw integer attributes a [`MagicKey`] can be built from.
///
/// Only `n` is required; `e` falls back to 65537. `size` is accepted for
/// symmetry with the key accessors but is always recomputed from `n`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyAttributes {
    /// Modulus
    pub n: Option<BigUint>,
    /// Public exponent
    pub e: Option<BigUint>,
    /// Private exponent
    pub d: Option<BigUint>,
    /// Modulus size in bits
    pub size: Option<usize>,
}

impl KeyAttributes {
    /// Attributes holding only the modulus `n`.
    pub fn new(n: impl Into<BigUint>) -> Self {
        Self {
            n: Some(n.into()),
            ..Default::default()
        }
    }

    /// Sets the public exponent.
    pub fn with_e(mut self, e: impl Into<BigUint>) -> Self {
        self.e = Some(e.into());
        self
    }

    /// Sets the private exponent.
    pub fn with_d(mut self, d: impl Into<BigUint>) -> Self {
        self.d = Some(d.into());
        self
    }
}

impl MagicKey {
    /// Create a key from its components. Pass `None` for `d` to get a
    /// public key.
    ///
    /// The components are trusted as given.
    pub fn new(n: BigUint, e: BigUint, d: Option<BigUint>) -> MagicKey {
        MagicKey { n, e, d }
    }

    /// Parse a key from compact notation, `RSA.<n>.<e>.` for public keys or
    /// `RSA.<n>.<e>.<d>` for private keys.
    ///
    /// Whitespace anywhere in `text` is ignored so folded keys parse as-is.
    pub fn from_compact(text: &str) -> Result<MagicKey> {
        encoding::parse(text)
    }

    /// Build a key from raw attributes.
    ///
    /// Fails with [`Error::MissingModulus`] when `n` is absent. `e` defaults to
    /// 65537.
    pub fn from_attributes(attrs: KeyAttributes) -> Result<MagicKey> {
        let KeyAttributes { n, e, d, size } = attrs;
        let n = n.ok_or(Error::MissingModulus)?;

        if let Some(size) = size {
            if size != n.bits() {
                trace!("ignoring stated size {size}, modulus has {} bits", n.bits());
            }
        }

        Ok(MagicKey {
            n,
            e: e.unwrap_or_else(|| BigUint::from(DEFAULT_EXPONENT)),
            d,
        })
    }

    /// Generate a new private key of the given bit size with the default
    /// exponent 65537.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<MagicKey> {
        KeyGenerator::new(bit_size).generate(rng)
    }

    /// Generate a new private key of the given bit size and public exponent.
    pub fn generate_with_exp<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        bit_size: usize,
        exp: &BigUint,
    ) -> Result<MagicKey> {
        KeyGenerator {
            bits: bit_size,
            exponent: exp.clone(),
            ..Default::default()
        }
        .generate(rng)
    }

    /// Serialize into compact notation.
    ///
    /// The private exponent is only written when `include_private` is set
    /// and the key has one; otherwise the public form is returned.
    pub fn to_compact(&self, include_private: bool) -> String {
        encoding::serialize(self, include_private)
    }

    /// Get the public part of this key.
    pub fn to_public_key(&self) -> MagicKey {
        MagicKey {
            n: self.n.clone(),
            e: self.e.clone(),
            d: None,
        }
    }

    /// Sign `msg` with the MagicSignatures `RSA-SHA256` scheme.
    pub fn sign(&self, msg: &[u8]) -> Result<Vec<u8>> {
        magicsig::sign(self, msg)
    }

    /// Verify a MagicSignatures `RSA-SHA256` signature over `msg`.
    ///
    /// Returns `Ok(false)` for any signature that does not match.
    pub fn verify(&self, msg: &[u8], sig: &[u8]) -> Result<bool> {
        magicsig::verify(self, msg, sig)
    }

    /// Replace the modulus.
    pub fn set_n(&mut self, n: BigUint) {
        self.n = n;
    }

    /// Replace the public exponent.
    pub fn set_e(&mut self, e: BigUint) {
        self.e = e;
    }

    /// Replace or remove the private exponent.
    pub fn set_d(&mut self, d: Option<BigUint>) {
        self.d.zeroize();
        self.d = d;
    }
}

impl PublicKeyParts for MagicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PrivateKeyParts for MagicKey {
    fn d(&self) -> Option<&BigUint> {
        self.d.as_ref()
    }
}

impl TryFrom<KeyAttributes> for MagicKey {
    type Error = Error;

    fn try_from(attrs: KeyAttributes) -> Result<Self> {
        Self::from_attributes(attrs)
    }
}

impl FromStr for MagicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_compact(s)
    }
}

/// Writes the public compact form.
impl fmt::Display for MagicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact(false))
    }
}

impl fmt::Debug for MagicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MagicKey")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("size", &self.size())
            .field("private", &self.is_private())
            .finish()
    }
}

impl PartialEq for MagicKey {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.e == other.e && self.d == other.d
    }
}

impl Eq for MagicKey {}

impl Zeroize for MagicKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for MagicKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for MagicKey {}

#[cfg(feature = "serde")]
impl Serialize for MagicKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_compact(true))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MagicKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let compact = String::deserialize(deserializer)?;
        Self::from_compact(&compact).map_err(de::Error::custom)
    }
}

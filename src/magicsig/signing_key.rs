use super::{sign, Signature, VerifyingKey};
use crate::{errors::Error, MagicKey, PrivateKeyParts, Result};
use rand_core::CryptoRngCore;
use signature::{Keypair, Signer};
use zeroize::ZeroizeOnDrop;

/// Signing key for MagicSignatures `RSA-SHA256`.
///
/// Always wraps a key holding a private exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    inner: MagicKey,
}

impl SigningKey {
    /// Create a new signing key. Fails with [`Error::PrivateKeyRequired`]
    /// when `key` is public only.
    pub fn new(key: MagicKey) -> Result<Self> {
        if !key.is_private() {
            return Err(Error::PrivateKeyRequired);
        }

        Ok(Self { inner: key })
    }

    /// Generate a new signing key with a modulus of `bit_size` bits.
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<Self> {
        Ok(Self {
            inner: MagicKey::generate(rng, bit_size)?,
        })
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        Ok(sign(&self.inner, msg)?.into())
    }
}

impl AsRef<MagicKey> for SigningKey {
    fn as_ref(&self) -> &MagicKey {
        &self.inner
    }
}

impl TryFrom<MagicKey> for SigningKey {
    type Error = Error;

    fn try_from(key: MagicKey) -> Result<Self> {
        Self::new(key)
    }
}

impl From<SigningKey> for MagicKey {
    fn from(key: SigningKey) -> Self {
        key.inner
    }
}

impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> Self::VerifyingKey {
        VerifyingKey {
            inner: self.inner.to_public_key(),
        }
    }
}

impl ZeroizeOnDrop for SigningKey {}

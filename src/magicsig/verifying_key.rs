use super::{verify, Signature};
use crate::MagicKey;
use signature::Verifier;

/// Verifying key for MagicSignatures `RSA-SHA256`.
///
/// Only the public part of the wrapped key is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyingKey {
    pub(super) inner: MagicKey,
}

impl VerifyingKey {
    /// Create a new verifying key from the public part of `key`.
    pub fn new(key: MagicKey) -> Self {
        Self {
            inner: key.to_public_key(),
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        if verify(&self.inner, msg, signature.as_bytes())? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl AsRef<MagicKey> for VerifyingKey {
    fn as_ref(&self) -> &MagicKey {
        &self.inner
    }
}

impl From<MagicKey> for VerifyingKey {
    fn from(key: MagicKey) -> Self {
        Self::new(key)
    }
}

impl From<VerifyingKey> for MagicKey {
    fn from(key: VerifyingKey) -> Self {
        key.inner
    }
}

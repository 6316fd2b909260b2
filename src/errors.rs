//! Error types.

/// Alias for [`core::result::Result`] with the `magickey` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Compact notation string is not of the form `RSA.<n>.<e>[.<d>]`.
    #[error("malformed compact notation key")]
    MalformedKey,

    /// Key attributes did not include a modulus.
    #[error("key attributes are missing the modulus")]
    MissingModulus,

    /// Requested key size is outside of the supported range.
    #[error("invalid key size: {bits} bits")]
    InvalidKeySize {
        /// Requested modulus size in bits.
        bits: usize,
    },

    /// Prime search ran out of rounds.
    #[error("key generation exhausted after {rounds} rounds")]
    GenerationExhausted {
        /// Number of rounds that were attempted.
        rounds: usize,
    },

    /// Public exponent has no inverse modulo lambda(n).
    #[error("public exponent is not invertible")]
    NonInvertibleExponent,

    /// Signing requires the private exponent.
    #[error("private key required")]
    PrivateKeyRequired,

    /// Modulus is too small to hold the encoded digest.
    #[error("message too large for modulus")]
    MessageTooLarge,

    /// Key is structurally unusable, e.g. has a zero modulus.
    #[error("invalid key")]
    InvalidKey,
}

#[cfg(feature = "std")]
impl From<Error> for signature::Error {
    fn from(err: Error) -> Self {
        Self::from_source(err)
    }
}

#[cfg(not(feature = "std"))]
impl From<Error> for signature::Error {
    fn from(_err: Error) -> Self {
        Self::new()
    }
}

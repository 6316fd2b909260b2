//! Traits related to the key components

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bits.
    fn size(&self) -> usize {
        self.n().bits()
    }

    /// Returns the modulus size in bytes. Signatures produced by or for
    /// this key have exactly this length.
    fn modulus_len(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// Components of an RSA key which may carry a private exponent.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent, if the key holds one.
    fn d(&self) -> Option<&BigUint>;

    /// Returns `true` when the private exponent is present.
    fn is_private(&self) -> bool {
        self.d().is_some()
    }
}

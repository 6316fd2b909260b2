//! Key generation parameters.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::{algorithms::generate::generate_key_with_exp, errors::Result, key::MagicKey};

/// Modulus size used when none is requested, in bits.
pub const DEFAULT_KEY_SIZE: usize = 512;

/// Smallest modulus size the generator accepts, in bits.
pub const MIN_KEY_SIZE: usize = 512;

/// Largest modulus size the generator accepts, in bits.
pub const MAX_KEY_SIZE: usize = 4096;

/// Public exponent used when none is given.
pub const DEFAULT_EXPONENT: u32 = 65537;

/// Number of prime draws a single key generation may spend.
pub const MAX_GENERATION_ROUNDS: usize = 100;

/// Parameters for generating a new [`MagicKey`].
///
/// ```
/// use magickey::{KeyGenerator, PublicKeyParts};
///
/// let mut rng = rand::thread_rng(); // rand@0.8
///
/// let generator = KeyGenerator {
///     bits: 768,
///     ..Default::default()
/// };
/// let key = generator.generate(&mut rng).expect("failed to generate a key");
/// assert_eq!(key.size(), 768);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyGenerator {
    /// Modulus size in bits, between [`MIN_KEY_SIZE`] and [`MAX_KEY_SIZE`].
    pub bits: usize,

    /// Public exponent.
    pub exponent: BigUint,

    /// Upper bound on prime draws before giving up with
    /// [`Error::GenerationExhausted`](crate::Error::GenerationExhausted).
    pub max_rounds: usize,
}

impl KeyGenerator {
    /// Create generation parameters for a `bits`-sized modulus with the
    /// default exponent and round budget.
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            ..Default::default()
        }
    }

    /// Generate a private key using `rng` as the entropy source.
    pub fn generate<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<MagicKey> {
        let components = generate_key_with_exp(rng, self.bits, &self.exponent, self.max_rounds)?;
        Ok(MagicKey::new(
            components.n,
            components.e,
            Some(components.d),
        ))
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self {
            bits: DEFAULT_KEY_SIZE,
            exponent: BigUint::from(DEFAULT_EXPONENT),
            max_rounds: MAX_GENERATION_ROUNDS,
        }
    }
}

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Supported operations
//!
//! - [Compact notation keys](#compact-notation)
//! - [Key generation](#key-generation)
//! - [MagicSignatures `RSA-SHA256` signatures](#signing-and-verifying)
//! - [URL-safe base64](#url-safe-base64)
//!
//! # Usage
//!
//! ## Compact notation
//!
//! MagicKeys are written as `RSA.<n>.<e>.` (public) or `RSA.<n>.<e>.<d>`
//! (private), each integer as URL-safe base64 of its big-endian bytes.
//! Whitespace is ignored, so keys folded for display parse unchanged.
//!
//! ```
//! use magickey::{MagicKey, PrivateKeyParts, PublicKeyParts};
//!
//! let key = MagicKey::from_compact(
//!     "RSA.mVgY8RN6URBTstndvmUUPb4UZTdwvwmddSKE5z_jvKUEK6yk1u3rrC9yN8k6
//!      FilGj9K0eeUPe2hf4Pj-5CmHww==.AQAB.",
//! )?;
//! assert_eq!(key.size(), 512);
//! assert!(!key.is_private());
//! assert!(key.to_compact(true).ends_with(".AQAB."));
//! # Ok::<(), magickey::Error>(())
//! ```
//!
//! ## Key generation
//!
//! ```
//! use magickey::{MagicKey, PrivateKeyParts, PublicKeyParts};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = MagicKey::generate(&mut rng, 512).expect("failed to generate a key");
//! assert!(private_key.is_private());
//! assert_eq!(private_key.size(), 512);
//!
//! let compact = private_key.to_compact(true);
//! assert_eq!(compact.parse::<MagicKey>().unwrap(), private_key);
//! ```
//!
//! ## Signing and verifying
//!
//! ```
//! use magickey::MagicKey;
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = MagicKey::generate(&mut rng, 512).expect("failed to generate a key");
//! let public_key = private_key.to_public_key();
//!
//! // Sign
//! let data = b"hello world";
//! let signature = private_key.sign(data).expect("failed to sign");
//!
//! // Verify
//! assert!(public_key.verify(data, &signature).unwrap());
//! assert!(!public_key.verify(b"hello moon", &signature).unwrap());
//! ```
//!
//! The same scheme is available through the [`signature`] traits:
//!
//! ```
//! use magickey::magicsig::{SigningKey, VerifyingKey};
//! use magickey::signature::{Keypair, Signer, Verifier};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let signing_key = SigningKey::random(&mut rng, 512).expect("failed to generate a key");
//! let verifying_key: VerifyingKey = signing_key.verifying_key();
//!
//! let signature = signing_key.sign(b"hello world");
//! verifying_key.verify(b"hello world", &signature).expect("failed to verify");
//!
//! // wire form
//! let wire = signature.to_string();
//! assert!(!wire.contains('+') && !wire.contains('/'));
//! ```
//!
//! ## URL-safe base64
//!
//! ```
//! use magickey::{b64url_decode, b64url_encode};
//!
//! assert_eq!(b64url_encode(b"\x01", true), "AQ==");
//! assert_eq!(b64url_encode(b"\x01", false), "AQ");
//! assert_eq!(b64url_decode("A Q=="), b"\x01");
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;
pub use signature;

mod algorithms;
pub mod b64url;
pub mod errors;
pub mod magicsig;
pub mod traits;

mod encoding;
mod generator;
mod key;

pub use crate::{
    b64url::{decode as b64url_decode, encode as b64url_encode},
    errors::{Error, Result},
    generator::{
        KeyGenerator, DEFAULT_EXPONENT, DEFAULT_KEY_SIZE, MAX_GENERATION_ROUNDS, MAX_KEY_SIZE,
        MIN_KEY_SIZE,
    },
    key::{KeyAttributes, MagicKey},
    traits::{PrivateKeyParts, PublicKeyParts},
};

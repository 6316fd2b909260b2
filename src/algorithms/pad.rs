//! Fixed-width big-endian conversion of RSA integers.

use alloc::vec::Vec;
use num_bigint::BigUint;

use crate::errors::{Error, Result};

/// Writes `input` big-endian into exactly `k` bytes, zero-filling on the
/// left. Fails when the value needs more than `k` bytes.
#[inline]
pub(crate) fn uint_to_be_pad(input: BigUint, k: usize) -> Result<Vec<u8>> {
    let bytes = input.to_bytes_be();
    let offset = k.checked_sub(bytes.len()).ok_or(Error::MessageTooLarge)?;

    let mut out = vec![0u8; k];
    out[offset..].copy_from_slice(&bytes);
    Ok(out)
}

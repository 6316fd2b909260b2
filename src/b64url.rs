//! URL-safe base64 as used by MagicSignatures ([RFC4648 § 5]).
//!
//! Encoding follows the standard URL-safe alphabet with optional `=`
//! padding. Decoding is lenient: every character outside the URL-safe
//! alphabet (whitespace, padding, stray punctuation) is dropped before the
//! remaining characters are decoded, and the decoder never fails. Keys and
//! signatures are frequently displayed folded over several lines, and
//! deployed implementations disagree on padding, so this leniency is part of
//! the wire format.
//!
//! [RFC4648 § 5]: https://datatracker.ietf.org/doc/html/rfc4648#section-5

use alloc::{string::String, vec::Vec};
use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE, URL_SAFE_NO_PAD},
        DecodePaddingMode,
    },
    Engine,
};

/// Decoder used after filtering: padding has already been stripped and
/// non-canonical trailing bits are tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Encodes `input` as URL-safe base64.
///
/// When `pad` is `false` the trailing `=` characters are omitted.
///
/// ```
/// use magickey::b64url_encode;
///
/// assert_eq!(b64url_encode(b"\xfb\xff", true), "-_8=");
/// assert_eq!(b64url_encode(b"\xfb\xff", false), "-_8");
/// ```
pub fn encode(input: &[u8], pad: bool) -> String {
    if pad {
        URL_SAFE.encode(input)
    } else {
        URL_SAFE_NO_PAD.encode(input)
    }
}

/// Decodes URL-safe base64, with or without padding.
///
/// Characters outside of `[A-Za-z0-9_-]` are silently discarded. A dangling
/// final character that cannot carry a full byte is ignored.
///
/// ```
/// use magickey::b64url_decode;
///
/// assert_eq!(b64url_decode("-_8="), b"\xfb\xff");
/// assert_eq!(b64url_decode(" -_\n8 "), b"\xfb\xff");
/// ```
pub fn decode(input: &str) -> Vec<u8> {
    let mut filtered: Vec<u8> = input.bytes().filter(|b| is_url_safe(*b)).collect();

    // A lone trailing sextet holds no complete byte.
    if filtered.len() % 4 == 1 {
        filtered.pop();
    }

    LENIENT.decode(&filtered).unwrap_or_default()
}

#[inline]
fn is_url_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

//! Base32 decoding from a string.

use crate::constants::{GROUP_BYTES, GROUP_SYMBOLS};
use crate::decode::decode;
use crate::Base32Error;

/// Decodes a base32 string to bytes.
///
/// Padding is optional on the final group; `"MY"` and `"MY======"` both
/// decode to `b"f"`.
///
/// # Errors
///
/// Returns [`Base32Error::InvalidSymbol`] if the input contains a character
/// outside the alphabet or a value symbol after padding within a group.
///
/// # Example
///
/// ```
/// use base32_codec::from_base32;
///
/// assert_eq!(from_base32("MZXW6YQ=").unwrap(), b"foob");
/// assert!(from_base32("mzxw6yq=").is_err());
/// ```
pub fn from_base32(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    decode_to_vec(encoded.as_bytes())
}

/// Decodes a whole symbol slice into a buffer large enough for any tail.
pub(crate) fn decode_to_vec(symbols: &[u8]) -> Result<Vec<u8>, Base32Error> {
    let capacity = symbols.len().div_ceil(GROUP_SYMBOLS) * GROUP_BYTES;
    let mut buf = vec![0u8; capacity];
    let length = decode(symbols, &mut buf, capacity)?;
    buf.truncate(length);
    Ok(buf)
}

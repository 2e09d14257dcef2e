//! Binary base32 decoding function.

use crate::from_base32::decode_to_vec;
use crate::Base32Error;

/// Decodes base32 bytes from a window of a source slice.
///
/// # Arguments
///
/// * `view` - The source byte slice containing base32-encoded data.
/// * `offset` - The starting offset in the source slice.
/// * `length` - The number of bytes to decode.
///
/// # Errors
///
/// Returns [`Base32Error::OutOfBounds`] if the window does not fit in `view`,
/// or any decoding error for the symbols inside it.
///
/// # Example
///
/// ```
/// use base32_codec::from_base32_bin;
///
/// let encoded = b"xxxxMZXW6===";
/// let decoded = from_base32_bin(encoded, 4, 8).unwrap();
/// assert_eq!(decoded, b"foo");
/// ```
pub fn from_base32_bin(view: &[u8], offset: usize, length: usize) -> Result<Vec<u8>, Base32Error> {
    let window = offset
        .checked_add(length)
        .and_then(|end| view.get(offset..end))
        .ok_or(Base32Error::OutOfBounds {
            offset,
            length,
            available: view.len(),
        })?;
    decode_to_vec(window)
}

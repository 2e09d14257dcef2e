//! Base32 encoding to an owned string.

use crate::encode::encode_groups;
use crate::size::encoded_length;

/// Encodes a byte slice to a padded base32 string.
///
/// # Example
///
/// ```
/// use base32_codec::to_base32;
///
/// assert_eq!(to_base32(b"foobar"), "MZXW6YTBOI======");
/// ```
pub fn to_base32(uint8: &[u8]) -> String {
    let mut out = vec![0u8; encoded_length(uint8.len())];
    encode_groups(uint8, &mut out);
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base32(b""), "");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(to_base32(b"f"), "MY======");
        assert_eq!(to_base32(b"fo"), "MZXQ====");
        assert_eq!(to_base32(b"foo"), "MZXW6===");
        assert_eq!(to_base32(b"foob"), "MZXW6YQ=");
        assert_eq!(to_base32(b"fooba"), "MZXW6YTB");
        assert_eq!(to_base32(b"foobar"), "MZXW6YTBOI======");
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = to_base32(&data);
        assert_eq!(encoded.len(), encoded_length(data.len()));
        for c in encoded.chars() {
            assert!(
                c.is_ascii_uppercase() || ('2'..='7').contains(&c) || c == '=',
                "Invalid base32 character: {}",
                c
            );
        }
    }
}

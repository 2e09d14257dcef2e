//! Buffer size calculators.

use crate::constants::{GROUP_BYTES, GROUP_SYMBOLS};

/// Number of symbols produced when encoding `data_size` bytes, padding included.
///
/// Every started group of 5 bytes becomes a full group of 8 symbols.
///
/// # Example
///
/// ```
/// use base32_codec::encoded_length;
///
/// assert_eq!(encoded_length(0), 0);
/// assert_eq!(encoded_length(1), 8);
/// assert_eq!(encoded_length(5), 8);
/// assert_eq!(encoded_length(6), 16);
/// ```
pub const fn encoded_length(data_size: usize) -> usize {
    data_size.div_ceil(GROUP_BYTES) * GROUP_SYMBOLS
}

/// Upper bound on the number of bytes decodable from `encoded_length` symbols.
///
/// Exact for unpadded full groups; padded input decodes to fewer bytes.
///
/// # Example
///
/// ```
/// use base32_codec::max_decoded_size;
///
/// assert_eq!(max_decoded_size(8), 5);
/// assert_eq!(max_decoded_size(15), 5);
/// assert_eq!(max_decoded_size(16), 10);
/// ```
pub const fn max_decoded_size(encoded_length: usize) -> usize {
    (encoded_length / GROUP_SYMBOLS) * GROUP_BYTES
}

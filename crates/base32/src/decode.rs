//! Base32 decoding into a caller-provided buffer.

use crate::classify::{classify_symbol, Symbol};
use crate::constants::GROUP_SYMBOLS;
use crate::group::{join, QuintetSize};
use crate::Base32Error;

/// Decodes `symbols` into the front of `out`, producing at most `out_limit` bytes.
///
/// The input is read in groups of up to 8 symbols. A group may be cut short by
/// the end of input; missing positions count as zero bits, and the group
/// yields only the bytes fully covered by the value symbols present. Decoding
/// stops once `out_limit` bytes are written or the input is exhausted, and the
/// number of bytes written is returned.
///
/// Padding must form a suffix of its group: a value symbol following `=` in
/// the same group is rejected.
///
/// On error, bytes already written to `out` are left in place and must not be
/// treated as decoded output.
///
/// # Errors
///
/// - [`Base32Error::InvalidSymbol`] for a byte outside the alphabet, or a
///   value symbol after padding within a group.
/// - [`Base32Error::OutputLimitReached`] if `out_limit` exceeds `out.len()`
///   and the decoded data does not fit in `out`.
///
/// # Example
///
/// ```
/// use base32_codec::decode;
///
/// let mut out = [0u8; 16];
/// let len = decode(b"MZXW6YTBOI======", &mut out, 16).unwrap();
/// assert_eq!(&out[..len], b"foobar");
/// ```
pub fn decode(symbols: &[u8], out: &mut [u8], out_limit: usize) -> Result<usize, Base32Error> {
    let mut i = 0;
    let mut j = 0;

    while j < out_limit && i < symbols.len() {
        let end = (i + GROUP_SYMBOLS).min(symbols.len());
        let mut buffer = [0u8; GROUP_SYMBOLS];
        let mut values = 0;
        let mut padding_reached = false;

        for (k, &ch) in symbols[i..end].iter().enumerate() {
            match classify_symbol(ch) {
                Symbol::Invalid => return Err(Base32Error::InvalidSymbol { position: i + k }),
                Symbol::Padding => padding_reached = true,
                Symbol::Value(_) if padding_reached => {
                    return Err(Base32Error::InvalidSymbol { position: i + k })
                }
                Symbol::Value(value) => {
                    buffer[k] = value;
                    values += 1;
                }
            }
        }
        i = end;

        let Some(size) = QuintetSize::from_symbols(values) else {
            continue;
        };
        let count = size.bytes().min(out_limit - j);
        if j + count > out.len() {
            return Err(Base32Error::OutputLimitReached {
                required: j + count,
                available: out.len(),
            });
        }
        out[j..j + count].copy_from_slice(&join(&buffer)[..count]);
        j += count;
    }

    Ok(j)
}

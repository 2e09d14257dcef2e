//! Base32 encoding into a caller-provided buffer.

use crate::constants::{ALPHABET_BYTES, GROUP_BYTES, GROUP_SYMBOLS, PAD_BYTE};
use crate::group::{split, QuintetSize};
use crate::size::encoded_length;
use crate::Base32Error;

/// Encodes `data` into the front of `out`.
///
/// Writes exactly [`encoded_length`]`(data.len())` symbols and returns that
/// count. Nothing is written when `out` is too small.
///
/// # Errors
///
/// Returns [`Base32Error::OutputLimitReached`] if `out` cannot hold the
/// encoded result.
///
/// # Example
///
/// ```
/// use base32_codec::{encode, encoded_length};
///
/// let data = b"foob";
/// let mut out = vec![0u8; encoded_length(data.len())];
/// let len = encode(data, &mut out).unwrap();
/// assert_eq!(&out[..len], b"MZXW6YQ=");
/// ```
pub fn encode(data: &[u8], out: &mut [u8]) -> Result<usize, Base32Error> {
    let required = encoded_length(data.len());
    if out.len() < required {
        return Err(Base32Error::OutputLimitReached {
            required,
            available: out.len(),
        });
    }
    Ok(encode_groups(data, out))
}

/// Encodes `data` into `out`, which must hold at least `encoded_length(data.len())` bytes.
pub(crate) fn encode_groups(data: &[u8], out: &mut [u8]) -> usize {
    let mut j = 0;
    let mut chunks = data.chunks_exact(GROUP_BYTES);
    for chunk in &mut chunks {
        write_group(chunk, QuintetSize::Five, &mut out[j..j + GROUP_SYMBOLS]);
        j += GROUP_SYMBOLS;
    }
    let tail = chunks.remainder();
    if let Some(size) = QuintetSize::from_len(tail.len()) {
        write_group(tail, size, &mut out[j..j + GROUP_SYMBOLS]);
        j += GROUP_SYMBOLS;
    }

    j
}

/// Encodes one chunk of `size` bytes into an 8-symbol group.
#[inline]
fn write_group(chunk: &[u8], size: QuintetSize, group: &mut [u8]) {
    let mut buffer = [0u8; GROUP_BYTES];
    buffer[..chunk.len()].copy_from_slice(chunk);
    let fields = split(&buffer);

    let (symbols, padding) = group.split_at_mut(size.symbols());
    for (dst, &field) in symbols.iter_mut().zip(fields.iter()) {
        *dst = ALPHABET_BYTES[field as usize];
    }
    padding.fill(PAD_BYTE);
}

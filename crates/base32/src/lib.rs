//! Base32 encoding and decoding utilities.
//!
//! This crate implements the RFC 4648 base32 alphabet
//! (`ABCDEFGHIJKLMNOPQRSTUVWXYZ234567`, padded with `=`):
//! - Size calculators for sizing caller-owned buffers
//! - Encoding and decoding into caller-provided byte slices
//! - Owned `String`/`Vec<u8>` conveniences on top
//!
//! # Example
//!
//! ```
//! use base32_codec::{to_base32, from_base32};
//!
//! let data = b"hello world";
//! let encoded = to_base32(data);
//! assert_eq!(encoded, "NBSWY3DPEB3W64TMMQ======");
//! let decoded = from_base32(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

pub mod cli;
mod classify;
mod constants;
mod decode;
mod encode;
mod from_base32;
mod from_base32_bin;
mod group;
mod size;
mod to_base32;

pub use classify::{classify_char, classify_symbol, Symbol};
pub use constants::{ALPHABET, ALPHABET_BYTES, GROUP_BYTES, GROUP_SYMBOLS, PAD, PAD_BYTE};
pub use decode::decode;
pub use encode::encode;
pub use from_base32::from_base32;
pub use from_base32_bin::from_base32_bin;
pub use group::QuintetSize;
pub use size::{encoded_length, max_decoded_size};
pub use to_base32::to_base32;

use thiserror::Error;

/// Error type for base32 operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base32Error {
    /// A character outside the alphabet, or a value symbol after padding in the same group.
    #[error("INVALID_BASE32_SYMBOL at position {position}")]
    InvalidSymbol { position: usize },
    /// The destination buffer cannot hold the result.
    #[error("output needs {required} bytes, only {available} available")]
    OutputLimitReached { required: usize, available: usize },
    /// The requested window lies outside the source slice.
    #[error("window {offset}+{length} is out of bounds for {available} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        available: usize,
    },
}

impl Base32Error {
    /// Negative result code of the C-style interface.
    ///
    /// `-1` is taken by [`Symbol::Padding`] and is never an error.
    pub const fn code(&self) -> i32 {
        match self {
            Base32Error::InvalidSymbol { .. } => -2,
            Base32Error::OutputLimitReached { .. } => -3,
            Base32Error::OutOfBounds { .. } => -4,
        }
    }
}

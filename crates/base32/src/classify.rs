//! Classification of single base32 symbols.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// What a single encoded byte stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A 5-bit value in `0..=31`.
    Value(u8),
    /// The padding character `=`.
    Padding,
    /// Anything outside the alphabet.
    Invalid,
}

impl Symbol {
    /// Result code of this classification in the C-style interface:
    /// the value itself, `-1` for padding, `-2` for an invalid symbol.
    pub const fn code(self) -> i32 {
        match self {
            Symbol::Value(v) => v as i32,
            Symbol::Padding => -1,
            Symbol::Invalid => -2,
        }
    }
}

/// Reverse lookup table covering every byte value.
const TABLE: [Symbol; 256] = {
    let mut table = [Symbol::Invalid; 256];
    let mut i = 0;
    while i < 32 {
        table[ALPHABET_BYTES[i] as usize] = Symbol::Value(i as u8);
        i += 1;
    }
    table[PAD_BYTE as usize] = Symbol::Padding;
    table
};

/// Classifies one encoded byte.
///
/// `A`–`Z` map to 0–25, `2`–`7` map to 26–31, `=` is padding, and every
/// other byte (lowercase letters, `0`, `1`, `8`, `9`, punctuation, non-ASCII)
/// is invalid.
///
/// # Example
///
/// ```
/// use base32_codec::{classify_symbol, Symbol};
///
/// assert_eq!(classify_symbol(b'A'), Symbol::Value(0));
/// assert_eq!(classify_symbol(b'7'), Symbol::Value(31));
/// assert_eq!(classify_symbol(b'='), Symbol::Padding);
/// assert_eq!(classify_symbol(b'a'), Symbol::Invalid);
/// ```
#[inline]
pub const fn classify_symbol(ch: u8) -> Symbol {
    TABLE[ch as usize]
}

/// Classifies a `char`; anything outside ASCII is invalid.
pub fn classify_char(ch: char) -> Symbol {
    u8::try_from(ch).map_or(Symbol::Invalid, classify_symbol)
}

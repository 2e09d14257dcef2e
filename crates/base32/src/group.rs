//! Layout of a single quintet group.

use crate::constants::{GROUP_BYTES, GROUP_SYMBOLS};

/// Number of input bytes in a quintet group, one variant per legal size.
///
/// Only the final group of an input can be short. Each size fixes how many
/// of the eight output symbols carry data and how many are padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuintetSize {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl QuintetSize {
    /// Every size, smallest first.
    pub const ALL: [QuintetSize; 5] = [
        QuintetSize::One,
        QuintetSize::Two,
        QuintetSize::Three,
        QuintetSize::Four,
        QuintetSize::Five,
    ];

    /// Size for a chunk of `len` bytes, `None` outside `1..=5`.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(QuintetSize::One),
            2 => Some(QuintetSize::Two),
            3 => Some(QuintetSize::Three),
            4 => Some(QuintetSize::Four),
            5 => Some(QuintetSize::Five),
            _ => None,
        }
    }

    /// Size of the group a run of `values` data symbols decodes to.
    ///
    /// A group yields only the bytes whose bits are fully covered by the
    /// symbols present, so 1 symbol decodes to nothing.
    pub const fn from_symbols(values: usize) -> Option<Self> {
        match values {
            2 | 3 => Some(QuintetSize::One),
            4 => Some(QuintetSize::Two),
            5 | 6 => Some(QuintetSize::Three),
            7 => Some(QuintetSize::Four),
            8 => Some(QuintetSize::Five),
            _ => None,
        }
    }

    /// Input bytes in the group.
    pub const fn bytes(self) -> usize {
        match self {
            QuintetSize::One => 1,
            QuintetSize::Two => 2,
            QuintetSize::Three => 3,
            QuintetSize::Four => 4,
            QuintetSize::Five => 5,
        }
    }

    /// Output symbols carrying data.
    pub const fn symbols(self) -> usize {
        match self {
            QuintetSize::One => 2,
            QuintetSize::Two => 4,
            QuintetSize::Three => 5,
            QuintetSize::Four => 7,
            QuintetSize::Five => 8,
        }
    }

    /// Trailing padding symbols.
    pub const fn padding(self) -> usize {
        GROUP_SYMBOLS - self.symbols()
    }
}

/// Splits a zero-extended group into its eight 5-bit fields.
#[inline]
pub(crate) fn split(b: &[u8; GROUP_BYTES]) -> [u8; GROUP_SYMBOLS] {
    [
        b[0] >> 3,
        ((b[0] & 0x07) << 2) | (b[1] >> 6),
        (b[1] & 0x3E) >> 1,
        ((b[1] & 0x01) << 4) | (b[2] >> 4),
        ((b[2] & 0x0F) << 1) | (b[3] >> 7),
        (b[3] & 0x7C) >> 2,
        ((b[3] & 0x03) << 3) | (b[4] >> 5),
        b[4] & 0x1F,
    ]
}

/// Packs eight 5-bit fields back into five bytes. Inverse of [`split`].
#[inline]
pub(crate) fn join(v: &[u8; GROUP_SYMBOLS]) -> [u8; GROUP_BYTES] {
    [
        (v[0] << 3) | (v[1] >> 2),
        (v[1] << 6) | (v[2] << 1) | (v[3] >> 4),
        (v[3] << 4) | (v[4] >> 1),
        (v[4] << 7) | (v[5] << 2) | (v[6] >> 3),
        (v[6] << 5) | v[7],
    ]
}

/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sample storage width and maxval handling.
//!
//! Raw Netpbm stores every sample in whole bytes: one byte when the
//! header's maxval fits in eight bits, two big-endian bytes otherwise.
//! The logical precision can still be anything from 1 to 16 bits, which
//! is why [`sample_bits`] exists separately from [`BitDepth`].

/// The storage width of a single sample on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitDepth {
    /// One byte per sample, maxval up to 255
    Eight,
    /// Two big-endian bytes per sample, maxval up to 65535
    Sixteen
}

impl BitDepth {
    /// Number of bytes a single sample occupies in the raster
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2
        }
    }

    /// Largest sample value storable at this width
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => u8::MAX as u16,
            Self::Sixteen => u16::MAX
        }
    }

    /// Storage width implied by a header maxval.
    ///
    /// Follows the raw-binary Netpbm convention: anything above 255
    /// is written as two bytes per sample.
    pub const fn from_maxval(maxval: usize) -> BitDepth {
        if maxval > 255 {
            BitDepth::Sixteen
        } else {
            BitDepth::Eight
        }
    }
}

/// Return the sample precision `b` for which `maxval == 2^b - 1`.
///
/// Only such maxvals are supported: they are the ones a PNG-style
/// bit depth can describe losslessly. Returns `None` for everything
/// else, e.g. the odd but legal-in-netpbm `MAXVAL 100`.
pub fn sample_bits(maxval: usize) -> Option<u8> {
    if maxval == 0 || maxval > usize::from(u16::MAX) {
        return None;
    }
    if !(maxval + 1).is_power_of_two() {
        return None;
    }
    Some((maxval + 1).trailing_zeros() as u8)
}

#[cfg(test)]
mod tests {
    use super::{sample_bits, BitDepth};

    #[test]
    fn full_range_maxvals() {
        assert_eq!(sample_bits(255), Some(8));
        assert_eq!(sample_bits(65535), Some(16));
        assert_eq!(sample_bits(1), Some(1));
        assert_eq!(sample_bits(15), Some(4));
    }

    #[test]
    fn rejected_maxvals() {
        assert_eq!(sample_bits(0), None);
        assert_eq!(sample_bits(100), None);
        assert_eq!(sample_bits(256), None);
        assert_eq!(sample_bits(65536), None);
    }

    #[test]
    fn storage_width() {
        assert_eq!(BitDepth::from_maxval(255), BitDepth::Eight);
        assert_eq!(BitDepth::from_maxval(256), BitDepth::Sixteen);
        assert_eq!(BitDepth::Eight.size_of(), 1);
        assert_eq!(BitDepth::Sixteen.size_of(), 2);
    }
}

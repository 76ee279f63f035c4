/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Colorspace information for the Netpbm-reachable channel layouts.
//!
//! Netpbm can describe one to four channels per pixel and nothing else,
//! so the channel count is the single source of truth here: grayscale
//! means two channels or fewer, alpha means two or four.

/// Channel layouts representable in a raw Netpbm raster
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    /// Grayscale, one channel
    Luma,
    /// Grayscale with alpha, two channels
    LumaA,
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

impl ColorSpace {
    /// Number of color channels present for this colorspace
    ///
    /// E.g. RGB returns 3 since it contains R, G and B colors to make up a pixel
    pub const fn num_components(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::LumaA | Self::RGBA)
    }

    pub const fn is_grayscale(self) -> bool {
        matches!(self, Self::Luma | Self::LumaA)
    }

    /// Map a channel count to a colorspace
    ///
    /// This is total for counts 1 to 4, which is everything a PAM
    /// `DEPTH` field may usefully hold; any other count returns `None`
    /// and callers report it as an unsupported depth.
    pub const fn from_components(components: usize) -> Option<ColorSpace> {
        match components {
            1 => Some(Self::Luma),
            2 => Some(Self::LumaA),
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorSpace;

    #[test]
    fn channel_count_round_trips() {
        for count in 1..=4 {
            let colorspace = ColorSpace::from_components(count).unwrap();
            assert_eq!(colorspace.num_components(), count);
        }
        assert!(ColorSpace::from_components(0).is_none());
        assert!(ColorSpace::from_components(5).is_none());
    }

    #[test]
    fn mode_derivation_follows_channel_count() {
        // two channels: gray plus alpha
        assert!(ColorSpace::LumaA.is_grayscale());
        assert!(ColorSpace::LumaA.has_alpha());
        // four channels: color plus alpha
        assert!(!ColorSpace::RGBA.is_grayscale());
        assert!(ColorSpace::RGBA.has_alpha());

        assert!(!ColorSpace::Luma.has_alpha());
        assert!(!ColorSpace::RGB.has_alpha());
    }
}

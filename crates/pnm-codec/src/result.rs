/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding results
//!
//! The decoder returns either `u8` or `u16` pixels depending on the
//! image's maxval, this enum holds both options.

/// A fully decoded raster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodingResult {
    /// One byte per sample, images with maxval up to 255
    U8(Vec<u8>),
    /// One `u16` per sample, images with maxval above 255
    U16(Vec<u16>)
}

impl DecodingResult {
    /// Return the contained `Vec<u8>` or `None` if the image was 16 bit
    pub fn u8(self) -> Option<Vec<u8>> {
        match self {
            DecodingResult::U8(data) => Some(data),
            DecodingResult::U16(_) => None
        }
    }

    /// Return the contained `Vec<u16>` or `None` if the image was 8 bit
    pub fn u16(self) -> Option<Vec<u16>> {
        match self {
            DecodingResult::U16(data) => Some(data),
            DecodingResult::U8(_) => None
        }
    }
}

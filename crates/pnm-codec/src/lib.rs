/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A streaming Netpbm decoder and encoder
//!
//! This crate handles the raw-binary members of the Netpbm family,
//! namely P5 (PGM), P6 (PPM) and P7 (PAM). The ASCII variants
//! (P1, P2, P3) and the packed bitmap P4 are recognized but rejected
//! with an unsupported-version error.
//!
//! The decoder reads from any [`std::io::Read`] and hands out the
//! raster one row at a time, so a transcoding pipeline never needs to
//! hold more than a single row in memory. A whole-image `decode()`
//! convenience is provided on top of the row path.
//!
//! # Example
//! ```
//! use pnm_codec::PnmDecoder;
//!
//! let image: &[u8] = b"P5\n2 2\n255\nABCD";
//! let mut decoder = PnmDecoder::new(image);
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(pixels.u8().unwrap(), b"ABCD");
//! ```
pub use crate::decoder::{PnmDecodeErrors, PnmDecoder, PnmInfo, PnmVersions};
pub use crate::encoder::{version_for_colorspace, PnmEncodeErrors, PnmEncoder};

pub mod bit_depth;
pub mod colorspace;
mod decoder;
mod encoder;
pub mod options;
pub mod result;

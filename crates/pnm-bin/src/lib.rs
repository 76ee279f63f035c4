/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Transcoding drivers behind the `pnm2png` and `png2pnm` binaries.
//!
//! The heavy lifting lives elsewhere: `pnm-codec` owns the Netpbm
//! grammar and the `png` crate owns the PNG container. This crate
//! wires a decoded header on one side into an encoder configuration on
//! the other and pumps rows between them, one row at a time.

pub use crate::errors::ConvertErrors;
pub use crate::from_png::png_to_pnm;
pub use crate::to_png::{pnm_to_png, PngConfig};

pub mod cmd_args;
pub mod color;
mod errors;
mod from_png;
pub mod logging;
mod to_png;

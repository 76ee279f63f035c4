/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options

/// Options shared by the decoding path.
///
/// The defaults limit images to 2^17 (131'072) pixels in either
/// dimension; a header may legally claim absurd dimensions and the
/// limits keep one from allocating on an attacker's behalf.
#[derive(Copy, Clone, Debug)]
pub struct DecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:  1 << 17,
            max_height: 1 << 17
        }
    }
}

impl DecoderOptions {
    /// Get the maximum width the decoder accepts
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get the maximum height the decoder accepts
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Set the maximum width the decoder accepts
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the maximum height the decoder accepts
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}

/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm to PNG driver.

use std::io::{Read, Write};

use log::warn;
use pnm_codec::colorspace::ColorSpace;
use pnm_codec::{PnmDecodeErrors, PnmDecoder};

use crate::errors::ConvertErrors;

/// Pass-through configuration for the PNG writer.
///
/// Everything here is optional and sourced from the command line; the
/// defaults produce a plain, non-interlaced PNG with the encoder's own
/// compression setting.
#[derive(Clone, Debug, Default)]
pub struct PngConfig {
    /// Request Adam7 interlaced output
    pub interlace:   bool,
    /// Color to mark fully transparent via a tRNS chunk
    pub transparent: Option<(u16, u16, u16)>,
    /// Suggested background color, written as a bKGD chunk
    pub background:  Option<(u16, u16, u16)>,
    /// Source gamma, written as a gAMA chunk
    pub gamma:       Option<f32>,
    /// zlib-style compression level 0-9
    pub compression: Option<u8>
}

/// Convert one raw Netpbm image into a PNG.
///
/// The header decides everything: channel count picks the PNG color
/// type, maxval picks the PNG bit depth. Rows are pumped straight from
/// the Netpbm raster into the PNG encoder, one row at a time; 16-bit
/// samples are big-endian on both sides so no repacking happens on the
/// happy path.
pub fn pnm_to_png<R: Read, W: Write>(
    input: R, output: W, config: &PngConfig
) -> Result<(), ConvertErrors> {
    let mut decoder = PnmDecoder::new(input);
    decoder.read_headers()?;

    let info = decoder
        .get_info()
        .ok_or(PnmDecodeErrors::GenericStatic("headers not decoded"))?;

    let color = match info.colorspace {
        ColorSpace::Luma => png::ColorType::Grayscale,
        ColorSpace::LumaA => png::ColorType::GrayscaleAlpha,
        ColorSpace::RGB => png::ColorType::Rgb,
        ColorSpace::RGBA => png::ColorType::Rgba
    };
    let depth = match info.sample_bits {
        1 => png::BitDepth::One,
        2 => png::BitDepth::Two,
        4 => png::BitDepth::Four,
        8 => png::BitDepth::Eight,
        16 => png::BitDepth::Sixteen,
        bits => {
            return Err(ConvertErrors::Unsupported(format!(
                "PNG cannot store {bits}-bit samples, only 1, 2, 4, 8 and 16"
            )))
        }
    };
    if info.sample_bits < 8 && info.colorspace != ColorSpace::Luma {
        return Err(ConvertErrors::Unsupported(format!(
            "PNG stores sub-byte samples only for grayscale, not {:?}",
            info.colorspace
        )));
    }

    let mut encoder = png::Encoder::new(output, info.width as u32, info.height as u32);
    encoder.set_color(color);
    encoder.set_depth(depth);

    if let Some(level) = config.compression {
        encoder.set_compression(compression_tier(level));
    }
    if let Some(gamma) = config.gamma {
        encoder.set_source_gamma(png::ScaledFloat::new(gamma));
    }
    if let Some(rgb) = config.transparent {
        if info.colorspace.has_alpha() {
            warn!("--transparent ignored, the image already carries an alpha channel");
        } else {
            encoder.set_trns(sample_chunk(info.colorspace, rgb));
        }
    }
    if config.interlace {
        warn!("interlaced output is not supported by the PNG encoder, writing non-interlaced");
    }

    let mut writer = encoder.write_header()?;

    if let Some(rgb) = config.background {
        // the encoder has no bKGD setter, the chunk goes in by hand
        // between IHDR and the first IDAT
        writer.write_chunk(png::chunk::bKGD, &sample_chunk(info.colorspace, rgb))?;
    }

    let mut row = vec![0_u8; decoder.row_size()];
    let mut stream = writer.stream_writer()?;

    if info.sample_bits < 8 {
        // netpbm stores one sample per byte even below 8 bits, PNG
        // wants sub-byte scanlines packed MSB first
        let packed_size = (info.width * usize::from(info.sample_bits) + 7) / 8;
        let mut packed = vec![0_u8; packed_size];

        for _ in 0..info.height {
            decoder.next_row_into(&mut row)?;
            pack_row(&row, info.sample_bits, &mut packed);
            stream.write_all(&packed)?;
        }
    } else {
        for _ in 0..info.height {
            decoder.next_row_into(&mut row)?;
            stream.write_all(&row)?;
        }
    }
    stream.finish()?;

    Ok(())
}

/// Map a zlib-style 0-9 level onto the encoder's named tiers.
fn compression_tier(level: u8) -> png::Compression {
    match level {
        0..=2 => png::Compression::Fast,
        3..=6 => png::Compression::Default,
        _ => png::Compression::Best
    }
}

/// Serialize a color triple the way tRNS and bKGD expect it: one
/// big-endian 16-bit value per channel, a single channel for grayscale.
fn sample_chunk(colorspace: ColorSpace, (r, g, b): (u16, u16, u16)) -> Vec<u8> {
    if colorspace.is_grayscale() {
        r.to_be_bytes().to_vec()
    } else {
        let mut data = Vec::with_capacity(6);
        data.extend(r.to_be_bytes());
        data.extend(g.to_be_bytes());
        data.extend(b.to_be_bytes());
        data
    }
}

/// Pack whole-byte samples into a sub-byte PNG scanline, MSB first.
fn pack_row(samples: &[u8], bits: u8, packed: &mut [u8]) {
    let per_byte = 8 / usize::from(bits);
    let mask = (1_u16 << bits) as u8 - 1;

    packed.fill(0);

    for (i, sample) in samples.iter().enumerate() {
        let shift = 8 - usize::from(bits) * (i % per_byte + 1);
        packed[i / per_byte] |= (sample & mask) << shift;
    }
}

#[cfg(test)]
mod tests {
    use super::{compression_tier, pack_row, sample_chunk};
    use pnm_codec::colorspace::ColorSpace;

    #[test]
    fn bit_packing_is_msb_first() {
        let mut packed = vec![0_u8; 1];
        pack_row(&[1, 0, 1, 1, 0, 0, 1, 0], 1, &mut packed);
        assert_eq!(packed, vec![0b1011_0010]);

        let mut packed = vec![0_u8; 2];
        pack_row(&[3, 0, 1, 2, 3], 2, &mut packed);
        assert_eq!(packed, vec![0b1100_0110, 0b1100_0000]);

        let mut packed = vec![0_u8; 2];
        pack_row(&[0xF, 0x1, 0x7], 4, &mut packed);
        assert_eq!(packed, vec![0xF1, 0x70]);
    }

    #[test]
    fn chunk_layout_follows_grayscale_flag() {
        assert_eq!(sample_chunk(ColorSpace::Luma, (0x0102, 0, 0)), vec![1, 2]);
        assert_eq!(
            sample_chunk(ColorSpace::RGB, (0x0102, 0x0304, 0x0506)),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn compression_levels_cover_the_scale() {
        for level in 0..=9 {
            // only checks totality, the named tiers are the encoder's
            let _ = compression_tier(level);
        }
    }
}

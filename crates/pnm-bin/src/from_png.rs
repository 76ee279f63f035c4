/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG to Netpbm driver.

use std::io::{Read, Write};

use log::info;
use pnm_codec::colorspace::ColorSpace;
use pnm_codec::{version_for_colorspace, PnmEncoder, PnmVersions};

use crate::errors::ConvertErrors;

/// Convert one PNG into a raw Netpbm image.
///
/// Palette and sub-byte grayscale images are expanded by the PNG
/// decoder first, so the channel count coming out of it is always
/// netpbm-representable: 1 or 3 channels take the classic P5/P6
/// headers, alpha routes through PAM. The raster is streamed row by
/// row except for interlaced sources, where deinterlacing needs the
/// whole frame.
pub fn png_to_pnm<R: Read, W: Write>(input: R, mut output: W) -> Result<(), ConvertErrors> {
    let mut decoder = png::Decoder::new(input);
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder.read_info()?;

    let (width, height, interlaced) = {
        let png_info = reader.info();
        (
            png_info.width as usize,
            png_info.height as usize,
            png_info.interlaced
        )
    };
    let (color, depth) = reader.output_color_type();
    let channels = color.samples();

    let colorspace = ColorSpace::from_components(channels).ok_or_else(|| {
        ConvertErrors::Unsupported(format!(
            "cannot map {channels} PNG channels onto a netpbm raster"
        ))
    })?;
    let bits = depth as usize;
    if bits < 8 {
        // EXPAND widens 1/2/4-bit grayscale, anything still narrower
        // has no whole-byte netpbm representation
        return Err(ConvertErrors::Unsupported(format!(
            "{bits}-bit samples survived expansion, cannot express them in netpbm"
        )));
    }
    let maxval = (1_usize << bits) - 1;

    info!("PNG input: {width}x{height}, {channels} channels, {bits} bits");

    let mut encoder = PnmEncoder::new(&mut output);

    match version_for_colorspace(colorspace) {
        PnmVersions::P7 => encoder.write_headers_pam(width, height, colorspace, maxval)?,
        version => encoder.write_headers(version, width, height, maxval)?
    }

    let row_size = width * channels * (bits / 8);

    if interlaced {
        // Adam7 passes only come back in image order once the whole
        // frame is decoded
        let mut frame = vec![0_u8; reader.output_buffer_size()];
        reader.next_frame(&mut frame)?;

        for row in frame.chunks_exact(row_size) {
            encoder.write_row(row)?;
        }
    } else {
        while let Some(row) = reader.next_row()? {
            encoder.write_row(row.data())?;
        }
    }
    encoder.flush()?;

    Ok(())
}

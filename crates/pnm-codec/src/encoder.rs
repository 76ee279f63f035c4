/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{self, Formatter};
use std::io::{self, Write};

use crate::colorspace::ColorSpace;
use crate::decoder::PnmVersions;

/// Errors occurring during encoding
pub enum PnmEncodeErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PnmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PnmEncodeErrors::IoErrors(err)
    }
}

impl fmt::Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PnmEncodeErrors::Static(errors) => writeln!(f, "{errors}"),
            PnmEncodeErrors::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

/// A Netpbm encoder
///
/// Writes the raw-binary P5, P6 and P7 formats. One- and
/// three-channel images take the compact P5/P6 token header, anything
/// with alpha goes through the PAM header since the classic formats
/// cannot carry a fourth channel.
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    /// Write headers for the P5 and P6 formats
    pub fn write_headers(
        &mut self, version: PnmVersions, width: usize, height: usize, maxval: usize
    ) -> Result<(), PnmEncodeErrors> {
        let header = format!("{version}\n{width}\n{height}\n{maxval}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write headers for the P7 format
    pub fn write_headers_pam(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, maxval: usize
    ) -> Result<(), PnmEncodeErrors> {
        let tuple_type = pam_tuple_type(colorspace);

        let header = format!(
            "P7\nWIDTH {}\nHEIGHT {}\nDEPTH {}\nMAXVAL {}\nTUPLTYPE {}\nENDHDR\n",
            width,
            height,
            colorspace.num_components(),
            maxval,
            tuple_type
        );
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write one complete raster row.
    ///
    /// The row is taken verbatim, 16-bit samples are expected to
    /// already be in big-endian order as both PNG rows and 16-bit
    /// netpbm rasters carry them that way.
    pub fn write_row(&mut self, row: &[u8]) -> Result<(), PnmEncodeErrors> {
        self.writer.write_all(row)?;

        Ok(())
    }

    /// Flush the underlying writer, call after the last row.
    pub fn flush(&mut self) -> Result<(), PnmEncodeErrors> {
        self.writer.flush()?;

        Ok(())
    }

    /// Encode `data` as an 8-bit netpbm image, one byte per sample.
    pub fn encode_u8(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u8]
    ) -> Result<(), PnmEncodeErrors> {
        if width * height * colorspace.num_components() != data.len() {
            return Err(PnmEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        match version_for_colorspace(colorspace) {
            PnmVersions::P5 => self.write_headers(PnmVersions::P5, width, height, 255)?,
            PnmVersions::P6 => self.write_headers(PnmVersions::P6, width, height, 255)?,
            PnmVersions::P7 => self.write_headers_pam(width, height, colorspace, 255)?
        }
        self.writer.write_all(data)?;
        self.flush()
    }

    /// Encode `data` as a 16-bit netpbm image, two big-endian bytes
    /// per sample.
    pub fn encode_u16(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u16]
    ) -> Result<(), PnmEncodeErrors> {
        if width * height * colorspace.num_components() != data.len() {
            return Err(PnmEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        match version_for_colorspace(colorspace) {
            PnmVersions::P5 => self.write_headers(PnmVersions::P5, width, height, 65535)?,
            PnmVersions::P6 => self.write_headers(PnmVersions::P6, width, height, 65535)?,
            PnmVersions::P7 => self.write_headers_pam(width, height, colorspace, 65535)?
        }
        // big-endian, that's what netpbm wrote first and everyone
        // else emulates
        let owned_data = data
            .iter()
            .flat_map(|x| x.to_be_bytes())
            .collect::<Vec<u8>>();

        self.writer.write_all(&owned_data)?;
        self.flush()
    }
}

/// Pick the Netpbm variant a colorspace is written as.
///
/// Channel count is the only input to this policy: one channel is a
/// graymap, three a pixmap, and two or four take the PAM route.
pub const fn version_for_colorspace(colorspace: ColorSpace) -> PnmVersions {
    match colorspace {
        ColorSpace::Luma => PnmVersions::P5,
        ColorSpace::RGB => PnmVersions::P6,
        ColorSpace::LumaA | ColorSpace::RGBA => PnmVersions::P7
    }
}

const fn pam_tuple_type(colorspace: ColorSpace) -> &'static str {
    match colorspace {
        ColorSpace::Luma => "GRAYSCALE",
        ColorSpace::RGB => "RGB",
        ColorSpace::LumaA => "GRAYSCALE_ALPHA",
        ColorSpace::RGBA => "RGB_ALPHA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::PnmDecoder;

    #[test]
    fn p5_header_shape() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);
        encoder.encode_u8(2, 2, ColorSpace::Luma, &[0, 1, 2, 3]).unwrap();

        assert!(sink.starts_with(b"P5\n2\n2\n255\n"));
        assert_eq!(&sink[sink.len() - 4..], &[0, 1, 2, 3]);
    }

    #[test]
    fn alpha_goes_through_pam() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);
        encoder
            .encode_u8(1, 1, ColorSpace::RGBA, &[1, 2, 3, 4])
            .unwrap();

        let header = String::from_utf8_lossy(&sink[..sink.len() - 4]);
        assert!(header.starts_with("P7\n"));
        assert!(header.contains("DEPTH 4\n"));
        assert!(header.contains("TUPLTYPE RGB_ALPHA\n"));
        assert!(header.ends_with("ENDHDR\n"));
    }

    #[test]
    fn sixteen_bit_samples_are_big_endian() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);
        encoder.encode_u16(2, 1, ColorSpace::Luma, &[1, 255]).unwrap();

        assert!(sink.starts_with(b"P5\n2\n1\n65535\n"));
        assert_eq!(&sink[sink.len() - 4..], &[0x00, 0x01, 0x00, 0xFF]);
    }

    #[test]
    fn mismatched_length_is_rejected() {
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);
        let result = encoder.encode_u8(2, 2, ColorSpace::RGB, &[0_u8; 5]);
        assert!(result.is_err());
    }

    #[test]
    fn encoded_images_decode_back() {
        let samples: Vec<u16> = (0..12).map(|x| x * 999).collect();
        let mut sink = Vec::new();
        let mut encoder = PnmEncoder::new(&mut sink);
        encoder.encode_u16(2, 3, ColorSpace::LumaA, &samples).unwrap();

        let mut decoder = PnmDecoder::new(&sink[..]);
        let decoded = decoder.decode().unwrap();

        let info = decoder.get_info().unwrap();
        assert_eq!((info.width, info.height), (2, 3));
        assert_eq!(info.colorspace, ColorSpace::LumaA);
        assert_eq!(info.maxval, 65535);
        assert_eq!(decoded.u16().unwrap(), samples);
    }
}

/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Read};

use log::{info, trace};

use crate::bit_depth::{sample_bits, BitDepth};
use crate::colorspace::ColorSpace;
use crate::options::DecoderOptions;
use crate::result::DecodingResult;

/// Raw-binary Netpbm format variants.
///
/// The format tag selects the header grammar: P5 and P6 share the
/// whitespace-token grammar, P7 uses the line-oriented PAM grammar.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PnmVersions {
    /// Portable graymap, one channel
    P5,
    /// Portable pixmap, three channels
    P6,
    /// Portable arbitrary map, one to four channels
    P7
}

impl Display for PnmVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6"),
            Self::P7 => write!(f, "P7")
        }
    }
}

/// Errors arising when decoding a Netpbm stream
pub enum PnmDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    /// Malformed or incomplete header syntax
    InvalidHeader(String),
    /// A recognized but unimplemented Netpbm tag, e.g. the ASCII `P2`
    UnsupportedVersion(String),
    /// A structurally valid header with a channel count outside 1..=4
    UnsupportedDepth(usize),
    /// A maxval that is not `2^b - 1` for some `b` in 1..=16
    UnsupportedMaxval(usize),
    /// Raster shorter than the header promises
    TruncatedData { expected: usize, found: usize },
    /// Dimensions beyond the configured decoder limits
    LargeDimensions(usize, usize),
    IoErrors(io::Error)
}

impl fmt::Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic(val) => writeln!(f, "{val}"),
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedVersion(tag) => {
                writeln!(
                    f,
                    "Unsupported netpbm version `{tag}`, supported versions are P5, P6 and P7"
                )
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported depth {depth}, a netpbm raster carries 1 to 4 channels"
                )
            }
            Self::UnsupportedMaxval(maxval) => {
                write!(f, "Unsupported maxval {maxval}, accepted values are ")?;
                for bits in 1..=16_u32 {
                    if bits > 1 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", (1_u32 << bits) - 1)?;
                }
                writeln!(f)
            }
            Self::TruncatedData { expected, found } => {
                writeln!(
                    f,
                    "Expected {expected} bytes of raster data but the stream ended after {found}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

impl From<io::Error> for PnmDecodeErrors {
    fn from(err: io::Error) -> Self {
        PnmDecodeErrors::IoErrors(err)
    }
}

/// Parsed header of a Netpbm stream.
///
/// Constructed once by [`PnmDecoder::read_headers`] and immutable
/// afterwards.
#[derive(Copy, Clone, Debug)]
pub struct PnmInfo {
    pub version:    PnmVersions,
    pub width:      usize,
    pub height:     usize,
    pub colorspace: ColorSpace,
    pub maxval:     usize,
    /// Sample precision `b`, with `maxval == 2^b - 1`
    pub sample_bits: u8
}

/// An instance of a Netpbm decoder
///
/// The decoder can decode the raw-binary P5, P6 and P7 formats from
/// any forward-only byte stream. Headers are parsed up front, the
/// raster is then handed out row by row so that a transcoding caller
/// never holds more than one row.
pub struct PnmDecoder<R: Read> {
    reader:          R,
    width:           usize,
    height:          usize,
    colorspace:      ColorSpace,
    bit_depth:       BitDepth,
    sample_bits:     u8,
    maxval:          usize,
    version:         PnmVersions,
    decoded_headers: bool,
    row_size:        usize,
    raster_size:     usize,
    raster_read:     usize,
    options:         DecoderOptions
}

impl<R: Read> PnmDecoder<R> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - reader: the stream positioned at the start of a Netpbm payload
    ///
    /// # Example
    /// ```
    /// use pnm_codec::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(&b"NOT VALID PNM"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(reader: R) -> PnmDecoder<R> {
        PnmDecoder::new_with_options(reader, DecoderOptions::default())
    }

    /// Create a new decoder with the specified options
    pub fn new_with_options(reader: R, options: DecoderOptions) -> PnmDecoder<R> {
        PnmDecoder {
            reader,
            width: 0,
            height: 0,
            colorspace: ColorSpace::Luma,
            bit_depth: BitDepth::Eight,
            sample_bits: 8,
            maxval: 255,
            version: PnmVersions::P5,
            decoded_headers: false,
            row_size: 0,
            raster_size: 0,
            raster_read: 0,
            options
        }
    }

    /// Read the Netpbm header and store it in internal state.
    ///
    /// A second call is a no-op.
    pub fn read_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let p = self.read_header_byte()?;
        let version = self.read_header_byte()?;

        if p != b'P' {
            let tag = format!("{}{}", p as char, version as char);
            return Err(PnmDecodeErrors::UnsupportedVersion(tag));
        }

        match version {
            b'5' => self.decode_simple_header(PnmVersions::P5)?,
            b'6' => self.decode_simple_header(PnmVersions::P6)?,
            b'7' => self.decode_pam_header()?,
            _ => {
                let tag = format!("P{}", version as char);
                return Err(PnmDecodeErrors::UnsupportedVersion(tag));
            }
        }

        // bound width*height*channels*sample size before anyone
        // allocates from it
        let sample_size = self.bit_depth.size_of();
        let row_size = self
            .width
            .checked_mul(self.colorspace.num_components())
            .and_then(|v| v.checked_mul(sample_size));
        let raster_size = row_size.and_then(|v| v.checked_mul(self.height));

        match (row_size, raster_size) {
            (Some(row), Some(raster)) => {
                self.row_size = row;
                self.raster_size = raster;
            }
            _ => {
                return Err(PnmDecodeErrors::InvalidHeader(
                    "raster size overflows".to_string()
                ))
            }
        }
        self.decoded_headers = true;

        info!("Version: {}", self.version);
        info!("Width: {}, height: {}", self.width, self.height);
        info!("Colorspace: {:?}", self.colorspace);
        info!("Maxval: {} ({} bits)", self.maxval, self.sample_bits);

        Ok(())
    }

    /// Decode header values for the P5 and P6 formats.
    ///
    /// The header is a whitespace separated token stream, tokenized
    /// byte by byte since the single whitespace byte that terminates
    /// the header is not guaranteed to be a newline.
    fn decode_simple_header(&mut self, version: PnmVersions) -> Result<(), PnmDecodeErrors> {
        self.version = version;
        self.colorspace = match version {
            PnmVersions::P5 => ColorSpace::Luma,
            PnmVersions::P6 => ColorSpace::RGB,
            PnmVersions::P7 => unreachable!()
        };

        let width = self.read_header_int()?;
        let height = self.read_header_int()?;
        let maxval = self.read_header_int()?;

        self.set_dimensions(width, height)?;
        self.set_maxval(maxval)
    }

    /// Decode the line-oriented P7 (PAM) header.
    fn decode_pam_header(&mut self) -> Result<(), PnmDecodeErrors> {
        self.version = PnmVersions::P7;

        let mut fields: BTreeMap<String, String> = BTreeMap::new();

        loop {
            let line = self.read_header_line()?;
            let line = line.trim_end_matches('\r');

            if line == "ENDHDR" {
                break;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (keyword, value) = match line.split_once(|c: char| c.is_ascii_whitespace()) {
                Some((keyword, value)) => (keyword, value.trim()),
                None => (line, "")
            };
            // a repeated keyword extends the previous value, this is
            // how multi-token values span several lines
            match fields.entry(keyword.to_string()) {
                Entry::Occupied(mut entry) => {
                    let slot = entry.get_mut();
                    slot.push(' ');
                    slot.push_str(value);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value.to_string());
                }
            }
        }

        let width = parse_pam_field(&fields, "WIDTH")?;
        let height = parse_pam_field(&fields, "HEIGHT")?;
        let depth = parse_pam_field(&fields, "DEPTH")?;
        let maxval = parse_pam_field(&fields, "MAXVAL")?;

        self.set_dimensions(width, height)?;
        self.colorspace =
            ColorSpace::from_components(depth).ok_or(PnmDecodeErrors::UnsupportedDepth(depth))?;
        self.set_maxval(maxval)?;

        if let Some(tuple_type) = fields.get("TUPLTYPE") {
            // accepted but not validated, channel count is the single
            // source of truth
            trace!("TUPLTYPE: {tuple_type}");
        }
        Ok(())
    }

    fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), PnmDecodeErrors> {
        if width == 0 || height == 0 {
            return Err(PnmDecodeErrors::InvalidHeader(
                "zero width or height".to_string()
            ));
        }
        if width > self.options.max_width() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.max_height(),
                height
            ));
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn set_maxval(&mut self, maxval: usize) -> Result<(), PnmDecodeErrors> {
        if maxval == 0 {
            return Err(PnmDecodeErrors::InvalidHeader("zero maxval".to_string()));
        }
        self.sample_bits =
            sample_bits(maxval).ok_or(PnmDecodeErrors::UnsupportedMaxval(maxval))?;
        self.bit_depth = BitDepth::from_maxval(maxval);
        self.maxval = maxval;
        Ok(())
    }

    /// Read a single header byte, end of stream is a header error.
    fn read_header_byte(&mut self) -> Result<u8, PnmDecodeErrors> {
        let mut byte = [0_u8; 1];

        match self.reader.read_exact(&mut byte) {
            Ok(()) => Ok(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(PnmDecodeErrors::InvalidHeader(
                    "premature end of stream while reading header".to_string()
                ))
            }
            Err(e) => Err(PnmDecodeErrors::IoErrors(e))
        }
    }

    /// Read one decimal header token in a single forward scan.
    ///
    /// Whitespace before the token is skipped, `#` starts a comment
    /// running to end of line and may sit between any two tokens. The
    /// byte terminating the token is consumed and never more than
    /// that, since the first raster byte follows immediately after the
    /// final token's single whitespace terminator.
    fn read_header_int(&mut self) -> Result<usize, PnmDecodeErrors> {
        let first = loop {
            let byte = self.read_header_byte()?;

            if byte == b'#' {
                self.skip_comment()?;
            } else if byte.is_ascii_whitespace() {
                continue;
            } else if byte.is_ascii_digit() {
                break byte;
            } else {
                return Err(unexpected_char(byte));
            }
        };

        let mut value = usize::from(first - b'0');

        loop {
            let byte = self.read_header_byte()?;

            if byte.is_ascii_digit() {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                    .ok_or_else(|| {
                        PnmDecodeErrors::InvalidHeader("numeric overflow in header".to_string())
                    })?;
            } else if byte == b'#' {
                // a comment straight after the digits, its newline
                // doubles as the token's terminating whitespace
                self.skip_comment()?;
                return Ok(value);
            } else if byte.is_ascii_whitespace() {
                return Ok(value);
            } else {
                return Err(unexpected_char(byte));
            }
        }
    }

    /// Consume a comment through its terminating newline.
    fn skip_comment(&mut self) -> Result<(), PnmDecodeErrors> {
        loop {
            let byte = self.read_header_byte()?;
            if byte == b'\n' || byte == b'\r' {
                return Ok(());
            }
        }
    }

    /// Read one newline-terminated PAM header line, without the newline.
    fn read_header_line(&mut self) -> Result<String, PnmDecodeErrors> {
        let mut line = Vec::new();

        loop {
            let mut byte = [0_u8; 1];
            match self.reader.read_exact(&mut byte) {
                Ok(()) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    line.push(byte[0]);
                }
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(PnmDecodeErrors::InvalidHeader(
                        "end of stream before ENDHDR".to_string()
                    ))
                }
                Err(e) => return Err(PnmDecodeErrors::IoErrors(e))
            }
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Return the parsed header, or `None` if headers aren't decoded
    pub const fn get_info(&self) -> Option<PnmInfo> {
        if self.decoded_headers {
            Some(PnmInfo {
                version:     self.version,
                width:       self.width,
                height:      self.height,
                colorspace:  self.colorspace,
                maxval:      self.maxval,
                sample_bits: self.sample_bits
            })
        } else {
            None
        }
    }

    /// Return the image dimensions or `None` if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the image colorspace or `None` if headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Return the sample storage width or `None` if headers aren't decoded
    pub const fn get_bit_depth(&self) -> Option<BitDepth> {
        if self.decoded_headers {
            Some(self.bit_depth)
        } else {
            None
        }
    }

    /// Bytes occupied by a single raster row.
    ///
    /// Zero until headers are decoded.
    pub const fn row_size(&self) -> usize {
        self.row_size
    }

    /// Read the next raster row into `row`.
    ///
    /// `row` must be exactly [`row_size`](Self::row_size) bytes. Rows
    /// are produced top to bottom; the caller drives the loop with the
    /// header's height. A stream ending mid-raster fails with
    /// [`PnmDecodeErrors::TruncatedData`].
    pub fn next_row_into(&mut self, row: &mut [u8]) -> Result<(), PnmDecodeErrors> {
        if !self.decoded_headers {
            return Err(PnmDecodeErrors::GenericStatic(
                "headers not decoded, call read_headers first"
            ));
        }
        debug_assert_eq!(row.len(), self.row_size);

        let mut filled = 0;

        while filled < row.len() {
            match self.reader.read(&mut row[filled..]) {
                Ok(0) => {
                    return Err(PnmDecodeErrors::TruncatedData {
                        expected: self.raster_size,
                        found:    self.raster_read + filled
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(PnmDecodeErrors::IoErrors(e))
            }
        }
        self.raster_read += filled;

        Ok(())
    }

    /// Decode the whole raster.
    ///
    /// DecodingResult is an enum that can have either `Vec<u8>` or
    /// `Vec<u16>`, depending on the image maxval. 16-bit samples are
    /// converted from the stream's big-endian order.
    pub fn decode(&mut self) -> Result<DecodingResult, PnmDecodeErrors> {
        self.read_headers()?;

        let mut data = vec![0_u8; self.raster_size];
        let row_size = self.row_size;

        for row in data.chunks_exact_mut(row_size) {
            self.next_row_into(row)?;
        }

        match self.bit_depth {
            BitDepth::Eight => Ok(DecodingResult::U8(data)),
            BitDepth::Sixteen => {
                // 16 bit netpbm is written big-endian
                let samples = data
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();

                Ok(DecodingResult::U16(samples))
            }
        }
    }
}

fn parse_pam_field(
    fields: &BTreeMap<String, String>, name: &str
) -> Result<usize, PnmDecodeErrors> {
    let value = fields
        .get(name)
        .ok_or_else(|| PnmDecodeErrors::InvalidHeader(format!("PAM header missing {name}")))?;

    match value.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(PnmDecodeErrors::InvalidHeader(format!(
            "invalid value `{value}` for {name}"
        )))
    }
}

fn unexpected_char(byte: u8) -> PnmDecodeErrors {
    PnmDecodeErrors::InvalidHeader(format!(
        "unexpected character `{}` (0x{byte:02x}) in header",
        byte as char
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(data: &[u8]) -> Result<DecodingResult, PnmDecodeErrors> {
        PnmDecoder::new(data).decode()
    }

    #[test]
    fn p5_single_line_header() {
        let mut data = b"P5 10 20 255\n".to_vec();
        data.extend(std::iter::repeat(7_u8).take(10 * 20));

        let mut decoder = PnmDecoder::new(&data[..]);
        decoder.read_headers().unwrap();

        let info = decoder.get_info().unwrap();
        assert_eq!(info.version, PnmVersions::P5);
        assert_eq!((info.width, info.height), (10, 20));
        assert_eq!(info.colorspace, ColorSpace::Luma);
        assert_eq!(info.maxval, 255);
        assert_eq!(info.sample_bits, 8);
    }

    #[test]
    fn p6_header_with_comment_between_tokens() {
        let mut data = b"P6\n# comment\n4 4\n255\n".to_vec();
        data.extend(std::iter::repeat(0_u8).take(4 * 4 * 3));

        let mut decoder = PnmDecoder::new(&data[..]);
        decoder.read_headers().unwrap();

        assert_eq!(decoder.get_dimensions(), Some((4, 4)));
        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGB));
        assert_eq!(decoder.row_size(), 12);
    }

    #[test]
    fn comment_directly_after_digits_terminates_the_token() {
        let mut data = b"P5 12#c\n3 255\n".to_vec();
        data.extend(std::iter::repeat(0_u8).take(12 * 3));

        let mut decoder = PnmDecoder::new(&data[..]);
        decoder.read_headers().unwrap();
        assert_eq!(decoder.get_dimensions(), Some((12, 3)));
    }

    #[test]
    fn stray_header_byte_is_rejected() {
        let err = decode_all(b"P5 10 x 255\n").unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn header_eof_is_rejected() {
        let err = decode_all(b"P6 10 10").unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn unsupported_versions_are_named() {
        for tag in [&b"P1 2 2\n"[..], b"P2 2 2 255\n", b"P3 2 2 255\n", b"P4 2 2\n"] {
            let err = decode_all(tag).unwrap_err();
            assert!(matches!(err, PnmDecodeErrors::UnsupportedVersion(_)));
        }
    }

    #[test]
    fn not_a_pnm_stream() {
        let err = decode_all(b"\x89PNG\r\n").unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::UnsupportedVersion(_)));
    }

    #[test]
    fn odd_maxval_is_unsupported() {
        let err = decode_all(b"P5 2 2 100\n\0\0\0\0").unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::UnsupportedMaxval(100)));
    }

    #[test]
    fn truncated_raster() {
        let err = decode_all(b"P5 4 4 255\nshort").unwrap_err();
        match err {
            PnmDecodeErrors::TruncatedData { expected, found } => {
                assert_eq!(expected, 16);
                assert_eq!(found, 5);
            }
            other => panic!("expected TruncatedData, got {other:?}")
        }
    }

    #[test]
    fn sixteen_bit_rows_are_big_endian() {
        let data = b"P5 2 1 65535\n\x00\x01\x00\xFF";
        let pixels = decode_all(data).unwrap();
        assert_eq!(pixels.u16().unwrap(), vec![1, 255]);
    }

    #[test]
    fn pam_grayscale_alpha() {
        let mut data = Vec::new();
        data.extend_from_slice(
            b"P7\nWIDTH 3\nHEIGHT 2\nDEPTH 2\nMAXVAL 255\nTUPLTYPE GRAYSCALE_ALPHA\nENDHDR\n"
        );
        data.extend(std::iter::repeat(9_u8).take(3 * 2 * 2));

        let mut decoder = PnmDecoder::new(&data[..]);
        decoder.read_headers().unwrap();

        let info = decoder.get_info().unwrap();
        assert_eq!(info.version, PnmVersions::P7);
        assert_eq!(info.colorspace, ColorSpace::LumaA);
        assert!(info.colorspace.has_alpha());
        assert!(info.colorspace.is_grayscale());
    }

    #[test]
    fn pam_repeated_keyword_appends() {
        // the second TUPLTYPE line extends the first one
        let mut data = Vec::new();
        data.extend_from_slice(
            b"P7\nTUPLTYPE RGB\nTUPLTYPE ALPHA\nWIDTH 1\nHEIGHT 1\nDEPTH 4\nMAXVAL 255\nENDHDR\n"
        );
        data.extend_from_slice(&[0, 0, 0, 0]);

        let mut decoder = PnmDecoder::new(&data[..]);
        decoder.read_headers().unwrap();
        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGBA));
    }

    #[test]
    fn pam_missing_fields_are_named() {
        for missing in ["WIDTH", "HEIGHT", "DEPTH", "MAXVAL"] {
            let mut header = String::from("P7\n");
            for field in ["WIDTH 2", "HEIGHT 2", "DEPTH 1", "MAXVAL 255"] {
                if !field.starts_with(missing) {
                    header.push_str(field);
                    header.push('\n');
                }
            }
            header.push_str("ENDHDR\n");

            let err = decode_all(header.as_bytes()).unwrap_err();
            match err {
                PnmDecodeErrors::InvalidHeader(reason) => {
                    assert!(reason.contains(missing), "{reason} vs {missing}")
                }
                other => panic!("expected InvalidHeader, got {other:?}")
            }
        }
    }

    #[test]
    fn pam_non_positive_fields_are_rejected() {
        let zero_depth = b"P7\nWIDTH 2\nHEIGHT 2\nDEPTH 0\nMAXVAL 255\nENDHDR\n";
        assert!(matches!(
            decode_all(zero_depth).unwrap_err(),
            PnmDecodeErrors::InvalidHeader(_)
        ));

        let negative_maxval = b"P7\nWIDTH 2\nHEIGHT 2\nDEPTH 1\nMAXVAL -1\nENDHDR\n";
        assert!(matches!(
            decode_all(negative_maxval).unwrap_err(),
            PnmDecodeErrors::InvalidHeader(_)
        ));
    }

    #[test]
    fn pam_depth_above_four_is_unsupported() {
        let data = b"P7\nWIDTH 2\nHEIGHT 2\nDEPTH 5\nMAXVAL 255\nENDHDR\n";
        assert!(matches!(
            decode_all(data).unwrap_err(),
            PnmDecodeErrors::UnsupportedDepth(5)
        ));
    }

    #[test]
    fn pam_eof_before_endhdr() {
        let data = b"P7\nWIDTH 2\nHEIGHT 2\nDEPTH 1\nMAXVAL 255\n";
        assert!(matches!(
            decode_all(data).unwrap_err(),
            PnmDecodeErrors::InvalidHeader(_)
        ));
    }

    #[test]
    fn pam_comments_and_blank_lines_are_skipped() {
        let mut data = Vec::new();
        data.extend_from_slice(
            b"P7\n# a comment\n\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nENDHDR\n"
        );
        data.extend_from_slice(&[1, 2, 3]);

        let pixels = decode_all(&data).unwrap();
        assert_eq!(pixels.u8().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn row_streaming_matches_whole_image_decode() {
        let mut data = b"P6 2 2 255\n".to_vec();
        let raster: Vec<u8> = (0..12).collect();
        data.extend_from_slice(&raster);

        let mut decoder = PnmDecoder::new(&data[..]);
        decoder.read_headers().unwrap();

        let mut row = vec![0_u8; decoder.row_size()];
        let mut streamed = Vec::new();
        for _ in 0..2 {
            decoder.next_row_into(&mut row).unwrap();
            streamed.extend_from_slice(&row);
        }
        assert_eq!(streamed, raster);
    }
}

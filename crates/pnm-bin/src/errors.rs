/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{self, Formatter};
use std::io;

use pnm_codec::{PnmDecodeErrors, PnmEncodeErrors};

/// Everything that can go wrong in a single conversion.
///
/// All variants are terminal: output already written before the error
/// is not rolled back, the stream is forward-only.
pub enum ConvertErrors {
    /// Malformed or unsupported Netpbm input
    Decode(PnmDecodeErrors),
    /// Failure writing the Netpbm output
    Encode(PnmEncodeErrors),
    /// The PNG codec rejected its input
    PngDecode(png::DecodingError),
    /// The PNG codec failed to write
    PngEncode(png::EncodingError),
    /// Malformed color literal on the command line
    InvalidColor(String),
    /// Valid input the PNG container cannot represent
    Unsupported(String),
    IoErrors(io::Error)
}

impl fmt::Debug for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "{err:?}"),
            Self::Encode(err) => write!(f, "{err:?}"),
            Self::PngDecode(err) => writeln!(f, "{err}"),
            Self::PngEncode(err) => writeln!(f, "{err}"),
            Self::InvalidColor(reason) => {
                writeln!(f, "Invalid color literal, reason: {reason}")
            }
            Self::Unsupported(reason) => writeln!(f, "{reason}"),
            Self::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

impl From<PnmDecodeErrors> for ConvertErrors {
    fn from(err: PnmDecodeErrors) -> Self {
        ConvertErrors::Decode(err)
    }
}

impl From<PnmEncodeErrors> for ConvertErrors {
    fn from(err: PnmEncodeErrors) -> Self {
        ConvertErrors::Encode(err)
    }
}

impl From<png::DecodingError> for ConvertErrors {
    fn from(err: png::DecodingError) -> Self {
        ConvertErrors::PngDecode(err)
    }
}

impl From<png::EncodingError> for ConvertErrors {
    fn from(err: png::EncodingError) -> Self {
        ConvertErrors::PngEncode(err)
    }
}

impl From<io::Error> for ConvertErrors {
    fn from(err: io::Error) -> Self {
        ConvertErrors::IoErrors(err)
    }
}

/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_bin::{png_to_pnm, pnm_to_png, ConvertErrors, PngConfig};
use pnm_codec::PnmDecodeErrors;

fn convert(input: &[u8]) -> Result<(), ConvertErrors> {
    let mut sink = Vec::new();
    pnm_to_png(input, &mut sink, &PngConfig::default())
}

#[test]
fn unsupported_maxval_surfaces_from_the_driver() {
    let err = convert(b"P5 2 2 100\n\0\0\0\0").unwrap_err();
    assert!(matches!(
        err,
        ConvertErrors::Decode(PnmDecodeErrors::UnsupportedMaxval(100))
    ));
}

#[test]
fn maxval_without_png_representation_is_rejected() {
    // maxval 7 parses fine, three-bit samples do not exist in PNG
    let err = convert(b"P5 2 1 7\n\x01\x02").unwrap_err();
    assert!(matches!(err, ConvertErrors::Unsupported(_)));
}

#[test]
fn sub_byte_color_is_rejected() {
    let err = convert(b"P6 1 1 1\n\x01\x01\x01").unwrap_err();
    assert!(matches!(err, ConvertErrors::Unsupported(_)));
}

#[test]
fn truncated_raster_stops_the_conversion() {
    let err = convert(b"P6 2 2 255\npartial").unwrap_err();
    assert!(matches!(
        err,
        ConvertErrors::Decode(PnmDecodeErrors::TruncatedData { .. })
    ));
}

#[test]
fn pam_header_missing_field_is_a_format_error() {
    let err = convert(b"P7\nWIDTH 2\nHEIGHT 2\nMAXVAL 255\nENDHDR\n").unwrap_err();
    assert!(matches!(
        err,
        ConvertErrors::Decode(PnmDecodeErrors::InvalidHeader(_))
    ));
}

#[test]
fn garbage_png_input_is_a_png_error() {
    let mut sink = Vec::new();
    let err = png_to_pnm(&b"not a png at all"[..], &mut sink).unwrap_err();
    assert!(matches!(err, ConvertErrors::PngDecode(_)));
}

#[test]
fn header_errors_precede_any_output() {
    let mut sink = Vec::new();
    let result = pnm_to_png(&b"P5 2 2 100\n\0\0\0\0"[..], &mut sink, &PngConfig::default());
    assert!(result.is_err());
    assert!(sink.is_empty(), "output written despite a header error");
}

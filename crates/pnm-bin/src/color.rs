/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Hex color literals for the `--transparent` and `--background`
//! options.

use crate::errors::ConvertErrors;

/// Parse a hex color literal into an RGB triple.
///
/// The literal may carry a leading `#` and must hold 3, 6 or 12 hex
/// digits:
/// - 3 digits: one nibble per channel, replicated to 8 bits (`f` → 255)
/// - 6 digits: one byte per channel
/// - 12 digits: one 16-bit value per channel
///
/// ```
/// use pnm_bin::color::parse_color_triple;
///
/// assert_eq!(parse_color_triple("#fff").unwrap(), (255, 255, 255));
/// assert_eq!(parse_color_triple("#ff0000").unwrap(), (255, 0, 0));
/// ```
pub fn parse_color_triple(literal: &str) -> Result<(u16, u16, u16), ConvertErrors> {
    let hex = literal.strip_prefix('#').unwrap_or(literal);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConvertErrors::InvalidColor(format!(
            "`{literal}` is not hexadecimal"
        )));
    }

    let channel = |chunk: &str| -> Result<u16, ConvertErrors> {
        u16::from_str_radix(chunk, 16).map_err(|_| {
            ConvertErrors::InvalidColor(format!("`{chunk}` in `{literal}` is not hexadecimal"))
        })
    };

    match hex.len() {
        3 => {
            // nibble replication, 0xf -> 0xff
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Ok((r, g, b))
        }
        6 => Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        12 => Ok((channel(&hex[0..4])?, channel(&hex[4..8])?, channel(&hex[8..12])?)),
        n => Err(ConvertErrors::InvalidColor(format!(
            "`{literal}` has {n} hex digits, expected 3, 6 or 12"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_color_triple;
    use crate::errors::ConvertErrors;

    #[test]
    fn three_digit_nibbles_replicate() {
        assert_eq!(parse_color_triple("#fff").unwrap(), (255, 255, 255));
        assert_eq!(parse_color_triple("abc").unwrap(), (0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn six_digit_bytes() {
        assert_eq!(parse_color_triple("#ff0000").unwrap(), (255, 0, 0));
        assert_eq!(parse_color_triple("102030").unwrap(), (0x10, 0x20, 0x30));
    }

    #[test]
    fn twelve_digit_words() {
        assert_eq!(parse_color_triple("000000000000").unwrap(), (0, 0, 0));
        assert_eq!(
            parse_color_triple("#ffff00008080").unwrap(),
            (65535, 0, 0x8080)
        );
    }

    #[test]
    fn bad_lengths_and_digits() {
        for literal in ["#12", "", "#fffff", "#zzz", "12345g"] {
            let err = parse_color_triple(literal).unwrap_err();
            assert!(matches!(err, ConvertErrors::InvalidColor(_)), "{literal}");
        }
    }
}

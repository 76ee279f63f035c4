/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

fn logging_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher")
    )
    .arg(
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information")
    )
    .arg(
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion")
    )
}

#[rustfmt::skip]
pub fn pnm2png_cmd() -> Command {
    let cmd = Command::new("pnm2png")
        .about("Convert a raw netpbm image (PGM, PPM or PAM) to PNG")
        .arg(Arg::new("input")
            .index(1)
            .default_value("-")
            .help("Input file to read data from, `-` means stdin"))
        .arg(Arg::new("interlace")
            .short('i')
            .long("interlace")
            .action(ArgAction::SetTrue)
            .help("Request interlaced output"))
        .arg(Arg::new("transparent")
            .short('t')
            .long("transparent")
            .value_name("#RRGGBB")
            .help("Mark the specified color as transparent"))
        .arg(Arg::new("background")
            .short('b')
            .long("background")
            .value_name("#RRGGBB")
            .help("Store the specified background color"))
        .arg(Arg::new("gamma")
            .short('g')
            .long("gamma")
            .value_name("GAMMA")
            .value_parser(value_parser!(f32))
            .help("Store the specified gamma value"))
        .arg(Arg::new("compression")
            .short('c')
            .long("compression")
            .value_name("LEVEL")
            .value_parser(value_parser!(u8).range(0..=9))
            .help("zlib compression level, 0-9"));

    logging_args(cmd)
}

#[rustfmt::skip]
pub fn png2pnm_cmd() -> Command {
    let cmd = Command::new("png2pnm")
        .about("Convert a PNG image to raw netpbm (PGM, PPM or PAM)")
        .arg(Arg::new("input")
            .index(1)
            .default_value("-")
            .help("Input file to read data from, `-` means stdin"));

    logging_args(cmd)
}

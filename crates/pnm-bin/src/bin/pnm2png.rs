/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process::exit;

use clap::ArgMatches;
use log::error;
use pnm_bin::color::parse_color_triple;
use pnm_bin::logging::setup_logger;
use pnm_bin::{cmd_args, pnm_to_png, ConvertErrors, PngConfig};

fn main() {
    let matches = cmd_args::pnm2png_cmd().get_matches();
    setup_logger(&matches);

    if let Err(err) = run(&matches) {
        error!("Could not complete conversion, reason: {err:?}");
        exit(99);
    }
}

fn run(matches: &ArgMatches) -> Result<(), ConvertErrors> {
    let transparent = match matches.get_one::<String>("transparent") {
        Some(literal) => Some(parse_color_triple(literal)?),
        None => None
    };
    let background = match matches.get_one::<String>("background") {
        Some(literal) => Some(parse_color_triple(literal)?),
        None => None
    };
    let config = PngConfig {
        interlace: matches.get_flag("interlace"),
        transparent,
        background,
        gamma: matches.get_one::<f32>("gamma").copied(),
        compression: matches.get_one::<u8>("compression").copied()
    };

    let path = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("-");

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    if path == "-" {
        let stdin = io::stdin();
        pnm_to_png(BufReader::new(stdin.lock()), output, &config)
    } else {
        let file = File::open(path)?;
        pnm_to_png(BufReader::new(file), output, &config)
    }
}

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
use pnm_bin::logging::setup_logger;
use pnm_bin::{cmd_args, png_to_pnm, ConvertErrors};

fn main() {
    let matches = cmd_args::png2pnm_cmd().get_matches();
    setup_logger(&matches);

    if let Err(err) = run(&matches) {
        error!("Could not complete conversion, reason: {err:?}");
        exit(99);
    }
}

fn run(matches: &ArgMatches) -> Result<(), ConvertErrors> {
    let path = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("-");

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    if path == "-" {
        let stdin = io::stdin();
        png_to_pnm(BufReader::new(stdin.lock()), output)
    } else {
        let file = File::open(path)?;
        png_to_pnm(BufReader::new(file), output)
    }
}

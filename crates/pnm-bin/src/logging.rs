/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Set up logging options
///
/// Logs go to stderr, stdout belongs to the image.
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap_or(&false) {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap_or(&false) {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("info").unwrap_or(&false) {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if simple_logger::init_with_level(log_level).is_err() {
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

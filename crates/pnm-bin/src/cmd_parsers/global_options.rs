/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use pnm_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;
use crate::locale::Locale;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json
}

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder: DecoderOptions,
    pub locale:  Locale,
    pub format:  OutputFormat
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions {
            decoder: DecoderOptions::new_cmd(),
            locale:  Locale::English,
            format:  OutputFormat::Text
        }
    }
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions::default()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder = get_decoder_options(options);

    if let Some(locale) = options.get_one::<Locale>("lang") {
        info!("Setting output language to {:?}", locale);
        cmd_options.locale = *locale;
    }
    if options.get_flag("json") {
        info!("Writing JSON output");
        cmd_options.format = OutputFormat::Json;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[test]
fn test_parse_options() {
    let matches = crate::cmd_args::create_cmd_args().get_matches_from([
        "pnmstat", "--json", "--lang", "pl"
    ]);
    let options = parse_options(&matches);

    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.locale, Locale::Polish);
}

#[test]
fn test_default_options() {
    let options = CmdOptions::default();

    assert_eq!(options.format, OutputFormat::Text);
    assert_eq!(options.locale, Locale::English);
    assert_eq!(options.decoder, DecoderOptions::new_cmd());
}

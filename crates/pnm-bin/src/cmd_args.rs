/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::locale::Locale;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pnmstat")
        .about("Report the most frequent value and the number of distinct values of netpbm images")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long_help("Input file to read data from, may be repeated.\nWithout inputs the program asks for file names interactively.")
            .long("input")
            .action(ArgAction::Append))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Print one JSON object per file instead of text"))
        .arg(Arg::new("lang")
            .long("lang")
            .help_heading("OUTPUT")
            .help("Language of text output and prompts")
            .default_value("en")
            .value_parser(value_parser!(Locale)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject samples above the max value and bytes after the payload"))
        .arg(Arg::new("plain-ascii")
            .long("plain-ascii")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Read P1, P2 and P3 payloads as ASCII text")
            .long_help("Read P1, P2 and P3 payloads as ASCII text.\nBy default their payloads are read with the byte layout of P4, P5 and P6."))
}

#[test]
fn test_cmd_args_are_consistent() {
    create_cmd_args().debug_assert();
}

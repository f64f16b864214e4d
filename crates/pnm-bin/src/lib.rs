/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::{run_batch, run_interactive};

mod cmd_args;
mod cmd_parsers;
mod locale;
mod render;
mod report;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = match cmd_parsers::get_input_files(&options) {
        Some(files) => {
            let stdout = std::io::stdout();
            run_batch(&files, &mut stdout.lock(), &parsed_opts)
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(&mut stdin.lock(), &mut stdout.lock(), &parsed_opts).map(|_| true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => exit(-1),
        Err(err) => {
            println!();
            error!(" Could not complete workflow, reason {:?}", err);
            println!();
            exit(-1);
        }
    }
}

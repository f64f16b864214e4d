/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::render::render;
use crate::report::Analysis;

/// Analyze one file and write the outcome to `out`
///
/// Returns whether the file was decoded. Decoding failures are
/// rendered, only failures to write to `out` are errors.
fn process_file<W: Write>(out: &mut W, file: &Path, cmd_opts: &CmdOptions) -> io::Result<bool> {
    debug!("Treating {:?} as a netpbm file", file);

    let result = Analysis::from_file(file, cmd_opts.decoder);

    match &result {
        Ok(analysis) => info!(
            "{:?}: {} {}x{}, {} distinct values",
            file,
            analysis.version,
            analysis.width,
            analysis.height,
            analysis.stats.distinct_count
        ),
        Err(err) => error!("Could not decode {:?}, reason {:?}", file, err)
    }

    render(out, file, &result, cmd_opts.format, cmd_opts.locale)?;
    out.flush()?;

    Ok(result.is_ok())
}

/// Process every file in order, continuing past failures
///
/// Returns `Ok(true)` if every file was decoded
pub(crate) fn run_batch<W: Write>(
    files: &[PathBuf], out: &mut W, cmd_opts: &CmdOptions
) -> io::Result<bool> {
    info!("Processing {} files", files.len());

    let mut all_ok = true;

    for file in files {
        all_ok &= process_file(out, file, cmd_opts)?;
    }
    Ok(all_ok)
}

/// Prompt for file names until the user declines to continue
/// or input ends
///
/// Returns the number of files processed
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    input: &mut R, out: &mut W, cmd_opts: &CmdOptions
) -> io::Result<usize> {
    let msg = cmd_opts.locale.messages();
    let mut processed = 0;
    let mut line = String::new();

    loop {
        write!(out, "{}", msg.prompt_file)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let file = line.trim();

        if file.is_empty() {
            continue;
        }
        process_file(out, Path::new(file), cmd_opts)?;
        processed += 1;

        write!(out, "{}", msg.prompt_continue)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || !cmd_opts.locale.is_affirmative(&line) {
            break;
        }
    }
    debug!("Interactive session processed {} files", processed);

    Ok(processed)
}

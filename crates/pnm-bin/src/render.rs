/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{self, Write};
use std::path::Path;

use pnm_decoder::{IoErrors, PnmDecodeErrors};

use crate::cmd_parsers::global_options::OutputFormat;
use crate::locale::Locale;
use crate::report::{Analysis, JsonReport};

/// Write the result of analyzing `file` in the requested format
pub fn render<W: Write>(
    out: &mut W, file: &Path, result: &Result<Analysis, PnmDecodeErrors>, format: OutputFormat,
    locale: Locale
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match result {
            Ok(analysis) => render_analysis(out, analysis, locale),
            Err(err) => render_failure(out, file, err, locale)
        },
        OutputFormat::Json => {
            let report = match result {
                Ok(analysis) => JsonReport::Analysis(analysis),
                Err(err) => JsonReport::Failure(file, err)
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

fn render_analysis<W: Write>(out: &mut W, analysis: &Analysis, locale: Locale) -> io::Result<()> {
    let msg = locale.messages();
    let stats = &analysis.stats;

    let (mode_label, distinct_label) = if analysis.is_color {
        (msg.color_mode, msg.color_distinct)
    } else {
        (msg.gray_mode, msg.gray_distinct)
    };

    writeln!(out, "{}: {}", msg.file, analysis.file.display())?;
    writeln!(out, "{}: {}", msg.format, analysis.version)?;
    writeln!(out, "{}: {}", msg.width, analysis.width)?;
    writeln!(out, "{}: {}", msg.height, analysis.height)?;

    match stats.mode {
        Some(mode) => writeln!(
            out,
            "{mode_label}: {mode} ({} {})",
            stats.mode_count, msg.occurrences
        )?,
        None => writeln!(out, "{}", msg.no_samples)?
    }
    writeln!(out, "{distinct_label}: {}", stats.distinct_count)
}

fn render_failure<W: Write>(
    out: &mut W, file: &Path, err: &PnmDecodeErrors, locale: Locale
) -> io::Result<()> {
    let msg = locale.messages();

    let reason = match err {
        PnmDecodeErrors::Io(IoErrors::FileNotFound(_)) => msg.file_not_found,
        PnmDecodeErrors::Io(IoErrors::Unreadable(..)) => msg.unreadable,
        PnmDecodeErrors::Format(_) => msg.unsupported_file
    };
    writeln!(out, "{}: {}", msg.file, file.display())?;
    writeln!(out, "{reason}: {err}")
}

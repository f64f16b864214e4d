/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use pnm_core::options::DecoderOptions;
use pnm_decoder::{PnmDecodeErrors, PnmVersion};
use pnm_stats::Stats;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What the front end knows about one successfully analyzed file
#[derive(Debug, Clone)]
pub struct Analysis {
    pub file:      PathBuf,
    pub version:   PnmVersion,
    pub width:     usize,
    pub height:    usize,
    pub max_value: u8,
    pub is_color:  bool,
    pub stats:     Stats
}

impl Analysis {
    /// Decode and analyze the file at `path`
    pub fn from_file(path: &Path, options: DecoderOptions) -> Result<Analysis, PnmDecodeErrors> {
        let image = pnm_decoder::parse_with_options(path, options)?;
        let stats = pnm_stats::analyze(&image);

        Ok(Analysis {
            file: path.to_path_buf(),
            version: image.version(),
            width: image.width(),
            height: image.height(),
            max_value: image.max_value(),
            is_color: image.version().is_color(),
            stats
        })
    }
}

/// JSON view of one file, either its statistics or the error it produced
pub enum JsonReport<'a> {
    Analysis(&'a Analysis),
    Failure(&'a Path, &'a PnmDecodeErrors)
}

impl<'a> Serialize for JsonReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            JsonReport::Analysis(analysis) => {
                let mut state = serializer.serialize_struct("Analysis", 8)?;

                state.serialize_field("file", &analysis.file.to_string_lossy())?;
                state.serialize_field("format", &analysis.version.to_string())?;
                state.serialize_field("width", &analysis.width)?;
                state.serialize_field("height", &analysis.height)?;
                state.serialize_field("max_value", &analysis.max_value)?;
                state.serialize_field("mode", &analysis.stats.mode)?;
                state.serialize_field("mode_count", &analysis.stats.mode_count)?;
                state.serialize_field("distinct_count", &analysis.stats.distinct_count)?;

                state.end()
            }
            JsonReport::Failure(file, error) => {
                let mut state = serializer.serialize_struct("Failure", 2)?;

                state.serialize_field("file", &file.to_string_lossy())?;
                state.serialize_field("error", &error.to_string())?;

                state.end()
            }
        }
    }
}

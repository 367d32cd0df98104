// GEDCOM XML - Streaming GEDCOM to XML converter
//
// Copyright (c) 2025 gedcom-xml contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Convert command - GEDCOM file to XML file
//!
//! Checks the input and output paths, then streams the input through the
//! transcoder into a newly created output file.

use crate::error::CliError;
use gedcom_xml::{transcode, TranscodeConfig, TranscodeStats};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Check that the input is a readable file and the output does not exist yet.
///
/// # Errors
///
/// Returns `Err` if:
/// - The input does not exist or is a directory
/// - The output is a directory or already exists
pub fn check_paths(input: &Path, output: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::InputMissing(input.to_path_buf()));
    }
    if input.is_dir() {
        return Err(CliError::InputIsDirectory(input.to_path_buf()));
    }
    if output.is_dir() {
        return Err(CliError::OutputIsDirectory(output.to_path_buf()));
    }
    if output.exists() {
        return Err(CliError::OutputExists(output.to_path_buf()));
    }
    Ok(())
}

/// Convert a GEDCOM file into a new XML file.
///
/// The output file is created exclusively, so a file that appears between the
/// path check and the conversion is not overwritten. If the conversion fails,
/// the partially written output file is removed.
///
/// # Examples
///
/// ```no_run
/// use gedcom_cli::convert::convert;
/// use gedcom_xml::TranscodeConfig;
/// use std::path::Path;
///
/// # fn main() -> Result<(), gedcom_cli::error::CliError> {
/// let stats = convert(Path::new("family.ged"), Path::new("family.xml"), &TranscodeConfig::default())?;
/// println!("{} records", stats.records);
/// # Ok(())
/// # }
/// ```
pub fn convert(input: &Path, output: &Path, config: &TranscodeConfig) -> Result<TranscodeStats, CliError> {
    check_paths(input, output)?;

    let reader = File::open(input).map_err(|e| CliError::io_error(input, e))?;
    let writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => CliError::OutputExists(output.to_path_buf()),
            _ => CliError::io_error(output, e),
        })?;

    info!(input = %input.display(), output = %output.display(), "converting");

    match transcode(reader, writer, config) {
        Ok(stats) => {
            info!(
                records = stats.records,
                references = stats.references,
                max_depth = stats.max_depth,
                "conversion complete"
            );
            Ok(stats)
        }
        Err(e) => {
            if e.is_input_error() {
                info!(input = %input.display(), line = ?e.line(), "input rejected");
            } else {
                warn!(output = %output.display(), "conversion aborted by a stream failure");
            }
            if let Err(remove_err) = fs::remove_file(output) {
                warn!(output = %output.display(), "failed to remove partial output: {}", remove_err);
            }
            Err(e.into())
        }
    }
}

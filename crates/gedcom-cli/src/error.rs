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

//! Structured error types for the gedcom2xml CLI.
//!
//! Precondition failures (bad input or output paths) are detected before the
//! conversion starts. Conversion failures wrap [`TranscodeError`].

use gedcom_xml::TranscodeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The input path does not exist.
    #[error("Input file '{}' does not exist", .0.display())]
    InputMissing(PathBuf),

    /// The input path is a directory.
    #[error("Input file '{}' is a directory", .0.display())]
    InputIsDirectory(PathBuf),

    /// The output path already exists. Existing files are never overwritten.
    #[error("Output file '{}' already exists", .0.display())]
    OutputExists(PathBuf),

    /// The output path is a directory.
    #[error("Output file '{}' is a directory", .0.display())]
    OutputIsDirectory(PathBuf),

    /// Opening or creating a file failed.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The GEDCOM input could not be converted.
    #[error("Conversion failed: {0}")]
    Transcode(#[from] TranscodeError),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

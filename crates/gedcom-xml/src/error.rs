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

//! Error types for GEDCOM transcoding.
//!
//! Every error that can be attributed to a specific input line carries its
//! 1-based line number. Use [`TranscodeError::line`] to extract it uniformly.
//!
//! # Error Categories
//!
//! - **I/O Errors**: the input or output stream failed
//! - **Encoding Errors**: an input line is not valid UTF-8
//! - **Malformed Records**: a line does not follow `<level> <tag> [data]`
//! - **Structural Errors**: levels skip a step, so the tree cannot be rebuilt
//! - **Limit Errors**: a line or nesting level exceeds the configured maximum
//!
//! All errors abort the conversion. Output already written is left untouched
//! and the caller decides whether to discard it.
//!
//! ```rust
//! use gedcom_xml::{transcode_str, TranscodeConfig, TranscodeError};
//!
//! let err = transcode_str("0 HEAD\nabc TAG value\n", &TranscodeConfig::default()).unwrap_err();
//! assert!(matches!(err, TranscodeError::MalformedRecord { line: 2, .. }));
//! assert_eq!(err.line(), Some(2));
//! ```

use thiserror::Error;

/// Errors that can occur while converting GEDCOM to XML.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// Reading the input or writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 encoding.
    #[error("Invalid UTF-8 at line {line}: {message}")]
    Utf8 { line: usize, message: String },

    /// A line that cannot be split into level, tag and data.
    #[error("Malformed record at line {line}: {message} (\"{content}\")")]
    MalformedRecord {
        line: usize,
        content: String,
        message: String,
    },

    /// A record nests more than one level below its predecessor.
    ///
    /// `previous` is `None` for the first record of the file, which must be
    /// at level 0.
    #[error("Invalid level at line {line}: level {found} cannot follow {}", describe_previous(.previous))]
    LevelJump {
        line: usize,
        previous: Option<usize>,
        found: usize,
    },

    /// Line length exceeds the configured maximum.
    #[error("Line {line} is too long: {length} bytes exceeds limit of {max}")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    /// Record level exceeds the configured maximum depth.
    #[error("Level {level} at line {line} exceeds maximum depth of {max}")]
    DepthLimitExceeded { line: usize, level: usize, max: usize },

    /// A cross-reference record carried text after its type tag and the
    /// configuration rejects it.
    #[error("Unexpected data after reference record type at line {line}: \"{data}\"")]
    DanglingReferenceData { line: usize, data: String },

    /// The configured root element name is not a valid XML name.
    #[error("Invalid root element name: \"{0}\"")]
    InvalidRootElement(String),
}

fn describe_previous(previous: &Option<usize>) -> String {
    match previous {
        Some(level) => format!("level {}", level),
        None => "the start of the file".to_string(),
    }
}

impl TranscodeError {
    /// Create a malformed record error.
    #[inline]
    pub fn malformed(line: usize, content: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            content: content.into(),
            message: message.into(),
        }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Utf8 { line, .. }
            | Self::MalformedRecord { line, .. }
            | Self::LevelJump { line, .. }
            | Self::LineTooLong { line, .. }
            | Self::DepthLimitExceeded { line, .. }
            | Self::DanglingReferenceData { line, .. } => Some(*line),
            Self::Io(_) | Self::InvalidRootElement(_) => None,
        }
    }

    /// Returns `true` for errors caused by the content of the input rather
    /// than by the underlying streams or the configuration.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::InvalidRootElement(_))
    }
}

/// Result type for transcoding operations.
pub type TranscodeResult<T> = Result<T, TranscodeError>;

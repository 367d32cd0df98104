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

//! Streaming GEDCOM to XML Conversion
//!
//! GEDCOM encodes a tree as a flat list of `<level> <tag> [data]` lines. This
//! crate turns that list into a nested, well-formed XML document in one
//! forward pass, keeping only the chain of currently open elements in memory.
//!
//! # Features
//!
//! - **Memory Efficient**: memory grows with nesting depth, never with file size
//! - **Incremental Output**: XML is written as soon as each record is decided
//! - **Cross-references**: `0 @I1@ INDI` becomes `<INDI value="@I1@">`
//! - **Typed Errors**: malformed lines report their line number and content
//!
//! # Output Shape
//!
//! Every record becomes one element named after its tag. A record's data is
//! written as text when the record is a leaf and as a `value` attribute when
//! children follow:
//!
//! ```rust
//! use gedcom_xml::{transcode_str, TranscodeConfig};
//!
//! let gedcom = "0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M\n";
//! let xml = transcode_str(gedcom, &TranscodeConfig::default()).unwrap();
//!
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
//!      <gedcom>\n\
//!      <INDI value=\"@I1@\">\n  \
//!        <NAME>John /Doe/</NAME>\n  \
//!        <SEX>M</SEX>\n\
//!      </INDI>\n\
//!      </gedcom>"
//! );
//! ```
//!
//! # Streaming Files
//!
//! ```rust,no_run
//! use gedcom_xml::{transcode, TranscodeConfig};
//! use std::fs::File;
//!
//! let input = File::open("family.ged")?;
//! let output = File::create("family.xml")?;
//!
//! let stats = transcode(input, output, &TranscodeConfig::default())?;
//! println!("{} records, max depth {}", stats.records, stats.max_depth);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod reader;
mod record;
mod transcoder;

pub use config::{ReferenceData, TranscodeConfig};
pub use error::{TranscodeError, TranscodeResult};
pub use reader::LineReader;
pub use record::{is_xml_name, Element, Record, REFERENCE_MARKER};
pub use transcoder::{TranscodeStats, Transcoder};

use std::io::{BufWriter, Read, Write};

/// Convert a GEDCOM stream to XML.
///
/// Input is read line by line and output is written through a buffer of
/// `config.buffer_size` bytes, which is flushed before returning. On error
/// the conversion stops at once; whatever was already written stays in
/// `output`.
pub fn transcode<R: Read, W: Write>(
    input: R,
    output: W,
    config: &TranscodeConfig,
) -> TranscodeResult<TranscodeStats> {
    let mut lines = LineReader::with_capacity(input, config.buffer_size)
        .with_max_line_length(config.max_line_length);
    let writer = BufWriter::with_capacity(config.buffer_size, output);

    let transcoder = lines.try_fold(
        Transcoder::with_config(writer, config.clone()),
        |mut transcoder, line| {
            let (line_number, text) = line?;
            if let Some(record) = Record::parse(line_number, &text)? {
                transcoder.push(record)?;
            }
            Ok::<_, TranscodeError>(transcoder)
        },
    )?;

    let (_, stats) = transcoder.finish()?;
    Ok(stats)
}

/// Convert GEDCOM text to an XML string.
pub fn transcode_str(input: &str, config: &TranscodeConfig) -> TranscodeResult<String> {
    let mut output = Vec::with_capacity(input.len() * 2);
    transcode(input.as_bytes(), &mut output, config)?;
    String::from_utf8(output)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

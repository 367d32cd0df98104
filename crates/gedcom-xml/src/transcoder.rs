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

//! Level-tree transcoder.
//!
//! Rebuilds the tree implied by GEDCOM levels and writes it as nested XML in
//! a single forward pass. The only state kept is the chain of open ancestors
//! and the most recent record, whose start tag stays unterminated until the
//! next record shows whether it has children:
//!
//! - next record deeper: the value becomes a `value="..."` attribute
//! - next record at the same level or shallower (or end of input): the value
//!   becomes text content and the element is closed
//!
//! Memory use is proportional to nesting depth, not to file size.

use crate::config::TranscodeConfig;
use crate::error::{TranscodeError, TranscodeResult};
use crate::record::{is_xml_name, Record};
use quick_xml::escape::escape;
use std::io::Write;
use tracing::{debug, trace};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Counters collected during a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// Records converted (blank lines excluded).
    pub records: usize,
    /// Records whose tag was a cross-reference pointer.
    pub references: usize,
    /// Deepest element nesting reached, root wrapper excluded.
    pub max_depth: usize,
    /// Values written as a `value` attribute.
    pub attribute_values: usize,
    /// Values written as element text.
    pub text_values: usize,
}

/// The record whose start tag has been written but not yet terminated.
#[derive(Debug)]
struct OpenTag {
    level: usize,
    value: Option<String>,
}

#[derive(Debug)]
enum State {
    /// Nothing written yet.
    Fresh,
    /// Prologue and root start tag written, no records seen.
    Empty,
    /// At least one record seen; its start tag is still open.
    Open(OpenTag),
}

/// Streaming GEDCOM to XML transcoder.
///
/// Feed records in input order with [`push`](Self::push) and complete the
/// document with [`finish`](Self::finish). Output is written to the sink as
/// soon as it is decided.
///
/// # Examples
///
/// ```rust
/// use gedcom_xml::{Record, Transcoder};
///
/// let mut transcoder = Transcoder::new(Vec::new());
/// for (n, line) in ["0 @I1@ INDI", "1 NAME John /Doe/"].iter().enumerate() {
///     let record = Record::parse(n + 1, line).unwrap().unwrap();
///     transcoder.push(record).unwrap();
/// }
/// let (output, stats) = transcoder.finish().unwrap();
///
/// let xml = String::from_utf8(output).unwrap();
/// assert!(xml.contains("<INDI value=\"@I1@\">"));
/// assert!(xml.contains("  <NAME>John /Doe/</NAME>"));
/// assert_eq!(stats.records, 2);
/// ```
pub struct Transcoder<W: Write> {
    writer: W,
    config: TranscodeConfig,
    stack: Vec<String>,
    state: State,
    stats: TranscodeStats,
}

impl<W: Write> Transcoder<W> {
    /// Create a transcoder with default configuration.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, TranscodeConfig::default())
    }

    /// Create a transcoder with custom configuration.
    pub fn with_config(writer: W, config: TranscodeConfig) -> Self {
        Self {
            writer,
            config,
            stack: Vec::new(),
            state: State::Fresh,
            stats: TranscodeStats::default(),
        }
    }

    /// Number of elements currently open, root wrapper excluded.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Write the XML declaration and root start tag.
    ///
    /// Called implicitly by [`push`](Self::push) and [`finish`](Self::finish);
    /// calling it again has no effect. Fails without writing anything if the
    /// root element name is not a valid XML name.
    pub fn start(&mut self) -> TranscodeResult<()> {
        if let State::Fresh = self.state {
            if !is_xml_name(&self.config.root_element) {
                return Err(TranscodeError::InvalidRootElement(self.config.root_element.clone()));
            }
            debug!(root = %self.config.root_element, "starting GEDCOM transcode");
            self.writer.write_all(XML_DECLARATION.as_bytes())?;
            writeln!(self.writer, "<{}>", self.config.root_element)?;
            self.state = State::Empty;
        }
        Ok(())
    }

    /// Process the next record.
    ///
    /// Terminates the previous start tag, closes every element the new record
    /// is not nested in, and opens the new element. The record is validated
    /// before anything is written for it.
    pub fn push(&mut self, record: Record) -> TranscodeResult<()> {
        self.start()?;

        let line = record.line;
        let level = record.level;
        let previous = match &self.state {
            State::Open(open) => Some(open.level),
            _ => None,
        };

        if level > self.config.max_depth {
            return Err(TranscodeError::DepthLimitExceeded {
                line,
                level,
                max: self.config.max_depth,
            });
        }
        if level > previous.map_or(0, |p| p + 1) {
            return Err(TranscodeError::LevelJump {
                line,
                previous,
                found: level,
            });
        }

        let is_reference = record.is_reference();
        let element = record.into_element(self.config.reference_data)?;
        trace!(line, level, name = %element.name, "record");

        if let State::Open(open) = std::mem::replace(&mut self.state, State::Empty) {
            self.terminate_start_tag(open.value, level > open.level)?;
            self.close_elements(open.level, level)?;
            self.writer.write_all(b"\n")?;
        }

        self.write_indent(level)?;
        write!(self.writer, "<{}", element.name)?;
        self.stack.push(element.name);

        self.stats.records += 1;
        if is_reference {
            self.stats.references += 1;
        }
        self.stats.max_depth = self.stats.max_depth.max(self.stack.len());
        self.state = State::Open(OpenTag {
            level,
            value: element.value,
        });

        Ok(())
    }

    /// Close all open elements and the root, flush, and return the sink.
    ///
    /// The last record is always a leaf, so a pending value becomes text.
    pub fn finish(mut self) -> TranscodeResult<(W, TranscodeStats)> {
        self.start()?;

        match std::mem::replace(&mut self.state, State::Empty) {
            State::Open(open) => {
                self.terminate_start_tag(open.value, false)?;
                self.close_elements(open.level, 0)?;
                write!(self.writer, "\n</{}>", self.config.root_element)?;
            }
            _ => write!(self.writer, "</{}>", self.config.root_element)?,
        }
        self.writer.flush()?;

        debug!(
            records = self.stats.records,
            references = self.stats.references,
            max_depth = self.stats.max_depth,
            "finished GEDCOM transcode"
        );

        Ok((self.writer, self.stats))
    }

    /// Finish the pending start tag of the previous record.
    fn terminate_start_tag(&mut self, value: Option<String>, has_children: bool) -> TranscodeResult<()> {
        match value {
            Some(value) if has_children => {
                write!(self.writer, " value=\"{}\">", escape(value.as_str()))?;
                self.stats.attribute_values += 1;
            }
            Some(value) => {
                write!(self.writer, ">{}", escape(value.as_str()))?;
                self.stats.text_values += 1;
            }
            None => self.writer.write_all(b">")?,
        }
        Ok(())
    }

    /// Close elements when moving from `from` to a record at level `to`.
    ///
    /// One element per level from `from` down to `to` inclusive. The first
    /// closing tag follows the previous output directly; the rest go on their
    /// own line, indented to the level of the element being closed.
    fn close_elements(&mut self, from: usize, to: usize) -> TranscodeResult<()> {
        if to > from {
            return Ok(());
        }

        for i in 0..=(from - to) {
            let Some(name) = self.stack.pop() else {
                break;
            };
            if i > 0 {
                self.writer.write_all(b"\n")?;
                self.write_indent(self.stack.len())?;
            }
            write!(self.writer, "</{}>", name)?;
        }
        Ok(())
    }

    fn write_indent(&mut self, level: usize) -> TranscodeResult<()> {
        for _ in 0..level {
            self.writer.write_all(self.config.indent.as_bytes())?;
        }
        Ok(())
    }
}

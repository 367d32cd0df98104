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

//! Line reader for the transcoder.
//!
//! Provides buffered line-by-line reading with line number tracking. This is
//! the input side of the conversion: the transcoder itself only ever sees
//! one line at a time.

use crate::error::{TranscodeError, TranscodeResult};
use std::io::{BufRead, BufReader, Read};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Buffered line reader with line number tracking.
///
/// Reads input line-by-line, handling LF and CRLF line endings and tracking
/// the current line number for error reporting. A UTF-8 byte-order mark at
/// the very start of the input is dropped.
///
/// # Examples
///
/// ```rust
/// use gedcom_xml::LineReader;
/// use std::io::Cursor;
///
/// let input = "0 HEAD\r\n1 CHAR UTF-8\n0 TRLR";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "0 HEAD".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "1 CHAR UTF-8".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((3, "0 TRLR".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
    max_line_length: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader with no line length limit.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
            max_line_length: usize::MAX,
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
            max_line_length: usize::MAX,
        }
    }

    /// Reject lines longer than `max` bytes (terminator excluded).
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Get the current line number.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    ///
    /// Returns `Ok(None)` at end of input. At most `max_line_length` bytes
    /// plus a CRLF terminator are buffered; for a longer line the reported
    /// length is the number of bytes read before giving up.
    pub fn next_line(&mut self) -> TranscodeResult<Option<(usize, String)>> {
        self.buffer.clear();

        let limit = self.max_line_length.saturating_add(2) as u64;
        let read = (&mut self.reader).take(limit).read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if read as u64 == limit && !self.buffer.ends_with(b"\n") {
            return Err(TranscodeError::LineTooLong {
                line: self.line_number,
                length: read,
                max: self.max_line_length,
            });
        }

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        if self.buffer.len() > self.max_line_length {
            return Err(TranscodeError::LineTooLong {
                line: self.line_number,
                length: self.buffer.len(),
                max: self.max_line_length,
            });
        }

        let text = std::str::from_utf8(&self.buffer).map_err(|e| TranscodeError::Utf8 {
            line: self.line_number,
            message: e.to_string(),
        })?;

        let text = if self.line_number == 1 {
            text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
        } else {
            text
        };

        Ok(Some((self.line_number, text.to_string())))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = TranscodeResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

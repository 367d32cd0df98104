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

//! GEDCOM record parsing.
//!
//! A record is one line of the form `<level> <tag> [data]`. Records whose tag
//! starts with the reference marker (`@`) are cross-reference definitions
//! such as `0 @I1@ INDI`; for those the pointer is the value and the word
//! after it is the element name.

use crate::config::ReferenceData;
use crate::error::{TranscodeError, TranscodeResult};
use tracing::warn;

/// Leading character of a cross-reference pointer.
pub const REFERENCE_MARKER: char = '@';

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the input.
    pub line: usize,
    /// Nesting level stated at the start of the line.
    pub level: usize,
    /// First token after the level.
    pub tag: String,
    /// Remainder of the line, trimmed. `None` when nothing follows the tag.
    pub data: Option<String>,
}

/// The element a record turns into: its name and the value waiting to be
/// placed as either an attribute or text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name: the tag, or the type word of a reference record.
    pub name: String,
    /// Record data, or the pointer of a reference record. `None` for a
    /// record with nothing after its tag.
    pub value: Option<String>,
}

impl Record {
    /// Parse a raw input line.
    ///
    /// Returns `Ok(None)` for blank or whitespace-only lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gedcom_xml::Record;
    ///
    /// let record = Record::parse(3, "  1 NAME John /Doe/  ").unwrap().unwrap();
    /// assert_eq!(record.level, 1);
    /// assert_eq!(record.tag, "NAME");
    /// assert_eq!(record.data.as_deref(), Some("John /Doe/"));
    ///
    /// assert!(Record::parse(4, "   ").unwrap().is_none());
    /// assert!(Record::parse(5, "abc TAG value").is_err());
    /// ```
    pub fn parse(line: usize, raw: &str) -> TranscodeResult<Option<Record>> {
        let content = raw.trim();
        if content.is_empty() {
            return Ok(None);
        }
        if let Some(c) = content.chars().find(|&c| !is_xml_char(c)) {
            return Err(TranscodeError::malformed(
                line,
                content.escape_debug().to_string(),
                format!("character U+{:04X} is not allowed in XML", u32::from(c)),
            ));
        }

        let (level_str, rest) = split_token(content);
        let level = parse_level(level_str)
            .ok_or_else(|| TranscodeError::malformed(line, content, "level is not a non-negative integer"))?;

        if rest.is_empty() {
            return Err(TranscodeError::malformed(line, content, "missing tag after level"));
        }

        let (tag, data) = split_token(rest);
        let data = if data.is_empty() {
            None
        } else {
            Some(data.to_string())
        };

        Ok(Some(Record {
            line,
            level,
            tag: tag.to_string(),
            data,
        }))
    }

    /// Whether the tag is a cross-reference pointer (`@X@`).
    #[inline]
    pub fn is_reference(&self) -> bool {
        self.tag.starts_with(REFERENCE_MARKER)
    }

    /// Resolve the element name and pending value.
    ///
    /// Ordinary records map `tag` to the name and `data` to the value. For
    /// reference records the roles swap: `0 @I1@ INDI` becomes element `INDI`
    /// with value `@I1@`. Text after the type word is handled according to
    /// `policy`.
    pub fn into_element(self, policy: ReferenceData) -> TranscodeResult<Element> {
        if !self.is_reference() {
            if !is_xml_name(&self.tag) {
                return Err(self.invalid_name(&self.tag));
            }
            return Ok(Element {
                name: self.tag,
                value: self.data,
            });
        }

        let Some(data) = self.data else {
            return Err(TranscodeError::malformed(
                self.line,
                format!("{} {}", self.level, self.tag),
                "reference record has no type tag",
            ));
        };

        let (name, extra) = split_token(&data);
        if !is_xml_name(name) {
            return Err(TranscodeError::malformed(
                self.line,
                format!("{} {} {}", self.level, self.tag, data),
                format!("\"{}\" is not a valid element name", name),
            ));
        }
        if !extra.is_empty() {
            match policy {
                ReferenceData::Discard => {
                    warn!(
                        line = self.line,
                        pointer = %self.tag,
                        "discarding data after reference record type: {}",
                        extra
                    );
                }
                ReferenceData::Reject => {
                    return Err(TranscodeError::DanglingReferenceData {
                        line: self.line,
                        data: extra.to_string(),
                    });
                }
            }
        }

        Ok(Element {
            name: name.to_string(),
            value: Some(self.tag),
        })
    }

    fn invalid_name(&self, name: &str) -> TranscodeError {
        let content = match &self.data {
            Some(data) => format!("{} {} {}", self.level, self.tag, data),
            None => format!("{} {}", self.level, self.tag),
        };
        TranscodeError::malformed(self.line, content, format!("\"{}\" is not a valid element name", name))
    }
}

/// Whether `name` can be used as an XML element name.
///
/// Accepts a letter or `_` followed by letters, digits, `_`, `-` and `.`.
/// Colons are not accepted since the output declares no namespaces.
///
/// ```rust
/// use gedcom_xml::is_xml_name;
///
/// assert!(is_xml_name("INDI"));
/// assert!(is_xml_name("_UID"));
/// assert!(!is_xml_name("2ND"));
/// assert!(!is_xml_name("A&B"));
/// ```
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Characters permitted in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Split off the first whitespace-delimited token. The remainder has its
/// leading whitespace removed.
fn split_token(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (s, ""),
    }
}

fn parse_level(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

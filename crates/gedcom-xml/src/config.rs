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

//! Transcoder configuration

/// What to do with text that follows the type tag of a cross-reference record.
///
/// In `0 @N1@ NOTE some text` the pointer `@N1@` becomes the element value and
/// `NOTE` the element name, which leaves `some text` with nowhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceData {
    /// Drop the extra text and log a warning.
    #[default]
    Discard,
    /// Fail with [`TranscodeError::DanglingReferenceData`](crate::TranscodeError::DanglingReferenceData).
    Reject,
}

/// Configuration for GEDCOM to XML conversion.
///
/// # Examples
///
/// ```rust
/// use gedcom_xml::{ReferenceData, TranscodeConfig};
///
/// let config = TranscodeConfig::default()
///     .with_root_element("family")
///     .with_indent("\t")
///     .with_reference_data(ReferenceData::Reject);
///
/// assert_eq!(config.root_element, "family");
/// assert_eq!(config.max_depth, 100);
/// ```
#[derive(Debug, Clone)]
pub struct TranscodeConfig {
    /// Name of the element wrapping the whole document.
    ///
    /// Default: `"gedcom"`
    pub root_element: String,

    /// Indentation emitted once per record level.
    ///
    /// Default: two spaces
    pub indent: String,

    /// Maximum line length in bytes.
    ///
    /// Lines exceeding this length abort the conversion. This protects against
    /// malformed input with extremely long lines that could exhaust memory.
    ///
    /// Default: 1,000,000 bytes (1MB)
    pub max_line_length: usize,

    /// Maximum record level.
    ///
    /// Memory use grows with nesting depth only, so this bounds the
    /// open-element stack.
    ///
    /// Default: 100 levels
    pub max_depth: usize,

    /// Buffer size for reading input and writing output.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Handling of data following the type tag of a reference record.
    ///
    /// Default: [`ReferenceData::Discard`]
    pub reference_data: ReferenceData,
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            root_element: "gedcom".to_string(),
            indent: "  ".to_string(),
            max_line_length: 1_000_000,
            max_depth: 100,
            buffer_size: 64 * 1024,
            reference_data: ReferenceData::Discard,
        }
    }
}

impl TranscodeConfig {
    /// Set the root element name.
    pub fn with_root_element(mut self, root: impl Into<String>) -> Self {
        self.root_element = root.into();
        self
    }

    /// Set the per-level indentation string.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the maximum accepted line length in bytes.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Set the maximum accepted record level.
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    /// Set the I/O buffer size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Set the reference record data policy.
    pub fn with_reference_data(mut self, policy: ReferenceData) -> Self {
        self.reference_data = policy;
        self
    }
}

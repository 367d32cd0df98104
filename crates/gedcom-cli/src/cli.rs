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

//! Command-line argument definitions.

use crate::convert::convert;
use crate::error::CliError;
use clap::Parser;
use colored::Colorize;
use gedcom_xml::{is_xml_name, ReferenceData, TranscodeConfig};
use std::path::PathBuf;
use std::time::Instant;

/// gedcom2xml - convert a GEDCOM file to XML
///
/// Reads a GEDCOM file and writes an XML document with one element per
/// record, nested according to the record levels. The output file must not
/// exist yet.
///
/// # Examples
///
/// ```bash
/// gedcom2xml family.ged family.xml
///
/// # Four-space indentation, custom root element
/// gedcom2xml family.ged family.xml --indent 4 --root genealogy
///
/// # Show conversion details
/// RUST_LOG=info gedcom2xml family.ged family.xml
/// ```
#[derive(Parser, Debug)]
#[command(name = "gedcom2xml")]
#[command(author, version, about = "gedcom2xml - convert GEDCOM genealogy files to XML", long_about = None)]
pub struct Cli {
    /// Input GEDCOM file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output XML file (must not exist)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Name of the root element
    #[arg(long, default_value = "gedcom", value_parser = parse_element_name)]
    pub root: String,

    /// Spaces per nesting level
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Fail on text after the type tag of a cross-reference record
    /// instead of dropping it
    #[arg(long)]
    pub strict_references: bool,

    /// Do not print the summary and elapsed time
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_element_name(name: &str) -> Result<String, String> {
    if is_xml_name(name) {
        Ok(name.to_string())
    } else {
        Err(format!("'{}' is not a valid XML element name", name))
    }
}

impl Cli {
    /// Build the transcoder configuration from the arguments.
    pub fn config(&self) -> TranscodeConfig {
        let policy = if self.strict_references {
            ReferenceData::Reject
        } else {
            ReferenceData::Discard
        };

        TranscodeConfig::default()
            .with_root_element(self.root.clone())
            .with_indent(" ".repeat(self.indent))
            .with_reference_data(policy)
    }

    /// Run the conversion and report the elapsed time.
    pub fn execute(self) -> Result<(), CliError> {
        let config = self.config();

        let start = Instant::now();
        let stats = convert(&self.input, &self.output, &config)?;
        let elapsed = start.elapsed();

        if !self.quiet {
            println!(
                "{} {} -> {} ({} records)",
                "✓".green().bold(),
                self.input.display(),
                self.output.display(),
                stats.records
            );
            println!("Total time taken: {} ms.", elapsed.as_millis());
        }
        Ok(())
    }
}

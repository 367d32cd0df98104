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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FAMILY: &str = "\
0 HEAD
1 CHAR UTF-8
0 @I1@ INDI
1 NAME Mary /Smith/
1 SEX F
0 TRLR
";

// Test helper to create a gedcom2xml command
fn gedcom_cmd() -> Command {
    Command::cargo_bin("gedcom2xml").expect("Failed to find gedcom2xml binary")
}

// Test helper to create a temp dir holding an input file
fn setup(content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("in.ged"), content).expect("Failed to write input file");
    dir
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    gedcom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gedcom2xml - convert GEDCOM genealogy files to XML"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    gedcom_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gedcom2xml"));
}

// ===== Argument Tests =====

#[test]
fn test_no_arguments_prints_usage() {
    gedcom_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_single_argument_prints_usage() {
    let dir = setup(FAMILY);
    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// ===== Conversion Tests =====

#[test]
fn test_convert_file() {
    let dir = setup(FAMILY);
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 records"))
        .stdout(predicate::str::is_match(r"Total time taken: \d+ ms\.").unwrap());

    let xml = fs::read_to_string(&output).unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <gedcom>\n\
         <HEAD>\n  <CHAR>UTF-8</CHAR>\n</HEAD>\n\
         <INDI value=\"@I1@\">\n  <NAME>Mary /Smith/</NAME>\n  <SEX>F</SEX>\n</INDI>\n\
         <TRLR></TRLR>\n\
         </gedcom>"
    );
}

#[test]
fn test_quiet_mode() {
    let dir = setup(FAMILY);
    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(dir.path().join("out.xml"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_root_and_indent_options() {
    let dir = setup("0 A\n1 B x\n");
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .args(["--root", "tree", "--indent", "4", "-q"])
        .assert()
        .success();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.ends_with("<tree>\n<A>\n    <B>x</B>\n</A>\n</tree>"));
}

#[test]
fn test_strict_references() {
    let dir = setup("0 @N1@ NOTE Born at home\n");
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .arg("-q")
        .assert()
        .success();
    assert!(fs::read_to_string(&output).unwrap().contains("<NOTE>@N1@</NOTE>"));

    let strict_output = dir.path().join("strict.xml");
    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&strict_output)
        .arg("--strict-references")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Born at home"));
}

#[test]
fn test_invalid_root_rejected_before_conversion() {
    let dir = setup(FAMILY);
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .args(["--root", "family tree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid XML element name"));
    assert!(!output.exists());
}

// ===== Precondition Tests =====

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("missing.ged"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn test_input_is_directory() {
    let dir = tempfile::tempdir().unwrap();

    gedcom_cmd()
        .arg(dir.path())
        .arg(dir.path().join("out.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_existing_output_not_overwritten() {
    let dir = setup(FAMILY);
    let output = dir.path().join("out.xml");
    fs::write(&output, "keep me").unwrap();

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn test_output_is_directory() {
    let dir = setup(FAMILY);

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

// ===== Malformed Input Tests =====

#[test]
fn test_malformed_record_reports_line() {
    let dir = setup("0 HEAD\n1 CHAR UTF-8\nabc TAG value\n");
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("abc TAG value"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_tag_reports_line() {
    let dir = setup("0 HEAD\n1 NA<ME John\n");
    let output = dir.path().join("out.xml");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("not a valid element name"));
    assert!(!output.exists());
}

#[test]
fn test_level_jump_reports_line() {
    let dir = setup("0 INDI\n2 DATE 1900\n");

    gedcom_cmd()
        .arg(dir.path().join("in.ged"))
        .arg(dir.path().join("out.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

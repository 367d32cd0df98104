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

//! gedcom2xml CLI library.
//!
//! Wraps the [`gedcom_xml`] transcoder with file handling:
//!
//! - the input must exist and be a regular file
//! - the output must not exist; it is created exclusively and removed again
//!   if the conversion fails
//! - elapsed wall-clock time is printed on success
//!
//! Log output goes to stderr and is controlled with `RUST_LOG`.

pub mod cli;
pub mod convert;
pub mod error;

// Dweve Yamltree - Immutable YAML Document Engine
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Validate command - YAML syntax and structure validation

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use yamltree_core::{parse_stream_with_options, ParseOptions};

/// Read every document of `file` and print a one-line verdict.
///
/// With `lenient`, aliases without a matching anchor are kept as text
/// instead of failing the read.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or any document is malformed.
pub fn validate(file: &str, lenient: bool) -> Result<(), CliError> {
    let content = read_file(file)?;

    let options = ParseOptions::builder().strict_aliases(!lenient).build();

    match parse_stream_with_options(&content, options) {
        Ok(stream) => {
            println!("{} {}", "✓".green().bold(), file);
            println!("  Documents: {}", stream.len());
            if lenient {
                println!("  Aliases: lenient");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(CliError::parse(e))
        }
    }
}

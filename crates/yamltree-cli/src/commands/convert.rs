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

//! Conversion commands - YAML to JSON and back

use super::{file_node, read_file, with_final_newline, write_output};
use crate::error::CliError;
use tracing::debug;
use yamltree_c14n::canonicalize;
use yamltree_core::parse_stream;
use yamltree_json::{json_to_node, to_json_string, ToJsonConfig};

/// Convert a YAML file to JSON.
///
/// A file with several documents becomes a JSON array of documents.
pub fn to_json(file: &str, output: Option<&str>, pretty: bool) -> Result<(), CliError> {
    let content = read_file(file)?;

    let stream = parse_stream(&content).map_err(CliError::parse)?;
    let node = file_node(stream);

    let config = ToJsonConfig { pretty };
    let json = to_json_string(&node, &config)?;
    debug!("converted '{}' to {} bytes of JSON", file, json.len());

    write_output(&with_final_newline(json), output)
}

/// Convert a JSON file to canonical YAML.
pub fn from_json(file: &str, output: Option<&str>) -> Result<(), CliError> {
    let content = read_file(file)?;
    let text = String::from_utf8(content)
        .map_err(|e| CliError::invalid_input(format!("'{}' is not UTF-8: {}", file, e)))?;

    let node = json_to_node(&text)?;
    let yaml = canonicalize(&node).map_err(CliError::canonicalization)?;

    write_output(&with_final_newline(yaml), output)
}

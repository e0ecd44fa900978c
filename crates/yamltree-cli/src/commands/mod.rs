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

//! CLI command implementations

mod convert;
mod format;
mod inspect;
mod validate;

pub use convert::{from_json, to_json};
pub use format::{format, FormatOptions};
pub use inspect::inspect;
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use tracing::debug;
use yamltree_core::{Mapping, Node, Stream};

/// Default cap on input file size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("YAMLTREE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a whole file as bytes, refusing files over the size cap.
///
/// The cap is `YAMLTREE_MAX_FILE_SIZE` bytes when that variable holds a
/// number, [`DEFAULT_MAX_FILE_SIZE`] otherwise.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    // Check the size first so oversized files are never loaded
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let bytes = fs::read(path).map_err(|e| CliError::io_error(path, e))?;
    debug!("read {} bytes from '{}'", bytes.len(), path);
    Ok(bytes)
}

/// Write to the given path, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// The node a file stands for: its only document, all of its documents as
/// a stream, or the empty mapping when it has none.
fn file_node(stream: Stream) -> Node {
    match stream.len() {
        0 => Mapping::new().into(),
        1 => stream
            .get(0)
            .cloned()
            .unwrap_or_else(|| Mapping::new().into()),
        _ => stream.into(),
    }
}

/// Canonical text ends without a line break; files end with one.
fn with_final_newline(mut text: String) -> String {
    text.push('\n');
    text
}

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

//! Format command - canonical YAML output

use super::{file_node, read_file, with_final_newline, write_output};
use crate::error::CliError;
use tracing::debug;
use yamltree_c14n::{canonicalize_with_config, CanonicalConfig, QuotingStrategy};
use yamltree_core::parse_stream;

/// Output options for [`format`].
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Spaces per nesting level, clamped to `2..=9` by the writer.
    pub indent: usize,
    pub quote_always: bool,
    pub strip_comments: bool,
    /// Compare instead of writing.
    pub check: bool,
}

impl FormatOptions {
    fn canonical_config(&self) -> CanonicalConfig {
        let quoting = if self.quote_always {
            QuotingStrategy::Always
        } else {
            QuotingStrategy::Minimal
        };
        CanonicalConfig::new()
            .with_indent(self.indent)
            .with_quoting(quoting)
            .with_comments(!self.strip_comments)
    }
}

/// Write `file` in canonical form to `output`, or to stdout.
///
/// A file holding several documents is written as a stream.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, if output cannot be
/// written, or in check mode if the file is not already canonical.
pub fn format(file: &str, output: Option<&str>, options: &FormatOptions) -> Result<(), CliError> {
    let content = read_file(file)?;

    let stream = parse_stream(&content).map_err(CliError::parse)?;
    debug!("formatting {} document(s) from '{}'", stream.len(), file);

    let node = file_node(stream);
    let canonical = canonicalize_with_config(&node, &options.canonical_config())
        .map_err(CliError::canonicalization)?;
    let canonical = with_final_newline(canonical);

    if options.check {
        if content != canonical.as_bytes() {
            return Err(CliError::NotCanonical);
        }
        println!("File is in canonical form");
        return Ok(());
    }

    write_output(&canonical, output)
}

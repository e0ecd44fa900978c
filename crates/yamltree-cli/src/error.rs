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

//! Structured error types for the yamltree CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error as
//! `Error: {message}` and exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use yamltree_core::YamlError;
use yamltree_json::JsonConversionError;

/// Errors reported by CLI commands.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// A file could not be read or written.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// The input file exceeds the configured size cap.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The input is not valid YAML.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The tree could not be written as canonical YAML.
    #[error("Canonicalization error: {0}")]
    Canonicalization(String),

    /// Conversion to or from JSON failed.
    #[error("JSON conversion error: {0}")]
    JsonConversion(String),

    /// `format --check` found a file that is not canonical.
    #[error("File is not in canonical form")]
    NotCanonical,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn parse(err: YamlError) -> Self {
        Self::Parse(err.to_string())
    }

    pub fn canonicalization(err: YamlError) -> Self {
        Self::Canonicalization(err.to_string())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<JsonConversionError> for CliError {
    fn from(err: JsonConversionError) -> Self {
        Self::JsonConversion(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yamltree_core::YamlErrorKind;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "missing.yaml",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'missing.yaml': not found");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.yaml", 3 * 1024 * 1024, 2 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.yaml"));
        assert!(msg.contains("3145728 bytes"));
        assert!(msg.contains("(2 MB)"));
    }

    #[test]
    fn test_parse_error_keeps_line() {
        let err = CliError::parse(YamlError::malformed("duplicate key 'a'", 3));
        assert_eq!(
            err.to_string(),
            "Parse error: MalformedStructure at line 3: duplicate key 'a'"
        );
    }

    #[test]
    fn test_canonicalization_error() {
        let err = CliError::canonicalization(YamlError::new(
            YamlErrorKind::Security,
            "nesting too deep",
            0,
        ));
        assert!(err.to_string().starts_with("Canonicalization error: SecurityError"));
    }

    #[test]
    fn test_from_json_conversion_error() {
        let err: CliError = JsonConversionError::NestedStream.into();
        assert!(matches!(err, CliError::JsonConversion(_)));
    }

    #[test]
    fn test_not_canonical_display() {
        assert_eq!(CliError::NotCanonical.to_string(), "File is not in canonical form");
    }
}

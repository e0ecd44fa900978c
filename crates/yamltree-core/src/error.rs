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

//! Error types for YAML reading and rendering.

use std::fmt;
use thiserror::Error;

use crate::lex::ScanError;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlErrorKind {
    /// A line cannot be classified, a bracket or quote is unbalanced,
    /// indentation is inconsistent or a key is repeated.
    MalformedStructure,
    /// A block scalar header other than `|`/`>` with recognized modifiers.
    InvalidBlockScalarIndicator,
    /// Security limit exceeded.
    Security,
    /// Input is not valid UTF-8 or contains forbidden control characters.
    Encoding,
    /// Error while converting to or from another value model.
    Conversion,
    /// I/O error (file operations).
    Io,
}

impl fmt::Display for YamlErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedStructure => write!(f, "MalformedStructure"),
            Self::InvalidBlockScalarIndicator => write!(f, "InvalidBlockScalarIndicator"),
            Self::Security => write!(f, "SecurityError"),
            Self::Encoding => write!(f, "EncodingError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error that occurred while reading or rendering YAML.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct YamlError {
    /// The kind of error.
    pub kind: YamlErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when not tied to a line).
    pub line: usize,
    /// Column number (1-based, optional).
    pub column: Option<usize>,
    /// Additional context (e.g., "in flow collection opened at line 3").
    pub context: Option<String>,
}

impl YamlError {
    /// Create a new error.
    pub fn new(kind: YamlErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column: None,
            context: None,
        }
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn malformed(message: impl Into<String>, line: usize) -> Self {
        Self::new(YamlErrorKind::MalformedStructure, message, line)
    }

    pub fn invalid_indicator(message: impl Into<String>, line: usize) -> Self {
        Self::new(YamlErrorKind::InvalidBlockScalarIndicator, message, line)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(YamlErrorKind::Security, message, line)
    }

    pub fn encoding(message: impl Into<String>, line: usize) -> Self {
        Self::new(YamlErrorKind::Encoding, message, line)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(YamlErrorKind::Conversion, message, 0)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(YamlErrorKind::Io, message, 0)
    }

    /// Wrap a scanner error found on the given 1-based line.
    pub fn scan(err: ScanError, line: usize) -> Self {
        let column = err.column();
        let error = Self::malformed(err.to_string(), line);
        match column {
            Some(column) => error.with_column(column + 1),
            None => error,
        }
    }
}

/// Result type for YAML operations.
pub type YamlResult<T> = Result<T, YamlError>;

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

//! Error types for the quote- and bracket-aware scanner.
//!
//! Columns are 0-based byte offsets into the scanned text. They are converted
//! into [`crate::YamlError`] together with the offending line number.

use thiserror::Error;

/// Errors raised while scanning a single logical line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A quoted string is never closed.
    #[error("unterminated {quote} quote starting at column {}", .column + 1)]
    UnterminatedQuote { quote: char, column: usize },

    /// A closing bracket without a matching opener, or of the wrong kind.
    #[error("unbalanced '{bracket}' at column {}", .column + 1)]
    UnbalancedBracket { bracket: char, column: usize },

    /// Something follows the closing bracket of a flow collection.
    #[error("unexpected content after flow collection: '{text}'")]
    TrailingContent { text: String, column: usize },

    /// Two consecutive commas in a flow collection.
    #[error("empty entry in flow collection at column {}", .column + 1)]
    EmptyEntry { column: usize },

    /// Unknown escape sequence in a double-quoted scalar.
    #[error("invalid escape sequence '\\{sequence}' in double-quoted scalar")]
    InvalidEscape { sequence: String },
}

impl ScanError {
    /// Column of the error when it points at a specific character.
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::UnterminatedQuote { column, .. }
            | Self::UnbalancedBracket { column, .. }
            | Self::TrailingContent { column, .. }
            | Self::EmptyEntry { column } => Some(*column),
            Self::InvalidEscape { .. } => None,
        }
    }
}

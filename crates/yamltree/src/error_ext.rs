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

//! Error context helpers.
//!
//! Extension methods for annotating errors with what the caller was doing
//! when they occurred.
//!
//! # Examples
//!
//! ```rust
//! use yamltree::{parse, YamlResultExt};
//!
//! fn load_config(path: &str) -> Result<yamltree::Node, yamltree::YamlError> {
//!     let content = std::fs::read_to_string(path)
//!         .context(format!("while reading {}", path))?;
//!
//!     parse(&content).with_context(|| format!("while parsing {}", path))
//! }
//!
//! let err = load_config("/nonexistent/config.yaml").unwrap_err();
//! assert_eq!(err.kind, yamltree::YamlErrorKind::Io);
//! assert_eq!(err.context.as_deref(), Some("while reading /nonexistent/config.yaml"));
//! ```

use crate::YamlError;
use std::fmt;

/// Extension trait for adding context to fallible results.
///
/// Context is stored in the error's `context` field; the message, kind and
/// line are left untouched. Adding context to an error that already has
/// some prepends the new text, separated by `"; "`.
pub trait YamlResultExt<T> {
    /// Add context to an error.
    ///
    /// ```rust
    /// use yamltree::{parse, YamlResultExt};
    ///
    /// let err = parse("a: [1")
    ///     .context("in section A")
    ///     .context("while loading config")
    ///     .unwrap_err();
    /// assert_eq!(err.context.as_deref(), Some("while loading config; in section A"));
    /// ```
    fn context<C>(self, context: C) -> Result<T, YamlError>
    where
        C: fmt::Display;

    /// Add lazily computed context to an error.
    ///
    /// The closure only runs on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, YamlError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> YamlResultExt<T> for Result<T, YamlError> {
    fn context<C>(self, context: C) -> Result<T, YamlError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, YamlError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }
}

impl<T> YamlResultExt<T> for Result<T, std::io::Error> {
    fn context<C>(self, context: C) -> Result<T, YamlError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(YamlError::io(e.to_string()), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, YamlError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(YamlError::io(e.to_string()), f().to_string()))
    }
}

fn add_context_to_error(mut error: YamlError, new_context: String) -> YamlError {
    if new_context.is_empty() {
        return error;
    }

    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });

    error
}

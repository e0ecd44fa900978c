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

//! Canonicalization configuration.
//!
//! This module defines the options controlling canonical YAML output.

/// Quoting strategy for scalar values.
///
/// Scalars that read as null, a boolean or a number are written plain under
/// every strategy when they were plain, and quoted when they were quoted, so
/// that their type survives a round trip.
///
/// # Examples
///
/// ```
/// use yamltree_c14n::{CanonicalConfig, QuotingStrategy};
///
/// // Minimal quoting (default) - quotes only when necessary
/// let config = CanonicalConfig::new().with_quoting(QuotingStrategy::Minimal);
///
/// // Quote every string scalar
/// let config = CanonicalConfig::new().with_quoting(QuotingStrategy::Always);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum QuotingStrategy {
    /// Only quote when the plain form would read back differently.
    ///
    /// Quotes are added when a scalar:
    /// - Is empty
    /// - Has leading or trailing whitespace, or control characters
    /// - Starts with an indicator (`-`, `?`, `:`, `[`, `{`, `#`, `&`, `*`,
    ///   `!`, `|`, `>`, quotes, `%`, `@`)
    /// - Contains `: `, ` #` or brackets
    /// - Was quoted and would otherwise read as null, a boolean or a number
    ///
    /// Single-quoted scalars keep single quotes when they need quoting.
    #[default]
    Minimal,

    /// Double-quote every scalar except block scalars and plain scalars that
    /// read as null, a boolean or a number.
    Always,
}

/// Configuration for canonical output format.
///
/// # Examples
///
/// ```
/// use yamltree_c14n::{CanonicalConfig, QuotingStrategy};
///
/// let config = CanonicalConfig::default();
/// assert_eq!(config.indent, 2);
/// assert_eq!(config.quoting, QuotingStrategy::Minimal);
/// assert!(config.include_comments);
///
/// let config = CanonicalConfig::new()
///     .with_indent(4)
///     .with_quoting(QuotingStrategy::Always)
///     .with_comments(false);
/// assert_eq!(config.indent, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CanonicalConfig {
    /// Spaces per nesting level.
    ///
    /// Values are clamped to `2..=9`: a sequence item needs room for `- `,
    /// and block scalars may have to state the step as a single digit.
    ///
    /// Default: `2`
    pub indent: usize,

    /// Quoting strategy for scalar values.
    ///
    /// Default: [`QuotingStrategy::Minimal`]
    pub quoting: QuotingStrategy,

    /// Write node comments.
    ///
    /// Scalar comments are written as a trailing `# text`, collection
    /// comments as `#` lines above the key or item that holds them.
    ///
    /// Default: `true`
    pub include_comments: bool,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            quoting: QuotingStrategy::Minimal,
            include_comments: true,
        }
    }
}

impl CanonicalConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `CanonicalConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamltree_c14n::{CanonicalConfig, QuotingStrategy};
    ///
    /// let config = CanonicalConfig::builder()
    ///     .indent(4)
    ///     .quoting(QuotingStrategy::Always)
    ///     .build();
    /// assert_eq!(config.indent, 4);
    /// ```
    pub fn builder() -> CanonicalConfigBuilder {
        CanonicalConfigBuilder::new()
    }

    /// Set the indentation step.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the quoting strategy.
    pub fn with_quoting(mut self, quoting: QuotingStrategy) -> Self {
        self.quoting = quoting;
        self
    }

    /// Set whether comments are written.
    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }
}

/// Builder for constructing a `CanonicalConfig` with a chainable API.
///
/// # Examples
///
/// ```
/// use yamltree_c14n::CanonicalConfig;
///
/// let config = CanonicalConfig::builder().build();
/// assert_eq!(config, CanonicalConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalConfigBuilder {
    indent: usize,
    quoting: QuotingStrategy,
    include_comments: bool,
}

impl Default for CanonicalConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        let defaults = CanonicalConfig::default();
        Self {
            indent: defaults.indent,
            quoting: defaults.quoting,
            include_comments: defaults.include_comments,
        }
    }

    /// Set the number of spaces per nesting level.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the quoting strategy for scalar values.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamltree_c14n::{CanonicalConfig, QuotingStrategy};
    ///
    /// let config = CanonicalConfig::builder()
    ///     .quoting(QuotingStrategy::Always)
    ///     .build();
    /// assert_eq!(config.quoting, QuotingStrategy::Always);
    /// ```
    pub fn quoting(mut self, quoting: QuotingStrategy) -> Self {
        self.quoting = quoting;
        self
    }

    /// Set whether comments are written.
    pub fn include_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }

    /// Build the final `CanonicalConfig`.
    pub fn build(self) -> CanonicalConfig {
        CanonicalConfig {
            indent: self.indent,
            quoting: self.quoting,
            include_comments: self.include_comments,
        }
    }
}

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

//! # Yamltree - Immutable YAML Document Engine
//!
//! Yamltree reads indentation-structured YAML text into an immutable node
//! tree of mappings, sequences, scalars and streams, lets callers build such
//! trees with persistent builders, and writes them back as canonical YAML.
//!
//! ## Quick Start
//!
//! ```rust
//! use yamltree::{canonicalize, parse};
//!
//! let text = r#"
//! # service settings
//!
//! name: api
//! ports: [80, 443]
//! database:
//!   host: db.internal
//!   pool: {min: 2, max: 16}
//! "#;
//!
//! let node = parse(text).expect("Failed to parse");
//! let root = node.as_mapping().unwrap();
//! assert_eq!(root.string("name"), Some("api"));
//! let pool = root.mapping("database").and_then(|db| db.mapping("pool")).unwrap();
//! assert_eq!(pool.integer("max"), Some(16));
//! assert_eq!(node.comment().value(), "service settings");
//!
//! let canonical = canonicalize(&node).expect("Failed to canonicalize");
//! assert_eq!(parse(&canonical).unwrap(), node);
//! ```
//!
//! ## Features
//!
//! - **Immutable nodes**: every edit returns a new node sharing nothing
//!   mutable with the old one
//! - **Comments**: document, collection and scalar comments survive a round
//!   trip through the canonical writer
//! - **Flow collections**: `[a, b]` and `{k: v}`, spanning several lines
//! - **Block scalars**: `|` and `>` with chomping and indentation indicators
//! - **Streams**: `---`/`...` separated documents
//! - **Anchors and aliases**: `&name` / `*name` within a document
//!
//! ## Modules
//!
//! - [`c14n`](mod@c14n): Canonical output
//! - `json`: JSON conversion (feature = "json")

pub use yamltree_core::{
    // Functions
    parse as core_parse,
    parse_stream as core_parse_stream,
    parse_stream_with_options,
    parse_with_options,
    // Block scalars
    fold,
    BlockIndicator,
    BlockStyle,
    Chomping,
    // Builders
    MappingBuilder,
    SequenceBuilder,
    StreamBuilder,
    // Comments
    Comment,
    Comments,
    NodeId,
    // Nodes
    CollectionStyle,
    Mapping,
    Node,
    NodeKind,
    Scalar,
    ScalarStyle,
    Sequence,
    Stream,
    // Errors
    YamlError,
    YamlErrorKind,
    YamlResult,
    // Parser
    Limits,
    ParseOptions,
    ParseOptionsBuilder,
};

mod error_ext;
pub use error_ext::YamlResultExt;

// Re-export canonicalization
pub mod c14n {
    //! Canonicalization utilities
    pub use yamltree_c14n::{
        canonicalize, canonicalize_stream, canonicalize_stream_with_config,
        canonicalize_with_config, CanonicalConfig, CanonicalConfigBuilder, CanonicalWriter,
        QuotingStrategy,
    };
}

/// JSON conversion utilities (requires `json` feature)
#[cfg(feature = "json")]
pub mod json {
    pub use yamltree_json::{
        from_json_str, from_json_value, json_to_node, node_to_json, to_json_string,
        to_json_value, FromJsonConfig, FromJsonConfigBuilder, JsonConversionError, ToJsonConfig,
    };
}

/// Parse the first document of a YAML string.
///
/// Aliases without a matching anchor are errors. For lenient parsing, use
/// [`parse_lenient`].
///
/// # Examples
///
/// ```rust
/// use yamltree::parse;
///
/// let node = parse("key: value").unwrap();
/// assert_eq!(node.as_mapping().unwrap().string("key"), Some("value"));
/// ```
#[inline]
pub fn parse(input: &str) -> YamlResult<Node> {
    core_parse(input.as_bytes())
}

/// Parse every document of a YAML string.
///
/// ```rust
/// let stream = yamltree::parse_stream("---\na: 1\n---\n- b\n").unwrap();
/// assert_eq!(stream.len(), 2);
/// ```
#[inline]
pub fn parse_stream(input: &str) -> YamlResult<Stream> {
    core_parse_stream(input.as_bytes())
}

/// Parse the first document, keeping unknown aliases as text.
#[inline]
pub fn parse_lenient(input: &str) -> YamlResult<Node> {
    let options = ParseOptions::builder().strict_aliases(false).build();
    parse_with_options(input.as_bytes(), options)
}

/// Canonicalize a node to a string.
///
/// Produces deterministic output suitable for hashing and diffing.
///
/// # Examples
///
/// ```rust
/// use yamltree::{canonicalize, parse};
///
/// let node = parse("b:   2\na: [1,2]").unwrap();
/// assert_eq!(canonicalize(&node).unwrap(), "b: 2\na:\n  - 1\n  - 2");
/// ```
#[inline]
pub fn canonicalize(node: &Node) -> YamlResult<String> {
    yamltree_c14n::canonicalize(node)
}

/// Convert a node to compact JSON.
///
/// # Examples
///
/// ```rust
/// use yamltree::{parse, to_json};
///
/// let node = parse("key: 42").unwrap();
/// assert_eq!(to_json(&node).unwrap(), r#"{"key":42}"#);
/// ```
#[cfg(feature = "json")]
#[inline]
pub fn to_json(node: &Node) -> YamlResult<String> {
    Ok(yamltree_json::node_to_json(node)?)
}

/// Convert JSON to a node.
///
/// # Examples
///
/// ```rust
/// use yamltree::from_json;
///
/// let node = from_json(r#"{"key": "value"}"#).unwrap();
/// assert_eq!(node.as_mapping().unwrap().string("key"), Some("value"));
/// ```
#[cfg(feature = "json")]
#[inline]
pub fn from_json(json: &str) -> YamlResult<Node> {
    Ok(yamltree_json::json_to_node(json)?)
}

/// Check that every document of a YAML string reads.
#[inline]
pub fn validate(input: &str) -> YamlResult<()> {
    parse_stream(input).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

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

//! Yamltree Canonicalization
//!
//! Provides deterministic YAML output for yamltree node trees.
//!
//! # Overview
//!
//! Canonical output ensures:
//!
//! - **Deterministic output**: the same tree always produces the same text
//! - **Idempotency**: reading canonical output and writing it again yields
//!   the same text
//! - **Round-trip preservation**: reading canonical output gives a tree
//!   structurally equal to the one written
//!
//! # Format
//!
//! - Mappings as `key: value`, nested collections indented by a fixed step
//! - Sequences as `- item`, with collection items in compact form
//! - Empty collections and collection keys in flow style (`{}`, `[a, b]`)
//! - Scalars plain unless quoting is needed to read them back
//! - Block scalars as their indicator followed by the indented lines
//! - Scalar comments as a trailing `# text`, collection comments as `#`
//!   lines above the key or item holding the collection
//! - Streams as documents opened by `---`
//! - No trailing line break
//!
//! # Examples
//!
//! ```
//! use yamltree_c14n::{canonicalize, canonicalize_with_config, CanonicalConfig};
//! use yamltree_core::{parse, MappingBuilder, Node};
//!
//! let node: Node = MappingBuilder::new()
//!     .add("name", "yamltree")
//!     .add("tags", yamltree_core::SequenceBuilder::new().add("yaml").build())
//!     .build()
//!     .into();
//! let text = canonicalize(&node).unwrap();
//! assert_eq!(text, "name: yamltree\ntags:\n  - yaml");
//! assert_eq!(parse(text.as_bytes()).unwrap(), node);
//!
//! let wide = canonicalize_with_config(&node, &CanonicalConfig::new().with_indent(4)).unwrap();
//! assert_eq!(wide, "name: yamltree\ntags:\n    - yaml");
//! ```
//!
//! # Security
//!
//! Nesting is limited to 1000 levels so that builder-made trees deeper than
//! any reader limit cannot overflow the stack.

mod config;
mod writer;

pub use config::{CanonicalConfig, CanonicalConfigBuilder, QuotingStrategy};
pub use writer::CanonicalWriter;

use yamltree_core::{Node, Stream, YamlResult};

/// Canonicalize a node to a string with the default configuration.
///
/// # Errors
///
/// Returns `YamlErrorKind::Conversion` when a stream is nested inside a
/// document, and `YamlErrorKind::Security` when nesting exceeds 1000 levels.
///
/// # Examples
///
/// ```
/// use yamltree_c14n::canonicalize;
/// use yamltree_core::{Node, Scalar};
///
/// let text = canonicalize(&Node::from(Scalar::folded(["line1", "line2"]))).unwrap();
/// assert_eq!(text, "---\n>\n  line1\n  line2\n...");
/// ```
pub fn canonicalize(node: &Node) -> YamlResult<String> {
    canonicalize_with_config(node, &CanonicalConfig::default())
}

/// Canonicalize a node with custom configuration.
///
/// # Examples
///
/// ```
/// use yamltree_c14n::{canonicalize_with_config, CanonicalConfig, QuotingStrategy};
/// use yamltree_core::MappingBuilder;
///
/// let node = MappingBuilder::new().add("a", "b").build().into();
/// let config = CanonicalConfig::new().with_quoting(QuotingStrategy::Always);
/// assert_eq!(canonicalize_with_config(&node, &config).unwrap(), "\"a\": \"b\"");
/// ```
pub fn canonicalize_with_config(node: &Node, config: &CanonicalConfig) -> YamlResult<String> {
    let mut writer = CanonicalWriter::new(config.clone());
    writer.write_node(node)
}

/// Canonicalize every document of a stream with the default configuration.
pub fn canonicalize_stream(stream: &Stream) -> YamlResult<String> {
    canonicalize_stream_with_config(stream, &CanonicalConfig::default())
}

/// Canonicalize every document of a stream with custom configuration.
pub fn canonicalize_stream_with_config(
    stream: &Stream,
    config: &CanonicalConfig,
) -> YamlResult<String> {
    let mut writer = CanonicalWriter::new(config.clone());
    writer.write_stream(stream)
}

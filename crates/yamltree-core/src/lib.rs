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

//! Immutable YAML document engine.
//!
//! This crate reads YAML text into an immutable node tree of mappings,
//! sequences, scalars and streams, keeps the comments that document each
//! node, and lets callers build the same trees programmatically.
//!
//! # Reading
//!
//! Text is split into physical [`lines`], each carrying its indentation and
//! inline comment. The resolver classifies every indentation-scoped block
//! (flow collection, block scalar, mapping, sequence or scalar) and recurses
//! into nested blocks:
//!
//! ```
//! use yamltree_core::{parse, Node};
//!
//! let node = parse(b"# the server\nserver:\n  host: example.org\n  ports: [80, 443]\n").unwrap();
//! let server = node.as_mapping().and_then(|m| m.mapping("server")).unwrap();
//! assert_eq!(server.string("host"), Some("example.org"));
//! assert_eq!(server.sequence("ports").map(|s| s.len()), Some(2));
//! ```
//!
//! # Building
//!
//! Builders are persistent: `add` returns a new builder and leaves the
//! receiver untouched.
//!
//! ```
//! use yamltree_core::{MappingBuilder, Node};
//!
//! let base = MappingBuilder::new().add("name", "yamltree");
//! let full = base.add("version", 1);
//! assert_eq!(base.build().len(), 1);
//! assert_eq!(full.build().integer("version"), Some(1));
//! ```
//!
//! # Lexical Analysis
//!
//! The [`lex`] module holds the quote- and bracket-aware scanner used to
//! find separators, inline comments and flow collection boundaries, and the
//! quoted scalar decoder.

pub mod block_scalar;
mod builder;
mod comment;
pub mod convert;
mod error;
mod flow;
pub mod lex;
mod limits;
pub mod lines;
mod node;
mod parser;
mod preprocess;
mod resolver;

pub use block_scalar::{fold, BlockIndicator, BlockStyle, Chomping};
pub use builder::{MappingBuilder, SequenceBuilder, StreamBuilder};
pub use comment::{Comment, Comments, NodeId};
pub use error::{YamlError, YamlErrorKind, YamlResult};
pub use limits::Limits;
pub use node::{CollectionStyle, Mapping, Node, NodeKind, Scalar, ScalarStyle, Sequence, Stream};
pub use parser::{
    parse, parse_lines, parse_mapping, parse_sequence, parse_stream, parse_stream_with_options,
    parse_with_options, ParseOptions, ParseOptionsBuilder,
};
pub use preprocess::{preprocess, PreprocessedInput};

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

//! Immutable YAML node tree.
//!
//! Nodes never change after construction. Every operation that looks like a
//! change (`with_entry`, `with_element`, `with_comment`, ...) returns a new
//! value; children are held behind [`Arc`] so only pointers are copied.
//!
//! Equality and hashing are structural: they look at values and shape only,
//! never at comments or at the style a node was written in. Mapping equality
//! does not depend on entry order.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::block_scalar::{fold, BlockIndicator, BlockStyle, Chomping};
use crate::comment::{Comment, Comments, NodeId, NO_COMMENT};

/// The kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
    Stream,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Mapping => write!(f, "mapping"),
            Self::Sequence => write!(f, "sequence"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

/// A YAML node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Sequence),
    Stream(Stream),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Mapping(_) => NodeKind::Mapping,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Stream(_) => NodeKind::Stream,
        }
    }

    /// Structural fingerprint, used as the owner of comments.
    pub fn id(&self) -> NodeId {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// The node's comment; streams carry none.
    pub fn comment(&self) -> &Comment {
        match self {
            Self::Scalar(s) => s.comment(),
            Self::Mapping(m) => m.comment(),
            Self::Sequence(s) => s.comment(),
            Self::Stream(_) => &NO_COMMENT,
        }
    }

    /// The same node documented by `text`. Streams are returned unchanged.
    pub fn with_comment(&self, text: impl Into<String>) -> Node {
        match self {
            Self::Scalar(s) => Self::Scalar(s.with_comment(text)),
            Self::Mapping(m) => Self::Mapping(m.with_comment(text)),
            Self::Sequence(s) => Self::Sequence(s.with_comment(text)),
            Self::Stream(_) => self.clone(),
        }
    }

    pub(crate) fn with_read_comment(&self, text: impl Into<String>, line: usize) -> Node {
        let comment = Comment::read(self.id(), text, line);
        match self {
            Self::Scalar(s) => Self::Scalar(Scalar {
                comment,
                ..s.clone()
            }),
            Self::Mapping(m) => Self::Mapping(Mapping {
                comment,
                ..m.clone()
            }),
            Self::Sequence(s) => Self::Sequence(Sequence {
                comment,
                ..s.clone()
            }),
            Self::Stream(_) => self.clone(),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&Stream> {
        match self {
            Self::Stream(s) => Some(s),
            _ => None,
        }
    }

    /// Text of a scalar node.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().map(Scalar::value)
    }

    pub fn is_null(&self) -> bool {
        self.as_scalar().map_or(false, Scalar::is_null)
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Sequence> for Node {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Stream> for Node {
    fn from(stream: Stream) -> Self {
        Self::Stream(stream)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::new(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::new(value))
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Self::Scalar(Scalar::new(value.as_str()))
    }
}

// ==================== Scalar ====================

/// How a scalar is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarStyle {
    #[default]
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

impl ScalarStyle {
    pub fn is_quoted(&self) -> bool {
        matches!(self, Self::SingleQuoted | Self::DoubleQuoted)
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Literal | Self::Folded)
    }
}

/// Header and content lines of a block scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockSource {
    indicator: BlockIndicator,
    lines: Arc<[String]>,
}

/// A scalar: a single text value.
#[derive(Debug, Clone)]
pub struct Scalar {
    value: Arc<str>,
    style: ScalarStyle,
    block: Option<BlockSource>,
    comment: Comment,
}

impl Scalar {
    /// The text used for absent values.
    pub const NULL: &'static str = "null";

    /// A plain scalar.
    pub fn new(value: impl Into<String>) -> Self {
        Self::styled(value, ScalarStyle::Plain)
    }

    /// A scalar written in the given style. Block styles are built from the
    /// value's lines so that the block folds back to the same value.
    pub fn styled(value: impl Into<String>, style: ScalarStyle) -> Self {
        let value: String = value.into();
        let (body, chomping) = match value.strip_suffix('\n') {
            Some(body) => (body, Chomping::Keep),
            None => (value.as_str(), Chomping::Clip),
        };
        match style {
            ScalarStyle::Literal => Self::block(
                BlockIndicator::literal().with_chomping(chomping),
                body.split('\n').map(str::to_string).collect(),
            ),
            ScalarStyle::Folded => {
                // A line break survives folding only as an empty line.
                let mut lines = Vec::new();
                for (i, line) in body.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(String::new());
                    }
                    lines.push(line.to_string());
                }
                Self::block(BlockIndicator::folded().with_chomping(chomping), lines)
            }
            _ => Self {
                value: value.into(),
                style,
                block: None,
                comment: Comment::empty(),
            },
        }
    }

    /// The null scalar.
    pub fn null() -> Self {
        Self::new(Self::NULL)
    }

    pub fn single_quoted(value: impl Into<String>) -> Self {
        Self::styled(value, ScalarStyle::SingleQuoted)
    }

    pub fn double_quoted(value: impl Into<String>) -> Self {
        Self::styled(value, ScalarStyle::DoubleQuoted)
    }

    /// A block scalar made of the given content lines.
    pub fn block(indicator: BlockIndicator, lines: Vec<String>) -> Self {
        let value = fold(&indicator, &lines);
        let style = match indicator.style {
            BlockStyle::Literal => ScalarStyle::Literal,
            BlockStyle::Folded => ScalarStyle::Folded,
        };
        Self {
            value: value.into(),
            style,
            block: Some(BlockSource {
                indicator,
                lines: lines.into(),
            }),
            comment: Comment::empty(),
        }
    }

    /// A literal (`|`) block scalar.
    pub fn literal<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::block(BlockIndicator::literal(), lines.into_iter().map(Into::into).collect())
    }

    /// A folded (`>`) block scalar.
    pub fn folded<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::block(BlockIndicator::folded(), lines.into_iter().map(Into::into).collect())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn style(&self) -> ScalarStyle {
        self.style
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// Header of a block scalar.
    pub fn block_indicator(&self) -> Option<BlockIndicator> {
        self.block.as_ref().map(|b| b.indicator)
    }

    /// Content lines of a block scalar.
    pub fn block_lines(&self) -> Option<&[String]> {
        self.block.as_ref().map(|b| &b.lines[..])
    }

    /// Whether this is the plain `null` (or `~`) scalar.
    pub fn is_null(&self) -> bool {
        self.style == ScalarStyle::Plain && matches!(&*self.value, Self::NULL | "~")
    }

    pub fn with_comment(&self, text: impl Into<String>) -> Scalar {
        let comment = Comment::built(&Node::Scalar(self.clone()), text);
        Self {
            comment,
            ..self.clone()
        }
    }

    /// The value as an integer, when it reads as one.
    pub fn as_i64(&self) -> Option<i64> {
        let text = self.value.trim();
        if let Some(hex) = text.strip_prefix("0x") {
            return i64::from_str_radix(hex, 16).ok();
        }
        if let Some(oct) = text.strip_prefix("0o") {
            return i64::from_str_radix(oct, 8).ok();
        }
        text.parse().ok()
    }

    /// The value as a float, when it reads as one.
    pub fn as_f64(&self) -> Option<f64> {
        match self.value.trim() {
            ".inf" | ".Inf" | ".INF" | "+.inf" => Some(f64::INFINITY),
            "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
            ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
            text => text.parse().ok(),
        }
    }

    /// The value as a boolean, when it reads as one.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.trim() {
            "true" | "True" | "TRUE" => Some(true),
            "false" | "False" | "FALSE" => Some(false),
            _ => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ==================== Collections ====================

/// How a collection was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionStyle {
    #[default]
    Block,
    Flow,
}

/// A mapping: keys unique by structural equality, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Arc<IndexMap<Node, Node>>,
    style: CollectionStyle,
    comment: Comment,
}

impl Mapping {
    /// The empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: IndexMap<Node, Node>, style: CollectionStyle) -> Self {
        Self {
            entries: Arc::new(entries),
            style,
            comment: Comment::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Node> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.entries.iter()
    }

    /// Value stored under a structurally equal key.
    pub fn value(&self, key: &Node) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Value stored under a scalar key with the given text.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.value(&Node::from(key))
    }

    pub fn contains_key(&self, key: &Node) -> bool {
        self.entries.contains_key(key)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_str)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Node::as_scalar).and_then(Scalar::as_i64)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Node::as_scalar).and_then(Scalar::as_f64)
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Node::as_scalar).and_then(Scalar::as_bool)
    }

    pub fn mapping(&self, key: &str) -> Option<&Mapping> {
        self.get(key).and_then(Node::as_mapping)
    }

    pub fn sequence(&self, key: &str) -> Option<&Sequence> {
        self.get(key).and_then(Node::as_sequence)
    }

    pub fn style(&self) -> CollectionStyle {
        self.style
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// Comments of the values, each owned by its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamltree_core::{parse_mapping, Node};
    ///
    /// let mapping = parse_mapping(b"# the host\nhost: example.org\nport: 80\n").unwrap();
    /// let comments = mapping.comments();
    /// assert_eq!(comments.referring_to(&Node::from("host")).value(), "the host");
    /// assert_eq!(comments.referring_to(&Node::from("port")).value(), "");
    /// ```
    pub fn comments(&self) -> Comments {
        self.entries
            .iter()
            .filter(|(_, value)| !value.comment().is_empty())
            .map(|(key, value)| value.comment().reowned(key))
            .collect()
    }

    pub fn with_comment(&self, text: impl Into<String>) -> Mapping {
        let comment = Comment::built(&Node::Mapping(self.clone()), text);
        Self {
            comment,
            ..self.clone()
        }
    }

    /// A new mapping with `key` bound to `value`. An existing key keeps its
    /// position.
    pub fn with_entry(&self, key: impl Into<Node>, value: impl Into<Node>) -> Mapping {
        let mut entries = (*self.entries).clone();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(entries),
            style: self.style,
            comment: self.comment.clone(),
        }
    }

    /// The same mapping with no entries: every lookup is absent while the
    /// comment is kept.
    pub fn emptied(&self) -> Mapping {
        Self {
            entries: Arc::default(),
            style: self.style,
            comment: self.comment.clone(),
        }
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || *self.entries == *other.entries
    }
}

impl Eq for Mapping {}

impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry hashes are summed so that the result does not depend on order.
        let combined = self.entries.iter().fold(0u64, |acc, (key, value)| {
            let mut hasher = DefaultHasher::new();
            key.hash(&mut hasher);
            value.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.entries.len());
        state.write_u64(combined);
    }
}

/// A sequence of nodes.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    elements: Arc<Vec<Node>>,
    style: CollectionStyle,
    comment: Comment,
}

impl Sequence {
    /// The empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_elements(elements: Vec<Node>, style: CollectionStyle) -> Self {
        Self {
            elements: Arc::new(elements),
            style,
            comment: Comment::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.elements.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.elements.get(index)
    }

    pub fn style(&self) -> CollectionStyle {
        self.style
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn with_comment(&self, text: impl Into<String>) -> Sequence {
        let comment = Comment::built(&Node::Sequence(self.clone()), text);
        Self {
            comment,
            ..self.clone()
        }
    }

    /// A new sequence with `value` appended.
    pub fn with_element(&self, value: impl Into<Node>) -> Sequence {
        let mut elements = (*self.elements).clone();
        elements.push(value.into());
        Self {
            elements: Arc::new(elements),
            style: self.style,
            comment: self.comment.clone(),
        }
    }

    /// The same sequence with no elements and the same comment.
    pub fn emptied(&self) -> Sequence {
        Self {
            elements: Arc::default(),
            style: self.style,
            comment: self.comment.clone(),
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Sequence {}

impl Hash for Sequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

/// The top-level documents of a YAML text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stream {
    documents: Arc<Vec<Node>>,
}

impl Stream {
    pub fn new(documents: Vec<Node>) -> Self {
        Self {
            documents: Arc::new(documents),
        }
    }

    pub fn documents(&self) -> impl Iterator<Item = &Node> {
        self.documents.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// A new stream with `document` appended.
    pub fn with_document(&self, document: impl Into<Node>) -> Stream {
        let mut documents = (*self.documents).clone();
        documents.push(document.into());
        Self::new(documents)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Mapping, Node, Scalar, Sequence, Stream};
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    impl Serialize for Node {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Node::Scalar(s) => s.serialize(serializer),
                Node::Mapping(m) => m.serialize(serializer),
                Node::Sequence(s) => s.serialize(serializer),
                Node::Stream(s) => s.serialize(serializer),
            }
        }
    }

    impl Serialize for Scalar {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.value())
        }
    }

    impl Serialize for Mapping {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    impl Serialize for Sequence {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }

    impl Serialize for Stream {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for document in self.documents() {
                seq.serialize_element(document)?;
            }
            seq.end()
        }
    }
}

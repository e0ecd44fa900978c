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

//! Comments attached to nodes.
//!
//! A comment refers to the node it documents through a [`NodeId`], the
//! node's structural fingerprint. The fingerprint ignores comments and
//! presentation, so a comment never keeps a tree alive and never forms a
//! cycle with it. An absent comment is an empty one, so every node exposes
//! `comment()` unconditionally.

use crate::node::Node;

/// Structural fingerprint of a node.
pub type NodeId = u64;

/// Text documenting a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    value: String,
    owner: Option<NodeId>,
    line: Option<usize>,
}

/// The comment of nodes that have none.
pub(crate) static NO_COMMENT: Comment = Comment::EMPTY;

impl Comment {
    /// The empty comment.
    pub const EMPTY: Comment = Comment {
        value: String::new(),
        owner: None,
        line: None,
    };

    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// A comment supplied by a caller, stored verbatim and owned by `node`.
    pub fn built(node: &Node, text: impl Into<String>) -> Self {
        Self {
            value: text.into(),
            owner: Some(node.id()),
            line: None,
        }
    }

    /// A comment found in a document at the given 0-based line.
    pub(crate) fn read(owner: NodeId, text: impl Into<String>, line: usize) -> Self {
        Self {
            value: text.into(),
            owner: Some(owner),
            line: Some(line),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    /// 0-based line the comment was read from, when it was read.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn refers_to(&self, node: &Node) -> bool {
        self.owner == Some(node.id())
    }

    /// The same text, owned by another node.
    pub fn reowned(&self, owner: &Node) -> Self {
        Self {
            value: self.value.clone(),
            owner: Some(owner.id()),
            line: self.line,
        }
    }

    /// The comment collapsed onto one line: line breaks become single spaces
    /// and the result is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamltree_core::{Comment, Node};
    ///
    /// let node = Node::from("x");
    /// let comment = Comment::built(&node, "first\nsecond\n");
    /// assert_eq!(comment.inline().value(), "first second");
    /// ```
    pub fn inline(&self) -> Self {
        if memchr::memchr2(b'\n', b'\r', self.value.as_bytes()).is_none() {
            return self.clone();
        }
        let value = self
            .value
            .lines()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            value,
            owner: self.owner,
            line: self.line,
        }
    }
}

/// A group of comments, searchable by the node they document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    items: Vec<Comment>,
}

impl Comments {
    pub fn new(items: Vec<Comment>) -> Self {
        Self { items }
    }

    /// The comment documenting `node`, or an empty comment.
    pub fn referring_to(&self, node: &Node) -> Comment {
        let id = node.id();
        self.items
            .iter()
            .find(|comment| comment.owner == Some(id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Comment> for Comments {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

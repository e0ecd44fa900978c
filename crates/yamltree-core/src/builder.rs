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

//! Persistent builders for mappings, sequences and streams.
//!
//! `add` never touches the receiver: it returns a new builder whose pending
//! items share every earlier item with the old one through an `Arc`-linked
//! list, so each call is O(1) and old builders stay usable.
//!
//! # Examples
//!
//! ```
//! use yamltree_core::{MappingBuilder, SequenceBuilder};
//!
//! let base = MappingBuilder::new().add("name", "yamltree");
//! let with_tags = base.add("tags", SequenceBuilder::new().add("yaml").add("tree").build());
//!
//! assert_eq!(base.build().len(), 1);
//! let mapping = with_tags.build_with_comment("project");
//! assert_eq!(mapping.len(), 2);
//! assert_eq!(mapping.comment().value(), "project");
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::node::{CollectionStyle, Mapping, Node, Sequence, Stream};

#[derive(Debug)]
struct Link<T> {
    item: T,
    prev: Option<Arc<Link<T>>>,
}

/// Persistent singly linked list, newest item first.
#[derive(Debug)]
struct Chain<T> {
    head: Option<Arc<Link<T>>>,
    len: usize,
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T: Clone> Chain<T> {
    fn push(&self, item: T) -> Self {
        Self {
            head: Some(Arc::new(Link {
                item,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Items in insertion order.
    fn to_vec(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(link) = cursor {
            items.push(link.item.clone());
            cursor = link.prev.as_deref();
        }
        items.reverse();
        items
    }
}

impl<T> Drop for Chain<T> {
    // Unlink iteratively so that dropping a long chain cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut link) => next = link.prev.take(),
                Err(_) => break,
            }
        }
    }
}

/// Builds a [`Mapping`]. A repeated key replaces the earlier value and keeps
/// the earlier position.
#[derive(Debug, Clone, Default)]
pub struct MappingBuilder {
    entries: Chain<(Node, Node)>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new builder holding the pending entries plus `key: value`.
    #[must_use]
    pub fn add(&self, key: impl Into<Node>, value: impl Into<Node>) -> Self {
        Self {
            entries: self.entries.push((key.into(), value.into())),
        }
    }

    /// Number of pending entries, repeated keys included.
    pub fn len(&self) -> usize {
        self.entries.len
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len == 0
    }

    pub fn build(&self) -> Mapping {
        let mut entries = IndexMap::with_capacity(self.entries.len);
        for (key, value) in self.entries.to_vec() {
            entries.insert(key, value);
        }
        Mapping::from_entries(entries, CollectionStyle::Block)
    }

    /// Build and document the new mapping with `comment`.
    pub fn build_with_comment(&self, comment: impl Into<String>) -> Mapping {
        self.build().with_comment(comment)
    }
}

/// Builds a [`Sequence`].
#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder {
    elements: Chain<Node>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add(&self, value: impl Into<Node>) -> Self {
        Self {
            elements: self.elements.push(value.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len
    }

    pub fn is_empty(&self) -> bool {
        self.elements.len == 0
    }

    pub fn build(&self) -> Sequence {
        Sequence::from_elements(self.elements.to_vec(), CollectionStyle::Block)
    }

    pub fn build_with_comment(&self, comment: impl Into<String>) -> Sequence {
        self.build().with_comment(comment)
    }
}

/// Builds a [`Stream`] of documents.
#[derive(Debug, Clone, Default)]
pub struct StreamBuilder {
    documents: Chain<Node>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add(&self, document: impl Into<Node>) -> Self {
        Self {
            documents: self.documents.push(document.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len
    }

    pub fn is_empty(&self) -> bool {
        self.documents.len == 0
    }

    pub fn build(&self) -> Stream {
        Stream::new(self.documents.to_vec())
    }
}

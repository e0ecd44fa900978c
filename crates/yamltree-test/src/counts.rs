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

//! Fixture counting utilities.
//!
//! Functions for measuring node trees in test assertions.

use yamltree_core::Node;

/// Count every node in a tree, keys included.
pub fn count_nodes(node: &Node) -> usize {
    1 + children(node).map(count_nodes).sum::<usize>()
}

/// Count scalar leaves, keys included.
pub fn count_scalars(node: &Node) -> usize {
    match node {
        Node::Scalar(_) => 1,
        other => children(other).map(count_scalars).sum(),
    }
}

/// Nesting depth of a tree. A scalar has depth 1.
pub fn max_depth(node: &Node) -> usize {
    1 + children(node).map(max_depth).max().unwrap_or(0)
}

/// Count nodes carrying a non-empty comment.
pub fn count_comments(node: &Node) -> usize {
    let own = usize::from(!node.comment().is_empty());
    own + children(node).map(count_comments).sum::<usize>()
}

fn children(node: &Node) -> Box<dyn Iterator<Item = &Node> + '_> {
    match node {
        Node::Scalar(_) => Box::new(std::iter::empty()),
        Node::Mapping(mapping) => Box::new(mapping.iter().flat_map(|(k, v)| [k, v])),
        Node::Sequence(sequence) => Box::new(sequence.values()),
        Node::Stream(stream) => Box::new(stream.documents()),
    }
}

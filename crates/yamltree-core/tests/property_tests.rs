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

//! Property-based tests for the reader and the node model.
//!
//! # Properties Tested
//!
//! 1. **Parse Determinism**: the same text always reads to the same tree
//! 2. **Value Stability**: plain integers and booleans keep their type
//! 3. **Flow Counting**: a flow sequence has one element per separator
//! 4. **Persistence**: deriving a collection never changes its source
//! 5. **Comment Transparency**: comments never affect equality
//! 6. **Order Independence**: mapping equality ignores entry order

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use yamltree_core::{parse, parse_mapping, parse_sequence, MappingBuilder, Node, ParseOptions, YamlErrorKind};

fn hash_of(node: &Node) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: reading the same text twice gives equal trees.
    #[test]
    fn prop_parse_determinism(
        key in "[a-z][a-z0-9_]{0,20}",
        value in "[a-z][a-z0-9 ]{0,20}[a-z0-9]",
    ) {
        prop_assume!(key != "list");
        let text = format!("{}: {}\nlist:\n  - {}\n", key, value, value);
        let first = parse(text.as_bytes());
        let second = parse(text.as_bytes());
        prop_assert!(first.is_ok(), "read failed");
        prop_assert_eq!(first.unwrap(), second.unwrap());
    }

    /// Property: plain integers and booleans read back with their type.
    #[test]
    fn prop_typed_values_stable(key in "[a-z]{1,10}", number in any::<i64>(), flag in any::<bool>()) {
        prop_assume!(key != "flag");
        let text = format!("{}: {}\nflag: {}\n", key, number, flag);
        let map = parse_mapping(text.as_bytes()).unwrap();
        prop_assert_eq!(map.integer(&key), Some(number));
        prop_assert_eq!(map.boolean("flag"), Some(flag));
    }

    /// Property: a flow sequence of n plain words has n elements.
    #[test]
    fn prop_flow_sequence_length(words in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let text = format!("[{}]", words.join(", "));
        let sequence = parse_sequence(text.as_bytes()).unwrap();
        prop_assert_eq!(sequence.len(), words.len());
        for (index, word) in words.iter().enumerate() {
            prop_assert_eq!(sequence.get(index).and_then(Node::as_str), Some(word.as_str()));
        }
    }

    /// Property: with_entry and emptied leave their source untouched.
    #[test]
    fn prop_derivation_is_persistent(
        keys in prop::collection::btree_set("[a-z]{1,6}", 1..10),
        extra in "[A-Z]{1,6}",
    ) {
        let base = keys
            .iter()
            .fold(MappingBuilder::new(), |builder, key| builder.add(key.as_str(), key.len()))
            .build();
        let before = base.clone();
        let grown = base.with_entry(extra.as_str(), "new");
        let emptied = base.emptied();
        prop_assert_eq!(&base, &before);
        prop_assert_eq!(grown.len(), base.len() + 1);
        prop_assert!(emptied.is_empty());
        prop_assert_eq!(base.len(), keys.len());
    }

    /// Property: attaching a comment never changes equality or hash.
    #[test]
    fn prop_comments_are_transparent(value in "[a-z ]{0,12}", comment in "[a-z ]{1,12}") {
        let node: Node = MappingBuilder::new().add("k", value.as_str()).build().into();
        let commented = node.with_comment(comment.as_str());
        prop_assert_eq!(&commented, &node);
        prop_assert_eq!(hash_of(&commented), hash_of(&node));
    }

    /// Property: mappings built in opposite orders are equal with equal hashes.
    #[test]
    fn prop_mapping_order_independent(keys in prop::collection::btree_set("[a-z]{1,6}", 0..10)) {
        let forward = keys
            .iter()
            .fold(MappingBuilder::new(), |builder, key| builder.add(key.as_str(), 1))
            .build();
        let backward = keys
            .iter()
            .rev()
            .fold(MappingBuilder::new(), |builder, key| builder.add(key.as_str(), 1))
            .build();
        let (forward, backward) = (Node::from(forward), Node::from(backward));
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
        prop_assert_eq!(forward, backward);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: nesting beyond the depth limit is rejected as a security error.
    #[test]
    fn prop_depth_limit_enforced(depth in 5_usize..40) {
        let mut text = String::new();
        for level in 0..depth {
            text.push_str(&format!("{}k{}:\n", "  ".repeat(level), level));
        }
        text.push_str(&format!("{}leaf: 1\n", "  ".repeat(depth)));

        let options = ParseOptions::builder().max_depth(depth / 2).build();
        let err = yamltree_core::parse_with_options(text.as_bytes(), options).unwrap_err();
        prop_assert_eq!(err.kind, YamlErrorKind::Security);

        let options = ParseOptions::builder().max_depth(depth + 2).build();
        prop_assert!(yamltree_core::parse_with_options(text.as_bytes(), options).is_ok());
    }
}

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

//! Multi-level document fixtures.

use yamltree_core::{MappingBuilder, Node, Scalar, SequenceBuilder, Stream, StreamBuilder};

/// A service configuration nested three levels deep.
pub fn nested_config() -> Node {
    let database = MappingBuilder::new()
        .add("host", "db.internal")
        .add("port", 5432)
        .add(
            "pool",
            MappingBuilder::new().add("min", 2).add("max", 16).build(),
        )
        .build();
    MappingBuilder::new()
        .add("service", "api")
        .add("database", database)
        .add("features", SequenceBuilder::new().add("auth").add("metrics").build())
        .build()
        .into()
}

/// A sequence of mappings, written as compact items.
pub fn user_list() -> Node {
    let user = |name: &str, role: &str, active: bool| {
        MappingBuilder::new()
            .add("name", name)
            .add("role", role)
            .add("active", active)
            .build()
    };
    MappingBuilder::new()
        .add(
            "users",
            SequenceBuilder::new()
                .add(user("alice", "admin", true))
                .add(user("bob", "editor", true))
                .add(user("carol", "viewer", false))
                .build(),
        )
        .build()
        .into()
}

/// Sequences nested directly in sequences.
pub fn nested_sequences() -> Node {
    SequenceBuilder::new()
        .add(SequenceBuilder::new().add(1).add(2).build())
        .add(SequenceBuilder::new().add(SequenceBuilder::new().add("deep").build()).build())
        .add("scalar")
        .build()
        .into()
}

/// Comments on the document, on collections and on scalars.
pub fn commented() -> Node {
    let servers = SequenceBuilder::new()
        .add(Scalar::new("alpha").with_comment("primary"))
        .add("beta")
        .build_with_comment("server pool");
    MappingBuilder::new()
        .add("name", Scalar::new("cluster").with_comment("display name"))
        .add("servers", servers)
        .add(
            "limits",
            MappingBuilder::new()
                .add("cpu", 4)
                .build_with_comment("resource limits\nper node"),
        )
        .build_with_comment("cluster settings")
        .into()
}

/// Collections used as mapping keys.
pub fn collection_keys() -> Node {
    MappingBuilder::new()
        .add(SequenceBuilder::new().add("a").add("b").build(), "pair")
        .add(MappingBuilder::new().add("y", "r").build(), "map key")
        .add(
            SequenceBuilder::new()
                .add("x, y")
                .add(SequenceBuilder::new().build())
                .build(),
            "nested",
        )
        .add("plain", "value")
        .build()
        .into()
}

/// Empty collections at every level.
pub fn empty_collections() -> Node {
    MappingBuilder::new()
        .add("empty_map", MappingBuilder::new().build())
        .add("empty_list", SequenceBuilder::new().build())
        .add(
            "list_of_empties",
            SequenceBuilder::new()
                .add(MappingBuilder::new().build())
                .add(SequenceBuilder::new().build())
                .build(),
        )
        .build()
        .into()
}

/// The empty document.
pub fn empty() -> Node {
    MappingBuilder::new().build().into()
}

/// A stream of three documents of different kinds.
pub fn stream() -> Stream {
    StreamBuilder::new()
        .add(MappingBuilder::new().add("first", 1).build())
        .add(SequenceBuilder::new().add("second").build_with_comment("list document"))
        .add(Scalar::new("third"))
        .build()
}

/// Everything together.
pub fn comprehensive() -> Node {
    MappingBuilder::new()
        .add("config", nested_config())
        .add("users", user_list())
        .add("matrix", nested_sequences())
        .add("commented", commented())
        .add("keys", collection_keys())
        .add("empties", empty_collections())
        .add("blocks", crate::fixtures::block_scalars())
        .add("strings", crate::fixtures::special_strings())
        .build()
        .into()
}

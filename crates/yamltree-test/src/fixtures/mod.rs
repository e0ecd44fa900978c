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

//! Canonical test fixtures covering the node model.
//!
//! - **values**: scalars, strings needing quotes, block scalars
//! - **documents**: nested collections, comments, collection keys, streams
//! - **texts**: valid YAML texts exercising the reader's surface forms
//! - **errors**: inputs the reader rejects

mod documents;
pub mod errors;
pub mod texts;
mod values;

pub use documents::*;
pub use values::*;

use crate::FixtureList;

/// Returns all single-document fixture functions for iteration.
///
/// Every fixture here survives canonical writing and reading back.
pub fn all() -> FixtureList {
    vec![
        ("scalars", scalars),
        ("special_strings", special_strings),
        ("block_scalars", block_scalars),
        ("nested_config", nested_config),
        ("user_list", user_list),
        ("nested_sequences", nested_sequences),
        ("commented", commented),
        ("collection_keys", collection_keys),
        ("empty_collections", empty_collections),
        ("comprehensive", comprehensive),
        ("empty", empty),
    ]
}

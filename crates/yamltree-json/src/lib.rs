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

//! Yamltree JSON Conversion
//!
//! Provides bidirectional conversion between yamltree node trees and JSON.
//!
//! # Type Mapping
//!
//! | JSON | Node |
//! |---|---|
//! | object | mapping, keys in document order |
//! | array | sequence |
//! | `null` | the null scalar |
//! | boolean, number | plain scalar |
//! | string | plain scalar, double-quoted when it would read as another type |
//!
//! In the other direction only plain scalars are typed, so a string survives
//! JSON → YAML → JSON unchanged even when it looks like a number.
//!
//! # Examples
//!
//! ```rust
//! use yamltree_json::{json_to_node, node_to_json};
//!
//! let json = r#"{"name":"Alice","age":30,"id":"30"}"#;
//! let node = json_to_node(json).unwrap();
//! assert_eq!(node_to_json(&node).unwrap(), json);
//! ```
//!
//! # Security
//!
//! [`FromJsonConfig`] bounds nesting depth, array size, string length and
//! object size.

mod from_json;
mod to_json;

pub use from_json::{
    from_json_str, from_json_value, FromJsonConfig, FromJsonConfigBuilder, JsonConversionError,
    DEFAULT_MAX_ARRAY_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OBJECT_SIZE, DEFAULT_MAX_STRING_LENGTH,
};
pub use to_json::{to_json_string, to_json_value, ToJsonConfig};

use yamltree_core::{Node, Scalar};

/// Convert a node tree to a compact JSON string
pub fn node_to_json(node: &Node) -> Result<String, JsonConversionError> {
    to_json_string(node, &ToJsonConfig::default())
}

/// Convert a JSON string to a node tree with default limits
pub fn json_to_node(json: &str) -> Result<Node, JsonConversionError> {
    from_json_str(json, &FromJsonConfig::default())
}

/// Whether a plain scalar reads as null, a boolean or a number.
pub(crate) fn reads_as_typed(scalar: &Scalar) -> bool {
    scalar.is_null()
        || scalar.as_bool().is_some()
        || scalar.as_i64().is_some()
        || scalar.value().trim().parse::<u64>().is_ok()
        || scalar.as_f64().is_some()
}

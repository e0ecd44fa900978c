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

//! JSON to node tree conversion

use serde_json::Value as JsonValue;
use yamltree_core::{Mapping, MappingBuilder, Node, Scalar, Sequence, SequenceBuilder};

/// Default maximum recursion depth for JSON conversion
///
/// Set to 10,000 levels. serde_json already stops at 128 levels when
/// parsing text, so the limit matters for values built in code.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Default maximum array size for JSON conversion
pub const DEFAULT_MAX_ARRAY_SIZE: usize = 10_000_000;

/// Default maximum string length for JSON conversion (100 MB)
pub const DEFAULT_MAX_STRING_LENGTH: usize = 100 * 1024 * 1024;

/// Default maximum object size (number of keys)
///
/// Matches the default key limit of the YAML reader.
pub const DEFAULT_MAX_OBJECT_SIZE: usize = 100_000;

/// Errors that can occur during JSON conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonConversionError {
    /// JSON parsing or serialization failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// JSON object keys are strings; a collection key has no JSON form
    #[error("Mapping key must be a scalar, found {0}")]
    CollectionKey(String),

    /// A stream nested inside a document
    #[error("A stream cannot be nested inside a document")]
    NestedStream,

    /// Maximum recursion depth exceeded
    #[error("Maximum recursion depth ({0}) exceeded - possible deeply nested structure")]
    MaxDepthExceeded(usize),

    /// Maximum array size exceeded
    #[error("Maximum array size ({0}) exceeded - array has {1} elements")]
    MaxArraySizeExceeded(usize, usize),

    /// Maximum string length exceeded
    #[error("Maximum string length ({0}) exceeded - string has {1} characters")]
    MaxStringLengthExceeded(usize, usize),

    /// Maximum object size exceeded
    #[error("Maximum object size ({0}) exceeded - object has {1} keys")]
    MaxObjectSizeExceeded(usize, usize),
}

impl From<serde_json::Error> for JsonConversionError {
    fn from(err: serde_json::Error) -> Self {
        JsonConversionError::ParseError(err.to_string())
    }
}

impl From<JsonConversionError> for yamltree_core::YamlError {
    fn from(err: JsonConversionError) -> Self {
        yamltree_core::YamlError::conversion(err.to_string())
    }
}

/// Configuration for JSON import
///
/// Limits guard against denial-of-service from hostile input. Each limit
/// is `None` when disabled.
///
/// # Examples
///
/// ```
/// use yamltree_json::FromJsonConfig;
///
/// let config = FromJsonConfig::default();
/// assert_eq!(config.max_depth, Some(10_000));
///
/// let strict = FromJsonConfig::builder()
///     .max_depth(100)
///     .max_array_size(1_000)
///     .build();
/// assert_eq!(strict.max_array_size, Some(1_000));
///
/// let unlimited = FromJsonConfig::builder().unlimited().build();
/// assert_eq!(unlimited.max_object_size, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// Maximum recursion depth (default: 10,000)
    pub max_depth: Option<usize>,

    /// Maximum array size (default: 10,000,000)
    pub max_array_size: Option<usize>,

    /// Maximum string length in bytes (default: 100 MB)
    pub max_string_length: Option<usize>,

    /// Maximum object size (default: 100,000)
    pub max_object_size: Option<usize>,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_array_size: Some(DEFAULT_MAX_ARRAY_SIZE),
            max_string_length: Some(DEFAULT_MAX_STRING_LENGTH),
            max_object_size: Some(DEFAULT_MAX_OBJECT_SIZE),
        }
    }
}

impl FromJsonConfig {
    /// Create a new builder for configuring JSON import
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for `FromJsonConfig`
#[derive(Debug, Clone)]
pub struct FromJsonConfigBuilder {
    max_depth: Option<usize>,
    max_array_size: Option<usize>,
    max_string_length: Option<usize>,
    max_object_size: Option<usize>,
}

impl Default for FromJsonConfigBuilder {
    fn default() -> Self {
        let defaults = FromJsonConfig::default();
        Self {
            max_depth: defaults.max_depth,
            max_array_size: defaults.max_array_size,
            max_string_length: defaults.max_string_length,
            max_object_size: defaults.max_object_size,
        }
    }
}

impl FromJsonConfigBuilder {
    /// Set the maximum recursion depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Set the maximum array size
    pub fn max_array_size(mut self, limit: usize) -> Self {
        self.max_array_size = Some(limit);
        self
    }

    /// Set the maximum string length
    pub fn max_string_length(mut self, limit: usize) -> Self {
        self.max_string_length = Some(limit);
        self
    }

    /// Set the maximum object size
    pub fn max_object_size(mut self, limit: usize) -> Self {
        self.max_object_size = Some(limit);
        self
    }

    /// Disable every limit (use only with trusted input)
    pub fn unlimited(mut self) -> Self {
        self.max_depth = None;
        self.max_array_size = None;
        self.max_string_length = None;
        self.max_object_size = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FromJsonConfig {
        FromJsonConfig {
            max_depth: self.max_depth,
            max_array_size: self.max_array_size,
            max_string_length: self.max_string_length,
            max_object_size: self.max_object_size,
        }
    }
}

/// Convert a JSON string to a node tree
///
/// # Examples
///
/// ```
/// use yamltree_json::{from_json_str, FromJsonConfig};
///
/// let node = from_json_str(r#"{"port": 80, "id": "80"}"#, &FromJsonConfig::default()).unwrap();
/// let map = node.as_mapping().unwrap();
/// assert_eq!(map.integer("port"), Some(80));
/// assert!(map.get("id").and_then(|n| n.as_scalar()).unwrap().style().is_quoted());
/// ```
pub fn from_json_str(json: &str, config: &FromJsonConfig) -> Result<Node, JsonConversionError> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(&value, config)
}

/// Convert a parsed JSON value to a node tree
///
/// Objects become mappings in key order, arrays become sequences, `null`
/// becomes the null scalar and booleans and numbers become plain scalars.
/// Strings become plain scalars unless they would read back as null, a
/// boolean or a number, in which case they are double-quoted.
pub fn from_json_value(value: &JsonValue, config: &FromJsonConfig) -> Result<Node, JsonConversionError> {
    json_to_node(value, config, 0)
}

fn json_to_node(value: &JsonValue, config: &FromJsonConfig, depth: usize) -> Result<Node, JsonConversionError> {
    if let Some(max) = config.max_depth {
        if depth > max {
            return Err(JsonConversionError::MaxDepthExceeded(max));
        }
    }
    match value {
        JsonValue::Null => Ok(Scalar::null().into()),
        JsonValue::Bool(b) => Ok(Node::from(*b)),
        JsonValue::Number(n) => Ok(Scalar::new(n.to_string()).into()),
        JsonValue::String(s) => {
            check_string(s, config)?;
            Ok(string_scalar(s).into())
        }
        JsonValue::Array(items) => json_array_to_sequence(items, config, depth).map(Node::from),
        JsonValue::Object(map) => json_object_to_mapping(map, config, depth).map(Node::from),
    }
}

fn json_array_to_sequence(
    items: &[JsonValue],
    config: &FromJsonConfig,
    depth: usize,
) -> Result<Sequence, JsonConversionError> {
    if let Some(max) = config.max_array_size {
        if items.len() > max {
            return Err(JsonConversionError::MaxArraySizeExceeded(max, items.len()));
        }
    }
    let mut builder = SequenceBuilder::new();
    for item in items {
        builder = builder.add(json_to_node(item, config, depth + 1)?);
    }
    Ok(builder.build())
}

fn json_object_to_mapping(
    map: &serde_json::Map<String, JsonValue>,
    config: &FromJsonConfig,
    depth: usize,
) -> Result<Mapping, JsonConversionError> {
    if let Some(max) = config.max_object_size {
        if map.len() > max {
            return Err(JsonConversionError::MaxObjectSizeExceeded(max, map.len()));
        }
    }
    let mut builder = MappingBuilder::new();
    for (key, value) in map {
        check_string(key, config)?;
        builder = builder.add(string_scalar(key), json_to_node(value, config, depth + 1)?);
    }
    Ok(builder.build())
}

fn check_string(s: &str, config: &FromJsonConfig) -> Result<(), JsonConversionError> {
    match config.max_string_length {
        Some(max) if s.len() > max => Err(JsonConversionError::MaxStringLengthExceeded(max, s.len())),
        _ => Ok(()),
    }
}

/// A JSON string as a scalar that reads back as a string.
fn string_scalar(s: &str) -> Scalar {
    let plain = Scalar::new(s);
    if crate::reads_as_typed(&plain) {
        Scalar::double_quoted(s)
    } else {
        plain
    }
}

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

//! Node tree to JSON conversion

use serde_json::{Map, Number, Value as JsonValue};
use yamltree_core::{Mapping, Node, Scalar, ScalarStyle, Sequence};

use crate::from_json::JsonConversionError;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct ToJsonConfig {
    /// Indent the output over several lines
    pub pretty: bool,
}

impl ToJsonConfig {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Convert a node tree to a JSON string
///
/// # Examples
///
/// ```
/// use yamltree_core::parse;
/// use yamltree_json::{to_json_string, ToJsonConfig};
///
/// let node = parse(b"port: 80\nid: \"80\"\n").unwrap();
/// let json = to_json_string(&node, &ToJsonConfig::default()).unwrap();
/// assert_eq!(json, r#"{"port":80,"id":"80"}"#);
/// ```
pub fn to_json_string(node: &Node, config: &ToJsonConfig) -> Result<String, JsonConversionError> {
    let value = to_json_value(node)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Convert a node tree to a `serde_json::Value`
///
/// Only plain scalars are typed: they become `null`, booleans or numbers
/// when they read as one. Quoted and block scalars are always strings. A
/// stream becomes an array of its documents.
pub fn to_json_value(node: &Node) -> Result<JsonValue, JsonConversionError> {
    match node {
        Node::Stream(stream) => stream
            .documents()
            .map(document_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        document => document_to_json(document),
    }
}

fn document_to_json(node: &Node) -> Result<JsonValue, JsonConversionError> {
    match node {
        Node::Scalar(scalar) => Ok(scalar_to_json(scalar)),
        Node::Mapping(mapping) => mapping_to_json(mapping),
        Node::Sequence(sequence) => sequence_to_json(sequence),
        Node::Stream(_) => Err(JsonConversionError::NestedStream),
    }
}

fn mapping_to_json(mapping: &Mapping) -> Result<JsonValue, JsonConversionError> {
    let mut map = Map::with_capacity(mapping.len());
    for (key, value) in mapping.iter() {
        let key = match key {
            Node::Scalar(scalar) => scalar.value().to_string(),
            other => return Err(JsonConversionError::CollectionKey(other.kind().to_string())),
        };
        map.insert(key, document_to_json(value)?);
    }
    Ok(JsonValue::Object(map))
}

fn sequence_to_json(sequence: &Sequence) -> Result<JsonValue, JsonConversionError> {
    let mut items = Vec::with_capacity(sequence.len());
    for value in sequence.values() {
        items.push(document_to_json(value)?);
    }
    Ok(JsonValue::Array(items))
}

fn scalar_to_json(scalar: &Scalar) -> JsonValue {
    if scalar.style() != ScalarStyle::Plain {
        return JsonValue::String(scalar.value().to_string());
    }
    if scalar.is_null() {
        return JsonValue::Null;
    }
    if let Some(b) = scalar.as_bool() {
        return JsonValue::Bool(b);
    }
    if let Some(i) = scalar.as_i64() {
        return JsonValue::Number(Number::from(i));
    }
    if let Ok(u) = scalar.value().trim().parse::<u64>() {
        return JsonValue::Number(Number::from(u));
    }
    // Non-finite floats have no JSON number form and stay strings.
    match scalar.as_f64().and_then(Number::from_f64) {
        Some(n) => JsonValue::Number(n),
        None => JsonValue::String(scalar.value().to_string()),
    }
}

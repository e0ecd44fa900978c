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

//! YAML text fixtures.
//!
//! Every text here reads without error. They exercise the reader's surface
//! forms rather than the tree shapes, which the document fixtures cover.

/// Valid YAML texts as (name, text) pairs.
pub fn valid_yaml_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("config", CONFIG),
        ("anchors", ANCHORS),
        ("tags", "a: !!str 12\nb: !custom\n  c: 1\n"),
        ("flow_mapping", FLOW_MAPPING),
        ("multiline_flow", "list: [one,\n  two, 'three,\n  four']\nafter: x\n"),
        ("block_scalars", BLOCK_SCALARS),
        ("explicit_keys", "? [c, g]\n: d\n? lonely\n"),
        ("compact_items", "- name: a\n  port: 1\n- - x\n  - y\n- c\n"),
        ("comments", COMMENTS),
        ("quoted", "single: 'it''s'\ndouble: \"tab\\there\"\n"),
        ("stream", STREAM),
        ("empty", ""),
    ]
}

const CONFIG: &str = "\
# Service configuration

service:
  name: \"api gateway\"
  replicas: 3
  enabled: true
  endpoints:
    - path: /health
      method: GET
    - path: /users
      method: [GET, POST]
";

const ANCHORS: &str = "\
base: &b
  x: 1
copy: *b
name: &n text
again: *n
";

const FLOW_MAPPING: &str =
    r#"{['a']: 'b', [c,g]: d, e: f, {y:r}: {h: i}, k: 4,o: [a,'0,3',"2,3,4",{ii:"5,6,7"},b,c], t:"0,3"}"#;

const BLOCK_SCALARS: &str = "\
lit: |
  a
  b
fold: >
  a
  b

  c
keep: |+
  x
strip: >-
  y
code: |2
    indented
  flush
";

const COMMENTS: &str = "\
# database settings
db:
  host: localhost # local only
list: # the list
  - x
port: 5432
";

const STREAM: &str = "\
---
a: 1
---
- second document
";

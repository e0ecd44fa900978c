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

//! Error fixtures.
//!
//! Inputs the reader must reject, with the kind of error each produces and
//! the 1-based line it names.

use yamltree_core::YamlErrorKind;

/// An input the reader rejects.
#[derive(Debug, Clone)]
pub struct InvalidSample {
    pub name: &'static str,
    pub input: &'static [u8],
    pub kind: YamlErrorKind,
    pub line: usize,
}

const fn sample(
    name: &'static str,
    input: &'static [u8],
    kind: YamlErrorKind,
    line: usize,
) -> InvalidSample {
    InvalidSample {
        name,
        input,
        kind,
        line,
    }
}

/// Invalid YAML inputs for reader error testing.
pub fn invalid_yaml_samples() -> Vec<InvalidSample> {
    use YamlErrorKind::*;
    vec![
        sample("unterminated_flow", b"a: 1\nb: {x: 1,\n  y: 2\n", MalformedStructure, 2),
        sample("unbalanced_quote", b"a: 'open\n", MalformedStructure, 1),
        sample("bad_indentation", b"  a: 1\nb: 2", MalformedStructure, 1),
        sample("duplicate_key", b"a: 1\nb: 2\na: 3", MalformedStructure, 3),
        sample("item_in_mapping", b"a: 1\n- b", MalformedStructure, 2),
        sample("unclassifiable_line", b"a: 1\njust words", MalformedStructure, 2),
        sample("unknown_alias", b"a: *missing", MalformedStructure, 1),
        sample("invalid_indicator", b"a: |x\n  text", InvalidBlockScalarIndicator, 1),
        sample("repeated_chomping", b"a: |++\n  x\n", InvalidBlockScalarIndicator, 1),
        sample("control_character", b"a: 1\nb: \x07\n", Encoding, 2),
        sample("bare_cr", b"line1\rline2\n", Encoding, 1),
    ]
}

/// Inputs that are not UTF-8. The error names no particular line.
pub fn invalid_encoding_samples() -> Vec<(&'static str, &'static [u8])> {
    vec![
        ("invalid_utf8", b"a: \xFF\xFE"),
        ("truncated_sequence", b"key: \xE2\x82"),
    ]
}

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

//! Scalar-focused fixtures.

use yamltree_core::{
    BlockIndicator, Chomping, MappingBuilder, Node, Scalar, ScalarStyle, SequenceBuilder,
};

/// Plain scalars of every shape the typed getters understand.
pub fn scalars() -> Node {
    MappingBuilder::new()
        .add("null_val", Scalar::null())
        .add("bool_true", true)
        .add("bool_false", false)
        .add("int_positive", 42)
        .add("int_negative", -17)
        .add("float_positive", 3.25)
        .add("string_simple", "hello world")
        .add("url", "http://example.org/path?q=1")
        .add("time", "12:30")
        .build()
        .into()
}

/// Strings that only read back unchanged when quoted or written as blocks.
pub fn special_strings() -> Node {
    MappingBuilder::new()
        .add("empty", "")
        .add("padded", "  padded  ")
        .add("separator", "key: value")
        .add("dash", "- not an item")
        .add("hash", "# not a comment")
        .add("inline_hash", "text # tail")
        .add("anchor", "&anchor")
        .add("alias", "*alias")
        .add("brackets", "[not, a, list]")
        .add("braces", "{not: a map}")
        .add("double_quotes", "say \"hi\"")
        .add("apostrophe", "don't stop")
        .add("quoted_start", "'leading quote")
        .add("tab", "a\tb")
        .add("backslash", "C:\\path\\file")
        .add("marker", "---")
        .add("quoted_null", Scalar::double_quoted("null"))
        .add("quoted_number", Scalar::double_quoted("42"))
        .add("single_quoted_bool", Scalar::single_quoted("true"))
        .add("unicode", "naïve café 日本")
        .add("key: with separator", "value")
        .build()
        .into()
}

/// Literal and folded block scalars with each chomping mode.
pub fn block_scalars() -> Node {
    MappingBuilder::new()
        .add("literal", Scalar::literal(["line one", "line two"]))
        .add("folded", Scalar::folded(["line1", "line2", "line3"]))
        .add("folded_paragraphs", Scalar::folded(["first", "paragraph", "", "second"]))
        .add(
            "kept",
            Scalar::block(
                BlockIndicator::literal().with_chomping(Chomping::Keep),
                vec!["trailing newline".to_string()],
            ),
        )
        .add(
            "stripped",
            Scalar::block(
                BlockIndicator::folded().with_chomping(Chomping::Strip),
                vec!["no newline".to_string()],
            ),
        )
        .add("indented", Scalar::literal(["  deeper first", "base"]))
        .add("commented_content", Scalar::literal(["echo hi", "# inside", "done"]))
        .add("multiline_plain", "first\nsecond")
        .add("multiline_folded", Scalar::styled("first\nsecond", ScalarStyle::Folded))
        .add("script", SequenceBuilder::new().add(Scalar::literal(["set -e", "make"])).build())
        .build()
        .into()
}

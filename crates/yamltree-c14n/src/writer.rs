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

//! Canonical YAML writer.
//!
//! Mappings and sequences are always written in block style, except empty
//! collections and collection keys, which are written in flow style. Scalars
//! read as block scalars keep their block form; other multi-line scalars
//! become literal blocks when the block reads back to the same value, and
//! double-quoted scalars otherwise.

use std::fmt::Write;

use crate::config::{CanonicalConfig, QuotingStrategy};
use yamltree_core::{
    fold, BlockIndicator, Chomping, Comment, Mapping, Node, Scalar, ScalarStyle, Sequence, Stream,
    YamlError, YamlResult,
};

// ==================== Buffer Capacity Constants ====================

/// Initial buffer capacity for output string.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 4096;

// ==================== Nesting Depth Constants ====================

/// Maximum nesting depth for recursive structures.
///
/// Builders can produce trees deeper than any reader limit; the writer
/// stops at this depth instead of exhausting the stack.
const MAX_NESTING_DEPTH: usize = 1000;

// ==================== Indentation Constants ====================

/// Smallest indentation step: a sequence item needs room for `- `.
const MIN_INDENT: usize = 2;

/// Largest indentation step: block scalars state it as one digit.
const MAX_INDENT: usize = 9;

/// Base indentation level for document content.
const ROOT_INDENT_LEVEL: usize = 0;

// ==================== Document Marker Constants ====================

const DOCUMENT_START: &str = "---";
const DOCUMENT_END: &str = "...";

// ==================== Error Reporting Constants ====================

/// Line number used for errors without a source location.
const ERROR_LINE_UNKNOWN: usize = 0;

/// Writer for canonical YAML output.
///
/// A writer can be reused: every `write_*` call returns the text produced
/// since the previous one.
pub struct CanonicalWriter {
    config: CanonicalConfig,
    output: String,
    depth: usize,
}

impl CanonicalWriter {
    /// Creates a new canonical writer with the given configuration.
    pub fn new(config: CanonicalConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
            depth: 0,
        }
    }

    /// Writes one node as a document.
    ///
    /// A collection is written as its body, preceded by its comment lines
    /// and `---` when it has a comment. A scalar is framed by `---` and
    /// `...`. A stream writes each of its documents.
    pub fn write_node(&mut self, node: &Node) -> YamlResult<String> {
        self.depth = 0;
        match node {
            Node::Stream(stream) => return self.write_stream(stream),
            Node::Scalar(scalar) => {
                self.line(ROOT_INDENT_LEVEL, DOCUMENT_START)?;
                self.write_scalar(ROOT_INDENT_LEVEL, "", scalar)?;
                self.line(ROOT_INDENT_LEVEL, DOCUMENT_END)?;
            }
            collection => {
                if self.has_comment(collection) {
                    self.write_comment_lines(ROOT_INDENT_LEVEL, collection.comment())?;
                    self.line(ROOT_INDENT_LEVEL, DOCUMENT_START)?;
                }
                self.write_body(collection, ROOT_INDENT_LEVEL)?;
            }
        }
        Ok(self.finish())
    }

    /// Writes every document of a stream, each opened by `---`. Comments of
    /// collection documents are written above their marker.
    pub fn write_stream(&mut self, stream: &Stream) -> YamlResult<String> {
        self.depth = 0;
        for document in stream.documents() {
            match document {
                Node::Stream(_) => return Err(nested_stream()),
                Node::Scalar(scalar) => {
                    self.line(ROOT_INDENT_LEVEL, DOCUMENT_START)?;
                    self.write_scalar(ROOT_INDENT_LEVEL, "", scalar)?;
                }
                collection => {
                    if self.has_comment(collection) {
                        self.write_comment_lines(ROOT_INDENT_LEVEL, collection.comment())?;
                    }
                    self.line(ROOT_INDENT_LEVEL, DOCUMENT_START)?;
                    self.write_body(collection, ROOT_INDENT_LEVEL)?;
                }
            }
        }
        Ok(self.finish())
    }

    /// Take the output without its final line break.
    fn finish(&mut self) -> String {
        let mut output = std::mem::take(&mut self.output);
        let kept = output.trim_end_matches('\n').len();
        output.truncate(kept);
        output
    }

    #[inline]
    fn step(&self) -> usize {
        self.config.indent.clamp(MIN_INDENT, MAX_INDENT)
    }

    fn enter(&mut self) -> YamlResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(YamlError::security(
                format!("maximum nesting depth of {} exceeded", MAX_NESTING_DEPTH),
                ERROR_LINE_UNKNOWN,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn line(&mut self, indent: usize, text: &str) -> YamlResult<()> {
        writeln!(self.output, "{:indent$}{}", "", text, indent = indent).map_err(write_error)
    }

    // ==================== Block Collections ====================

    fn write_body(&mut self, node: &Node, indent: usize) -> YamlResult<()> {
        self.enter()?;
        let result = match node {
            Node::Mapping(mapping) if mapping.is_empty() => self.line(indent, "{}"),
            Node::Sequence(sequence) if sequence.is_empty() => self.line(indent, "[]"),
            Node::Mapping(mapping) => self.write_mapping(mapping, indent),
            Node::Sequence(sequence) => self.write_sequence(sequence, indent),
            Node::Scalar(scalar) => self.write_scalar(indent, "", scalar),
            Node::Stream(_) => Err(nested_stream()),
        };
        self.leave();
        result
    }

    fn write_mapping(&mut self, mapping: &Mapping, indent: usize) -> YamlResult<()> {
        for (key, value) in mapping.iter() {
            let key_text = self.format_key(key)?;
            match value {
                Node::Scalar(scalar) => {
                    self.write_scalar(indent, &format!("{}:", key_text), scalar)?;
                }
                Node::Stream(_) => return Err(nested_stream()),
                collection => {
                    if self.has_comment(collection) {
                        self.write_comment_lines(indent, collection.comment())?;
                    }
                    match empty_flow(collection) {
                        Some(empty) => self.line(indent, &format!("{}: {}", key_text, empty))?,
                        None => {
                            self.line(indent, &format!("{}:", key_text))?;
                            self.write_body(collection, indent + self.step())?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn write_sequence(&mut self, sequence: &Sequence, indent: usize) -> YamlResult<()> {
        let step = self.step();
        for item in sequence.values() {
            match item {
                Node::Scalar(scalar) => self.write_scalar(indent, "-", scalar)?,
                Node::Stream(_) => return Err(nested_stream()),
                collection => {
                    if self.has_comment(collection) {
                        self.write_comment_lines(indent, collection.comment())?;
                    }
                    if let Some(empty) = empty_flow(collection) {
                        self.line(indent, &format!("- {}", empty))?;
                        continue;
                    }
                    let start = self.output.len();
                    self.write_body(collection, indent + step)?;
                    if self.output[start..].trim_start().starts_with('#') {
                        // A comment cannot share the item line.
                        self.output.insert_str(start, &format!("{:indent$}-\n", "", indent = indent));
                    } else {
                        let prefix = format!("{:indent$}-{:pad$}", "", "", indent = indent, pad = step - 1);
                        self.output.replace_range(start..start + indent + step, &prefix);
                    }
                }
            }
        }
        Ok(())
    }

    // ==================== Comments ====================

    fn has_comment(&self, node: &Node) -> bool {
        self.config.include_comments && !node.comment().is_empty()
    }

    fn write_comment_lines(&mut self, indent: usize, comment: &Comment) -> YamlResult<()> {
        for text in comment.value().lines() {
            let text = text.trim();
            if text.is_empty() {
                self.line(indent, "#")?;
            } else {
                self.line(indent, &format!("# {}", text))?;
            }
        }
        Ok(())
    }

    /// ` # text` for a scalar's comment, or nothing.
    fn trailing_comment(&self, comment: &Comment) -> String {
        if !self.config.include_comments {
            return String::new();
        }
        let inline = comment.inline();
        let text = inline.value().trim();
        if text.is_empty() {
            String::new()
        } else {
            format!(" # {}", text)
        }
    }

    // ==================== Scalars ====================

    /// Write `head` (`key:`, `-` or nothing) followed by a scalar.
    fn write_scalar(&mut self, indent: usize, head: &str, scalar: &Scalar) -> YamlResult<()> {
        let comment = self.trailing_comment(scalar.comment());
        match self.block_form(scalar) {
            Some((indicator, lines)) => {
                self.line(indent, &join_head(head, &format!("{}{}", indicator, comment)))?;
                let content = indent + self.step();
                for text in lines {
                    if text.is_empty() {
                        writeln!(self.output).map_err(write_error)?;
                    } else {
                        self.line(content, text)?;
                    }
                }
                Ok(())
            }
            None => {
                let text = self.format_scalar(scalar, false);
                self.line(indent, &format!("{}{}", join_head(head, &text), comment))
            }
        }
    }

    /// The block scalar header and content lines for a scalar, when a block
    /// reads back to the same value.
    fn block_form<'s>(&self, scalar: &'s Scalar) -> Option<(BlockIndicator, Vec<&'s str>)> {
        let (indicator, mut lines): (BlockIndicator, Vec<&str>) =
            match (scalar.block_indicator(), scalar.block_lines()) {
                (Some(indicator), Some(lines)) => {
                    (indicator, lines.iter().map(String::as_str).collect())
                }
                _ => {
                    let value = scalar.value();
                    if self.config.quoting == QuotingStrategy::Always || !value.contains('\n') {
                        return None;
                    }
                    match value.strip_suffix('\n') {
                        Some(body) => (
                            BlockIndicator::literal().with_chomping(Chomping::Keep),
                            body.split('\n').collect(),
                        ),
                        None => (BlockIndicator::literal(), value.split('\n').collect()),
                    }
                }
            };

        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }
        if !block_lines_survive(&lines) {
            return None;
        }
        let owned: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        if fold(&indicator, &owned) != scalar.value() {
            return None;
        }

        let indentation = lines
            .first()
            .filter(|line| line.starts_with(' '))
            .map(|_| self.step());
        Some((
            BlockIndicator {
                indentation,
                ..indicator
            },
            lines,
        ))
    }

    /// The one-line form of a scalar. In flow context `,` `:` and `#` also
    /// force quotes.
    fn format_scalar(&self, scalar: &Scalar, flow: bool) -> String {
        let value = scalar.value();
        let typed = reads_as_typed(value);
        let unsafe_plain = needs_quoting(value) || (flow && value.contains([',', ':', '#']));

        let quote = if unsafe_plain {
            true
        } else if scalar.style() == ScalarStyle::Plain && typed {
            false
        } else {
            match self.config.quoting {
                QuotingStrategy::Always => true,
                QuotingStrategy::Minimal => typed,
            }
        };

        if !quote {
            return value.to_string();
        }
        if self.config.quoting == QuotingStrategy::Minimal
            && scalar.style() == ScalarStyle::SingleQuoted
            && !value.chars().any(char::is_control)
        {
            return format!("'{}'", value.replace('\'', "''"));
        }
        format!("\"{}\"", escape_double(value))
    }

    fn format_key(&mut self, key: &Node) -> YamlResult<String> {
        match key {
            Node::Scalar(scalar) => Ok(self.format_scalar(scalar, false)),
            Node::Stream(_) => Err(nested_stream()),
            collection => self.format_flow(collection),
        }
    }

    // ==================== Flow Collections ====================

    fn format_flow(&mut self, node: &Node) -> YamlResult<String> {
        self.enter()?;
        let result = match node {
            Node::Scalar(scalar) => Ok(self.format_scalar(scalar, true)),
            Node::Sequence(sequence) => sequence
                .values()
                .map(|item| self.format_flow(item))
                .collect::<YamlResult<Vec<_>>>()
                .map(|items| format!("[{}]", items.join(", "))),
            Node::Mapping(mapping) => mapping
                .iter()
                .map(|(key, value)| {
                    Ok(format!("{}: {}", self.format_flow(key)?, self.format_flow(value)?))
                })
                .collect::<YamlResult<Vec<_>>>()
                .map(|entries| format!("{{{}}}", entries.join(", "))),
            Node::Stream(_) => Err(nested_stream()),
        };
        self.leave();
        result
    }
}

fn join_head(head: &str, text: &str) -> String {
    if head.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", head, text)
    }
}

/// `{}` or `[]` for an empty collection.
fn empty_flow(node: &Node) -> Option<&'static str> {
    match node {
        Node::Mapping(mapping) if mapping.is_empty() => Some("{}"),
        Node::Sequence(sequence) if sequence.is_empty() => Some("[]"),
        _ => None,
    }
}

/// Whether block scalar lines read back unchanged: blank and leading empty
/// lines would be lost, and a final comment-like line would be taken for the
/// comment of the next entry.
fn block_lines_survive(lines: &[&str]) -> bool {
    if lines.first().map_or(false, |first| first.is_empty()) {
        return false;
    }
    if lines
        .last()
        .map_or(false, |last| last.trim_start().starts_with('#'))
    {
        return false;
    }
    lines.iter().all(|line| {
        (line.is_empty() || !line.trim().is_empty())
            && !line.chars().any(|c| c.is_control() && c != '\t')
    })
}

/// Whether a plain scalar with this text would read as null, a boolean or a
/// number.
fn reads_as_typed(value: &str) -> bool {
    let plain = Scalar::new(value);
    plain.is_null() || plain.as_bool().is_some() || plain.as_i64().is_some() || plain.as_f64().is_some()
}

/// Whether plain text would read back as something else in block context.
fn needs_quoting(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };
    if s != s.trim() || s.chars().any(char::is_control) {
        return true;
    }
    if matches!(
        first,
        '[' | ']' | '{' | '}' | ',' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`'
    ) {
        return true;
    }
    if matches!(first, '-' | '?' | ':')
        && s[first.len_utf8()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace)
    {
        return true;
    }
    s.starts_with(DOCUMENT_START)
        || s.starts_with(DOCUMENT_END)
        || s.contains(": ")
        || s.ends_with(':')
        || s.contains(" #")
        || s.contains(['[', ']', '{', '}'])
        || s.contains(" '")
        || s.contains(" \"")
}

/// Escape text for a double-quoted scalar.
fn escape_double(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

fn nested_stream() -> YamlError {
    YamlError::conversion("a stream cannot be nested inside a document")
}

fn write_error(e: std::fmt::Error) -> YamlError {
    YamlError::conversion(format!("write error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yamltree_core::{MappingBuilder, SequenceBuilder};

    fn write(node: impl Into<Node>) -> String {
        CanonicalWriter::new(CanonicalConfig::default())
            .write_node(&node.into())
            .unwrap()
    }

    // ==================== escape_double tests ====================

    #[test]
    fn test_escape_double() {
        assert_eq!(escape_double("hello"), "hello");
        assert_eq!(escape_double("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_double("a\\b"), "a\\\\b");
        assert_eq!(escape_double("line1\nline2\t"), "line1\\nline2\\t");
        assert_eq!(escape_double("\u{1}"), "\\u0001");
        assert_eq!(escape_double(""), "");
    }

    // ==================== needs_quoting tests ====================

    #[test]
    fn test_needs_quoting_plain_text() {
        assert!(!needs_quoting("hello world"));
        assert!(!needs_quoting("http://example.org"));
        assert!(!needs_quoting("12:30"));
        assert!(!needs_quoting("don't"));
        assert!(!needs_quoting("-1"));
        assert!(!needs_quoting("a#b"));
    }

    #[test]
    fn test_needs_quoting_indicators() {
        assert!(needs_quoting(""));
        assert!(needs_quoting(" padded"));
        assert!(needs_quoting("- item"));
        assert!(needs_quoting("-"));
        assert!(needs_quoting("? key"));
        assert!(needs_quoting("[list]"));
        assert!(needs_quoting("{map}"));
        assert!(needs_quoting("# note"));
        assert!(needs_quoting("&anchor"));
        assert!(needs_quoting("*alias"));
        assert!(needs_quoting("!tag"));
        assert!(needs_quoting("|"));
        assert!(needs_quoting(">"));
        assert!(needs_quoting("'quoted'"));
        assert!(needs_quoting("%directive"));
        assert!(needs_quoting("---"));
        assert!(needs_quoting("..."));
    }

    #[test]
    fn test_needs_quoting_separators() {
        assert!(needs_quoting("key: value"));
        assert!(needs_quoting("trailing:"));
        assert!(needs_quoting("text # comment"));
        assert!(needs_quoting("a - [b"));
        assert!(needs_quoting("multi\nline"));
        assert!(needs_quoting("tab\there"));
    }

    #[test]
    fn test_reads_as_typed() {
        for typed in ["null", "~", "true", "False", "42", "-7", "3.5", "1e3", "0x1F", ".inf"] {
            assert!(reads_as_typed(typed), "{}", typed);
        }
        for text in ["hello", "yes", "1.2.3", ""] {
            assert!(!reads_as_typed(text), "{}", text);
        }
    }

    // ==================== Scalar tests ====================

    #[test]
    fn test_scalar_document() {
        assert_eq!(write("hello"), "---\nhello\n...");
        assert_eq!(write(Scalar::null()), "---\nnull\n...");
    }

    #[test]
    fn test_folded_document() {
        assert_eq!(
            write(Scalar::folded(["line1", "line2", "line3"])),
            "---\n>\n  line1\n  line2\n  line3\n..."
        );
    }

    #[test]
    fn test_literal_keep_chomping() {
        let node = MappingBuilder::new().add("text", "a\nb\n").build();
        assert_eq!(write(node), "text: |+\n  a\n  b");
    }

    #[test]
    fn test_multiline_with_blank_line() {
        let node = MappingBuilder::new().add("text", "a\n\nb").build();
        assert_eq!(write(node), "text: |\n  a\n\n  b");
    }

    #[test]
    fn test_multiline_fallback_to_double_quotes() {
        let node = MappingBuilder::new()
            .add("lead", "\nstarts empty")
            .add("blank", "a\n  \nb")
            .add("tail", "a\n\n")
            .build();
        assert_eq!(
            write(node),
            "lead: \"\\nstarts empty\"\nblank: \"a\\n  \\nb\"\ntail: \"a\\n\\n\""
        );
    }

    #[test]
    fn test_block_indentation_digit() {
        let node = MappingBuilder::new()
            .add("code", Scalar::literal(["  indented", "flush"]))
            .build();
        assert_eq!(write(node), "code: |2\n    indented\n  flush");
    }

    #[test]
    fn test_quoted_typed_values_keep_quotes() {
        let node = MappingBuilder::new()
            .add("port", Scalar::double_quoted("8080"))
            .add("flag", Scalar::single_quoted("true"))
            .add("plain", Scalar::new("8080"))
            .add("text", Scalar::double_quoted("hello"))
            .build();
        assert_eq!(
            write(node),
            "port: \"8080\"\nflag: 'true'\nplain: 8080\ntext: hello"
        );
    }

    #[test]
    fn test_always_quoting() {
        let config = CanonicalConfig::new().with_quoting(QuotingStrategy::Always);
        let node = MappingBuilder::new()
            .add("name", "x")
            .add("count", 3)
            .add("none", None::<i32>)
            .build();
        let output = CanonicalWriter::new(config).write_node(&node.into()).unwrap();
        assert_eq!(output, "\"name\": \"x\"\n\"count\": 3\n\"none\": null");
    }

    // ==================== Collection tests ====================

    #[test]
    fn test_nested_collections() {
        let node = MappingBuilder::new()
            .add("server", MappingBuilder::new().add("host", "example.org").build())
            .add("ports", SequenceBuilder::new().add(80).add(443).build())
            .add("empty", MappingBuilder::new().build())
            .add("none", SequenceBuilder::new().build())
            .build();
        assert_eq!(
            write(node),
            "server:\n  host: example.org\nports:\n  - 80\n  - 443\nempty: {}\nnone: []"
        );
    }

    #[test]
    fn test_compact_sequence_items() {
        let node = SequenceBuilder::new()
            .add(MappingBuilder::new().add("name", "a").add("port", 1).build())
            .add(SequenceBuilder::new().add("x").add("y").build())
            .build();
        assert_eq!(write(node), "- name: a\n  port: 1\n- - x\n  - y");
    }

    #[test]
    fn test_compact_items_wider_indent() {
        let config = CanonicalConfig::new().with_indent(4);
        let node = SequenceBuilder::new()
            .add(MappingBuilder::new().add("a", 1).add("b", 2).build())
            .build();
        let output = CanonicalWriter::new(config).write_node(&node.into()).unwrap();
        assert_eq!(output, "-   a: 1\n    b: 2");
    }

    #[test]
    fn test_collection_keys_in_flow_style() {
        let key = SequenceBuilder::new().add("c").add("g").build();
        let map_key = MappingBuilder::new().add("y", "a,b").build();
        let node = MappingBuilder::new().add(key, "d").add(map_key, "e").build();
        assert_eq!(write(node), "[c, g]: d\n{y: \"a,b\"}: e");
    }

    #[test]
    fn test_empty_top_level() {
        assert_eq!(write(MappingBuilder::new().build()), "{}");
        assert_eq!(write(SequenceBuilder::new().build()), "[]");
    }

    // ==================== Comment tests ====================

    #[test]
    fn test_scalar_comment_trailing() {
        let node = MappingBuilder::new()
            .add("a", Scalar::new("1").with_comment("first\nline"))
            .build();
        assert_eq!(write(node), "a: 1 # first line");
    }

    #[test]
    fn test_collection_comment_above() {
        let inner = MappingBuilder::new().add("x", 1).build_with_comment("inner");
        let node = MappingBuilder::new().add("k", inner).build_with_comment("top\n\nmore");
        assert_eq!(write(node), "# top\n#\n# more\n---\n# inner\nk:\n  x: 1");
    }

    #[test]
    fn test_item_with_commented_first_entry() {
        let inner = MappingBuilder::new()
            .add("k", SequenceBuilder::new().add(1).build_with_comment("note"))
            .build();
        let node = SequenceBuilder::new().add(inner).build();
        assert_eq!(write(node), "-\n  # note\n  k:\n    - 1");
    }

    #[test]
    fn test_comments_disabled() {
        let config = CanonicalConfig::new().with_comments(false);
        let node = MappingBuilder::new()
            .add("a", Scalar::new("1").with_comment("c"))
            .build_with_comment("doc");
        let output = CanonicalWriter::new(config).write_node(&node.into()).unwrap();
        assert_eq!(output, "a: 1");
    }

    // ==================== Stream tests ====================

    #[test]
    fn test_stream_documents() {
        let stream = Stream::new(vec![
            MappingBuilder::new().add("a", 1).build().into(),
            Node::from("text"),
            MappingBuilder::new().add("b", 2).build_with_comment("second").into(),
        ]);
        let output = CanonicalWriter::new(CanonicalConfig::default())
            .write_stream(&stream)
            .unwrap();
        assert_eq!(output, "---\na: 1\n---\ntext\n# second\n---\nb: 2");
    }

    #[test]
    fn test_nested_stream_rejected() {
        let node = MappingBuilder::new().add("s", Stream::new(vec![])).build();
        let err = CanonicalWriter::new(CanonicalConfig::default())
            .write_node(&node.into())
            .unwrap_err();
        assert_eq!(err.kind, yamltree_core::YamlErrorKind::Conversion);
    }

    #[test]
    fn test_writer_reuse() {
        let mut writer = CanonicalWriter::new(CanonicalConfig::default());
        let first = writer.write_node(&MappingBuilder::new().add("a", 1).build().into()).unwrap();
        let second = writer.write_node(&MappingBuilder::new().add("b", 2).build().into()).unwrap();
        assert_eq!(first, "a: 1");
        assert_eq!(second, "b: 2");
    }
}

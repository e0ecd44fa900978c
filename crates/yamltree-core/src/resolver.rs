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

//! Node resolver: decides what a block of lines is and builds it.
//!
//! Every block is classified by its first same-level line, and every entry
//! value by the text after its indicator:
//!
//! 1. `[` / `{` start a flow collection, possibly continued on the following
//!    physical lines.
//! 2. `|` / `>` start a block scalar made of the nested lines.
//! 3. A `key: value` separator (or an explicit `? key`) makes a mapping.
//! 4. A `- ` item makes a sequence.
//! 5. Anything else is a scalar, joined with its continuation lines.
//!
//! Blocks recurse through [`Lines::nested_block`]; depth is bounded by
//! [`Limits::max_depth`].

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::block_scalar::{read_lines, BlockIndicator};
use crate::error::{YamlError, YamlResult};
use crate::lex::{find_separator, split_comment, unquote, Quote};
use crate::limits::Limits;
use crate::lines::{is_sequence_item, Line, LineCollection, Lines, RawLine, YamlLine};
use crate::node::{CollectionStyle, Mapping, Node, Scalar, Sequence};

/// Resolves the lines of one document into a node tree.
///
/// Anchors are scoped to the resolver, so one resolver is used per document.
pub(crate) struct Resolver<'a> {
    pub(crate) limits: &'a Limits,
    pub(crate) strict_aliases: bool,
    anchors: HashMap<String, Node>,
    depth: usize,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(limits: &'a Limits, strict_aliases: bool) -> Self {
        Self {
            limits,
            strict_aliases,
            anchors: HashMap::new(),
            depth: 0,
        }
    }

    /// The root node of a document. A document without content is the empty
    /// mapping.
    pub(crate) fn resolve_document(&mut self, lines: &Lines) -> YamlResult<Node> {
        if lines.first_content().is_none() {
            return Ok(Mapping::new().into());
        }
        self.resolve_block(lines)
    }

    /// Enter one nesting level, failing once the depth limit is reached.
    pub(crate) fn descend(&mut self, line: usize) -> YamlResult<()> {
        if self.depth >= self.limits.max_depth {
            return Err(YamlError::security(
                format!("nesting depth exceeds limit of {}", self.limits.max_depth),
                line,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn resolve_block(&mut self, lines: &Lines) -> YamlResult<Node> {
        let Some(first) = lines.first_content() else {
            return Ok(Scalar::null().into());
        };
        self.descend(first.number() + 1)?;
        let result = self.classify_block(lines, first);
        self.ascend();
        result
    }

    fn classify_block(&mut self, lines: &Lines, first: &YamlLine) -> YamlResult<Node> {
        let number = first.number() + 1;
        check_tabs(first)?;
        if Some(first.indentation()) != lines.min_indentation() {
            return Err(YamlError::malformed(
                format!(
                    "bad indentation: line is indented by {} spaces but later lines are indented less",
                    first.indentation()
                ),
                number,
            ));
        }

        let value = first.value();
        if is_sequence_item(value) {
            trace!(line = number, "block sequence");
            return self.resolve_sequence(lines);
        }
        if is_explicit_key(value) || self.is_mapping_entry(value, number)? {
            trace!(line = number, "block mapping");
            return self.resolve_mapping(lines);
        }

        // The whole block is one value.
        trace!(line = number, "block value");
        let rest = lines.after(first.number());
        let (node, _) = self.resolve_value(lines, first, value, &rest)?;
        Ok(match first.comment().filter(|c| !c.is_empty()) {
            Some(comment) => node.with_read_comment(comment, first.number()),
            None => node,
        })
    }

    /// Whether a value is a `key: value` entry. Flow collections and block
    /// scalar headers are values even when a `:` follows them on the line.
    fn is_mapping_entry(&self, value: &str, line: usize) -> YamlResult<bool> {
        if BlockIndicator::is_candidate(value) || value.starts_with('*') {
            return Ok(false);
        }
        let separator = find_separator(value).map_err(|e| YamlError::scan(e, line))?;
        Ok(separator.is_some())
    }

    // ==================== Mappings ====================

    fn resolve_mapping(&mut self, lines: &Lines) -> YamlResult<Node> {
        let entries_lines: Vec<&YamlLine> = lines.same_level().collect();
        let mut entries: IndexMap<Node, Node> = IndexMap::new();
        let mut consumed: Option<usize> = None;
        let mut i = 0;

        while i < entries_lines.len() {
            let line = entries_lines[i];
            i += 1;
            if consumed.map_or(false, |last| line.number() <= last) {
                continue;
            }
            let number = line.number() + 1;
            check_tabs(line)?;
            let text = line.value();

            let (key, value, value_end) = if is_explicit_key(text) {
                let key_text = text[1..].trim();
                let key_nested = lines.nested_block(line.number());
                let (key, key_end) = self.resolve_value(lines, line, key_text, &key_nested)?;
                // A flow key spanning lines owns them up to its closing bracket.
                if let Some(end) = key_end {
                    while entries_lines.get(i).map_or(false, |l| l.number() <= end) {
                        i += 1;
                    }
                }
                // The value, when present, is the next same-level `:` line.
                match entries_lines.get(i) {
                    Some(&value_line) if is_explicit_value(value_line.value()) => {
                        i += 1;
                        let rest = value_line.value()[1..].trim();
                        let (value, end) = self.resolve_entry(lines, value_line, rest)?;
                        (key, annotate(lines, value_line, value), end)
                    }
                    _ => (key, Scalar::null().into(), None),
                }
            } else {
                if is_sequence_item(text) {
                    return Err(YamlError::malformed(
                        format!("sequence item '{}' inside a mapping", text),
                        number,
                    ));
                }
                let separator = find_separator(text)
                    .map_err(|e| YamlError::scan(e, number))?
                    .ok_or_else(|| {
                        YamlError::malformed(format!("expected 'key: value', found '{}'", text), number)
                    })?;
                let key = self.inline_node(text[..separator].trim(), number)?;
                let rest = text[separator + 1..].trim();
                let (value, end) = self.resolve_entry(lines, line, rest)?;
                (key, annotate(lines, line, value), end)
            };

            if let Some(end) = value_end {
                consumed = Some(consumed.map_or(end, |last| last.max(end)));
            }
            if entries.contains_key(&key) {
                return Err(YamlError::malformed(
                    format!("duplicate key '{}'", describe(&key)),
                    number,
                ));
            }
            if entries.len() >= self.limits.max_mapping_keys {
                return Err(YamlError::security(
                    format!("mapping has more than {} keys", self.limits.max_mapping_keys),
                    number,
                ));
            }
            entries.insert(key, value);
        }

        debug!(keys = entries.len(), "resolved block mapping");
        Ok(Mapping::from_entries(entries, CollectionStyle::Block).into())
    }

    /// The value of an entry whose indicator line is `line` and whose inline
    /// text is `rest`, plus the last line it consumed beyond its nested block.
    fn resolve_entry(
        &mut self,
        lines: &Lines,
        line: &YamlLine,
        rest: &str,
    ) -> YamlResult<(Node, Option<usize>)> {
        let mut nested = lines.nested_block(line.number());
        let mut consumed = None;
        if take_properties(rest).1.is_empty() && nested.first_content().is_none() {
            let items = lines.indentless_sequence(line.number());
            if let Some(last) = items.last() {
                consumed = Some(last.number());
                nested = items;
            }
        }
        let (node, flow_end) = self.resolve_value(lines, line, rest, &nested)?;
        Ok((node, consumed.or(flow_end)))
    }

    // ==================== Sequences ====================

    fn resolve_sequence(&mut self, lines: &Lines) -> YamlResult<Node> {
        let mut elements = Vec::new();
        let mut consumed: Option<usize> = None;

        for line in lines.same_level() {
            if consumed.map_or(false, |last| line.number() <= last) {
                continue;
            }
            let number = line.number() + 1;
            check_tabs(line)?;
            let text = line.value();
            if !is_sequence_item(text) {
                return Err(YamlError::malformed(
                    format!("expected a sequence item, found '{}'", text),
                    number,
                ));
            }
            let rest = text[1..].trim_start();
            let nested = lines.nested_block(line.number());

            let element = if self.is_compact(rest, number)? {
                // `- key: value` and `- - x`: the inline content heads the
                // nested block, re-indented to the column it was written at.
                // Measured on the raw content: `text` is trimmed of every
                // kind of whitespace, `indentation()` counts only spaces.
                let content = line.content();
                let lead = content.len() - content.trim_start().len();
                let offset = lead + (text.len() - rest.len());
                let head = format!("{}{}", " ".repeat(offset), &content[offset..]);
                let block = Lines::with_head(YamlLine::from(RawLine::new(head, line.number())), &nested);
                let node = self.resolve_block(&block)?;
                match lines.leading_comment(line.number()) {
                    Some(comment) => {
                        let first = first_comment_line(line.number(), &comment);
                        node.with_read_comment(comment, first)
                    }
                    None => node,
                }
            } else {
                let (node, end) = self.resolve_value(lines, line, rest, &nested)?;
                if end.is_some() {
                    consumed = end;
                }
                annotate(lines, line, node)
            };
            elements.push(element);
        }

        debug!(items = elements.len(), "resolved block sequence");
        Ok(Sequence::from_elements(elements, CollectionStyle::Block).into())
    }

    fn is_compact(&self, rest: &str, line: usize) -> YamlResult<bool> {
        if rest.is_empty() {
            return Ok(false);
        }
        Ok(is_sequence_item(rest) || is_explicit_key(rest) || self.is_mapping_entry(rest, line)?)
    }

    // ==================== Values ====================

    /// Resolve the text written after an indicator on `line`, with `nested`
    /// holding the lines that belong to it. Returns the last line consumed by
    /// a multi-line flow collection.
    fn resolve_value(
        &mut self,
        lines: &Lines,
        line: &YamlLine,
        text: &str,
        nested: &Lines,
    ) -> YamlResult<(Node, Option<usize>)> {
        let number = line.number() + 1;
        let (anchor, text) = take_properties(text);

        let (node, consumed) = if text.is_empty() {
            (self.resolve_block(nested)?, None)
        } else if text.starts_with('[') || text.starts_with('{') {
            let (node, last) = self.resolve_flow_at(lines, line, text)?;
            reject_content_after(nested, last)?;
            (node, (last > line.number()).then_some(last))
        } else if BlockIndicator::is_candidate(text) {
            let indicator = BlockIndicator::parse(text, number)?;
            let content =
                read_lines(nested, line.number(), line.indentation(), &indicator, self.limits)?;
            trace!(line = number, %indicator, lines = content.len(), "block scalar");
            (Scalar::block(indicator, content).into(), None)
        } else if let Some(name) = text.strip_prefix('*') {
            reject_content_after(nested, line.number())?;
            (self.alias(name.trim(), number)?, None)
        } else {
            (self.scalar(text, nested, number)?.into(), None)
        };

        if let Some(name) = anchor {
            self.anchors.insert(name.to_string(), node.clone());
        }
        Ok((node, consumed))
    }

    /// A single-line node: a flow collection, alias, quoted or plain scalar.
    /// Used for mapping keys and flow collection elements.
    pub(crate) fn inline_node(&mut self, text: &str, line: usize) -> YamlResult<Node> {
        let (anchor, text) = take_properties(text);
        let node = if text.is_empty() {
            Scalar::null().into()
        } else if text.starts_with('[') || text.starts_with('{') {
            self.parse_flow(text, line)?
        } else if let Some(name) = text.strip_prefix('*') {
            self.alias(name.trim(), line)?
        } else {
            inline_scalar(text, line)?.into()
        };
        if let Some(name) = anchor {
            self.anchors.insert(name.to_string(), node.clone());
        }
        Ok(node)
    }

    /// A plain or quoted scalar, folded with its continuation lines.
    ///
    /// Continuation lines join with a space; `n` blank lines between two
    /// lines fold into `n` line breaks instead.
    fn scalar(&self, text: &str, nested: &Lines, line: usize) -> YamlResult<Scalar> {
        if nested.iter().all(|l| l.is_comment()) {
            return inline_scalar(text, line);
        }

        let quoted = text.starts_with('\'') || text.starts_with('"');
        let mut joined = text.to_string();
        let mut previous = line - 1;
        for next in nested {
            let gap = next.number().saturating_sub(previous + 1);
            previous = next.number();
            if next.is_comment() {
                continue;
            }
            let part = if quoted {
                next.trimmed()
            } else {
                let part = next.value();
                let number = next.number() + 1;
                let separator = find_separator(part).map_err(|e| YamlError::scan(e, number))?;
                if separator.is_some() || is_sequence_item(part) {
                    return Err(YamlError::malformed(
                        format!("unexpected nested content '{}' under a scalar value", part),
                        number,
                    ));
                }
                part
            };
            if gap == 0 {
                joined.push(' ');
            } else {
                joined.extend(std::iter::repeat('\n').take(gap));
            }
            joined.push_str(part);
        }
        if quoted {
            // Comments after a closing quote on a continuation line.
            let (value, _) = split_comment(&joined);
            return inline_scalar(value, line);
        }
        Ok(Scalar::new(joined))
    }

    fn alias(&self, name: &str, line: usize) -> YamlResult<Node> {
        match self.anchors.get(name) {
            Some(node) => Ok(node.clone()),
            None if self.strict_aliases => Err(YamlError::malformed(
                format!("unknown alias '*{}'", name),
                line,
            )),
            None => Ok(Scalar::new(format!("*{}", name)).into()),
        }
    }
}

/// A quoted or plain scalar written on one line.
fn inline_scalar(text: &str, line: usize) -> YamlResult<Scalar> {
    match unquote(text).map_err(|e| YamlError::scan(e, line))? {
        Some((value, Quote::Single)) => Ok(Scalar::single_quoted(value)),
        Some((value, Quote::Double)) => Ok(Scalar::double_quoted(value)),
        None => Ok(Scalar::new(text)),
    }
}

/// Split leading `&anchor` and `!tag` properties off a value. Tags are
/// discarded; the last anchor name wins.
pub(crate) fn take_properties(text: &str) -> (Option<&str>, &str) {
    let mut anchor = None;
    let mut rest = text.trim_start();
    while let Some(marker) = rest.chars().next().filter(|&c| c == '&' || c == '!') {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if marker == '&' {
            anchor = Some(&rest[1..end]);
        }
        rest = rest[end..].trim_start();
    }
    (anchor, rest)
}

fn is_explicit_key(value: &str) -> bool {
    value == "?" || value.starts_with("? ")
}

fn is_explicit_value(value: &str) -> bool {
    value == ":" || value.starts_with(": ")
}

fn check_tabs(line: &YamlLine) -> YamlResult<()> {
    if line.has_tab_indentation() {
        return Err(YamlError::malformed(
            "tab character used for indentation",
            line.number() + 1,
        ));
    }
    Ok(())
}

/// Fail when `lines` holds content after line `last`.
fn reject_content_after(lines: &Lines, last: usize) -> YamlResult<()> {
    match lines.iter().find(|l| !l.is_comment() && l.number() > last) {
        Some(extra) => Err(YamlError::malformed(
            format!("unexpected content '{}'", extra.value()),
            extra.number() + 1,
        )),
        None => Ok(()),
    }
}

/// Attach the comment lines above `line` and its inline comment to `node`.
fn annotate(lines: &Lines, line: &YamlLine, node: Node) -> Node {
    let leading = lines.leading_comment(line.number());
    let inline = line.comment().filter(|c| !c.is_empty());
    let (text, first) = match (leading, inline) {
        (Some(leading), Some(inline)) => {
            let first = first_comment_line(line.number(), &leading);
            (format!("{}\n{}", leading, inline), first)
        }
        (Some(leading), None) => {
            let first = first_comment_line(line.number(), &leading);
            (leading, first)
        }
        (None, Some(inline)) => (inline.to_string(), line.number()),
        (None, None) => return node,
    };
    node.with_read_comment(text, first)
}

/// Number of the first of the comment lines directly above `number`.
fn first_comment_line(number: usize, comment: &str) -> usize {
    number.saturating_sub(comment.split('\n').count())
}

fn describe(node: &Node) -> String {
    match node.as_str() {
        Some(text) => text.to_string(),
        None => node.kind().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YamlErrorKind;
    use crate::node::ScalarStyle;

    fn doc(text: &str) -> Lines {
        Lines::new(
            text.lines()
                .enumerate()
                .filter(|(_, l)| !l.trim().is_empty())
                .map(|(i, l)| YamlLine::from(RawLine::new(l, i)))
                .collect(),
        )
    }

    fn resolve(text: &str) -> YamlResult<Node> {
        let limits = Limits::default();
        Resolver::new(&limits, true).resolve_document(&doc(text))
    }

    fn mapping(text: &str) -> Mapping {
        match resolve(text) {
            Ok(Node::Mapping(m)) => m,
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    // ==================== Classification tests ====================

    #[test]
    fn test_empty_document_is_empty_mapping() {
        assert_eq!(resolve("").unwrap(), Node::from(Mapping::new()));
        assert_eq!(resolve("# only\n# comments").unwrap(), Node::from(Mapping::new()));
    }

    #[test]
    fn test_simple_mapping() {
        let map = mapping("a: 1\nb: two\n");
        assert_eq!(map.string("a"), Some("1"));
        assert_eq!(map.string("b"), Some("two"));
    }

    #[test]
    fn test_nested_sequence_value() {
        let map = mapping("first:\n  - fourth\n  - fifth\nsecond: x");
        let seq = map.sequence("first").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(1).and_then(Node::as_str), Some("fifth"));
    }

    #[test]
    fn test_indentless_sequence_value() {
        let map = mapping("k:\n- a\n- b\nj: x");
        assert_eq!(map.sequence("k").map(Sequence::len), Some(2));
        assert_eq!(map.string("j"), Some("x"));
    }

    #[test]
    fn test_top_level_scalar() {
        let node = resolve("just text").unwrap();
        assert_eq!(node.as_str(), Some("just text"));
    }

    #[test]
    fn test_separator_requires_space() {
        let map = mapping("url: http://example.org\ntime: 12:30");
        assert_eq!(map.string("url"), Some("http://example.org"));
        assert_eq!(map.string("time"), Some("12:30"));
    }

    #[test]
    fn test_empty_value_is_null() {
        let map = mapping("a:\nb: 1");
        assert!(map.get("a").unwrap().is_null());
        assert_eq!(map.string("a"), Some("null"));
    }

    // ==================== Scalar tests ====================

    #[test]
    fn test_quoted_values() {
        let map = mapping("a: 'it''s'\nb: \"x\\ty\"\nc: 'k: v'");
        let a = map.get("a").and_then(Node::as_scalar).unwrap();
        assert_eq!(a.value(), "it's");
        assert_eq!(a.style(), ScalarStyle::SingleQuoted);
        assert_eq!(map.string("b"), Some("x\ty"));
        assert_eq!(map.string("c"), Some("k: v"));
    }

    #[test]
    fn test_multiline_plain_scalar() {
        let map = mapping("a: first\n  second\n  third\nb: x");
        assert_eq!(map.string("a"), Some("first second third"));
    }

    #[test]
    fn test_multiline_quoted_scalar() {
        let map = mapping("a: \"one\n  two # kept\" # dropped");
        assert_eq!(map.string("a"), Some("one two # kept"));
    }

    #[test]
    fn test_multiline_scalar_blank_lines_are_breaks() {
        let map = mapping("k: 'a\n\n  b'\nd: \"x\n\n\n  y\n  z\"\np: one\n\n  two");
        assert_eq!(map.string("k"), Some("a\nb"));
        assert_eq!(map.string("d"), Some("x\n\ny z"));
        assert_eq!(map.string("p"), Some("one\ntwo"));
    }

    #[test]
    fn test_apostrophe_in_plain_word() {
        let map = mapping("a: don't stop\nb: [it's, ok]");
        assert_eq!(map.string("a"), Some("don't stop"));
        assert_eq!(map.sequence("b").map(Sequence::len), Some(2));
    }

    #[test]
    fn test_block_scalar_value() {
        let map = mapping("text: >\n  line1\n  line2\n  line3\nnext: x");
        assert_eq!(map.string("text"), Some("line1 line2 line3"));
        let literal = mapping("s: |\n  echo\n  # not a comment\n");
        assert_eq!(literal.string("s"), Some("echo\n# not a comment"));
    }

    #[test]
    fn test_invalid_block_indicator() {
        let err = resolve("a: |x\n  text").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::InvalidBlockScalarIndicator);
        assert_eq!(err.line, 1);
    }

    // ==================== Compact and explicit forms ====================

    #[test]
    fn test_compact_mapping_items() {
        let node = resolve("- name: a\n  port: 1\n- name: b\n").unwrap();
        let seq = node.as_sequence().unwrap();
        assert_eq!(seq.len(), 2);
        let first = seq.get(0).and_then(Node::as_mapping).unwrap();
        assert_eq!(first.string("name"), Some("a"));
        assert_eq!(first.string("port"), Some("1"));
    }

    #[test]
    fn test_compact_nested_sequence() {
        let node = resolve("- - a\n  - b\n- c").unwrap();
        let seq = node.as_sequence().unwrap();
        assert_eq!(seq.get(0).and_then(Node::as_sequence).map(Sequence::len), Some(2));
        assert_eq!(seq.get(1).and_then(Node::as_str), Some("c"));
    }

    #[test]
    fn test_compact_item_after_unicode_whitespace() {
        let node = resolve("\u{3000}- a: 1").unwrap();
        let first = node.as_sequence().and_then(|s| s.get(0)).and_then(Node::as_mapping).unwrap();
        assert_eq!(first.string("a"), Some("1"));

        let node = resolve("\u{a0}- a: 1\n\u{a0}- b: 2").unwrap();
        let seq = node.as_sequence().unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(0).and_then(Node::as_mapping).and_then(|m| m.string("a")), Some("1"));
        assert_eq!(seq.get(1).and_then(Node::as_mapping).and_then(|m| m.string("b")), Some("2"));
    }

    #[test]
    fn test_explicit_key() {
        let map = mapping("? [c, g]\n: d\n? lonely\n");
        let key = Node::from(crate::builder::SequenceBuilder::new().add("c").add("g").build());
        assert_eq!(map.value(&key).and_then(Node::as_str), Some("d"));
        assert!(map.get("lonely").unwrap().is_null());
    }

    #[test]
    fn test_flow_key() {
        let map = mapping("[a, b]: pair");
        assert_eq!(map.len(), 1);
        assert!(map.keys().next().unwrap().as_sequence().is_some());
    }

    // ==================== Flow tests ====================

    #[test]
    fn test_multiline_flow_value() {
        let map = mapping("a: [1,\n  2,\n  3]\nb: x");
        assert_eq!(map.sequence("a").map(Sequence::len), Some(3));
        assert_eq!(map.string("b"), Some("x"));
    }

    #[test]
    fn test_unterminated_flow_names_opening_line() {
        let err = resolve("x: 1\na: [1,\n  2\n").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
        assert_eq!(err.line, 2);
    }

    // ==================== Anchor tests ====================

    #[test]
    fn test_anchor_and_alias() {
        let map = mapping("base: &b\n  x: 1\ncopy: *b\nname: &n text\nagain: *n");
        assert_eq!(map.get("copy"), map.get("base"));
        assert_eq!(map.string("again"), Some("text"));
    }

    #[test]
    fn test_unknown_alias() {
        let err = resolve("a: *missing").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);

        let limits = Limits::default();
        let node = Resolver::new(&limits, false).resolve_document(&doc("a: *missing")).unwrap();
        assert_eq!(node.as_mapping().and_then(|m| m.string("a")), Some("*missing"));
    }

    #[test]
    fn test_tags_discarded() {
        let map = mapping("a: !!str 12\nb: !custom\n  c: 1");
        assert_eq!(map.string("a"), Some("12"));
        assert_eq!(map.mapping("b").and_then(|m| m.string("c")), Some("1"));
    }

    // ==================== Comment tests ====================

    #[test]
    fn test_leading_and_inline_comments() {
        let map = mapping("# about a\na: 1 # one\nb: 2");
        assert_eq!(map.get("a").unwrap().comment().value(), "about a\none");
        assert_eq!(map.comments().referring_to(&Node::from("a")).value(), "about a\none");
        assert!(map.get("b").unwrap().comment().is_empty());
    }

    #[test]
    fn test_collection_inline_comment() {
        let map = mapping("list: # the list\n  - x");
        assert_eq!(map.get("list").unwrap().comment().value(), "the list");
    }

    #[test]
    fn test_sequence_item_comments() {
        let node = resolve("# first\n- a\n- b # second").unwrap();
        let seq = node.as_sequence().unwrap();
        assert_eq!(seq.get(0).unwrap().comment().value(), "first");
        assert_eq!(seq.get(1).unwrap().comment().value(), "second");
    }

    // ==================== Error tests ====================

    #[test]
    fn test_duplicate_key() {
        let err = resolve("a: 1\nb: 2\na: 3").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("duplicate key 'a'"));
    }

    #[test]
    fn test_bad_indentation() {
        let err = resolve("  a: 1\nb: 2").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_item_in_mapping() {
        let err = resolve("a: 1\n- b").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_unclassifiable_line_in_mapping() {
        let err = resolve("a: 1\njust words").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_tab_indentation() {
        let err = resolve("a:\n\tb: 1").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
    }

    #[test]
    fn test_depth_limit() {
        let limits = Limits {
            max_depth: 3,
            ..Limits::default()
        };
        let text = "a:\n  b:\n    c:\n      d: 1";
        let err = Resolver::new(&limits, true).resolve_document(&doc(text)).unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::Security);
    }

    #[test]
    fn test_key_limit() {
        let limits = Limits {
            max_mapping_keys: 2,
            ..Limits::default()
        };
        let err = Resolver::new(&limits, true)
            .resolve_document(&doc("a: 1\nb: 2\nc: 3"))
            .unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::Security);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_take_properties() {
        assert_eq!(take_properties("&a !t value"), (Some("a"), "value"));
        assert_eq!(take_properties("!!str"), (None, ""));
        assert_eq!(take_properties("plain"), (None, "plain"));
    }
}

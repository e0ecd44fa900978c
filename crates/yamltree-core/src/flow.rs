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

//! Flow collections: `[a, b]` and `{k: v}`.
//!
//! A flow collection that does not close on its opening line is continued
//! with the physical lines after it, whatever their indentation, until the
//! closing bracket is found.

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{YamlError, YamlResult};
use crate::lex::scan::{Class, Scanner};
use crate::lex::{find_flow_separator, matching_close, split_flow_entries, ScanError};
use crate::lines::{Line, Lines, YamlLine};
use crate::node::{CollectionStyle, Mapping, Node, Sequence};
use crate::resolver::Resolver;

impl<'a> Resolver<'a> {
    /// Resolve the flow collection opened by `text` on `line`. Returns the
    /// node and the number of the line it closes on.
    pub(crate) fn resolve_flow_at(
        &mut self,
        lines: &Lines,
        line: &YamlLine,
        text: &str,
    ) -> YamlResult<(Node, usize)> {
        let number = line.number() + 1;
        let mut logical = text.to_string();
        let mut last = line.number();
        let mut following = lines.following(line.number()).iter();

        loop {
            let close = matching_close(&logical).map_err(|e| YamlError::scan(e, number))?;
            if let Some(end) = close {
                let trailing = logical[end + 1..].trim();
                if !trailing.is_empty() {
                    return Err(YamlError::malformed(
                        format!("unexpected content '{}' after flow collection", trailing),
                        last + 1,
                    ));
                }
                let node = self.parse_flow(&logical[..=end], number)?;
                return Ok((node, last));
            }

            let Some(next) = following.next() else {
                return Err(YamlError::malformed(
                    format!("unterminated flow collection '{}'", text),
                    number,
                ));
            };
            let part = next.value();
            if !part.is_empty() {
                logical.push(' ');
                logical.push_str(part);
            }
            last = next.number();
            if logical.len() > self.limits.max_flow_length {
                return Err(YamlError::security(
                    format!(
                        "flow collection exceeds limit of {} bytes",
                        self.limits.max_flow_length
                    ),
                    number,
                ));
            }
        }
    }

    /// Parse a complete flow collection; `text` starts with its opening
    /// bracket and ends with the matching closer.
    pub(crate) fn parse_flow(&mut self, text: &str, line: usize) -> YamlResult<Node> {
        if matching_close(text).map_err(|e| YamlError::scan(e, line))? != Some(text.len() - 1) {
            return Err(YamlError::malformed(
                format!("unbalanced flow collection '{}'", text),
                line,
            ));
        }
        self.descend(line)?;
        let result = self.parse_flow_inner(text, line);
        self.ascend();
        result
    }

    fn parse_flow_inner(&mut self, text: &str, line: usize) -> YamlResult<Node> {
        let inner = &text[1..text.len() - 1];
        let entries = split_flow_entries(inner).map_err(|e| YamlError::scan(e, line))?;
        trace!(line, entries = entries.len(), "flow collection");

        if text.starts_with('[') {
            let mut elements = Vec::with_capacity(entries.len());
            for entry in entries {
                elements.push(self.flow_element(entry, line)?);
            }
            return Ok(Sequence::from_elements(elements, CollectionStyle::Flow).into());
        }

        let mut map = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let (key, value) = self.flow_pair(entry, line)?;
            if map.contains_key(&key) {
                return Err(YamlError::malformed(
                    format!("duplicate key '{}' in flow mapping", entry),
                    line,
                ));
            }
            if map.len() >= self.limits.max_mapping_keys {
                return Err(YamlError::security(
                    format!("mapping has more than {} keys", self.limits.max_mapping_keys),
                    line,
                ));
            }
            map.insert(key, value);
        }
        Ok(Mapping::from_entries(map, CollectionStyle::Flow).into())
    }

    /// A flow sequence element; `k: v` makes a single-pair mapping.
    fn flow_element(&mut self, entry: &str, line: usize) -> YamlResult<Node> {
        let separator = find_flow_separator(entry).map_err(|e| YamlError::scan(e, line))?;
        match separator {
            Some(i) if entry[i + 1..].is_empty() || entry[i + 1..].starts_with(char::is_whitespace) => {
                let key = self.inline_node(entry[..i].trim(), line)?;
                let value = self.inline_node(entry[i + 1..].trim(), line)?;
                let mut pair = IndexMap::with_capacity(1);
                pair.insert(key, value);
                Ok(Mapping::from_entries(pair, CollectionStyle::Flow).into())
            }
            _ => self.inline_node(entry, line),
        }
    }

    /// A flow mapping entry. An entry without `:` maps to null.
    fn flow_pair(&mut self, entry: &str, line: usize) -> YamlResult<(Node, Node)> {
        match entry_separator(entry).map_err(|e| YamlError::scan(e, line))? {
            Some(i) => {
                let key = self.inline_node(entry[..i].trim(), line)?;
                let value = self.inline_node(entry[i + 1..].trim(), line)?;
                Ok((key, value))
            }
            None => Ok((self.inline_node(entry, line)?, self.inline_node("", line)?)),
        }
    }
}

/// Separator of a flow mapping entry: the first top-level `:` followed by
/// whitespace, else the first top-level `:` at all (`{"a":1}`, `{a:1}`).
fn entry_separator(entry: &str) -> Result<Option<usize>, ScanError> {
    let mut scanner = Scanner::new(true);
    let mut first = None;
    let mut chars = entry.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if scanner.feed(i, c)? == Class::Structural && c == ':' && scanner.depth() == 0 {
            match chars.peek() {
                None => return Ok(Some(i)),
                Some(&(_, next)) if next.is_whitespace() => return Ok(Some(i)),
                _ => {
                    first.get_or_insert(i);
                }
            }
        }
    }
    scanner.finish()?;
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YamlErrorKind;
    use crate::limits::Limits;
    use crate::node::ScalarStyle;

    fn flow(text: &str) -> YamlResult<Node> {
        let limits = Limits::default();
        Resolver::new(&limits, true).parse_flow(text, 1)
    }

    // ==================== Sequence tests ====================

    #[test]
    fn test_flow_sequence() {
        let node = flow("[a, 'b, c', [d, e], {f: g}]").unwrap();
        let seq = node.as_sequence().unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.style(), CollectionStyle::Flow);
        assert_eq!(seq.get(1).and_then(Node::as_str), Some("b, c"));
        assert_eq!(seq.get(2).and_then(Node::as_sequence).map(Sequence::len), Some(2));
        assert_eq!(
            seq.get(3).and_then(Node::as_mapping).and_then(|m| m.string("f")),
            Some("g")
        );
        assert!(node.comment().is_empty());
    }

    #[test]
    fn test_flow_sequence_pair_element() {
        let node = flow("[a: 1, http://x]").unwrap();
        let seq = node.as_sequence().unwrap();
        assert_eq!(seq.get(0).and_then(Node::as_mapping).and_then(|m| m.string("a")), Some("1"));
        assert_eq!(seq.get(1).and_then(Node::as_str), Some("http://x"));
    }

    #[test]
    fn test_flow_trailing_comma_and_empty() {
        assert_eq!(flow("[a, b,]").unwrap().as_sequence().map(Sequence::len), Some(2));
        assert_eq!(flow("[]").unwrap().as_sequence().map(Sequence::len), Some(0));
        assert_eq!(flow("{}").unwrap().as_mapping().map(Mapping::len), Some(0));
    }

    #[test]
    fn test_flow_empty_middle_entry() {
        let err = flow("[a,,b]").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
    }

    // ==================== Mapping tests ====================

    #[test]
    fn test_flow_mapping() {
        let node = flow("{a: 1, 'b': \"two\", c}").unwrap();
        let map = node.as_mapping().unwrap();
        assert_eq!(map.string("a"), Some("1"));
        assert_eq!(
            map.get("b").and_then(Node::as_scalar).map(|s| s.style()),
            Some(ScalarStyle::DoubleQuoted)
        );
        assert!(map.get("c").unwrap().is_null());
    }

    #[test]
    fn test_flow_mapping_json_style() {
        let node = flow(r#"{"url":"http://x","n":1}"#).unwrap();
        let map = node.as_mapping().unwrap();
        assert_eq!(map.string("url"), Some("http://x"));
        assert_eq!(map.string("n"), Some("1"));
    }

    #[test]
    fn test_flow_mapping_duplicate_key() {
        let err = flow("{a: 1, a: 2}").unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::MalformedStructure);
    }

    #[test]
    fn test_flow_unbalanced() {
        assert!(flow("[a, [b]").is_err());
        assert!(flow("[a]]").is_err());
        assert!(flow("[a, 'b]").is_err());
    }

    #[test]
    fn test_flow_depth_limit() {
        let limits = Limits {
            max_depth: 2,
            ..Limits::default()
        };
        let err = Resolver::new(&limits, true).parse_flow("[[[a]]]", 1).unwrap_err();
        assert_eq!(err.kind, YamlErrorKind::Security);
    }

    #[test]
    fn test_entry_separator() {
        assert_eq!(entry_separator("a: b").unwrap(), Some(1));
        assert_eq!(entry_separator("url: http://x").unwrap(), Some(3));
        assert_eq!(entry_separator("a:b").unwrap(), Some(1));
        assert_eq!(entry_separator("'a: b'").unwrap(), None);
    }
}

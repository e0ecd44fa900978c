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

//! Indentation-scoped views over the lines of one document.
//!
//! A [`Lines`] value is a shared slice of every line of a document plus the
//! index range it covers. Taking the nested block of a line, the lines that
//! follow it or the reversed view only creates a new range over the same
//! allocation.

use std::ops::Range;
use std::sync::Arc;

use crate::lines::line::{Line, YamlLine};

/// Ordered lines of a document, navigable by indentation.
pub trait LineCollection {
    type Item: Line;

    /// Every line of the collection in its own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest indentation among content lines. Comment lines never define
    /// a level.
    fn min_indentation(&self) -> Option<usize> {
        self.iter()
            .filter(|line| !line.is_comment())
            .map(|line| line.indentation())
            .min()
    }

    /// Content lines at the minimum indentation, in collection order.
    ///
    /// Every call starts a fresh iteration.
    fn same_level(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_> {
        let level = self.min_indentation();
        Box::new(
            self.iter()
                .filter(move |line| !line.is_comment() && Some(line.indentation()) == level),
        )
    }
}

/// A contiguous view over the lines of one document.
#[derive(Debug)]
pub struct Lines<L = YamlLine> {
    all: Arc<[L]>,
    range: Range<usize>,
}

impl<L> Clone for Lines<L> {
    fn clone(&self) -> Self {
        Self {
            all: Arc::clone(&self.all),
            range: self.range.clone(),
        }
    }
}

impl<L: Line> Lines<L> {
    /// A collection over the given lines, which must be in increasing
    /// line-number order.
    pub fn new(lines: Vec<L>) -> Self {
        let range = 0..lines.len();
        Self {
            all: lines.into(),
            range,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The lines this view covers.
    pub fn as_slice(&self) -> &[L] {
        &self.all[self.range.clone()]
    }

    pub fn first(&self) -> Option<&L> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&L> {
        self.as_slice().last()
    }

    /// First content line, skipping comment lines.
    pub fn first_content(&self) -> Option<&L> {
        self.as_slice().iter().find(|line| !line.is_comment())
    }

    /// Last content line, skipping comment lines.
    pub fn last_content(&self) -> Option<&L> {
        self.as_slice().iter().rev().find(|line| !line.is_comment())
    }

    /// Absolute index of the line with the given number inside this view.
    fn index_of(&self, number: usize) -> Option<usize> {
        self.as_slice()
            .binary_search_by_key(&number, |line| line.number())
            .ok()
            .map(|offset| self.range.start + offset)
    }

    fn view(&self, range: Range<usize>) -> Self {
        Self {
            all: Arc::clone(&self.all),
            range,
        }
    }

    /// Lines strictly inside the block owned by `number`: the contiguous run
    /// after it with greater indentation. Comment lines inside the run are
    /// kept; a shallower comment line only belongs to the block when deeper
    /// content follows it. Empty when the line has no children.
    pub fn nested_block(&self, number: usize) -> Self {
        let Some(index) = self.index_of(number) else {
            return self.view(self.range.end..self.range.end);
        };
        let reference = self.all[index].indentation();
        let start = index + 1;
        let mut end = start;
        for (i, line) in self.all[start..self.range.end].iter().enumerate() {
            let deeper = line.indentation() > reference;
            if line.is_comment() {
                if deeper {
                    end = start + i + 1;
                }
                continue;
            }
            if !deeper {
                break;
            }
            end = start + i + 1;
        }
        self.view(start..end)
    }

    /// Sequence items written at the same indentation as the key that owns
    /// them (`key:` followed by `- item` lines), with their nested lines.
    pub fn indentless_sequence(&self, number: usize) -> Self {
        let Some(index) = self.index_of(number) else {
            return self.view(self.range.end..self.range.end);
        };
        let reference = self.all[index].indentation();
        let start = index + 1;
        let mut end = start;
        for (i, line) in self.all[start..self.range.end].iter().enumerate() {
            if line.is_comment() {
                continue;
            }
            let indentation = line.indentation();
            let item = indentation == reference && is_sequence_item(line.value());
            if indentation < reference || (indentation == reference && !item) {
                break;
            }
            // The run has to open with an item.
            if end == start && !item {
                break;
            }
            end = start + i + 1;
        }
        self.view(start..end)
    }

    /// Lines of this view after `number`, at any indentation.
    pub fn after(&self, number: usize) -> Self {
        match self.index_of(number) {
            Some(index) => self.view(index + 1..self.range.end),
            None => self.view(self.range.end..self.range.end),
        }
    }

    /// Every line after `number` to the end of the document, regardless of
    /// indentation and of this view's range.
    pub fn following(&self, number: usize) -> &[L] {
        match self.index_of(number) {
            Some(index) => &self.all[index + 1..],
            None => &[],
        }
    }

    /// The lines of this view in reverse order.
    pub fn reversed(&self) -> ReversedLines<L> {
        ReversedLines {
            lines: self.clone(),
        }
    }

    /// Text of the comment lines directly above `number`, joined by `\n`.
    /// A blank line (a gap in the numbering) ends the comment block.
    pub fn leading_comment(&self, number: usize) -> Option<String> {
        let index = self.index_of(number)?;
        let before = self.view(0..index);
        let mut expected = number;
        let mut parts: Vec<String> = Vec::new();
        for line in before.reversed().iter() {
            if !line.is_comment() || line.number() + 1 != expected {
                break;
            }
            parts.push(line.comment().unwrap_or("").to_string());
            expected = line.number();
        }
        if parts.is_empty() {
            return None;
        }
        parts.reverse();
        Some(parts.join("\n"))
    }
}

impl<L: Line + Clone> Lines<L> {
    /// A new collection made of `head` followed by the lines of `rest`.
    /// Used for content written after an indicator on the same line, such as
    /// `- key: value`, which heads the block nested under it.
    pub fn with_head(head: L, rest: &Self) -> Self {
        let mut lines = Vec::with_capacity(rest.len() + 1);
        lines.push(head);
        lines.extend(rest.as_slice().iter().cloned());
        Self::new(lines)
    }
}

impl<L: Line> LineCollection for Lines<L> {
    type Item = L;

    fn iter(&self) -> Box<dyn Iterator<Item = &L> + '_> {
        Box::new(self.as_slice().iter())
    }

    fn len(&self) -> usize {
        self.range.len()
    }
}

impl<'a, L: Line> IntoIterator for &'a Lines<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// A [`Lines`] view iterated from its last line to its first.
#[derive(Debug, Clone)]
pub struct ReversedLines<L = YamlLine> {
    lines: Lines<L>,
}

impl<L: Line> ReversedLines<L> {
    /// Back to forward order.
    pub fn reversed(&self) -> Lines<L> {
        self.lines.clone()
    }
}

impl<L: Line> LineCollection for ReversedLines<L> {
    type Item = L;

    fn iter(&self) -> Box<dyn Iterator<Item = &L> + '_> {
        Box::new(self.lines.as_slice().iter().rev())
    }

    fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Whether trimmed content is a block sequence item (`-` followed by
/// whitespace or nothing).
pub fn is_sequence_item(value: &str) -> bool {
    value == "-" || value.starts_with("- ") || value.starts_with("-\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::RawLine;

    fn lines(rows: &[(&str, usize)]) -> Lines<YamlLine> {
        Lines::new(
            rows.iter()
                .map(|&(content, number)| YamlLine::from(RawLine::new(content, number)))
                .collect(),
        )
    }

    fn numbers<'a, I: IntoIterator<Item = &'a YamlLine>>(iter: I) -> Vec<usize> {
        iter.into_iter().map(|line| line.number()).collect()
    }

    // ==================== Same level tests ====================

    #[test]
    fn test_same_level_minimum_indentation() {
        let doc = lines(&[("a:", 0), ("  b: 1", 1), ("c: 2", 2), ("      stray", 3)]);
        assert_eq!(numbers(doc.same_level()), vec![0, 2]);
    }

    #[test]
    fn test_same_level_is_restartable() {
        let doc = lines(&[("- a", 0), ("- b", 1)]);
        assert_eq!(numbers(doc.same_level()), numbers(doc.same_level()));
    }

    #[test]
    fn test_same_level_ignores_comments() {
        let doc = lines(&[("  # shallow comment", 0), ("  a: 1", 1), ("# top", 2), ("  b: 2", 3)]);
        assert_eq!(doc.min_indentation(), Some(2));
        assert_eq!(numbers(doc.same_level()), vec![1, 3]);
    }

    // ==================== Nested block tests ====================

    #[test]
    fn test_nested_block_example() {
        let doc = lines(&[("first: ", 0), ("  - fourth", 1), ("  - fifth", 2), ("second: x", 3)]);
        assert_eq!(numbers(&doc.nested_block(0)), vec![1, 2]);
        assert!(doc.nested_block(3).is_empty());
    }

    #[test]
    fn test_nested_block_unknown_line() {
        let doc = lines(&[("a: 1", 0)]);
        assert!(doc.nested_block(7).is_empty());
    }

    #[test]
    fn test_nested_block_drops_trailing_shallow_comment() {
        let doc = lines(&[("a:", 0), ("  b: 1", 1), ("# about c", 2), ("c: 2", 3)]);
        assert_eq!(numbers(&doc.nested_block(0)), vec![1]);
    }

    #[test]
    fn test_nested_block_keeps_inner_comment() {
        let doc = lines(&[("a:", 0), ("  b: 1", 1), ("# between", 2), ("  c: 2", 3), ("d: 3", 4)]);
        assert_eq!(numbers(&doc.nested_block(0)), vec![1, 2, 3]);
    }

    #[test]
    fn test_nested_block_keeps_deep_trailing_comment() {
        let doc = lines(&[("s: |", 0), ("  echo", 1), ("  # not a comment", 2), ("t: x", 3)]);
        assert_eq!(numbers(&doc.nested_block(0)), vec![1, 2]);
    }

    #[test]
    fn test_nested_block_of_nested_block() {
        let doc = lines(&[("a:", 0), ("  b:", 1), ("    c: 1", 2), ("  d: 2", 3)]);
        let inner = doc.nested_block(0);
        assert_eq!(numbers(&inner.nested_block(1)), vec![2]);
        assert!(inner.nested_block(3).is_empty());
    }

    // ==================== Indentless sequence tests ====================

    #[test]
    fn test_indentless_sequence() {
        let doc = lines(&[("k:", 0), ("- a", 1), ("-   b: 1", 2), ("    c: 2", 3), ("j: x", 4)]);
        assert_eq!(numbers(&doc.indentless_sequence(0)), vec![1, 2, 3]);
        assert!(doc.indentless_sequence(4).is_empty());
    }

    #[test]
    fn test_indentless_sequence_requires_items() {
        let doc = lines(&[("k:", 0), ("j: x", 1)]);
        assert!(doc.indentless_sequence(0).is_empty());
    }

    // ==================== Following / reversed tests ====================

    #[test]
    fn test_following_ignores_range() {
        let doc = lines(&[("a: [1,", 0), ("2]", 1), ("b: 3", 2)]);
        let scoped = doc.nested_block(0);
        assert!(scoped.is_empty());
        assert_eq!(numbers(doc.following(0)), vec![1, 2]);
    }

    #[test]
    fn test_after_stays_in_range() {
        let doc = lines(&[("a:", 0), ("  b", 1), ("  c", 2), ("d", 3)]);
        let nested = doc.nested_block(0);
        assert_eq!(numbers(&nested.after(1)), vec![2]);
        assert_eq!(numbers(&doc.after(1)), vec![2, 3]);
        assert!(doc.after(9).is_empty());
    }

    #[test]
    fn test_reversed_is_exact_reverse() {
        let doc = lines(&[("a", 0), ("b", 1), ("c", 2)]);
        let mut forward = numbers(doc.iter());
        forward.reverse();
        assert_eq!(numbers(doc.reversed().iter()), forward);
        assert_eq!(doc.reversed().len(), 3);
        assert_eq!(numbers(&doc.reversed().reversed()), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_collection() {
        let doc = Lines::<YamlLine>::empty();
        assert!(doc.is_empty());
        assert_eq!(doc.same_level().count(), 0);
        assert!(doc.nested_block(0).is_empty());
        assert!(doc.reversed().is_empty());
        assert!(doc.following(0).is_empty());
        assert_eq!(doc.min_indentation(), None);
    }

    // ==================== Comment tests ====================

    #[test]
    fn test_leading_comment() {
        let doc = lines(&[("# one", 0), ("# two", 1), ("a: 1", 2)]);
        assert_eq!(doc.leading_comment(2), Some("one\ntwo".to_string()));
    }

    #[test]
    fn test_leading_comment_stops_at_gap() {
        let doc = lines(&[("# far", 0), ("# near", 2), ("a: 1", 3)]);
        assert_eq!(doc.leading_comment(3), Some("near".to_string()));
    }

    #[test]
    fn test_leading_comment_absent() {
        let doc = lines(&[("a: 1", 0), ("b: 2", 1)]);
        assert_eq!(doc.leading_comment(1), None);
        assert_eq!(doc.leading_comment(0), None);
    }

    #[test]
    fn test_with_head() {
        let doc = lines(&[("- a: 1", 0), ("  b: 2", 1)]);
        let nested = doc.nested_block(0);
        let head = YamlLine::from(RawLine::new("  a: 1", 0));
        let block = Lines::with_head(head, &nested);
        assert_eq!(numbers(block.same_level()), vec![0, 1]);
    }

    #[test]
    fn test_is_sequence_item() {
        assert!(is_sequence_item("-"));
        assert!(is_sequence_item("- a"));
        assert!(!is_sequence_item("-1"));
        assert!(!is_sequence_item("--- x"));
    }
}

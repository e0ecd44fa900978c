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

//! Physical lines and their derived properties.
//!
//! [`Line`] is the capability every line offers. [`RawLine`] derives each
//! property from its content on every call; [`CachedLine`] wraps any line and
//! computes each derived property at most once, which matters because the
//! resolver inspects the same line several times while deciding what it is.

use std::fmt;
use std::sync::OnceLock;

use crate::lex::split_comment;
use crate::preprocess::is_comment_line;

/// A physical line of a YAML document.
pub trait Line: fmt::Debug {
    /// 0-based position in the original document.
    fn number(&self) -> usize;

    /// The line exactly as read, without line terminator.
    fn content(&self) -> &str;

    /// Count of leading spaces.
    fn indentation(&self) -> usize {
        self.content().bytes().take_while(|&b| b == b' ').count()
    }

    /// Content with leading and trailing whitespace removed.
    fn trimmed(&self) -> &str {
        self.content().trim()
    }

    /// Trimmed content without its inline comment.
    fn value(&self) -> &str {
        split_comment(self.trimmed()).0
    }

    /// Text of the inline comment, if any.
    fn comment(&self) -> Option<&str> {
        split_comment(self.trimmed()).1
    }

    /// Whether the whole line is a comment.
    fn is_comment(&self) -> bool {
        is_comment_line(self.trimmed())
    }

    /// Whether a tab appears in the leading whitespace before content.
    fn has_tab_indentation(&self) -> bool {
        self.content()[self.indentation()..].starts_with('\t') && !self.is_comment()
    }
}

/// A line that recomputes every derived property on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    number: usize,
    content: String,
}

impl RawLine {
    pub fn new(content: impl Into<String>, number: usize) -> Self {
        Self {
            number,
            content: content.into(),
        }
    }
}

impl Line for RawLine {
    fn number(&self) -> usize {
        self.number
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// Memoizing decorator over any [`Line`].
///
/// Indentation, trimmed content and the value/comment split are filled on
/// first access. `OnceLock` makes the first fill safe when several threads
/// read the same line.
#[derive(Debug, Clone)]
pub struct CachedLine<L> {
    origin: L,
    indentation: OnceLock<usize>,
    trimmed: OnceLock<String>,
    /// Length of the value and byte offset of the comment within `trimmed`.
    split: OnceLock<(usize, Option<usize>)>,
}

impl<L: Line> CachedLine<L> {
    pub fn new(origin: L) -> Self {
        Self {
            origin,
            indentation: OnceLock::new(),
            trimmed: OnceLock::new(),
            split: OnceLock::new(),
        }
    }

    /// The wrapped line.
    pub fn origin(&self) -> &L {
        &self.origin
    }

    fn split(&self) -> (usize, Option<usize>) {
        *self.split.get_or_init(|| {
            let trimmed = self.trimmed();
            let (value, comment) = split_comment(trimmed);
            let offset =
                comment.map(|c| c.as_ptr() as usize - trimmed.as_ptr() as usize);
            (value.len(), offset)
        })
    }
}

impl<L: Line> Line for CachedLine<L> {
    fn number(&self) -> usize {
        self.origin.number()
    }

    fn content(&self) -> &str {
        self.origin.content()
    }

    fn indentation(&self) -> usize {
        *self.indentation.get_or_init(|| self.origin.indentation())
    }

    fn trimmed(&self) -> &str {
        self.trimmed.get_or_init(|| self.origin.trimmed().to_string())
    }

    fn value(&self) -> &str {
        let (len, _) = self.split();
        &self.trimmed()[..len]
    }

    fn comment(&self) -> Option<&str> {
        let (_, offset) = self.split();
        offset.map(|start| &self.trimmed()[start..])
    }
}

impl From<RawLine> for CachedLine<RawLine> {
    fn from(line: RawLine) -> Self {
        Self::new(line)
    }
}

/// The line type documents are read into.
pub type YamlLine = CachedLine<RawLine>;

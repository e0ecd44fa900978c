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

//! Parse entry points.
//!
//! Reading happens in three phases:
//!
//! 1. [`preprocess`]: size and encoding checks, BOM and CRLF handling, blank
//!    lines dropped with their numbers preserved.
//! 2. Stream splitting on `---` / `...` markers. Comment lines just before a
//!    `---` marker, and a top-of-document comment block separated from the
//!    content by a blank line, become the document's comment.
//! 3. One resolver per document builds the node tree.
//!
//! # Security Limits
//!
//! Every phase is bounded by [`Limits`]; a violation is a
//! [`YamlErrorKind::Security`](crate::YamlErrorKind::Security) error:
//!
//! - `max_input_size`: input size in bytes (default: 1GB)
//! - `max_line_length`: physical line length (default: 1MB)
//! - `max_depth`: nesting depth of blocks and flow collections (default: 128)
//! - `max_flow_length`: logical length of a multi-line flow collection (default: 1MB)
//! - `max_block_scalar_size`: block scalar content (default: 10MB)
//! - `max_mapping_keys`: keys per mapping (default: 100k)
//! - `max_documents`: documents per stream (default: 10k)

use tracing::debug;

use crate::error::{YamlError, YamlResult};
use crate::limits::Limits;
use crate::lines::{Line, Lines, RawLine, YamlLine};
use crate::node::{CollectionStyle, Mapping, Node, Sequence, Stream};
use crate::preprocess::{is_blank_line, preprocess};
use crate::resolver::Resolver;

/// Options for reading YAML text.
///
/// # Examples
///
/// ```
/// use yamltree_core::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::builder()
///     .max_depth(16)
///     .strict_aliases(false)
///     .build();
/// let node = parse_with_options(b"a: *unknown\n", options).unwrap();
/// assert_eq!(node.as_mapping().and_then(|m| m.string("a")), Some("*unknown"));
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
    /// Fail on aliases with no matching anchor; otherwise keep them as text.
    pub strict_aliases: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            strict_aliases: true,
        }
    }
}

impl ParseOptions {
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Fluent builder for [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    strict_aliases: bool,
}

impl ParseOptionsBuilder {
    /// A builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            strict_aliases: true,
        }
    }

    /// Use the given limits wholesale.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum nesting depth (default: 128).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.limits.max_depth = depth;
        self
    }

    /// Set the maximum input size in bytes (default: 1GB).
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.limits.max_input_size = size;
        self
    }

    /// Set the maximum physical line length in bytes (default: 1MB).
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum logical length of a flow collection (default: 1MB).
    pub fn max_flow_length(mut self, length: usize) -> Self {
        self.limits.max_flow_length = length;
        self
    }

    /// Set the maximum block scalar size in bytes (default: 10MB).
    pub fn max_block_scalar_size(mut self, size: usize) -> Self {
        self.limits.max_block_scalar_size = size;
        self
    }

    /// Set the maximum keys per mapping (default: 100k).
    pub fn max_mapping_keys(mut self, count: usize) -> Self {
        self.limits.max_mapping_keys = count;
        self
    }

    /// Set the maximum documents per stream (default: 10k).
    pub fn max_documents(mut self, count: usize) -> Self {
        self.limits.max_documents = count;
        self
    }

    /// Set strict alias resolution (default: true).
    pub fn strict_aliases(mut self, strict: bool) -> Self {
        self.strict_aliases = strict;
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            strict_aliases: self.strict_aliases,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the first document of a YAML text. Input without documents reads as
/// the empty mapping.
///
/// # Examples
///
/// ```
/// use yamltree_core::parse;
///
/// let node = parse(b"name: yamltree\ntags:\n  - yaml\n").unwrap();
/// let root = node.as_mapping().unwrap();
/// assert_eq!(root.string("name"), Some("yamltree"));
/// assert_eq!(root.sequence("tags").map(|s| s.len()), Some(1));
/// ```
pub fn parse(input: &[u8]) -> YamlResult<Node> {
    parse_with_options(input, ParseOptions::default())
}

/// Read the first document with custom options.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> YamlResult<Node> {
    let stream = parse_stream_with_options(input, options)?;
    Ok(stream
        .get(0)
        .cloned()
        .unwrap_or_else(|| Mapping::new().into()))
}

/// Read every document of a YAML text.
pub fn parse_stream(input: &[u8]) -> YamlResult<Stream> {
    parse_stream_with_options(input, ParseOptions::default())
}

/// Read every document with custom options.
pub fn parse_stream_with_options(input: &[u8], options: ParseOptions) -> YamlResult<Stream> {
    let preprocessed = preprocess(input, &options.limits)?;
    resolve_stream(preprocessed.raw_lines(), &options)
}

/// Read the first document, which must be a mapping.
pub fn parse_mapping(input: &[u8]) -> YamlResult<Mapping> {
    match parse(input)? {
        Node::Mapping(mapping) => Ok(mapping),
        other => Err(YamlError::malformed(
            format!("expected a mapping, found a {}", other.kind()),
            1,
        )),
    }
}

/// Read the first document, which must be a sequence. Input without
/// content reads as the empty sequence.
pub fn parse_sequence(input: &[u8]) -> YamlResult<Sequence> {
    let stream = parse_stream(input)?;
    match stream.get(0) {
        None => Ok(Sequence::new()),
        Some(Node::Sequence(sequence)) => Ok(sequence.clone()),
        Some(Node::Mapping(mapping))
            if mapping.is_empty() && mapping.style() == CollectionStyle::Block =>
        {
            Ok(Sequence::new())
        }
        Some(other) => Err(YamlError::malformed(
            format!("expected a sequence, found a {}", other.kind()),
            1,
        )),
    }
}

/// Read already split lines. Blank lines are dropped; the others keep their
/// position as line number.
///
/// # Examples
///
/// ```
/// use yamltree_core::parse_lines;
///
/// let stream = parse_lines(&["a: 1", "", "b: 2"]).unwrap();
/// let root = stream.get(0).and_then(|d| d.as_mapping()).unwrap();
/// assert_eq!(root.len(), 2);
/// ```
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> YamlResult<Stream> {
    let raw = lines
        .iter()
        .enumerate()
        .map(|(number, line)| (number, line.as_ref().trim_end_matches('\r')))
        .filter(|(_, line)| !is_blank_line(line))
        .map(|(number, line)| RawLine::new(line, number))
        .collect();
    resolve_stream(raw, &ParseOptions::default())
}

// --- Stream splitting ---

/// Lines of one document plus the comment documenting it.
#[derive(Debug, Default)]
struct PendingDocument {
    lines: Vec<RawLine>,
    comment: Vec<RawLine>,
    explicit: bool,
}

impl PendingDocument {
    fn explicit(comment: Vec<RawLine>) -> Self {
        Self {
            lines: Vec::new(),
            comment,
            explicit: true,
        }
    }

    fn has_content(&self) -> bool {
        self.lines.iter().any(|line| !line.is_comment())
    }

    fn is_document(&self) -> bool {
        self.explicit || self.has_content()
    }

    /// Remove the comment lines at the end of the document.
    fn take_trailing_comments(&mut self) -> Vec<RawLine> {
        let keep = self
            .lines
            .iter()
            .rposition(|line| !line.is_comment())
            .map_or(0, |index| index + 1);
        self.lines.split_off(keep)
    }

    /// Move a top comment block followed by a blank line into the document
    /// comment.
    fn detach_top_comment(&mut self) {
        let count = self.lines.iter().take_while(|line| line.is_comment()).count();
        if count == 0 || count == self.lines.len() {
            return;
        }
        let last_comment = self.lines[count - 1].number();
        if self.lines[count].number() > last_comment + 1 {
            let rest = self.lines.split_off(count);
            let top = std::mem::replace(&mut self.lines, rest);
            self.comment.extend(top);
        }
    }

    fn comment_text(&self) -> Option<(String, usize)> {
        let first = self.comment.first()?.number();
        let text = self
            .comment
            .iter()
            .map(|line| line.comment().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n");
        Some((text, first))
    }
}

fn is_marker(content: &str, marker: &str) -> bool {
    match content.strip_prefix(marker) {
        Some(rest) => rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t'),
        None => false,
    }
}

fn split_documents(raw: Vec<RawLine>, limits: &Limits) -> YamlResult<Vec<PendingDocument>> {
    let mut documents: Vec<PendingDocument> = Vec::new();
    let mut current = PendingDocument::default();

    let push = |documents: &mut Vec<PendingDocument>, document: PendingDocument, line: usize| -> YamlResult<()> {
        if !document.is_document() {
            return Ok(());
        }
        if documents.len() >= limits.max_documents {
            return Err(YamlError::security(
                format!("stream has more than {} documents", limits.max_documents),
                line,
            ));
        }
        documents.push(document);
        Ok(())
    };

    for line in raw {
        let content = line.content();
        if is_marker(content, "---") {
            let carried = current.take_trailing_comments();
            let finished = std::mem::replace(&mut current, PendingDocument::explicit(carried));
            push(&mut documents, finished, line.number() + 1)?;
            let head = content[3..].trim();
            if !head.is_empty() {
                current.lines.push(RawLine::new(head, line.number()));
            }
        } else if is_marker(content, "...") {
            let finished = std::mem::take(&mut current);
            push(&mut documents, finished, line.number() + 1)?;
        } else if content.starts_with('%') && !current.has_content() {
            debug!(line = line.number() + 1, "skipping directive");
        } else {
            current.lines.push(line);
        }
    }
    push(&mut documents, current, 0)?;
    Ok(documents)
}

fn resolve_stream(raw: Vec<RawLine>, options: &ParseOptions) -> YamlResult<Stream> {
    let pending = split_documents(raw, &options.limits)?;
    debug!(documents = pending.len(), "split stream");

    let mut documents = Vec::with_capacity(pending.len());
    for mut document in pending {
        document.detach_top_comment();
        let comment = document.comment_text();
        let lines = Lines::new(document.lines.into_iter().map(YamlLine::from).collect());
        let mut resolver = Resolver::new(&options.limits, options.strict_aliases);
        let node = resolver.resolve_document(&lines)?;
        documents.push(match comment {
            Some((text, line)) => node.with_read_comment(text, line),
            None => node,
        });
    }
    Ok(Stream::new(documents))
}

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

//! Literal (`|`) and folded (`>`) block scalars.
//!
//! A block scalar is read from the nested block of the line carrying its
//! indicator. The block indentation (explicit, or that of the first content
//! line) is removed from every line; deeper lines keep their extra spaces and
//! lines that look like comments are content. Blank lines, which never reach
//! the line store, are restored from gaps in the line numbering.

use std::fmt;

use crate::error::{YamlError, YamlResult};
use crate::limits::Limits;
use crate::lines::{Line, Lines};

/// How the lines of a block scalar are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockStyle {
    /// `|`: line breaks are kept.
    Literal,
    /// `>`: line breaks fold into spaces.
    Folded,
}

/// What happens to the final line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Chomping {
    /// No modifier: no trailing line break.
    #[default]
    Clip,
    /// `-`: no trailing line break.
    Strip,
    /// `+`: one trailing line break.
    Keep,
}

/// A block scalar header such as `|`, `>-` or `|2+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockIndicator {
    pub style: BlockStyle,
    pub chomping: Chomping,
    /// Explicit indentation relative to the parent line.
    pub indentation: Option<usize>,
}

impl BlockIndicator {
    pub const fn literal() -> Self {
        Self {
            style: BlockStyle::Literal,
            chomping: Chomping::Clip,
            indentation: None,
        }
    }

    pub const fn folded() -> Self {
        Self {
            style: BlockStyle::Folded,
            chomping: Chomping::Clip,
            indentation: None,
        }
    }

    pub fn with_chomping(mut self, chomping: Chomping) -> Self {
        self.chomping = chomping;
        self
    }

    pub fn with_indentation(mut self, indentation: usize) -> Self {
        self.indentation = Some(indentation);
        self
    }

    /// Whether a value is introduced by a block scalar indicator.
    pub fn is_candidate(text: &str) -> bool {
        text.starts_with('|') || text.starts_with('>')
    }

    /// Parse an indicator found on the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamltree_core::{BlockIndicator, BlockStyle, Chomping};
    ///
    /// let indicator = BlockIndicator::parse(">2-", 1).unwrap();
    /// assert_eq!(indicator.style, BlockStyle::Folded);
    /// assert_eq!(indicator.chomping, Chomping::Strip);
    /// assert_eq!(indicator.indentation, Some(2));
    ///
    /// assert!(BlockIndicator::parse("|x", 1).is_err());
    /// ```
    pub fn parse(text: &str, line: usize) -> YamlResult<Self> {
        let invalid =
            || YamlError::invalid_indicator(format!("invalid block scalar indicator '{}'", text), line);
        let mut chars = text.chars();
        let mut indicator = match chars.next() {
            Some('|') => Self::literal(),
            Some('>') => Self::folded(),
            _ => return Err(invalid()),
        };
        let mut chomping = None;
        for c in chars {
            match c {
                '-' | '+' if chomping.is_none() => {
                    chomping = Some(if c == '-' {
                        Chomping::Strip
                    } else {
                        Chomping::Keep
                    });
                }
                '1'..='9' if indicator.indentation.is_none() => {
                    indicator.indentation = Some(c as usize - '0' as usize);
                }
                _ => return Err(invalid()),
            }
        }
        indicator.chomping = chomping.unwrap_or_default();
        Ok(indicator)
    }
}

impl fmt::Display for BlockIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            BlockStyle::Literal => write!(f, "|")?,
            BlockStyle::Folded => write!(f, ">")?,
        }
        if let Some(indentation) = self.indentation {
            write!(f, "{}", indentation)?;
        }
        match self.chomping {
            Chomping::Clip => Ok(()),
            Chomping::Strip => write!(f, "-"),
            Chomping::Keep => write!(f, "+"),
        }
    }
}

/// Join block scalar lines into the scalar's value.
///
/// Literal lines are joined with `\n`. Folded lines are joined with a space,
/// except that an empty line becomes a line break and a more-indented line
/// stays on its own line.
///
/// # Examples
///
/// ```
/// use yamltree_core::block_scalar::fold;
/// use yamltree_core::BlockIndicator;
///
/// let lines = vec!["a".to_string(), "b".to_string(), "".to_string(), "c".to_string()];
/// assert_eq!(fold(&BlockIndicator::literal(), &lines), "a\nb\n\nc");
/// assert_eq!(fold(&BlockIndicator::folded(), &lines), "a b\nc");
/// ```
pub fn fold(indicator: &BlockIndicator, lines: &[String]) -> String {
    let mut text = match indicator.style {
        BlockStyle::Literal => lines.join("\n"),
        BlockStyle::Folded => fold_lines(lines),
    };
    let kept = text.trim_end_matches('\n').len();
    text.truncate(kept);
    if indicator.chomping == Chomping::Keep && !lines.is_empty() {
        text.push('\n');
    }
    text
}

fn fold_lines(lines: &[String]) -> String {
    let mut out = String::new();
    let mut previous: Option<&str> = None;
    for line in lines {
        match previous {
            None if line.is_empty() => out.push('\n'),
            None => {}
            Some(_) if line.is_empty() => out.push('\n'),
            Some(prev) if prev.is_empty() => {}
            Some(prev) if more_indented(prev) || more_indented(line) => out.push('\n'),
            Some(_) => out.push(' '),
        }
        out.push_str(line);
        previous = Some(line);
    }
    out
}

#[inline]
fn more_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// Content lines of a block scalar whose header sits on line `header`,
/// indented by `parent_indentation`.
pub(crate) fn read_lines<L: Line>(
    block: &Lines<L>,
    header: usize,
    parent_indentation: usize,
    indicator: &BlockIndicator,
    limits: &Limits,
) -> YamlResult<Vec<String>> {
    let Some(first) = block.first() else {
        return Ok(Vec::new());
    };
    let indentation = match indicator.indentation {
        Some(relative) => parent_indentation + relative,
        None => first.indentation(),
    };

    let mut lines = Vec::with_capacity(block.as_slice().len());
    let mut size = 0usize;
    let mut previous = header;
    for line in block {
        for _ in previous + 1..line.number() {
            lines.push(String::new());
        }
        if line.indentation() < indentation {
            return Err(YamlError::malformed(
                format!(
                    "block scalar line indented by {} spaces, expected at least {}",
                    line.indentation(),
                    indentation
                ),
                line.number() + 1,
            ));
        }
        let text = &line.content()[indentation..];
        size += text.len() + 1;
        if size > limits.max_block_scalar_size {
            return Err(YamlError::security(
                format!(
                    "block scalar too large: exceeds limit of {} bytes",
                    limits.max_block_scalar_size
                ),
                line.number() + 1,
            ));
        }
        lines.push(text.to_string());
        previous = line.number();
    }
    Ok(lines)
}

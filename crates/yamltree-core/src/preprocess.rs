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

//! Input preprocessing for YAML reading.

use crate::error::{YamlError, YamlResult};
use crate::limits::Limits;
use crate::lines::RawLine;
use std::borrow::Cow;

/// Preprocessed input ready for line construction.
/// Stores normalized text and line offsets.
#[derive(Debug)]
pub struct PreprocessedInput {
    /// The normalized text (CRLF converted, BOM removed).
    text: String,
    /// Line boundaries: Vec of (0-based line_number, start_offset, end_offset)
    line_offsets: Vec<(usize, usize, usize)>,
}

impl PreprocessedInput {
    /// Get every physical line as (line_num, &str), blank lines included.
    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.line_offsets
            .iter()
            .map(move |&(num, start, end)| (num, &self.text[start..end]))
    }

    /// Non-blank lines as [`RawLine`]s. Blank lines are dropped but the
    /// numbering of the remaining lines is preserved.
    pub fn raw_lines(&self) -> Vec<RawLine> {
        self.lines()
            .filter(|(_, line)| !is_blank_line(line))
            .map(|(num, line)| RawLine::new(line, num))
            .collect()
    }
}

/// Preprocess raw input bytes into lines.
///
/// This handles:
/// - Size limit
/// - UTF-8 validation
/// - BOM skipping
/// - Control character validation
/// - CRLF normalization and bare CR rejection
/// - Line length limit
pub fn preprocess(input: &[u8], limits: &Limits) -> YamlResult<PreprocessedInput> {
    if input.len() > limits.max_input_size {
        return Err(YamlError::security(
            format!("input too large: exceeds limit of {} bytes", limits.max_input_size),
            0,
        ));
    }

    let text = std::str::from_utf8(input)
        .map_err(|e| YamlError::encoding(format!("invalid UTF-8 encoding: {}", e), 1))?;

    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    // Control characters other than TAB, LF and CR are rejected.
    let bytes = text.as_bytes();
    let mut line_num = 1;
    for &b in bytes.iter() {
        if b == b'\n' {
            line_num += 1;
        } else if (b < 0x20 && b != 0x09 && b != 0x0D) || b == 0x7F {
            return Err(YamlError::encoding(
                format!("control character U+{:04X} not allowed", b),
                line_num,
            ));
        }
    }

    let text: Cow<str> = if memchr::memchr(b'\r', bytes).is_some() {
        let normalized = text.replace("\r\n", "\n");
        if let Some(pos) = normalized.find('\r') {
            let line_num = memchr::memchr_iter(b'\n', normalized[..pos].as_bytes()).count() + 1;
            return Err(YamlError::encoding(
                "bare CR (U+000D) not allowed - use LF or CRLF",
                line_num,
            ));
        }
        Cow::Owned(normalized)
    } else {
        Cow::Borrowed(text)
    };

    let bytes = text.as_bytes();
    let estimated_lines = memchr::memchr_iter(b'\n', bytes).count() + 1;
    let mut line_offsets = Vec::with_capacity(estimated_lines);

    let mut start = 0;
    for (line_num, end) in memchr::memchr_iter(b'\n', bytes)
        .chain(std::iter::once(bytes.len()))
        .enumerate()
    {
        if end - start > limits.max_line_length {
            return Err(YamlError::security(
                format!(
                    "line too long: exceeds limit of {} bytes",
                    limits.max_line_length
                ),
                line_num + 1,
            ));
        }
        line_offsets.push((line_num, start, end));
        start = end + 1;
    }

    // A trailing newline does not open another line.
    if let Some(&(_, last_start, last_end)) = line_offsets.last() {
        if line_offsets.len() > 1 && last_start == last_end && last_end == bytes.len() {
            line_offsets.pop();
        }
    }

    Ok(PreprocessedInput {
        text: text.into_owned(),
        line_offsets,
    })
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Check if a line is a comment (first non-whitespace is #).
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

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

//! Quoted scalar decoding.

use crate::lex::error::ScanError;
use crate::lex::scan::{Class, Scanner};

/// The quote style a token was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

/// Decode a quoted token.
///
/// Returns `Ok(None)` when the token does not start with a quote. The
/// closing quote must end the token; anything after it is an error.
///
/// # Examples
///
/// ```
/// use yamltree_core::lex::{unquote, Quote};
///
/// assert_eq!(unquote("'it''s'").unwrap(), Some(("it's".to_string(), Quote::Single)));
/// assert_eq!(unquote(r#""a\tb""#).unwrap(), Some(("a\tb".to_string(), Quote::Double)));
/// assert_eq!(unquote("plain").unwrap(), None);
/// ```
pub fn unquote(token: &str) -> Result<Option<(String, Quote)>, ScanError> {
    let quote = match token.chars().next() {
        Some('\'') => Quote::Single,
        Some('"') => Quote::Double,
        _ => return Ok(None),
    };

    let mut scanner = Scanner::new(false);
    let mut close = None;
    for (i, c) in token.char_indices() {
        match scanner.feed(i, c)? {
            Class::Quoted => {}
            _ => {
                close = Some(i);
                break;
            }
        }
    }

    // The closing quote is the last quoted character before `close`.
    let body_end = match close {
        Some(end) => {
            let rest = token[end..].trim();
            if !rest.is_empty() {
                return Err(ScanError::TrailingContent {
                    text: rest.to_string(),
                    column: end,
                });
            }
            token[..end].trim_end().len()
        }
        None => {
            scanner.finish()?;
            token.len()
        }
    };
    if body_end < 2 {
        return Err(ScanError::UnterminatedQuote {
            quote: token.chars().next().unwrap_or('"'),
            column: 0,
        });
    }
    let body = &token[1..body_end - 1];

    let value = match quote {
        Quote::Single => body.replace("''", "'"),
        Quote::Double => unescape_double(body)?,
    };
    Ok(Some((value, quote)))
}

/// Process escape sequences of a double-quoted body.
fn unescape_double(body: &str) -> Result<String, ScanError> {
    if !body.contains('\\') {
        return Ok(body.to_string());
    }
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('/') => out.push('/'),
            Some(' ') => out.push(' '),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| ScanError::InvalidEscape {
                        sequence: format!("u{}", hex),
                    })?;
                out.push(decoded);
            }
            Some(other) => {
                return Err(ScanError::InvalidEscape {
                    sequence: other.to_string(),
                })
            }
            None => {
                return Err(ScanError::InvalidEscape {
                    sequence: String::new(),
                })
            }
        }
    }
    Ok(out)
}

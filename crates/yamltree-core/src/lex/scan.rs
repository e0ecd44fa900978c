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

//! Quote- and bracket-aware scanner for logical lines.
//!
//! Every structural question the resolver asks about a line (where does the
//! key end, where does the inline comment start, where does a flow collection
//! close, where are its top-level commas) is answered by the same state
//! machine: a bracket stack plus a quote state, fed one character at a time.
//!
//! A quote only opens at the start of a token (at the start of the text, after
//! `[`, `{` or `,` inside a flow collection, after a `:` separator, or after a
//! `- `/`? ` indicator), so apostrophes inside plain words never open a quote.
//! Brackets open under the same rule, or anywhere inside an open collection.

use crate::lex::error::ScanError;

/// Scanner states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Plain,
    InSingle,
    /// A `'` inside single quotes: either the first half of `''` or the close.
    SingleQuotePending,
    InDouble,
    /// The character after a backslash inside double quotes.
    Escaped,
}

/// How a character was interpreted by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Class {
    /// Part of a quoted string, including its delimiters.
    Quoted,
    /// An opening bracket.
    Open,
    /// A closing bracket that matched the innermost opener.
    Close,
    /// Any other character outside quotes.
    Structural,
}

#[derive(Debug, Clone)]
pub(crate) struct Scanner {
    state: State,
    stack: Vec<(char, usize)>,
    quote_start: usize,
    prev_significant: Option<char>,
    prev_raw: Option<char>,
    /// Scanning the inside of a flow collection: `,` and `:` always delimit
    /// tokens and a closing bracket without opener is an error.
    flow: bool,
}

impl Scanner {
    pub(crate) fn new(flow: bool) -> Self {
        Self {
            state: State::Plain,
            stack: Vec::new(),
            quote_start: 0,
            prev_significant: None,
            prev_raw: None,
            flow,
        }
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn prev_is_space(&self) -> bool {
        self.prev_raw.map_or(true, char::is_whitespace)
    }

    fn at_token_start(&self) -> bool {
        match self.prev_significant {
            None => true,
            Some('[' | '{' | ',') => self.flow || !self.stack.is_empty(),
            Some(':') => self.flow || !self.stack.is_empty() || self.prev_is_space(),
            Some('-' | '?') => self.prev_is_space(),
            _ => false,
        }
    }

    /// Feed one character found at byte offset `column`.
    pub(crate) fn feed(&mut self, column: usize, c: char) -> Result<Class, ScanError> {
        match self.state {
            State::Escaped => {
                self.state = State::InDouble;
                self.prev_raw = Some(c);
                return Ok(Class::Quoted);
            }
            State::InDouble => {
                match c {
                    '\\' => self.state = State::Escaped,
                    '"' => {
                        self.state = State::Plain;
                        self.prev_significant = Some('"');
                    }
                    _ => {}
                }
                self.prev_raw = Some(c);
                return Ok(Class::Quoted);
            }
            State::InSingle => {
                if c == '\'' {
                    self.state = State::SingleQuotePending;
                }
                self.prev_raw = Some(c);
                return Ok(Class::Quoted);
            }
            State::SingleQuotePending => {
                if c == '\'' {
                    self.state = State::InSingle;
                    self.prev_raw = Some(c);
                    return Ok(Class::Quoted);
                }
                self.state = State::Plain;
                self.prev_significant = Some('\'');
            }
            State::Plain => {}
        }

        let class = match c {
            '\'' | '"' if self.at_token_start() => {
                self.state = if c == '\'' {
                    State::InSingle
                } else {
                    State::InDouble
                };
                self.quote_start = column;
                Class::Quoted
            }
            '[' | '{' if !self.stack.is_empty() || self.at_token_start() => {
                self.stack.push((c, column));
                Class::Open
            }
            ']' | '}' => match self.stack.last() {
                Some(&(open, _)) if closes(open, c) => {
                    self.stack.pop();
                    Class::Close
                }
                Some(_) => {
                    return Err(ScanError::UnbalancedBracket { bracket: c, column });
                }
                None if self.flow => {
                    return Err(ScanError::UnbalancedBracket { bracket: c, column });
                }
                None => Class::Structural,
            },
            _ => Class::Structural,
        };

        if !c.is_whitespace() {
            self.prev_significant = Some(c);
        }
        self.prev_raw = Some(c);
        Ok(class)
    }

    /// Check the state at the end of the text.
    pub(crate) fn finish(&self) -> Result<(), ScanError> {
        match self.state {
            State::InSingle => Err(ScanError::UnterminatedQuote {
                quote: '\'',
                column: self.quote_start,
            }),
            State::InDouble | State::Escaped => Err(ScanError::UnterminatedQuote {
                quote: '"',
                column: self.quote_start,
            }),
            State::Plain | State::SingleQuotePending => match self.stack.last() {
                Some(&(bracket, column)) => Err(ScanError::UnbalancedBracket { bracket, column }),
                None => Ok(()),
            },
        }
    }
}

#[inline]
fn closes(open: char, close: char) -> bool {
    matches!((open, close), ('[', ']') | ('{', '}'))
}

/// Find the block mapping separator: the first `:` outside quotes and
/// brackets that is followed by whitespace or ends the text.
///
/// # Examples
///
/// ```
/// use yamltree_core::lex::find_separator;
///
/// assert_eq!(find_separator("key: value").unwrap(), Some(3));
/// assert_eq!(find_separator("url: http://x").unwrap(), Some(3));
/// assert_eq!(find_separator("'a: b': c").unwrap(), Some(6));
/// assert_eq!(find_separator("12:30").unwrap(), None);
/// ```
pub fn find_separator(text: &str) -> Result<Option<usize>, ScanError> {
    let mut scanner = Scanner::new(false);
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let class = scanner.feed(i, c)?;
        if class == Class::Structural && c == ':' && scanner.depth() == 0 {
            match chars.peek() {
                None => return Ok(Some(i)),
                Some(&(_, next)) if next.is_whitespace() => return Ok(Some(i)),
                _ => {}
            }
        }
    }
    // An unterminated quote may continue on the next line; that is the
    // scalar reader's problem, not a separator question.
    Ok(None)
}

/// Find the separator of a flow mapping entry: the first `:` outside quotes
/// and brackets, whether or not whitespace follows.
pub fn find_flow_separator(text: &str) -> Result<Option<usize>, ScanError> {
    let mut scanner = Scanner::new(true);
    for (i, c) in text.char_indices() {
        let class = scanner.feed(i, c)?;
        if class == Class::Structural && c == ':' && scanner.depth() == 0 {
            return Ok(Some(i));
        }
    }
    scanner.finish()?;
    Ok(None)
}

/// Split the interior of a flow collection on its top-level commas.
///
/// Entries are trimmed. A trailing comma is tolerated; an empty entry
/// anywhere else is an error. An empty or blank interior has no entries.
///
/// # Examples
///
/// ```
/// use yamltree_core::lex::split_flow_entries;
///
/// let entries = split_flow_entries("a, '0,3', [b, c], {d: e},").unwrap();
/// assert_eq!(entries, vec!["a", "'0,3'", "[b, c]", "{d: e}"]);
/// ```
pub fn split_flow_entries(inner: &str) -> Result<Vec<&str>, ScanError> {
    let mut scanner = Scanner::new(true);
    let mut entries = Vec::new();
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        let class = scanner.feed(i, c)?;
        if class == Class::Structural && c == ',' && scanner.depth() == 0 {
            let entry = inner[start..i].trim();
            if entry.is_empty() {
                return Err(ScanError::EmptyEntry { column: i });
            }
            entries.push(entry);
            start = i + 1;
        }
    }
    scanner.finish()?;
    let last = inner[start..].trim();
    if !last.is_empty() {
        entries.push(last);
    }
    Ok(entries)
}

/// Position of the bracket closing the collection opened by the first
/// character of `text`, or `None` when the text ends first.
///
/// # Examples
///
/// ```
/// use yamltree_core::lex::matching_close;
///
/// assert_eq!(matching_close("[a, [b]] # c").unwrap(), Some(7));
/// assert_eq!(matching_close("{a: ']'").unwrap(), None);
/// ```
pub fn matching_close(text: &str) -> Result<Option<usize>, ScanError> {
    let mut scanner = Scanner::new(true);
    for (i, c) in text.char_indices() {
        if scanner.feed(i, c)? == Class::Close && scanner.depth() == 0 {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Split trimmed content into its value and inline comment.
///
/// A `#` starts a comment when it is outside quotes and either begins the
/// text or follows whitespace. The value is returned right-trimmed, the
/// comment text without the `#` and trimmed.
///
/// # Examples
///
/// ```
/// use yamltree_core::lex::split_comment;
///
/// assert_eq!(split_comment("a: 1 # one"), ("a: 1", Some("one")));
/// assert_eq!(split_comment("a: '#1' # x"), ("a: '#1'", Some("x")));
/// assert_eq!(split_comment("tag: c#"), ("tag: c#", None));
/// ```
pub fn split_comment(text: &str) -> (&str, Option<&str>) {
    if memchr::memchr(b'#', text.as_bytes()).is_none() {
        return (text, None);
    }
    let mut scanner = Scanner::new(false);
    for (i, c) in text.char_indices() {
        let starts_comment = c == '#' && scanner.prev_is_space();
        match scanner.feed(i, c) {
            Ok(Class::Structural) if starts_comment => {
                return (text[..i].trim_end(), Some(text[i + 1..].trim()));
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
    (text, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Separator tests ====================

    #[test]
    fn test_separator_simple() {
        assert_eq!(find_separator("a: b").unwrap(), Some(1));
        assert_eq!(find_separator("a:").unwrap(), Some(1));
    }

    #[test]
    fn test_separator_requires_space_in_block() {
        assert_eq!(find_separator("http://example.com").unwrap(), None);
        assert_eq!(find_separator("a:b").unwrap(), None);
    }

    #[test]
    fn test_separator_skips_quotes() {
        assert_eq!(find_separator("\"a: b\": c").unwrap(), Some(6));
        assert_eq!(find_separator("'it''s: x': y").unwrap(), Some(10));
    }

    #[test]
    fn test_separator_skips_flow_key() {
        assert_eq!(find_separator("[a: b, c]: d").unwrap(), Some(9));
        assert_eq!(find_separator("{a: b}: d").unwrap(), Some(6));
    }

    #[test]
    fn test_separator_apostrophe_in_word() {
        assert_eq!(find_separator("don't: stop").unwrap(), Some(5));
    }

    #[test]
    fn test_separator_after_quoted_value_in_value() {
        // The first separator wins even when the value holds another one.
        assert_eq!(find_separator("a: 'b: c'").unwrap(), Some(1));
    }

    #[test]
    fn test_separator_unterminated_quote_is_not_an_error() {
        assert_eq!(find_separator("'multi line").unwrap(), None);
    }

    #[test]
    fn test_separator_bracket_inside_word() {
        assert_eq!(find_separator("a[0]: x").unwrap(), Some(4));
    }

    #[test]
    fn test_flow_separator_no_space() {
        assert_eq!(find_flow_separator("y:r").unwrap(), Some(1));
        assert_eq!(find_flow_separator("t:\"0,3\"").unwrap(), Some(1));
        assert_eq!(find_flow_separator("['a']: 'b'").unwrap(), Some(5));
        assert_eq!(find_flow_separator("plain").unwrap(), None);
    }

    // ==================== Entry splitting tests ====================

    #[test]
    fn test_split_commas_in_quotes() {
        let entries = split_flow_entries("a,'0,3',\"2,3,4\",b").unwrap();
        assert_eq!(entries, vec!["a", "'0,3'", "\"2,3,4\"", "b"]);
    }

    #[test]
    fn test_split_nested_collections() {
        let entries = split_flow_entries("{ii:\"5,6,7\"}, [1, [2, 3]], c").unwrap();
        assert_eq!(entries, vec!["{ii:\"5,6,7\"}", "[1, [2, 3]]", "c"]);
    }

    #[test]
    fn test_split_empty_interior() {
        assert!(split_flow_entries("").unwrap().is_empty());
        assert!(split_flow_entries("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_trailing_comma() {
        assert_eq!(split_flow_entries("a, b,").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_split_empty_middle_entry() {
        let err = split_flow_entries("a,,b").unwrap_err();
        assert_eq!(err, ScanError::EmptyEntry { column: 2 });
    }

    #[test]
    fn test_split_unterminated_quote() {
        let err = split_flow_entries("a, 'b").unwrap_err();
        assert!(matches!(err, ScanError::UnterminatedQuote { quote: '\'', .. }));
    }

    #[test]
    fn test_split_unbalanced_bracket() {
        assert!(split_flow_entries("a, b]").is_err());
        assert!(split_flow_entries("a, [b").is_err());
        assert!(split_flow_entries("[a}").is_err());
    }

    #[test]
    fn test_split_escaped_quotes() {
        let entries = split_flow_entries(r#""a\",b", 'c'',d'"#).unwrap();
        assert_eq!(entries, vec![r#""a\",b""#, "'c'',d'"]);
    }

    // ==================== Matching close tests ====================

    #[test]
    fn test_matching_close_same_line() {
        assert_eq!(matching_close("[a, b]").unwrap(), Some(5));
        assert_eq!(matching_close("{a: [b, c]}").unwrap(), Some(10));
    }

    #[test]
    fn test_matching_close_open() {
        assert_eq!(matching_close("[a, [b, c]").unwrap(), None);
        assert_eq!(matching_close("['a, ]").unwrap(), None);
    }

    #[test]
    fn test_matching_close_mismatch() {
        assert!(matching_close("[a}").is_err());
    }

    // ==================== Comment tests ====================

    #[test]
    fn test_split_comment_whole_line() {
        assert_eq!(split_comment("# note"), ("", Some("note")));
        assert_eq!(split_comment("#"), ("", Some("")));
    }

    #[test]
    fn test_split_comment_inside_quotes() {
        assert_eq!(split_comment("a: \"x # y\""), ("a: \"x # y\"", None));
    }

    #[test]
    fn test_split_comment_needs_space() {
        assert_eq!(split_comment("a: b#c"), ("a: b#c", None));
        assert_eq!(split_comment("a: b #c"), ("a: b", Some("c")));
    }

    #[test]
    fn test_split_comment_in_flow() {
        assert_eq!(split_comment("[a, b] # list"), ("[a, b]", Some("list")));
    }
}

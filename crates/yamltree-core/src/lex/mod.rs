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

//! Lexical helpers for YAML lines.
//!
//! # Module Structure
//!
//! - [`error`] - [`ScanError`], the scanner's error type
//! - [`scan`] - the quote- and bracket-aware scanner and the structural
//!   queries built on it (separators, flow entries, closers, comments)
//! - [`strings`] - decoding of single- and double-quoted scalars
//!
//! # Examples
//!
//! ```
//! use yamltree_core::lex::{find_separator, split_flow_entries};
//!
//! assert_eq!(find_separator("name: Ada").unwrap(), Some(4));
//!
//! let entries = split_flow_entries("a, 'b, c', [d, e]").unwrap();
//! assert_eq!(entries.len(), 3);
//! ```

pub mod error;
pub mod scan;
pub mod strings;

pub use error::ScanError;
pub use scan::{find_flow_separator, find_separator, matching_close, split_comment, split_flow_entries};
pub use strings::{unquote, Quote};

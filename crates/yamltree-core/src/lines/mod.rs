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

//! Line store and indentation navigator.
//!
//! - [`line`] - the [`Line`] capability, [`RawLine`] and the memoizing
//!   [`CachedLine`]
//! - [`collection`] - [`LineCollection`], [`Lines`] and [`ReversedLines`]
//!
//! # Examples
//!
//! ```
//! use yamltree_core::lines::{Line, LineCollection, Lines, RawLine, YamlLine};
//!
//! let lines = Lines::new(vec![
//!     YamlLine::from(RawLine::new("first: ", 0)),
//!     YamlLine::from(RawLine::new("  - fourth", 1)),
//!     YamlLine::from(RawLine::new("  - fifth", 2)),
//!     YamlLine::from(RawLine::new("second: x", 3)),
//! ]);
//!
//! let nested: Vec<usize> = lines.nested_block(0).iter().map(|l| l.number()).collect();
//! assert_eq!(nested, vec![1, 2]);
//! assert!(lines.nested_block(3).is_empty());
//! ```

pub mod collection;
pub mod line;

pub use collection::{is_sequence_item, LineCollection, Lines, ReversedLines};
pub use line::{CachedLine, Line, RawLine, YamlLine};

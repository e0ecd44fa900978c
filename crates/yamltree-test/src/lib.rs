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

//! Shared test fixtures and utilities for yamltree crates.
//!
//! This crate provides canonical node trees, YAML texts, error inputs and
//! counting helpers so that the reader, the canonical writer and the JSON
//! bridge are all tested against the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use yamltree_test::fixtures;
//!
//! let node = fixtures::nested_config();
//! let node = fixtures::comprehensive();
//!
//! for (name, fixture_fn) in fixtures::all() {
//!     let node = fixture_fn();
//!     assert!(yamltree_test::count_nodes(&node) >= 1, "{}", name);
//! }
//!
//! for sample in fixtures::errors::invalid_yaml_samples() {
//!     assert!(yamltree_core::parse(sample.input).is_err(), "{}", sample.name);
//! }
//! ```

use yamltree_core::Node;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Node)>;

/// Canonical test fixtures covering the node model.
pub mod fixtures;

/// Fixture counting utilities.
pub mod counts;

pub use counts::{count_comments, count_nodes, count_scalars, max_depth};
pub use fixtures::*;

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

//! Yamltree CLI library
//!
//! Command implementations behind the `yamltree` binary.
//!
//! # Commands
//!
//! - `validate`: read every document of a file and report success
//! - `format`: rewrite a file in canonical form
//! - `inspect`: print a kind and size summary per document
//! - `to-json` / `from-json`: convert between YAML and JSON
//!
//! # Limits
//!
//! Input files larger than 1 GB are rejected before they are read. Set
//! `YAMLTREE_MAX_FILE_SIZE` (in bytes) to change the cap.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;

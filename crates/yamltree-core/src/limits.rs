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

//! Security limits for YAML reading.

/// Configurable limits for parser security.
///
/// These limits protect against denial-of-service attacks and memory exhaustion
/// by bounding the resources consumed while reading a document.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum input size in bytes (default: 1GB).
    pub max_input_size: usize,
    /// Maximum physical line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum nesting depth of collections (default: 128).
    pub max_depth: usize,
    /// Maximum length of a joined multi-line flow collection (default: 1MB).
    pub max_flow_length: usize,
    /// Maximum block scalar size in bytes (default: 10MB).
    pub max_block_scalar_size: usize,
    /// Maximum number of keys in a single mapping (default: 100k).
    pub max_mapping_keys: usize,
    /// Maximum number of documents in a stream (default: 10k).
    pub max_documents: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 1024 * 1024 * 1024,       // 1GB
            max_line_length: 1024 * 1024,             // 1MB
            max_depth: 128,
            max_flow_length: 1024 * 1024,             // 1MB
            max_block_scalar_size: 10 * 1024 * 1024, // 10MB
            max_mapping_keys: 100_000,
            max_documents: 10_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_line_length: usize::MAX,
            max_depth: usize::MAX,
            max_flow_length: usize::MAX,
            max_block_scalar_size: usize::MAX,
            max_mapping_keys: usize::MAX,
            max_documents: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_max_input_size() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_size, 1024 * 1024 * 1024);
    }

    #[test]
    fn test_default_max_depth() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, 128);
    }

    #[test]
    fn test_default_max_mapping_keys() {
        let limits = Limits::default();
        assert_eq!(limits.max_mapping_keys, 100_000);
    }

    // ==================== Unlimited limits tests ====================

    #[test]
    fn test_unlimited_everything() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_line_length, usize::MAX);
        assert_eq!(limits.max_depth, usize::MAX);
        assert_eq!(limits.max_flow_length, usize::MAX);
        assert_eq!(limits.max_block_scalar_size, usize::MAX);
        assert_eq!(limits.max_documents, usize::MAX);
    }

    #[test]
    fn test_limits_debug() {
        let debug = format!("{:?}", Limits::default());
        assert!(debug.contains("max_input_size"));
        assert!(debug.contains("max_flow_length"));
    }

    // ==================== Custom limits tests ====================

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            max_depth: 4,
            ..Limits::default()
        };
        assert_eq!(limits.max_depth, 4);
        assert_eq!(limits.max_line_length, 1024 * 1024);
    }
}

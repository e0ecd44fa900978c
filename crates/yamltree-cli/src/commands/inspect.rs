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

//! Inspect command - per-document structure summary

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use yamltree_core::{parse_stream, Node, ScalarStyle};

/// Print the kind, size, node count and depth of every document in `file`.
pub fn inspect(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;

    let stream = parse_stream(&content).map_err(CliError::parse)?;

    println!("{}", "YAML Stream".bold().underline());
    println!("{}  {}", "Documents:".cyan(), stream.len());

    for (index, document) in stream.documents().enumerate() {
        println!();
        println!(
            "{} {}: {}",
            "Document".cyan(),
            index + 1,
            document.kind().to_string().green()
        );
        println!("  {}", size_summary(document));
        println!("  Nodes: {}", count_nodes(document));
        println!("  Depth: {}", depth(document));
        let comment = document.comment();
        if !comment.is_empty() {
            println!("  Comment: {}", comment.value().replace('\n', " / "));
        }
    }

    Ok(())
}

fn size_summary(node: &Node) -> String {
    match node {
        Node::Scalar(scalar) => format!("Style: {}", style_name(scalar.style())),
        Node::Mapping(mapping) => format!("Entries: {}", mapping.len()),
        Node::Sequence(sequence) => format!("Items: {}", sequence.len()),
        Node::Stream(stream) => format!("Documents: {}", stream.len()),
    }
}

fn style_name(style: ScalarStyle) -> &'static str {
    match style {
        ScalarStyle::Plain => "plain",
        ScalarStyle::SingleQuoted => "single-quoted",
        ScalarStyle::DoubleQuoted => "double-quoted",
        ScalarStyle::Literal => "literal",
        ScalarStyle::Folded => "folded",
    }
}

/// Nodes in the tree, mapping keys included.
fn count_nodes(node: &Node) -> usize {
    1 + match node {
        Node::Scalar(_) => 0,
        Node::Mapping(mapping) => mapping
            .iter()
            .map(|(key, value)| count_nodes(key) + count_nodes(value))
            .sum(),
        Node::Sequence(sequence) => sequence.values().map(count_nodes).sum(),
        Node::Stream(stream) => stream.documents().map(count_nodes).sum(),
    }
}

/// Levels of nesting; a scalar has depth 1.
fn depth(node: &Node) -> usize {
    1 + match node {
        Node::Scalar(_) => 0,
        Node::Mapping(mapping) => mapping.values().map(depth).max().unwrap_or(0),
        Node::Sequence(sequence) => sequence.values().map(depth).max().unwrap_or(0),
        Node::Stream(stream) => stream.documents().map(depth).max().unwrap_or(0),
    }
}

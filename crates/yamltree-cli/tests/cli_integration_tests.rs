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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn yamltree_cmd() -> Command {
    Command::cargo_bin("yamltree").expect("Failed to find yamltree binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    yamltree_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Yamltree - immutable YAML document toolkit"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    yamltree_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("yamltree"));
}

#[test]
fn test_no_subcommand_fails() {
    yamltree_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file("name: app\nports:\n  - 80\n  - 443\n", ".yaml");

    yamltree_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Documents: 1"));
}

#[test]
fn test_validate_counts_documents() {
    let file = create_temp_file("---\na: 1\n---\nb: 2\n---\nc: 3\n", ".yaml");

    yamltree_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents: 3"));
}

#[test]
fn test_validate_duplicate_key_fails() {
    let file = create_temp_file("a: 1\na: 2\n", ".yaml");

    yamltree_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("Error: Parse error: MalformedStructure"));
}

#[test]
fn test_validate_unknown_alias_strict_and_lenient() {
    let file = create_temp_file("a: *missing\n", ".yaml");

    yamltree_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure();

    yamltree_cmd()
        .arg("validate")
        .arg("--lenient")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Aliases: lenient"));
}

#[test]
fn test_validate_invalid_indicator() {
    let file = create_temp_file("a: |x\n  text\n", ".yaml");

    yamltree_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidBlockScalarIndicator"));
}

#[test]
fn test_validate_missing_file() {
    yamltree_cmd()
        .arg("validate")
        .arg("/nonexistent/path/config.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_file_size_cap() {
    let file = create_temp_file("key: a value longer than the cap\n", ".yaml");

    yamltree_cmd()
        .env("YAMLTREE_MAX_FILE_SIZE", "8")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== Format Command Tests =====

#[test]
fn test_format_to_stdout() {
    let file = create_temp_file("b:   2\na: 'x'\nlist: [1,  2]\n", ".yaml");

    yamltree_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("b: 2\na: x\nlist:\n  - 1\n  - 2\n");
}

#[test]
fn test_format_to_output_file() {
    let input = create_temp_file("a:\n    b: 1\n", ".yaml");
    let output = NamedTempFile::new().expect("Failed to create temp file");

    yamltree_cmd()
        .arg("format")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success();

    let written = fs::read_to_string(output.path()).expect("Failed to read output");
    assert_eq!(written, "a:\n  b: 1\n");
}

#[test]
fn test_format_indent() {
    let file = create_temp_file("a:\n  - x\n", ".yaml");

    yamltree_cmd()
        .arg("format")
        .arg("--indent")
        .arg("4")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a:\n    - x\n");
}

#[test]
fn test_format_quote_always() {
    let file = create_temp_file("a: b\nn: 1\n", ".yaml");

    yamltree_cmd()
        .arg("format")
        .arg("--quote-always")
        .arg(file.path())
        .assert()
        .success()
        .stdout("\"a\": \"b\"\n\"n\": 1\n");
}

#[test]
fn test_format_keeps_and_strips_comments() {
    let file = create_temp_file("a: 1 # note\n", ".yaml");

    yamltree_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a: 1 # note\n");

    yamltree_cmd()
        .arg("format")
        .arg("--strip-comments")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a: 1\n");
}

#[test]
fn test_format_stream() {
    let file = create_temp_file("---\na: 1\n---\n- b\n", ".yaml");

    yamltree_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("---\na: 1\n---\n- b\n");
}

#[test]
fn test_format_check() {
    let canonical = create_temp_file("a: 1\nb:\n  - x\n", ".yaml");
    yamltree_cmd()
        .arg("format")
        .arg("--check")
        .arg(canonical.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical form"));

    let messy = create_temp_file("a:    1\n", ".yaml");
    yamltree_cmd()
        .arg("format")
        .arg("--check")
        .arg(messy.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in canonical form"));
}

#[test]
fn test_format_output_is_stable() {
    let input = create_temp_file("z: {b: 1, a: [x, y]}\nblock: |\n  one\n  two\n", ".yaml");
    let first = NamedTempFile::new().expect("Failed to create temp file");

    yamltree_cmd()
        .arg("format")
        .arg(input.path())
        .arg("-o")
        .arg(first.path())
        .assert()
        .success();

    yamltree_cmd()
        .arg("format")
        .arg("--check")
        .arg(first.path())
        .assert()
        .success();
}

// ===== Conversion Command Tests =====

#[test]
fn test_to_json() {
    let file = create_temp_file("name: app\nport: 8080\nid: \"42\"\n", ".yaml");

    yamltree_cmd()
        .arg("to-json")
        .arg(file.path())
        .assert()
        .success()
        .stdout("{\"name\":\"app\",\"port\":8080,\"id\":\"42\"}\n");
}

#[test]
fn test_to_json_pretty() {
    let file = create_temp_file("a: 1\n", ".yaml");

    yamltree_cmd()
        .arg("to-json")
        .arg("--pretty")
        .arg(file.path())
        .assert()
        .success()
        .stdout("{\n  \"a\": 1\n}\n");
}

#[test]
fn test_to_json_stream_is_array() {
    let file = create_temp_file("---\na: 1\n---\n- b\n", ".yaml");

    yamltree_cmd()
        .arg("to-json")
        .arg(file.path())
        .assert()
        .success()
        .stdout("[{\"a\":1},[\"b\"]]\n");
}

#[test]
fn test_to_json_collection_key_fails() {
    let file = create_temp_file("[a, b]: pair\n", ".yaml");

    yamltree_cmd()
        .arg("to-json")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON conversion error"));
}

#[test]
fn test_from_json() {
    let file = create_temp_file(r#"{"a": [1, "x"], "b": {"c": "true"}}"#, ".json");

    yamltree_cmd()
        .arg("from-json")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a:\n  - 1\n  - x\nb:\n  c: \"true\"\n");
}

#[test]
fn test_from_json_invalid() {
    let file = create_temp_file("{\"a\": ", ".json");

    yamltree_cmd()
        .arg("from-json")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON conversion error"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect() {
    let file = create_temp_file("# settings\n\na: 1\nb:\n  - x\n---\nplain text\n", ".yaml");

    yamltree_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("mapping"))
        .stdout(predicate::str::contains("Entries: 2"))
        .stdout(predicate::str::contains("Depth: 3"))
        .stdout(predicate::str::contains("Comment: settings"))
        .stdout(predicate::str::contains("scalar"))
        .stdout(predicate::str::contains("Style: plain"));
}

// ===== Logging Tests =====

#[test]
fn test_verbose_logs_to_stderr() {
    let file = create_temp_file("a: 1\n", ".yaml");

    yamltree_cmd()
        .arg("--verbose")
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("a: 1\n")
        .stderr(predicate::str::contains("read 5 bytes"));
}

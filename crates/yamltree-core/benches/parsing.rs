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

//! Reader and writer benchmarks.
//!
//! Measures line splitting, block resolution and canonical writing over
//! generated configuration documents of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use yamltree_core::{parse, parse_stream, preprocess, Limits};

const SIZES: [usize; 3] = [10, 100, 1_000];

/// A block mapping of `services` entries, each with scalars, a flow
/// sequence, a compact sequence of mappings and a folded description.
fn generate_config(services: usize) -> String {
    let mut text = String::from("# generated\n\nservices:\n");
    for i in 0..services {
        text.push_str(&format!(
            "  svc{i}: # service {i}\n    host: host{i}.internal\n    port: {port}\n    enabled: true\n    \
             tags: [web, api, 'v{i}']\n    routes:\n      - path: /r{i}\n        method: GET\n      \
             - path: /s{i}\n        method: POST\n    description: >\n      Service number {i}\n      \
             handles requests.\n",
            i = i,
            port = 8000 + i,
        ));
    }
    text
}

fn generate_stream(documents: usize) -> String {
    (0..documents)
        .map(|i| format!("---\nid: {}\nitems:\n  - a\n  - b\n", i))
        .collect()
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");
    let limits = Limits::default();
    for size in SIZES {
        let text = generate_config(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| preprocess(black_box(text.as_bytes()), &limits))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in SIZES {
        let text = generate_config(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text.as_bytes())))
        });
    }
    group.finish();
}

fn bench_parse_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_stream");
    for size in SIZES {
        let text = generate_stream(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_stream(black_box(text.as_bytes())))
        });
    }
    group.finish();
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    for size in SIZES {
        let text = generate_config(size);
        let Ok(node) = parse(text.as_bytes()) else {
            continue;
        };
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &node, |b, node| {
            b.iter(|| yamltree_c14n::canonicalize(black_box(node)))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let text = generate_config(1_000);
    let Ok(node) = parse(text.as_bytes()) else {
        return;
    };
    let Some(services) = node.as_mapping().and_then(|m| m.mapping("services")) else {
        return;
    };
    c.bench_function("lookup_typed", |b| {
        b.iter(|| {
            services
                .mapping(black_box("svc500"))
                .and_then(|svc| svc.integer("port"))
        })
    });
}

criterion_group!(
    benches,
    bench_preprocess,
    bench_parse,
    bench_parse_stream,
    bench_canonicalize,
    bench_lookup
);
criterion_main!(benches);

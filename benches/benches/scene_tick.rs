// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for advancing, probing, and walking generated block scenes.
//!
//! The shapes cover the interesting regimes: wide and shallow (fan-out dominated),
//! deep and narrow (recursion dominated), and a balanced tree in between.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use thicket_block_gen::{GenParams, generate};
use thicket_block_tree::Scene;

fn build_scene(depth: usize, branching: usize) -> Scene {
    Scene::new(generate(&GenParams {
        depth,
        branching,
        seed: 17,
        ..GenParams::default()
    }))
}

fn scene_tick(c: &mut Criterion) {
    // (name, depth, branching) -> 73, 255, and 121 blocks respectively.
    let shapes = [
        ("shallow_wide", 3_usize, 8_usize),
        ("deep_narrow", 8, 2),
        ("balanced", 5, 3),
    ];

    let mut g = c.benchmark_group("scene_tick");
    for (name, depth, branching) in shapes {
        let mut advancing = build_scene(depth, branching);
        g.bench_function(BenchmarkId::new("advance", name), |b| {
            b.iter(|| {
                advancing.advance();
            });
        });

        let mut probing = build_scene(depth, branching);
        probing.advance();
        let point = Point::new(128.0, 96.0);
        g.bench_function(BenchmarkId::new("probe", name), |b| {
            b.iter(|| black_box(probing.probe(black_box(point))));
        });

        let mut walking = build_scene(depth, branching);
        for _ in 0..5 {
            walking.advance();
        }
        g.bench_function(BenchmarkId::new("visit", name), |b| {
            b.iter(|| {
                let mut visited = 0_usize;
                walking.visit(|block, placement| {
                    visited += 1;
                    black_box((block.size(), placement));
                });
                black_box(visited)
            });
        });
    }
    g.finish();
}

criterion_group!(benches, scene_tick);
criterion_main!(benches);

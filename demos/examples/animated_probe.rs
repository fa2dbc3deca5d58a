// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a generated scene the way a windowing shell would: tick it on a schedule,
//! feed it the latest pointer sample, and render the final frame to the console.
//!
//! Run with: `cargo run -p thicket_demos --example animated_probe -- --depth 4 --ticks 60`
//! Set `RUST_LOG=debug` for per-tick output.

use clap::Parser;
use kurbo::Point;
use thicket_block_gen::{GenParams, generate};
use thicket_block_tree::Scene;

/// Animate a generated block scene and probe it with a drifting pointer.
#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// Tree depth in levels.
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Children per interior block.
    #[arg(long, default_value_t = 3)]
    branching: usize,

    /// Seed for the generated scene.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 60)]
    ticks: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let params = GenParams {
        depth: args.depth,
        branching: args.branching,
        seed: args.seed,
        ..GenParams::default()
    };
    let mut scene = Scene::new(generate(&params));
    log::info!(
        "generated scene: {} blocks over {} levels (seed {})",
        scene.root().count(),
        scene.root().depth(),
        args.seed
    );

    // Last-value-wins pointer feed: the first few frames have no sample at all,
    // afterwards the newest position simply replaces the previous one.
    let mut pointer: Option<Point> = None;
    for i in 0..args.ticks {
        if i >= 5 {
            pointer = Some(Point::new(
                40.0 + f64::from(i) * 6.0,
                60.0 + f64::from(i) * 3.5,
            ));
        }
        match scene.tick(pointer) {
            Some(summary) => log::debug!(
                "tick {:3}: hits={} pruned={}",
                scene.ticks(),
                summary.hits,
                summary.pruned
            ),
            None => log::debug!("tick {:3}: no pointer sample yet", scene.ticks()),
        }
    }

    println!("final frame after {} ticks:", scene.ticks());
    scene.visit(|block, placement| {
        let origin = placement * Point::ORIGIN;
        let style = if block.is_hit() { "filled " } else { "outline" };
        println!(
            "  {style} {:6.1} x {:<6.1} at ({:8.2}, {:8.2})",
            block.size().width,
            block.size().height,
            origin.x,
            origin.y
        );
    });
}

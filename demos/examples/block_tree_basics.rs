// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small block scene by hand, run a few frame steps, and print what a
//! renderer would see.
//!
//! Run with: `cargo run -p thicket_demos --example block_tree_basics`

use kurbo::{Affine, Point, Size, Vec2};
use peniko::Color;
use thicket_block_tree::{Block, BlockParams, Scene};
use thicket_transform_stack::TransformStack;

fn main() {
    // A panel holding a drifting card, which in turn holds a spinning badge.
    let badge = Block::new(BlockParams {
        size: Size::new(24.0, 24.0),
        offset: Vec2::new(8.0, 8.0),
        color: Color::from_rgb8(0xb0, 0x4a, 0x5a),
        delta: Affine::rotate(0.1),
        ..BlockParams::default()
    });
    let card = Block::with_children(
        BlockParams {
            size: Size::new(120.0, 80.0),
            offset: Vec2::new(40.0, 30.0),
            color: Color::from_rgb8(0xd9, 0x7b, 0x2b),
            delta: Affine::translate(Vec2::new(2.0, 1.0)),
            ..BlockParams::default()
        },
        vec![badge],
    );
    let panel = Block::with_children(
        BlockParams {
            size: Size::new(320.0, 240.0),
            offset: Vec2::new(16.0, 16.0),
            color: Color::from_rgb8(0x3a, 0x6e, 0xa5),
            ..BlockParams::default()
        },
        vec![card],
    );

    let mut scene = Scene::new(panel);
    println!(
        "scene: {} blocks over {} levels",
        scene.root().count(),
        scene.root().depth()
    );

    // The pointer holds still while the card drifts underneath it.
    let pointer = Point::new(70.0, 60.0);
    for _ in 0..4 {
        if let Some(summary) = scene.tick(Some(pointer)) {
            println!(
                "tick {}: {} hit, {} pruned",
                scene.ticks(),
                summary.hits,
                summary.pruned
            );
        }
    }

    println!("\nrenderer view:");
    scene.visit(|block, placement| {
        let origin = placement * Point::ORIGIN;
        let style = if block.is_hit() { "filled " } else { "outline" };
        println!(
            "  {style} {:5.1} x {:<5.1} at ({:6.1}, {:6.1})",
            block.size().width,
            block.size().height,
            origin.x,
            origin.y
        );
    });

    // The same composition done by hand, for a renderer that owns its traversal.
    println!("\nmanual walk, global origins via a transform stack:");
    let mut stack = TransformStack::new();
    print_subtree(scene.root(), &mut stack, 0);
}

fn print_subtree(block: &Block, stack: &mut TransformStack, level: usize) {
    let global = stack.current() * Affine::translate(block.offset()) * Point::ORIGIN;
    println!(
        "  {:indent$}{:.0} x {:.0} block, origin at ({:.1}, {:.1})",
        "",
        block.size().width,
        block.size().height,
        global.x,
        global.y,
        indent = level * 2
    );
    stack.scoped(
        Affine::translate(block.offset()) * block.transform(),
        |stack| {
            for child in block.children() {
                print_subtree(child, stack, level + 1);
            }
        },
    );
}

// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seeded random block trees for demos, stress tests, and benches.
//!
//! Given a depth and a branching factor, [`generate`] builds a block tree where every
//! block gets a randomized but bounded per-tick delta (translation plus rotation) and a
//! fixed rectangle: children shrink per level, sit in a jittered row inside their
//! parent, and take their color from a per-level palette. Generation is fully
//! deterministic for equal [`GenParams`], so trees can be reproduced from a seed alone.
//!
//! The scene core accepts any tree regardless of origin; this crate just makes plausible
//! ones cheap to come by.
//!
//! ```
//! use thicket_block_gen::{GenParams, generate};
//! use thicket_block_tree::Scene;
//!
//! let params = GenParams {
//!     depth: 3,
//!     branching: 2,
//!     seed: 7,
//!     ..GenParams::default()
//! };
//! let mut scene = Scene::new(generate(&params));
//! assert_eq!(scene.root().count(), 7);
//!
//! scene.advance();
//! assert_ne!(scene.root().transform(), kurbo::Affine::IDENTITY);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Affine, Size, Vec2};
use peniko::Color;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thicket_block_tree::{Block, BlockParams};

/// One color per tree level, cycled when the tree is deeper than the palette.
const PALETTE: [Color; 6] = [
    Color::from_rgb8(0x3a, 0x6e, 0xa5), // steel
    Color::from_rgb8(0xd9, 0x7b, 0x2b), // amber
    Color::from_rgb8(0x5c, 0x8a, 0x4a), // moss
    Color::from_rgb8(0xb0, 0x4a, 0x5a), // brick
    Color::from_rgb8(0x6d, 0x5a, 0x9e), // heather
    Color::from_rgb8(0x2f, 0x8f, 0x8a), // teal
];

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenParams {
    /// Number of levels; zero or one yields a single block.
    pub depth: usize,
    /// Children per interior block; zero yields a single block.
    pub branching: usize,
    /// Size of the root rectangle.
    pub root_size: Size,
    /// Factor applied to both extents per level below the root.
    pub shrink: f64,
    /// Per-axis bound on each delta's translation component, in local units per tick.
    pub max_translation: f64,
    /// Bound on each delta's rotation, in radians per tick.
    pub max_rotation: f64,
    /// Seed for the generator's RNG; equal params reproduce the tree exactly.
    pub seed: u64,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            depth: 4,
            branching: 3,
            root_size: Size::new(512.0, 384.0),
            shrink: 0.55,
            max_translation: 2.0,
            max_rotation: 0.05,
            seed: 0,
        }
    }
}

/// Builds a randomized block tree per `params`.
///
/// The root sits at offset zero, so probing it in screen space needs no adjustment.
/// Deltas are drawn pre-order, parent before children, which is what makes equal
/// params reproduce equal trees.
pub fn generate(params: &GenParams) -> Block {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    build_level(params, &mut rng, params.root_size, Vec2::ZERO, 0)
}

fn build_level(
    params: &GenParams,
    rng: &mut SmallRng,
    size: Size,
    offset: Vec2,
    level: usize,
) -> Block {
    let delta = random_delta(params, rng);
    let children = if level + 1 < params.depth && params.branching > 0 {
        let child_size = Size::new(size.width * params.shrink, size.height * params.shrink);
        let step = size.width / params.branching as f64;
        (0..params.branching)
            .map(|slot| {
                // One slot per child across the parent's width, jittered but anchored.
                let jitter = Vec2::new(
                    rng.random_range(-0.25..=0.25) * step,
                    rng.random_range(-0.25..=0.25) * child_size.height,
                );
                let child_offset = Vec2::new(
                    slot as f64 * step + (step - child_size.width) / 2.0,
                    (size.height - child_size.height) / 2.0,
                ) + jitter;
                build_level(params, rng, child_size, child_offset, level + 1)
            })
            .collect()
    } else {
        Vec::new()
    };
    Block::with_children(
        BlockParams {
            size,
            offset,
            color: PALETTE[level % PALETTE.len()],
            delta,
            ..BlockParams::default()
        },
        children,
    )
}

fn random_delta(params: &GenParams, rng: &mut SmallRng) -> Affine {
    let translation = Vec2::new(
        rng.random_range(-params.max_translation..=params.max_translation),
        rng.random_range(-params.max_translation..=params.max_translation),
    );
    let rotation = rng.random_range(-params.max_rotation..=params.max_rotation);
    Affine::translate(translation) * Affine::rotate(rotation)
}

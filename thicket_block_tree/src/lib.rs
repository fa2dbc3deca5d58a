// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Block Tree: a kurbo-native animated block tree with point probing.
//!
//! A block tree is a hierarchy of rectangular regions, each carrying a fixed per-tick
//! delta transform. Every tick the delta composes onto the block's accumulated
//! transform, so motion compounds organically instead of incrementing linearly, and a
//! single screen-space point can be probed against the current state of every block
//! regardless of how deeply the coordinate spaces nest.
//!
//! - [`Block`] owns geometry (size, offset), a display color, the immutable delta, and
//!   its children; the tree is built once and owned exclusively, so cycles and shared
//!   children are unrepresentable.
//! - [`Scene`] wraps the root and is the sole writer of dynamic state:
//!   [`Scene::advance`] accumulates transforms, [`Scene::probe`] records hit flags,
//!   [`Scene::tick`] is the composed frame step, and [`Scene::visit`] walks the tree
//!   read-only with root-space placement transforms for a renderer.
//!
//! ## Per-tick passes
//!
//! Advance visits every block exactly once, parents before children, composing
//! `transform * delta` in the block's current local frame. Probe translates the point
//! by each block's offset for the half-open containment test, then maps the
//! offset-adjusted point through the inverse accumulated transform to reach the
//! children. A degenerate (non-invertible) accumulated transform prunes probing of
//! that subtree: descendants are marked not-hit and siblings are untouched, so a
//! collapsed branch degrades to "never hit" rather than failing the pass.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Affine, Point, Size, Vec2};
//! use thicket_block_tree::{Block, BlockParams, Scene};
//!
//! let child = Block::new(BlockParams {
//!     size: Size::new(10.0, 10.0),
//!     offset: Vec2::new(45.0, 45.0),
//!     ..BlockParams::default()
//! });
//! let root = Block::with_children(
//!     BlockParams {
//!         size: Size::new(100.0, 100.0),
//!         delta: Affine::translate(Vec2::new(1.0, 0.0)),
//!         ..BlockParams::default()
//!     },
//!     vec![child],
//! );
//!
//! let mut scene = Scene::new(root);
//! for _ in 0..3 {
//!     scene.advance();
//! }
//! let summary = scene.probe(Point::new(50.0, 50.0));
//!
//! // The root has drifted +3 in x; the probe reaches its child through the inverse map.
//! assert!(scene.root().is_hit());
//! assert_eq!(summary.hits, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod block;
mod scene;
mod util;

pub use block::{Block, BlockFlags, BlockParams};
pub use scene::{ProbeSummary, Scene};

// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::{vec, vec::Vec};
use kurbo::{Affine, Point};
use thicket_transform_stack::TransformStack;

use crate::block::{Block, BlockFlags};
use crate::util::{checked_inverse, half_open_contains};

/// Summary of one probe pass.
///
/// The scene-level analogue of a damage report: a cheap observable account of what the
/// pass did, without access to per-block internals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    /// Blocks whose containment test passed.
    pub hits: usize,
    /// Subtrees whose children went unprobed because the parent's accumulated
    /// transform was degenerate; every block below such a parent is marked not-hit.
    pub pruned: usize,
}

/// A block tree plus the two per-tick passes that animate and probe it.
///
/// The scene owns the root [`Block`] and is the only writer of per-block dynamic
/// state: [`advance`](Self::advance) is the sole mutator of accumulated transforms,
/// [`probe`](Self::probe) the sole mutator of hit flags. Everything else observes.
#[derive(Clone, Debug)]
pub struct Scene {
    root: Block,
    ticks: u64,
}

impl Scene {
    /// Creates a scene over `root`. No ticks have elapsed yet.
    pub fn new(root: Block) -> Self {
        Self { root, ticks: 0 }
    }

    /// The root block.
    pub fn root(&self) -> &Block {
        &self.root
    }

    /// Number of advances applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances every block by one tick: `transform <- transform * delta`.
    ///
    /// The delta composes on the right, in the block's current local frame, so motion
    /// compounds instead of incrementing linearly. Each block is visited exactly once,
    /// parents before children; subtrees are independent, so sibling order cannot
    /// affect the result.
    pub fn advance(&mut self) {
        let mut stack: Vec<&mut Block> = vec![&mut self.root];
        while let Some(block) = stack.pop() {
            block.transform = block.transform * block.delta;
            stack.extend(block.children.iter_mut().rev());
        }
        self.ticks += 1;
    }

    /// Probes the tree with `point`, given in the root's coordinate space, recording
    /// containment in every block's hit flag.
    ///
    /// Per block: the point is translated by the block's offset and tested against the
    /// half-open local rectangle (the rectangle test sees translation only, never the
    /// accumulated transform). Children are then probed in the block's content space:
    /// the offset-adjusted point mapped through the inverse of the accumulated
    /// transform, every sibling receiving the same point.
    ///
    /// A degenerate accumulated transform cannot be inverted; that block's descendants
    /// are marked not-hit and skipped, the block itself and its siblings are
    /// unaffected, and the pruning is counted in the returned summary. Probing never
    /// fails and never touches a transform.
    pub fn probe(&mut self, point: Point) -> ProbeSummary {
        let mut summary = ProbeSummary::default();
        probe_block(&mut self.root, point, &mut summary);
        summary
    }

    /// Runs one frame step: advance, then probe with the latest pointer sample.
    ///
    /// `pointer` follows last-value-wins pointer feeds: `None` means no sample has
    /// ever been recorded, in which case probing is skipped for this tick and hit
    /// flags keep their previous values.
    pub fn tick(&mut self, pointer: Option<Point>) -> Option<ProbeSummary> {
        self.advance();
        pointer.map(|point| self.probe(point))
    }

    /// Walks the tree depth-first, parents before children, handing `f` each block
    /// together with its placement transform.
    ///
    /// The placement transform is the root-to-block composition of ancestor offsets
    /// and accumulated transforms, ending with the block's own offset; applying it to
    /// the local rectangle `[0, size)` yields the block's geometry in root space, so a
    /// renderer can draw and label global positions without re-walking ancestors.
    pub fn visit(&self, mut f: impl FnMut(&Block, Affine)) {
        let mut stack = TransformStack::new();
        visit_block(&self.root, &mut stack, &mut f);
    }
}

fn probe_block(block: &mut Block, point: Point, summary: &mut ProbeSummary) {
    let local = point - block.offset;
    block.hit = block.flags.contains(BlockFlags::PICKABLE) && half_open_contains(block.size, local);
    if block.hit {
        summary.hits += 1;
    }
    if block.children.is_empty() {
        return;
    }
    let Some(inverse) = checked_inverse(block.transform) else {
        summary.pruned += 1;
        for child in &mut block.children {
            clear_hits(child);
        }
        return;
    };
    let child_point = inverse * local;
    for child in &mut block.children {
        probe_block(child, child_point, summary);
    }
}

fn clear_hits(block: &mut Block) {
    block.hit = false;
    for child in &mut block.children {
        clear_hits(child);
    }
}

fn visit_block(block: &Block, stack: &mut TransformStack, f: &mut impl FnMut(&Block, Affine)) {
    f(block, stack.current() * Affine::translate(block.offset));
    stack.scoped(Affine::translate(block.offset) * block.transform, |stack| {
        for child in &block.children {
            visit_block(child, stack, f);
        }
    });
}

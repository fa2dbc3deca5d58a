// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The block type: one transformable rectangular region in the tree.

use alloc::vec::Vec;
use kurbo::{Affine, Size, Vec2};
use peniko::Color;

bitflags::bitflags! {
    /// Block flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u8 {
        /// Block is visible (drawn by the renderer).
        const VISIBLE  = 0b0000_0001;
        /// Block is pickable (participates in probing). A block without this flag
        /// records a miss without a containment test; its children are still probed.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for BlockFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Construction-time parameters for a [`Block`].
///
/// Everything here is fixed for the block's lifetime; only the accumulated transform
/// and the hit flag change afterwards, and only through the scene's passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockParams {
    /// Size of the local rectangle, spanning `[0, width) x [0, height)` with the
    /// origin at local `(0, 0)`. Non-positive extents simply never contain a point.
    pub size: Size,
    /// Position of the local origin in the parent's post-transform space.
    pub offset: Vec2,
    /// Display attribute carried for the renderer; never consulted by the passes.
    pub color: Color,
    /// Per-tick transform, composed onto the accumulated transform by each advance.
    pub delta: Affine,
    /// Visibility and picking flags.
    pub flags: BlockFlags,
}

impl Default for BlockParams {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            offset: Vec2::ZERO,
            color: Color::TRANSPARENT,
            delta: Affine::IDENTITY,
            flags: BlockFlags::default(),
        }
    }
}

/// One transformable rectangular region, owning its children exclusively.
///
/// A block's accumulated transform starts at the identity and is advanced once per
/// tick; its hit flag reflects the most recent probe. Neither is writable from
/// outside the scene's passes, which keeps the tree's invariants enforceable by
/// those two operations alone.
#[derive(Clone, Debug)]
pub struct Block {
    pub(crate) size: Size,
    pub(crate) offset: Vec2,
    pub(crate) color: Color,
    pub(crate) delta: Affine,
    pub(crate) flags: BlockFlags,
    /// Composition of every delta applied so far; maps the block's local child
    /// space into the block's own frame.
    pub(crate) transform: Affine,
    pub(crate) hit: bool,
    pub(crate) children: Vec<Block>,
}

impl Block {
    /// Creates a leaf block.
    pub fn new(params: BlockParams) -> Self {
        Self::with_children(params, Vec::new())
    }

    /// Creates a block owning `children`, in draw/traversal order.
    pub fn with_children(params: BlockParams, children: Vec<Self>) -> Self {
        Self {
            size: params.size,
            offset: params.offset,
            color: params.color,
            delta: params.delta,
            flags: params.flags,
            transform: Affine::IDENTITY,
            hit: false,
            children,
        }
    }

    /// Size of the local rectangle.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Position of the local origin in the parent's post-transform space.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Display color carried for the renderer.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The fixed per-tick delta transform.
    pub fn delta(&self) -> Affine {
        self.delta
    }

    /// Visibility and picking flags.
    pub fn flags(&self) -> BlockFlags {
        self.flags
    }

    /// The accumulated transform: every delta applied since creation, identity at
    /// tick zero.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Whether the most recent probe landed inside this block's rectangle.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Child blocks in draw/traversal order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Number of blocks in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or_default()
    }
}

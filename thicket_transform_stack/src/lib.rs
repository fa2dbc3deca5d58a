// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A push/pop stack of composed affine transforms for tree walks.
//!
//! While a traversal descends a transform hierarchy it needs, at each node, the full
//! root-to-node composition without re-walking ancestors. [`TransformStack`] keeps that
//! running product: [`push`](TransformStack::push) composes a transform onto it and
//! remembers the product from before the push, and [`pop`](TransformStack::pop) restores
//! that remembered product. Because restoration replays the stored value instead of
//! multiplying by an inverse, it is exact even when a pushed transform is singular.
//!
//! Push and pop must be paired per subtree or transform state leaks from one sibling
//! subtree into the next. [`scoped`](TransformStack::scoped) is the structured form:
//! it pushes, runs a closure, and always pops.
//!
//! ```
//! use kurbo::{Affine, Point, Vec2};
//! use thicket_transform_stack::TransformStack;
//!
//! let mut stack = TransformStack::new();
//! stack.scoped(Affine::translate(Vec2::new(10.0, 0.0)), |stack| {
//!     stack.scoped(Affine::scale(2.0), |stack| {
//!         assert_eq!(stack.current() * Point::new(1.0, 1.0), Point::new(12.0, 2.0));
//!     });
//!     // Back in the outer scope, the sibling subtree sees only the translation.
//!     assert_eq!(stack.current() * Point::new(1.0, 1.0), Point::new(11.0, 1.0));
//! });
//! assert_eq!(stack.depth(), 0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Affine;
use smallvec::SmallVec;

/// Nesting depth covered without heap allocation. Deeper walks spill to the heap.
const INLINE_DEPTH: usize = 16;

/// A stack of composed transforms along the current root-to-node path.
///
/// The running product starts at the identity. Each stack entry is the product that was
/// current before the corresponding push.
#[derive(Clone, Debug)]
pub struct TransformStack {
    prior: SmallVec<[Affine; INLINE_DEPTH]>,
    current: Affine,
}

impl TransformStack {
    /// Creates an empty stack whose running product is the identity.
    pub fn new() -> Self {
        Self {
            prior: SmallVec::new(),
            current: Affine::IDENTITY,
        }
    }

    /// The composed transform from the root of the walk to the current scope.
    pub fn current(&self) -> Affine {
        self.current
    }

    /// The number of pushes that have not been popped yet.
    pub fn depth(&self) -> usize {
        self.prior.len()
    }

    /// Composes `transform` onto the running product, remembering the prior product.
    ///
    /// The new product is `current * transform`, so the pushed transform applies in the
    /// coordinate space established by the pushes above it.
    pub fn push(&mut self, transform: Affine) {
        self.prior.push(self.current);
        self.current = self.current * transform;
    }

    /// Restores the product from before the matching [`push`](Self::push).
    ///
    /// Returns `false` if the stack was already at the root scope, in which case the
    /// product is left untouched.
    pub fn pop(&mut self) -> bool {
        let Some(prior) = self.prior.pop() else {
            return false;
        };
        self.current = prior;
        true
    }

    /// Runs `f` with `transform` pushed, popping again when the closure returns.
    ///
    /// This is the structured form of [`push`](Self::push)/[`pop`](Self::pop); use it
    /// per subtree and sibling subtrees cannot observe each other's transforms.
    pub fn scoped<R>(&mut self, transform: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push(transform);
        let result = f(self);
        self.pop();
        result
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Vec2};

    #[test]
    fn starts_at_identity() {
        let stack = TransformStack::new();
        assert_eq!(stack.current(), Affine::IDENTITY);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn push_composes_on_the_right() {
        let mut stack = TransformStack::new();
        stack.push(Affine::translate(Vec2::new(10.0, 0.0)));
        stack.push(Affine::scale(2.0));

        // Scale applies in the translated frame: p -> translate(scale(p)).
        assert_eq!(stack.current() * Point::new(1.0, 1.0), Point::new(12.0, 2.0));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn pop_restores_prior_product_exactly() {
        let mut stack = TransformStack::new();
        stack.push(Affine::translate(Vec2::new(3.0, 4.0)));
        let outer = stack.current();

        // A singular push must still restore cleanly; no inverse is involved.
        stack.push(Affine::scale(0.0));
        assert_eq!(stack.current().determinant(), 0.0);
        assert!(stack.pop());

        assert_eq!(stack.current(), outer);
        assert!(stack.pop());
        assert_eq!(stack.current(), Affine::IDENTITY);
    }

    #[test]
    fn pop_at_root_scope_is_refused() {
        let mut stack = TransformStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.current(), Affine::IDENTITY);

        stack.push(Affine::scale(2.0));
        assert!(stack.pop());
        assert!(!stack.pop());
    }

    #[test]
    fn scoped_isolates_sibling_subtrees() {
        let mut stack = TransformStack::new();
        stack.scoped(Affine::translate(Vec2::new(1.0, 0.0)), |stack| {
            let first = stack.scoped(Affine::translate(Vec2::new(0.0, 5.0)), |stack| {
                stack.current() * Point::ORIGIN
            });
            assert_eq!(first, Point::new(1.0, 5.0));

            // The second sibling starts from the parent product, not the first sibling's.
            let second = stack.scoped(Affine::translate(Vec2::new(0.0, 7.0)), |stack| {
                stack.current() * Point::ORIGIN
            });
            assert_eq!(second, Point::new(1.0, 7.0));
        });
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scoped_returns_the_closure_value() {
        let mut stack = TransformStack::new();
        let depth = stack.scoped(Affine::IDENTITY, |stack| stack.depth());
        assert_eq!(depth, 1);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn deep_nesting_spills_past_inline_capacity() {
        let mut stack = TransformStack::new();
        for _ in 0..(INLINE_DEPTH * 3) {
            stack.push(Affine::translate(Vec2::new(1.0, 0.0)));
        }
        assert_eq!(stack.depth(), INLINE_DEPTH * 3);
        assert_eq!(
            stack.current() * Point::ORIGIN,
            Point::new((INLINE_DEPTH * 3) as f64, 0.0)
        );

        while stack.pop() {}
        assert_eq!(stack.current(), Affine::IDENTITY);
        assert_eq!(stack.depth(), 0);
    }
}

// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Determinant magnitude below which an accumulated transform is treated as
/// non-invertible. Kurbo's `Affine::inverse` divides by the determinant without
/// signaling, so degeneracy has to be decided before inverting.
pub(crate) const MIN_DETERMINANT: f64 = 1e-12;

/// Containment for the local rectangle `[0, size.width) x [0, size.height)`.
///
/// Half-open on the right/bottom, so a point exactly on those edges misses while the
/// top/left edges are included. Non-positive extents contain nothing.
pub(crate) fn half_open_contains(size: Size, point: Point) -> bool {
    point.x >= 0.0 && point.x < size.width && point.y >= 0.0 && point.y < size.height
}

/// Inverts `transform`, or returns `None` when its determinant magnitude is below
/// [`MIN_DETERMINANT`].
pub(crate) fn checked_inverse(transform: Affine) -> Option<Affine> {
    if transform.determinant().abs() < MIN_DETERMINANT {
        None
    } else {
        Some(transform.inverse())
    }
}

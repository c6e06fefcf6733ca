// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines, used to extend offset edges into sharp joints.

use crate::{Point, Vec2};

/// An infinite line through `p0` and `p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// A point on the line.
    pub p0: Point,
    /// A second point on the line.
    pub p1: Point,
}

impl Line {
    /// Create a new line through two points.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The line through `origin` pointing along `direction`.
    #[inline]
    pub fn from_direction(origin: Point, direction: Vec2) -> Self {
        Self::new(origin, origin + direction)
    }

    /// Computes the point where two lines, if extended to infinity, would cross.
    ///
    /// Returns `None` for parallel lines.
    #[inline]
    pub fn crossing_point(self, other: Self) -> Option<Point> {
        let ab = self.p1 - self.p0;
        let cd = other.p1 - other.p0;
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return None;
        }
        let h = ab.cross(self.p0 - other.p0) / pcd;
        Some(other.p0 + cd * h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_point() {
        let h = Line::new((0.0, 1.0), (4.0, 1.0));
        let v = Line::from_direction(Point::new(2.0, -3.0), Vec2::new(0.0, 0.5));
        let p = h.crossing_point(v).unwrap();
        assert!((p - Point::new(2.0, 1.0)).hypot() < 1e-12, "got {p:?}");
    }

    #[test]
    fn parallel_lines_do_not_cross() {
        let a = Line::new((0.0, 0.0), (1.0, 1.0));
        let b = Line::new((0.0, 1.0), (1.0, 2.0));
        assert_eq!(a.crossing_point(b), None);
    }
}

// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width control points and the blending rule between them.

use core::f64::consts::PI;

use crate::common::EPSILON;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// What happens on one face of a [`WidthPoint`].
///
/// [`SideType::Interpolate`] blends the width smoothly into the neighboring
/// width point; every other value ends the stroke here with a cap.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideType {
    /// Half-circle cap with radius equal to the half width.
    Rounded,
    /// Square cap extending by the half width.
    Squared,
    /// Triangular cap whose apex lies the half width away.
    Peaked,
    /// Cap cut flush at the width point.
    Flat,
    /// No cap: blend into the neighboring width point.
    #[default]
    Interpolate,
}

impl SideType {
    /// Whether this face blends instead of capping.
    #[inline]
    pub fn is_interpolate(self) -> bool {
        self == Self::Interpolate
    }
}

/// A width control point along a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidthPoint {
    /// Position along the spline, relative to `lower_bound..upper_bound`.
    pub position: f64,
    /// Width multiplier at this point.
    pub width: f64,
    /// Face looking back towards the start of the spline.
    pub side_before: SideType,
    /// Face looking forward towards the end of the spline.
    pub side_after: SideType,
    /// Whether the point was produced by dash expansion.
    pub dash: bool,
    /// Position mapped to 0.
    pub lower_bound: f64,
    /// Position mapped to 1.
    pub upper_bound: f64,
}

impl Default for WidthPoint {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl WidthPoint {
    /// A width point that blends on both faces.
    #[inline]
    pub fn new(position: f64, width: f64) -> Self {
        Self {
            position,
            width,
            side_before: SideType::Interpolate,
            side_after: SideType::Interpolate,
            dash: false,
            lower_bound: 0.0,
            upper_bound: 1.0,
        }
    }

    /// Builder method for setting both faces.
    #[must_use]
    pub fn with_sides(mut self, before: SideType, after: SideType) -> Self {
        self.side_before = before;
        self.side_after = after;
        self
    }

    /// Builder method for setting the position bounds.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub(crate) fn dash_boundary(position: f64, before: SideType, after: SideType) -> Self {
        Self {
            dash: true,
            ..Self::new(position, 1.0).with_sides(before, after)
        }
    }

    /// Position mapped through the bounds into [0, 1].
    ///
    /// A looping profile wraps positions outside [0, 1]; otherwise they are
    /// clamped.
    pub fn norm_position(&self, looped: bool) -> f64 {
        let range = self.upper_bound - self.lower_bound;
        let p = if range.abs() > EPSILON {
            (self.position - self.lower_bound) / range
        } else {
            self.position
        };
        if looped {
            if (0.0..=1.0).contains(&p) {
                p
            } else {
                p - p.floor()
            }
        } else {
            p.clamp(0.0, 1.0)
        }
    }

    /// Width contributed through `side`: zero when it caps.
    #[inline]
    pub(crate) fn face_width(&self, side: SideType) -> f64 {
        if side.is_interpolate() {
            self.width
        } else {
            0.0
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.width.is_finite()
            && self.lower_bound.is_finite()
            && self.upper_bound.is_finite()
    }
}

/// Width at position `p` between two width points.
///
/// Positions are read as already normalized. When `next` lies before
/// `prev` the interval is taken to wrap around 1.0. The blend weight eases
/// from linear (`smoothness` 0) to a half-cosine (`smoothness` 1). A face
/// that caps contributes zero width instead of its own. At either control
/// point the point's width is returned exactly.
pub fn interpolate_width(prev: &WidthPoint, next: &WidthPoint, p: f64, smoothness: f64) -> f64 {
    let pp = prev.position;
    let mut np = next.position;
    if p == np {
        return next.width;
    }
    if p == pp {
        return prev.width;
    }
    let mut p = p;
    if np < pp {
        np += 1.0;
        if p < pp {
            p += 1.0;
        }
    }
    if np <= pp {
        return prev.width;
    }
    if p < pp {
        return prev.face_width(prev.side_before);
    }
    if p > np {
        return next.face_width(next.side_after);
    }
    let pw = prev.face_width(prev.side_after);
    let nw = next.face_width(next.side_before);
    let u = (p - pp) / (np - pp);
    let eased = (1.0 - (PI * u).cos()) * 0.5;
    let k = u + smoothness * (eased - u);
    pw + (nw - pw) * k
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn exact_at_control_points() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = WidthPoint::new(rng.random_range(0.0..0.5), rng.random_range(0.0..3.0));
            let b = WidthPoint::new(rng.random_range(0.5..1.0), rng.random_range(0.0..3.0))
                .with_sides(SideType::Rounded, SideType::Flat);
            let s = rng.random();
            assert_eq!(interpolate_width(&a, &b, a.position, s), a.width);
            assert_eq!(interpolate_width(&a, &b, b.position, s), b.width);
            // Wrapped interval, same invariant.
            assert_eq!(interpolate_width(&b, &a, a.position, s), a.width);
        }
    }

    #[test]
    fn linear_and_smooth_blend() {
        let a = WidthPoint::new(0.0, 1.0);
        let b = WidthPoint::new(1.0, 3.0);
        assert!((interpolate_width(&a, &b, 0.25, 0.0) - 1.5).abs() < 1e-12);
        let eased = 1.0 + 2.0 * (1.0 - (PI * 0.25).cos()) * 0.5;
        assert!((interpolate_width(&a, &b, 0.25, 1.0) - eased).abs() < 1e-12);
        // Both blends agree in the middle.
        assert!((interpolate_width(&a, &b, 0.5, 0.3) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn capped_face_contributes_zero() {
        let a = WidthPoint::new(0.0, 2.0).with_sides(SideType::Interpolate, SideType::Squared);
        let b = WidthPoint::new(1.0, 2.0);
        assert!((interpolate_width(&a, &b, 0.5, 0.0) - 1.0).abs() < 1e-12);
        assert_eq!(interpolate_width(&a, &b, 0.0, 0.0), 2.0);
    }

    #[test]
    fn wraps_across_seam() {
        let last = WidthPoint::new(0.8, 1.0);
        let first = WidthPoint::new(0.2, 3.0);
        // 0.0 sits halfway between 0.8 and 1.2.
        assert!((interpolate_width(&last, &first, 0.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((interpolate_width(&last, &first, 1.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((interpolate_width(&last, &first, 0.9, 0.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn norm_position_bounds() {
        let wp = WidthPoint::new(15.0, 1.0).with_bounds(10.0, 20.0);
        assert_eq!(wp.norm_position(false), 0.5);
        let wp = WidthPoint::new(1.25, 1.0);
        assert_eq!(wp.norm_position(false), 1.0);
        assert_eq!(wp.norm_position(true), 0.25);
        assert_eq!(WidthPoint::new(1.0, 1.0).norm_position(true), 1.0);
        assert_eq!(WidthPoint::new(-0.25, 1.0).norm_position(true), 0.75);
    }
}

// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hermite splines: vertices with tangents, optionally closed.

use alloc::vec::Vec;

use crate::{CubicBez, OutlineError, Point, Vec2};

/// A spline control point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplinePoint {
    /// Position of the vertex.
    pub vertex: Point,
    /// Tangent of the segment arriving at this vertex.
    pub tangent_in: Vec2,
    /// Tangent of the segment leaving this vertex. Only read when
    /// `split_tangent` is set.
    pub tangent_out: Vec2,
    /// Whether the two tangents are independent, making a corner.
    pub split_tangent: bool,
    /// Width multiplier of the vertex.
    pub width: f64,
}

impl SplinePoint {
    /// A smooth vertex with one tangent on both sides.
    #[inline]
    pub fn new(vertex: impl Into<Point>, tangent: impl Into<Vec2>) -> Self {
        let tangent = tangent.into();
        Self {
            vertex: vertex.into(),
            tangent_in: tangent,
            tangent_out: tangent,
            split_tangent: false,
            width: 1.0,
        }
    }

    /// A corner vertex with independent incoming and outgoing tangents.
    #[inline]
    pub fn split(
        vertex: impl Into<Point>,
        tangent_in: impl Into<Vec2>,
        tangent_out: impl Into<Vec2>,
    ) -> Self {
        Self {
            vertex: vertex.into(),
            tangent_in: tangent_in.into(),
            tangent_out: tangent_out.into(),
            split_tangent: true,
            width: 1.0,
        }
    }

    /// Builder method for setting the width multiplier.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Tangent of the segment arriving at this vertex.
    #[inline]
    pub fn incoming(&self) -> Vec2 {
        self.tangent_in
    }

    /// Tangent of the segment leaving this vertex.
    #[inline]
    pub fn outgoing(&self) -> Vec2 {
        if self.split_tangent {
            self.tangent_out
        } else {
            self.tangent_in
        }
    }

    /// Whether the offset curves may be discontinuous at this vertex.
    ///
    /// True for split tangents and for degenerate (zero) tangents, whose
    /// direction is taken from the curve instead.
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.split_tangent || self.incoming().is_zero() || self.outgoing().is_zero()
    }

    fn is_finite(&self) -> bool {
        self.vertex.is_finite()
            && self.tangent_in.is_finite()
            && self.tangent_out.is_finite()
            && self.width.is_finite()
    }
}

/// An ordered sequence of [`SplinePoint`]s.
///
/// Segment `i` runs from point `i` to point `i + 1`. A looped spline has an
/// extra segment from the last point back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spline {
    /// The control points.
    pub points: Vec<SplinePoint>,
    /// Whether the last point connects back to the first.
    pub looped: bool,
}

impl Spline {
    /// Create a spline from control points.
    pub fn new(points: Vec<SplinePoint>, looped: bool) -> Self {
        Self { points, looped }
    }

    /// A spline of straight edges through `vertices`.
    ///
    /// Every vertex gets split tangents equal to its adjoining edge vectors,
    /// so each segment is a uniformly parametrized line.
    pub fn polyline(vertices: &[Point], looped: bool) -> Self {
        let n = vertices.len();
        let edge = |i: usize| vertices[(i + 1) % n] - vertices[i];
        let points = (0..n)
            .map(|i| {
                let tangent_out = if looped || i + 1 < n {
                    edge(i)
                } else if i > 0 {
                    edge(i - 1)
                } else {
                    Vec2::ZERO
                };
                let tangent_in = if looped {
                    edge((i + n - 1) % n)
                } else if i > 0 {
                    edge(i - 1)
                } else {
                    tangent_out
                };
                SplinePoint::split(vertices[i], tangent_in, tangent_out)
            })
            .collect();
        Self { points, looped }
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the spline has no control points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of Hermite segments.
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 => 0,
            n if self.looped => n,
            n => n - 1,
        }
    }

    /// The Hermite segment `i` as a cubic Bézier.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`Spline::segment_count`].
    pub fn segment(&self, i: usize) -> CubicBez {
        assert!(i < self.segment_count(), "segment {i} out of range");
        let a = &self.points[i];
        let b = &self.points[(i + 1) % self.points.len()];
        CubicBez::from_hermite(a.vertex, a.outgoing(), b.vertex, b.incoming())
    }

    /// Parametric position of the start of segment `i`.
    ///
    /// The position after the last segment is exactly 1.0.
    pub fn vertex_position(&self, i: usize) -> f64 {
        let n = self.segment_count();
        if n == 0 || i >= n {
            1.0
        } else {
            i as f64 / n as f64
        }
    }

    pub(crate) fn check_finite(&self) -> Result<(), OutlineError> {
        if self.points.iter().all(SplinePoint::is_finite) {
            Ok(())
        } else {
            Err(OutlineError::NonFinite("spline point"))
        }
    }
}

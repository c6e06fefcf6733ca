// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments, built from Hermite data.

use crate::{ParamCurve, ParamCurveDeriv, Point, QuadBez, Vec2};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// Start point.
    pub p0: Point,
    /// Control point 1.
    pub p1: Point,
    /// Control point 2.
    pub p2: Point,
    /// End point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The cubic Hermite curve from `p0` to `p1`, leaving `p0` with
    /// derivative `t0` and arriving at `p1` with derivative `t1`.
    #[inline]
    pub fn from_hermite(p0: Point, t0: Vec2, p1: Point, t1: Vec2) -> Self {
        Self {
            p0,
            p1: p0 + t0 * (1.0 / 3.0),
            p2: p1 - t1 * (1.0 / 3.0),
            p3: p1,
        }
    }

    /// Length of the polyline through `n + 1` evenly spaced parameters.
    ///
    /// This is the arc length estimate the outline works with: it matches
    /// the sampling density of the walk rather than a tolerance.
    pub fn sampled_arclen(&self, n: usize) -> f64 {
        let n = n.max(1);
        let mut last = self.p0;
        let mut len = 0.0;
        for i in 1..=n {
            let p = self.eval(i as f64 / n as f64);
            len += p.distance(last);
            last = p;
        }
        len
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveDeriv for CubicBez {
    type DerivResult = QuadBez;

    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, ParamCurve, ParamCurveDeriv, Point, Vec2};

    #[test]
    fn cubicbez_deriv() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < delta * 2.0, "t = {t}");
        }
    }

    #[test]
    fn hermite_endpoints_and_tangents() {
        let p0 = Point::new(1.0, 2.0);
        let p1 = Point::new(5.0, -1.0);
        let t0 = Vec2::new(3.0, 6.0);
        let t1 = Vec2::new(-2.0, 1.0);
        let c = CubicBez::from_hermite(p0, t0, p1, t1);
        let d = c.deriv();
        assert_eq!(c.start(), p0);
        assert_eq!(c.end(), p1);
        assert!((d.start().to_vec2() - t0).hypot() < 1e-12);
        assert!((d.end().to_vec2() - t1).hypot() < 1e-12);
    }

    #[test]
    fn sampled_arclen_of_straight_hermite() {
        let c = CubicBez::from_hermite(
            Point::ZERO,
            Vec2::new(10.0, 0.0),
            Point::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((c.sampled_arclen(50) - 10.0).abs() < 1e-9);
    }
}

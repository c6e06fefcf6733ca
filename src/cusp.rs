// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joints at spline vertices where the tangent changes direction.

use crate::common::{CUSP_THRESHOLD, SAMPLES, SPIKE_AMOUNT};
use crate::polygon::Sides;
use crate::{CubicBez, Line, ParamCurve, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Defines the joint built at a corner of the spline.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CuspStyle {
    /// The offset edges are extended to their intersection point.
    #[default]
    Sharp,
    /// An arc around the vertex.
    Rounded,
    /// A straight line connecting the offset edges.
    Bevel,
}

/// Number of samples on a rounded joint.
const ROUND_STEPS: usize = SAMPLES.div_ceil(4);

/// Emit the joint at `vertex` between a segment arriving along `last` and
/// one leaving along `curr`, at half width `w`.
///
/// Only the convex side gets extra points; the concave side is left to the
/// overlapping offset points of the two segments.
pub(crate) fn add_cusp(
    sides: &mut Sides,
    style: CuspStyle,
    vertex: Point,
    curr: Vec2,
    last: Vec2,
    w: f64,
) {
    let (Some(last), Some(curr)) = (last.try_normalize(), curr.try_normalize()) else {
        return;
    };
    let n1 = last.turn_90();
    let n2 = curr.turn_90();
    // Positive for a left turn, whose convex side is side b.
    let cross = n1.cross(n2);
    let (outer, sign) = if cross > 0.0 {
        (&mut sides.b, -1.0)
    } else {
        (&mut sides.a, 1.0)
    };
    match style {
        CuspStyle::Sharp => {
            if cross.abs() > CUSP_THRESHOLD {
                let edge1 = Line::from_direction(vertex + n1 * (sign * w), last);
                let edge2 = Line::from_direction(vertex + n2 * (sign * w), curr);
                if let Some(p) = edge1.crossing_point(edge2) {
                    outer.push(p);
                }
            } else if cross != 0.0 && (n1 - n2).hypot() > 1.0 {
                let amount =
                    (cross.abs() / CUSP_THRESHOLD).max(0.0) * (SPIKE_AMOUNT - 1.0) + 1.0;
                if let Some(dir) = (n1 + n2).try_normalize() {
                    outer.push(vertex + dir * (sign * w * amount));
                }
            }
        }
        CuspStyle::Rounded => {
            if cross == 0.0 {
                return;
            }
            let r1 = n1 * (sign * w);
            let r2 = n2 * (sign * w);
            let sweep = r1.cross(r2).atan2(r1.dot(r2));
            let k = 4.0 * (sweep * 0.25).tan();
            let arc = CubicBez::from_hermite(
                vertex + r1,
                r1.turn_90() * k,
                vertex + r2,
                r2.turn_90() * k,
            );
            for i in 0..ROUND_STEPS {
                outer.push(arc.eval(4.0 * i as f64 / SAMPLES as f64));
            }
        }
        CuspStyle::Bevel => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EAST: Vec2 = Vec2::new(1.0, 0.0);
    const NORTH: Vec2 = Vec2::new(0.0, 1.0);
    const SOUTH: Vec2 = Vec2::new(0.0, -1.0);

    fn cusp(style: CuspStyle, curr: Vec2, last: Vec2, w: f64) -> Sides {
        let mut sides = Sides::default();
        add_cusp(&mut sides, style, Point::ZERO, curr, last, w);
        sides
    }

    #[test]
    fn sharp_left_turn_miters_side_b() {
        let s = cusp(CuspStyle::Sharp, NORTH, EAST, 0.5);
        assert!(s.a.is_empty());
        assert_eq!(s.b.len(), 1);
        assert!((s.b[0] - Point::new(0.5, -0.5)).hypot() < 1e-12, "{:?}", s.b[0]);
    }

    #[test]
    fn sharp_right_turn_miters_side_a() {
        let s = cusp(CuspStyle::Sharp, SOUTH, EAST * 3.0, 1.0);
        assert!(s.b.is_empty());
        assert!((s.a[0] - Point::new(1.0, 1.0)).hypot() < 1e-12, "{:?}", s.a[0]);
    }

    #[test]
    fn sharp_shallow_turn_adds_nothing() {
        let s = cusp(CuspStyle::Sharp, Vec2::new(1.0, 0.17), EAST, 1.0);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn sharp_hairpin_spikes_forward() {
        let s = cusp(CuspStyle::Sharp, Vec2::new(-1.0, 0.1), EAST, 1.0);
        assert!(s.a.is_empty());
        assert_eq!(s.b.len(), 1);
        let p = s.b[0];
        assert!(p.x > 1.0 && p.x < SPIKE_AMOUNT, "spike at {p:?}");
    }

    #[test]
    fn rounded_follows_the_circle() {
        let s = cusp(CuspStyle::Rounded, NORTH, EAST, 2.0);
        assert!(s.a.is_empty());
        assert_eq!(s.b.len(), ROUND_STEPS);
        assert!((s.b[0] - Point::new(0.0, -2.0)).hypot() < 1e-12);
        for p in &s.b {
            let r = p.to_vec2().hypot();
            assert!((r - 2.0).abs() < 2.0e-3, "radius {r}");
            assert!(p.x >= -1e-12 && p.y <= 1e-12, "{p:?} is not on the outer quarter");
        }
    }

    #[test]
    fn bevel_and_degenerate_add_nothing() {
        assert_eq!(cusp(CuspStyle::Bevel, NORTH, EAST, 1.0).len(), 0);
        assert_eq!(cusp(CuspStyle::Sharp, Vec2::ZERO, EAST, 1.0).len(), 0);
    }
}

// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End caps at width points whose faces do not blend.

use crate::common::{ROUND_END_FACTOR, SAMPLES};
use crate::polygon::Sides;
use crate::{CubicBez, ParamCurve, Point, SideType, Vec2, WidthPoint};

/// Number of samples on each half of a rounded tip.
const ROUND_STEPS: usize = SAMPLES.div_ceil(4);

/// Emit the caps of `wp` at `vertex`.
///
/// `tangent` is the unit direction of travel and `w` the half width. The
/// before face caps backwards and the after face forwards, each on its own.
pub(crate) fn add_tip(sides: &mut Sides, vertex: Point, tangent: Vec2, wp: &WidthPoint, w: f64) {
    let v = vertex;
    let t = tangent * w;
    let n = tangent.turn_90() * w;
    match wp.side_before {
        SideType::Rounded => {
            let curve = CubicBez::from_hermite(
                v - n,
                -t * ROUND_END_FACTOR,
                v + n,
                t * ROUND_END_FACTOR,
            );
            sides.push_both(v);
            for i in 0..ROUND_STEPS {
                let k = 2.0 * i as f64 / SAMPLES as f64;
                sides.a.push(curve.eval(0.5 + k));
                sides.b.push(curve.eval(0.5 - k));
            }
            sides.a.push(curve.eval(1.0));
            sides.b.push(curve.eval(0.0));
        }
        SideType::Squared => {
            sides.a.extend([v, v - t, v + n - t, v + n]);
            sides.b.extend([v, v - t, v - n - t, v - n]);
        }
        SideType::Peaked => {
            sides.a.extend([v, v - t, v + n]);
            sides.b.extend([v, v - t, v - n]);
        }
        SideType::Flat => sides.push_both(v),
        SideType::Interpolate => {}
    }
    match wp.side_after {
        SideType::Rounded => {
            let curve = CubicBez::from_hermite(
                v - n,
                t * ROUND_END_FACTOR,
                v + n,
                -t * ROUND_END_FACTOR,
            );
            for i in 0..ROUND_STEPS {
                let k = 2.0 * i as f64 / SAMPLES as f64;
                sides.a.push(curve.eval(1.0 - k));
                sides.b.push(curve.eval(k));
            }
            sides.push_both(curve.eval(0.5));
            sides.push_both(v);
        }
        SideType::Squared => {
            sides.a.extend([v, v + t, v - n + t, v - n, v]);
            sides.b.extend([v, v + t, v + n + t, v + n, v]);
        }
        SideType::Peaked => {
            sides.a.extend([v, v + t, v - n, v]);
            sides.b.extend([v, v + t, v + n, v]);
        }
        SideType::Flat => sides.push_both(v),
        SideType::Interpolate => {}
    }
}

// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sampling walk along a spline, emitting offset points on both sides.

use crate::common::{CUSP_TANGENT_ADJUST, EPSILON};
use crate::cusp::add_cusp;
use crate::polygon::Sides;
use crate::tip::add_tip;
use crate::{
    CubicBez, CuspStyle, OutlineError, ParamCurve, ParamCurveDeriv, QuadBez, Spline, Vec2,
    WidthPoint,
};

/// A width point placed at its walk (parametric) position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Knot {
    pub(crate) walk: f64,
    pub(crate) point: WidthPoint,
}

/// Maps a profile width to an offset distance.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HalfWidth {
    pub(crate) scale: f64,
    pub(crate) expand: f64,
    pub(crate) width: f64,
}

impl HalfWidth {
    #[inline]
    pub(crate) fn of(self, w: f64) -> f64 {
        self.scale * (self.expand + self.width * 0.5 * w)
    }
}

/// One Hermite segment with the data the walk reads from it.
struct Frame {
    curve: CubicBez,
    deriv: QuadBez,
    /// Direction leaving the start vertex, never zero unless the curve is.
    t_in: Vec2,
    /// Direction arriving at the end vertex.
    t_out: Vec2,
    start: f64,
    end: f64,
    count: f64,
}

impl Frame {
    fn new(spline: &Spline, seg: usize, count: usize) -> Self {
        let curve = spline.segment(seg);
        let deriv = curve.deriv();
        let a = &spline.points[seg];
        let b = &spline.points[(seg + 1) % spline.points.len()];
        let mut t_in = a.outgoing();
        if t_in.is_zero() {
            t_in = deriv.eval(CUSP_TANGENT_ADJUST).to_vec2();
        }
        let mut t_out = b.incoming();
        if t_out.is_zero() {
            t_out = deriv.eval(1.0 - CUSP_TANGENT_ADJUST).to_vec2();
        }
        let n = count as f64;
        Self {
            curve,
            deriv,
            t_in,
            t_out,
            start: seg as f64 / n,
            end: (seg + 1) as f64 / n,
            count: n,
        }
    }

    /// Curve parameter of walk position `pos`.
    #[inline]
    fn local(&self, pos: f64) -> f64 {
        ((pos - self.start) * self.count).clamp(0.0, 1.0)
    }

    #[inline]
    fn tangent(&self, q: f64) -> Vec2 {
        self.deriv.eval(q).to_vec2()
    }

    /// Unit direction of travel at curve parameter `q`.
    ///
    /// The vertex tangents stand in at the ends and wherever the derivative
    /// vanishes. A curve that collapses to a point has no direction.
    fn unit(&self, q: f64) -> Vec2 {
        let d = if q < EPSILON {
            self.t_in
        } else if q > 1.0 - EPSILON {
            self.t_out
        } else {
            self.tangent(q)
        };
        d.try_normalize()
            .or_else(|| if q < 0.5 { self.t_in } else { self.t_out }.try_normalize())
            .unwrap_or(Vec2::ZERO)
    }
}

/// Cursor state of a walk.
struct WalkState {
    seg: usize,
    /// Index of the next knot to reach.
    next: usize,
    /// Index of the knot last passed, if any.
    prev: Option<usize>,
    pos: f64,
    /// The walk stopped on a vertex and may owe it a cusp.
    middle_corner: bool,
    /// The next sample follows a cap and has zero width.
    done_tip: bool,
    last_tangent: Vec2,
}

/// A walk over a spline through sorted knots.
pub(crate) struct Walk<'a, W> {
    pub(crate) spline: &'a Spline,
    pub(crate) knots: &'a [Knot],
    /// Profile width at a walk position.
    pub(crate) width_at: W,
    pub(crate) half: HalfWidth,
    pub(crate) cusp: CuspStyle,
    pub(crate) samples: usize,
}

impl<W: Fn(f64) -> f64> Walk<'_, W> {
    fn half_at(&self, pos: f64) -> f64 {
        self.half.of((self.width_at)(pos))
    }

    /// Walk from the first knot to the last, sampling the stretches that
    /// blend and skipping the gaps between caps.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::WalkStalled`] if the walk fails to finish
    /// within a step budget proportional to the sample count.
    pub(crate) fn run(&self) -> Result<Sides, OutlineError> {
        let mut sides = Sides::default();
        let count = self.spline.segment_count();
        let knots = self.knots;
        if count == 0 || knots.is_empty() {
            return Ok(sides);
        }
        let looped = self.spline.looped;
        let samples = self.samples.max(1);
        let step = 1.0 / (samples * count) as f64;
        let budget = 8 * (samples * count + knots.len() + count) + 64;
        let first_tangent = Frame::new(self.spline, 0, count).t_in;

        let mut st = WalkState {
            seg: 0,
            next: 0,
            prev: if looped { Some(knots.len() - 1) } else { None },
            pos: 0.0,
            middle_corner: false,
            done_tip: false,
            last_tangent: Vec2::ZERO,
        };
        let mut steps = 0;
        loop {
            let frame = Frame::new(self.spline, st.seg, count);
            let knot = knots[st.next];
            if st.pos == knot.walk {
                let q = frame.local(st.pos);
                let w = self.half.of(knot.point.width);
                add_tip(&mut sides, frame.curve.eval(q), frame.unit(q), &knot.point, w);
                st.prev = Some(st.next);
                st.next += 1;
                if st.next == knots.len() {
                    if looped {
                        self.close_loop(&mut sides, &frame, first_tangent, st.pos);
                    }
                    break;
                }
                st.pos += EPSILON;
                st.done_tip = !knot.point.side_after.is_interpolate();
                st.middle_corner = false;
                continue;
            }

            let gap = match st.prev {
                None => true,
                Some(i) => {
                    !knots[i].point.side_after.is_interpolate()
                        && !knot.point.side_before.is_interpolate()
                }
            };
            if gap {
                st.pos = knot.walk;
                while st.pos > (st.seg + 1) as f64 / count as f64 && st.seg + 1 < count {
                    st.seg += 1;
                }
                st.middle_corner = false;
                continue;
            }

            if st.middle_corner {
                if self.spline.points[st.seg].is_corner() {
                    let w = self.half_at(st.pos);
                    add_cusp(
                        &mut sides,
                        self.cusp,
                        frame.curve.start(),
                        frame.tangent(CUSP_TANGENT_ADJUST),
                        st.last_tangent,
                        w,
                    );
                }
                st.middle_corner = false;
                st.pos += EPSILON;
            }

            loop {
                steps += 1;
                if steps > budget {
                    return Err(OutlineError::WalkStalled { steps });
                }
                if st.pos > knot.walk && frame.end >= knot.walk {
                    // Land on the knot; a capping face starts from zero width.
                    st.pos = knot.walk;
                    let q = frame.local(st.pos);
                    let w = self.half.of(knot.point.face_width(knot.point.side_before));
                    sides.push_offset(frame.curve.eval(q), frame.unit(q).turn_90() * w);
                    break;
                }
                if st.pos > frame.end && frame.end < knot.walk {
                    st.pos = frame.end;
                    let q = frame
                        .local(st.pos)
                        .clamp(CUSP_TANGENT_ADJUST, 1.0 - CUSP_TANGENT_ADJUST);
                    let normal = frame
                        .tangent(q)
                        .try_normalize()
                        .unwrap_or_else(|| frame.unit(1.0));
                    let w = self.half_at(st.pos);
                    sides.push_offset(frame.curve.end(), normal.turn_90() * w);
                    st.last_tangent = frame.tangent(1.0 - CUSP_TANGENT_ADJUST);
                    st.seg += 1;
                    st.middle_corner = true;
                    break;
                }
                let q = frame.local(st.pos);
                let w = if st.done_tip {
                    st.done_tip = false;
                    0.0
                } else {
                    self.half_at(st.pos)
                };
                sides.push_offset(frame.curve.eval(q), frame.unit(q).turn_90() * w);
                st.pos += step;
            }
        }
        Ok(sides)
    }

    /// The cusp at the first vertex of a looped spline, joining the last
    /// segment back to the first.
    fn close_loop(&self, sides: &mut Sides, last: &Frame, first_tangent: Vec2, pos: f64) {
        let (Some(first), Some(end)) = (self.knots.first(), self.knots.last()) else {
            return;
        };
        let blends =
            first.point.side_before.is_interpolate() || end.point.side_after.is_interpolate();
        if blends && self.spline.points[0].is_corner() {
            add_cusp(
                sides,
                self.cusp,
                last.curve.end(),
                first_tangent,
                last.tangent(1.0 - CUSP_TANGENT_ADJUST),
                self.half_at(pos),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SideType::{self, *};
    use crate::{Point, SplinePoint};
    use alloc::vec::Vec;

    const UNIT: HalfWidth = HalfWidth {
        scale: 1.0,
        expand: 0.0,
        width: 1.0,
    };

    fn knot(walk: f64, before: SideType, after: SideType) -> Knot {
        Knot {
            walk,
            point: WidthPoint::new(walk, 1.0).with_sides(before, after),
        }
    }

    fn run(spline: &Spline, knots: &[Knot], cusp: CuspStyle) -> Sides {
        Walk {
            spline,
            knots,
            width_at: |_| 1.0,
            half: UNIT,
            cusp,
            samples: 10,
        }
        .run()
        .unwrap()
    }

    fn line() -> Spline {
        Spline::new(
            vec![
                SplinePoint::new((0.0, 0.0), (4.0, 0.0)),
                SplinePoint::new((4.0, 0.0), (4.0, 0.0)),
            ],
            false,
        )
    }

    #[test]
    fn half_width_formula() {
        let h = HalfWidth {
            scale: 2.0,
            expand: 0.25,
            width: 3.0,
        };
        assert_eq!(h.of(1.0), 3.5);
        assert_eq!(h.of(0.0), 0.5);
    }

    #[test]
    fn straight_walk_keeps_constant_offset() {
        let knots = [knot(0.0, Flat, Interpolate), knot(1.0, Interpolate, Flat)];
        let s = run(&line(), &knots, CuspStyle::Sharp);
        assert_eq!(s.a.len(), s.b.len());
        assert_eq!(s.a.first(), Some(&Point::ZERO));
        assert_eq!(s.a.last(), Some(&Point::new(4.0, 0.0)));
        let inner = &s.a[1..s.a.len() - 1];
        assert!(inner.len() >= 10);
        for p in inner {
            assert!((p.y - 0.5).abs() < 1e-12, "{p:?}");
        }
        for p in &s.b[1..s.b.len() - 1] {
            assert!((p.y + 0.5).abs() < 1e-12, "{p:?}");
        }
    }

    #[test]
    fn capped_faces_leave_a_gap() {
        let knots = [
            knot(0.0, Flat, Interpolate),
            knot(0.25, Interpolate, Flat),
            knot(0.75, Flat, Interpolate),
            knot(1.0, Interpolate, Flat),
        ];
        let s = run(&line(), &knots, CuspStyle::Sharp);
        assert!(s.a.iter().all(|p| p.x <= 1.0 + 1e-9 || p.x >= 3.0 - 1e-9));
        assert!(s.a.iter().any(|p| p.x > 3.5 && p.y > 0.4));
    }

    #[test]
    fn sample_after_a_cap_has_zero_width() {
        let knots = [knot(0.0, Flat, Flat), knot(1.0, Interpolate, Flat)];
        let s = run(&line(), &knots, CuspStyle::Sharp);
        // Cap points, then the first sample collapsed onto the spline.
        assert_eq!(s.a[2].y, 0.0);
        assert!(s.a[3].y > 0.4);
    }

    #[test]
    fn corner_gets_one_cusp() {
        let spline = Spline::polyline(
            &[Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)],
            false,
        );
        let knots = [knot(0.0, Flat, Interpolate), knot(1.0, Interpolate, Flat)];
        let sharp = run(&spline, &knots, CuspStyle::Sharp);
        let bevel = run(&spline, &knots, CuspStyle::Bevel);
        assert_eq!(sharp.a.len(), bevel.a.len());
        assert_eq!(sharp.b.len(), bevel.b.len() + 1);
        let miter = sharp
            .b
            .iter()
            .copied()
            .filter(|p| (*p - Point::new(2.5, -0.5)).hypot() < 1e-9)
            .count();
        assert_eq!(miter, 1);
    }

    #[test]
    fn looped_walk_closes_with_a_cusp() {
        let spline = Spline::polyline(
            &[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 3.0)],
            true,
        );
        let knots = [knot(0.0, Interpolate, Interpolate), knot(1.0, Interpolate, Interpolate)];
        let sharp = run(&spline, &knots, CuspStyle::Sharp);
        let bevel = run(&spline, &knots, CuspStyle::Bevel);
        assert_eq!(sharp.len(), bevel.len() + 3);
    }

    #[test]
    fn zero_length_curve_does_not_stall() {
        let p = SplinePoint::new((1.0, 1.0), (0.0, 0.0));
        let spline = Spline::new(vec![p, p], false);
        let knots = [knot(0.0, Rounded, Interpolate), knot(1.0, Interpolate, Rounded)];
        let s = run(&spline, &knots, CuspStyle::Rounded);
        assert!(s.a.iter().chain(&s.b).all(|p| p.is_finite()));
        let moved: Vec<_> = s
            .a
            .iter()
            .filter(|p| (**p - Point::new(1.0, 1.0)).hypot() > 1e-9)
            .collect();
        assert!(moved.is_empty());
    }
}

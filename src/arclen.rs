// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between parametric and arc-length (homogeneous) positions.
//!
//! A *parametric* position is the fraction of segments traversed: every
//! segment covers the same share of [0, 1] regardless of its length. A
//! *homogeneous* position is the fraction of total curve length traveled.
//! Both are approximated from a polyline sampled at a fixed number of
//! points per segment, which makes the two conversions exact inverses of
//! each other as piecewise-linear maps.

use alloc::vec::Vec;

use crate::common::{EPSILON, SAMPLES};
use crate::{ParamCurve, Spline};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Cumulative arc length of a spline, sampled uniformly in parameter.
#[derive(Clone, Debug)]
pub struct ArclenTable {
    /// `cumulative[k]` is the length from the start to parametric
    /// position `k / (segments * samples)`.
    cumulative: Vec<f64>,
    steps: usize,
}

impl ArclenTable {
    /// Measure `spline` with `samples` polyline pieces per segment.
    pub fn new(spline: &Spline, samples: usize) -> Self {
        let samples = samples.max(1);
        let segments = spline.segment_count();
        let mut cumulative = Vec::with_capacity(segments * samples + 1);
        cumulative.push(0.0);
        let mut total = 0.0;
        for i in 0..segments {
            let seg = spline.segment(i);
            let mut last = seg.start();
            for k in 1..=samples {
                let p = seg.eval(k as f64 / samples as f64);
                total += p.distance(last);
                cumulative.push(total);
                last = p;
            }
        }
        Self {
            cumulative,
            steps: segments * samples,
        }
    }

    /// Total arc length of the spline.
    #[inline]
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Mean arc length of one sampling step, or 0 for an empty spline.
    pub fn step_length(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.length() / self.steps as f64
        }
    }

    /// Convert a parametric position to a homogeneous one.
    ///
    /// With `looped` set, a position outside [0, 1] keeps its integer cycle
    /// and only the fractional part is converted; otherwise it is clamped.
    pub fn to_homogeneous(&self, pos: f64, looped: bool) -> f64 {
        self.convert(pos, looped, Self::homogeneous_in_cycle)
    }

    /// Convert a homogeneous position to a parametric one.
    ///
    /// Inverse of [`ArclenTable::to_homogeneous`].
    pub fn to_parametric(&self, pos: f64, looped: bool) -> f64 {
        self.convert(pos, looped, Self::parametric_in_cycle)
    }

    fn convert(&self, pos: f64, looped: bool, f: fn(&Self, f64) -> f64) -> f64 {
        let pos = if looped { pos } else { pos.clamp(0.0, 1.0) };
        if pos == 0.0 || pos == 1.0 || self.steps == 0 || self.length() <= EPSILON {
            return pos;
        }
        let cycle = pos.floor();
        cycle + f(self, pos - cycle)
    }

    fn homogeneous_in_cycle(&self, t: f64) -> f64 {
        let x = t * self.steps as f64;
        let i = (x.floor().max(0.0) as usize).min(self.steps - 1);
        let frac = x - i as f64;
        let (a, b) = (self.cumulative[i], self.cumulative[i + 1]);
        (a + frac * (b - a)) / self.length()
    }

    fn parametric_in_cycle(&self, h: f64) -> f64 {
        let target = h * self.length();
        let i = self.cumulative.partition_point(|&c| c < target);
        if i == 0 {
            return 0.0;
        }
        let i = i.min(self.steps);
        let (a, b) = (self.cumulative[i - 1], self.cumulative[i]);
        let frac = if b > a {
            ((target - a) / (b - a)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        ((i - 1) as f64 + frac) / self.steps as f64
    }
}

/// Convert a parametric position on `spline` to a homogeneous one.
///
/// Measures the spline at the default resolution; build an
/// [`ArclenTable`] to convert many positions.
pub fn to_homogeneous(spline: &Spline, pos: f64, looped: bool) -> f64 {
    ArclenTable::new(spline, SAMPLES).to_homogeneous(pos, looped)
}

/// Convert a homogeneous position on `spline` to a parametric one.
pub fn to_parametric(spline: &Spline, pos: f64, looped: bool) -> f64 {
    ArclenTable::new(spline, SAMPLES).to_parametric(pos, looped)
}

/// The coordinate spaces one outline computation works in.
///
/// Width and dash positions are *authored* in one space, the walk over the
/// spline runs in parametric space, and width blending runs in the *blend*
/// space: homogeneous unless the fast mode skips reprojection altogether.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection<'a> {
    table: &'a ArclenTable,
    homogeneous: bool,
    fast: bool,
    looped: bool,
}

impl<'a> Projection<'a> {
    pub(crate) fn new(table: &'a ArclenTable, homogeneous: bool, fast: bool, looped: bool) -> Self {
        Self {
            table,
            homogeneous,
            fast,
            looped,
        }
    }

    /// Authored position to walk (parametric) position.
    pub(crate) fn walk(&self, authored: f64) -> f64 {
        let p = if self.homogeneous && !self.fast {
            self.table.to_parametric(authored, self.looped)
        } else {
            authored
        };
        p.clamp(0.0, 1.0)
    }

    /// Authored position to blend position.
    pub(crate) fn blend(&self, authored: f64) -> f64 {
        if self.homogeneous || self.fast {
            authored
        } else {
            self.table.to_homogeneous(authored, self.looped)
        }
    }

    /// Walk position to blend position.
    pub(crate) fn blend_of_walk(&self, walk: f64) -> f64 {
        if self.fast {
            walk
        } else {
            self.table.to_homogeneous(walk, self.looped)
        }
    }

    /// Homogeneous position (as produced by measuring along the curve) to
    /// authored position.
    pub(crate) fn authored_of_homogeneous(&self, h: f64) -> f64 {
        if self.homogeneous || self.fast {
            h
        } else {
            self.table.to_parametric(h, self.looped)
        }
    }
}

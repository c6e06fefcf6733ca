// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width profiles: preparing raw width points for the walk, and reading
//! the width anywhere along the spline.

use alloc::vec::Vec;

use crate::{interpolate_width, OutlineError, SideType, Spline, WidthPoint};

/// An unordered list of width points along a spline.
///
/// The loop flag belongs to the profile, not the spline: it decides whether
/// positions outside their bounds wrap around. Whether the ends get caps or
/// blend across the 1.0/0.0 seam follows the spline.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidthProfile {
    /// The width points, in any order.
    pub points: Vec<WidthPoint>,
    /// Whether positions wrap around their bounds.
    pub looped: bool,
}

/// A sorted width profile covering the whole spline.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedProfile {
    points: Vec<WidthPoint>,
    looped: bool,
    inserted_first: bool,
    inserted_last: bool,
}

impl WidthProfile {
    /// Create a profile from width points.
    pub fn new(points: Vec<WidthPoint>, looped: bool) -> Self {
        Self { points, looped }
    }

    /// One blending width point per spline vertex, carrying the vertex's
    /// width multiplier at its parametric position.
    pub fn from_spline_widths(spline: &Spline) -> Self {
        let points = spline
            .points
            .iter()
            .enumerate()
            .map(|(i, sp)| WidthPoint::new(spline.vertex_position(i), sp.width))
            .collect();
        Self {
            points,
            looped: spline.looped,
        }
    }

    /// Sort and complete the profile for a spline, comparing positions as
    /// given.
    ///
    /// `closed` is the loop flag of the spline. On an open spline
    /// `start_tip` and `end_tip` cap the synthetic ends; on a closed one
    /// the ends blend into each other instead.
    pub fn prepare(
        &self,
        closed: bool,
        start_tip: SideType,
        end_tip: SideType,
        smoothness: f64,
    ) -> PreparedProfile {
        self.prepare_with(closed, start_tip, end_tip, smoothness, |p| p)
    }

    /// Sort and complete the profile. `blend` maps a position into the
    /// space width is blended in, used for the synthetic seam points of a
    /// closed spline.
    pub(crate) fn prepare_with(
        &self,
        closed: bool,
        start_tip: SideType,
        end_tip: SideType,
        smoothness: f64,
        blend: impl Fn(f64) -> f64,
    ) -> PreparedProfile {
        let mut points: Vec<WidthPoint> = self
            .points
            .iter()
            .map(|wp| WidthPoint {
                position: wp.norm_position(self.looped),
                lower_bound: 0.0,
                upper_bound: 1.0,
                ..*wp
            })
            .collect();
        sort_by_position(&mut points);

        let mut inserted_first = false;
        let mut inserted_last = false;
        match (points.first().copied(), points.last().copied()) {
            (Some(front), Some(back)) if !closed => {
                if front.side_before.is_interpolate() && front.position != 0.0 {
                    points.insert(
                        0,
                        WidthPoint::new(0.0, front.width)
                            .with_sides(start_tip, SideType::Interpolate),
                    );
                }
                if back.side_after.is_interpolate() && back.position != 1.0 {
                    points.push(
                        WidthPoint::new(1.0, back.width).with_sides(SideType::Interpolate, end_tip),
                    );
                }
            }
            (Some(front), Some(back)) => {
                if front.side_before.is_interpolate() || back.side_after.is_interpolate() {
                    let back_b = WidthPoint {
                        position: blend(back.position),
                        ..back
                    };
                    let front_b = WidthPoint {
                        position: blend(front.position),
                        ..front
                    };
                    if front.position != 0.0 {
                        let w = interpolate_width(&back_b, &front_b, 0.0, smoothness);
                        points.insert(0, WidthPoint::new(0.0, w));
                        inserted_first = true;
                    }
                    if back.position != 1.0 {
                        let w = interpolate_width(&back_b, &front_b, 1.0, smoothness);
                        points.push(WidthPoint::new(1.0, w));
                        inserted_last = true;
                    }
                }
            }
            _ if closed => {
                points.push(WidthPoint::new(0.0, 1.0));
                points.push(WidthPoint::new(1.0, 1.0));
            }
            _ => {
                points.push(WidthPoint::new(0.0, 1.0).with_sides(start_tip, SideType::Interpolate));
                points.push(WidthPoint::new(1.0, 1.0).with_sides(SideType::Interpolate, end_tip));
            }
        }
        sort_by_position(&mut points);
        log::trace!(
            "prepared width profile: {} points, seam points {inserted_first}/{inserted_last}",
            points.len()
        );
        PreparedProfile {
            points,
            looped: closed,
            inserted_first,
            inserted_last,
        }
    }
}

impl PreparedProfile {
    /// Wrap width points that are already normalized and sorted.
    ///
    /// With `looped` set, width blends across the seam of a closed spline.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::UnsortedProfile`] if positions decrease and
    /// [`OutlineError::NonFinite`] for a non-finite position or width.
    pub fn from_sorted(points: Vec<WidthPoint>, looped: bool) -> Result<Self, OutlineError> {
        check_sorted(points.iter().map(|wp| wp.position))?;
        if !points.iter().all(WidthPoint::is_finite) {
            return Err(OutlineError::NonFinite("width point"));
        }
        Ok(Self {
            points,
            looped,
            inserted_first: false,
            inserted_last: false,
        })
    }

    /// The sorted width points.
    #[inline]
    pub fn points(&self) -> &[WidthPoint] {
        &self.points
    }

    /// Whether width blends across the seam of a closed spline.
    #[inline]
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Whether a synthetic seam point was inserted at 0.
    #[inline]
    pub fn inserted_first(&self) -> bool {
        self.inserted_first
    }

    /// Whether a synthetic seam point was inserted at 1.
    #[inline]
    pub fn inserted_last(&self) -> bool {
        self.inserted_last
    }

    /// Width at `p`, blending in the space the profile positions are in.
    pub fn width_at(&self, p: f64, smoothness: f64) -> f64 {
        match WidthInterpolator::new(self, |p| p, smoothness) {
            Ok(interp) => interp.width_at(p),
            Err(_) => 0.0,
        }
    }
}

/// Width lookup over a prepared profile, in blend space.
///
/// Synthetic seam points of a looping profile are not anchors: the real
/// points are extended by one shifted copy on each side instead, so the
/// lookup never wraps.
#[derive(Clone, Debug)]
pub(crate) struct WidthInterpolator {
    anchors: Vec<WidthPoint>,
    smoothness: f64,
}

impl WidthInterpolator {
    pub(crate) fn new(
        profile: &PreparedProfile,
        blend: impl Fn(f64) -> f64,
        smoothness: f64,
    ) -> Result<Self, OutlineError> {
        let mut real = profile.points.as_slice();
        if profile.looped && profile.inserted_first && real.len() > 1 {
            real = &real[1..];
        }
        if profile.looped && profile.inserted_last && real.len() > 1 {
            real = &real[..real.len() - 1];
        }
        let mut anchors: Vec<WidthPoint> = real
            .iter()
            .map(|wp| WidthPoint {
                position: blend(wp.position),
                ..*wp
            })
            .collect();
        check_sorted(anchors.iter().map(|wp| wp.position))?;
        if profile.looped {
            if let (Some(&first), Some(&last)) = (anchors.first(), anchors.last()) {
                anchors.insert(
                    0,
                    WidthPoint {
                        position: last.position - 1.0,
                        ..last
                    },
                );
                anchors.push(WidthPoint {
                    position: first.position + 1.0,
                    ..first
                });
            }
        }
        Ok(Self {
            anchors,
            smoothness,
        })
    }

    pub(crate) fn width_at(&self, p: f64) -> f64 {
        let a = &self.anchors;
        if a.is_empty() {
            return 0.0;
        }
        let i = a.partition_point(|wp| wp.position < p);
        if i < a.len() && a[i].position == p {
            return a[i].width;
        }
        if i == 0 {
            return a[0].face_width(a[0].side_before);
        }
        if i == a.len() {
            return a[i - 1].face_width(a[i - 1].side_after);
        }
        interpolate_width(&a[i - 1], &a[i], p, self.smoothness)
    }
}

pub(crate) fn sort_by_position(points: &mut [WidthPoint]) {
    points.sort_by(|a, b| a.position.total_cmp(&b.position));
}

fn check_sorted(positions: impl Iterator<Item = f64>) -> Result<(), OutlineError> {
    let mut last = f64::NEG_INFINITY;
    for (index, p) in positions.enumerate() {
        if p < last || p.is_nan() {
            return Err(OutlineError::UnsortedProfile { index });
        }
        last = p;
    }
    Ok(())
}

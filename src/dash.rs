// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dash patterns, expanded into width points along the spline.

use alloc::vec::Vec;
use core::borrow::Borrow;

use smallvec::SmallVec;

use crate::common::EPSILON;
use crate::profile::sort_by_position;
use crate::{SideType, WidthPoint};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// One element of a dash pattern: a gap followed by an opaque run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashItem {
    /// Length of the gap before the run.
    pub offset: f64,
    /// Length of the run.
    pub length: f64,
    /// Cap at the start of the run.
    pub side_before: SideType,
    /// Cap at the end of the run.
    pub side_after: SideType,
}

impl Default for DashItem {
    fn default() -> Self {
        Self::new(0.1, 0.1)
    }
}

impl DashItem {
    /// A dash item with rounded caps.
    #[inline]
    pub fn new(offset: f64, length: f64) -> Self {
        Self {
            offset,
            length,
            side_before: SideType::Rounded,
            side_after: SideType::Rounded,
        }
    }

    /// Builder method for setting the caps of the run.
    #[must_use]
    pub fn with_sides(mut self, before: SideType, after: SideType) -> Self {
        self.side_before = before;
        self.side_after = after;
        self
    }
}

/// Collection of items in a dash pattern.
pub type Dashes = SmallVec<[DashItem; 4]>;

/// A repeating dash pattern anchored by an offset.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashPattern {
    /// The items, cycled along the spline.
    pub items: Dashes,
    /// Arc length at which the first item's gap starts.
    pub offset: f64,
    /// Whether dashing is applied at all.
    pub enabled: bool,
}

/// Width points produced by expanding a [`DashPattern`].
#[derive(Clone, Debug, PartialEq)]
pub struct DashExpansion {
    /// Run boundaries in pairs: start, end, start, end, ...
    pub points: Vec<WidthPoint>,
    /// Cap for a run clipped by the start of the spline.
    pub start_tip: SideType,
    /// Cap for a run clipped by the end of the spline.
    pub end_tip: SideType,
}

impl DashPattern {
    /// An enabled dash pattern.
    pub fn new<P>(offset: f64, pattern: P) -> Self
    where
        P: IntoIterator,
        P::Item: Borrow<DashItem>,
    {
        Self {
            items: pattern.into_iter().map(|item| *item.borrow()).collect(),
            offset,
            enabled: true,
        }
    }

    /// Builder method for switching dashing on or off.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sum of every gap and run in one cycle of the pattern.
    pub fn cycle_length(&self) -> f64 {
        self.items.iter().map(|d| d.offset + d.length).sum()
    }

    /// Lay the pattern along a spline of arc length `length`.
    ///
    /// Runs are placed forward and backward from the offset, so the whole
    /// spline is covered. `to_authored` converts a fraction of `length`
    /// into the space width positions are authored in. Runs straddling
    /// either end are clipped to it; runs clipped away entirely are dropped.
    /// If no run survives, a single zero-length placeholder run sits at 0.5.
    ///
    /// `resolution` is the shortest cycle worth laying out, usually the arc
    /// length of one sampling step. A finer pattern cannot be told apart
    /// from a solid stroke and is not expanded.
    ///
    /// Returns `None` when dashing is disabled, the pattern is empty, the
    /// spline has negligible length, or the cycle is below `resolution`.
    pub fn expand(
        &self,
        length: f64,
        resolution: f64,
        to_authored: impl Fn(f64) -> f64,
    ) -> Option<DashExpansion> {
        let cycle = self.cycle_length();
        if !self.enabled || self.items.is_empty() || length <= EPSILON || cycle <= EPSILON {
            return None;
        }
        if cycle < resolution {
            log::debug!("dash cycle {cycle} is below the resolution {resolution}, not dashing");
            return None;
        }
        let mut offset = self.offset;
        if offset.abs() > cycle {
            offset %= cycle;
        }
        let anchor = if offset >= 0.0 { offset } else { cycle + offset };
        let n = self.items.len();
        let boundary = |at: f64, item: &DashItem| {
            [
                WidthPoint::dash_boundary(
                    to_authored((at - item.length) / length),
                    item.side_before,
                    SideType::Interpolate,
                ),
                WidthPoint::dash_boundary(
                    to_authored(at / length),
                    SideType::Interpolate,
                    item.side_after,
                ),
            ]
        };

        let mut forward: Vec<[WidthPoint; 2]> = Vec::new();
        let mut dpos = anchor;
        let mut i = 0;
        while dpos < length {
            let item = &self.items[i];
            forward.push(boundary(dpos + item.offset + item.length, item));
            dpos += item.offset + item.length;
            i = (i + 1) % n;
        }
        let mut end_tip = SideType::Flat;
        if let Some(&[before, mut after]) = forward.last() {
            if after.position >= 1.0 {
                after.position = 1.0;
                forward.pop();
                if before.position < 1.0 {
                    end_tip = after.side_after;
                    forward.push([before, after]);
                }
            }
        }

        let mut backward: Vec<[WidthPoint; 2]> = Vec::new();
        let mut dpos = anchor;
        let mut i = n - 1;
        while dpos > 0.0 {
            let item = &self.items[i];
            backward.push(boundary(dpos, item));
            dpos -= item.offset + item.length;
            i = (i + n - 1) % n;
        }
        let mut start_tip = SideType::Flat;
        if let Some(&[mut before, after]) = backward.last() {
            if before.position <= 0.0 {
                before.position = 0.0;
                backward.pop();
                if after.position > 0.0 {
                    start_tip = before.side_before;
                    backward.push([before, after]);
                }
            }
        }

        log::debug!(
            "dash expansion: {} runs forward, {} backward",
            forward.len(),
            backward.len()
        );
        let mut points: Vec<WidthPoint> = backward
            .iter()
            .rev()
            .chain(forward.iter())
            .flatten()
            .copied()
            .collect();
        if points.is_empty() {
            log::debug!("no dash run in range, using a placeholder");
            points.push(WidthPoint::dash_boundary(
                0.5,
                SideType::Flat,
                SideType::Interpolate,
            ));
            points.push(WidthPoint::dash_boundary(
                0.5,
                SideType::Interpolate,
                SideType::Flat,
            ));
        }
        Some(DashExpansion {
            points,
            start_tip,
            end_tip,
        })
    }
}

impl DashExpansion {
    /// The `(start, end)` positions of every run.
    pub fn runs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .chunks_exact(2)
            .map(|pair| (pair[0].position, pair[1].position))
    }

    /// Combine the runs with a sorted base profile.
    ///
    /// A run boundary is kept when it falls strictly inside a base interval
    /// that blends on at least one end. A base point is kept when it lies
    /// within some run, ends included. The result is sorted, and points
    /// sharing a position are collapsed into one.
    pub fn merge(&self, base: &[WidthPoint]) -> Vec<WidthPoint> {
        let mut merged = Vec::new();
        for pair in base.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.side_after.is_interpolate() || b.side_before.is_interpolate() {
                merged.extend(
                    self.points
                        .iter()
                        .filter(|d| d.position > a.position && d.position < b.position),
                );
            }
        }
        for (start, end) in self.runs() {
            merged.extend(
                base.iter()
                    .filter(|wp| wp.position >= start && wp.position <= end),
            );
        }
        sort_by_position(&mut merged);
        collapse_duplicates(&mut merged);
        merged
    }
}

/// Collapse runs of points at one position.
///
/// The survivor caps before with the first capping before-face and after
/// with the last capping after-face, and takes the width of the first
/// point that did not come from dashing.
pub(crate) fn collapse_duplicates(points: &mut Vec<WidthPoint>) {
    points.dedup_by(|later, kept| {
        if later.position != kept.position {
            return false;
        }
        if kept.side_before.is_interpolate() {
            kept.side_before = later.side_before;
        }
        if !later.side_after.is_interpolate() {
            kept.side_after = later.side_after;
        }
        if kept.dash && !later.dash {
            kept.width = later.width;
        }
        kept.dash &= later.dash;
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SideType::*;

    const STEP: f64 = 0.01;

    fn unit_dashes(offset: f64) -> DashPattern {
        DashPattern::new(offset, [DashItem::new(1.0, 1.0).with_sides(Squared, Squared)])
    }

    fn runs(e: &DashExpansion) -> Vec<(f64, f64)> {
        e.runs().collect()
    }

    #[test]
    fn five_runs_on_ten_units() {
        let e = unit_dashes(0.0).expand(10.0, STEP, |p| p).unwrap();
        let r = runs(&e);
        assert_eq!(r.len(), 5);
        for (k, (a, b)) in r.iter().enumerate() {
            let start = (2 * k + 1) as f64 / 10.0;
            assert!((a - start).abs() < 1e-12, "run {k} starts at {a}");
            assert!((b - a - 0.1).abs() < 1e-12, "run {k} has length {}", b - a);
        }
        // The last run ends exactly at the end of the spline.
        assert_eq!(r[4].1, 1.0);
        assert_eq!(e.end_tip, Squared);
        assert_eq!(e.start_tip, Flat);
    }

    #[test]
    fn full_cycle_shift_is_idempotent() {
        let base = unit_dashes(0.5).expand(10.0, STEP, |p| p).unwrap();
        for shifted in [2.5, -1.5, 4.5] {
            let e = unit_dashes(shifted).expand(10.0, STEP, |p| p).unwrap();
            assert_eq!(runs(&e), runs(&base), "offset {shifted}");
        }
    }

    #[test]
    fn runs_are_clipped_at_both_ends() {
        let pattern = DashPattern::new(0.5, [DashItem::new(1.0, 1.0).with_sides(Squared, Peaked)]);
        let e = pattern.expand(10.0, STEP, |p| p).unwrap();
        let r = runs(&e);
        assert_eq!(r.len(), 6);
        assert_eq!(r[0].0, 0.0);
        assert!((r[0].1 - 0.05).abs() < 1e-12);
        assert_eq!(r[5].1, 1.0);
        assert_eq!(e.start_tip, Squared);
        assert_eq!(e.end_tip, Peaked);
    }

    #[test]
    fn out_of_range_pattern_gets_placeholder() {
        let pattern = DashPattern::new(0.0, [DashItem::new(20.0, 1.0)]);
        let e = pattern.expand(10.0, STEP, |p| p.clamp(0.0, 1.0)).unwrap();
        assert_eq!(runs(&e), vec![(0.5, 0.5)]);
        assert_eq!(e.points[0].side_before, Flat);
        assert_eq!(e.points[1].side_after, Flat);
    }

    #[test]
    fn disabled_or_degenerate_patterns() {
        assert!(unit_dashes(0.0).with_enabled(false).expand(10.0, STEP, |p| p).is_none());
        assert!(DashPattern::new(0.0, [DashItem::new(0.0, 0.0)])
            .expand(10.0, STEP, |p| p)
            .is_none());
        assert!(unit_dashes(0.0).expand(0.0, STEP, |p| p).is_none());
        assert!(DashPattern::default().expand(10.0, STEP, |p| p).is_none());
    }

    #[test]
    fn cycle_below_resolution_is_not_expanded() {
        let fine = DashPattern::new(0.0, [DashItem::new(0.0, 1e-6)]);
        assert!(fine.expand(1000.0, 0.2, |p| p).is_none());
        // Right at the resolution the pattern is still laid out.
        let e = DashPattern::new(0.0, [DashItem::new(0.1, 0.1)])
            .expand(10.0, 0.2, |p| p)
            .unwrap();
        assert_eq!(e.runs().count(), 50);
    }

    #[test]
    fn merge_keeps_runs_and_points_inside_runs() {
        let e = unit_dashes(0.0).expand(10.0, STEP, |p| p).unwrap();
        let base = [
            WidthPoint::new(0.0, 1.0).with_sides(Flat, Interpolate),
            WidthPoint::new(0.35, 2.0),
            WidthPoint::new(0.45, 2.0),
            WidthPoint::new(1.0, 1.0).with_sides(Interpolate, Flat),
        ];
        let merged = e.merge(&base);
        // 10 run boundaries plus the base point inside the second run.
        assert_eq!(merged.len(), 11);
        assert!(merged.iter().any(|wp| wp.position == 0.35 && !wp.dash));
        assert!(!merged.iter().any(|wp| wp.position == 0.45));
        // The final boundary coincides with the base end point.
        let last = merged.last().unwrap();
        assert_eq!(last.position, 1.0);
        assert!(!last.dash);
        assert_eq!(last.side_after, Flat);
    }

    #[test]
    fn merge_drops_runs_inside_base_gaps() {
        let e = DashPattern::new(4.5, [DashItem::new(0.0, 2.0), DashItem::new(8.0, 0.0)])
            .expand(10.0, STEP, |p| p)
            .unwrap();
        let base = [
            WidthPoint::new(0.0, 1.0).with_sides(Flat, Interpolate),
            WidthPoint::new(0.4, 1.0).with_sides(Interpolate, Flat),
            WidthPoint::new(0.7, 1.0).with_sides(Flat, Interpolate),
            WidthPoint::new(1.0, 1.0).with_sides(Interpolate, Flat),
        ];
        let merged = e.merge(&base);
        assert!(merged
            .iter()
            .all(|wp| !(wp.position > 0.4 && wp.position < 0.7)));
    }

    #[test]
    fn touching_runs_collapse() {
        let mut points = vec![
            WidthPoint::dash_boundary(0.2, Interpolate, Rounded),
            WidthPoint::dash_boundary(0.2, Squared, Interpolate),
            WidthPoint::new(0.2, 3.0),
        ];
        collapse_duplicates(&mut points);
        assert_eq!(points.len(), 1);
        let wp = points[0];
        assert_eq!((wp.side_before, wp.side_after), (Squared, Rounded));
        assert_eq!(wp.width, 3.0);
        assert!(!wp.dash);
    }
}

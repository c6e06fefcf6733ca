// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expanding a variable-width, optionally dashed stroke into polygons.

use alloc::vec::Vec;

use crate::arclen::{ArclenTable, Projection};
use crate::common::SAMPLES;
use crate::profile::WidthInterpolator;
use crate::walk::{HalfWidth, Knot, Walk};
use crate::{
    CuspStyle, DashPattern, Outline, OutlineError, SideType, Spline, WidthPoint, WidthProfile,
};

/// Describes the visual style of an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineStyle {
    /// Width of the stroke where the profile width is 1.
    pub width: f64,
    /// Distance added to every half width.
    pub expand: f64,
    /// Easing of width between width points, from linear (0) to a
    /// half-cosine (1).
    pub smoothness: f64,
    /// Whether width and dash positions are fractions of arc length rather
    /// than of the segment count.
    pub homogeneous: bool,
    /// Skip arc-length reprojection and compare positions as given.
    pub fast: bool,
    /// Joint at corners of the spline.
    pub cusp: CuspStyle,
    /// Cap at the start of an open stroke.
    pub start_tip: SideType,
    /// Cap at the end of an open stroke.
    pub end_tip: SideType,
}

/// Options for outline computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineOpts {
    samples: usize,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            expand: 0.0,
            smoothness: 0.5,
            homogeneous: false,
            fast: false,
            cusp: CuspStyle::Sharp,
            start_tip: SideType::Rounded,
            end_tip: SideType::Rounded,
        }
    }
}

impl Default for OutlineOpts {
    fn default() -> Self {
        Self { samples: SAMPLES }
    }
}

impl OutlineStyle {
    /// Creates a new outline style with the given width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Builder method for setting the width expansion.
    #[must_use]
    pub fn with_expand(mut self, expand: f64) -> Self {
        self.expand = expand;
        self
    }

    /// Builder method for setting the smoothness, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = smoothness.clamp(0.0, 1.0);
        self
    }

    /// Builder method for measuring positions along arc length.
    #[must_use]
    pub fn with_homogeneous(mut self, yes: bool) -> Self {
        self.homogeneous = yes;
        self
    }

    /// Builder method for skipping arc-length reprojection.
    #[must_use]
    pub fn with_fast(mut self, yes: bool) -> Self {
        self.fast = yes;
        self
    }

    /// Builder method for setting the cusp style.
    #[must_use]
    pub fn with_cusp(mut self, cusp: CuspStyle) -> Self {
        self.cusp = cusp;
        self
    }

    /// Builder method for setting the cap at the start of the stroke.
    #[must_use]
    pub fn with_start_tip(mut self, tip: SideType) -> Self {
        self.start_tip = tip;
        self
    }

    /// Builder method for setting the cap at the end of the stroke.
    #[must_use]
    pub fn with_end_tip(mut self, tip: SideType) -> Self {
        self.end_tip = tip;
        self
    }

    /// Builder method for setting both caps.
    #[must_use]
    pub fn with_tips(mut self, tip: SideType) -> Self {
        self.start_tip = tip;
        self.end_tip = tip;
        self
    }

    fn check_finite(&self) -> Result<(), OutlineError> {
        if self.width.is_finite() && self.expand.is_finite() && self.smoothness.is_finite() {
            Ok(())
        } else {
            Err(OutlineError::NonFinite("outline style"))
        }
    }
}

impl OutlineOpts {
    /// Set the number of samples per spline segment, used both for walking
    /// and for measuring arc length.
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }
}

/// Expand a spline with a width profile and dash pattern into the polygons
/// of its filled outline.
///
/// Every width is multiplied by `scale`. The result is in the coordinate
/// space of the spline.
///
/// # Errors
///
/// Fails for a `scale` that is not finite and positive, for NaN or
/// infinite input values, and if the walk stalls. No partial outline is
/// returned.
pub fn outline(
    spline: &Spline,
    widths: &WidthProfile,
    dashes: &DashPattern,
    style: &OutlineStyle,
    opts: &OutlineOpts,
    scale: f64,
) -> Result<Outline, OutlineError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(OutlineError::InvalidScale(scale));
    }
    style.check_finite()?;
    spline.check_finite()?;
    if !widths.points.iter().all(WidthPoint::is_finite) {
        return Err(OutlineError::NonFinite("width point"));
    }
    let dashes_finite = dashes.offset.is_finite()
        && dashes
            .items
            .iter()
            .all(|d| d.offset.is_finite() && d.length.is_finite());
    if !dashes_finite {
        return Err(OutlineError::NonFinite("dash pattern"));
    }
    if spline.segment_count() == 0 {
        log::warn!(
            "spline has {} points and no segment, outline is empty",
            spline.len()
        );
        return Ok(Outline::default());
    }

    let smoothness = style.smoothness.clamp(0.0, 1.0);
    let table = ArclenTable::new(spline, opts.samples);
    let proj = Projection::new(&table, style.homogeneous, style.fast, widths.looped);
    let blend = |p: f64| proj.blend(p);
    let prepared = widths.prepare_with(
        spline.looped,
        style.start_tip,
        style.end_tip,
        smoothness,
        blend,
    );
    let interp = WidthInterpolator::new(&prepared, blend, smoothness)?;

    let expansion = dashes.expand(table.length(), table.step_length(), |h| {
        proj.authored_of_homogeneous(h)
    });
    let mut work = match &expansion {
        Some(expansion) => {
            let mut merged = expansion.merge(prepared.points());
            for wp in merged.iter_mut().filter(|wp| wp.dash) {
                wp.width = interp.width_at(proj.blend(wp.position));
            }
            merged
        }
        None => prepared.points().to_vec(),
    };
    if work.is_empty() {
        work.push(WidthPoint::dash_boundary(0.5, SideType::Flat, SideType::Flat));
    }
    let dash_tips = expansion.as_ref().map(|e| (e.start_tip, e.end_tip));
    apply_tips(&mut work, spline.looped, style, dash_tips);

    let knots: Vec<Knot> = work
        .iter()
        .map(|wp| Knot {
            walk: proj.walk(wp.position),
            point: *wp,
        })
        .collect();
    let walk = Walk {
        spline,
        knots: &knots,
        width_at: |pos: f64| interp.width_at(proj.blend_of_walk(pos)),
        half: HalfWidth {
            scale,
            expand: style.expand,
            width: style.width,
        },
        cusp: style.cusp,
        samples: opts.samples,
    };
    let outline = walk.run()?.assemble(spline.looped);
    log::debug!(
        "outline: {} knots, {} points in {} contours",
        knots.len(),
        outline.point_count(),
        outline.contours().len()
    );
    Ok(outline)
}

/// Give the ends of the work list their caps.
///
/// On an open spline a point exactly at either end always takes the end
/// cap. When dashing, a blending outer face takes the cap of the clipped
/// dash run instead.
fn apply_tips(
    work: &mut [WidthPoint],
    looped: bool,
    style: &OutlineStyle,
    dash_tips: Option<(SideType, SideType)>,
) {
    let (start_tip, end_tip) = dash_tips.unwrap_or((style.start_tip, style.end_tip));
    if !looped {
        if let Some(first) = work.first_mut().filter(|wp| wp.position == 0.0) {
            first.side_before = start_tip;
        }
        if let Some(last) = work.last_mut().filter(|wp| wp.position == 1.0) {
            last.side_after = end_tip;
        }
    }
    if dash_tips.is_some() {
        if let Some(first) = work.first_mut().filter(|wp| wp.side_before.is_interpolate()) {
            first.side_before = start_tip;
        }
        if let Some(last) = work.last_mut().filter(|wp| wp.side_after.is_interpolate()) {
            last.side_after = end_tip;
        }
    }
}

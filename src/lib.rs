// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variable-width outline strokes.
//!
//! The varistroke library expands a spline of Hermite segments into the
//! polygons of its filled stroke. Width varies along the spline according
//! to a profile of [`WidthPoint`]s, each of which either blends into its
//! neighbours or caps the stroke with a tip. An optional [`DashPattern`]
//! cuts the stroke into runs. Corners of the spline get a joint in one of
//! the [`CuspStyle`]s.
//!
//! Positions along the spline are fractions in `[0, 1]`, measured either by
//! segment count (parametric) or by arc length (homogeneous).
//!
//! # Examples
//!
//! A tapered, dashed stroke along a straight spline:
//! ```
//! use varistroke::{
//!     outline, DashItem, DashPattern, OutlineOpts, OutlineStyle, Point, SideType, Spline,
//!     WidthPoint, WidthProfile,
//! };
//!
//! let spline = Spline::polyline(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)], false);
//! let widths = WidthProfile::new(
//!     vec![WidthPoint::new(0.0, 1.0), WidthPoint::new(1.0, 0.25)],
//!     false,
//! );
//! let dashes = DashPattern::new(0.0, [DashItem::new(5.0, 15.0)]);
//! let style = OutlineStyle::new(8.0).with_tips(SideType::Squared);
//!
//! let outline = outline(&spline, &widths, &dashes, &style, &OutlineOpts::default(), 1.0)?;
//! assert_eq!(outline.contours().len(), 1);
//! assert!(outline.to_path().to_svg().starts_with("M"));
//! # Ok::<(), varistroke::OutlineError>(())
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! The `serde` and `schemars` features derive serialization and JSON
//! schemas for the input types, and `mint` adds conversions for [`Point`]
//! and [`Vec2`].
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("varistroke requires either the `std` or `libm` feature");

extern crate alloc;

mod arclen;
pub mod common;
mod cubicbez;
mod cusp;
mod dash;
mod error;
mod line;
mod outline;
mod param_curve;
mod point;
mod polygon;
mod polypath;
mod profile;
mod quadbez;
mod spline;
mod svg;
mod tip;
mod vec2;
mod walk;
mod width;

pub use crate::arclen::*;
pub use crate::cubicbez::*;
pub use crate::cusp::*;
pub use crate::dash::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::outline::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::polygon::*;
pub use crate::polypath::*;
pub use crate::profile::*;
pub use crate::quadbez::*;
pub use crate::spline::*;
pub use crate::vec2::*;
pub use crate::width::*;

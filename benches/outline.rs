// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of outline computation.

#![cfg_attr(nightly, feature(test))]

#[cfg(nightly)]
mod benches {
    extern crate test;
    use test::Bencher;

    use varistroke::{
        outline, ArclenTable, CuspStyle, DashItem, DashPattern, OutlineOpts, OutlineStyle, Point,
        SideType, Spline, SplinePoint, WidthPoint, WidthProfile,
    };

    fn wave(n: usize) -> Spline {
        let points = (0..n)
            .map(|i| {
                let x = i as f64 * 10.0;
                let y = if i % 2 == 0 { 0.0 } else { 8.0 };
                SplinePoint::new((x, y), (10.0, 0.0))
            })
            .collect();
        Spline::new(points, false)
    }

    fn profile() -> WidthProfile {
        WidthProfile::new(
            vec![
                WidthPoint::new(0.1, 0.5),
                WidthPoint::new(0.5, 2.0).with_sides(SideType::Interpolate, SideType::Squared),
                WidthPoint::new(0.6, 1.0).with_sides(SideType::Peaked, SideType::Interpolate),
                WidthPoint::new(0.9, 0.25),
            ],
            false,
        )
    }

    #[bench]
    fn bench_arclen_table(b: &mut Bencher) {
        let spline = wave(32);
        b.iter(|| ArclenTable::new(test::black_box(&spline), 50));
    }

    #[bench]
    fn bench_outline_plain(b: &mut Bencher) {
        let spline = wave(32);
        let widths = profile();
        let style = OutlineStyle::new(4.0);
        let opts = OutlineOpts::default();
        b.iter(|| outline(&spline, &widths, &DashPattern::default(), &style, &opts, 1.0));
    }

    #[bench]
    fn bench_outline_dashed_homogeneous(b: &mut Bencher) {
        let spline = wave(32);
        let widths = profile();
        let dashes = DashPattern::new(1.5, [DashItem::new(2.0, 6.0), DashItem::new(1.0, 1.0)]);
        let style = OutlineStyle::new(4.0).with_homogeneous(true);
        let opts = OutlineOpts::default();
        b.iter(|| outline(&spline, &widths, &dashes, &style, &opts, 1.0));
    }

    #[bench]
    fn bench_outline_polygon_corners(b: &mut Bencher) {
        let vertices: Vec<Point> = (0..64)
            .map(|i| {
                let a = i as f64 * core::f64::consts::TAU / 64.0;
                let r = if i % 2 == 0 { 100.0 } else { 60.0 };
                Point::new(r * a.cos(), r * a.sin())
            })
            .collect();
        let spline = Spline::polyline(&vertices, true);
        let widths = WidthProfile::new(vec![], true);
        let style = OutlineStyle::new(3.0).with_cusp(CuspStyle::Rounded);
        let opts = OutlineOpts::default();
        b.iter(|| outline(&spline, &widths, &DashPattern::default(), &style, &opts, 1.0));
    }
}

// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example of a dashed outline around a closed spline, printed as SVG.

#[cfg(feature = "std")]
fn main() {
    use varistroke::{
        outline, CuspStyle, DashItem, DashPattern, OutlineOpts, OutlineStyle, SideType, Spline,
        SplinePoint, WidthPoint, WidthProfile,
    };

    let spline = Spline::new(
        vec![
            SplinePoint::new((400.0, 100.0), (500.0, 0.0)),
            SplinePoint::new((700.0, 400.0), (0.0, 500.0)),
            SplinePoint::split((400.0, 700.0), (-400.0, 0.0), (-200.0, -300.0)),
            SplinePoint::new((100.0, 400.0), (0.0, -500.0)),
        ],
        true,
    );
    let widths = WidthProfile::new(
        vec![
            WidthPoint::new(0.0, 1.0),
            WidthPoint::new(0.5, 2.5),
            WidthPoint::new(0.75, 0.5),
        ],
        true,
    );
    let dashes = DashPattern::new(
        20.0,
        [
            DashItem::new(30.0, 120.0),
            DashItem::new(20.0, 10.0).with_sides(SideType::Peaked, SideType::Squared),
        ],
    );
    let style = OutlineStyle::new(24.0)
        .with_homogeneous(true)
        .with_cusp(CuspStyle::Rounded);

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    println!("<svg height=\"800\" width=\"800\">");
    match outline(&spline, &widths, &dashes, &style, &OutlineOpts::default(), 1.0) {
        Ok(outline) => {
            let path = outline.to_path().to_svg();
            println!("  <path d=\"{path}\" fill=\"black\" fill-rule=\"evenodd\" />");
        }
        Err(e) => eprintln!("outline failed: {e}"),
    }
    println!("</svg>");
    println!("</body>");
    println!("</html>");
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}

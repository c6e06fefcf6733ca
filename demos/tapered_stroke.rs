// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example of an open stroke tapering between caps, in each cusp style.

#[cfg(feature = "std")]
fn main() {
    use varistroke::{
        outline, CuspStyle, DashPattern, OutlineOpts, OutlineStyle, Point, SideType, Spline,
        WidthPoint, WidthProfile,
    };

    let widths = WidthProfile::new(
        vec![
            WidthPoint::new(0.0, 0.2),
            WidthPoint::new(0.3, 1.5),
            WidthPoint::new(0.6, 1.0).with_sides(SideType::Interpolate, SideType::Rounded),
            WidthPoint::new(0.65, 1.0).with_sides(SideType::Rounded, SideType::Interpolate),
            WidthPoint::new(1.0, 0.1),
        ],
        false,
    );

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    println!("<svg height=\"800\" width=\"800\">");
    let dashes = DashPattern::default();
    let opts = OutlineOpts::default();
    let styles = [CuspStyle::Sharp, CuspStyle::Rounded, CuspStyle::Bevel];
    for (row, cusp) in styles.into_iter().enumerate() {
        let y = 150.0 + 250.0 * row as f64;
        let spline = Spline::polyline(
            &[
                Point::new(80.0, y),
                Point::new(300.0, y - 100.0),
                Point::new(500.0, y + 60.0),
                Point::new(720.0, y - 40.0),
            ],
            false,
        );
        let style = OutlineStyle::new(40.0)
            .with_smoothness(1.0)
            .with_cusp(cusp)
            .with_start_tip(SideType::Peaked)
            .with_end_tip(SideType::Squared);
        match outline(&spline, &widths, &dashes, &style, &opts, 1.0) {
            Ok(outline) => {
                let path = outline.to_path().to_svg();
                println!("  <path d=\"{path}\" fill=\"black\" />");
            }
            Err(e) => eprintln!("{cusp:?} outline failed: {e}"),
        }
    }
    println!("</svg>");
    println!("</body>");
    println!("</html>");
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}

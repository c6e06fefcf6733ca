// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths made of straight-line contours.

use alloc::vec::Vec;

use crate::Point;

/// A path of straight segments, possibly with multiple contours.
///
/// This is the shape handed to a rasterizer: every outline contour becomes
/// one closed subpath.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolyPath(Vec<PathEl>);

/// The element of a [`PolyPath`].
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Close off the subpath.
    ClosePath,
}

impl PolyPath {
    /// Create a new path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> Self {
        Self(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Append a closed polygon as a new subpath. Empty polygons are skipped.
    pub fn push_polygon(&mut self, points: &[Point]) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first);
        for &p in rest {
            self.line_to(p);
        }
        self.close_path();
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Signed area enclosed by the subpaths, each implicitly closed.
    ///
    /// Anti-clockwise contours (in a Y-up system) count positive.
    pub fn signed_area(&self) -> f64 {
        let mut area = 0.0;
        let mut start = None;
        let mut last = Point::ZERO;
        let mut edge = |a: Point, b: Point| area += a.to_vec2().cross(b.to_vec2());
        for el in &self.0 {
            match *el {
                PathEl::MoveTo(p) => {
                    if let Some(s) = start.take() {
                        edge(last, s);
                    }
                    start = Some(p);
                    last = p;
                }
                PathEl::LineTo(p) => {
                    edge(last, p);
                    last = p;
                }
                PathEl::ClosePath => {
                    if let Some(s) = start.take() {
                        edge(last, s);
                        last = s;
                    }
                }
            }
        }
        if let Some(s) = start {
            edge(last, s);
        }
        0.5 * area
    }
}

impl FromIterator<PathEl> for PolyPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<PathEl> for PolyPath {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PolyPath {
    type Item = PathEl;
    type IntoIter = core::iter::Cloned<core::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().cloned()
    }
}

impl IntoIterator for PolyPath {
    type Item = PathEl;
    type IntoIter = alloc::vec::IntoIter<PathEl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_polygon_closes() {
        let mut path = PolyPath::new();
        path.push_polygon(&[]);
        assert!(path.is_empty());
        path.push_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
        assert_eq!(path.elements().len(), 4);
        assert_eq!(path.elements()[3], PathEl::ClosePath);
    }

    #[test]
    fn signed_area_of_ring() {
        let square = |s: f64| {
            [
                Point::new(-s, -s),
                Point::new(s, -s),
                Point::new(s, s),
                Point::new(-s, s),
            ]
        };
        let mut path = PolyPath::new();
        path.push_polygon(&square(2.0));
        let mut inner = square(1.0);
        inner.reverse();
        path.push_polygon(&inner);
        assert!((path.signed_area() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn from_vec_matches_pushes() {
        let mut pushed = PolyPath::new();
        pushed.move_to((1.0, 2.0));
        pushed.line_to((3.0, 2.0));
        let built = PolyPath::from_vec(vec![
            PathEl::MoveTo(Point::new(1.0, 2.0)),
            PathEl::LineTo(Point::new(3.0, 2.0)),
        ]);
        assert_eq!(built, pushed);
    }

    #[test]
    fn collect_and_iterate() {
        let path: PolyPath = [
            PathEl::MoveTo(Point::ZERO),
            PathEl::LineTo(Point::new(2.0, 0.0)),
            PathEl::ClosePath,
        ]
        .into_iter()
        .collect();
        assert_eq!((&path).into_iter().count(), 3);
    }
}

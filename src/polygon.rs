// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two side polylines of an outline, and their assembly into polygons.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Point, PolyPath, Vec2};

/// Points emitted on both sides of the spline while walking it.
///
/// `a` lies along the left normal of the walking direction (Y up), `b`
/// along the right one.
#[derive(Clone, Debug, Default)]
pub(crate) struct Sides {
    pub(crate) a: Vec<Point>,
    pub(crate) b: Vec<Point>,
}

impl Sides {
    /// Push `p + offset` to side a and `p - offset` to side b.
    #[inline]
    pub(crate) fn push_offset(&mut self, p: Point, offset: Vec2) {
        self.a.push(p + offset);
        self.b.push(p - offset);
    }

    /// Push the same point to both sides.
    #[inline]
    pub(crate) fn push_both(&mut self, p: Point) {
        self.a.push(p);
        self.b.push(p);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    /// Turn the sides into final polygons.
    ///
    /// A looped outline is a ring: side a and reversed side b, each its own
    /// closed polygon. Otherwise reversed side b is appended to side a,
    /// giving a single polygon.
    pub(crate) fn assemble(self, looped: bool) -> Outline {
        let Self { mut a, mut b } = self;
        b.reverse();
        let mut contours = SmallVec::new();
        if looped {
            contours.push(a);
            contours.push(b);
        } else {
            a.append(&mut b);
            contours.push(a);
        }
        Outline { contours, looped }
    }
}

/// The filled region of a stroked spline, as closed polygons.
///
/// An open spline yields a single polygon. A looped spline yields two, the
/// outer and inner boundary of a ring, to be filled with either the
/// nonzero or the even-odd rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    contours: SmallVec<[Vec<Point>; 2]>,
    looped: bool,
}

impl Outline {
    /// The closed polygons making up the outline.
    pub fn contours(&self) -> &[Vec<Point>] {
        &self.contours
    }

    /// Whether this outline is a ring from a looped spline.
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Whether no geometry was produced.
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(Vec::is_empty)
    }

    /// Total number of points over all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Vec::len).sum()
    }

    /// Convert to a path with one closed subpath per contour.
    pub fn to_path(&self) -> PolyPath {
        let mut path = PolyPath::new();
        for contour in &self.contours {
            path.push_polygon(contour);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides() -> Sides {
        let mut s = Sides::default();
        s.push_offset(Point::new(0.0, 0.0), Vec2::new(0.0, 1.0));
        s.push_offset(Point::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        s
    }

    #[test]
    fn open_assembly_is_one_polygon() {
        let outline = sides().assemble(false);
        assert!(!outline.is_looped());
        assert_eq!(
            outline.contours(),
            &[vec![
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, -1.0),
                Point::new(0.0, -1.0),
            ]]
        );
        assert!((outline.to_path().signed_area().abs() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn looped_assembly_is_a_ring() {
        let outline = sides().assemble(true);
        assert_eq!(outline.contours().len(), 2);
        assert_eq!(outline.contours()[1][0], Point::new(1.0, -1.0));
        assert_eq!(outline.point_count(), 4);
    }

    #[test]
    fn default_outline_is_empty() {
        assert!(Outline::default().is_empty());
        assert!(Outline::default().to_path().is_empty());
    }
}

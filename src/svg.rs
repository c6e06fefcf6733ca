// Copyright 2026 the Varistroke Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation.

use alloc::string::String;
use core::fmt::{self, Write as _};

#[cfg(feature = "std")]
use std::io::{self, Write};

use crate::{PathEl, PolyPath};

impl PolyPath {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut result);
        result
    }

    /// Write the SVG representation of this path to the provided writer.
    ///
    /// # Errors
    ///
    /// Returns any error the writer produces.
    #[cfg(feature = "std")]
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_svg().as_bytes())
    }

    fn write_svg(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (i, el) in self.elements().iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(out, "M{},{}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(out, "L{},{}", p.x, p.y)?,
                PathEl::ClosePath => out.write_char('Z')?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, PolyPath};

    #[test]
    fn test_to_svg() {
        let mut path = PolyPath::new();
        path.push_polygon(&[Point::new(0.0, 0.0), Point::new(2.5, 0.0), Point::new(1.0, 3.0)]);
        assert_eq!(path.to_svg(), "M0,0 L2.5,0 L1,3 Z");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_write_to_matches_to_svg() {
        let mut path = PolyPath::new();
        path.push_polygon(&[Point::new(1.0, 1.0), Point::new(-1.0, 2.0)]);
        let mut bytes = Vec::new();
        path.write_to(&mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), path.to_svg());
    }
}

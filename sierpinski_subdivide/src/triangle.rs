// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// An equilateral triangle pointing up, anchored at its apex.
///
/// The triangle extends downward (towards `+y`) from `apex`; its base is
/// `size` wide and sits `height() = (√3/2)·size` below the apex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Top vertex in world coordinates.
    pub apex: Point,
    /// Side length in world units.
    pub size: f64,
}

impl Triangle {
    /// Creates a triangle from its apex and side length.
    #[inline]
    #[must_use]
    pub const fn new(apex: Point, size: f64) -> Self {
        Self { apex, size }
    }

    /// Creates a triangle whose bounding box is centred on `center`.
    ///
    /// The apex lies half the height above `center`.
    #[must_use]
    pub fn centered_at(center: Point, size: f64) -> Self {
        let half_height = SQRT_3 / 4.0 * size;
        Self::new(Point::new(center.x, center.y - half_height), size)
    }

    /// Vertical extent from apex to base.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        SQRT_3 / 2.0 * self.size
    }

    /// Returns `true` when the side length is positive and every coordinate is finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size.is_finite() && self.size > 0.0 && self.apex.is_finite()
    }

    /// The three vertices: apex, bottom-right, bottom-left.
    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        let half = self.size / 2.0;
        let base_y = self.apex.y + self.height();
        [
            self.apex,
            Point::new(self.apex.x + half, base_y),
            Point::new(self.apex.x - half, base_y),
        ]
    }

    /// Axis-aligned world-space bounds: `[x − size/2, x + size/2] × [y, y + height]`.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let half = self.size / 2.0;
        Rect::new(
            self.apex.x - half,
            self.apex.y,
            self.apex.x + half,
            self.apex.y + self.height(),
        )
    }

    /// Splits the triangle at its edge midpoints, dropping the middle piece.
    ///
    /// Returns the top, bottom-left and bottom-right children, each with half
    /// the side length.
    #[must_use]
    pub fn children(&self) -> [Self; 3] {
        let half = self.size / 2.0;
        let h = SQRT_3 / 4.0 * self.size;
        let Point { x, y } = self.apex;
        [
            Self::new(Point::new(x, y), half),
            Self::new(Point::new(x - half / 2.0, y + h), half),
            Self::new(Point::new(x + half / 2.0, y + h), half),
        ]
    }

    /// Closed outline path suitable for a fill.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let [a, b, c] = self.vertices();
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }
}

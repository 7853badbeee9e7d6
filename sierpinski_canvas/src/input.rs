// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Pointer and wheel input, in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A wheel notch. Negative `delta_y` zooms in, positive zooms out.
    Wheel {
        /// Vertical wheel delta; only the sign is used.
        delta_y: f64,
        /// Pointer position when the wheel moved.
        position: Point,
    },
    /// Primary button pressed over the surface.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Primary button released.
    PointerUp(Point),
    /// Pointer left the surface.
    PointerLeave,
}

impl InputEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Wheel { position, .. }
            | Self::PointerDown(position)
            | Self::PointerMove(position)
            | Self::PointerUp(position) => Some(position),
            Self::PointerLeave => None,
        }
    }
}

/// Inclusive containment: points on the right and bottom edges count as inside.
pub(crate) fn within(bounds: Rect, pt: Point) -> bool {
    pt.x >= bounds.x0 && pt.x <= bounds.x1 && pt.y >= bounds.y0 && pt.y <= bounds.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inside() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(within(bounds, Point::new(0.0, 0.0)));
        assert!(within(bounds, Point::new(800.0, 600.0)));
        assert!(!within(bounds, Point::new(800.5, 300.0)));
        assert!(!within(bounds, Point::new(400.0, -1.0)));
        assert!(!within(bounds, Point::new(f64::NAN, 10.0)));
    }

    #[test]
    fn leave_has_no_position() {
        assert_eq!(InputEvent::PointerLeave.position(), None);
        assert_eq!(
            InputEvent::Wheel {
                delta_y: -1.0,
                position: Point::new(3.0, 4.0)
            }
            .position(),
            Some(Point::new(3.0, 4.0))
        );
    }
}

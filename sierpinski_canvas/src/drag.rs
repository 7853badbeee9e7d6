// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture tracking: turn pointer positions into per-move deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer down.
//! 2) On each pointer move, [`DragState::update`] returns the movement since
//!    the previous position, which is exactly the pan to apply.
//! 3) [`DragState::total_offset`] reports the cumulative movement of the gesture.
//! 4) [`DragState::end`] on pointer up or when the pointer leaves the surface.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use sierpinski_canvas::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(12.0, 25.0)), Some(Vec2::new(-3.0, 0.0)));
//! assert_eq!(drag.total_offset(Point::new(12.0, 25.0)), Some(Vec2::new(2.0, 5.0)));
//!
//! drag.end();
//! assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Pointer positions of an in-progress pan gesture.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    /// Begins a gesture at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Records `pos` and returns the movement since the previous position.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.origin?;
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    /// Movement from the gesture's starting point to `current`.
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.origin.map(|origin| current - origin)
    }

    /// Ends the gesture.
    pub fn end(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

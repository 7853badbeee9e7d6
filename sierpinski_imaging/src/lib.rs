// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sierpinski Imaging: the drawing-surface contract.
//!
//! This crate defines the small imaging vocabulary the fractal canvas speaks
//! and the [`Surface`] trait that concrete surfaces implement. It sits between
//! the canvas controller and whatever actually produces pixels (a recording
//! surface for tests, an SVG exporter, a browser canvas, and so on).
//!
//! # Core concepts
//!
//! - **Imaging operations**: [`StateOp`] (mutate the fill style or the
//!   transform stack) and [`DrawOp`] (clear or fill), combined into
//!   [`ImagingOp`] for recording.
//! - **Surfaces**: [`Surface`] accepts imaging ops, reports its pixel size
//!   and exposes the currently effective transform so callers can convert
//!   world sizes into on-screen sizes.
//! - **State tracking**: [`SurfaceState`] folds [`StateOp`]s into the
//!   current transform and fill, for surfaces that keep their own state.
//!
//! Paths are plain [`kurbo::BezPath`] values built with `move_to`,
//! `line_to` and `close_path`.
//!
//! # Example
//!
//! ```ignore
//! # use sierpinski_imaging::*;
//! # use kurbo::{BezPath, Vec2};
//! # use peniko::Color;
//! # struct MySurface { /* implements Surface */ }
//! let mut surface = MySurface { /* ... */ };
//!
//! surface.reset_transform();
//! surface.clear();
//! surface.translate(Vec2::new(400.0, 300.0));
//! surface.scale(2.0);
//! surface.set_fill_style(Color::BLACK);
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 17.0));
//! path.line_to((-10.0, 17.0));
//! path.close_path();
//! surface.fill_path(path);
//! assert_eq!(surface.current_scale(), 2.0);
//! ```

#![no_std]

use kurbo::{Affine, BezPath, Size, Vec2};
pub use peniko::Color;

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Replace the current transform with the identity.
    ResetTransform,
    /// Append a translation to the current transform.
    ///
    /// The translation is applied in the current local space, like
    /// `CanvasRenderingContext2D.translate`.
    Translate(Vec2),
    /// Append a uniform scale to the current transform.
    Scale(f64),
    /// Set the color used by [`DrawOp::FillPath`].
    SetFill(Color),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface, regardless of the current transform.
    Clear,
    /// Fill a closed path with the current fill color, under the current transform.
    FillPath(BezPath),
}

/// Unified imaging operation used by recording surfaces.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Current transform and fill of a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    /// Current transform from local (world) to surface pixels.
    pub transform: Affine,
    /// Current fill color.
    pub fill: Color,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Color::BLACK,
        }
    }
}

impl SurfaceState {
    /// Folds a state operation into this state.
    pub fn apply(&mut self, op: &StateOp) {
        match op {
            StateOp::ResetTransform => self.transform = Affine::IDENTITY,
            StateOp::Translate(v) => self.transform *= Affine::translate(*v),
            StateOp::Scale(s) => self.transform *= Affine::scale(*s),
            StateOp::SetFill(color) => self.fill = *color,
        }
    }
}

/// A drawing surface.
///
/// The required methods mirror a 2D canvas context: state and draw entry
/// points, the pixel size of the surface and the currently effective
/// transform. The provided methods are shorthands for single ops.
pub trait Surface {
    /// Pixel dimensions of the surface.
    fn size(&self) -> Size;

    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// The currently effective local → pixel transform.
    fn transform(&self) -> Affine;

    /// Returns `true` when the surface has a non-zero pixel area.
    #[inline]
    fn is_ready(&self) -> bool {
        let size = self.size();
        size.width > 0.0 && size.height > 0.0
    }

    /// Length in pixels of one local unit along the x axis.
    ///
    /// This converts a world-space size into an on-screen size.
    #[inline]
    fn current_scale(&self) -> f64 {
        let [a, b, ..] = self.transform().as_coeffs();
        Vec2::new(a, b).hypot()
    }

    /// Equivalent to `self.draw(DrawOp::Clear)`.
    #[inline]
    fn clear(&mut self) {
        self.draw(DrawOp::Clear);
    }

    /// Equivalent to `self.state(StateOp::SetFill(color))`.
    #[inline]
    fn set_fill_style(&mut self, color: Color) {
        self.state(StateOp::SetFill(color));
    }

    /// Equivalent to `self.state(StateOp::Translate(offset))`.
    #[inline]
    fn translate(&mut self, offset: Vec2) {
        self.state(StateOp::Translate(offset));
    }

    /// Equivalent to `self.state(StateOp::Scale(factor))`.
    #[inline]
    fn scale(&mut self, factor: f64) {
        self.state(StateOp::Scale(factor));
    }

    /// Equivalent to `self.state(StateOp::ResetTransform)`.
    #[inline]
    fn reset_transform(&mut self) {
        self.state(StateOp::ResetTransform);
    }

    /// Equivalent to `self.draw(DrawOp::FillPath(path))`.
    #[inline]
    fn fill_path(&mut self, path: BezPath) {
        self.draw(DrawOp::FillPath(path));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};
    use peniko::Color;

    use super::{StateOp, SurfaceState};

    #[test]
    fn translate_then_scale_matches_canvas_order() {
        let mut state = SurfaceState::default();
        state.apply(&StateOp::Translate(Vec2::new(400.0, 300.0)));
        state.apply(&StateOp::Scale(2.0));

        assert_eq!(
            state.transform * Point::new(10.0, 5.0),
            Point::new(420.0, 310.0)
        );
    }

    #[test]
    fn reset_and_fill() {
        let mut state = SurfaceState::default();
        assert_eq!(state.fill, Color::BLACK);

        state.apply(&StateOp::Scale(3.0));
        state.apply(&StateOp::SetFill(Color::WHITE));
        state.apply(&StateOp::ResetTransform);

        assert_eq!(state.transform, Affine::IDENTITY);
        assert_eq!(state.fill, Color::WHITE);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::WheelDirection;

/// Zoom limits and wheel step factors for a [`ViewTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Smallest allowed zoom factor.
    pub min_zoom: f64,
    /// Largest allowed zoom factor.
    pub max_zoom: f64,
    /// Factor applied for one [`WheelDirection::In`] step.
    pub zoom_step_in: f64,
    /// Factor applied for one [`WheelDirection::Out`] step.
    pub zoom_step_out: f64,
}

impl ViewConfig {
    /// Default lower zoom bound.
    pub const DEFAULT_MIN_ZOOM: f64 = 0.01;
    /// Default upper zoom bound.
    pub const DEFAULT_MAX_ZOOM: f64 = 220_000.0;
    /// Default zoom-in wheel factor.
    pub const DEFAULT_ZOOM_STEP_IN: f64 = 1.1;
    /// Default zoom-out wheel factor.
    pub const DEFAULT_ZOOM_STEP_OUT: f64 = 0.9;

    /// Returns the factor used for a single wheel step in `direction`.
    #[must_use]
    pub fn step(&self, direction: WheelDirection) -> f64 {
        match direction {
            WheelDirection::In => self.zoom_step_in,
            WheelDirection::Out => self.zoom_step_out,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom: Self::DEFAULT_MIN_ZOOM,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
            zoom_step_in: Self::DEFAULT_ZOOM_STEP_IN,
            zoom_step_out: Self::DEFAULT_ZOOM_STEP_OUT,
        }
    }
}

/// Pan/zoom state of one rendering surface.
///
/// `ViewTransform` tracks the surface rectangle in screen (pixel) space, a
/// uniform zoom factor and a free pixel offset. World points map to the screen
/// as `world * zoom + centre + offset`, where `centre` is the centre of the
/// surface rectangle.
///
/// It can be used to:
/// - Convert points and rectangles between world and screen coordinates.
/// - Zoom around the pointer so the world point under it stays put.
/// - Derive the visible world rectangle for culling.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    view_rect: Rect,
    zoom: f64,
    offset: Vec2,
    config: ViewConfig,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl ViewTransform {
    /// Creates a transform over `view_rect` with the default [`ViewConfig`].
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial offset is zero (world origin maps to the centre of `view_rect`).
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_config(view_rect, ViewConfig::default())
    }

    /// Creates a transform over `view_rect` using `config`.
    ///
    /// The zoom limits are normalized the same way as
    /// [`ViewTransform::set_zoom_limits`], and the initial zoom of `1.0` is
    /// clamped into them.
    #[must_use]
    pub fn with_config(view_rect: Rect, config: ViewConfig) -> Self {
        let mut vt = Self {
            view_rect,
            zoom: 1.0,
            offset: Vec2::ZERO,
            config,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vt.set_zoom_limits(config.min_zoom, config.max_zoom);
        vt.rebuild_transforms();
        vt
    }

    /// Returns the current surface rectangle in screen coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Returns the size of the surface rectangle in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_rect.size()
    }

    /// Sets the surface rectangle, for example after the canvas was resized.
    ///
    /// Zoom and offset are kept; the world point at the centre moves with the
    /// new centre.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the `(min_zoom, max_zoom)` pair currently in force.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.config.min_zoom, self.config.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `0 < min_zoom <= max_zoom`.
    /// The current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.config.min_zoom = min_zoom.max(f64::MIN_POSITIVE);
        self.config.max_zoom = max_zoom.max(self.config.min_zoom);
        self.set_zoom(self.zoom);
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// The offset is left untouched, so this zooms about the transform
    /// origin rather than the pointer. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let clamped = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        if clamped == self.zoom {
            return;
        }
        self.zoom = clamped;
        self.rebuild_transforms();
    }

    /// Replaces the pan offset. Non-finite offsets are ignored.
    pub fn set_offset(&mut self, offset: Vec2) {
        if !offset.is_finite() || self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Returns `true` if the zoom sits on the lower clamp boundary.
    #[must_use]
    pub fn is_at_min_zoom(&self) -> bool {
        self.zoom <= self.config.min_zoom
    }

    /// Returns `true` if the zoom sits on the upper clamp boundary.
    #[must_use]
    pub fn is_at_max_zoom(&self) -> bool {
        self.zoom >= self.config.max_zoom
    }

    /// Applies one wheel step at `pointer` (screen coordinates).
    ///
    /// The new zoom is `zoom * step` clamped to the configured range, and the
    /// offset is recomputed so that the world point under `pointer` stays
    /// under it. Returns `true` if the state changed.
    pub fn apply_zoom(&mut self, pointer: Point, direction: WheelDirection) -> bool {
        self.zoom_about_view_point(pointer, self.config.step(direction))
    }

    /// Zooms by `factor` around an anchor point in screen coordinates.
    ///
    /// With `d` the anchor's offset from the transform origin
    /// (`centre + offset`), the new offset is `offset + d * (1 - new/old)`.
    /// Non-positive or non-finite factors are ignored, as is a step that the
    /// clamp turns into a no-op. Returns `true` if the state changed.
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
            return false;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.config.min_zoom, self.config.max_zoom);
        if new_zoom == old_zoom {
            return false;
        }

        let d = anchor - self.transform_origin();
        self.offset += d * (1.0 - new_zoom / old_zoom);
        self.zoom = new_zoom;
        self.rebuild_transforms();
        true
    }

    /// Pans the view by a delta in screen pixels.
    ///
    /// Panning is never clamped. Zero and non-finite deltas are ignored.
    /// Returns `true` if the state changed.
    pub fn apply_pan(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return false;
        }
        self.offset += delta;
        self.rebuild_transforms();
        true
    }

    /// Screen position of the world origin: the surface centre plus the offset.
    #[must_use]
    pub fn transform_origin(&self) -> Point {
        self.view_rect.center() + self.offset
    }

    /// Returns the world → screen affine map.
    ///
    /// This is the transform a drawing surface should apply before filling
    /// world-space geometry.
    #[must_use]
    pub fn world_to_screen_transform(&self) -> Affine {
        self.world_to_view
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world‑space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        map_rect(self.world_to_view, rect)
    }

    /// Converts a screen‑space rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        map_rect(self.view_to_world, rect)
    }

    /// Returns the visible world‑space rectangle.
    ///
    /// This is derived on every call from the surface rectangle, zoom and
    /// offset; it is never stored.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world_rect(self.view_rect)
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            view_rect: self.view_rect,
            visible_world_rect: self.visible_world_rect(),
            zoom: self.zoom,
            offset: self.offset,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
        }
    }

    fn rebuild_transforms(&mut self) {
        // World → screen: scale, then translate so the world origin lands on
        // the surface centre shifted by the pan offset.
        self.world_to_view =
            Affine::translate(self.transform_origin().to_vec2()) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }
}

fn map_rect(xf: Affine, rect: Rect) -> Rect {
    // Transform the four corners and take their bounding box. This is
    // sufficient for the axis‑aligned, uniform zoom transform used here.
    let q0 = xf * Point::new(rect.x0, rect.y0);
    let q1 = xf * Point::new(rect.x1, rect.y0);
    let q2 = xf * Point::new(rect.x0, rect.y1);
    let q3 = xf * Point::new(rect.x1, rect.y1);
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Current surface rectangle in screen coordinates.
    pub view_rect: Rect,
    /// World‑space rectangle currently visible through the surface.
    pub visible_world_rect: Rect,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Current pan offset in screen pixels.
    pub offset: Vec2,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

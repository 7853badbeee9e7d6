// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use sierpinski_imaging::Surface;
use sierpinski_subdivide::{AdaptiveSubdivider, SubdivisionConfig, SubdivisionStats, Triangle};
use sierpinski_view2d::{ViewConfig, ViewTransform, WheelDirection};

use crate::input::within;
use crate::{DragState, FrameError, FrameHandle, FrameScheduler, InputEvent, paint_frame};

/// Settings for a [`FractalCanvas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Zoom limits and wheel steps.
    pub view: ViewConfig,
    /// Pixel thresholds for the adaptive walk.
    pub subdivision: SubdivisionConfig,
    /// Side length of the root triangle in world units.
    pub root_size: f64,
}

impl CanvasConfig {
    /// Default side length of the root triangle.
    pub const DEFAULT_ROOT_SIZE: f64 = 600.0;

    /// Root triangle with its bounding box centred on the world origin.
    pub fn root_triangle(&self) -> Triangle {
        Triangle::centered_at(Point::ORIGIN, self.root_size)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            subdivision: SubdivisionConfig::default(),
            root_size: Self::DEFAULT_ROOT_SIZE,
        }
    }
}

/// Interactive Sierpinski canvas.
///
/// Owns the view transform, the pan gesture and the subdivider scratch
/// state. Input mutates the transform and requests a redraw; redraws are
/// coalesced into a single pending frame on the host [`FrameScheduler`], and
/// the host paints by calling [`FractalCanvas::on_frame`] with the handle it
/// was given.
///
/// ```
/// use kurbo::{Point, Size};
/// use sierpinski_canvas::{CanvasConfig, FractalCanvas, InputEvent, ManualScheduler};
///
/// let mut canvas = FractalCanvas::new(
///     Size::new(800.0, 600.0),
///     CanvasConfig::default(),
///     ManualScheduler::default(),
/// );
/// canvas.handle_event(InputEvent::Wheel {
///     delta_y: -100.0,
///     position: Point::new(400.0, 300.0),
/// });
/// assert!((canvas.view().zoom() - 1.1).abs() < 1e-12);
///
/// // The mount frame was replaced by the one the wheel requested.
/// assert_eq!(canvas.scheduler().pending().len(), 1);
/// ```
#[derive(Debug)]
pub struct FractalCanvas<S: FrameScheduler> {
    view: ViewTransform,
    root: Triangle,
    subdivider: AdaptiveSubdivider,
    drag: DragState,
    scheduler: S,
    pending: Option<FrameHandle>,
    last_stats: Option<SubdivisionStats>,
}

impl<S: FrameScheduler> FractalCanvas<S> {
    /// Mounts a canvas of `size` pixels and schedules its first frame.
    pub fn new(size: Size, config: CanvasConfig, scheduler: S) -> Self {
        let root = config.root_triangle();
        if !root.is_valid() {
            log::warn!(
                "root size {} is not drawable; nothing will be painted",
                config.root_size
            );
        }
        let mut canvas = Self {
            view: ViewTransform::with_config(
                Rect::from_origin_size(Point::ORIGIN, size),
                config.view,
            ),
            root,
            subdivider: AdaptiveSubdivider::new(config.subdivision),
            drag: DragState::default(),
            scheduler,
            pending: None,
            last_stats: None,
        };
        canvas.request_redraw();
        canvas
    }

    /// Current view transform.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Root triangle in world coordinates.
    pub fn root(&self) -> Triangle {
        self.root
    }

    /// The host scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the host scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle of the frame that will paint next, if one is scheduled.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Returns `true` while a pan gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Counters from the most recent painted frame.
    pub fn last_stats(&self) -> Option<SubdivisionStats> {
        self.last_stats
    }

    /// Applies one input event.
    ///
    /// Wheel events outside the surface bounds are ignored. A wheel notch
    /// zooms about the pointer; a pointer move while dragging pans by the
    /// movement since the previous move; pointer up or leave ends the drag.
    /// Returns `true` if the view changed, in which case a redraw was requested.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let changed = match event {
            InputEvent::Wheel { delta_y, position } => {
                if !within(self.view.view_rect(), position) {
                    log::trace!("ignoring wheel outside the surface at {position:?}");
                    return false;
                }
                match WheelDirection::from_delta_y(delta_y) {
                    Some(direction) => self.view.apply_zoom(position, direction),
                    None => false,
                }
            }
            InputEvent::PointerDown(position) => {
                self.drag.start(position);
                false
            }
            InputEvent::PointerMove(position) => match self.drag.update(position) {
                Some(delta) => self.view.apply_pan(delta),
                None => false,
            },
            InputEvent::PointerUp(_) | InputEvent::PointerLeave => {
                self.drag.end();
                false
            }
        };
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Jumps to an explicit zoom and offset, then schedules a redraw.
    ///
    /// The zoom is clamped to the configured limits.
    pub fn set_view(&mut self, zoom: f64, offset: Vec2) {
        self.view.set_zoom(zoom);
        self.view.set_offset(offset);
        self.request_redraw();
    }

    /// Updates the surface size and schedules a redraw.
    ///
    /// The zoom and offset are kept, so the world point at the centre of
    /// the surface stays at the centre.
    pub fn resize(&mut self, size: Size) {
        let rect = Rect::from_origin_size(Point::ORIGIN, size);
        if rect == self.view.view_rect() {
            return;
        }
        self.view.set_view_rect(rect);
        self.request_redraw();
    }

    /// Schedules a frame, cancelling the one already pending.
    ///
    /// At most one frame is ever pending; every call replaces it.
    pub fn request_redraw(&mut self) -> FrameHandle {
        if let Some(stale) = self.pending.take() {
            log::trace!("superseding pending frame {stale:?}");
            self.scheduler.cancel_frame(stale);
        }
        let handle = self.scheduler.request_frame();
        self.pending = Some(handle);
        handle
    }

    /// Host callback for a scheduled frame.
    ///
    /// Paints when `handle` is the pending frame and `surface` is present
    /// with a non-zero area. The view is synced to the surface size before
    /// painting. A missing surface consumes the frame without drawing.
    pub fn on_frame<T>(
        &mut self,
        handle: FrameHandle,
        surface: Option<&mut T>,
    ) -> Result<SubdivisionStats, FrameError>
    where
        T: Surface + ?Sized,
    {
        match self.pending {
            None => return Err(FrameError::NoPendingFrame),
            Some(pending) if pending != handle => return Err(FrameError::Superseded(handle)),
            Some(_) => self.pending = None,
        }

        let Some(surface) = surface.filter(|s| s.is_ready()) else {
            log::debug!("skipping frame {handle:?}: surface not ready");
            return Err(FrameError::NotReady);
        };

        let rect = Rect::from_origin_size(Point::ORIGIN, surface.size());
        if rect != self.view.view_rect() {
            self.view.set_view_rect(rect);
        }

        let stats = paint_frame(surface, &self.view, self.root, &mut self.subdivider);
        log::trace!(
            "frame {handle:?}: zoom {:.4}, {} leaves, {} culled, depth {}",
            self.view.zoom(),
            stats.leaves,
            stats.culled,
            stats.max_depth
        );
        self.last_stats = Some(stats);
        Ok(stats)
    }

    /// Paints immediately, bypassing the scheduler.
    ///
    /// Any pending frame stays pending.
    pub fn paint_now<T>(&mut self, surface: &mut T) -> Result<SubdivisionStats, FrameError>
    where
        T: Surface + ?Sized,
    {
        if !surface.is_ready() {
            return Err(FrameError::NotReady);
        }
        self.view
            .set_view_rect(Rect::from_origin_size(Point::ORIGIN, surface.size()));
        let stats = paint_frame(surface, &self.view, self.root, &mut self.subdivider);
        self.last_stats = Some(stats);
        Ok(stats)
    }

    /// Cancels the pending frame and ends any drag.
    ///
    /// Later frame callbacks report [`FrameError::NoPendingFrame`] until a
    /// new redraw is requested.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.pending.take() {
            log::debug!("unmounting with frame {handle:?} pending; cancelling");
            self.scheduler.cancel_frame(handle);
        }
        self.drag.end();
    }
}

impl<S: FrameScheduler> Drop for FractalCanvas<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use sierpinski_imaging_ref::RefSurface;

    use super::*;
    use crate::ManualScheduler;

    fn canvas() -> FractalCanvas<ManualScheduler> {
        FractalCanvas::new(
            Size::new(800.0, 600.0),
            CanvasConfig::default(),
            ManualScheduler::default(),
        )
    }

    #[test]
    fn mount_schedules_one_frame() {
        let canvas = canvas();
        assert_eq!(canvas.scheduler().pending().len(), 1);
        assert_eq!(
            canvas.pending_frame(),
            canvas.scheduler().pending().first().copied()
        );
        assert_eq!(canvas.view().zoom(), 1.0);
        assert_eq!(canvas.view().offset(), Vec2::ZERO);
    }

    #[test]
    fn wheel_on_boundary_is_accepted() {
        let mut canvas = canvas();
        assert!(canvas.handle_event(InputEvent::Wheel {
            delta_y: 3.0,
            position: Point::new(800.0, 600.0),
        }));
        assert!((canvas.view().zoom() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn zero_delta_wheel_is_ignored() {
        let mut canvas = canvas();
        let pending = canvas.pending_frame();
        assert!(!canvas.handle_event(InputEvent::Wheel {
            delta_y: 0.0,
            position: Point::new(10.0, 10.0),
        }));
        assert_eq!(canvas.pending_frame(), pending);
    }

    #[test]
    fn resize_to_same_size_is_noop() {
        let mut canvas = canvas();
        let pending = canvas.pending_frame();
        canvas.resize(Size::new(800.0, 600.0));
        assert_eq!(canvas.pending_frame(), pending);

        canvas.resize(Size::new(400.0, 300.0));
        assert_ne!(canvas.pending_frame(), pending);
        assert_eq!(canvas.view().transform_origin(), Point::new(200.0, 150.0));
    }

    #[test]
    fn frame_syncs_view_to_surface() {
        let mut canvas = canvas();
        let handle = canvas.pending_frame().unwrap();
        let mut surface = RefSurface::new(1024.0, 768.0);
        canvas.on_frame(handle, Some(&mut surface)).unwrap();
        assert_eq!(canvas.view().view_size(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn drop_cancels_pending_frame() {
        let mut scheduler = ManualScheduler::default();
        {
            let canvas = FractalCanvas::new(
                Size::new(100.0, 100.0),
                CanvasConfig::default(),
                &mut scheduler,
            );
            assert!(canvas.pending_frame().is_some());
        }
        assert!(scheduler.pending().is_empty());
        assert_eq!(scheduler.cancelled(), 1);
    }
}

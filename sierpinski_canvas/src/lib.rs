// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sierpinski Canvas: the interactive controller.
//!
//! This crate ties the pieces together:
//!
//! - [`sierpinski_view2d::ViewTransform`] holds zoom and pan,
//! - [`sierpinski_subdivide::AdaptiveSubdivider`] decides which triangles to draw,
//! - [`sierpinski_imaging::Surface`] receives the drawing commands.
//!
//! [`FractalCanvas`] consumes [`InputEvent`]s, keeps at most one redraw pending
//! on a host [`FrameScheduler`], and paints with [`paint_frame`] when the host
//! delivers the frame.
//!
//! ## Frame loop
//!
//! ```
//! use kurbo::{Point, Size};
//! use sierpinski_canvas::{CanvasConfig, FractalCanvas, InputEvent, ManualScheduler};
//! use sierpinski_imaging_ref::RefSurface;
//!
//! let mut surface = RefSurface::new(800.0, 600.0);
//! let mut canvas = FractalCanvas::new(
//!     Size::new(800.0, 600.0),
//!     CanvasConfig::default(),
//!     ManualScheduler::default(),
//! );
//!
//! canvas.handle_event(InputEvent::PointerDown(Point::new(100.0, 100.0)));
//! canvas.handle_event(InputEvent::PointerMove(Point::new(130.0, 90.0)));
//! canvas.handle_event(InputEvent::PointerUp(Point::new(130.0, 90.0)));
//!
//! for handle in canvas.scheduler_mut().take_due() {
//!     let stats = canvas.on_frame(handle, Some(&mut surface)).unwrap();
//!     assert!(stats.leaves > 0);
//! }
//! assert_eq!(surface.fills().count(), canvas.last_stats().unwrap().leaves);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: skipped and superseded frames
//! at `debug`/`trace`, per-frame subdivision counters at `trace`. It never
//! installs a logger itself.

mod canvas;
mod drag;
mod error;
mod input;
mod paint;
mod schedule;

pub use canvas::{CanvasConfig, FractalCanvas};
pub use drag::DragState;
pub use error::FrameError;
pub use input::InputEvent;
pub use paint::{FILL_COLOR, paint_frame};
pub use schedule::{FrameHandle, FrameScheduler, ManualScheduler};

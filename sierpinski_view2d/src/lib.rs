// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sierpinski View 2D: the pan/zoom state behind the fractal canvas.
//!
//! This crate provides a small, headless model of a world‑space view whose
//! extents are expressed in device pixels. It focuses on:
//! - Zoom factor and pixel offset state (pan + zoom).
//! - Coordinate conversion between world and screen (pixel) space.
//! - Zoom‑to‑cursor: the world point under the pointer stays under the
//!   pointer across a zoom step.
//! - Zoom clamping to a configured `[min_zoom, max_zoom]` range.
//!
//! It does **not** own any geometry or rendering backend. Callers are
//! expected to:
//! - Feed wheel and drag input into [`ViewTransform::apply_zoom`] and
//!   [`ViewTransform::apply_pan`].
//! - Use [`ViewTransform::visible_world_rect`] for culling and
//!   [`ViewTransform::world_to_screen_transform`] to set up a drawing surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use sierpinski_view2d::{ViewTransform, WheelDirection};
//!
//! // 800x600 canvas; the world origin sits at the canvas centre.
//! let mut view = ViewTransform::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! assert_eq!(view.world_to_screen(Point::ORIGIN), Point::new(400.0, 300.0));
//!
//! // Wheel up over the canvas centre zooms in without moving the centre.
//! view.apply_zoom(Point::new(400.0, 300.0), WheelDirection::In);
//! assert!((view.zoom() - 1.1).abs() < 1e-12);
//! assert_eq!(view.offset(), Vec2::ZERO);
//!
//! // Dragging pans in screen pixels.
//! view.apply_pan(Vec2::new(25.0, -10.0));
//! assert_eq!(view.offset(), Vec2::new(25.0, -10.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis‑aligned with a **uniform** zoom factor.
//! - The screen origin of the world is the canvas centre plus the pan offset:
//!   `screen = world * zoom + centre + offset`.
//! - Panning is unconstrained; only zoom is clamped.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod transform;

pub use modes::WheelDirection;
pub use transform::{ViewConfig, ViewTransform, ViewTransformDebugInfo};

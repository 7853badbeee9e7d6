// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface for the Sierpinski canvas.
//!
//! This crate provides a small implementation of [`Surface`] that records
//! imaging ops and can export them as an SVG document.
//!
//! This is intended for headless output and inspection:
//! - Every fill is written as one `<path>` in surface pixel coordinates; the
//!   transform in effect at the time of the fill is baked into the path
//!   rather than emitted as an SVG `transform` attribute, which keeps deep
//!   zoom levels precise.
//! - [`DrawOp::Clear`] discards everything drawn before it.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{Affine, BezPath, PathEl, Size};
use peniko::Color;
use sierpinski_imaging::{DrawOp, ImagingOp, StateOp, Surface, SurfaceState};

/// A recording SVG surface.
#[derive(Default, Debug)]
pub struct SvgSurface {
    size: Size,
    ops: Vec<ImagingOp>,
    state: SurfaceState,
}

impl SvgSurface {
    /// Creates an SVG surface of `width × height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(f64::from(width), f64::from(height)),
            ..Self::default()
        }
    }

    /// Clears the recorded ops while retaining the current state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Returns the recorded imaging ops.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Export the currently recorded ops as an SVG document.
    ///
    /// The surface size is used both as the SVG `width`/`height` attributes
    /// and to set `viewBox="0 0 width height"`.
    pub fn to_svg(&self) -> String {
        render_svg_document(self.size, &self.ops)
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn state(&mut self, op: StateOp) {
        self.state.apply(&op);
        self.ops.push(ImagingOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op));
    }

    fn transform(&self) -> Affine {
        self.state.transform
    }
}

fn render_svg_document(size: Size, ops: &[ImagingOp]) -> String {
    let mut body = String::new();
    let mut state = SurfaceState::default();

    for op in ops {
        match op {
            ImagingOp::State(state_op) => state.apply(state_op),
            ImagingOp::Draw(DrawOp::Clear) => body.clear(),
            ImagingOp::Draw(DrawOp::FillPath(path)) => {
                write_fill(&mut body, path, &state);
            }
        }
    }

    let width = fmt_coord(size.width);
    let height = fmt_coord(size.height);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_fill(body: &mut String, path: &BezPath, state: &SurfaceState) {
    let device = state.transform * path.clone();
    let d = bez_path_to_svg_d(&device);
    if d.is_empty() {
        return;
    }
    let (rgb, alpha) = color_to_svg(state.fill);
    let _ = write!(body, "<path d=\"{d}\" fill=\"{rgb}\"");
    if alpha < 1.0 {
        let _ = write!(body, " fill-opacity=\"{}\"", fmt_coord(f64::from(alpha)));
    }
    body.push_str("/>");
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_coord(p.x), fmt_coord(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_coord(p.x), fmt_coord(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_coord(p1.x),
                    fmt_coord(p1.y),
                    fmt_coord(p2.x),
                    fmt_coord(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_coord(p1.x),
                    fmt_coord(p1.y),
                    fmt_coord(p2.x),
                    fmt_coord(p2.y),
                    fmt_coord(p3.x),
                    fmt_coord(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_coord(v: f64) -> String {
    // Keep output readable and stable enough for diffing.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

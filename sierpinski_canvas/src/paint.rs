// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sierpinski_imaging::{Color, Surface};
use sierpinski_subdivide::{AdaptiveSubdivider, SubdivisionStats, Triangle};
use sierpinski_view2d::ViewTransform;

/// Fill color of the fractal.
pub const FILL_COLOR: Color = Color::BLACK;

/// Paints one frame of the fractal onto `surface`.
///
/// The surface transform is reset and the surface cleared, then the
/// world-to-screen transform is installed as `translate(centre + offset)`
/// followed by `scale(zoom)`, and every leaf of the adaptive walk is filled
/// in world coordinates.
pub fn paint_frame<S>(
    surface: &mut S,
    view: &ViewTransform,
    root: Triangle,
    subdivider: &mut AdaptiveSubdivider,
) -> SubdivisionStats
where
    S: Surface + ?Sized,
{
    surface.reset_transform();
    surface.clear();
    surface.translate(view.transform_origin().to_vec2());
    surface.scale(view.zoom());
    surface.set_fill_style(FILL_COLOR);
    subdivider.walk(root, view, |triangle| surface.fill_path(triangle.to_path()))
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-depth midpoint subdivision.
//!
//! This is the plain, non-adaptive construction: every triangle is split at
//! its edge midpoints exactly `depth` times, with no viewport culling and no
//! pixel-size rules. It works on arbitrary vertex triples, so it is not
//! limited to the upright equilateral [`crate::Triangle`].
//!
//! ```rust
//! use sierpinski_subdivide::fixed_depth;
//!
//! let root = fixed_depth::upright_vertices(500.0);
//! let tris = fixed_depth::subdivide(root, 3);
//! assert_eq!(tris.len(), fixed_depth::triangle_count(3));
//! ```

use alloc::vec::Vec;

use kurbo::Point;

/// Deepest level [`subdivide`] will expand to; deeper requests are clamped.
pub const MAX_DEPTH: u32 = 12;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Vertices of an upright equilateral triangle of side `size` that fills the
/// box `[0, size] × [0, height]`: top centre, bottom left, bottom right.
#[must_use]
pub fn upright_vertices(size: f64) -> [Point; 3] {
    let height = SQRT_3 / 2.0 * size;
    [
        Point::new(size / 2.0, 0.0),
        Point::new(0.0, height),
        Point::new(size, height),
    ]
}

/// Number of triangles [`subdivide`] produces for `depth`.
#[must_use]
pub fn triangle_count(depth: u32) -> usize {
    3_usize.pow(depth.min(MAX_DEPTH))
}

/// Splits `vertices` at edge midpoints `depth` times and returns the leaves.
///
/// `depth` is clamped to [`MAX_DEPTH`].
#[must_use]
pub fn subdivide(vertices: [Point; 3], depth: u32) -> Vec<[Point; 3]> {
    let depth = depth.min(MAX_DEPTH);
    let mut out = Vec::with_capacity(triangle_count(depth));
    split(vertices, depth, &mut out);
    out
}

fn split([a, b, c]: [Point; 3], depth: u32, out: &mut Vec<[Point; 3]>) {
    if depth == 0 {
        out.push([a, b, c]);
        return;
    }
    let ab = a.midpoint(b);
    let bc = b.midpoint(c);
    let ca = c.midpoint(a);
    split([a, ab, ca], depth - 1, out);
    split([ab, b, bc], depth - 1, out);
    split([ca, bc, c], depth - 1, out);
}

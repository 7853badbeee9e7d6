// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sierpinski Subdivide: viewport-aware adaptive subdivision.
//!
//! Given a root [`Triangle`] and the current
//! [`ViewTransform`](sierpinski_view2d::ViewTransform), an
//! [`AdaptiveSubdivider`] walks an explicit work-list of candidate triangles
//! and produces the leaf triangles to fill:
//!
//! 1. Triangles whose bounding box misses the visible world rectangle are
//!    culled, together with everything they would have produced.
//! 2. Triangles smaller on screen than
//!    [`SubdivisionConfig::min_screen_size`] are dropped.
//! 3. Triangles smaller on screen than [`SubdivisionConfig::leaf_threshold`]
//!    are emitted as leaves.
//! 4. Everything else is split at its edge midpoints into three children.
//!
//! The recursion floor is governed by on-screen size, not by a depth count,
//! so the walk stays bounded at any zoom factor. The walk never recurses on
//! the call stack.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use sierpinski_subdivide::{AdaptiveSubdivider, Triangle};
//! use sierpinski_view2d::ViewTransform;
//!
//! let view = ViewTransform::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let root = Triangle::centered_at(Point::ORIGIN, 600.0);
//!
//! let mut subdivider = AdaptiveSubdivider::default();
//! let pass = subdivider.render(root, &view);
//! assert!(!pass.leaves.is_empty());
//! assert_eq!(pass.stats.leaves, pass.leaves.len());
//! ```
//!
//! The [`fixed_depth`] module holds the simpler, non-adaptive midpoint
//! recursion to a fixed depth. It shares no policy with the adaptive walk.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod fixed_depth;
mod subdivider;
mod triangle;

pub use subdivider::{AdaptiveSubdivider, Subdivision, SubdivisionConfig, SubdivisionStats};
pub use triangle::Triangle;

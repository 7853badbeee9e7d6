// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;
use sierpinski_view2d::ViewTransform;

use crate::Triangle;

/// On-screen size thresholds for an [`AdaptiveSubdivider`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubdivisionConfig {
    /// Triangles smaller than this many pixels are dropped without drawing.
    pub min_screen_size: f64,
    /// Triangles smaller than this many pixels are filled instead of split.
    pub leaf_threshold: f64,
}

impl SubdivisionConfig {
    /// Default resolution floor in pixels.
    pub const DEFAULT_MIN_SCREEN_SIZE: f64 = 2.0;
    /// Default leaf threshold in pixels.
    pub const DEFAULT_LEAF_THRESHOLD: f64 = 10.0;

    fn normalized(self) -> Self {
        let min_screen_size = if self.min_screen_size.is_finite() && self.min_screen_size > 0.0 {
            self.min_screen_size
        } else {
            Self::DEFAULT_MIN_SCREEN_SIZE
        };
        let leaf_threshold = if self.leaf_threshold.is_finite() {
            self.leaf_threshold
        } else {
            Self::DEFAULT_LEAF_THRESHOLD
        };
        Self {
            min_screen_size,
            leaf_threshold,
        }
    }
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        Self {
            min_screen_size: Self::DEFAULT_MIN_SCREEN_SIZE,
            leaf_threshold: Self::DEFAULT_LEAF_THRESHOLD,
        }
    }
}

/// Counters describing a single subdivision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubdivisionStats {
    /// Triangles popped from the work-list.
    pub visited: usize,
    /// Triangles discarded because they miss the viewport.
    pub culled: usize,
    /// Triangles discarded because they fall under the resolution floor.
    pub below_floor: usize,
    /// Triangles split into children.
    pub subdivided: usize,
    /// Triangles emitted as leaves.
    pub leaves: usize,
    /// Deepest level popped from the work-list; the root is level 0.
    pub max_depth: u32,
}

/// Result of [`AdaptiveSubdivider::render`].
#[derive(Clone, Debug, Default)]
pub struct Subdivision {
    /// Leaf triangles in world coordinates, in emission order.
    pub leaves: Vec<Triangle>,
    /// Counters for the pass.
    pub stats: SubdivisionStats,
}

#[derive(Clone, Copy, Debug)]
struct WorkItem {
    triangle: Triangle,
    depth: u32,
}

/// Iterative, viewport-aware Sierpinski subdivision.
///
/// Every pass starts from the single root triangle; nothing is carried over
/// between passes except the capacity of the internal work-list.
#[derive(Clone, Debug, Default)]
pub struct AdaptiveSubdivider {
    config: SubdivisionConfig,
    stack: Vec<WorkItem>,
}

impl AdaptiveSubdivider {
    /// Creates a subdivider with the given thresholds.
    ///
    /// A non-positive or non-finite `min_screen_size` falls back to
    /// [`SubdivisionConfig::DEFAULT_MIN_SCREEN_SIZE`], which keeps every walk
    /// finite.
    #[must_use]
    pub fn new(config: SubdivisionConfig) -> Self {
        Self {
            config: config.normalized(),
            stack: Vec::new(),
        }
    }

    /// Returns the thresholds in force.
    #[must_use]
    pub fn config(&self) -> SubdivisionConfig {
        self.config
    }

    /// Walks `root` against `view` and collects the leaf triangles.
    pub fn render(&mut self, root: Triangle, view: &ViewTransform) -> Subdivision {
        let mut leaves = Vec::new();
        let stats = self.walk(root, view, |t| leaves.push(*t));
        Subdivision { leaves, stats }
    }

    /// Walks `root` against `view`, handing each leaf to `emit`.
    ///
    /// For each popped triangle, in order:
    /// - cull it if its bounding box misses [`ViewTransform::visible_world_rect`];
    /// - drop it if `size * zoom` is below the resolution floor;
    /// - emit it if `size * zoom` is below the leaf threshold;
    /// - otherwise push its three children.
    ///
    /// An invalid root or a zero-area viewport yields an empty pass.
    pub fn walk<F>(&mut self, root: Triangle, view: &ViewTransform, mut emit: F) -> SubdivisionStats
    where
        F: FnMut(&Triangle),
    {
        let mut stats = SubdivisionStats::default();
        self.stack.clear();

        let viewport = view.visible_world_rect();
        let zoom = view.zoom();
        if !root.is_valid() || !has_area(viewport) || !(zoom.is_finite() && zoom > 0.0) {
            return stats;
        }

        self.stack.push(WorkItem {
            triangle: root,
            depth: 0,
        });

        while let Some(WorkItem { triangle, depth }) = self.stack.pop() {
            stats.visited += 1;
            stats.max_depth = stats.max_depth.max(depth);

            // Visibility comes before size so off-screen branches are pruned
            // at any depth.
            if !intersects(triangle.bounding_box(), viewport) {
                stats.culled += 1;
                continue;
            }

            let screen_size = triangle.size * zoom;
            if screen_size < self.config.min_screen_size {
                stats.below_floor += 1;
                continue;
            }

            if screen_size < self.config.leaf_threshold {
                stats.leaves += 1;
                emit(&triangle);
                continue;
            }

            stats.subdivided += 1;
            for child in triangle.children() {
                self.stack.push(WorkItem {
                    triangle: child,
                    depth: depth + 1,
                });
            }
        }

        stats
    }
}

fn has_area(rect: Rect) -> bool {
    rect.width() > 0.0 && rect.height() > 0.0
}

/// Closed-interval overlap test; touching edges count as intersecting.
fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Vec2};
    use sierpinski_view2d::ViewTransform;

    use super::{AdaptiveSubdivider, SubdivisionConfig, intersects};
    use crate::Triangle;

    const CANVAS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    const ROOT_SIZE: f64 = 600.0;

    fn root() -> Triangle {
        Triangle::centered_at(Point::ORIGIN, ROOT_SIZE)
    }

    fn view_at(zoom: f64, offset: Vec2) -> ViewTransform {
        let mut view = ViewTransform::new(CANVAS);
        view.set_zoom(zoom);
        view.set_offset(offset);
        view
    }

    /// Smallest `n` with `2^n >= x`, i.e. `ceil(log2(x))` for `x >= 1`.
    fn ceil_log2(x: f64) -> u32 {
        let mut n = 0;
        let mut p = 1.0;
        while p < x {
            p *= 2.0;
            n += 1;
        }
        n
    }

    /// Leaves of an unculled walk, computed recursively for comparison.
    fn reference_leaves(
        t: Triangle,
        zoom: f64,
        config: SubdivisionConfig,
        out: &mut Vec<Triangle>,
    ) {
        let screen = t.size * zoom;
        if screen < config.min_screen_size {
            return;
        }
        if screen < config.leaf_threshold {
            out.push(t);
            return;
        }
        for child in t.children() {
            reference_leaves(child, zoom, config, out);
        }
    }

    #[test]
    fn default_view_emits_leaves_without_culling() {
        let view = view_at(1.0, Vec2::ZERO);
        let mut subdivider = AdaptiveSubdivider::default();
        let pass = subdivider.render(root(), &view);

        assert!(!pass.leaves.is_empty());
        assert_eq!(pass.stats.culled, 0);
        assert_eq!(pass.stats.leaves, pass.leaves.len());
        // 600 / 2^6 = 9.375 px: six halvings reach the leaf band.
        assert_eq!(pass.leaves.len(), 729);
        assert_eq!(pass.stats.max_depth, 6);
        for leaf in &pass.leaves {
            let screen = leaf.size * view.zoom();
            assert!((2.0..10.0).contains(&screen), "leaf at {screen}px");
        }
    }

    #[test]
    fn minimum_zoom_emits_root_as_single_leaf() {
        let view = view_at(0.01, Vec2::ZERO);
        let mut subdivider = AdaptiveSubdivider::default();
        let pass = subdivider.render(root(), &view);

        assert_eq!(pass.leaves, [root()]);
        assert_eq!(pass.stats.subdivided, 0);
        assert_eq!(pass.stats.max_depth, 0);
    }

    #[test]
    fn depth_follows_resolution_floor() {
        // With the leaf band collapsed, the walk only stops at the floor.
        let config = SubdivisionConfig {
            min_screen_size: 2.0,
            leaf_threshold: 2.0,
        };
        let mut subdivider = AdaptiveSubdivider::new(config);

        for zoom in [1.0, 0.5, 0.1] {
            let view = view_at(zoom, Vec2::ZERO);
            let stats = subdivider.walk(root(), &view, |_| {});
            assert_eq!(
                stats.max_depth,
                ceil_log2(ROOT_SIZE * zoom / config.min_screen_size),
                "zoom {zoom}"
            );
            assert_eq!(stats.leaves, 0);
        }
    }

    #[test]
    fn depth_at_exact_power_of_two_floor() {
        // `600 / 256` is exact, so the depth-8 triangle sits on the floor.
        // The floor only drops sizes strictly below it, so that triangle is
        // still split and its children are visited one level deeper than
        // `ceil(log2(root * zoom / floor))`.
        let floor = ROOT_SIZE / 256.0;
        let mut subdivider = AdaptiveSubdivider::new(SubdivisionConfig {
            min_screen_size: floor,
            leaf_threshold: floor,
        });

        let stats = subdivider.walk(root(), &view_at(1.0, Vec2::ZERO), |_| {});
        assert_eq!(ceil_log2(ROOT_SIZE / floor), 8);
        assert_eq!(stats.max_depth, 9);
        assert_eq!(stats.leaves, 0);
    }

    #[test]
    fn depth_is_bounded_with_default_thresholds() {
        let mut subdivider = AdaptiveSubdivider::default();
        for zoom in [0.02, 0.3, 1.0, 7.5, 64.0, 1_000.0] {
            let view = view_at(zoom, Vec2::ZERO);
            let stats = subdivider.walk(root(), &view, |_| {});
            assert!(
                stats.max_depth <= ceil_log2(ROOT_SIZE * zoom / 2.0),
                "zoom {zoom}: depth {}",
                stats.max_depth
            );
        }
    }

    #[test]
    fn culled_walk_matches_visible_reference_leaves() {
        let view = view_at(3.0, Vec2::new(900.0, -250.0));
        let viewport = view.visible_world_rect();
        let config = SubdivisionConfig::default();

        let mut subdivider = AdaptiveSubdivider::new(config);
        let pass = subdivider.render(root(), &view);
        assert!(pass.stats.culled > 0);
        assert!(!pass.leaves.is_empty());

        let mut reference = Vec::new();
        reference_leaves(root(), view.zoom(), config, &mut reference);

        // Every emitted leaf is visible and would have been emitted unculled.
        for leaf in &pass.leaves {
            assert!(intersects(leaf.bounding_box(), viewport));
            assert!(reference.contains(leaf));
        }
        // Every visible reference leaf is emitted.
        let visible = reference
            .iter()
            .filter(|t| intersects(t.bounding_box(), viewport))
            .count();
        assert_eq!(visible, pass.leaves.len());
    }

    #[test]
    fn off_screen_root_is_culled_outright() {
        let view = view_at(1.0, Vec2::new(5_000.0, 0.0));
        let mut subdivider = AdaptiveSubdivider::default();
        let pass = subdivider.render(root(), &view);

        assert!(pass.leaves.is_empty());
        assert_eq!(pass.stats.visited, 1);
        assert_eq!(pass.stats.culled, 1);
    }

    #[test]
    fn extreme_zoom_stays_bounded() {
        let zoom = 200_000.0;
        let apex = root().apex;
        // Put the apex on the canvas centre.
        let view = view_at(zoom, -(apex.to_vec2() * zoom));

        let mut subdivider = AdaptiveSubdivider::default();
        let stats = subdivider.walk(root(), &view, |_| {});

        assert!(stats.leaves > 0);
        assert!(stats.visited < 200_000, "visited {}", stats.visited);
        assert!(stats.culled > 0);
        assert!(stats.max_depth <= ceil_log2(ROOT_SIZE * zoom / 2.0));
    }

    #[test]
    fn invalid_input_is_a_no_op() {
        let view = view_at(1.0, Vec2::ZERO);
        let mut subdivider = AdaptiveSubdivider::default();

        for size in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let pass = subdivider.render(Triangle::new(Point::ORIGIN, size), &view);
            assert!(pass.leaves.is_empty());
            assert_eq!(pass.stats.visited, 0);
        }

        let empty = ViewTransform::new(Rect::new(0.0, 0.0, 0.0, 600.0));
        let pass = subdivider.render(root(), &empty);
        assert_eq!(pass.stats.visited, 0);
    }

    #[test]
    fn bad_floor_falls_back_to_default() {
        let subdivider = AdaptiveSubdivider::new(SubdivisionConfig {
            min_screen_size: 0.0,
            leaf_threshold: f64::NAN,
        });
        assert_eq!(subdivider.config(), SubdivisionConfig::default());
    }

    #[test]
    fn leaves_sit_inside_emission_band() {
        let mut subdivider = AdaptiveSubdivider::default();
        for zoom in [0.05, 0.7, 3.0, 12.5] {
            let view = view_at(zoom, Vec2::new(-120.0, 80.0));
            let viewport = view.visible_world_rect();
            subdivider.walk(root(), &view, |t| {
                let screen = t.size * zoom;
                assert!(screen >= 2.0 && screen < 10.0);
                assert!(intersects(t.bounding_box(), viewport));
            });
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single wheel step.
///
/// This is consulted by [`crate::ViewTransform::apply_zoom`] to pick either
/// [`crate::ViewConfig::zoom_step_in`] or [`crate::ViewConfig::zoom_step_out`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Zoom in (wheel rolled away from the user, negative `deltaY`).
    In,
    /// Zoom out (wheel rolled towards the user, positive `deltaY`).
    Out,
}

impl WheelDirection {
    /// Classifies a raw wheel `deltaY` value.
    ///
    /// Negative deltas zoom in and positive deltas zoom out. A zero or
    /// non-finite delta carries no direction and yields `None`.
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::FrameHandle;

/// Reasons a scheduled frame did not paint.
///
/// None of these are fatal: the canvas stays usable and the next redraw
/// request schedules a fresh frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// No surface was supplied, or the surface has zero pixel area.
    #[error("drawing surface is not ready")]
    NotReady,
    /// The handle belongs to a frame that a later redraw request replaced.
    #[error("frame {0:?} was superseded by a newer redraw request")]
    Superseded(FrameHandle),
    /// A frame callback arrived while no redraw was pending.
    #[error("no redraw is pending")]
    NoPendingFrame,
}

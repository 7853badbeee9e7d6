// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sierpinski Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of [`Surface`] for
//! **op recording and state tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended primarily for tests and debugging that want to assert on
//!   emitted ops and the imaging state at the time each op is applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Size};
use sierpinski_imaging::{DrawOp, ImagingOp, StateOp, Surface, SurfaceState};

/// Event recorded by the reference surface.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: SurfaceState,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: SurfaceState,
    },
}

/// Recording implementation of [`Surface`].
///
/// This surface:
/// - Reports a fixed pixel size chosen at construction,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefSurface {
    size: Size,
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: SurfaceState,
}

impl RefSurface {
    /// Creates a recording surface of `width × height` pixels.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Changes the reported pixel size.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Returns the current imaging state.
    pub fn current_state(&self) -> &SurfaceState {
        &self.state
    }

    /// Iterates over the fill events together with the state they were drawn with.
    pub fn fills(&self) -> impl Iterator<Item = (&kurbo::BezPath, &SurfaceState)> {
        self.events.iter().filter_map(|event| match event {
            Event::Draw {
                op: DrawOp::FillPath(path),
                state,
            } => Some((path, state)),
            _ => None,
        })
    }

    /// Clears all recorded events and ops but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl Surface for RefSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn state(&mut self, op: StateOp) {
        self.state.apply(&op);
        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }

    fn transform(&self) -> Affine {
        self.state.transform
    }
}

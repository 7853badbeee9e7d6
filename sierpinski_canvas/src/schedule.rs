// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling.
//!
//! The canvas never paints synchronously from an input event. It asks a
//! [`FrameScheduler`] for the next display frame and paints when the host
//! calls back with the handle it was given. Hosts wire this to their frame
//! clock (`requestAnimationFrame`, a winit redraw request, a timer); headless
//! callers use [`ManualScheduler`] and drive frames explicitly.

/// Opaque identifier of one requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host frame clock.
pub trait FrameScheduler {
    /// Requests a callback on the next display frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a previously requested callback.
    ///
    /// Cancelling a handle that already fired or was already cancelled is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

/// A scheduler that queues handles until the caller collects them.
///
/// ```
/// use sierpinski_canvas::{FrameScheduler, ManualScheduler};
///
/// let mut scheduler = ManualScheduler::default();
/// let a = scheduler.request_frame();
/// let b = scheduler.request_frame();
/// scheduler.cancel_frame(a);
/// assert_eq!(scheduler.take_due(), [b]);
/// assert!(scheduler.pending().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u64,
    queued: Vec<FrameHandle>,
    cancelled: usize,
}

impl ManualScheduler {
    /// Handles requested and not yet cancelled or taken, oldest first.
    pub fn pending(&self) -> &[FrameHandle] {
        &self.queued
    }

    /// Drains the queued handles, oldest first.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.queued)
    }

    /// Total number of frames requested so far.
    pub fn requested(&self) -> u64 {
        self.next
    }

    /// Number of queued frames that were cancelled before they were taken.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next);
        self.next += 1;
        self.queued.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queued.len();
        self.queued.retain(|h| *h != handle);
        self.cancelled += before - self.queued.len();
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded input sessions.
//!
//! A script is a JSON array of steps replayed against the canvas, e.g.
//!
//! ```json
//! [
//!   { "type": "wheel", "delta_y": -100, "x": 400, "y": 300 },
//!   { "type": "pointer_down", "x": 100, "y": 100 },
//!   { "type": "pointer_move", "x": 160, "y": 80 },
//!   { "type": "pointer_up", "x": 160, "y": 80 },
//!   { "type": "resize", "width": 1024, "height": 768 },
//!   { "type": "frame" }
//! ]
//! ```

use std::path::Path;

use anyhow::Context as _;
use kurbo::Point;
use serde::Deserialize;
use sierpinski_canvas::InputEvent;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Step {
    Wheel {
        delta_y: f64,
        x: f64,
        y: f64,
    },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    Resize { width: u32, height: u32 },
    /// Deliver the pending frame, as a display refresh would.
    Frame,
}

impl Step {
    /// The canvas input this step replays, if it is an input step.
    pub(crate) fn input(self) -> Option<InputEvent> {
        Some(match self {
            Self::Wheel { delta_y, x, y } => InputEvent::Wheel {
                delta_y,
                position: Point::new(x, y),
            },
            Self::PointerDown { x, y } => InputEvent::PointerDown(Point::new(x, y)),
            Self::PointerMove { x, y } => InputEvent::PointerMove(Point::new(x, y)),
            Self::PointerUp { x, y } => InputEvent::PointerUp(Point::new(x, y)),
            Self::PointerLeave => InputEvent::PointerLeave,
            Self::Resize { .. } | Self::Frame => return None,
        })
    }
}

pub(crate) fn parse(text: &str) -> anyhow::Result<Vec<Step>> {
    serde_json::from_str(text).context("malformed input script")
}

pub(crate) fn load(path: &Path) -> anyhow::Result<Vec<Step>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading input script {}", path.display()))?;
    parse(&text).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse(
            r#"[
                {"type": "wheel", "delta_y": -100, "x": 400, "y": 300},
                {"type": "pointer_down", "x": 1, "y": 2},
                {"type": "pointer_move", "x": 3, "y": 4},
                {"type": "pointer_up", "x": 3, "y": 4},
                {"type": "pointer_leave"},
                {"type": "resize", "width": 640, "height": 480},
                {"type": "frame"}
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 7);
        assert_eq!(
            steps[0].input(),
            Some(InputEvent::Wheel {
                delta_y: -100.0,
                position: Point::new(400.0, 300.0),
            })
        );
        assert_eq!(steps[4].input(), Some(InputEvent::PointerLeave));
        assert_eq!(
            steps[5],
            Step::Resize {
                width: 640,
                height: 480
            }
        );
        assert_eq!(steps[6].input(), None);
    }

    #[test]
    fn rejects_unknown_steps() {
        let err = parse(r#"[{"type": "pinch", "scale": 2}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("malformed input script"));
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Sierpinski renderer.
//!
//! Mounts a [`FractalCanvas`] on a manual frame clock, optionally replays a
//! recorded input script against it, and writes the last painted frame as
//! SVG. With `--fixed-depth` it instead draws the plain midpoint subdivision
//! to a fixed depth.
//!
//! ```text
//! sierpinski-render --zoom 40 --pan-y 5000 -o apex.svg
//! sierpinski-render --script demos/scripts/zoom_in.json --log sierpinski_canvas=trace
//! sierpinski-render --fixed-depth 6 > fixed.svg
//! ```

mod logging;
mod script;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::Parser;
use kurbo::{BezPath, Size, Vec2};
use sierpinski_canvas::{CanvasConfig, FILL_COLOR, FractalCanvas, ManualScheduler};
use sierpinski_imaging::Surface;
use sierpinski_imaging_svg::SvgSurface;
use sierpinski_subdivide::{SubdivisionConfig, fixed_depth};
use sierpinski_view2d::ViewConfig;

use crate::logging::{LoggingConfig, init_logging};
use crate::script::Step;

#[derive(Parser, Debug)]
#[command(
    name = "sierpinski-render",
    about = "Render the Sierpinski triangle to SVG"
)]
struct Cli {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Initial zoom factor.
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
    /// Initial horizontal pan in pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_x: f64,
    /// Initial vertical pan in pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_y: f64,
    /// Side length of the root triangle in world units.
    #[arg(long, default_value_t = CanvasConfig::DEFAULT_ROOT_SIZE)]
    root_size: f64,
    /// Lower zoom bound.
    #[arg(long, default_value_t = ViewConfig::DEFAULT_MIN_ZOOM)]
    min_zoom: f64,
    /// Upper zoom bound.
    #[arg(long, default_value_t = ViewConfig::DEFAULT_MAX_ZOOM)]
    max_zoom: f64,
    /// Triangles smaller than this many pixels are not drawn.
    #[arg(long, default_value_t = SubdivisionConfig::DEFAULT_MIN_SCREEN_SIZE)]
    min_screen_size: f64,
    /// Triangles smaller than this many pixels are filled rather than split.
    #[arg(long, default_value_t = SubdivisionConfig::DEFAULT_LEAF_THRESHOLD)]
    leaf_threshold: f64,
    /// JSON input script to replay before the final frame.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Draw the fixed-depth midpoint subdivision instead of the adaptive canvas.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(fixed_depth::MAX_DEPTH)))]
    fixed_depth: Option<u32>,
    /// Output file; defaults to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig {
            view: ViewConfig {
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
                ..ViewConfig::default()
            },
            subdivision: SubdivisionConfig {
                min_screen_size: self.min_screen_size,
                leaf_threshold: self.leaf_threshold,
            },
            root_size: self.root_size,
        }
    }

    fn pan(&self) -> Vec2 {
        Vec2::new(self.pan_x, self.pan_y)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    check_zoom_range(cli.min_zoom, cli.max_zoom)?;

    let svg = match cli.fixed_depth {
        Some(depth) => render_fixed_depth(&cli, depth),
        None => render_canvas(&cli)?,
    };

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} bytes to {}", svg.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(svg.as_bytes())
                .context("writing to stdout")?;
            stdout.write_all(b"\n").context("writing to stdout")?;
        }
    }
    Ok(())
}

/// Rejects ranges that are non-positive, reversed or NaN in either bound.
fn check_zoom_range(min_zoom: f64, max_zoom: f64) -> anyhow::Result<()> {
    if !(min_zoom > 0.0 && min_zoom <= max_zoom) {
        bail!("invalid zoom range {min_zoom}..{max_zoom}: bounds must be positive and ordered");
    }
    Ok(())
}

fn surface_size(width: u32, height: u32) -> Size {
    Size::new(f64::from(width), f64::from(height))
}

fn render_canvas(cli: &Cli) -> anyhow::Result<String> {
    let (mut width, mut height) = (cli.width, cli.height);
    let mut canvas = FractalCanvas::new(
        surface_size(width, height),
        cli.canvas_config(),
        ManualScheduler::default(),
    );
    if cli.zoom != 1.0 || cli.pan() != Vec2::ZERO {
        canvas.set_view(cli.zoom, cli.pan());
    }

    let steps = match &cli.script {
        Some(path) => script::load(path)?,
        None => Vec::new(),
    };
    log::debug!("replaying {} script steps", steps.len());

    let mut last_svg = None;
    for step in steps {
        match step {
            Step::Resize {
                width: w,
                height: h,
            } => {
                (width, height) = (w, h);
                canvas.resize(surface_size(w, h));
            }
            Step::Frame => deliver_frames(&mut canvas, width, height, &mut last_svg),
            input => {
                if let Some(event) = input.input() {
                    canvas.handle_event(event);
                }
            }
        }
    }
    deliver_frames(&mut canvas, width, height, &mut last_svg);

    let view = canvas.view();
    if view.is_at_max_zoom() {
        log::warn!("zoom is pinned at the upper limit {}", view.zoom());
    }
    log::debug!("final view: {:?}", view.debug_info());
    last_svg.context("no frame was painted; the surface has zero area")
}

/// Delivers due frames, each onto a fresh surface of the current size.
fn deliver_frames(
    canvas: &mut FractalCanvas<ManualScheduler>,
    width: u32,
    height: u32,
    last_svg: &mut Option<String>,
) {
    for handle in canvas.scheduler_mut().take_due() {
        let mut surface = SvgSurface::new(width, height);
        match canvas.on_frame(handle, Some(&mut surface)) {
            Ok(stats) => {
                log::info!(
                    "frame {}: {} triangles, {} culled, {} below floor, depth {}",
                    handle.0,
                    stats.leaves,
                    stats.culled,
                    stats.below_floor,
                    stats.max_depth
                );
                *last_svg = Some(surface.to_svg());
            }
            Err(err) => log::warn!("frame {} skipped: {err}", handle.0),
        }
    }
}

fn render_fixed_depth(cli: &Cli, depth: u32) -> String {
    let mut surface = SvgSurface::new(cli.width, cli.height);
    let zoom = cli.zoom.clamp(cli.min_zoom, cli.max_zoom);
    let root = fixed_depth::upright_vertices(cli.root_size);
    let root_height = root[1].y;

    surface.translate(surface_size(cli.width, cli.height).to_vec2() / 2.0 + cli.pan());
    surface.scale(zoom);
    // Centre the root's bounding box on the world origin, as the canvas does.
    surface.translate(Vec2::new(-cli.root_size / 2.0, -root_height / 2.0));
    surface.set_fill_style(FILL_COLOR);

    let triangles = fixed_depth::subdivide(root, depth);
    log::info!("fixed depth {depth}: {} triangles", triangles.len());
    for [a, b, c] in triangles {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        surface.fill_path(path);
    }
    surface.to_svg()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("sierpinski-render").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.canvas_config(), CanvasConfig::default());
        assert_eq!(cli.pan(), Vec2::ZERO);
    }

    #[test]
    fn negative_pan_parses() {
        let cli = cli(&["--pan-x", "-120", "--pan-y", "-4.5"]);
        assert_eq!(cli.pan(), Vec2::new(-120.0, -4.5));
    }

    #[test]
    fn fixed_depth_is_bounded() {
        let parsed = Cli::try_parse_from(["sierpinski-render", "--fixed-depth", "99"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn zoom_range_rejects_nan_and_disorder() {
        assert!(check_zoom_range(0.01, 220_000.0).is_ok());
        assert!(check_zoom_range(2.0, 2.0).is_ok());
        assert!(check_zoom_range(f64::NAN, 10.0).is_err());
        assert!(check_zoom_range(0.5, f64::NAN).is_err());
        assert!(check_zoom_range(0.0, 10.0).is_err());
        assert!(check_zoom_range(5.0, 1.0).is_err());

        let cli = cli(&["--min-zoom", "NaN", "--fixed-depth", "2"]);
        assert!(check_zoom_range(cli.min_zoom, cli.max_zoom).is_err());
    }

    #[test]
    fn canvas_render_produces_svg() {
        let svg = render_canvas(&cli(&["--width", "200", "--height", "150"])).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 200 150\""));
        assert!(svg.matches("<path").count() > 0);
    }

    #[test]
    fn zero_area_surface_is_an_error() {
        assert!(render_canvas(&cli(&["--width", "0"])).is_err());
    }

    #[test]
    fn fixed_depth_render_counts_triangles() {
        let svg = render_fixed_depth(&cli(&["--fixed-depth", "3"]), 3);
        assert_eq!(svg.matches("<path").count(), fixed_depth::triangle_count(3));
    }
}

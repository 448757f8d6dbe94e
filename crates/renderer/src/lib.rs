//! Renderer crate for the ilocos scenes.
//!
//! The renderer drives a [`scenes::Scene`] on a simulated clock and rasterizes
//! the frames it emits into PNG files. The overall flow is:
//!
//! ```text
//!   CLI / ilocos
//!          │ RendererConfig + scheduled inputs
//!          ▼
//!   Renderer::run ──▶ Timeline ──▶ scene.handle_input() / scene.tick()
//!          │
//!          └─▶ scene.frame() ──▶ raster::render_frame() ──▶ export::save_png()
//! ```
//!
//! There is no window: every frame is deterministic for a given config and
//! input schedule, which keeps runs reproducible and testable.

mod export;
mod raster;
mod runtime;
mod types;

use anyhow::{bail, Result};
use image::RgbImage;
use scenes::{Control, Frame, Scene, ScheduledInput};

pub use export::save_png;
pub use raster::{render_frame, viewport_to_pixels, Canvas};
pub use runtime::{frame_path, RenderPolicy, SimulatedClock, TimeSample, Timeline};
pub use types::{RendererConfig, RunSummary, DEFAULT_TICK_INTERVAL};

/// High-level entry point that owns the chosen configuration.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Builds a renderer for the supplied configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Rasterizes a single frame at the configured surface size.
    pub fn rasterize(&self, frame: &Frame) -> RgbImage {
        let (width, height) = self.config.surface_size;
        let mut canvas = Canvas::new(width, height);
        render_frame(&mut canvas, frame);
        canvas.into_image()
    }

    /// Runs `scene` according to the render policy and writes its frames.
    ///
    /// Stops early without writing further frames once the scene answers an
    /// input with [`Control::Exit`].
    pub fn run(&self, scene: &mut dyn Scene, events: &[ScheduledInput]) -> Result<RunSummary> {
        let (width, height) = self.config.surface_size;
        if width == 0 || height == 0 {
            bail!("surface size must be non-zero (got {width}x{height})");
        }
        if let RenderPolicy::Sequence { frames: 0, .. } = self.config.policy {
            bail!("a frame sequence needs at least one frame");
        }

        tracing::info!(
            scene = %scene.kind(),
            width,
            height,
            ticks = self.config.policy.total_ticks(),
            events = events.len(),
            "starting render"
        );

        let mut timeline = Timeline::new(events, self.config.tick_interval);
        let mut frames = Vec::new();
        let mut exited_early = false;

        match &self.config.policy {
            RenderPolicy::Still { path, ticks } => {
                if timeline.run_ticks(scene, *ticks) == Control::Exit {
                    exited_early = true;
                } else {
                    save_png(&self.rasterize(&scene.frame()), path)?;
                    frames.push(path.clone());
                }
            }
            RenderPolicy::Sequence {
                directory,
                frames: count,
                ticks_per_frame,
            } => {
                for index in 0..*count {
                    let advance = if index == 0 { 0 } else { *ticks_per_frame };
                    if timeline.run_ticks(scene, advance) == Control::Exit {
                        exited_early = true;
                        break;
                    }
                    let path = frame_path(directory, index);
                    save_png(&self.rasterize(&scene.frame()), &path)?;
                    frames.push(path);
                }
            }
        }

        let pending = timeline.pending().len();
        if pending > 0 && !exited_early {
            tracing::warn!(pending, "inputs scheduled after the last tick were not delivered");
        }

        let sample = timeline.sample();
        if exited_early {
            tracing::info!(tick = sample.tick, "scene requested exit");
        }
        if let Some(cycle) = scene.cycle() {
            tracing::info!(
                phase = cycle.phase_degrees(),
                band = %cycle.band(),
                "final day/night state"
            );
        }
        tracing::info!(
            frames = frames.len(),
            ticks = sample.tick,
            simulated = ?sample.elapsed,
            "render finished"
        );

        Ok(RunSummary {
            frames,
            ticks: sample.tick,
            elapsed: sample.elapsed,
            exited_early,
        })
    }
}

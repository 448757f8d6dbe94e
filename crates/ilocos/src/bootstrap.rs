use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use daycycle::{wrap_degrees, FULL_TURN_DEGREES};
use renderer::RenderPolicy;
use sceneconfig::SceneConfig;
use scenes::{SceneKind, ScheduledInput};
use tracing::{debug, info};

use crate::cli::RunArgs;
use crate::paths::AppPaths;

const SECONDS_PER_DAY: f32 = 86_400.0;

/// Loads the scene configuration from `explicit`, or from the config
/// directory when no path was given. Only the implicit file may be missing.
pub fn load_scene_config(explicit: Option<&Path>, paths: &AppPaths) -> Result<SceneConfig> {
    if let Some(path) = explicit {
        let config = SceneConfig::load(path)
            .with_context(|| format!("failed to load scene config {}", path.display()))?;
        info!(path = %path.display(), "loaded scene config");
        return Ok(config);
    }

    let path = paths.scene_config_file();
    let exists = path.exists();
    let config = SceneConfig::load_or_default(&path)
        .with_context(|| format!("failed to load scene config {}", path.display()))?;
    if exists {
        info!(path = %path.display(), "loaded scene config");
    } else {
        debug!(path = %path.display(), "no scene config found; using defaults");
    }
    Ok(config)
}

/// Phase for a wall-clock time: noon is 0, 18:00 is 90, midnight is 180 and
/// 06:00 is 270 degrees.
pub fn clock_phase(time: NaiveTime) -> f32 {
    let seconds = time.num_seconds_from_midnight() as f32;
    wrap_degrees(seconds / SECONDS_PER_DAY * FULL_TURN_DEGREES + FULL_TURN_DEGREES / 2.0)
}

/// Replaces the configured initial phase with `phase`, or with the phase of
/// `now` when `use_clock` is set.
pub fn apply_phase_override(
    config: &mut SceneConfig,
    phase: Option<f32>,
    use_clock: bool,
    now: NaiveTime,
) -> Result<()> {
    let phase = if use_clock {
        let phase = clock_phase(now);
        info!(time = %now.format("%H:%M:%S"), phase, "using wall-clock phase");
        Some(phase)
    } else {
        phase
    };

    if let Some(phase) = phase {
        config.cycle.initial_phase = phase;
        config
            .validate()
            .context("invalid initial phase override")?;
    }
    Ok(())
}

pub fn parse_surface_size(spec: &str) -> Result<(u32, u32)> {
    let trimmed = spec.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| anyhow::anyhow!("expected WxH format, e.g. 800x450"))?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid width in size specification"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid height in size specification"))?;

    if width == 0 || height == 0 {
        bail!("surface dimensions must be greater than zero");
    }

    Ok((width, height))
}

/// CLI size, then the configured surface, then the scene's native size.
pub fn resolve_surface_size(
    requested: Option<&str>,
    config: &SceneConfig,
    native: (u32, u32),
) -> Result<(u32, u32)> {
    match requested {
        Some(spec) => parse_surface_size(spec),
        None => Ok(config.surface.size().unwrap_or(native)),
    }
}

pub fn render_policy(args: &RunArgs, kind: SceneKind) -> RenderPolicy {
    match args.frames {
        Some(frames) => RenderPolicy::Sequence {
            directory: args
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("ilocos-{kind}-frames"))),
            frames,
            ticks_per_frame: args.ticks_per_frame,
        },
        None => RenderPolicy::Still {
            path: args
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("ilocos-{kind}.png"))),
            ticks: args.ticks.unwrap_or_else(|| last_event_tick(&args.events)),
        },
    }
}

fn last_event_tick(events: &[ScheduledInput]) -> u64 {
    events.iter().map(|event| event.tick).max().unwrap_or(0)
}

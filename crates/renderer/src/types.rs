use std::path::PathBuf;
use std::time::Duration;

use crate::runtime::RenderPolicy;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags: how large the output surface is, how
/// much simulated time one tick represents, and which frames to write.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Output size in pixels.
    pub surface_size: (u32, u32),
    /// Simulated time between two scene ticks.
    pub tick_interval: Duration,
    pub policy: RenderPolicy,
}

impl Default for RendererConfig {
    /// An 800x450 still written to `ilocos.png` without advancing the scene.
    fn default() -> Self {
        Self {
            surface_size: (800, 450),
            tick_interval: DEFAULT_TICK_INTERVAL,
            policy: RenderPolicy::Still {
                path: PathBuf::from("ilocos.png"),
                ticks: 0,
            },
        }
    }
}

/// Outcome of a [`crate::Renderer::run`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Files written, in order.
    pub frames: Vec<PathBuf>,
    /// Scene ticks processed.
    pub ticks: u64,
    /// Simulated time covered by `ticks`.
    pub elapsed: Duration,
    /// True when the scene asked to stop before the policy finished.
    pub exited_early: bool,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scenes::{SceneKind, ScheduledInput};

#[derive(Parser, Debug)]
#[command(
    name = "ilocos",
    author,
    version,
    about = "Procedural 2D scenes with a day/night cycle, rendered to PNG",
    arg_required_else_help = false
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scene to render: `fan`, `face`, `coast`, or `daynight` (default).
    #[arg(value_name = "SCENE", value_parser = parse_scene)]
    pub scene: Option<SceneKind>,

    /// Scene configuration TOML; defaults to `scene.toml` in the config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the output resolution (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Output PNG for stills, or output directory when `--frames` is given.
    #[arg(long, short, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Render a numbered sequence of this many frames instead of a still.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: Option<u32>,

    /// Ticks between consecutive frames of a sequence.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub ticks_per_frame: u64,

    /// Ticks to run before capturing a still; defaults to the last scheduled event.
    #[arg(long, value_name = "N", conflicts_with = "frames")]
    pub ticks: Option<u64>,

    /// Input to deliver once TICK ticks have run (e.g. `12:scroll-up`, `key:d`).
    #[arg(
        long = "event",
        value_name = "TICK:INPUT",
        value_parser = parse_event
    )]
    pub events: Vec<ScheduledInput>,

    /// Initial day/night phase in degrees (0 = noon, 180 = midnight).
    #[arg(
        long,
        value_name = "DEGREES",
        allow_negative_numbers = true,
        conflicts_with = "clock"
    )]
    pub phase: Option<f32>,

    /// Derive the initial phase from the local wall-clock time.
    #[arg(long)]
    pub clock: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print interpolated day/night samples as JSON.
    Inspect(InspectArgs),
    /// Print the resolved configuration directory and file.
    Paths,
}

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Phase to sample in degrees; defaults to the configured initial phase.
    #[arg(
        long,
        value_name = "DEGREES",
        allow_negative_numbers = true,
        conflicts_with_all = ["clock", "sweep"]
    )]
    pub phase: Option<f32>,

    /// Sample the phase matching the local wall-clock time.
    #[arg(long, conflicts_with = "sweep")]
    pub clock: bool,

    /// Emit N samples evenly spaced over the full cycle, starting at noon.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub sweep: Option<u32>,

    /// Scene configuration TOML providing the palettes.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_scene(value: &str) -> Result<SceneKind, String> {
    value.parse().map_err(|err: scenes::SceneError| err.to_string())
}

pub fn parse_event(value: &str) -> Result<ScheduledInput, String> {
    if value.trim().is_empty() {
        return Err("event must not be empty".to_string());
    }
    value
        .parse()
        .map_err(|err: scenes::SceneError| err.to_string())
}

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use daycycle::{CycleSample, CycleState, Palette, FULL_TURN_DEGREES};
use renderer::{Renderer, RendererConfig};
use sceneconfig::SceneConfig;
use scenes::SceneKind;
use tracing_subscriber::EnvFilter;

use crate::bootstrap::{
    apply_phase_override, load_scene_config, render_policy, resolve_surface_size,
};
use crate::cli::{Cli, Command, InspectArgs, RunArgs};
use crate::paths::AppPaths;

pub fn run(cli: Cli) -> Result<()> {
    initialise_tracing();

    let paths = AppPaths::discover()?;
    tracing::debug!(
        config = %paths.config_dir().display(),
        file = %paths.scene_config_file().display(),
        "resolved ilocos paths"
    );

    match cli.command {
        Some(Command::Inspect(args)) => inspect(&args, &paths),
        Some(Command::Paths) => print_paths(&paths),
        None => render(&cli.run, &paths),
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn render(args: &RunArgs, paths: &AppPaths) -> Result<()> {
    let mut config = load_scene_config(args.config.as_deref(), paths)?;
    apply_phase_override(&mut config, args.phase, args.clock, Local::now().time())?;

    let kind = args.scene.unwrap_or(SceneKind::DayNight);
    let mut scene = kind
        .build(&config)
        .with_context(|| format!("failed to build scene '{kind}'"))?;
    tracing::info!(scene = %kind, title = kind.title(), "bootstrapping ilocos");

    let renderer = Renderer::new(RendererConfig {
        surface_size: resolve_surface_size(args.size.as_deref(), &config, scene.default_size())?,
        tick_interval: config.cycle.tick_interval,
        policy: render_policy(args, kind),
    });
    let summary = renderer.run(scene.as_mut(), &args.events)?;

    let mut stdout = io::stdout().lock();
    for path in &summary.frames {
        writeln!(stdout, "{}", path.display())?;
    }
    Ok(())
}

fn inspect(args: &InspectArgs, paths: &AppPaths) -> Result<()> {
    let mut config = load_scene_config(args.config.as_deref(), paths)?;
    apply_phase_override(&mut config, args.phase, args.clock, Local::now().time())?;

    let json = match args.sweep {
        Some(count) => serde_json::to_string_pretty(&sweep(&config, count)?)?,
        None => {
            let state = CycleState::from_config(&config).context("invalid day/night palette")?;
            serde_json::to_string_pretty(&state.sample())?
        }
    };
    println!("{json}");
    Ok(())
}

/// `count` samples at evenly spaced phases, starting at noon.
fn sweep(config: &SceneConfig, count: u32) -> Result<Vec<CycleSample>> {
    let sky = Palette::from(&config.palette.sky);
    let cloud = Palette::from(&config.palette.cloud);
    let step = FULL_TURN_DEGREES / count.max(1) as f32;
    (0..count)
        .map(|index| {
            CycleState::with_palettes(index as f32 * step, &sky, &cloud)
                .map(|state| state.sample())
                .context("invalid day/night palette")
        })
        .collect()
}

fn print_paths(paths: &AppPaths) -> Result<()> {
    let file = paths.scene_config_file();
    println!("config dir:  {}", paths.config_dir().display());
    println!(
        "config file: {} ({})",
        file.display(),
        if file.exists() { "present" } else { "missing, using defaults" }
    );
    Ok(())
}

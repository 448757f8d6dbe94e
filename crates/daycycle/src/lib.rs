//! Day/night cycle model for the landscape scenes.
//!
//! A [`CycleState`] owns a single phase angle in `[0, 360)` (0° noon, 90°
//! sunset, 180° midnight, 270° sunrise) and derives everything else from it:
//!
//! ```text
//!   scroll / tick ──▶ advance(delta) ──▶ phase (wrapped)
//!                                          │
//!          ┌───────────────┬───────────────┼────────────────┐
//!          ▼               ▼               ▼                ▼
//!     sky bands       cloud bands    light step        terrain step
//!     (7 bands)       (7 bands)      (90, 270)         (100, 260)
//! ```
//!
//! Colors are piecewise-linear over a [`BandTable`]; light and terrain use
//! independent step functions from [`dimming`].

mod angle;
mod band;
mod color;
mod cycle;
pub mod dimming;
mod palette;

pub use angle::{wrap_degrees, wrap_into, Wrapping, FULL_TURN_DEGREES};
pub use band::{
    BandKind, BandTable, PhaseBand, DAY_END, DAY_RESUME, NIGHT_END, NIGHT_START, SUNRISE_MID,
    SUNSET_MID,
};
pub use color::Rgb;
pub use cycle::{CycleSample, CycleState};
pub use palette::Palette;

#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("band table must contain at least one band")]
    EmptyTable,
    #[error("band {kind} has an empty or invalid range [{start}, {end})")]
    DegenerateBand { kind: BandKind, start: f32, end: f32 },
    #[error("bands leave a gap: expected a band starting at {expected}, found {found}")]
    Gap { expected: f32, found: f32 },
    #[error("bands must cover the full cycle: {edge} should be {expected}, found {found}")]
    Coverage {
        edge: &'static str,
        expected: f32,
        found: f32,
    },
    #[error("band {kind} has a color channel outside [0, 1]")]
    ColorOutOfRange { kind: BandKind },
    #[error("palette stop '{stop}' has a color channel outside [0, 1]")]
    PaletteOutOfRange { stop: &'static str },
    #[error("initial phase must be finite, got {0}")]
    NonFinitePhase(f32),
}

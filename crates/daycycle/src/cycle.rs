use sceneconfig::SceneConfig;
use serde::Serialize;

use crate::angle::{wrap_degrees, FULL_TURN_DEGREES};
use crate::band::{BandKind, BandTable};
use crate::color::Rgb;
use crate::dimming;
use crate::palette::Palette;
use crate::CycleError;

/// Time-of-day state for one running scene.
///
/// The phase is the only mutable field. Everything else is derived from it on
/// demand, so the current band is never cached and cannot go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleState {
    phase: f32,
    sky: BandTable,
    cloud: BandTable,
}

/// Everything a renderer needs from the cycle for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleSample {
    pub phase: f32,
    pub band: BandKind,
    pub sky: Rgb,
    pub cloud: Rgb,
    pub light: f32,
    pub terrain: f32,
}

impl CycleState {
    /// Builds a state using the default sky and cloud palettes. A non-finite
    /// phase starts the cycle at noon.
    pub fn new(initial_phase: f32) -> Self {
        Self {
            phase: if initial_phase.is_finite() {
                wrap_degrees(initial_phase)
            } else {
                0.0
            },
            sky: BandTable::standard(&Palette::sky()),
            cloud: BandTable::standard(&Palette::cloud()),
        }
    }

    pub fn with_palettes(
        initial_phase: f32,
        sky: &Palette,
        cloud: &Palette,
    ) -> Result<Self, CycleError> {
        if !initial_phase.is_finite() {
            return Err(CycleError::NonFinitePhase(initial_phase));
        }
        sky.validate()?;
        cloud.validate()?;
        Ok(Self {
            phase: wrap_degrees(initial_phase),
            sky: BandTable::standard(sky),
            cloud: BandTable::standard(cloud),
        })
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self, CycleError> {
        Self::with_palettes(
            config.cycle.initial_phase,
            &Palette::from(&config.palette.sky),
            &Palette::from(&config.palette.cloud),
        )
    }

    pub fn phase_degrees(&self) -> f32 {
        self.phase
    }

    /// Moves the phase by `delta_degrees` and wraps it back into `[0, 360)`.
    ///
    /// Whole turns are stripped from the delta with a truncating remainder,
    /// which is exact and keeps the delta's sign. Advancing by any multiple of
    /// 360 leaves the phase bit-for-bit intact. Non-finite deltas are ignored.
    pub fn advance(&mut self, delta_degrees: f32) {
        if !delta_degrees.is_finite() {
            return;
        }
        self.phase = wrap_degrees(self.phase + delta_degrees % FULL_TURN_DEGREES);
    }

    pub fn band(&self) -> BandKind {
        self.sky.locate(self.phase).kind
    }

    pub fn sky_color(&self) -> Rgb {
        self.sky.color_at(self.phase)
    }

    pub fn cloud_color(&self) -> Rgb {
        self.cloud.color_at(self.phase)
    }

    pub fn light_intensity(&self) -> f32 {
        dimming::light_intensity(self.phase)
    }

    pub fn terrain_shade(&self) -> f32 {
        dimming::terrain_shade(self.phase)
    }

    pub fn sample(&self) -> CycleSample {
        CycleSample {
            phase: self.phase,
            band: self.band(),
            sky: self.sky_color(),
            cloud: self.cloud_color(),
            light: self.light_intensity(),
            terrain: self.terrain_shade(),
        }
    }
}

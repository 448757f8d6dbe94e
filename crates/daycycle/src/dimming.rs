//! Step-function dimming rules.
//!
//! Light and terrain each use their own thresholds and neither lines up with
//! the color bands.

/// Light stays at full strength while `phase <= LIGHT_DIM_START` or
/// `phase >= LIGHT_DIM_END`.
pub const LIGHT_DIM_START: f32 = 90.0;
pub const LIGHT_DIM_END: f32 = 270.0;
pub const FULL_LIGHT: f32 = 1.0;
pub const DIM_LIGHT: f32 = 0.2;

/// Terrain is shaded strictly inside `(TERRAIN_DIM_START, TERRAIN_DIM_END)`.
pub const TERRAIN_DIM_START: f32 = 100.0;
pub const TERRAIN_DIM_END: f32 = 260.0;
pub const TERRAIN_NIGHT_SHADE: f32 = 0.35;

pub fn light_intensity(phase: f32) -> f32 {
    if phase <= LIGHT_DIM_START || phase >= LIGHT_DIM_END {
        FULL_LIGHT
    } else {
        DIM_LIGHT
    }
}

pub fn terrain_shade(phase: f32) -> f32 {
    if phase > TERRAIN_DIM_START && phase < TERRAIN_DIM_END {
        TERRAIN_NIGHT_SHADE
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_steps_at_dusk_and_dawn() {
        assert_eq!(light_intensity(0.0), 1.0);
        assert_eq!(light_intensity(90.0), 1.0);
        assert_eq!(light_intensity(90.0001), 0.2);
        assert_eq!(light_intensity(269.9999), 0.2);
        assert_eq!(light_intensity(270.0), 1.0);
        assert_eq!(light_intensity(270.0001), 1.0);
    }

    #[test]
    fn terrain_window_is_exclusive() {
        assert_eq!(terrain_shade(100.0), 1.0);
        assert_eq!(terrain_shade(100.5), TERRAIN_NIGHT_SHADE);
        assert_eq!(terrain_shade(259.5), TERRAIN_NIGHT_SHADE);
        assert_eq!(terrain_shade(260.0), 1.0);
    }

    #[test]
    fn terrain_and_light_disagree_between_90_and_100() {
        assert_eq!(light_intensity(95.0), DIM_LIGHT);
        assert_eq!(terrain_shade(95.0), 1.0);
    }
}

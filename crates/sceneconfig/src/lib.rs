use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Only configuration schema version understood by this crate.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read configuration at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// An RGB triple with every channel expected in `[0, 1]`.
pub type ColorTriple = [f32; 3];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    pub version: u32,
    #[serde(default)]
    pub cycle: CycleSettings,
    #[serde(default)]
    pub palette: PaletteSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub surface: SurfaceSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CycleSettings {
    /// Starting phase in degrees; 0 is noon, 180 is midnight.
    pub initial_phase: f32,
    /// Degrees applied per scroll notch.
    pub scroll_step: f32,
    /// Degrees applied on every tick; 0 leaves the cycle under manual control.
    pub auto_advance: f32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub tick_interval: Duration,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            initial_phase: 45.0,
            scroll_step: 5.0,
            auto_advance: 0.0,
            tick_interval: default_tick_interval(),
        }
    }
}

/// The four named stops every palette interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PaletteStops {
    pub day: ColorTriple,
    pub sunset: ColorTriple,
    pub night: ColorTriple,
    pub sunrise: ColorTriple,
}

impl PaletteStops {
    pub fn default_sky() -> Self {
        Self {
            day: [0.85, 0.95, 0.98],
            sunset: [0.98, 0.6, 0.3],
            night: [0.05, 0.05, 0.15],
            sunrise: [0.98, 0.7, 0.5],
        }
    }

    pub fn default_cloud() -> Self {
        Self {
            day: [0.85, 0.96, 0.98],
            sunset: [0.96, 0.72, 0.58],
            night: [0.22, 0.22, 0.32],
            sunrise: [0.95, 0.8, 0.72],
        }
    }

    fn named(&self) -> [(&'static str, ColorTriple); 4] {
        [
            ("day", self.day),
            ("sunset", self.sunset),
            ("night", self.night),
            ("sunrise", self.sunrise),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub sky: PaletteStops,
    pub cloud: PaletteStops,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            sky: PaletteStops::default_sky(),
            cloud: PaletteStops::default_cloud(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Windmill rotation in degrees per tick (applied clockwise).
    pub spin_speed: f32,
    /// Spin speed change for each `a`/`d` key press.
    pub spin_step: f32,
    /// Horizontal cloud drift per tick.
    pub cloud_drift: f32,
    /// Wave phase increment per tick, in radians.
    pub wave_step: f32,
    /// Text offset change per scroll notch or arrow key.
    pub text_step: f32,
    /// Face movement per WASD key press.
    pub face_step: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            spin_speed: 2.0,
            spin_step: 0.5,
            cloud_drift: 0.5,
            wave_step: 0.05,
            text_step: 20.0,
            face_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SurfaceSettings {
    /// Returns the configured size only when both dimensions are present.
    pub fn size(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            cycle: CycleSettings::default(),
            palette: PaletteSettings::default(),
            animation: AnimationSettings::default(),
            surface: SurfaceSettings::default(),
        }
    }
}

fn default_tick_interval() -> Duration {
    Duration::from_millis(16)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;
    impl<'de> de::Visitor<'de> for Visitor {
        type Value = Duration;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a duration as number of seconds or human-readable string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            humantime::parse_duration(v)
                .map_err(|err| E::custom(format!("invalid duration '{v}': {err}")))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Duration::from_secs(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("duration must be non-negative"));
            }
            Ok(Duration::from_secs(v as u64))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if !v.is_finite() || v.is_sign_negative() {
                return Err(E::custom("duration must be non-negative"));
            }
            Ok(Duration::from_secs_f64(v))
        }
    }

    deserializer.deserialize_any(Visitor)
}

impl SceneConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: SceneConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when it exists and falls back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {}; expected {CONFIG_VERSION}",
                self.version
            )));
        }

        let cycle = &self.cycle;
        if !cycle.initial_phase.is_finite() {
            return Err(ConfigError::Invalid(
                "cycle.initial_phase must be a finite number".into(),
            ));
        }
        if !cycle.scroll_step.is_finite() || cycle.scroll_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "cycle.scroll_step must be greater than zero".into(),
            ));
        }
        if !cycle.auto_advance.is_finite() {
            return Err(ConfigError::Invalid(
                "cycle.auto_advance must be a finite number".into(),
            ));
        }
        if cycle.tick_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "cycle.tick_interval must be greater than zero".into(),
            ));
        }

        validate_palette("sky", &self.palette.sky)?;
        validate_palette("cloud", &self.palette.cloud)?;

        let animation = &self.animation;
        let fields = [
            ("spin_speed", animation.spin_speed),
            ("spin_step", animation.spin_step),
            ("cloud_drift", animation.cloud_drift),
            ("wave_step", animation.wave_step),
            ("text_step", animation.text_step),
            ("face_step", animation.face_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "animation.{name} must be a finite number"
                )));
            }
        }

        if self.surface.width == Some(0) || self.surface.height == Some(0) {
            return Err(ConfigError::Invalid(
                "surface dimensions must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

fn validate_palette(name: &str, stops: &PaletteStops) -> Result<(), ConfigError> {
    for (stop, color) in stops.named() {
        if color
            .iter()
            .any(|channel| !channel.is_finite() || !(0.0..=1.0).contains(channel))
        {
            return Err(ConfigError::Invalid(format!(
                "palette.{name}.{stop} channels must lie in [0, 1], got {color:?}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version = 1

[cycle]
initial_phase = 120.0
scroll_step = 2.5
auto_advance = 0.25
tick_interval = "20ms"

[palette.sky]
day = [0.9, 0.9, 1.0]
sunset = [1.0, 0.5, 0.2]
night = [0.0, 0.0, 0.1]
sunrise = [1.0, 0.6, 0.4]

[animation]
spin_speed = 3.0

[surface]
width = 1280
height = 720
"#;

    #[test]
    fn parses_sample_config() {
        let config = SceneConfig::from_toml_str(SAMPLE).expect("parse config");
        assert_eq!(config.version, 1);
        assert_eq!(config.cycle.initial_phase, 120.0);
        assert_eq!(config.cycle.scroll_step, 2.5);
        assert_eq!(config.cycle.tick_interval, Duration::from_millis(20));
        assert_eq!(config.palette.sky.night, [0.0, 0.0, 0.1]);
        assert_eq!(config.palette.cloud, PaletteStops::default_cloud());
        assert_eq!(config.animation.spin_speed, 3.0);
        assert_eq!(config.animation.text_step, 20.0);
        assert_eq!(config.surface.size(), Some((1280, 720)));
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = SceneConfig::from_toml_str("version = 1").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.cycle.initial_phase, 45.0);
        assert_eq!(config.cycle.tick_interval, Duration::from_millis(16));
        assert_eq!(config.surface.size(), None);
    }

    #[test]
    fn numeric_tick_interval_is_seconds() {
        let config = SceneConfig::from_toml_str(
            r#"
version = 1

[cycle]
tick_interval = 0.5
"#,
        )
        .unwrap();
        assert_eq!(config.cycle.tick_interval, Duration::from_millis(500));
    }

    #[test]
    fn rejects_unknown_version() {
        let err = SceneConfig::from_toml_str("version = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_out_of_range_color() {
        let err = SceneConfig::from_toml_str(
            r#"
version = 1

[palette.cloud]
day = [1.2, 0.9, 0.9]
sunset = [1.0, 0.5, 0.2]
night = [0.0, 0.0, 0.1]
sunrise = [1.0, 0.6, 0.4]
"#,
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid(message) => assert!(message.contains("palette.cloud.day")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_positive_scroll_step() {
        let err = SceneConfig::from_toml_str(
            r#"
version = 1

[cycle]
scroll_step = 0.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let err = SceneConfig::from_toml_str(
            r#"
version = 1

[cycle]
tick_interval = "0s"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_surface_dimension() {
        let err = SceneConfig::from_toml_str(
            r#"
version = 1

[surface]
width = 0
height = 450
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn parse_errors_surface_as_parse_variant() {
        let err = SceneConfig::from_toml_str("version = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_or_default_handles_missing_and_present_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        let missing = SceneConfig::load_or_default(&path).unwrap();
        assert_eq!(missing, SceneConfig::default());

        fs::write(&path, SAMPLE).unwrap();
        let loaded = SceneConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded.cycle.initial_phase, 120.0);
    }

    #[test]
    fn load_reports_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = SceneConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

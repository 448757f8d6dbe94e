use std::fmt;
use std::str::FromStr;

use daycycle::CycleState;
use sceneconfig::SceneConfig;

use crate::coast::CoastScene;
use crate::draw::Frame;
use crate::face::FaceScene;
use crate::fan::FanScene;
use crate::input::{Control, SceneInput};
use crate::SceneError;

/// A self-contained animated scene.
///
/// Scenes own all of their animation state. The driver delivers inputs and
/// ticks from a single thread and asks for a [`Frame`] whenever it wants to
/// draw.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Native surface size in pixels.
    fn default_size(&self) -> (u32, u32);

    /// Advances the timer-driven animation by one step.
    fn tick(&mut self);

    fn handle_input(&mut self, input: &SceneInput) -> Control;

    fn frame(&self) -> Frame;

    /// The day/night cycle driving this scene, if any.
    fn cycle(&self) -> Option<&CycleState> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Fan,
    Face,
    Coast,
    DayNight,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Fan,
        SceneKind::Face,
        SceneKind::Coast,
        SceneKind::DayNight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Fan => "fan",
            SceneKind::Face => "face",
            SceneKind::Coast => "coast",
            SceneKind::DayNight => "daynight",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Fan => "Fan",
            SceneKind::Face => "Face",
            SceneKind::Coast => "Ilocos",
            SceneKind::DayNight => "Ilocos - Day and Night",
        }
    }

    pub fn build(self, config: &SceneConfig) -> Result<Box<dyn Scene>, SceneError> {
        let scene: Box<dyn Scene> = match self {
            SceneKind::Fan => Box::new(FanScene::new()),
            SceneKind::Face => Box::new(FaceScene::new(config)),
            SceneKind::Coast => Box::new(CoastScene::new(config)),
            SceneKind::DayNight => Box::new(CoastScene::day_night(config)?),
        };
        tracing::debug!(scene = %self, "built scene");
        Ok(scene)
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "fan" => Ok(SceneKind::Fan),
            "face" => Ok(SceneKind::Face),
            "coast" | "ilocos" => Ok(SceneKind::Coast),
            "daynight" | "day-night" => Ok(SceneKind::DayNight),
            _ => Err(SceneError::UnknownScene(value.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("FAN".parse::<SceneKind>().unwrap(), SceneKind::Fan);
        assert_eq!("day-night".parse::<SceneKind>().unwrap(), SceneKind::DayNight);
        assert_eq!("ilocos".parse::<SceneKind>().unwrap(), SceneKind::Coast);
        assert!(matches!(
            "windmill".parse::<SceneKind>(),
            Err(SceneError::UnknownScene(name)) if name == "windmill"
        ));
    }

    #[test]
    fn builds_every_scene_with_defaults() {
        let config = SceneConfig::default();
        for kind in SceneKind::ALL {
            let scene = kind.build(&config).unwrap();
            assert_eq!(scene.kind(), kind);
            assert!(scene.frame().shape_count() > 0);
            assert_eq!(scene.cycle().is_some(), kind == SceneKind::DayNight);
        }
    }
}

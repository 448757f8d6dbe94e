use daycycle::CycleState;
use sceneconfig::{AnimationSettings, SceneConfig};

use crate::draw::Frame;
use crate::input::{Arrow, Control, SceneInput, ScrollDirection};
use crate::landscape::{self, Lighting, Motion};
use crate::scene::{Scene, SceneKind};
use crate::SceneError;

/// The coastal windmill landscape, optionally lit by a day/night cycle.
///
/// Without a cycle the scroll wheel slides the lettering sideways. With one,
/// the scroll wheel moves the time of day and the arrow keys take over the
/// lettering.
#[derive(Debug, Clone)]
pub struct CoastScene {
    motion: Motion,
    settings: AnimationSettings,
    cycle: Option<CycleState>,
    scroll_step: f32,
    auto_advance: f32,
}

impl CoastScene {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            motion: Motion::new(&config.animation),
            settings: config.animation.clone(),
            cycle: None,
            scroll_step: config.cycle.scroll_step,
            auto_advance: 0.0,
        }
    }

    pub fn day_night(config: &SceneConfig) -> Result<Self, SceneError> {
        let cycle = CycleState::from_config(config)?;
        tracing::debug!(
            phase = cycle.phase_degrees(),
            band = %cycle.band(),
            "initialised day/night cycle"
        );
        Ok(Self {
            cycle: Some(cycle),
            auto_advance: config.cycle.auto_advance,
            ..Self::new(config)
        })
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn lighting(&self) -> Lighting {
        match &self.cycle {
            Some(cycle) => Lighting::from(&cycle.sample()),
            None => Lighting::daylight(),
        }
    }

    fn shift_text(&mut self, direction: f32) {
        self.motion.text_offset += direction * self.settings.text_step;
    }

    fn shift_time(&mut self, direction: f32) {
        if let Some(cycle) = self.cycle.as_mut() {
            cycle.advance(direction * self.scroll_step);
            tracing::debug!(
                phase = cycle.phase_degrees(),
                band = %cycle.band(),
                "time of day changed"
            );
        }
    }
}

impl Scene for CoastScene {
    fn kind(&self) -> SceneKind {
        if self.cycle.is_some() {
            SceneKind::DayNight
        } else {
            SceneKind::Coast
        }
    }

    fn default_size(&self) -> (u32, u32) {
        (landscape::WIDTH as u32, landscape::HEIGHT as u32)
    }

    fn tick(&mut self) {
        self.motion.tick(&self.settings);
        if self.auto_advance != 0.0 {
            if let Some(cycle) = self.cycle.as_mut() {
                cycle.advance(self.auto_advance);
            }
        }
    }

    fn handle_input(&mut self, input: &SceneInput) -> Control {
        let direction = match input {
            SceneInput::Scroll(ScrollDirection::Up) => 1.0,
            SceneInput::Scroll(ScrollDirection::Down) => -1.0,
            _ => 0.0,
        };

        match input {
            SceneInput::Scroll(_) if self.cycle.is_some() => self.shift_time(direction),
            SceneInput::Scroll(_) => self.shift_text(direction),
            SceneInput::Arrow(Arrow::Right) => self.shift_text(1.0),
            SceneInput::Arrow(Arrow::Left) => self.shift_text(-1.0),
            SceneInput::Key(key) => match key.to_ascii_lowercase() {
                'd' => {
                    self.motion.spin_speed += self.settings.spin_step;
                    tracing::info!(spin_speed = self.motion.spin_speed, "windmill spin increased");
                }
                'a' => {
                    self.motion.spin_speed -= self.settings.spin_step;
                    tracing::info!(spin_speed = self.motion.spin_speed, "windmill spin decreased");
                }
                _ => {}
            },
            SceneInput::Arrow(_) | SceneInput::Click(_) | SceneInput::Escape => {}
        }
        Control::Continue
    }

    fn frame(&self) -> Frame {
        landscape::draw(&self.motion, &self.lighting())
    }

    fn cycle(&self) -> Option<&CycleState> {
        self.cycle.as_ref()
    }
}

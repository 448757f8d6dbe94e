use std::fmt;
use std::str::FromStr;

use crate::SceneError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Discrete input event delivered to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneInput {
    Key(char),
    Arrow(Arrow),
    Scroll(ScrollDirection),
    Click(MouseButton),
    Escape,
}

/// What the driver should do after an input has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

impl FromStr for SceneInput {
    type Err = SceneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(rest) = trimmed.strip_prefix("key:") {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(SceneInput::Key(ch)),
                _ => Err(SceneError::InvalidInput(format!(
                    "key input '{trimmed}' must name exactly one character"
                ))),
            };
        }

        let normalized = trimmed.to_ascii_lowercase();
        let input = match normalized.as_str() {
            "scroll-up" | "wheel-up" => SceneInput::Scroll(ScrollDirection::Up),
            "scroll-down" | "wheel-down" => SceneInput::Scroll(ScrollDirection::Down),
            "left" => SceneInput::Arrow(Arrow::Left),
            "right" => SceneInput::Arrow(Arrow::Right),
            "up" => SceneInput::Arrow(Arrow::Up),
            "down" => SceneInput::Arrow(Arrow::Down),
            "click-left" => SceneInput::Click(MouseButton::Left),
            "click-right" => SceneInput::Click(MouseButton::Right),
            "escape" | "esc" => SceneInput::Escape,
            other => {
                return Err(SceneError::InvalidInput(format!(
                    "unknown input '{other}'; expected scroll-up, scroll-down, left, right, up, down, click-left, click-right, escape, or key:<char>"
                )))
            }
        };
        Ok(input)
    }
}

impl fmt::Display for SceneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneInput::Key(ch) => write!(f, "key:{ch}"),
            SceneInput::Arrow(Arrow::Left) => f.write_str("left"),
            SceneInput::Arrow(Arrow::Right) => f.write_str("right"),
            SceneInput::Arrow(Arrow::Up) => f.write_str("up"),
            SceneInput::Arrow(Arrow::Down) => f.write_str("down"),
            SceneInput::Scroll(ScrollDirection::Up) => f.write_str("scroll-up"),
            SceneInput::Scroll(ScrollDirection::Down) => f.write_str("scroll-down"),
            SceneInput::Click(MouseButton::Left) => f.write_str("click-left"),
            SceneInput::Click(MouseButton::Right) => f.write_str("click-right"),
            SceneInput::Escape => f.write_str("escape"),
        }
    }
}

/// An input delivered just before the scene processes tick `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledInput {
    pub tick: u64,
    pub input: SceneInput,
}

impl FromStr for ScheduledInput {
    type Err = SceneError;

    /// Accepts `TICK:INPUT`, or a bare `INPUT` which is delivered at tick 0.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some((head, rest)) = trimmed.split_once(':') {
            if let Ok(tick) = head.trim().parse::<u64>() {
                return Ok(ScheduledInput {
                    tick,
                    input: rest.parse()?,
                });
            }
        }
        Ok(ScheduledInput {
            tick: 0,
            input: trimmed.parse()?,
        })
    }
}

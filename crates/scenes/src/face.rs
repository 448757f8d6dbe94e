use daycycle::Rgb;
use glam::{Affine2, Vec2};
use sceneconfig::SceneConfig;

use crate::draw::{Frame, Node, Viewport};
use crate::geometry::{arc, disk_outline};
use crate::input::{Control, MouseButton, SceneInput};
use crate::scene::{Scene, SceneKind};

const BACKGROUND: Rgb = Rgb::new(0.2, 0.5, 1.0);
const SKIN: Rgb = Rgb::new(1.0, 0.9, 0.5);
const FACE_RADIUS: f32 = 0.4;
const OUTLINE_STEP: f32 = 0.01;
const EYE_HALF: f32 = 0.08;
const EYE_X: f32 = 0.15;
const EYE_Y: f32 = 0.1;
const MOUTH_RADIUS: f32 = 0.25;
const MOUTH_HALF_WIDTH: f32 = 0.15;
const MOUTH_DROP: f32 = 0.35;
const MOUTH_WIDTH: f32 = 3.0;

const LEFT_EYE_COLORS: [Rgb; 3] = [
    Rgb::new(0.3, 0.0, 0.3),
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(0.0, 0.0, 0.0),
];
const RIGHT_EYE_COLORS: [Rgb; 3] = [
    Rgb::new(0.0, 0.6, 0.0),
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(1.0, 0.5, 0.0),
];

/// A face that moves with WASD and recolors its eyes on mouse clicks.
#[derive(Debug, Clone)]
pub struct FaceScene {
    offset: Vec2,
    step: f32,
    left_eye: usize,
    right_eye: usize,
    outline: Vec<Vec2>,
    mouth: Vec<Vec2>,
}

impl FaceScene {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            offset: Vec2::ZERO,
            step: config.animation.face_step,
            left_eye: 0,
            right_eye: 0,
            outline: disk_outline(FACE_RADIUS, OUTLINE_STEP),
            mouth: arc(MOUTH_RADIUS, MOUTH_HALF_WIDTH, MOUTH_DROP, OUTLINE_STEP),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn eye_colors(&self) -> (Rgb, Rgb) {
        (
            LEFT_EYE_COLORS[self.left_eye],
            RIGHT_EYE_COLORS[self.right_eye],
        )
    }

    fn eye(center_x: f32, color: Rgb) -> Node {
        Node::rect(
            center_x - EYE_HALF,
            EYE_Y - EYE_HALF,
            2.0 * EYE_HALF,
            2.0 * EYE_HALF,
            color,
        )
    }
}

impl Scene for FaceScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Face
    }

    fn default_size(&self) -> (u32, u32) {
        (600, 600)
    }

    fn tick(&mut self) {}

    fn handle_input(&mut self, input: &SceneInput) -> Control {
        match input {
            SceneInput::Escape => return Control::Exit,
            SceneInput::Key(key) => match key.to_ascii_lowercase() {
                'w' => self.offset.y += self.step,
                's' => self.offset.y -= self.step,
                'a' => self.offset.x -= self.step,
                'd' => self.offset.x += self.step,
                _ => {}
            },
            SceneInput::Click(MouseButton::Left) => {
                self.left_eye = (self.left_eye + 1) % LEFT_EYE_COLORS.len();
                tracing::info!(state = self.left_eye, "left eye color changed");
            }
            SceneInput::Click(MouseButton::Right) => {
                self.right_eye = (self.right_eye + 1) % RIGHT_EYE_COLORS.len();
                tracing::info!(state = self.right_eye, "right eye color changed");
            }
            SceneInput::Arrow(_) | SceneInput::Scroll(_) => {}
        }
        Control::Continue
    }

    fn frame(&self) -> Frame {
        let (left, right) = self.eye_colors();
        let mut frame = Frame::new(BACKGROUND, Viewport::unit());
        frame.push(Node::group(
            Affine2::from_translation(self.offset),
            vec![
                Node::polygon(self.outline.clone(), SKIN),
                Self::eye(-EYE_X, left),
                Self::eye(EYE_X, right),
                Node::line_strip(self.mouth.clone(), MOUTH_WIDTH, Rgb::BLACK),
            ],
        ));
        frame
    }
}

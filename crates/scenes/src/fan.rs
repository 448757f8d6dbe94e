use std::f32::consts::TAU;

use daycycle::Rgb;
use glam::Vec2;

use crate::draw::{Frame, Node, Viewport};
use crate::input::{Control, SceneInput};
use crate::scene::{Scene, SceneKind};

const RADIUS: f32 = 0.7;
const RIM_STEPS: usize = 16;

const BLADE_COLORS: [Rgb; 8] = [
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(0.6, 1.0, 0.0),
    Rgb::new(1.0, 1.0, 0.0),
    Rgb::new(1.0, 0.6, 0.0),
    Rgb::new(0.8, 0.0, 0.6),
    Rgb::new(0.4, 0.0, 0.8),
    Rgb::new(0.0, 0.3, 1.0),
    Rgb::new(0.0, 0.6, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanVertex {
    pub position: Vec2,
    pub color: Rgb,
}

/// Eight colored blades separated by black gaps, built once as a
/// triangle fan.
#[derive(Debug, Clone)]
pub struct FanScene {
    vertices: Vec<FanVertex>,
}

impl FanScene {
    pub fn new() -> Self {
        Self {
            vertices: fan_vertices(),
        }
    }

    pub fn vertices(&self) -> &[FanVertex] {
        &self.vertices
    }

    /// Splits the fan into triangles. With flat shading each triangle takes
    /// the color of its last vertex.
    pub fn triangles(&self) -> Vec<([Vec2; 3], Rgb)> {
        let Some((hub, rim)) = self.vertices.split_first() else {
            return Vec::new();
        };
        rim.windows(2)
            .map(|pair| {
                (
                    [hub.position, pair[0].position, pair[1].position],
                    pair[1].color,
                )
            })
            .collect()
    }
}

impl Default for FanScene {
    fn default() -> Self {
        Self::new()
    }
}

fn rim_point(index: usize) -> Vec2 {
    let theta = TAU * index as f32 / RIM_STEPS as f32;
    RADIUS * Vec2::new(theta.cos(), theta.sin())
}

fn fan_vertices() -> Vec<FanVertex> {
    let mut vertices = Vec::with_capacity(RIM_STEPS + 2);
    vertices.push(FanVertex {
        position: Vec2::ZERO,
        color: Rgb::BLACK,
    });
    vertices.push(FanVertex {
        position: rim_point(0),
        color: Rgb::BLACK,
    });
    for (blade, color) in BLADE_COLORS.iter().enumerate() {
        vertices.push(FanVertex {
            position: rim_point(2 * blade + 1),
            color: *color,
        });
        vertices.push(FanVertex {
            position: rim_point(2 * blade + 2),
            color: Rgb::BLACK,
        });
    }
    vertices
}

impl Scene for FanScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Fan
    }

    fn default_size(&self) -> (u32, u32) {
        (600, 600)
    }

    fn tick(&mut self) {}

    fn handle_input(&mut self, _input: &SceneInput) -> Control {
        Control::Continue
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(Rgb::BLACK, Viewport::unit());
        for (corners, color) in self.triangles() {
            frame.push(Node::polygon(corners.to_vec(), color));
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_eighteen_vertices() {
        let scene = FanScene::new();
        let vertices = scene.vertices();
        assert_eq!(vertices.len(), 18);
        assert_eq!(vertices[0].position, Vec2::ZERO);
        assert!((vertices[1].position - Vec2::new(0.7, 0.0)).length() < 1e-6);
        assert!((vertices[17].position - Vec2::new(0.7, 0.0)).length() < 1e-5);
    }

    #[test]
    fn blades_alternate_with_black_gaps() {
        let scene = FanScene::new();
        let triangles = scene.triangles();
        assert_eq!(triangles.len(), 16);
        for (index, (_, color)) in triangles.iter().enumerate() {
            if index % 2 == 0 {
                assert_eq!(*color, BLADE_COLORS[index / 2]);
            } else {
                assert_eq!(*color, Rgb::BLACK);
            }
        }
    }

    #[test]
    fn first_blade_spans_the_first_sixteenth() {
        let scene = FanScene::new();
        let (corners, _) = scene.triangles()[0];
        let angle = corners[2].y.atan2(corners[2].x);
        assert!((angle - TAU / 16.0).abs() < 1e-5);
    }

    #[test]
    fn ignores_input_and_ticks() {
        let mut scene = FanScene::new();
        let before = scene.frame();
        scene.tick();
        assert_eq!(scene.handle_input(&SceneInput::Escape), Control::Continue);
        assert_eq!(scene.frame(), before);
    }
}

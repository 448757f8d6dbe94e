//! Coastal windmill landscape shared by the `coast` and `daynight` scenes.
//!
//! Coordinates are in an 800x450 orthographic space with the origin at the
//! bottom-left corner.

use daycycle::{CycleSample, Rgb, Wrapping};
use glam::{Affine2, Vec2};
use sceneconfig::AnimationSettings;

use crate::draw::{Frame, Node, Viewport};
use crate::geometry::octagon;

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 450.0;

/// Clouds re-enter from the left once they pass this x coordinate.
pub const CLOUD_RIGHT_EDGE: f32 = 950.0;
pub const CLOUD_WRAP_SPAN: f32 = 1100.0;

const DAYLIGHT_SKY: Rgb = Rgb::new(0.94, 0.99, 1.0);
const SUN: Rgb = Rgb::new(1.0, 0.65, 0.1);
const CLOUD: Rgb = Rgb::new(0.85, 0.96, 0.98);
const MOUNTAIN: Rgb = Rgb::new(0.18, 0.42, 0.12);
const WATER: Rgb = Rgb::new(0.0, 0.55, 0.85);
const SAND: Rgb = Rgb::new(0.98, 0.92, 0.84);
const POLE: Rgb = Rgb::new(0.85, 0.85, 0.85);
const BLADE: Rgb = Rgb::new(0.6, 0.6, 0.6);
const HUB: Rgb = Rgb::new(0.3, 0.3, 0.3);
const TEXT: Rgb = Rgb::BLACK;

const CLOUDS: [(f32, f32, f32); 4] = [
    (80.0, 380.0, 1.0),
    (280.0, 400.0, 1.1),
    (500.0, 390.0, 1.0),
    (720.0, 380.0, 1.1),
];

/// `(x, y, scale, rotation offset in degrees)`.
const WINDMILLS: [(f32, f32, f32, f32); 3] = [
    (80.0, 50.0, 1.0, 25.0),
    (200.0, 65.0, 0.9, 60.0),
    (330.0, 50.0, 1.05, 15.0),
];

const MOUNTAIN_OUTLINE: [(f32, f32); 10] = [
    (0.0, 0.0),
    (0.0, 100.0),
    (150.0, 220.0),
    (220.0, 180.0),
    (400.0, 320.0),
    (550.0, 180.0),
    (700.0, 280.0),
    (780.0, 200.0),
    (800.0, 220.0),
    (800.0, 0.0),
];

/// Colors and factors the landscape is lit with for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub sky: Rgb,
    pub cloud: Rgb,
    /// Multiplier for mountains, sand and water.
    pub terrain: f32,
    /// Multiplier for the sun and the windmills.
    pub light: f32,
}

impl Lighting {
    pub fn daylight() -> Self {
        Self {
            sky: DAYLIGHT_SKY,
            cloud: CLOUD,
            terrain: 1.0,
            light: 1.0,
        }
    }
}

impl From<&CycleSample> for Lighting {
    fn from(sample: &CycleSample) -> Self {
        Self {
            sky: sample.sky,
            cloud: sample.cloud,
            terrain: sample.terrain,
            light: sample.light,
        }
    }
}

/// Timer- and input-driven animation values of the landscape.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub windmill: Wrapping,
    pub spin_speed: f32,
    pub cloud_offset: Wrapping,
    pub wave: Wrapping,
    pub text_offset: f32,
}

impl Motion {
    pub fn new(settings: &AnimationSettings) -> Self {
        Self {
            windmill: Wrapping::degrees(0.0),
            spin_speed: settings.spin_speed,
            cloud_offset: Wrapping::new(0.0, CLOUD_WRAP_SPAN),
            wave: Wrapping::radians(0.0),
            text_offset: 0.0,
        }
    }

    /// One timer step: blades turn clockwise, clouds drift right, waves roll.
    pub fn tick(&mut self, settings: &AnimationSettings) {
        self.windmill.advance(-self.spin_speed);
        self.cloud_offset.advance(settings.cloud_drift);
        self.wave.advance(settings.wave_step);
    }
}

/// Horizontal position of a cloud cluster anchored at `x` after drifting.
pub fn cloud_x(x: f32, offset: f32) -> f32 {
    let mut current = x + offset;
    while current > CLOUD_RIGHT_EDGE {
        current -= CLOUD_WRAP_SPAN;
    }
    current
}

pub fn draw(motion: &Motion, lighting: &Lighting) -> Frame {
    let mut frame = Frame::new(lighting.sky, Viewport::ortho(WIDTH, HEIGHT));

    frame.push(Node::polygon(octagon(780.0, 440.0, 90.0), SUN.scale(lighting.light)));
    for (x, y, scale) in CLOUDS {
        frame.push(cloud_cluster(
            cloud_x(x, motion.cloud_offset.value()),
            y,
            scale,
            lighting.cloud,
        ));
    }

    let mountain = MOUNTAIN_OUTLINE
        .iter()
        .map(|&(x, y)| Vec2::new(x, y))
        .collect();
    frame.push(Node::polygon(mountain, MOUNTAIN.scale(lighting.terrain)));
    frame.push(Node::rect(0.0, 0.0, WIDTH, 60.0, SAND.scale(lighting.terrain)));
    frame.push(water(
        10.0 * motion.wave.value().sin(),
        WATER.scale(lighting.terrain),
    ));

    for (x, y, scale, rotation) in WINDMILLS {
        frame.push(windmill(
            x,
            y,
            scale,
            rotation + motion.windmill.value(),
            lighting.light,
        ));
    }

    frame.push(Node::group(
        Affine2::from_translation(Vec2::new(motion.text_offset, 0.0)),
        lettering(),
    ));
    frame
}

fn cloud_cluster(x: f32, y: f32, scale: f32, color: Rgb) -> Node {
    Node::group(
        Affine2::IDENTITY,
        vec![
            Node::polygon(octagon(x, y, 35.0 * scale), color),
            Node::polygon(
                octagon(x + 45.0 * scale, y + 5.0 * scale, 40.0 * scale),
                color,
            ),
            Node::polygon(
                octagon(x - 40.0 * scale, y + 10.0 * scale, 35.0 * scale),
                color,
            ),
        ],
    )
}

fn water(shift: f32, color: Rgb) -> Node {
    Node::polygon(
        vec![
            Vec2::new(520.0 + shift, 0.0),
            Vec2::new(550.0 + shift, 25.0),
            Vec2::new(620.0 + shift, 25.0),
            Vec2::new(650.0 + shift, 50.0),
            Vec2::new(800.0, 50.0),
            Vec2::new(800.0, 0.0),
        ],
        color,
    )
}

fn windmill(x: f32, y: f32, scale: f32, angle_degrees: f32, light: f32) -> Node {
    let hub = Vec2::new(x, y + 160.0 * scale);
    let blades = (0..3)
        .map(|i| {
            Node::group(
                Affine2::from_angle((i as f32 * 120.0).to_radians()),
                vec![Node::rect(
                    -2.0 * scale,
                    0.0,
                    4.0 * scale,
                    95.0 * scale,
                    BLADE.scale(light),
                )],
            )
        })
        .collect();

    Node::group(
        Affine2::IDENTITY,
        vec![
            Node::rect(
                x - 4.0 * scale,
                y,
                8.0 * scale,
                160.0 * scale,
                POLE.scale(light),
            ),
            Node::group(
                Affine2::from_translation(hub) * Affine2::from_angle(angle_degrees.to_radians()),
                blades,
            ),
            Node::polygon(octagon(hub.x, hub.y, 8.0 * scale), HUB.scale(light)),
        ],
    )
}

/// Block letters spelling "ILOCOS".
fn lettering() -> Vec<Node> {
    const BASE: f32 = 160.0;
    const HEIGHT: f32 = 90.0;
    const THICK: f32 = 25.0;
    const WIDE: f32 = 55.0;

    let bar = |x: f32, y: f32, w: f32, h: f32| Node::rect(x, y, w, h, TEXT);
    let letter_o = |x: f32| {
        vec![
            bar(x, BASE, THICK, HEIGHT),
            bar(x + WIDE - THICK, BASE, THICK, HEIGHT),
            bar(x, BASE, WIDE, THICK),
            bar(x, BASE + HEIGHT - THICK, WIDE, THICK),
        ]
    };

    let mut nodes = vec![bar(395.0, BASE, THICK, HEIGHT)];
    nodes.extend([bar(440.0, BASE, THICK, HEIGHT), bar(440.0, BASE, WIDE, THICK)]);
    nodes.extend(letter_o(510.0));
    nodes.extend([
        bar(580.0, BASE, THICK, HEIGHT),
        bar(580.0, BASE, WIDE, THICK),
        bar(580.0, BASE + HEIGHT - THICK, WIDE, THICK),
    ]);
    nodes.extend(letter_o(650.0));
    let s = 720.0;
    nodes.extend([
        bar(s, BASE + HEIGHT - THICK, WIDE, THICK),
        bar(s, BASE + HEIGHT / 2.0, THICK, HEIGHT / 2.0),
        bar(s, BASE + HEIGHT / 2.0 - THICK / 2.0, WIDE, THICK),
        bar(s + WIDE - THICK, BASE, THICK, HEIGHT / 2.0),
        bar(s, BASE, WIDE, THICK),
    ]);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clouds_wrap_back_to_the_left() {
        assert_eq!(cloud_x(80.0, 0.0), 80.0);
        assert_eq!(cloud_x(720.0, 230.0), 950.0);
        assert_eq!(cloud_x(720.0, 231.0), -149.0);
        assert_eq!(cloud_x(720.0, 2431.0), -149.0);
    }

    #[test]
    fn motion_tick_spins_clockwise_and_drifts() {
        let settings = AnimationSettings::default();
        let mut motion = Motion::new(&settings);
        motion.tick(&settings);
        assert_eq!(motion.windmill.value(), 358.0);
        assert_eq!(motion.cloud_offset.value(), 0.5);
        assert!((motion.wave.value() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn lettering_spells_ilocos_in_nineteen_bars() {
        let bars = lettering();
        assert_eq!(bars.len(), 1 + 2 + 4 + 3 + 4 + 5);
    }

    #[test]
    fn frame_layers_back_to_front() {
        let motion = Motion::new(&AnimationSettings::default());
        let frame = draw(&motion, &Lighting::daylight());
        assert_eq!(frame.clear, DAYLIGHT_SKY);
        // sun, 4 clouds, mountain, sand, water, 3 windmills, text
        assert_eq!(frame.nodes.len(), 1 + 4 + 1 + 1 + 1 + 3 + 1);
        // windmill: pole + 3 blades + hub
        assert_eq!(frame.nodes[8].shape_count(), 5);
        assert_eq!(frame.shape_count(), 1 + 12 + 3 + 15 + 19);
    }

    #[test]
    fn lighting_dims_sun_terrain_and_windmills() {
        let motion = Motion::new(&AnimationSettings::default());
        let night = Lighting {
            sky: Rgb::BLACK,
            cloud: Rgb::BLACK,
            terrain: 0.5,
            light: 0.2,
        };
        let frame = draw(&motion, &night);
        let mut colors = Vec::new();
        frame.for_each_shape(|_, shape| colors.push(shape.color));
        assert_eq!(colors[0], SUN.scale(0.2));
        assert_eq!(colors[13], MOUNTAIN.scale(0.5));
        assert_eq!(colors[14], SAND.scale(0.5));
        assert_eq!(colors[16], POLE.scale(0.2));
        assert_eq!(*colors.last().unwrap(), TEXT);
    }
}

use std::f32::consts::TAU;

use glam::Vec2;

/// Vertices of a regular polygon, starting on the positive x axis and
/// winding counter-clockwise.
pub fn regular_polygon(center: Vec2, radius: f32, sides: usize) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = TAU * i as f32 / sides as f32;
            center + radius * Vec2::new(theta.cos(), theta.sin())
        })
        .collect()
}

pub fn octagon(x: f32, y: f32, radius: f32) -> Vec<Vec2> {
    regular_polygon(Vec2::new(x, y), radius, 8)
}

/// `count` evenly spaced samples covering `[start, end]` inclusive.
pub fn samples(start: f32, end: f32, count: usize) -> impl Iterator<Item = f32> {
    let span = end - start;
    let last = count.saturating_sub(1).max(1) as f32;
    (0..count).map(move |i| start + span * i as f32 / last)
}

/// Circle outline sampled along x with spacing `step`, upper half from
/// `+r` to `-r` and lower half back from `-r` to `+r`.
pub fn disk_outline(radius: f32, step: f32) -> Vec<Vec2> {
    let count = (2.0 * radius / step).round() as usize + 1;
    let height = |x: f32| (radius * radius - x * x).max(0.0).sqrt();
    let upper = samples(radius, -radius, count).map(|x| Vec2::new(x, height(x)));
    let lower = samples(-radius, radius, count).map(|x| Vec2::new(x, -height(x)));
    upper.chain(lower).collect()
}

/// Arc of a circle centred at `(0, -drop)` sampled along `[-half_width, half_width]`.
pub fn arc(radius: f32, half_width: f32, drop: f32, step: f32) -> Vec<Vec2> {
    let count = (2.0 * half_width / step).round() as usize + 1;
    samples(-half_width, half_width, count)
        .map(|x| Vec2::new(x, (radius * radius - x * x).max(0.0).sqrt() - drop))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn octagon_has_eight_vertices_on_the_circle() {
        let points = octagon(780.0, 440.0, 90.0);
        assert_eq!(points.len(), 8);
        assert!(approx(points[0], Vec2::new(870.0, 440.0)));
        assert!(approx(points[2], Vec2::new(780.0, 530.0)));
        for point in points {
            assert!(((point - Vec2::new(780.0, 440.0)).length() - 90.0).abs() < 1e-3);
        }
    }

    #[test]
    fn samples_include_both_ends() {
        let values: Vec<f32> = samples(-1.0, 1.0, 5).collect();
        assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn disk_outline_closes_on_the_x_axis() {
        let outline = disk_outline(0.4, 0.01);
        assert_eq!(outline.len(), 2 * 81);
        assert!(approx(outline[0], Vec2::new(0.4, 0.0)));
        assert!(approx(outline[80], Vec2::new(-0.4, 0.0)));
        assert!(approx(outline[40], Vec2::new(0.0, 0.4)));
        assert!(approx(outline[121], Vec2::new(0.0, -0.4)));
    }

    #[test]
    fn arc_is_symmetric() {
        let points = arc(0.25, 0.15, 0.35, 0.01);
        assert_eq!(points.len(), 31);
        let first = points[0];
        let last = points[30];
        assert!((first.y - last.y).abs() < 1e-6);
        assert!(approx(points[15], Vec2::new(0.0, -0.1)));
    }
}

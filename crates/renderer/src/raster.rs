//! Scanline rasterizer for [`scenes::Frame`] display lists.
//!
//! Coverage is sampled once at every pixel center and polygons are filled
//! with the even-odd rule. Line strips are expanded into one quad per
//! segment in pixel space so their width does not depend on the viewport.

use daycycle::Rgb;
use glam::{Affine2, Vec2};
use image::RgbImage;
use scenes::{Frame, Primitive, Viewport};

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn clear(&mut self, color: Rgb) {
        let pixel = image::Rgb(color.to_rgb8());
        for target in self.image.pixels_mut() {
            *target = pixel;
        }
    }

    /// Fills a polygon given in pixel coordinates (y down).
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let pixel = image::Rgb(color.to_rgb8());
        let (width, height) = (self.width() as f32, self.height() as f32);

        let (top, bottom) = points.iter().fold((f32::MAX, f32::MIN), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
        let first_row = (top - 0.5).ceil().max(0.0) as u32;
        let last_row = (bottom - 0.5).ceil().min(height).max(0.0) as u32;

        let mut crossings = Vec::with_capacity(points.len());
        for row in first_row..last_row {
            let center_y = row as f32 + 0.5;
            crossings.clear();
            for (index, a) in points.iter().enumerate() {
                let b = points[(index + 1) % points.len()];
                if (a.y <= center_y) != (b.y <= center_y) {
                    let t = (center_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().clamp(0.0, width) as u32;
                let end = (span[1] - 0.5).ceil().clamp(0.0, width) as u32;
                for column in start..end {
                    self.image.put_pixel(column, row, pixel);
                }
            }
        }
    }

    /// Strokes an open polyline given in pixel coordinates.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgb) {
        let half = width.max(1.0) / 2.0;
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let normal = (b - a).normalize_or_zero().perp() * half;
            if normal == Vec2::ZERO {
                continue;
            }
            self.fill_polygon(&[a + normal, b + normal, b - normal, a - normal], color);
        }
    }
}

/// Maps viewport coordinates (y up) onto a `width` x `height` pixel grid
/// (y down).
pub fn viewport_to_pixels(viewport: &Viewport, width: u32, height: u32) -> Affine2 {
    let size = viewport.size();
    let scale = Vec2::new(width as f32 / size.x, height as f32 / size.y);
    Affine2::from_cols(
        Vec2::new(scale.x, 0.0),
        Vec2::new(0.0, -scale.y),
        Vec2::new(-viewport.min.x * scale.x, viewport.max.y * scale.y),
    )
}

/// Clears the canvas and draws every shape of `frame` in order.
pub fn render_frame(canvas: &mut Canvas, frame: &Frame) {
    canvas.clear(frame.clear);
    let to_pixels = viewport_to_pixels(&frame.viewport, canvas.width(), canvas.height());
    frame.for_each_shape(|transform, shape| {
        let matrix = to_pixels * *transform;
        let project = |points: &[Vec2]| -> Vec<Vec2> {
            points.iter().map(|p| matrix.transform_point2(*p)).collect()
        };
        match &shape.primitive {
            Primitive::Polygon(points) => canvas.fill_polygon(&project(points), shape.color),
            Primitive::LineStrip { points, width } => {
                canvas.stroke_polyline(&project(points), *width, shape.color)
            }
        }
    });
}

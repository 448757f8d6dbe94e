use serde::Serialize;

/// Linear RGB color with channels nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(channels: [f32; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel-wise `self * (1 - t) + other * t`. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Multiplies every channel by `factor`, clamping the result to `[0, 1]`.
    pub fn scale(self, factor: f32) -> Rgb {
        let apply = |c: f32| (c * factor).clamp(0.0, 1.0);
        Rgb::new(apply(self.r), apply(self.g), apply(self.b))
    }

    pub fn is_normalized(self) -> bool {
        self.to_array()
            .iter()
            .all(|channel| channel.is_finite() && (0.0..=1.0).contains(channel))
    }

    /// Quantizes to 8-bit channels, rounding to nearest.
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(value: [f32; 3]) -> Self {
        Rgb::from_array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Rgb::new(0.0, 0.5, 1.0);
        let b = Rgb::new(1.0, 0.5, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn lerp_clamps_fraction() {
        let a = Rgb::BLACK;
        let b = Rgb::WHITE;
        assert_eq!(a.lerp(b, -2.0), a);
        assert_eq!(a.lerp(b, 3.0), b);
    }

    #[test]
    fn scale_clamps_channels() {
        let color = Rgb::new(0.6, 0.2, 1.0);
        assert_eq!(color.scale(2.0), Rgb::new(1.0, 0.4, 1.0));
        assert_eq!(color.scale(0.0), Rgb::BLACK);
    }

    #[test]
    fn quantizes_to_bytes() {
        assert_eq!(Rgb::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Rgb::new(0.5, 0.0, 1.5).to_rgb8(), [128, 0, 255]);
    }

    #[test]
    fn detects_out_of_range_channels() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_normalized());
        assert!(!Rgb::new(-0.1, 0.5, 1.0).is_normalized());
        assert!(!Rgb::new(f32::NAN, 0.5, 1.0).is_normalized());
    }
}

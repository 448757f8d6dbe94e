use sceneconfig::PaletteStops;

use crate::color::Rgb;
use crate::CycleError;

/// Four-stop palette interpolated across the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub day: Rgb,
    pub sunset: Rgb,
    pub night: Rgb,
    pub sunrise: Rgb,
}

impl Palette {
    pub fn sky() -> Self {
        Self::from(&PaletteStops::default_sky())
    }

    pub fn cloud() -> Self {
        Self::from(&PaletteStops::default_cloud())
    }

    pub fn validate(&self) -> Result<(), CycleError> {
        let stops = [
            ("day", self.day),
            ("sunset", self.sunset),
            ("night", self.night),
            ("sunrise", self.sunrise),
        ];
        match stops.iter().find(|(_, color)| !color.is_normalized()) {
            Some((stop, _)) => Err(CycleError::PaletteOutOfRange { stop: *stop }),
            None => Ok(()),
        }
    }
}

impl From<&PaletteStops> for Palette {
    fn from(stops: &PaletteStops) -> Self {
        Self {
            day: Rgb::from(stops.day),
            sunset: Rgb::from(stops.sunset),
            night: Rgb::from(stops.night),
            sunrise: Rgb::from(stops.sunrise),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palettes_are_valid() {
        assert!(Palette::sky().validate().is_ok());
        assert!(Palette::cloud().validate().is_ok());
    }

    #[test]
    fn reports_offending_stop() {
        let mut palette = Palette::sky();
        palette.sunrise = Rgb::new(0.5, 2.0, 0.5);
        let err = palette.validate().unwrap_err();
        assert!(matches!(err, CycleError::PaletteOutOfRange { stop: "sunrise" }));
    }
}

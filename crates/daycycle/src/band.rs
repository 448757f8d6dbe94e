use serde::Serialize;

use crate::angle::FULL_TURN_DEGREES;
use crate::color::Rgb;
use crate::palette::Palette;
use crate::CycleError;

/// Band boundaries in degrees: day, day→sunset, sunset→night, night,
/// night→sunrise, sunrise→day, and the closing day band.
pub const DAY_END: f32 = 60.0;
pub const SUNSET_MID: f32 = 100.0;
pub const NIGHT_START: f32 = 130.0;
pub const NIGHT_END: f32 = 230.0;
pub const SUNRISE_MID: f32 = 270.0;
pub const DAY_RESUME: f32 = 320.0;

/// Named segment of the day/night state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BandKind {
    Day,
    DayToSunset,
    SunsetToNight,
    Night,
    NightToSunrise,
    SunriseToDay,
}

impl BandKind {
    pub fn is_transition(self) -> bool {
        !matches!(self, BandKind::Day | BandKind::Night)
    }
}

impl std::fmt::Display for BandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BandKind::Day => "day",
            BandKind::DayToSunset => "day-to-sunset",
            BandKind::SunsetToNight => "sunset-to-night",
            BandKind::Night => "night",
            BandKind::NightToSunrise => "night-to-sunrise",
            BandKind::SunriseToDay => "sunrise-to-day",
        };
        f.write_str(label)
    }
}

/// Half-open interval `[start, end)` of the cycle with its color endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBand {
    pub kind: BandKind,
    pub start: f32,
    pub end: f32,
    pub from: Rgb,
    pub to: Rgb,
}

impl PhaseBand {
    pub fn pure(kind: BandKind, start: f32, end: f32, color: Rgb) -> Self {
        Self {
            kind,
            start,
            end,
            from: color,
            to: color,
        }
    }

    pub fn transition(kind: BandKind, start: f32, end: f32, from: Rgb, to: Rgb) -> Self {
        Self {
            kind,
            start,
            end,
            from,
            to,
        }
    }

    pub fn is_pure(&self) -> bool {
        self.from == self.to
    }

    pub fn contains(&self, phase: f32) -> bool {
        phase >= self.start && phase < self.end
    }

    /// Progress through the band, clamped to `[0, 1]`.
    pub fn fraction(&self, phase: f32) -> f32 {
        ((phase - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, phase: f32) -> Rgb {
        if self.is_pure() {
            self.from
        } else {
            self.from.lerp(self.to, self.fraction(phase))
        }
    }
}

/// Ordered bands that partition `[0, 360)` without gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<PhaseBand>,
}

impl BandTable {
    pub fn new(bands: Vec<PhaseBand>) -> Result<Self, CycleError> {
        check_layout(&bands)?;
        if let Some(band) = bands
            .iter()
            .find(|band| !band.from.is_normalized() || !band.to.is_normalized())
        {
            return Err(CycleError::ColorOutOfRange { kind: band.kind });
        }
        Ok(Self { bands })
    }

    /// The fixed seven-band layout shared by the sky and cloud palettes.
    pub fn standard(palette: &Palette) -> Self {
        use BandKind::*;
        let bands = vec![
            PhaseBand::pure(Day, 0.0, DAY_END, palette.day),
            PhaseBand::transition(DayToSunset, DAY_END, SUNSET_MID, palette.day, palette.sunset),
            PhaseBand::transition(
                SunsetToNight,
                SUNSET_MID,
                NIGHT_START,
                palette.sunset,
                palette.night,
            ),
            PhaseBand::pure(Night, NIGHT_START, NIGHT_END, palette.night),
            PhaseBand::transition(
                NightToSunrise,
                NIGHT_END,
                SUNRISE_MID,
                palette.night,
                palette.sunrise,
            ),
            PhaseBand::transition(
                SunriseToDay,
                SUNRISE_MID,
                DAY_RESUME,
                palette.sunrise,
                palette.day,
            ),
            PhaseBand::pure(Day, DAY_RESUME, FULL_TURN_DEGREES, palette.day),
        ];
        debug_assert!(check_layout(&bands).is_ok(), "standard band layout is broken");
        Self { bands }
    }

    pub fn bands(&self) -> &[PhaseBand] {
        &self.bands
    }

    /// Finds the band containing `phase`, which must already be wrapped.
    pub fn locate(&self, phase: f32) -> &PhaseBand {
        debug_assert!((0.0..FULL_TURN_DEGREES).contains(&phase));
        let index = self
            .bands
            .partition_point(|band| band.end <= phase)
            .min(self.bands.len() - 1);
        &self.bands[index]
    }

    pub fn color_at(&self, phase: f32) -> Rgb {
        self.locate(phase).color_at(phase)
    }
}

fn check_layout(bands: &[PhaseBand]) -> Result<(), CycleError> {
    let first = bands.first().ok_or(CycleError::EmptyTable)?;
    if first.start != 0.0 {
        return Err(CycleError::Coverage {
            edge: "start",
            expected: 0.0,
            found: first.start,
        });
    }

    let mut cursor = 0.0;
    for band in bands {
        if !band.start.is_finite() || !band.end.is_finite() || band.end <= band.start {
            return Err(CycleError::DegenerateBand {
                kind: band.kind,
                start: band.start,
                end: band.end,
            });
        }
        if band.start != cursor {
            return Err(CycleError::Gap {
                expected: cursor,
                found: band.start,
            });
        }
        cursor = band.end;
    }

    if cursor != FULL_TURN_DEGREES {
        return Err(CycleError::Coverage {
            edge: "end",
            expected: FULL_TURN_DEGREES,
            found: cursor,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_band(split: f32) -> Vec<PhaseBand> {
        vec![
            PhaseBand::pure(BandKind::Day, 0.0, split, Rgb::WHITE),
            PhaseBand::pure(BandKind::Night, split, 360.0, Rgb::BLACK),
        ]
    }

    #[test]
    fn standard_table_covers_circle() {
        let table = BandTable::standard(&Palette::sky());
        assert_eq!(table.bands().len(), 7);
        for step in 0..3600 {
            let phase = step as f32 / 10.0;
            let matches = table
                .bands()
                .iter()
                .filter(|band| band.contains(phase))
                .count();
            assert_eq!(matches, 1, "phase {phase} matched {matches} bands");
            assert!(table.locate(phase).contains(phase));
        }
    }

    #[test]
    fn locate_respects_half_open_boundaries() {
        let table = BandTable::standard(&Palette::sky());
        assert_eq!(table.locate(59.999).kind, BandKind::Day);
        assert_eq!(table.locate(60.0).kind, BandKind::DayToSunset);
        assert_eq!(table.locate(130.0).kind, BandKind::Night);
        assert_eq!(table.locate(229.99).kind, BandKind::Night);
        assert_eq!(table.locate(230.0).kind, BandKind::NightToSunrise);
        assert_eq!(table.locate(359.99).kind, BandKind::Day);
    }

    #[test]
    fn transition_fraction_is_clamped() {
        let band = PhaseBand::transition(BandKind::DayToSunset, 60.0, 100.0, Rgb::BLACK, Rgb::WHITE);
        assert_eq!(band.fraction(40.0), 0.0);
        assert_eq!(band.fraction(80.0), 0.5);
        assert_eq!(band.fraction(150.0), 1.0);
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(BandTable::new(Vec::new()), Err(CycleError::EmptyTable)));
    }

    #[test]
    fn rejects_degenerate_band() {
        let mut bands = two_band(180.0);
        bands.insert(
            1,
            PhaseBand::pure(BandKind::SunsetToNight, 180.0, 180.0, Rgb::BLACK),
        );
        let err = BandTable::new(bands).unwrap_err();
        assert!(matches!(err, CycleError::DegenerateBand { .. }));
    }

    #[test]
    fn rejects_gaps_between_bands() {
        let bands = vec![
            PhaseBand::pure(BandKind::Day, 0.0, 170.0, Rgb::WHITE),
            PhaseBand::pure(BandKind::Night, 180.0, 360.0, Rgb::BLACK),
        ];
        let err = BandTable::new(bands).unwrap_err();
        assert!(matches!(
            err,
            CycleError::Gap {
                expected,
                found
            } if expected == 170.0 && found == 180.0
        ));
    }

    #[test]
    fn rejects_incomplete_coverage() {
        let bands = vec![PhaseBand::pure(BandKind::Day, 0.0, 300.0, Rgb::WHITE)];
        let err = BandTable::new(bands).unwrap_err();
        assert!(matches!(err, CycleError::Coverage { edge: "end", .. }));

        let bands = vec![PhaseBand::pure(BandKind::Day, 10.0, 360.0, Rgb::WHITE)];
        let err = BandTable::new(bands).unwrap_err();
        assert!(matches!(err, CycleError::Coverage { edge: "start", .. }));
    }

    #[test]
    fn rejects_colors_outside_unit_range() {
        let bands = vec![PhaseBand::pure(
            BandKind::Day,
            0.0,
            360.0,
            Rgb::new(1.5, 0.0, 0.0),
        )];
        let err = BandTable::new(bands).unwrap_err();
        assert!(matches!(err, CycleError::ColorOutOfRange { kind: BandKind::Day }));
    }
}

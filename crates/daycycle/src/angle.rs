use std::f32::consts::TAU;

/// Degrees in one full turn of the cycle.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Folds `value` into `[0, period)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `period`, so that
/// case is folded back to zero.
pub fn wrap_into(value: f32, period: f32) -> f32 {
    debug_assert!(period > 0.0, "wrap period must be positive");
    let wrapped = value.rem_euclid(period);
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

pub fn wrap_degrees(value: f32) -> f32 {
    wrap_into(value, FULL_TURN_DEGREES)
}

/// Accumulator that wraps into `[0, period)` after every step.
///
/// Used for the windmill angle, the wave phase and the cloud drift, all of
/// which advance by a fixed amount per tick and repeat forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wrapping {
    value: f32,
    period: f32,
}

impl Wrapping {
    pub fn new(value: f32, period: f32) -> Self {
        assert!(
            period.is_finite() && period > 0.0,
            "wrap period must be finite and positive"
        );
        Self {
            value: wrap_into(value, period),
            period,
        }
    }

    pub fn degrees(value: f32) -> Self {
        Self::new(value, FULL_TURN_DEGREES)
    }

    pub fn radians(value: f32) -> Self {
        Self::new(value, TAU)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Adds `delta` and wraps. Non-finite deltas are ignored.
    pub fn advance(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.value = wrap_into(self.value + delta % self.period, self.period);
    }
}

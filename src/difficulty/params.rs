use crate::model::validation::ValidationError;

/// Hit leniencies at or beyond this value make the press strain undefined.
const MAX_HIT_LENIENCY: f64 = 1.0 / 6.0;

/// The scalars a star rating depends on besides the notes themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyParameters {
    /// Overall difficulty after mods.
    pub od: f64,
    /// Playback rate; note times are divided by it.
    pub clock_rate: f64,
}

impl DifficultyParameters {
    pub const fn new(od: f64, clock_rate: f64) -> Self {
        Self { od, clock_rate }
    }

    /// The effective hit window width in seconds, derived from the overall
    /// difficulty.
    pub fn hit_leniency(&self) -> f64 {
        0.3 * ((64.5 - (self.od * 3.0).ceil()) / 500.0).sqrt()
    }

    /// Returns the hit leniency if both parameters can be used for
    /// calculation.
    pub(crate) fn validate(&self) -> Result<f64, ValidationError> {
        if !self.clock_rate.is_finite() || self.clock_rate <= 0.0 {
            return Err(ValidationError::InvalidClockRate(self.clock_rate));
        }

        let hit_leniency = self.hit_leniency();
        let is_supported = hit_leniency > 0.0 && hit_leniency < MAX_HIT_LENIENCY;

        if is_supported {
            Ok(hit_leniency)
        } else {
            Err(ValidationError::InvalidOverallDifficulty(self.od))
        }
    }
}

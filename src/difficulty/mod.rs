use crate::{
    model::{chart::Chart, note::Note, validation::ValidationError},
    util::mods::Mods,
};

use self::{
    aggregate::{finalize, weighted_power_mean},
    combine::StrainSeries,
    density::note_density,
    preprocess::Preprocessed,
};

pub use self::{attributes::DifficultyAttributes, params::DifficultyParameters, strains::Strains};

mod aggregate;
mod attributes;
mod combine;
mod density;
mod params;
mod preprocess;
mod skills;
mod smooth;
mod strains;

/// Exponent of the power means across columns and across time.
const LAMBDA_N: f64 = 5.0;

/// Overall difficulty values after mods are capped at this value.
const MAX_OD: f64 = 10.0;

/// Calculate the star rating of the given notes.
///
/// Notes may be in any order. `rate` scales the playback speed, i.e. `1.5`
/// for DoubleTime.
///
/// ```
/// use rosu_sr::{calculate_star_rating, Note};
///
/// let notes: Vec<_> = (0..64)
///     .map(|i| Note::tap(i % 4, 125.0 * i as f64))
///     .collect();
///
/// let stars = calculate_star_rating(&notes, 4, 8.0, 1.0).unwrap();
/// assert!(stars > 0.0);
///
/// assert!(calculate_star_rating(&notes, 3, 8.0, 1.0).is_err());
/// ```
pub fn calculate_star_rating(
    notes: &[Note],
    columns: usize,
    od: f64,
    rate: f64,
) -> Result<f64, ValidationError> {
    let params = DifficultyParameters::new(od, rate);
    let values = DifficultyValues::calculate(notes, columns, &params, usize::MAX)?;

    Ok(values.stars(columns))
}

/// Value specified either before or after accounting for mods.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    pub value: f64,
    pub with_mods: bool,
}

/// Difficulty calculator on [`Chart`]s.
///
/// # Example
///
/// ```
/// use rosu_sr::{Chart, Difficulty, Note};
///
/// let chart = Chart::new(
///     vec![
///         Note::tap(0, 0.0),
///         Note::hold(1, 150.0, 600.0),
///         Note::tap(2, 300.0),
///         Note::tap(3, 450.0),
///     ],
///     4,
/// );
///
/// let attrs = Difficulty::new()
///     .mods(64) // DT
///     .od(9.0, false)
///     .calculate(&chart)
///     .unwrap();
///
/// assert_eq!(attrs.clock_rate, 1.5);
/// assert_eq!(attrs.n_hold_notes, 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: u32,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    od: Option<ModsDependent>,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: 0,
            passed_objects: None,
            clock_rate: None,
            od: None,
        }
    }

    /// Specify mods through their bit values.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    pub const fn mods(self, mods: u32) -> Self {
        Self { mods, ..self }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// Objects are counted in order of their start time.
    pub const fn passed_objects(self, passed_objects: u32) -> Self {
        Self {
            passed_objects: Some(passed_objects),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Override a chart's overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn od(self, od: f64, with_mods: bool) -> Self {
        Self {
            od: Some(ModsDependent {
                value: od,
                with_mods,
            }),
            ..self
        }
    }

    pub const fn get_mods(&self) -> u32 {
        self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    /// The overall difficulty and clock rate used for the given [`Chart`].
    pub fn parameters(&self, chart: &Chart) -> DifficultyParameters {
        let od = match self.od {
            Some(ModsDependent {
                value,
                with_mods: true,
            }) => value,
            Some(ModsDependent {
                value,
                with_mods: false,
            }) => self.apply_mods_to_od(value),
            None => self.apply_mods_to_od(chart.od),
        };

        DifficultyParameters::new(od, self.get_clock_rate())
    }

    fn apply_mods_to_od(&self, od: f64) -> f64 {
        (od * self.mods.od_multiplier()).min(MAX_OD)
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, chart: &Chart) -> Result<DifficultyAttributes, ValidationError> {
        let params = self.parameters(chart);
        let take = self.get_passed_objects();
        let values = DifficultyValues::calculate(&chart.notes, chart.columns, &params, take)?;

        let attrs = DifficultyAttributes {
            stars: values.stars(chart.columns),
            n_objects: values.n_objects as u32,
            n_hold_notes: values.n_hold_notes as u32,
            columns: chart.columns as u32,
            od: params.od,
            clock_rate: params.clock_rate,
            hit_leniency: values.hit_leniency,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            stars = attrs.stars,
            n_objects = attrs.n_objects,
            od = attrs.od,
            clock_rate = attrs.clock_rate,
            "Calculated difficulty"
        );

        Ok(attrs)
    }

    /// Perform the difficulty calculation but instead of aggregating the
    /// per-millisecond difficulties, return their section peaks.
    ///
    /// Suitable to plot the difficulty of a chart over time.
    pub fn strains(&self, chart: &Chart) -> Result<Strains, ValidationError> {
        let params = self.parameters(chart);
        let take = self.get_passed_objects();
        let values = DifficultyValues::calculate(&chart.notes, chart.columns, &params, take)?;

        Ok(Strains::new(&values.difficulties))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Intermediate results of a calculation before aggregation.
pub struct DifficultyValues {
    /// Combined difficulty per millisecond.
    pub difficulties: Vec<f64>,
    /// Note density per millisecond.
    pub density: Vec<f64>,
    pub n_objects: usize,
    pub n_hold_notes: usize,
    pub hit_leniency: f64,
}

impl DifficultyValues {
    pub fn calculate(
        notes: &[Note],
        columns: usize,
        params: &DifficultyParameters,
        take: usize,
    ) -> Result<Self, ValidationError> {
        let pre = match Preprocessed::new(notes, columns, params, take) {
            Ok(pre) => pre,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::error!(%err, "Rejected chart");

                return Err(err);
            }
        };

        #[cfg(feature = "tracing")]
        if pre.notes.is_empty() {
            tracing::debug!("Chart without notes");
        }

        let series = StrainSeries::new(&pre);
        let difficulties = series.difficulties();
        let density = note_density(&pre.notes, pre.len);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = pre.len,
            columns,
            hit_leniency = pre.hit_leniency,
            "Processed strains"
        );

        Ok(Self {
            difficulties,
            density,
            n_objects: pre.notes.len(),
            n_hold_notes: pre.n_hold_notes(),
            hit_leniency: pre.hit_leniency,
        })
    }

    /// Aggregate the per-millisecond values into the final star rating.
    pub fn stars(&self, columns: usize) -> f64 {
        let mean = weighted_power_mean(&self.difficulties, &self.density);

        if mean <= 0.0 {
            return 0.0;
        }

        finalize(mean, self.n_objects, self.n_hold_notes, columns)
    }
}

use crate::{
    model::{
        note::Note,
        validation::{validate_notes, ValidationError},
    },
    Difficulty, DifficultyAttributes, Strains,
};

pub use self::{
    analysis::{ChartAnalysis, KpsSummary},
    suspicious::TooSuspicious,
};

mod analysis;
mod suspicious;

/// The maximum amount of columns a [`Chart`] may have.
pub const MAX_COLUMNS: usize = 10;

/// The maximum length in milliseconds, after applying the clock rate, that a
/// chart may span for calculation, i.e. one day.
pub const MAX_DURATION: f64 = 86_400_000.0;

/// All chart data that is relevant for star rating calculation.
///
/// Notes may be in any order, they are sorted during calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    pub notes: Vec<Note>,
    /// Amount of key columns. Columns without notes still count.
    pub columns: usize,
    /// The chart's overall difficulty before mods.
    pub od: f64,
}

impl Chart {
    /// The overall difficulty used if none is specified.
    pub const DEFAULT_OD: f64 = 5.0;

    /// Create a new [`Chart`] with the default overall difficulty.
    pub const fn new(notes: Vec<Note>, columns: usize) -> Self {
        Self {
            notes,
            columns,
            od: Self::DEFAULT_OD,
        }
    }

    /// Specify the overall difficulty.
    pub fn with_od(mut self, od: f64) -> Self {
        self.od = od;

        self
    }

    /// Create a difficulty calculator for this [`Chart`].
    pub const fn difficulty(&self) -> ChartDifficulty<'_> {
        ChartDifficulty {
            chart: self,
            difficulty: Difficulty::new(),
        }
    }

    /// Check whether the column count and all notes are well-formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_notes(&self.notes, self.columns)
    }

    /// Amount of hold notes.
    pub fn n_hold_notes(&self) -> usize {
        self.notes.iter().filter(|note| note.is_hold()).count()
    }

    /// Amount of taps.
    pub fn n_taps(&self) -> usize {
        self.notes.len() - self.n_hold_notes()
    }

    /// Amount of whole milliseconds covered by the notes, i.e. the truncated
    /// latest end time plus one, or `0.0` if there are no notes.
    pub fn duration(&self) -> f64 {
        self.notes
            .iter()
            .map(Note::effective_end_time)
            .reduce(f64::max)
            .map_or(0.0, |end_time| (end_time + 1.0).floor())
    }

    /// Check whether the chart is too suspicious for further calculation.
    ///
    /// Calculation allocates per-millisecond buffers so it is advised to call
    /// this on untrusted charts beforehand.
    pub fn check_suspicion(&self) -> Result<(), TooSuspicious> {
        match TooSuspicious::new(self) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// Notes per second for consecutive windows of `interval` milliseconds.
    ///
    /// A measure-sized interval, i.e. `4.0 * 60_000.0 / bpm`, is commonly used.
    pub fn kps(&self, interval: f64) -> KpsSummary {
        KpsSummary::new(&self.notes, interval)
    }

    /// Notes per second and per-column note counts.
    pub fn analysis(&self, interval: f64) -> ChartAnalysis {
        ChartAnalysis::new(self, interval)
    }
}

/// A [`Difficulty`] bound to a [`Chart`].
///
/// Created through [`Chart::difficulty`].
#[derive(Clone, Debug)]
#[must_use]
pub struct ChartDifficulty<'a> {
    chart: &'a Chart,
    difficulty: Difficulty,
}

impl ChartDifficulty<'_> {
    /// Specify mods through their bit values.
    pub const fn mods(self, mods: u32) -> Self {
        Self {
            difficulty: self.difficulty.mods(mods),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            difficulty: self.difficulty.clock_rate(clock_rate),
            ..self
        }
    }

    /// Override the chart's overall difficulty.
    pub const fn od(self, od: f64, with_mods: bool) -> Self {
        Self {
            difficulty: self.difficulty.od(od, with_mods),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(self, passed_objects: u32) -> Self {
        Self {
            difficulty: self.difficulty.passed_objects(passed_objects),
            ..self
        }
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self) -> Result<DifficultyAttributes, ValidationError> {
        self.difficulty.calculate(self.chart)
    }

    /// Calculate the difficulty's section peaks over time.
    pub fn strains(&self) -> Result<Strains, ValidationError> {
        self.difficulty.strains(self.chart)
    }
}

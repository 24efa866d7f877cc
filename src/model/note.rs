use std::cmp::Ordering;

/// A single note of a [`Chart`].
///
/// Taps have the same start and end time, hold notes end strictly after they
/// start.
///
/// [`Chart`]: crate::model::chart::Chart
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// Zero-based column of the note.
    pub column: usize,
    /// Start time in milliseconds.
    pub start_time: f64,
    /// End time in milliseconds.
    pub end_time: f64,
}

impl Note {
    /// Create a tap note.
    pub const fn tap(column: usize, time: f64) -> Self {
        Self {
            column,
            start_time: time,
            end_time: time,
        }
    }

    /// Create a hold note.
    pub const fn hold(column: usize, start_time: f64, end_time: f64) -> Self {
        Self {
            column,
            start_time,
            end_time,
        }
    }

    /// Whether the note is a hold note.
    pub fn is_hold(&self) -> bool {
        self.end_time > self.start_time
    }

    /// Whether the note is a tap.
    pub fn is_tap(&self) -> bool {
        !self.is_hold()
    }

    /// The latest time at which this note is still relevant.
    pub fn effective_end_time(&self) -> f64 {
        self.start_time.max(self.end_time)
    }

    /// Return the note with all of its times scaled to `clock_rate`.
    pub(crate) fn with_clock_rate(self, clock_rate: f64) -> Self {
        let factor = 1.0 / clock_rate;

        Self {
            column: self.column,
            start_time: self.start_time * factor,
            end_time: self.end_time * factor,
        }
    }

    /// Ordering by start time, column, and end time.
    ///
    /// Only equal notes compare as equal so sorting does not depend on the
    /// input order.
    pub(crate) fn cmp_start(&self, other: &Self) -> Ordering {
        self.start_time
            .total_cmp(&other.start_time)
            .then_with(|| self.column.cmp(&other.column))
            .then_with(|| self.end_time.total_cmp(&other.end_time))
    }

    /// Ordering by end time, start time, and column.
    pub(crate) fn cmp_end(&self, other: &Self) -> Ordering {
        self.end_time
            .total_cmp(&other.end_time)
            .then_with(|| self.start_time.total_cmp(&other.start_time))
            .then_with(|| self.column.cmp(&other.column))
    }
}

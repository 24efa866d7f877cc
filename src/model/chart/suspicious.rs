use std::{error, fmt};

use crate::{model::note::Note, util::hint::unlikely};

use super::{Chart, MAX_DURATION};

/// Resulting error type of [`Chart::check_suspicion`].
///
/// If you feel like a [`Chart`] is incorrectly flagged as suspicious or if
/// a chart should be flagged but isn't, please open an issue so the heuristic
/// can be improved.
#[derive(Debug)]
#[non_exhaustive]
pub enum TooSuspicious {
    /// Notes are too dense time-wise.
    Density,
    /// The chart seems too long.
    Length,
    /// Too many notes.
    ObjectCount,
}

impl TooSuspicious {
    pub(crate) fn new(chart: &Chart) -> Option<Self> {
        #[inline]
        fn too_long(notes: &[Note]) -> bool {
            notes
                .iter()
                .map(Note::effective_end_time)
                .any(|end_time| end_time > MAX_DURATION)
        }

        #[inline]
        const fn too_many_objects(notes: &[Note]) -> bool {
            const THRESHOLD: usize = 500_000;

            notes.len() > THRESHOLD
        }

        #[inline]
        fn too_dense(i: usize, start_times: &[f64]) -> bool {
            // 200 4K notes per 1s = 3000BPM
            const PER_1S: usize = 200;
            // 500 4K notes per 10s = 750BPM
            const PER_10S: usize = 500;

            let curr = start_times[i];

            (start_times.len() > i + PER_1S && start_times[i + PER_1S] - curr < 1000.0)
                || (start_times.len() > i + PER_10S && start_times[i + PER_10S] - curr < 10_000.0)
        }

        if unlikely(too_many_objects(&chart.notes)) {
            return Some(Self::ObjectCount);
        } else if unlikely(too_long(&chart.notes)) {
            return Some(Self::Length);
        }

        let mut start_times: Vec<_> = chart.notes.iter().map(|note| note.start_time).collect();
        start_times.sort_by(f64::total_cmp);

        if (0..start_times.len()).any(|i| unlikely(too_dense(i, &start_times))) {
            return Some(Self::Density);
        }

        None
    }
}

impl error::Error for TooSuspicious {}

impl fmt::Display for TooSuspicious {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the chart seems too suspicious for further calculation (reason={self:?})",
        )
    }
}

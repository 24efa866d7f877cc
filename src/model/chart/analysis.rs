use crate::model::note::Note;

use super::Chart;

/// Notes per second over consecutive time windows.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KpsSummary {
    /// Amount of notes divided by the seconds between the first and last
    /// start time, or `0.0` if all notes start at the same time.
    pub average: f64,
    /// Highest window value.
    pub max: f64,
    /// Notes per second of each window, in time order.
    pub values: Vec<f64>,
}

impl KpsSummary {
    /// Windows of `interval` milliseconds cover `[0, last start time)`.
    pub(crate) fn new(notes: &[Note], interval: f64) -> Self {
        if notes.is_empty() || interval.is_nan() || interval <= 0.0 {
            return Self::default();
        }

        let mut start_times: Vec<_> = notes.iter().map(|note| note.start_time).collect();
        start_times.sort_by(f64::total_cmp);

        let (Some(&first), Some(&last)) = (start_times.first(), start_times.last()) else {
            return Self::default();
        };

        let span = (last - first).abs() / 1000.0;

        let average = if span > 0.0 {
            start_times.len() as f64 / span
        } else {
            0.0
        };

        let seconds = interval / 1000.0;
        let mut values = Vec::with_capacity((last / interval).ceil().max(0.0) as usize);
        let mut window_start = 0.0;

        while window_start < last {
            let window_end = window_start + interval;
            let start_idx = start_times.partition_point(|&time| time < window_start);
            let end_idx = start_times.partition_point(|&time| time < window_end);

            values.push((end_idx - start_idx) as f64 / seconds);
            window_start = window_end;
        }

        let max = values.iter().copied().fold(0.0, f64::max);

        Self {
            average,
            max,
            values,
        }
    }
}

/// Summary of a chart's note distribution.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartAnalysis {
    pub kps: KpsSummary,
    /// Amount of taps per column.
    pub column_counts: Vec<u32>,
    /// Amount of hold notes per column.
    pub hold_note_counts: Vec<u32>,
}

impl ChartAnalysis {
    pub(crate) fn new(chart: &Chart, interval: f64) -> Self {
        let mut column_counts = vec![0; chart.columns];
        let mut hold_note_counts = vec![0; chart.columns];

        for note in chart.notes.iter() {
            let counts = if note.is_hold() {
                &mut hold_note_counts
            } else {
                &mut column_counts
            };

            if let Some(count) = counts.get_mut(note.column) {
                *count += 1;
            }
        }

        Self {
            kps: chart.kps(interval),
            column_counts,
            hold_note_counts,
        }
    }
}

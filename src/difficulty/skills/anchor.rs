use crate::difficulty::{
    preprocess::{time_idx, Preprocessed},
    smooth::smooth_average,
};

/// Reach of a note's key usage before its start and after its end.
const USAGE_REACH: f64 = 500.0;

/// Unevenness between the intervals of simultaneously used columns.
pub struct Anchor {
    /// Smoothed unevenness factor per millisecond, `1.0` for perfectly even
    /// patterns and lower the more uneven they get.
    pub strain: Vec<f64>,
    /// Amount of used columns per millisecond, at least `1`.
    pub active_columns: Vec<u32>,
}

impl Anchor {
    /// `deltas` are the per-column intervals of the jack strain.
    pub fn new(pre: &Preprocessed, deltas: &[Box<[f64]>]) -> Self {
        let len = pre.len;
        let usage = key_usage(pre);

        let mut anchor = vec![1.0; len];
        let mut active_columns = Vec::with_capacity(len);
        let mut active = Vec::with_capacity(usage.len());

        for (s, factor) in anchor.iter_mut().enumerate() {
            active.clear();
            active.extend((0..usage.len()).filter(|&k| usage[k][s]));

            active_columns.push(active.len().max(1) as u32);

            for (&a, &b) in active.iter().zip(active.iter().skip(1)) {
                let delta_a = deltas[a][s];
                let delta_b = deltas[b][s];
                let max_delta = delta_a.max(delta_b);
                let diff = (delta_a - delta_b).abs() + (max_delta - 0.3).max(0.0);

                if diff < 0.02 {
                    *factor *= (0.75 + 0.5 * max_delta).min(1.0);
                } else if diff < 0.07 {
                    *factor *= (0.65 + 5.0 * diff + 0.5 * max_delta).min(1.0);
                }
            }
        }

        Self {
            strain: smooth_average(&anchor),
            active_columns,
        }
    }
}

/// Per column, whether the column is in use at each millisecond.
fn key_usage(pre: &Preprocessed) -> Vec<Vec<bool>> {
    let mut usage = vec![vec![false; pre.len]; pre.columns.len()];
    let last = pre.len.saturating_sub(1) as f64;

    for note in pre.notes.iter() {
        let start = (note.start_time - USAGE_REACH).max(0.0);
        let end = if note.is_tap() {
            note.start_time + USAGE_REACH
        } else {
            note.end_time + USAGE_REACH
        };

        let start = time_idx(start);
        let end = time_idx(end.min(last));

        if start < end {
            usage[note.column][start..end].fill(true);
        }
    }

    usage
}

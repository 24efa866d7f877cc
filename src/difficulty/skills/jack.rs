use crate::difficulty::{
    preprocess::{time_idx, Preprocessed},
    smooth::smooth,
    LAMBDA_N,
};

const LAMBDA_1: f64 = 0.11;

/// Delta assigned to timesteps without a following note in the column.
pub const DEFAULT_DELTA: f64 = 1e9;

/// Same-column repetition strain.
pub struct JackStrain {
    /// Column-weighted strain per millisecond.
    pub strain: Vec<f64>,
    /// Per column, the interval in seconds to the next note at each
    /// millisecond.
    pub deltas: Box<[Box<[f64]>]>,
}

impl JackStrain {
    pub fn new(pre: &Preprocessed) -> Self {
        let len = pre.len;
        let offset = LAMBDA_1 * pre.hit_leniency.powf(0.25);

        let mut deltas = Vec::with_capacity(pre.columns.len());
        let mut smoothed = Vec::with_capacity(pre.columns.len());

        for column in pre.columns.iter() {
            let mut column_deltas = vec![DEFAULT_DELTA; len];
            let mut strains = vec![0.0; len];

            for (prev, curr) in column.iter().zip(column.iter().skip(1)) {
                let time_len = curr.start_time - prev.start_time;
                let delta = 0.001 * time_len;
                let strain = delta.recip() * (delta + offset).recip() * jack_nerf(delta);

                let start = time_idx(prev.start_time);
                let end = start + time_idx(time_len);

                column_deltas[start..end].fill(delta);
                strains[start..end].fill(strain);
            }

            deltas.push(column_deltas.into_boxed_slice());
            smoothed.push(smooth(&strains));
        }

        let mut strain = Vec::with_capacity(len);

        for s in 0..len {
            let mut weighted_sum = 0.0;
            let mut weight_sum = 0.0;

            for (column_deltas, column_strains) in deltas.iter().zip(smoothed.iter()) {
                let weight = column_deltas[s].recip();
                weight_sum += weight;
                weighted_sum += column_strains[s].max(0.0).powf(LAMBDA_N) * weight;
            }

            strain.push((weighted_sum / weight_sum.max(1e-9)).powf(LAMBDA_N.recip()));
        }

        Self {
            strain,
            deltas: deltas.into_boxed_slice(),
        }
    }
}

/// Penalty factor for intervals around 80ms which are more likely to be
/// played as chords than as actual jacks.
pub fn jack_nerf(delta: f64) -> f64 {
    1.0 - 7e-5 * (0.15 + (delta - 0.08).abs()).powi(-4)
}

use crate::{
    difficulty::{
        preprocess::{time_idx, Preprocessed},
        smooth::smooth,
    },
    model::note::Note,
};

const LAMBDA_4: f64 = 0.1;

/// Start time used if no note follows a hold note in its column.
const NO_NEXT_NOTE: f64 = 1e9;

/// Smoothed strain of releasing hold notes.
pub fn release_strain(pre: &Preprocessed) -> Vec<f64> {
    let x = pre.hit_leniency;
    let mut strain = vec![0.0; pre.len];

    let release_factors: Vec<_> = pre
        .tails
        .iter()
        .map(|hold| release_factor(hold, &pre.columns[hold.column], x))
        .collect();

    let tails = pre.tails.iter().zip(release_factors.iter());

    for ((curr, curr_factor), (next, next_factor)) in tails.clone().zip(tails.skip(1)) {
        let delta = 0.001 * (next.end_time - curr.end_time);
        let value = 0.08 * delta.powf(-0.5) * x.recip() * (1.0 + LAMBDA_4 * (curr_factor + next_factor));

        strain[time_idx(curr.end_time)..time_idx(next.end_time)].fill(value);
    }

    smooth(&strain)
}

/// How awkward the release is, based on the hold's length and the gap until
/// the next note in the same column.
fn release_factor(hold: &Note, column: &[Note], x: f64) -> f64 {
    let idx = column.partition_point(|note| note.start_time < hold.start_time);

    let next_start = column
        .get(idx + 1)
        .map_or(NO_NEXT_NOTE, |note| note.start_time);

    let head_gap = 0.001 * (hold.end_time - hold.start_time - 80.0).abs() / x;
    let tail_gap = 0.001 * (next_start - hold.end_time - 80.0).abs() / x;

    2.0 / (2.0 + (-5.0 * (head_gap - 0.75)).exp() + (-5.0 * (tail_gap - 0.75)).exp())
}

use super::LAMBDA_N;

const P_0: f64 = 1.0;

/// Weighted power mean of the per-millisecond difficulties with exponent
/// `λn`, weighted by the note density.
///
/// Returns `0.0` if the weights sum up to zero.
pub fn weighted_power_mean(difficulties: &[f64], density: &[f64]) -> f64 {
    let weight_sum: f64 = density.iter().sum();

    if weight_sum <= 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = difficulties
        .iter()
        .zip(density)
        .map(|(difficulty, weight)| difficulty.powf(LAMBDA_N) * weight)
        .sum();

    (weighted_sum / weight_sum).powf(LAMBDA_N.recip())
}

/// Turn the power mean into the final star rating.
///
/// Hold notes count 1.5 times towards the length scaling.
pub fn finalize(mean: f64, n_notes: usize, n_hold_notes: usize, columns: usize) -> f64 {
    let mut stars = mean.powf(P_0) / 8.0_f64.powf(P_0) * 8.0;

    let total = n_notes as f64 + 0.5 * n_hold_notes as f64;
    stars *= total / (total + 60.0);

    compress_low_end(stars) * (0.96 + 0.01 * columns as f64)
}

/// Ratings of at most 2 are lifted through `sqrt(2 * stars)`.
pub fn compress_low_end(stars: f64) -> f64 {
    if stars <= 2.0 {
        (stars * 2.0).sqrt()
    } else {
        stars
    }
}

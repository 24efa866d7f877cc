/// Half width of the smoothing window in milliseconds.
const WINDOW: usize = 500;

/// Moving sum over `[s - 500, s + 500)` scaled by `0.001`.
///
/// The divisor stays fixed at the full window width, even where the window is
/// cut off by either end of the chart.
pub fn smooth(values: &[f64]) -> Vec<f64> {
    sliding_window(values, |sum, _| 0.001 * sum)
}

/// Moving average over `[s - 500, s + 500)`, divided by the amount of samples
/// actually inside the window.
pub fn smooth_average(values: &[f64]) -> Vec<f64> {
    sliding_window(values, |sum, len| sum / len as f64)
}

fn sliding_window(values: &[f64], emit: impl Fn(f64, usize) -> f64) -> Vec<f64> {
    let len = values.len();
    let mut window_len = len.min(WINDOW);
    let mut window_sum: f64 = values[..window_len].iter().sum();
    let mut smoothed = Vec::with_capacity(len);

    for s in 0..len {
        smoothed.push(emit(window_sum, window_len));

        if s + WINDOW < len {
            window_sum += values[s + WINDOW];
            window_len += 1;
        }

        if s >= WINDOW {
            window_sum -= values[s - WINDOW];
            window_len -= 1;
        }
    }

    smoothed
}

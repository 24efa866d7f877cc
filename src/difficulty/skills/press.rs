use crate::difficulty::{
    preprocess::{time_idx, Preprocessed},
    smooth::smooth,
};

const LAMBDA_2: f64 = 7.0;
const LAMBDA_3: f64 = 24.0;

/// Deltas below this are considered a chord.
const CHORD_THRESHOLD: f64 = 1e-9;

/// Smoothed strain of the overall note rate, increased by held hold notes.
pub fn press_strain(pre: &Preprocessed) -> Vec<f64> {
    let x = pre.hit_leniency;
    let inv_x = x.recip();
    let bodies = hold_bodies(pre);
    let mut strain = vec![0.0; pre.len];

    for (prev, curr) in pre.notes.iter().zip(pre.notes.iter().skip(1)) {
        let time_len = curr.start_time - prev.start_time;
        let delta = 0.001 * time_len;
        let start = time_idx(prev.start_time);

        if delta < CHORD_THRESHOLD {
            strain[start] += 1000.0 * (0.02 * (4.0 / x - LAMBDA_3)).powf(0.25);

            continue;
        }

        let held: f64 = bodies[start..start + time_idx(time_len)].iter().sum();
        let v = 1.0 + LAMBDA_2 * 0.001 * held;

        let spread = if delta < 2.0 * x / 3.0 {
            (delta - x / 2.0).powi(2)
        } else {
            (x / 6.0).powi(2)
        };

        let value = (0.08 * inv_x * (1.0 - LAMBDA_3 * inv_x * spread)).powf(0.25)
            * stream_booster(delta)
            * v
            / delta;

        for s in strain[start..time_idx(curr.start_time)].iter_mut() {
            *s += value;
        }
    }

    smooth(&strain)
}

/// Per millisecond, how many hold notes are held down.
///
/// The first 80ms of a hold count half.
fn hold_bodies(pre: &Preprocessed) -> Vec<f64> {
    let mut bodies = vec![0.0; pre.len];

    for hold in pre.tails.iter() {
        let head_end = time_idx((hold.start_time + 80.0).min(hold.end_time));

        for body in bodies[time_idx(hold.start_time)..head_end].iter_mut() {
            *body += 0.5;
        }

        for body in bodies[head_end..hold.end_time.ceil() as usize].iter_mut() {
            *body += 1.0;
        }
    }

    bodies
}

/// Bonus for intervals that correspond to 160 to 360 BPM streams.
fn stream_booster(delta: f64) -> f64 {
    let bpm = 7.5 / delta;

    if 160.0 < bpm && bpm < 360.0 {
        1.0 + 1.4e-7 * (bpm - 160.0) * (bpm - 360.0).powi(2)
    } else {
        1.0
    }
}

use std::borrow::Cow;

use crate::{
    difficulty::{
        preprocess::{time_idx, Preprocessed},
        smooth::smooth,
    },
    model::note::Note,
};

/// Weights of each column pair slot, indexed by the amount of columns.
///
/// Slot `0` and slot `K` cover the outer columns on their own, slot `k`
/// covers columns `k - 1` and `k`.
static CROSS_MATRIX: [&[f64]; 11] = [
    &[-1.0],
    &[0.075, 0.075],
    &[0.125, 0.05, 0.125],
    &[0.125, 0.125, 0.125, 0.125],
    &[0.175, 0.25, 0.05, 0.25, 0.175],
    &[0.175, 0.25, 0.175, 0.175, 0.25, 0.175],
    &[0.225, 0.35, 0.25, 0.05, 0.25, 0.35, 0.225],
    &[0.225, 0.35, 0.25, 0.225, 0.225, 0.25, 0.35, 0.225],
    &[0.275, 0.45, 0.35, 0.25, 0.05, 0.25, 0.35, 0.45, 0.275],
    &[0.275, 0.45, 0.35, 0.25, 0.275, 0.275, 0.25, 0.35, 0.45, 0.275],
    &[0.325, 0.55, 0.45, 0.35, 0.25, 0.05, 0.25, 0.35, 0.45, 0.55, 0.325],
];

/// The slot weights for a chart with `columns` columns.
///
/// Panics if `columns` is beyond the supported range which is ruled out by
/// validation.
pub fn cross_weights(columns: usize) -> &'static [f64] {
    CROSS_MATRIX[columns]
}

/// Smoothed strain of alternating between adjacent columns.
pub fn cross_strain(pre: &Preprocessed) -> Vec<f64> {
    let columns = pre.columns.len();
    let weights = cross_weights(columns);
    let mut strain = vec![0.0; pre.len];

    for (slot, &weight) in weights.iter().enumerate() {
        let notes = slot_notes(&pre.columns, slot);
        let mut iter = notes.iter();

        let Some(first) = iter.next() else { continue };
        let mut prev_start = first.start_time;

        for note in iter {
            let delta = 0.001 * (note.start_time - prev_start);

            if delta <= 0.0 {
                continue;
            }

            let value = 0.16 * pre.hit_leniency.max(delta).powi(-2);

            for s in strain[time_idx(prev_start)..time_idx(note.start_time)].iter_mut() {
                *s += value * weight;
            }

            prev_start = note.start_time;
        }
    }

    smooth(&strain)
}

/// Notes of the given slot in start time order.
fn slot_notes(columns: &[Box<[Note]>], slot: usize) -> Cow<'_, [Note]> {
    let k = columns.len();

    if slot == 0 {
        Cow::Borrowed(&columns[0][..])
    } else if slot == k {
        Cow::Borrowed(&columns[k - 1][..])
    } else {
        let mut merged: Vec<_> = columns[slot - 1]
            .iter()
            .chain(columns[slot].iter())
            .copied()
            .collect();

        merged.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        Cow::Owned(merged)
    }
}

#[cfg(test)]
mod tests {
    use crate::difficulty::params::DifficultyParameters;

    use super::*;

    fn preprocess(notes: &[Note], columns: usize) -> Preprocessed {
        let params = DifficultyParameters::new(5.0, 1.0);

        Preprocessed::new(notes, columns, &params, usize::MAX).unwrap()
    }

    #[test]
    fn matrix_rows_are_symmetric() {
        for columns in 1..CROSS_MATRIX.len() {
            let row = cross_weights(columns);

            assert_eq!(row.len(), columns + 1);
            assert!(row.iter().eq(row.iter().rev()));
        }
    }

    #[test]
    fn merged_slots() {
        let notes = [
            Note::tap(0, 0.0),
            Note::tap(1, 50.0),
            Note::tap(0, 100.0),
            Note::tap(2, 75.0),
        ];

        let pre = preprocess(&notes, 3);

        let times = |slot| {
            slot_notes(&pre.columns, slot)
                .iter()
                .map(|note| note.start_time)
                .collect::<Vec<_>>()
        };

        assert_eq!(times(0), vec![0.0, 100.0]);
        assert_eq!(times(1), vec![0.0, 50.0, 100.0]);
        assert_eq!(times(2), vec![50.0, 75.0]);
        assert_eq!(times(3), vec![75.0]);
    }

    #[test]
    fn steady_stream() {
        let notes: Vec<_> = (0..40).map(|i| Note::tap(0, 100.0 * i as f64)).collect();

        let strain = cross_strain(&preprocess(&notes, 1));

        // both outer slots see 100ms intervals and the window is fully covered
        let expected = 0.16 * 0.1_f64.powi(-2) * (0.075 + 0.075);
        assert!((strain[2000] - expected).abs() < 1e-9);
        assert!(strain[0] < strain[2000]);
    }

    #[test]
    fn chords_are_skipped() {
        let notes = [Note::tap(0, 0.0), Note::tap(1, 0.0), Note::tap(1, 200.0)];

        let strain = cross_strain(&preprocess(&notes, 2));

        assert_eq!(strain.len(), 201);
        assert!(strain.iter().all(|s| s.is_finite() && *s > 0.0));
    }
}

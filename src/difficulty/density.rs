use crate::model::note::Note;

/// Per millisecond `t`, the amount of notes starting within
/// `[t - 500, t + 500)`.
///
/// `notes` must be sorted by start time.
pub fn note_density(notes: &[Note], len: usize) -> Vec<f64> {
    let mut density = Vec::with_capacity(len);
    let mut start = 0;
    let mut end = 0;

    for t in 0..len {
        let time = t as f64;

        while start < notes.len() && notes[start].start_time < time - 500.0 {
            start += 1;
        }

        while end < notes.len() && notes[end].start_time < time + 500.0 {
            end += 1;
        }

        density.push((end - start) as f64);
    }

    density
}

use crate::model::{
    chart::MAX_DURATION,
    note::Note,
    validation::{validate_notes, ValidationError},
};

use super::params::DifficultyParameters;

/// Notes prepared for the per-millisecond passes.
pub struct Preprocessed {
    /// Rate-adjusted notes sorted by start time and column.
    pub notes: Box<[Note]>,
    /// Notes of each column in start time order. Empty columns are included.
    pub columns: Box<[Box<[Note]>]>,
    /// Hold notes sorted by end time.
    pub tails: Box<[Note]>,
    /// Effective hit window width in seconds.
    pub hit_leniency: f64,
    /// Amount of milliseconds covered by every per-millisecond buffer.
    pub len: usize,
}

impl Preprocessed {
    /// Validate the input and sort the first `take` notes in every order
    /// required further down the line.
    pub fn new(
        notes: &[Note],
        columns: usize,
        params: &DifficultyParameters,
        take: usize,
    ) -> Result<Self, ValidationError> {
        validate_notes(notes, columns)?;
        let hit_leniency = params.validate()?;

        let mut sorted = Vec::with_capacity(notes.len());

        for (idx, note) in notes.iter().enumerate() {
            let note = note.with_clock_rate(params.clock_rate);

            for time in [note.start_time, note.end_time] {
                if !time.is_finite() {
                    return Err(ValidationError::InvalidTime { idx, time });
                }
            }

            sorted.push(note);
        }

        sorted.sort_by(Note::cmp_start);
        sorted.truncate(take);

        let mut by_column = vec![Vec::new(); columns];

        for note in sorted.iter() {
            by_column[note.column].push(*note);
        }

        let mut tails: Vec<_> = sorted.iter().filter(|note| note.is_hold()).copied().collect();
        tails.sort_by(Note::cmp_end);

        let duration = sorted
            .iter()
            .map(Note::effective_end_time)
            .reduce(f64::max)
            .map_or(0.0, |end_time| (end_time + 1.0).floor());

        if duration > MAX_DURATION {
            return Err(ValidationError::TooLong { duration });
        }

        let len = duration as usize;

        Ok(Self {
            notes: sorted.into_boxed_slice(),
            columns: by_column.into_iter().map(Vec::into_boxed_slice).collect(),
            tails: tails.into_boxed_slice(),
            hit_leniency,
            len,
        })
    }

    pub fn n_hold_notes(&self) -> usize {
        self.tails.len()
    }
}

/// Index of the millisecond that contains `time`.
///
/// Times are non-negative after validation so this truncates towards zero.
pub const fn time_idx(time: f64) -> usize {
    time as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DifficultyParameters {
        DifficultyParameters::new(5.0, 1.0)
    }

    #[test]
    fn sorting() {
        let notes = [
            Note::hold(1, 300.0, 900.0),
            Note::tap(2, 0.0),
            Note::hold(0, 100.0, 400.0),
            Note::tap(0, 0.0),
        ];

        let pre = Preprocessed::new(&notes, 3, &params(), usize::MAX).unwrap();

        assert_eq!(pre.notes[..2], [Note::tap(0, 0.0), Note::tap(2, 0.0)]);
        assert_eq!(pre.columns.len(), 3);
        assert_eq!(
            pre.columns[0][..],
            [Note::tap(0, 0.0), Note::hold(0, 100.0, 400.0)]
        );
        assert_eq!(
            pre.tails[..],
            [Note::hold(0, 100.0, 400.0), Note::hold(1, 300.0, 900.0)]
        );
        assert_eq!(pre.n_hold_notes(), 2);
        assert_eq!(pre.len, 901);
    }

    #[test]
    fn empty_columns_are_kept() {
        let pre = Preprocessed::new(&[Note::tap(3, 10.5)], 5, &params(), usize::MAX).unwrap();

        assert_eq!(pre.columns.len(), 5);
        assert!(pre.columns[0].is_empty());
        assert_eq!(pre.columns[3].len(), 1);
        assert_eq!(pre.len, 11);
    }

    #[test]
    fn clock_rate_and_take() {
        let notes = [Note::tap(0, 0.0), Note::tap(0, 400.0), Note::tap(0, 800.0)];
        let params = DifficultyParameters::new(5.0, 2.0);

        let pre = Preprocessed::new(&notes, 1, &params, 2).unwrap();

        assert_eq!(pre.notes[..], [Note::tap(0, 0.0), Note::tap(0, 200.0)]);
        assert_eq!(pre.len, 201);
    }

    #[test]
    fn empty() {
        let pre = Preprocessed::new(&[], 4, &params(), usize::MAX).unwrap();

        assert!(pre.notes.is_empty());
        assert_eq!(pre.len, 0);
    }

    #[test]
    fn rejects() {
        assert!(Preprocessed::new(&[], 0, &params(), usize::MAX).is_err());
        assert!(Preprocessed::new(&[Note::tap(1, 0.0)], 1, &params(), usize::MAX).is_err());
    }

    #[test]
    fn rejects_huge_scaled_times() {
        let tiny_rate = DifficultyParameters::new(5.0, 1e-300);

        assert!(matches!(
            Preprocessed::new(&[Note::tap(0, 0.0), Note::tap(0, 1e10)], 1, &tiny_rate, usize::MAX),
            Err(ValidationError::InvalidTime { idx: 1, time }) if time.is_infinite()
        ));

        assert!(matches!(
            Preprocessed::new(&[Note::tap(0, 1e300)], 1, &params(), usize::MAX),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn duration_bound() {
        let at_bound = [Note::tap(0, MAX_DURATION - 1.0)];
        let pre = Preprocessed::new(&at_bound, 1, &params(), usize::MAX).unwrap();
        assert_eq!(pre.len, MAX_DURATION as usize);

        let slowed = DifficultyParameters::new(5.0, 0.5);
        let past_bound = [Note::tap(0, MAX_DURATION / 2.0)];

        assert_eq!(
            Preprocessed::new(&past_bound, 1, &slowed, usize::MAX).err(),
            Some(ValidationError::TooLong {
                duration: MAX_DURATION + 1.0
            })
        );
    }
}

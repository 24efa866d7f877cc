use crate::model::{
    chart::{MAX_COLUMNS, MAX_DURATION},
    note::Note,
};

/// Reasons for which a calculation rejects its input.
///
/// Inputs are never clamped; either they are valid as is or the calculation
/// is aborted with one of these variants.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("a chart requires at least one column")]
    NoColumns,
    #[error("charts with {columns} columns are not supported, the maximum is {}", MAX_COLUMNS)]
    TooManyColumns { columns: usize },
    #[error("note {idx} is in column {column} but the chart only has {columns} columns")]
    ColumnOutOfRange {
        idx: usize,
        column: usize,
        columns: usize,
    },
    /// Also returned if a time overflows after applying the clock rate.
    #[error("note {idx} has an invalid time of {time}ms")]
    InvalidTime { idx: usize, time: f64 },
    #[error("note {idx} ends at {end_time}ms but starts at {start_time}ms")]
    EndBeforeStart {
        idx: usize,
        start_time: f64,
        end_time: f64,
    },
    #[error("clock rate must be finite and positive, got {0}")]
    InvalidClockRate(f64),
    #[error("overall difficulty {0} is outside of the supported range")]
    InvalidOverallDifficulty(f64),
    #[error("chart spans {duration}ms after applying the clock rate, the maximum is {}ms", MAX_DURATION)]
    TooLong { duration: f64 },
}

/// Check the column count and every note.
///
/// Indices in the resulting error refer to the position in `notes`.
pub(crate) fn validate_notes(notes: &[Note], columns: usize) -> Result<(), ValidationError> {
    if columns == 0 {
        return Err(ValidationError::NoColumns);
    } else if columns > MAX_COLUMNS {
        return Err(ValidationError::TooManyColumns { columns });
    }

    for (idx, note) in notes.iter().enumerate() {
        if note.column >= columns {
            return Err(ValidationError::ColumnOutOfRange {
                idx,
                column: note.column,
                columns,
            });
        }

        for time in [note.start_time, note.end_time] {
            if !time.is_finite() || time < 0.0 {
                return Err(ValidationError::InvalidTime { idx, time });
            }
        }

        if note.end_time < note.start_time {
            return Err(ValidationError::EndBeforeStart {
                idx,
                start_time: note.start_time,
                end_time: note.end_time,
            });
        }
    }

    Ok(())
}

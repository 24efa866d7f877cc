// False positive
#[allow(unused)]
pub use self::{charts::*, mods::*};

/// Bit values for mods
mod mods {
    #![allow(unused)]

    pub const NM: u32 = 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const HT: u32 = 1 << 8;
    pub const NC: u32 = (1 << 9) + DT;
}

/// Deterministic charts shared across tests
mod charts {
    #![allow(unused)]

    use rosu_sr::{Chart, Note};

    /// `count` taps alternating through all columns in steps of `interval`ms.
    pub fn stream(columns: usize, count: usize, interval: f64) -> Vec<Note> {
        (0..count)
            .map(|i| Note::tap(i % columns, interval * i as f64))
            .collect()
    }

    /// `count` taps in a single column in steps of `interval`ms.
    pub fn jack(column: usize, count: usize, interval: f64) -> Vec<Note> {
        (0..count)
            .map(|i| Note::tap(column, interval * i as f64))
            .collect()
    }

    /// A 4K chart with hold notes and two chords.
    pub fn mixed_4k() -> Chart {
        let mut notes: Vec<_> = (0..48)
            .map(|i| {
                let column = (i * 3) % 4;
                let time = 120.0 * i as f64;

                if i % 8 == 0 {
                    Note::hold(column, time, time + 300.0)
                } else {
                    Note::tap(column, time)
                }
            })
            .collect();

        notes.push(Note::tap(1, 960.0));
        notes.push(Note::tap(2, 2880.0));

        Chart::new(notes, 4).with_od(8.0)
    }
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Assert that `actual` is within `margin * expected` of `expected`.
#[track_caller]
pub fn assert_eq_relative(actual: f64, expected: f64, margin: f64) {
    assert!(
        (actual - expected).abs() <= margin * expected.abs(),
        "\nCalculated: {actual} | Expected: {expected}\n \
            => {diff} margin ({allowed} allowed)",
        diff = (actual - expected).abs(),
        allowed = margin * expected.abs(),
    );
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);

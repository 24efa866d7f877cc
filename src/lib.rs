//! Library to calculate the star rating of [osu!mania] charts.
//!
//! ## Description
//!
//! The star rating is derived from per-millisecond strain signals: same-column
//! jacks, alternation between adjacent columns, overall press density including
//! held hold notes, and hold note releases. The signals are smoothed, combined
//! into a single difficulty per millisecond, and aggregated through a power mean
//! weighted by the note density.
//!
//! Chart decoding is not part of this crate; charts are built from [`Note`]s.
//!
//! ## Usage
//!
//! ```
//! use rosu_sr::{Chart, Note};
//!
//! // A short 4K stream with a hold note at the end
//! let mut notes: Vec<_> = (0..32)
//!     .map(|i| Note::tap(i % 4, 150.0 * i as f64))
//!     .collect();
//! notes.push(Note::hold(1, 4800.0, 5400.0));
//!
//! let chart = Chart::new(notes, 4).with_od(8.0);
//!
//! // Untrusted charts should be checked before calculation
//! assert!(chart.check_suspicion().is_ok());
//!
//! // Calculate difficulty attributes
//! let attrs = chart.difficulty()
//!     .mods(64) // DT
//!     .calculate()
//!     .unwrap();
//!
//! println!("Stars: {}", attrs.stars());
//!
//! // Strain peaks over time, e.g. for plotting
//! let strains = rosu_sr::Difficulty::new()
//!     .strains(&chart)
//!     .unwrap();
//!
//! assert_eq!(strains.strains.len(), 14);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | Implement `Serialize` and `Deserialize` for charts, notes, and calculation results. | [`serde`]
//! | `tracing` | Rejected inputs will be logged through `tracing::error` and calculation summaries through `tracing::debug`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!mania]: https://osu.ppy.sh/wiki/en/Game_mode/osu%21mania
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::many_single_char_names
)]

#[doc(inline)]
pub use self::{
    difficulty::{
        calculate_star_rating, Difficulty, DifficultyAttributes, DifficultyParameters, Strains,
    },
    model::{chart::Chart, note::Note, validation::ValidationError},
};

/// Star rating calculation.
pub mod difficulty;

/// Types used in and around this crate.
pub mod model;

mod util;

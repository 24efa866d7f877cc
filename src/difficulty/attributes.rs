/// The result of a difficulty calculation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyAttributes {
    /// The final star rating.
    pub stars: f64,
    /// The amount of notes that were considered.
    pub n_objects: u32,
    /// The amount of hold notes that were considered.
    pub n_hold_notes: u32,
    /// The amount of columns.
    pub columns: u32,
    /// The overall difficulty after mods.
    pub od: f64,
    /// The clock rate after mods.
    pub clock_rate: f64,
    /// Hit window width in seconds that was derived from the overall
    /// difficulty.
    pub hit_leniency: f64,
}

impl DifficultyAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.stars
    }

    /// Return the amount of notes.
    pub const fn n_objects(&self) -> u32 {
        self.n_objects
    }

    /// Amount of taps.
    pub const fn n_taps(&self) -> u32 {
        self.n_objects - self.n_hold_notes
    }
}

/// The combined difficulty of a chart over time.
///
/// Suitable to plot the difficulty of a chart over time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strains {
    /// Peak difficulty of each section.
    pub strains: Vec<f64>,
}

impl Strains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = 400.0;

    pub(crate) fn new(difficulties: &[f64]) -> Self {
        let strains = difficulties
            .chunks(Self::SECTION_LEN as usize)
            .map(|section| section.iter().copied().fold(0.0, f64::max))
            .collect();

        Self { strains }
    }

    /// The highest strain of any section.
    pub fn peak(&self) -> f64 {
        self.strains.iter().copied().fold(0.0, f64::max)
    }
}

use super::{
    preprocess::Preprocessed,
    skills::{cross_strain, press_strain, release_strain, Anchor, JackStrain},
};

const W_0: f64 = 0.4;
const W_1: f64 = 2.7;
const W_2: f64 = 0.27;
const P_1: f64 = 1.5;

/// All smoothed per-millisecond strains of a chart.
pub struct StrainSeries {
    pub jack: Vec<f64>,
    pub cross: Vec<f64>,
    pub press: Vec<f64>,
    pub anchor: Vec<f64>,
    pub release: Vec<f64>,
    pub active_columns: Vec<u32>,
}

impl StrainSeries {
    pub fn new(pre: &Preprocessed) -> Self {
        let JackStrain { strain, deltas } = JackStrain::new(pre);
        let anchor = Anchor::new(pre, &deltas);

        Self {
            jack: strain,
            cross: cross_strain(pre),
            press: press_strain(pre),
            anchor: anchor.strain,
            release: release_strain(pre),
            active_columns: anchor.active_columns,
        }
    }

    /// The combined difficulty of each millisecond.
    pub fn difficulties(&self) -> Vec<f64> {
        (0..self.jack.len())
            .map(|s| {
                let strains = LocalStrains {
                    jack: self.jack[s],
                    cross: self.cross[s],
                    press: self.press[s],
                    anchor: self.anchor[s],
                    release: self.release[s],
                    active_columns: self.active_columns[s],
                };

                strains.difficulty()
            })
            .collect()
    }
}

/// The strains of a single millisecond.
#[derive(Copy, Clone, Debug)]
pub struct LocalStrains {
    pub jack: f64,
    pub cross: f64,
    pub press: f64,
    pub anchor: f64,
    pub release: f64,
    pub active_columns: u32,
}

impl LocalStrains {
    pub fn difficulty(self) -> f64 {
        let jack = self.jack.max(0.0);
        let cross = self.cross.max(0.0);
        let press = self.press.max(0.0);
        let anchor = self.anchor.max(0.0);
        let release = self.release.max(0.0);

        let column_anchor = anchor.powf(3.0 / f64::from(self.active_columns));

        let jack_term = W_0 * (column_anchor * jack).powf(1.5);
        let press_term = (1.0 - W_0) * (anchor.powf(2.0 / 3.0) * (0.8 * press + release)).powf(1.5);
        let strain = (jack_term + press_term).powf(2.0 / 3.0);

        let technical = column_anchor * cross / (cross + strain + 1.0);

        W_1 * strain.sqrt() * technical.powf(P_1) + strain * W_2
    }
}

//! Kerf and clearance compensation.

use tabbox_core::BoxConfig;

/// Signed offsets derived from material thickness, beam kerf and joint
/// clearance.
///
/// Material runs are drawn `correction` wider than nominal and openings
/// `correction` narrower, with `correction = kerf - clearance / 2`. Cutting
/// removes `kerf` from every material run and adds it to every opening, so a
/// mating tab and slot always end up `clearance` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KerfModel {
    thickness: f64,
    kerf: f64,
    clearance: f64,
}

impl KerfModel {
    pub fn new(thickness: f64, kerf: f64, clearance: f64) -> Self {
        Self {
            thickness,
            kerf,
            clearance,
        }
    }

    pub fn from_config(config: &BoxConfig) -> Self {
        Self::new(config.thickness, config.kerf, config.clearance)
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    pub fn clearance(&self) -> f64 {
        self.clearance
    }

    pub fn correction(&self) -> f64 {
        self.kerf - self.clearance / 2.0
    }

    /// Drawn width of a run of material.
    pub fn male_width(&self, nominal: f64) -> f64 {
        nominal + self.correction()
    }

    /// Drawn width of an opening.
    pub fn female_width(&self, nominal: f64) -> f64 {
        nominal - self.correction()
    }

    /// How far each boundary of a jogged run moves outward from its centre.
    pub fn boundary_shift(&self, male: bool) -> f64 {
        let half = self.correction() / 2.0;
        if male {
            half
        } else {
            -half
        }
    }

    /// Physical gap left between a tab and its slot once both are cut.
    pub fn fitted_play(&self, drawn_tab: f64, drawn_slot: f64) -> f64 {
        (drawn_slot + self.kerf) - (drawn_tab - self.kerf)
    }
}

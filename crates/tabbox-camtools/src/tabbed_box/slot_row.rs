//! Divider slot rows.
//!
//! A slot row uses the same tab plan as a horizontal edge but, instead of one
//! boundary, it yields a separate closed opening for every tab run. A divider
//! panel's tabs pass through these openings.

use super::edge::{OffsetPair, TabPlan};
use super::kerf::KerfModel;
use tabbox_core::{BoxConfig, ParameterError, ParameterResult, Point, Polyline};

#[derive(Debug, Clone, PartialEq)]
pub struct SlotRow {
    origin: Point,
    start_offset: OffsetPair,
    polarity: i8,
    thickness: f64,
    kerf: KerfModel,
    plan: TabPlan,
}

impl SlotRow {
    pub fn new(
        origin: Point,
        start_offset: OffsetPair,
        end_offset: OffsetPair,
        phase: u8,
        polarity: i8,
        length: f64,
        config: &BoxConfig,
    ) -> ParameterResult<Self> {
        if start_offset.1 != end_offset.1 {
            return Err(ParameterError::InvalidValue {
                name: "slot_row".to_string(),
                reason: format!(
                    "start offset {:?} and end offset {:?} leave different baselines",
                    start_offset, end_offset
                ),
            });
        }
        if polarity != 1 && polarity != -1 {
            return Err(ParameterError::InvalidValue {
                name: "polarity".to_string(),
                reason: format!("must be +1 or -1, got {}", polarity),
            });
        }

        Ok(Self {
            origin,
            start_offset,
            polarity,
            thickness: config.thickness,
            kerf: KerfModel::from_config(config),
            plan: TabPlan::new(length, phase == 1, config)?,
        })
    }

    /// Vertical position of the row's anchor.
    pub fn y_offset(&self) -> f64 {
        self.origin.y
    }

    pub fn plan(&self) -> &TabPlan {
        &self.plan
    }

    /// Lower and upper y of the band the slots occupy before kerf adjustment.
    pub fn band(&self) -> (f64, f64) {
        let baseline = self.origin.y + f64::from(self.start_offset.1) * self.thickness;
        let jogged = baseline + f64::from(self.polarity) * self.thickness;
        (baseline.min(jogged), baseline.max(jogged))
    }

    /// One closed rectangle per slot, left to right.
    pub fn slots(&self) -> Vec<Polyline> {
        let (low, high) = self.band();
        let mid_y = (low + high) / 2.0;
        let half_h = self.kerf.female_width(high - low) / 2.0;

        self.plan
            .nominal_jogged_runs()
            .into_iter()
            .map(|(start, end)| {
                let mid_x = self.origin.x + (start + end) / 2.0;
                let half_w = self.kerf.female_width(end - start) / 2.0;
                vec![
                    Point::new(mid_x - half_w, mid_y - half_h),
                    Point::new(mid_x + half_w, mid_y - half_h),
                    Point::new(mid_x + half_w, mid_y + half_h),
                    Point::new(mid_x - half_w, mid_y + half_h),
                    Point::new(mid_x - half_w, mid_y - half_h),
                ]
            })
            .collect()
    }
}

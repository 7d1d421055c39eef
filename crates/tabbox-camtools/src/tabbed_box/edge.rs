//! Finger-joint edge tracing
//!
//! An edge is split into an odd number of runs: gap, tab, gap, ..., gap.
//! Gaps lie on the edge baseline, tabs are jogged one material thickness
//! away from it. Whether the jog protrudes or recesses is the edge's phase;
//! the jog direction is its polarity.

use super::kerf::KerfModel;
use serde::{Deserialize, Serialize};
use tabbox_core::{
    push_unique_point, BoxConfig, ParameterError, ParameterResult, Point, Polyline, TabSizing,
};
use tracing::trace;

/// Corner offset in multiples of thickness, e.g. `(d, a)` or `(-b, a)`.
pub type OffsetPair = (i8, i8);

/// Minimum number of runs an edge needs: gap, tab, gap.
pub const MIN_DIVISIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSide {
    Bottom,
    Right,
    Top,
    Left,
}

impl EdgeSide {
    /// Perimeter order, counter-clockwise from the lower-left corner.
    pub const ALL: [EdgeSide; 4] = [
        EdgeSide::Bottom,
        EdgeSide::Right,
        EdgeSide::Top,
        EdgeSide::Left,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EdgeSide::Bottom => "bottom_edge",
            EdgeSide::Right => "right_edge",
            EdgeSide::Top => "top_edge",
            EdgeSide::Left => "left_edge",
        }
    }

    /// Unit vector the edge is walked along.
    pub fn direction(&self) -> Point {
        match self {
            EdgeSide::Bottom => Point::new(1.0, 0.0),
            EdgeSide::Right => Point::new(0.0, 1.0),
            EdgeSide::Top => Point::new(-1.0, 0.0),
            EdgeSide::Left => Point::new(0.0, -1.0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, EdgeSide::Bottom | EdgeSide::Top)
    }

    /// Axis the tab jog moves along.
    pub fn jog_axis(&self) -> Point {
        if self.is_horizontal() {
            Point::new(0.0, 1.0)
        } else {
            Point::new(1.0, 0.0)
        }
    }

    fn perpendicular(&self, offset: OffsetPair) -> i8 {
        if self.is_horizontal() {
            offset.1
        } else {
            offset.0
        }
    }
}

fn offset_vector(offset: OffsetPair, thickness: f64) -> Point {
    Point::new(f64::from(offset.0) * thickness, f64::from(offset.1) * thickness)
}

/// Closed-form split of one edge length into kerf-compensated runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TabPlan {
    length: f64,
    male: bool,
    divisions: usize,
    nominal: Vec<f64>,
    boundaries: Vec<f64>,
}

impl TabPlan {
    pub fn new(length: f64, male: bool, config: &BoxConfig) -> ParameterResult<Self> {
        let tab_width = config.tab_width;
        let minimum = Self::minimum_length(tab_width);

        if !length.is_finite() || length <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "edge length must be positive, got {}",
                length
            )));
        }

        let mut divisions = (length / tab_width).floor() as usize;
        if divisions % 2 == 0 && divisions > 0 {
            divisions -= 1;
        }
        if divisions < MIN_DIVISIONS {
            return Err(ParameterError::EdgeTooShort { length, minimum });
        }

        let tabs = (divisions - 1) / 2;
        let (tab, gap) = match config.tab_sizing {
            TabSizing::Proportional => {
                let w = length / divisions as f64;
                (w, w)
            }
            TabSizing::Fixed => {
                let gaps = (tabs + 1) as f64;
                (tab_width, (length - tabs as f64 * tab_width) / gaps)
            }
        };

        let mut nominal = Vec::with_capacity(divisions - 1);
        let mut position = 0.0;
        for run in 0..divisions - 1 {
            position += if run % 2 == 1 { tab } else { gap };
            nominal.push(position);
        }

        let shift = KerfModel::from_config(config).boundary_shift(male);
        let boundaries: Vec<f64> = nominal
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                // Boundary i opens run i + 1: odd runs are the jogged ones.
                if i % 2 == 0 {
                    b - shift
                } else {
                    b + shift
                }
            })
            .collect();

        let plan = Self {
            length,
            male,
            divisions,
            nominal,
            boundaries,
        };

        if let Some(shortest) = plan
            .runs()
            .into_iter()
            .min_by(|a, b| a.total_cmp(b))
            .filter(|w| *w <= 0.0)
        {
            return Err(ParameterError::InvalidDimensions(format!(
                "kerf correction leaves a run of {:.4} on an edge of {}",
                shortest, length
            )));
        }

        // Corners inset the edge by up to one thickness; the end runs must
        // reach past that or the trace folds back on itself.
        let runs = plan.runs();
        if let (Some(&first), Some(&last)) = (runs.first(), runs.last()) {
            if first.min(last) <= config.thickness {
                return Err(ParameterError::InvalidDimensions(format!(
                    "end run of {:.4} does not clear the {} corner inset on an edge of {}",
                    first.min(last),
                    config.thickness,
                    length
                )));
            }
        }

        Ok(plan)
    }

    /// Shortest edge that still hosts one full gap-tab-gap cycle.
    pub fn minimum_length(tab_width: f64) -> f64 {
        MIN_DIVISIONS as f64 * tab_width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_male(&self) -> bool {
        self.male
    }

    pub fn divisions(&self) -> usize {
        self.divisions
    }

    pub fn tab_count(&self) -> usize {
        (self.divisions - 1) / 2
    }

    /// Kerf-adjusted interior boundaries, measured from the edge anchor.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Drawn run lengths. They always sum to the nominal length.
    pub fn runs(&self) -> Vec<f64> {
        let mut runs = Vec::with_capacity(self.divisions);
        let mut previous = 0.0;
        for &b in &self.boundaries {
            runs.push(b - previous);
            previous = b;
        }
        runs.push(self.length - previous);
        runs
    }

    /// `(start, end)` of every jogged run after kerf adjustment.
    pub fn jogged_runs(&self) -> Vec<(f64, f64)> {
        self.boundaries
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// `(start, end)` of every jogged run before kerf adjustment.
    pub fn nominal_jogged_runs(&self) -> Vec<(f64, f64)> {
        self.nominal
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }
}

/// One side of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    side: EdgeSide,
    origin: Point,
    start_offset: OffsetPair,
    end_offset: OffsetPair,
    phase: u8,
    polarity: i8,
    length: f64,
    thickness: f64,
    plan: TabPlan,
}

impl Edge {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        side: EdgeSide,
        origin: Point,
        start_offset: OffsetPair,
        end_offset: OffsetPair,
        phase: u8,
        polarity: i8,
        length: f64,
        config: &BoxConfig,
    ) -> ParameterResult<Self> {
        if phase > 1 {
            return Err(ParameterError::InvalidValue {
                name: "phase".to_string(),
                reason: format!("must be 0 or 1, got {}", phase),
            });
        }
        if polarity != 1 && polarity != -1 {
            return Err(ParameterError::InvalidValue {
                name: "polarity".to_string(),
                reason: format!("must be +1 or -1, got {}", polarity),
            });
        }
        if side.perpendicular(start_offset) != side.perpendicular(end_offset) {
            return Err(ParameterError::InvalidValue {
                name: side.name().to_string(),
                reason: format!(
                    "start offset {:?} and end offset {:?} leave different baselines",
                    start_offset, end_offset
                ),
            });
        }

        let plan = TabPlan::new(length, phase == 1, config)?;
        trace!(
            "{}: length {} -> {} runs ({} tabs), male={}",
            side.name(),
            length,
            plan.divisions(),
            plan.tab_count(),
            phase == 1
        );

        Ok(Self {
            side,
            origin,
            start_offset,
            end_offset,
            phase,
            polarity,
            length,
            thickness: config.thickness,
            plan,
        })
    }

    pub fn side(&self) -> EdgeSide {
        self.side
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn start_offset(&self) -> OffsetPair {
        self.start_offset
    }

    pub fn end_offset(&self) -> OffsetPair {
        self.end_offset
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    pub fn polarity(&self) -> i8 {
        self.polarity
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_male(&self) -> bool {
        self.phase == 1
    }

    pub fn plan(&self) -> &TabPlan {
        &self.plan
    }

    pub fn start_point(&self) -> Point {
        self.origin + offset_vector(self.start_offset, self.thickness)
    }

    pub fn end_point(&self) -> Point {
        self.origin
            + offset_vector(self.end_offset, self.thickness)
            + self.side.direction().scale(self.length)
    }

    /// Points from the start corner to the end corner, jogging at every run
    /// boundary.
    pub fn trace(&self) -> Polyline {
        let dir = self.side.direction();
        let axis = self.side.jog_axis();
        let baseline = self.origin
            + axis.scale(f64::from(self.side.perpendicular(self.start_offset)) * self.thickness);
        let jog = axis.scale(f64::from(self.polarity) * self.thickness);

        let mut points = Vec::with_capacity(2 * self.plan.divisions() + 2);
        points.push(self.start_point());

        let mut jogged = false;
        for &b in self.plan.boundaries() {
            let on_baseline = baseline + dir.scale(b);
            let here = if jogged { on_baseline + jog } else { on_baseline };
            push_unique_point(&mut points, here);
            jogged = !jogged;
            let there = if jogged { on_baseline + jog } else { on_baseline };
            push_unique_point(&mut points, there);
        }

        push_unique_point(&mut points, self.end_point());
        points
    }
}

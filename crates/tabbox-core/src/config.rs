//! Run configuration for the box generator.
//!
//! One [`BoxConfig`] value describes a whole generation run. It is loaded once,
//! validated, and then only borrowed by the geometry engine.

use crate::error::{BoxResult, ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The six faces of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl PanelId {
    /// All panels in layout order.
    pub const ALL: [PanelId; 6] = [
        PanelId::Front,
        PanelId::Right,
        PanelId::Back,
        PanelId::Left,
        PanelId::Top,
        PanelId::Bottom,
    ];

    /// Label drawn on the panel and used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            PanelId::Front => "front_panel",
            PanelId::Back => "back_panel",
            PanelId::Left => "left_panel",
            PanelId::Right => "right_panel",
            PanelId::Top => "top_panel",
            PanelId::Bottom => "bottom_panel",
        }
    }

    /// Front, right, back and left walls meet a divider.
    pub fn is_side_wall(&self) -> bool {
        matches!(
            self,
            PanelId::Front | PanelId::Right | PanelId::Back | PanelId::Left
        )
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelId {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = key.strip_suffix("_panel").unwrap_or(&key);
        match key {
            "front" => Ok(PanelId::Front),
            "back" => Ok(PanelId::Back),
            "left" => Ok(PanelId::Left),
            "right" => Ok(PanelId::Right),
            "top" => Ok(PanelId::Top),
            "bottom" => Ok(PanelId::Bottom),
            _ => Err(ParameterError::InvalidValue {
                name: "panel".to_string(),
                reason: format!("unknown panel '{}'", s),
            }),
        }
    }
}

/// How an edge's length is split between tabs and gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabSizing {
    /// Tabs and gaps share the length equally.
    #[default]
    Proportional,
    /// Tabs keep the nominal tab width; gaps absorb the remainder.
    Fixed,
}

/// Rectangular window cut into a panel face, relative to the panel centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CutoutSpec {
    pub center_x: f64,
    pub center_y: f64,
    pub dim_x: f64,
    pub dim_y: f64,
    pub corner_radius: f64,
}

/// Optional cutout per panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelCutouts {
    pub front: Option<CutoutSpec>,
    pub back: Option<CutoutSpec>,
    pub left: Option<CutoutSpec>,
    pub right: Option<CutoutSpec>,
    pub top: Option<CutoutSpec>,
    pub bottom: Option<CutoutSpec>,
}

impl PanelCutouts {
    pub fn get(&self, id: PanelId) -> Option<&CutoutSpec> {
        match id {
            PanelId::Front => self.front.as_ref(),
            PanelId::Back => self.back.as_ref(),
            PanelId::Left => self.left.as_ref(),
            PanelId::Right => self.right.as_ref(),
            PanelId::Top => self.top.as_ref(),
            PanelId::Bottom => self.bottom.as_ref(),
        }
    }

    pub fn set(&mut self, id: PanelId, spec: Option<CutoutSpec>) {
        let slot = match id {
            PanelId::Front => &mut self.front,
            PanelId::Back => &mut self.back,
            PanelId::Left => &mut self.left,
            PanelId::Right => &mut self.right,
            PanelId::Top => &mut self.top,
            PanelId::Bottom => &mut self.bottom,
        };
        *slot = spec;
    }
}

/// Placement parameters for bearing seats and the drive motor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechanicalParams {
    /// Distance of the hole centres from the left/right panel edges
    pub bearing_inset: f64,
    /// Distance of the hole centres below the panel top
    pub bearing_drop: f64,
    /// Extra drop applied on the left/right panels
    pub axis_offset: f64,
    /// Drive belt pitch length used to place the motor
    pub drive_belt: f64,
    /// Gear reduction allowance subtracted from the belt length
    pub gear_factor: f64,
}

impl Default for MechanicalParams {
    fn default() -> Self {
        Self {
            bearing_inset: 20.0,
            bearing_drop: 20.0,
            axis_offset: 5.0,
            drive_belt: 20.0,
            gear_factor: 10.0,
        }
    }
}

/// Bearing seat hole pattern, forwarded untouched to drawing sinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BearingPattern {
    pub seat_diameter: f64,
    pub bolt_circle_diameter: f64,
    pub bolt_diameter: f64,
    pub bolt_count: u32,
}

impl Default for BearingPattern {
    fn default() -> Self {
        Self {
            seat_diameter: 22.0,
            bolt_circle_diameter: 32.0,
            bolt_diameter: 3.2,
            bolt_count: 3,
        }
    }
}

/// Stepper motor mount pattern (NEMA 17 by default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorMountPattern {
    pub pilot_diameter: f64,
    /// Centre-to-centre distance of the square bolt pattern
    pub bolt_spacing: f64,
    pub bolt_diameter: f64,
}

impl Default for MotorMountPattern {
    fn default() -> Self {
        Self {
            pilot_diameter: 22.0,
            bolt_spacing: 31.0,
            bolt_diameter: 3.2,
        }
    }
}

/// Outer box dimensions and sheet spacing used by the layout driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxDimensions {
    /// Front/back panel width
    pub width: f64,
    /// Left/right panel width
    pub depth: f64,
    pub height: f64,
    /// Gap between panels on the sheet
    pub spacing: f64,
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self {
            width: 120.0,
            depth: 80.0,
            height: 60.0,
            spacing: 5.0,
        }
    }
}

/// Which panels receive mechanical features.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub bearing_panels: Vec<PanelId>,
    pub motor_panels: Vec<PanelId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub thickness: f64,
    pub kerf: f64,
    pub clearance: f64,
    /// Nominal tab width target
    pub tab_width: f64,
    pub tab_sizing: TabSizing,
    pub has_divider: bool,
    pub divider_distance_from_top: f64,
    pub mechanical: MechanicalParams,
    pub cutouts: PanelCutouts,
    pub bearing: BearingPattern,
    pub motor_mount: MotorMountPattern,
    pub dimensions: BoxDimensions,
    pub layout: LayoutOptions,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            kerf: 0.1,
            clearance: 0.05,
            tab_width: 10.0,
            tab_sizing: TabSizing::Proportional,
            has_divider: false,
            divider_distance_from_top: 10.0,
            mechanical: MechanicalParams::default(),
            cutouts: PanelCutouts::default(),
            bearing: BearingPattern::default(),
            motor_mount: MotorMountPattern::default(),
            dimensions: BoxDimensions::default(),
            layout: LayoutOptions::default(),
        }
    }
}

impl BoxConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> BoxResult<Self> {
        let config: BoxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> BoxResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading box configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> BoxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Correction applied to every tab boundary pair: kerf minus half the
    /// requested clearance.
    pub fn kerf_correction(&self) -> f64 {
        self.kerf - self.clearance / 2.0
    }

    pub fn validate(&self) -> ParameterResult<()> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 || self.thickness > 50.0 {
            return Err(ParameterError::OutOfRange {
                name: "thickness".to_string(),
                value: self.thickness,
                min: 0.0,
                max: 50.0,
            });
        }

        non_negative("kerf", self.kerf)?;
        non_negative("clearance", self.clearance)?;
        non_negative("divider_distance_from_top", self.divider_distance_from_top)?;

        if !self.tab_width.is_finite() || self.tab_width <= 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "tab_width".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if self.kerf_correction().abs() >= self.tab_width {
            return Err(ParameterError::InvalidDimensions(format!(
                "kerf correction {:.3} consumes the whole tab width {:.3}",
                self.kerf_correction(),
                self.tab_width
            )));
        }

        if self.kerf_correction().abs() >= self.thickness {
            return Err(ParameterError::InvalidDimensions(format!(
                "kerf correction {:.3} consumes the material thickness {:.3}",
                self.kerf_correction(),
                self.thickness
            )));
        }

        if self.tab_width <= self.thickness {
            return Err(ParameterError::InvalidDimensions(format!(
                "tab width {:.3} must exceed the material thickness {:.3}",
                self.tab_width, self.thickness
            )));
        }

        let dims = &self.dimensions;
        for (name, value) in [
            ("dimensions.width", dims.width),
            ("dimensions.depth", dims.depth),
            ("dimensions.height", dims.height),
        ] {
            if !value.is_finite() || value <= 2.0 * self.thickness {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{} = {} must exceed twice the thickness",
                    name, value
                )));
            }
        }
        non_negative("dimensions.spacing", dims.spacing)?;

        // The slot band must sit above the bottom edge's jog line.
        if self.has_divider {
            let row = dims.height - self.divider_distance_from_top - 2.0 * self.thickness;
            if row < self.thickness {
                return Err(ParameterError::InvalidDimensions(format!(
                    "divider {} below the top puts its slots at {:.3}, inside the bottom joint",
                    self.divider_distance_from_top, row
                )));
            }
        }

        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("must be a non-negative number, got {}", value),
        });
    }
    Ok(())
}

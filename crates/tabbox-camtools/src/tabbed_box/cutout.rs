//! Secondary features placed on a panel face: a window cutout, a pair of
//! bearing seats and a motor mount.
//!
//! Placement is computed here; the hole patterns themselves are drawn by the
//! sink.

use super::panel::Panel;
use crate::sink::Surface;
use tabbox_core::{PanelId, Point};
use tracing::debug;

/// Where a window cutout lands on a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutPlacement {
    pub center: Point,
    pub half_extents: (f64, f64),
    pub corner_radius: f64,
}

impl Panel<'_> {
    /// Window cutout for this panel, if one is configured.
    pub fn cutout_placement(&self) -> Option<CutoutPlacement> {
        let spec = self.config().cutouts.get(self.id())?;
        let centroid = self.centroid();
        Some(CutoutPlacement {
            center: Point::new(centroid.x + spec.center_x, centroid.y + spec.center_y),
            half_extents: (spec.dim_x / 2.0, spec.dim_y / 2.0),
            corner_radius: spec.corner_radius,
        })
    }

    /// Bearing hole centres, right hole first.
    pub fn bearing_centers(&self) -> [Point; 2] {
        let mech = &self.config().mechanical;
        let origin = self.origin();
        let x_left = origin.x + mech.bearing_inset;
        let x_right = origin.x + self.width() - mech.bearing_inset;
        let mut y = origin.y + self.height() - mech.bearing_drop;
        if matches!(self.id(), PanelId::Left | PanelId::Right) {
            y -= mech.axis_offset;
        }
        [Point::new(x_right, y), Point::new(x_left, y)]
    }

    /// Motor mount centre. Only the left panel takes the axis offset.
    pub fn nema_center(&self) -> Point {
        let mech = &self.config().mechanical;
        let origin = self.origin();
        let x = origin.x + mech.bearing_inset;
        let mut y = origin.y + self.height()
            - mech.bearing_drop
            - (mech.drive_belt - mech.gear_factor) / 2.0;
        if self.id() == PanelId::Left {
            y -= mech.axis_offset;
        }
        Point::new(x, y)
    }

    /// Draw the configured window cutout. Panels without one draw nothing.
    pub fn do_cutout(&self, surface: &mut Surface<'_>) -> Option<CutoutPlacement> {
        let Some(placement) = self.cutout_placement() else {
            debug!("{}: no cutout configured", self.name());
            return None;
        };
        surface.draw_rectangle(
            placement.center,
            placement.half_extents,
            placement.corner_radius,
        );
        Some(placement)
    }

    pub fn do_bearing(&self, surface: &mut Surface<'_>) -> [Point; 2] {
        let centers = self.bearing_centers();
        let pattern = &self.config().bearing;
        for center in centers {
            surface.draw_bearing(center, pattern);
        }
        debug!("{}: bearings at {:?}", self.name(), centers);
        centers
    }

    pub fn do_nema(&self, surface: &mut Surface<'_>) -> Point {
        let center = self.nema_center();
        surface.draw_motor_mount(center, &self.config().motor_mount);
        debug!("{}: motor mount at {:?}", self.name(), center);
        center
    }
}

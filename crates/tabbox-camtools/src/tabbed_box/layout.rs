//! Box layout driver
//!
//! Places the six panels of a box on one sheet, chooses mating corner flags,
//! and renders every panel followed by its cutout, bearing seats and motor
//! mount.

use super::panel::{CornerFlags, Panel};
use crate::sink::{DrawingSink, Surface};
use tabbox_core::{BoxConfig, BoxResult, PanelId, Point};
use tracing::{debug, info};

/// Walls of the long sides carry tabs on their vertical edges.
const FRONT_BACK_FLAGS: CornerFlags = CornerFlags::new(0, 1, 0, 1);
/// Short walls are recessed on every edge.
const LEFT_RIGHT_FLAGS: CornerFlags = CornerFlags::new(0, 0, 0, 0);
/// Lid and floor protrude into every wall.
const TOP_BOTTOM_FLAGS: CornerFlags = CornerFlags::new(1, 1, 1, 1);

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spacing,
        }
    }

    fn place(&mut self, width: f64) -> Point {
        let position = Point::new(self.x, self.y);
        self.x += width + self.spacing;
        position
    }

    fn next_row(&mut self, height: f64) {
        self.y += height + self.spacing;
        self.x = 0.0;
    }
}

/// Where one panel goes on the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub id: PanelId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub flags: CornerFlags,
}

/// Counts of what a render pass drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub panels: usize,
    pub slots: usize,
    pub cutouts: usize,
    pub bearings: usize,
    pub motor_mounts: usize,
}

pub struct BoxLayout<'a> {
    config: &'a BoxConfig,
    panels: Vec<Panel<'a>>,
}

impl<'a> BoxLayout<'a> {
    pub fn new(config: &'a BoxConfig) -> BoxResult<Self> {
        config.validate()?;

        let panels = Self::placements(config)
            .into_iter()
            .map(|p| Panel::new(p.id, p.origin, p.flags, p.width, p.height, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { config, panels })
    }

    /// Sheet positions: the four walls in one row, lid and floor above.
    pub fn placements(config: &BoxConfig) -> Vec<PanelPlacement> {
        let dims = &config.dimensions;
        let mut cursor = LayoutCursor::new(dims.spacing);
        let mut placements = Vec::with_capacity(PanelId::ALL.len());

        let walls = [
            (PanelId::Front, dims.width, dims.height, FRONT_BACK_FLAGS),
            (PanelId::Right, dims.depth, dims.height, LEFT_RIGHT_FLAGS),
            (PanelId::Back, dims.width, dims.height, FRONT_BACK_FLAGS),
            (PanelId::Left, dims.depth, dims.height, LEFT_RIGHT_FLAGS),
        ];
        let lids = [
            (PanelId::Top, dims.width, dims.depth, TOP_BOTTOM_FLAGS),
            (PanelId::Bottom, dims.width, dims.depth, TOP_BOTTOM_FLAGS),
        ];

        for row in [&walls[..], &lids[..]] {
            let mut row_height: f64 = 0.0;
            for &(id, width, height, flags) in row {
                placements.push(PanelPlacement {
                    id,
                    origin: cursor.place(width),
                    width,
                    height,
                    flags,
                });
                row_height = row_height.max(height);
            }
            cursor.next_row(row_height);
        }

        placements
    }

    pub fn config(&self) -> &'a BoxConfig {
        self.config
    }

    pub fn panels(&self) -> &[Panel<'a>] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel<'a>> {
        self.panels.iter().find(|p| p.id() == id)
    }

    /// Draw every panel in layout order. Each panel's outline comes before its
    /// cutout, and the cutout before bearing seats and the motor mount.
    pub fn render(&self, sink: &mut dyn DrawingSink) -> RenderSummary {
        let mut surface = Surface::new(sink);
        let mut summary = RenderSummary::default();
        let options = &self.config.layout;

        for panel in &self.panels {
            panel.register(&mut surface);
            summary.panels += 1;
            summary.slots += panel.slots().len();

            if panel.do_cutout(&mut surface).is_some() {
                summary.cutouts += 1;
            }
            if options.bearing_panels.contains(&panel.id()) {
                summary.bearings += panel.do_bearing(&mut surface).len();
            }
            if options.motor_panels.contains(&panel.id()) {
                panel.do_nema(&mut surface);
                summary.motor_mounts += 1;
            }
            debug!("Rendered {}", panel.name());
        }

        info!(
            "Rendered {} panels ({} divider slots, {} cutouts, {} bearings, {} motor mounts)",
            summary.panels, summary.slots, summary.cutouts, summary.bearings, summary.motor_mounts
        );
        summary
    }
}

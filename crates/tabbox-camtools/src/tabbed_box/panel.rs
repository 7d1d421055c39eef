//! Panel assembly
//!
//! A panel is drawn counter-clockwise from its lower-left corner: the bottom
//! edge to the right, the right edge up, the top edge to the left and the
//! left edge back down to the start.
//!
//! The corner flags `a, b, c, d` say whether the bottom, right, top and left
//! edge carry protruding tabs (1) or recesses (0). Each flag also decides
//! where the neighbouring edges meet at the shared corner, so every corner is
//! described by exactly the two edges that touch it.

use super::edge::{Edge, EdgeSide};
use super::slot_row::SlotRow;
use crate::sink::Surface;
use tabbox_core::{BoxConfig, ParameterError, ParameterResult, PanelId, Point, Polyline};
use tracing::debug;

/// Tab phase of the bottom (`a`), right (`b`), top (`c`) and left (`d`) edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CornerFlags {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
}

impl CornerFlags {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self { a, b, c, d }
    }

    /// Every one of the sixteen flag combinations.
    pub fn all() -> impl Iterator<Item = CornerFlags> {
        (0u8..16).map(|bits| {
            CornerFlags::new(bits & 1, (bits >> 1) & 1, (bits >> 2) & 1, (bits >> 3) & 1)
        })
    }

    fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c), ("d", self.d)] {
            if value > 1 {
                return Err(ParameterError::InvalidValue {
                    name: format!("corner flag {}", name),
                    reason: format!("must be 0 or 1, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// One face of the box.
#[derive(Debug, Clone)]
pub struct Panel<'a> {
    id: PanelId,
    origin: Point,
    flags: CornerFlags,
    width: f64,
    height: f64,
    bottom: Edge,
    right: Edge,
    top: Edge,
    left: Edge,
    slot_row: Option<SlotRow>,
    config: &'a BoxConfig,
}

impl<'a> Panel<'a> {
    /// The top edge starts at `(-b, -c)`, the corner the right edge ends on,
    /// so the upper-right corner closes even when `b != d`.
    pub fn new(
        id: PanelId,
        origin: Point,
        flags: CornerFlags,
        width: f64,
        height: f64,
        config: &'a BoxConfig,
    ) -> ParameterResult<Self> {
        flags.validate()?;

        let (x, y) = (origin.x, origin.y);
        let CornerFlags { a, b, c, d } = flags;
        let (ai, bi, ci, di) = (a as i8, b as i8, c as i8, d as i8);

        let bottom = Edge::new(
            EdgeSide::Bottom,
            Point::new(x, y),
            (di, ai),
            (-bi, ai),
            a,
            1 - 2 * ai,
            width,
            config,
        )?;
        let right = Edge::new(
            EdgeSide::Right,
            Point::new(x + width, y),
            (-bi, ai),
            (-bi, -ci),
            b,
            2 * bi - 1,
            height,
            config,
        )?;
        let top = Edge::new(
            EdgeSide::Top,
            Point::new(x + width, y + height),
            (-bi, -ci),
            (di, -ci),
            c,
            2 * ci - 1,
            width,
            config,
        )?;
        let left = Edge::new(
            EdgeSide::Left,
            Point::new(x, y + height),
            (di, -ci),
            (di, ai),
            d,
            1 - 2 * di,
            height,
            config,
        )?;

        let slot_row = if config.has_divider && id.is_side_wall() {
            let row_y =
                y + height - config.divider_distance_from_top - 2.0 * config.thickness;
            let row = SlotRow::new(
                Point::new(x, row_y),
                (di, ai),
                (-bi, ai),
                a,
                1 - 2 * ai,
                width,
                config,
            )?;
            let (low, high) = row.band();
            let t = config.thickness;
            if low < y + t - 1e-9 || high > y + height - t + 1e-9 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{} divider slots ({:.3}..{:.3}) leave the panel interior ({:.3}..{:.3})",
                    id,
                    low,
                    high,
                    y + t,
                    y + height - t
                )));
            }
            Some(row)
        } else {
            None
        };

        debug!(
            "Built {} at ({:.2}, {:.2}) size {:.2}x{:.2} flags {:?}, divider slots: {}",
            id,
            x,
            y,
            width,
            height,
            flags,
            slot_row.is_some()
        );

        Ok(Self {
            id,
            origin,
            flags,
            width,
            height,
            bottom,
            right,
            top,
            left,
            slot_row,
            config,
        })
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn flags(&self) -> CornerFlags {
        self.flags
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &'a BoxConfig {
        self.config
    }

    pub fn edge(&self, side: EdgeSide) -> &Edge {
        match side {
            EdgeSide::Bottom => &self.bottom,
            EdgeSide::Right => &self.right,
            EdgeSide::Top => &self.top,
            EdgeSide::Left => &self.left,
        }
    }

    /// Edges in drawing order.
    pub fn edges(&self) -> [&Edge; 4] {
        [&self.bottom, &self.right, &self.top, &self.left]
    }

    pub fn slot_row(&self) -> Option<&SlotRow> {
        self.slot_row.as_ref()
    }

    pub fn centroid(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// The closed outline, ending on its first point.
    pub fn outline(&self) -> Polyline {
        let mut path: Polyline = Vec::new();
        for edge in self.edges() {
            for point in edge.trace() {
                tabbox_core::push_unique_point(&mut path, point);
            }
        }

        if let Some(first) = path.first().copied() {
            let len = path.len();
            match path.last_mut() {
                Some(last) if len > 1 && last.approx_eq(&first, 1e-6) => *last = first,
                _ => path.push(first),
            }
        }
        path
    }

    /// Slot openings of the divider row, empty when the panel has none.
    pub fn slots(&self) -> Vec<Polyline> {
        self.slot_row
            .as_ref()
            .map(SlotRow::slots)
            .unwrap_or_default()
    }

    /// Draw the outline, the divider slots and the panel label.
    pub fn register(&self, surface: &mut Surface<'_>) {
        surface.draw_path(&self.outline());
        for slot in self.slots() {
            surface.draw_path(&slot);
        }
        surface.draw_label(self.centroid(), self.name());
    }
}

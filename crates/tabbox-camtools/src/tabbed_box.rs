//! Tabbed Box Maker
//!
//! Finger-jointed box panels with kerf and clearance compensation. Every
//! edge is split into an odd number of runs so both ends of an edge match,
//! and mating edges are given opposite phase so their tabs interlock.

pub mod cutout;
pub mod edge;
pub mod kerf;
pub mod layout;
pub mod panel;
pub mod slot_row;

pub use cutout::CutoutPlacement;
pub use edge::{Edge, EdgeSide, OffsetPair, TabPlan, MIN_DIVISIONS};
pub use kerf::KerfModel;
pub use layout::{BoxLayout, PanelPlacement, RenderSummary};
pub use panel::{CornerFlags, Panel};
pub use slot_row::SlotRow;

use crate::sink::DrawingSink;
use tabbox_core::{BoxConfig, BoxResult};

/// Lay out and draw a whole box into `sink`.
pub fn generate(config: &BoxConfig, sink: &mut dyn DrawingSink) -> BoxResult<RenderSummary> {
    let layout = BoxLayout::new(config)?;
    Ok(layout.render(sink))
}

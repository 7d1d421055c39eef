//! # Tabbox CAM Tools
//!
//! Geometry engine and output sinks for laser-cut, finger-jointed boxes.
//!
//! ## Contents
//!
//! - **Tabbed Box Maker**: kerf model, edge tracing, divider slot rows, panel
//!   assembly, cutout placement and the six-panel layout driver
//! - **Sinks**: the drawing interface, a recorder, an SVG writer and a laser
//!   G-code writer

pub mod gcode;
pub mod sink;
pub mod svg;
pub mod tabbed_box;

// Re-export commonly used items
pub use gcode::{GcodeSettings, GcodeSink};
pub use sink::{DrawCommand, DrawingSink, RecordingSink, Surface};
pub use svg::SvgSink;
pub use tabbed_box::{
    generate, BoxLayout, CornerFlags, CutoutPlacement, Edge, EdgeSide, KerfModel, Panel,
    RenderSummary, SlotRow, TabPlan,
};

//! # Tabbox
//!
//! Generates the cut paths of a laser-cut, finger-jointed box:
//! - Kerf and clearance compensated finger joints on every panel edge
//! - Optional divider slot rows on the four walls
//! - Window cutouts, bearing seats and motor mounts placed on panel faces
//! - SVG, laser G-code or JSON draw-command output
//!
//! ## Architecture
//!
//! 1. **tabbox-core** - Configuration records, geometry primitives, errors
//! 2. **tabbox-camtools** - Edge engine, panel assembly, layout, sinks
//! 3. **tabbox** - Command line front end

pub use tabbox_camtools::{
    generate, BoxLayout, CornerFlags, DrawCommand, DrawingSink, Edge, EdgeSide, GcodeSettings,
    GcodeSink, KerfModel, Panel, RecordingSink, RenderSummary, SlotRow, Surface, SvgSink,
};
pub use tabbox_core::{BoxConfig, BoxError, BoxResult, ParameterError, PanelId, Point};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Output artifact written by a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Millimetre SVG document
    Svg,
    /// Laser G-code program
    Gcode,
    /// Recorded draw commands as JSON
    Json,
}

/// Generate a box and render it into the requested format.
pub fn render(
    config: &BoxConfig,
    format: OutputFormat,
    gcode: &GcodeSettings,
) -> BoxResult<(String, RenderSummary)> {
    match format {
        OutputFormat::Svg => {
            let mut sink = SvgSink::new();
            let summary = generate(config, &mut sink)?;
            Ok((sink.finish(), summary))
        }
        OutputFormat::Gcode => {
            let mut sink = GcodeSink::new(gcode.clone());
            let summary = generate(config, &mut sink)?;
            Ok((sink.finish(), summary))
        }
        OutputFormat::Json => {
            let mut sink = RecordingSink::new();
            let summary = generate(config, &mut sink)?;
            Ok((sink.to_json()?, summary))
        }
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, so stdout stays free for the artifact
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;

    Ok(())
}

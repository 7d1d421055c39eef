//! Whole-box generation through every sink

use tabbox_camtools::{
    generate, BoxLayout, DrawCommand, GcodeSettings, GcodeSink, RecordingSink, SvgSink,
};
use tabbox_core::{BoxConfig, BoxError, CutoutSpec, PanelId, ParameterError};

fn config() -> BoxConfig {
    let mut config = BoxConfig {
        has_divider: true,
        ..BoxConfig::default()
    };
    config.cutouts.set(
        PanelId::Top,
        Some(CutoutSpec {
            dim_x: 40.0,
            dim_y: 20.0,
            corner_radius: 3.0,
            ..CutoutSpec::default()
        }),
    );
    config.layout.bearing_panels = vec![PanelId::Left, PanelId::Right];
    config.layout.motor_panels = vec![PanelId::Left];
    config
}

#[test]
fn test_recorded_box_is_deterministic() {
    let config = config();
    let mut first = RecordingSink::new();
    let mut second = RecordingSink::new();
    generate(&config, &mut first).unwrap();
    generate(&config, &mut second).unwrap();
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_recorded_box_contents() {
    let config = config();
    let mut sink = RecordingSink::new();
    let summary = generate(&config, &mut sink).unwrap();

    assert_eq!(summary.panels, 6);
    assert_eq!(summary.cutouts, 1);
    assert_eq!(summary.bearings, 4);
    assert_eq!(summary.motor_mounts, 1);
    assert!(summary.slots > 0);

    let labels: Vec<&str> = sink
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        [
            "front_panel",
            "right_panel",
            "back_panel",
            "left_panel",
            "top_panel",
            "bottom_panel"
        ]
    );

    let closed_paths = sink
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Polyline { closed: true, .. }))
        .count();
    assert_eq!(closed_paths, summary.panels + summary.slots);
}

#[test]
fn test_svg_document() {
    let mut sink = SvgSink::new();
    generate(&config(), &mut sink).unwrap();
    let svg = sink.finish();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("viewBox="));
    assert_eq!(svg.matches("<text").count(), 6);
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(!svg.contains("NaN"));
}

#[test]
fn test_gcode_program() {
    let mut sink = GcodeSink::new(GcodeSettings::default());
    generate(&config(), &mut sink).unwrap();
    let gcode = sink.finish();

    assert!(gcode.contains("G21"));
    assert!(gcode.contains("front_panel outline"));
    assert!(gcode.contains("top_panel cutout"));
    assert!(gcode.contains("left_panel motor pilot"));
    assert!(!gcode.contains("NaN"));

    // All cuts land in positive machine space past the work offset.
    for line in gcode.lines().filter(|l| l.starts_with("G1 X")) {
        let y = line
            .split_whitespace()
            .find_map(|word| word.strip_prefix('Y'))
            .and_then(|v| v.parse::<f64>().ok())
            .expect("G1 line carries Y");
        assert!(y >= 10.0 - 1e-6, "{}", line);
    }
}

#[test]
fn test_short_edge_rejected_before_drawing() {
    let mut config = BoxConfig::default();
    config.dimensions.height = 25.0;
    let mut sink = RecordingSink::new();
    let err = generate(&config, &mut sink).unwrap_err();
    assert!(matches!(
        err,
        BoxError::Parameter(ParameterError::EdgeTooShort { .. })
    ));
    assert!(sink.commands().is_empty());
}

#[test]
fn test_thick_material_rejected_before_drawing() {
    let config = BoxConfig {
        thickness: 12.0,
        ..BoxConfig::default()
    };
    let mut sink = RecordingSink::new();
    let err = generate(&config, &mut sink).unwrap_err();
    assert!(matches!(
        err,
        BoxError::Parameter(ParameterError::InvalidDimensions(_))
    ));
    assert!(sink.commands().is_empty());
}

#[test]
fn test_divider_below_walls_rejected_before_drawing() {
    let config = BoxConfig {
        has_divider: true,
        divider_distance_from_top: 58.0,
        ..BoxConfig::default()
    };
    let mut sink = RecordingSink::new();
    assert!(generate(&config, &mut sink).is_err());
    assert!(sink.commands().is_empty());
}

#[test]
fn test_edges_never_fold_back() {
    let config = config();
    let layout = BoxLayout::new(&config).unwrap();
    for panel in layout.panels() {
        for edge in panel.edges() {
            let dir = edge.side().direction();
            let along: Vec<f64> = edge
                .trace()
                .iter()
                .map(|p| p.x * dir.x + p.y * dir.y)
                .collect();
            assert!(
                along.windows(2).all(|w| w[1] >= w[0] - 1e-9),
                "{} {} walks backwards: {:?}",
                panel.name(),
                edge.side().name(),
                along
            );
        }
    }
}

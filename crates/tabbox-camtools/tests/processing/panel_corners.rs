//! Corner consistency of panels built from every flag combination

use tabbox_camtools::tabbed_box::{CornerFlags, EdgeSide, Panel};
use tabbox_core::{BoxConfig, PanelId, Point};

fn config() -> BoxConfig {
    BoxConfig {
        thickness: 3.0,
        kerf: 0.1,
        clearance: 0.05,
        tab_width: 10.0,
        ..BoxConfig::default()
    }
}

#[test]
fn test_adjacent_edges_meet_for_all_flags() {
    let config = config();
    for flags in CornerFlags::all() {
        let panel = Panel::new(
            PanelId::Front,
            Point::new(7.0, 11.0),
            flags,
            100.0,
            60.0,
            &config,
        )
        .expect("panel builds");

        let edges = panel.edges();
        for i in 0..4 {
            let current = edges[i];
            let next = edges[(i + 1) % 4];
            assert!(
                current.end_point().approx_eq(&next.start_point(), 1e-9),
                "{:?}: {} ends at {:?} but {} starts at {:?}",
                flags,
                current.side().name(),
                current.end_point(),
                next.side().name(),
                next.start_point()
            );
        }
    }
}

#[test]
fn test_traces_begin_and_end_at_corners() {
    let config = config();
    for flags in CornerFlags::all() {
        let panel =
            Panel::new(PanelId::Top, Point::default(), flags, 100.0, 60.0, &config).unwrap();
        for edge in panel.edges() {
            let trace = edge.trace();
            assert_eq!(trace.first().copied(), Some(edge.start_point()));
            assert!(trace
                .last()
                .is_some_and(|p| p.approx_eq(&edge.end_point(), 1e-9)));
        }
    }
}

#[test]
fn test_outline_closes_for_all_flags() {
    let config = config();
    for flags in CornerFlags::all() {
        let panel =
            Panel::new(PanelId::Back, Point::default(), flags, 100.0, 60.0, &config).unwrap();
        let outline = panel.outline();
        assert!(outline.len() > 8);
        assert_eq!(outline.first(), outline.last(), "{:?} outline is open", flags);
    }
}

#[test]
fn test_outline_stays_within_nominal_rectangle() {
    let config = config();
    let t = config.thickness;
    for flags in CornerFlags::all() {
        let panel =
            Panel::new(PanelId::Left, Point::default(), flags, 100.0, 60.0, &config).unwrap();
        for p in panel.outline() {
            assert!(p.x >= -1e-9 && p.x <= 100.0 + 1e-9, "{:?}: x {} escapes", flags, p.x);
            assert!(p.y >= -1e-9 && p.y <= 60.0 + 1e-9, "{:?}: y {} escapes", flags, p.y);
        }
        // Every edge reaches one thickness in from its side at the jogs.
        let bottom = panel.edge(EdgeSide::Bottom).trace();
        assert!(bottom.iter().any(|p| (p.y - t).abs() < 1e-9));
        assert!(bottom.iter().any(|p| p.y.abs() < 1e-9));
    }
}

#[test]
fn test_wall_scenario_offsets() {
    let config = config();
    let panel = Panel::new(
        PanelId::Front,
        Point::default(),
        CornerFlags::new(0, 1, 0, 1),
        100.0,
        60.0,
        &config,
    )
    .unwrap();

    let bottom = panel.edge(EdgeSide::Bottom);
    let right = panel.edge(EdgeSide::Right);
    let left = panel.edge(EdgeSide::Left);

    assert_eq!(bottom.start_offset(), (1, 0));
    assert_eq!(bottom.end_offset(), (-1, 0));
    assert_eq!(bottom.start_point(), Point::new(3.0, 0.0));
    assert_eq!(bottom.end_point(), Point::new(97.0, 0.0));

    // Tabbed side edges start and end on the inner lines the bottom leaves.
    assert_eq!(right.start_offset(), bottom.end_offset());
    assert_eq!(left.end_offset(), bottom.start_offset());
    assert!(right.is_male());
    assert!(left.is_male());
    assert!(!bottom.is_male());
}

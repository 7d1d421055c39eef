//! Divider slots, cutouts, bearing seats and motor mounts on single panels

use tabbox_camtools::sink::{DrawCommand, RecordingSink, Surface};
use tabbox_camtools::tabbed_box::{CornerFlags, Panel};
use tabbox_core::{BoxConfig, CutoutSpec, PanelId, Point};

fn config() -> BoxConfig {
    let mut config = BoxConfig {
        thickness: 3.0,
        kerf: 0.1,
        clearance: 0.05,
        has_divider: true,
        divider_distance_from_top: 10.0,
        ..BoxConfig::default()
    };
    config.cutouts.set(
        PanelId::Front,
        Some(CutoutSpec {
            center_x: 5.0,
            center_y: -4.0,
            dim_x: 30.0,
            dim_y: 12.0,
            corner_radius: 2.0,
        }),
    );
    config
}

fn wall<'a>(id: PanelId, config: &'a BoxConfig) -> Panel<'a> {
    Panel::new(
        id,
        Point::default(),
        CornerFlags::new(0, 1, 0, 1),
        100.0,
        60.0,
        config,
    )
    .expect("wall builds")
}

fn record(panel: &Panel<'_>, draw: impl Fn(&Panel<'_>, &mut Surface<'_>)) -> String {
    let mut sink = RecordingSink::new();
    {
        let mut surface = Surface::new(&mut sink);
        draw(panel, &mut surface);
    }
    sink.to_json().unwrap()
}

#[test]
fn test_divider_slot_row_position() {
    let config = config();
    let panel = wall(PanelId::Front, &config);
    let row = panel.slot_row().expect("front wall has a slot row");

    assert!((row.y_offset() - (60.0 - 10.0 - 6.0)).abs() < 1e-9);
    let (low, high) = row.band();
    assert!((low - 44.0).abs() < 1e-9);
    assert!((high - 47.0).abs() < 1e-9);

    let slots = panel.slots();
    assert_eq!(slots.len(), row.plan().tab_count());
    for slot in &slots {
        assert_eq!(slot.first(), slot.last());
        for p in slot {
            assert!(p.y > low && p.y < high);
        }
    }
}

#[test]
fn test_lids_never_get_slots() {
    let config = config();
    let lid = Panel::new(
        PanelId::Top,
        Point::default(),
        CornerFlags::new(1, 1, 1, 1),
        100.0,
        80.0,
        &config,
    )
    .unwrap();
    assert!(lid.slot_row().is_none());
    assert!(lid.slots().is_empty());
}

#[test]
fn test_cutout_is_idempotent() {
    let config = config();
    let panel = wall(PanelId::Front, &config);
    let first = record(&panel, |p, s| {
        p.do_cutout(s);
    });
    let second = record(&panel, |p, s| {
        p.do_cutout(s);
    });
    assert_eq!(first, second);
    assert!(first.contains("rectangle"));
}

#[test]
fn test_bearing_and_nema_are_idempotent() {
    let config = config();
    let panel = wall(PanelId::Left, &config);
    let bearings = record(&panel, |p, s| {
        p.do_bearing(s);
    });
    assert_eq!(
        bearings,
        record(&panel, |p, s| {
            p.do_bearing(s);
        })
    );
    let motor = record(&panel, |p, s| {
        p.do_nema(s);
    });
    assert_eq!(
        motor,
        record(&panel, |p, s| {
            p.do_nema(s);
        })
    );
}

#[test]
fn test_cutout_lands_at_offset_centroid_in_sink_frame() {
    let config = config();
    let panel = wall(PanelId::Front, &config);
    let mut sink = RecordingSink::new();
    let placement = {
        let mut surface = Surface::new(&mut sink);
        panel.do_cutout(&mut surface).expect("front has a cutout")
    };

    assert_eq!(placement.center, Point::new(55.0, 26.0));
    assert_eq!(
        sink.commands(),
        &[DrawCommand::Rectangle {
            center: Point::new(55.0, -26.0),
            half_extents: (15.0, 6.0),
            corner_radius: 2.0,
        }]
    );
}

#[test]
fn test_panel_without_cutout_draws_nothing() {
    let config = config();
    let panel = wall(PanelId::Back, &config);
    let mut sink = RecordingSink::new();
    {
        let mut surface = Surface::new(&mut sink);
        assert!(panel.do_cutout(&mut surface).is_none());
    }
    assert!(sink.commands().is_empty());
}

#[test]
fn test_axis_offset_asymmetry() {
    let config = config();
    let mech = config.mechanical;
    let front = wall(PanelId::Front, &config);
    let left = wall(PanelId::Left, &config);
    let right = wall(PanelId::Right, &config);

    let front_y = front.bearing_centers()[0].y;
    assert!((front_y - left.bearing_centers()[0].y - mech.axis_offset).abs() < 1e-9);
    assert!((front_y - right.bearing_centers()[0].y - mech.axis_offset).abs() < 1e-9);

    assert!((front.nema_center().y - left.nema_center().y - mech.axis_offset).abs() < 1e-9);
    assert_eq!(front.nema_center(), right.nema_center());
}

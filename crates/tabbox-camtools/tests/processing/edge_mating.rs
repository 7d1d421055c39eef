//! Mating male and female edges

use tabbox_camtools::tabbed_box::{Edge, EdgeSide, KerfModel, TabPlan};
use tabbox_core::{BoxConfig, Point, TabSizing};

fn config(sizing: TabSizing) -> BoxConfig {
    BoxConfig {
        thickness: 3.0,
        kerf: 0.1,
        clearance: 0.05,
        tab_width: 10.0,
        tab_sizing: sizing,
        ..BoxConfig::default()
    }
}

#[test]
fn test_jogged_runs_share_centres() {
    for sizing in [TabSizing::Proportional, TabSizing::Fixed] {
        let config = config(sizing);
        let male = TabPlan::new(100.0, true, &config).unwrap();
        let female = TabPlan::new(100.0, false, &config).unwrap();

        assert_eq!(male.divisions(), female.divisions());
        for ((ms, me), (fs, fe)) in male.jogged_runs().into_iter().zip(female.jogged_runs()) {
            assert!(((ms + me) / 2.0 - (fs + fe) / 2.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_fitted_play_equals_clearance() {
    let config = config(TabSizing::Proportional);
    let kerf = KerfModel::from_config(&config);
    let male = TabPlan::new(100.0, true, &config).unwrap();
    let female = TabPlan::new(100.0, false, &config).unwrap();

    for ((ms, me), (fs, fe)) in male.jogged_runs().into_iter().zip(female.jogged_runs()) {
        let tab = me - ms;
        let slot = fe - fs;
        assert!((tab - slot - 2.0 * kerf.correction()).abs() < 1e-9);
        assert!((kerf.fitted_play(tab, slot) - config.clearance).abs() < 1e-9);
    }
}

#[test]
fn test_phase_only_changes_jogged_widths() {
    let config = config(TabSizing::Proportional);
    let male = TabPlan::new(100.0, true, &config).unwrap();
    let female = TabPlan::new(100.0, false, &config).unwrap();
    assert_eq!(male.nominal_jogged_runs(), female.nominal_jogged_runs());
    assert_ne!(male.boundaries(), female.boundaries());
}

/// x positions of the vertical jogs in a bottom edge trace, with the y the
/// jog ends on.
fn jogs(edge: &Edge) -> Vec<(f64, f64)> {
    edge.trace()
        .windows(2)
        .filter(|w| w[0].x == w[1].x && w[0].y != w[1].y)
        .map(|w| (w[1].x, w[1].y))
        .collect()
}

#[test]
fn test_traced_male_and_female_edges_interlock() {
    let config = config(TabSizing::Proportional);
    let t = config.thickness;
    let half_correction = config.kerf_correction() / 2.0;

    // Male: baseline one thickness in, tabs jog down to the outer line.
    let male = Edge::new(
        EdgeSide::Bottom,
        Point::default(),
        (0, 1),
        (0, 1),
        1,
        -1,
        100.0,
        &config,
    )
    .unwrap();
    // Female: baseline on the outer line, recesses jog up.
    let female = Edge::new(
        EdgeSide::Bottom,
        Point::default(),
        (0, 0),
        (0, 0),
        0,
        1,
        100.0,
        &config,
    )
    .unwrap();

    let male_jogs = jogs(&male);
    let female_jogs = jogs(&female);
    assert_eq!(male_jogs.len(), 2 * male.plan().tab_count());
    assert_eq!(male_jogs.len(), female_jogs.len());

    for (i, ((mx, my), (fx, fy))) in male_jogs.iter().zip(&female_jogs).enumerate() {
        // Each jog sits on the same nominal boundary, the male one pushed
        // outward and the female one pulled inward by half the correction.
        let outward = if i % 2 == 0 { -1.0 } else { 1.0 };
        assert!((mx - fx - outward * 2.0 * half_correction).abs() < 1e-9);

        // Where the male edge steps out, the female edge steps in.
        let male_out = if i % 2 == 0 { 0.0 } else { t };
        let female_in = if i % 2 == 0 { t } else { 0.0 };
        assert!((my - male_out).abs() < 1e-9, "male jog {} ends at y {}", i, my);
        assert!((fy - female_in).abs() < 1e-9, "female jog {} ends at y {}", i, fy);
    }
}

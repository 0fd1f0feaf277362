use super::*;

#[test]
fn zoom_in_twenty_times_stops_at_max() {
    let mut z = ZoomLevel::new(&ZoomConfig::default());
    for _ in 0..20 {
        z.zoom_in();
        assert!(z.value() <= 1.4);
    }
    assert!(z.at_max());
    assert_eq!(z.percent(), 140);
}

#[test]
fn zoom_out_twenty_times_stops_at_min() {
    let mut z = ZoomLevel::new(&ZoomConfig::default());
    for _ in 0..20 {
        z.zoom_out();
        assert!(z.value() >= 0.6);
    }
    assert!(z.at_min());
    assert_eq!(z.percent(), 60);
}

#[test]
fn step_by_reports_changes() {
    let mut z = ZoomLevel::new(&ZoomConfig::default());
    assert!(z.step_by(2));
    assert_eq!(z.percent(), 120);
    assert!(z.step_by(10));
    assert!(!z.step_by(1));
    assert_eq!(z.percent(), 140);
}

#[test]
fn reset_returns_to_initial() {
    let mut z = ZoomLevel::new(&ZoomConfig::default());
    z.step_by(-3);
    z.reset();
    assert_eq!(z.value(), 1.0);
    assert!(!z.at_min());
    assert!(!z.at_max());
}

#[test]
fn bounds_off_the_step_grid_still_clamp() {
    let cfg = ZoomConfig {
        min: 0.65,
        max: 1.25,
        step: 0.1,
        initial: 1.0,
    };
    let mut z = ZoomLevel::new(&cfg);
    for _ in 0..10 {
        z.zoom_out();
    }
    assert_eq!(z.value(), 0.65);
    for _ in 0..20 {
        z.zoom_in();
    }
    assert_eq!(z.value(), 1.25);
}

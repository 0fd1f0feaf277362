use super::*;
use crate::animation::clock::ManualClock;
use crate::asset::manifest::{AssetManifest, InputDef, StateMachineDef};
use crate::engine::input::InputKind;
use crate::engine::runtime::PlaybackRuntime;
use crate::engine::simulated::SimulatedRuntime;

fn runtime(release: bool) -> SimulatedRuntime {
    let manifest = AssetManifest {
        name: "drop.riv".to_owned(),
        animations: vec![],
        state_machines: vec![StateMachineDef {
            name: "Main".to_owned(),
            inputs: vec![InputDef {
                name: "MouseRelease".to_owned(),
                kind: InputKind::Boolean,
                default: Some(InputValue::Bool(release)),
            }],
        }],
    };
    let mut rt = SimulatedRuntime::new(manifest);
    rt.play(Some("Main")).unwrap();
    rt
}

fn controller(clock: &ManualClock) -> GestureInputController<ManualClock> {
    let mut c = GestureInputController::new(ControllerConfig::default(), clock.clone()).unwrap();
    c.retarget(Some("Main".to_owned()));
    c
}

fn drop_at(c: &mut GestureInputController<ManualClock>, rt: &mut SimulatedRuntime, y: f64) {
    c.begin_drag(Point::new(0.0, 0.0), PointerSource::primary_mouse());
    c.update_drag(Point::new(0.0, y), PointerSource::primary_mouse());
    c.end_drag(rt).unwrap();
}

fn release_value(rt: &SimulatedRuntime) -> bool {
    rt.input_value("Main", "MouseRelease")
        .unwrap()
        .as_bool()
        .unwrap()
}

#[test]
fn long_drop_releases_and_springs_back() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);

    c.begin_drag(Point::new(0.0, 0.0), PointerSource::primary_mouse());
    c.update_drag(Point::new(0.0, 150.0), PointerSource::primary_mouse());
    let outcome = c.end_drag(&mut rt).unwrap();

    assert_eq!(outcome.drop_y, 150.0);
    assert_eq!(outcome.written, Some(true));
    assert!(release_value(&rt));
    assert_eq!(c.mirror(), Some(true));
    assert_eq!(c.last_drop(), Vec2::new(0.0, 150.0));
    assert!(c.is_animating());

    while c.is_animating() {
        clock.advance(16.0);
        c.tick();
    }
    assert_eq!(c.offset(), Vec2::ZERO);
    assert_eq!(*c.phase(), Phase::Idle);
    assert_eq!(c.last_drop().y, 150.0);
}

#[test]
fn drop_on_released_input_always_reverses() {
    let clock = ManualClock::default();
    let mut rt = runtime(true);
    let mut c = controller(&clock);
    drop_at(&mut c, &mut rt, 150.0);
    assert!(!release_value(&rt));
    assert_eq!(c.mirror(), Some(false));
}

#[test]
fn short_drop_leaves_input_untouched() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);
    drop_at(&mut c, &mut rt, 99.0);
    assert!(!release_value(&rt));
    assert!(rt.writes().is_empty());
    assert_eq!(c.mirror(), None);
}

#[test]
fn engine_not_ready_skips_write_but_still_springs_back() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);
    c.retarget(Some("NotLoadedYet".to_owned()));

    c.begin_drag(Point::new(0.0, 0.0), PointerSource::primary_mouse());
    c.update_drag(Point::new(0.0, 180.0), PointerSource::primary_mouse());
    let outcome = c.end_drag(&mut rt).unwrap();
    assert_eq!(outcome.written, None);
    assert!(rt.writes().is_empty());
    assert_eq!(c.mirror(), None);
    assert!(c.is_animating());

    clock.advance(400.0);
    assert!(!c.tick());
    assert_eq!(c.offset(), Vec2::ZERO);
}

#[test]
fn unreadable_engine_falls_back_to_mirror() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);
    c.retarget(None);
    c.sync_mirror(Some(true));
    // No target: decision uses the mirror (true), so the rule asks for false, but the write
    // has nowhere to go.
    c.begin_drag(Point::new(0.0, 0.0), PointerSource::primary_mouse());
    let outcome = c.end_drag(&mut rt).unwrap();
    assert_eq!(outcome.written, None);
    assert_eq!(c.mirror(), Some(true));
    assert!(rt.writes().is_empty());
}

#[test]
fn cancel_behaves_like_release() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);
    c.begin_drag(Point::new(0.0, 10.0), PointerSource::single_touch(7));
    c.update_drag(Point::new(0.0, 130.0), PointerSource::single_touch(7));
    let outcome = c.cancel_drag(&mut rt).unwrap();
    assert_eq!(outcome.written, Some(true));
    assert_eq!(c.last_drop().y, 120.0);
}

#[test]
fn end_drag_without_drag_is_a_no_op() {
    let clock = ManualClock::default();
    let mut rt = runtime(true);
    let mut c = controller(&clock);
    assert!(c.end_drag(&mut rt).is_none());
    assert!(rt.writes().is_empty());
}

#[test]
fn wheel_direction_and_zero_delta() {
    let clock = ManualClock::default();
    let mut c = controller(&clock);
    c.wheel(120.0);
    assert_eq!(c.zoom().percent(), 90);
    c.wheel(-120.0);
    c.wheel(-120.0);
    assert_eq!(c.zoom().percent(), 110);
    c.wheel(0.0);
    assert_eq!(c.zoom().percent(), 110);
}

#[test]
fn zoom_is_independent_of_drag_state() {
    let clock = ManualClock::default();
    let mut c = controller(&clock);
    c.begin_drag(Point::new(0.0, 0.0), PointerSource::primary_mouse());
    for _ in 0..20 {
        c.zoom_in();
    }
    assert!(c.is_dragging());
    assert_eq!(c.zoom().value(), 1.4);
    for _ in 0..20 {
        c.zoom_out();
    }
    assert_eq!(c.zoom().value(), 0.6);
}

#[test]
fn new_asset_reset_clears_view_and_mirror() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);
    drop_at(&mut c, &mut rt, 200.0);
    c.zoom_in();
    c.reset_for_new_asset();
    assert_eq!(c.offset(), Vec2::ZERO);
    assert_eq!(c.last_drop(), Vec2::ZERO);
    assert_eq!(c.zoom().value(), 1.0);
    assert_eq!(c.mirror(), None);
    assert!(!c.is_animating());
}

#[test]
fn double_click_resets_view() {
    let clock = ManualClock::default();
    let mut rt = runtime(false);
    let mut c = controller(&clock);
    drop_at(&mut c, &mut rt, 50.0);
    c.zoom_out();
    c.double_click();
    assert_eq!(c.offset(), Vec2::ZERO);
    assert_eq!(c.zoom().percent(), 100);
    assert_eq!(c.mirror(), None);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = ControllerConfig {
        release_threshold: -1.0,
        ..ControllerConfig::default()
    };
    assert!(GestureInputController::new(cfg, ManualClock::default()).is_err());
}

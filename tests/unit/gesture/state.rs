use super::*;
use crate::foundation::core::MouseButton;

fn cfg() -> ControllerConfig {
    ControllerConfig::default()
}

fn down(state: &mut GestureControllerState, x: f64, y: f64) {
    state.apply(
        GestureEvent::PointerDown {
            position: Point::new(x, y),
            source: PointerSource::primary_mouse(),
        },
        &cfg(),
    );
}

fn drag_to(state: &mut GestureControllerState, x: f64, y: f64) {
    state.apply(
        GestureEvent::PointerMove {
            position: Point::new(x, y),
            source: PointerSource::primary_mouse(),
        },
        &cfg(),
    );
}

fn release(state: &mut GestureControllerState, current: bool) -> Vec<Effect> {
    state.apply(
        GestureEvent::Release {
            current,
            now_ms: 0.0,
        },
        &cfg(),
    )
}

fn set_release(value: bool) -> Effect {
    Effect::SetBool {
        input: "MouseRelease".to_owned(),
        value,
    }
}

#[test]
fn horizontal_movement_is_pinned_to_zero() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 10.0, 10.0);
    for (x, y) in [(500.0, 10.0), (-300.0, 90.0), (42.0, 400.0)] {
        drag_to(&mut s, x, y);
        assert_eq!(s.offset().x, 0.0);
    }
    assert_eq!(s.offset().y, 390.0);
}

#[test]
fn upward_drag_clamps_at_zero() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 0.0, 200.0);
    drag_to(&mut s, 0.0, 50.0);
    assert_eq!(s.offset().y, 0.0);
}

#[test]
fn threshold_is_inclusive() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 0.0, 0.0);
    drag_to(&mut s, 0.0, 99.0);
    assert!(release(&mut s, false).is_empty());
    assert_eq!(s.last_drop().y, 99.0);

    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 0.0, 0.0);
    drag_to(&mut s, 0.0, 100.0);
    assert_eq!(release(&mut s, false), vec![set_release(true)]);
}

#[test]
fn any_drop_reverses_a_released_input() {
    for y in [0.0, 3.0, 150.0, 1000.0] {
        let mut s = GestureControllerState::new(&cfg());
        down(&mut s, 0.0, 0.0);
        drag_to(&mut s, 0.0, y);
        assert_eq!(release(&mut s, true), vec![set_release(false)]);
    }
}

#[test]
fn zero_drop_goes_straight_to_idle() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 5.0, 5.0);
    release(&mut s, false);
    assert_eq!(*s.phase(), Phase::Idle);
}

#[test]
fn release_starts_spring_back_and_frames_converge() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 0.0, 0.0);
    drag_to(&mut s, 0.0, 240.0);
    release(&mut s, false);
    assert_eq!(s.phase().name(), "springing_back");
    assert!(s.session().is_none());

    let mut prev = s.offset().y;
    let mut t = 0.0;
    while matches!(s.phase(), Phase::SpringingBack(_)) {
        t += 16.0;
        s.apply(GestureEvent::Frame { now_ms: t }, &cfg());
        let y = s.offset().y;
        assert!(y >= 0.0);
        assert!(y < prev || y == 0.0);
        prev = y;
    }
    assert_eq!(s.offset(), Vec2::ZERO);
    assert!(t <= 300.0 + 16.0);
}

#[test]
fn new_drag_interrupts_spring_back_from_current_offset() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 0.0, 0.0);
    drag_to(&mut s, 0.0, 200.0);
    release(&mut s, false);
    s.apply(GestureEvent::Frame { now_ms: 150.0 }, &cfg());
    let mid = s.offset().y;
    assert!(mid > 0.0 && mid < 200.0);

    down(&mut s, 0.0, 300.0);
    let session = *s.session().unwrap();
    assert_eq!(session.origin_offset.y, 300.0 - mid);

    // Frames no longer move the offset.
    s.apply(GestureEvent::Frame { now_ms: 1000.0 }, &cfg());
    assert_eq!(s.offset().y, mid);
}

#[test]
fn second_pointer_cannot_steal_the_drag() {
    let mut s = GestureControllerState::new(&cfg());
    s.apply(
        GestureEvent::PointerDown {
            position: Point::new(0.0, 0.0),
            source: PointerSource::single_touch(1),
        },
        &cfg(),
    );
    s.apply(
        GestureEvent::PointerDown {
            position: Point::new(0.0, 50.0),
            source: PointerSource::single_touch(2),
        },
        &cfg(),
    );
    assert_eq!(s.session().unwrap().pointer, PointerId::Touch(1));

    s.apply(
        GestureEvent::PointerMove {
            position: Point::new(0.0, 80.0),
            source: PointerSource::single_touch(2),
        },
        &cfg(),
    );
    assert_eq!(s.offset().y, 0.0);
}

#[test]
fn secondary_button_and_multi_touch_do_not_start_drags() {
    let mut s = GestureControllerState::new(&cfg());
    s.apply(
        GestureEvent::PointerDown {
            position: Point::ZERO,
            source: PointerSource::Mouse {
                button: MouseButton::Secondary,
            },
        },
        &cfg(),
    );
    assert_eq!(*s.phase(), Phase::Idle);
    s.apply(
        GestureEvent::PointerDown {
            position: Point::ZERO,
            source: PointerSource::Touch { id: 3, touches: 2 },
        },
        &cfg(),
    );
    assert_eq!(*s.phase(), Phase::Idle);
}

#[test]
fn out_of_order_events_are_ignored() {
    let mut s = GestureControllerState::new(&cfg());
    drag_to(&mut s, 0.0, 120.0);
    assert_eq!(s.offset(), Vec2::ZERO);
    assert!(release(&mut s, true).is_empty());
    assert_eq!(*s.phase(), Phase::Idle);
}

#[test]
fn reset_view_is_idempotent() {
    let mut s = GestureControllerState::new(&cfg());
    down(&mut s, 0.0, 0.0);
    drag_to(&mut s, 0.0, 130.0);
    release(&mut s, false);
    s.apply(GestureEvent::Zoom { steps: 3 }, &cfg());

    s.apply(GestureEvent::ResetView, &cfg());
    let once = s.clone();
    s.apply(GestureEvent::ResetView, &cfg());
    assert_eq!(s, once);
    assert_eq!(s.offset(), Vec2::ZERO);
    assert_eq!(s.last_drop(), Vec2::ZERO);
    assert_eq!(s.zoom().value(), 1.0);
    assert_eq!(*s.phase(), Phase::Idle);
}

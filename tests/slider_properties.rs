//! Property tests for the comparison slider.
//!
//! Bounds, navigation cycles, drag gating, leave-cancels-drag and the
//! zero-width guard, over arbitrary coordinates and event sequences.

use dermabar_gallery::gallery::{Bounds, ComparisonItem, ComparisonSlider, PointerEvent};
use proptest::prelude::*;

fn items(n: usize) -> Vec<ComparisonItem> {
    (1..=n as u32)
        .map(|id| {
            ComparisonItem::new(
                id,
                format!("Treatment {id}"),
                "",
                format!("{id}-before.jpg"),
                format!("{id}-after.jpg"),
            )
        })
        .collect()
}

fn arb_event() -> impl Strategy<Value = PointerEvent> {
    prop_oneof![
        (-20_000.0f32..20_000.0).prop_map(|x| PointerEvent::Pressed { x }),
        (-20_000.0f32..20_000.0).prop_map(|x| PointerEvent::Moved { x }),
        Just(PointerEvent::Released),
        Just(PointerEvent::Left),
    ]
}

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (-500.0f32..500.0, 0.0f32..2_000.0).prop_map(|(left, width)| Bounds::new(left, width))
}

proptest! {
    /// The divider never leaves [0, 100], whatever the input.
    #[test]
    fn divider_stays_in_bounds(
        events in prop::collection::vec(arb_event(), 0..64),
        bounds in arb_bounds(),
    ) {
        let mut slider = ComparisonSlider::new(items(3));
        for event in events {
            slider.handle(event, bounds);
            let position = slider.divider_position();
            prop_assert!((0.0..=100.0).contains(&position));
        }
    }

    /// Moves while idle never change the divider.
    #[test]
    fn idle_moves_are_ignored(
        xs in prop::collection::vec(-20_000.0f32..20_000.0, 1..32),
        bounds in arb_bounds(),
    ) {
        let mut slider = ComparisonSlider::new(items(2));
        for x in xs {
            let changed = slider.handle(PointerEvent::Moved { x }, bounds);
            prop_assert!(!changed);
            prop_assert_eq!(slider.divider_position(), 50.0);
        }
    }

    /// After a leave, moves without a new press keep the last position.
    #[test]
    fn leave_cancels_drag(
        press in 0.0f32..=200.0,
        drag in 0.0f32..=200.0,
        after in prop::collection::vec(-1_000.0f32..1_000.0, 1..16),
    ) {
        let bounds = Bounds::new(0.0, 200.0);
        let mut slider = ComparisonSlider::new(items(2));
        slider.handle(PointerEvent::Pressed { x: press }, bounds);
        slider.handle(PointerEvent::Moved { x: drag }, bounds);
        let held = slider.divider_position();

        slider.handle(PointerEvent::Left, bounds);
        prop_assert!(!slider.is_dragging());
        for x in after {
            slider.handle(PointerEvent::Moved { x }, bounds);
        }
        prop_assert_eq!(slider.divider_position(), held);
    }

    /// A zero-width container never produces an update (and never NaN).
    #[test]
    fn zero_width_guard(xs in prop::collection::vec(-1_000.0f32..1_000.0, 1..16), left in -100.0f32..100.0) {
        let bounds = Bounds::new(left, 0.0);
        let mut slider = ComparisonSlider::new(items(2));
        slider.handle(PointerEvent::Pressed { x: left }, bounds);
        for x in xs {
            slider.handle(PointerEvent::Moved { x }, bounds);
        }
        prop_assert_eq!(slider.divider_position(), 50.0);
    }

    /// N calls to next() come back to the start; previous() from 0 wraps.
    #[test]
    fn navigation_cycles(n in 1usize..12, start in 0usize..12) {
        let mut slider = ComparisonSlider::new(items(n));
        let start = start % n;
        slider.jump_to(start).unwrap();

        for _ in 0..n {
            slider.next();
            prop_assert_eq!(slider.divider_position(), 50.0);
        }
        prop_assert_eq!(slider.active_index(), start);

        slider.jump_to(0).unwrap();
        slider.previous();
        prop_assert_eq!(slider.active_index(), n - 1);
    }

    /// next() then previous() restores the index and re-centers each time.
    #[test]
    fn next_then_previous_restores(n in 1usize..12, start in 0usize..12, nudge in -50.0f32..50.0) {
        let mut slider = ComparisonSlider::new(items(n));
        let start = start % n;
        slider.jump_to(start).unwrap();

        slider.nudge(nudge);
        slider.next();
        prop_assert_eq!(slider.divider_position(), 50.0);
        slider.nudge(nudge);
        slider.previous();
        prop_assert_eq!(slider.divider_position(), 50.0);
        prop_assert_eq!(slider.active_index(), start);
    }
}

#[test]
fn far_left_clamps_to_zero() {
    let bounds = Bounds::new(300.0, 200.0);
    let mut slider = ComparisonSlider::new(items(1));
    slider.handle(PointerEvent::Pressed { x: 400.0 }, bounds);
    slider.handle(PointerEvent::Moved { x: 300.0 - 10_000.0 }, bounds);
    assert_eq!(slider.divider_position(), 0.0);
}

#[test]
fn four_item_walkthrough() {
    let bounds = Bounds::new(0.0, 200.0);
    let mut slider = ComparisonSlider::new(items(4));

    slider.handle(PointerEvent::Pressed { x: 20.0 }, bounds);
    assert_eq!(slider.divider_position(), 10.0);

    slider.next();
    assert_eq!(slider.active_index(), 1);
    assert_eq!(slider.divider_position(), 50.0);

    slider.handle(PointerEvent::Pressed { x: 0.0 }, bounds);
    slider.handle(PointerEvent::Moved { x: 200.0 }, bounds);
    assert_eq!(slider.divider_position(), 100.0);

    slider.previous();
    assert_eq!(slider.active_index(), 0);
    assert_eq!(slider.divider_position(), 50.0);
}

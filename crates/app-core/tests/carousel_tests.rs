// Host-side tests for the carousel state machine: wrap-around navigation,
// gesture settling, arbitration, and the auto-advance timer.

use app_core::carousel::{AutoAdvance, Carousel, CarouselSet, Phase};
use app_core::gesture::SwipeDirection;
use app_core::transform::{CENTER_POSE, LEFT_POSE, RIGHT_POSE};
use std::time::Duration;

const WIDTH: f32 = 400.0;

#[test]
fn previous_wraps_from_zero() {
    let mut c = Carousel::new(4);
    c.previous();
    assert_eq!(c.current_index(), 3);
}

#[test]
fn next_wraps_at_the_end() {
    let mut c = Carousel::new(4);
    c.go_to(3);
    c.next();
    assert_eq!(c.current_index(), 0);
}

#[test]
fn go_to_wraps_out_of_range_targets() {
    let mut c = Carousel::new(4);
    c.go_to(7);
    assert_eq!(c.current_index(), 3);
}

#[test]
fn empty_carousel_navigation_is_a_noop() {
    let mut c = Carousel::new(0);
    c.next();
    c.previous();
    c.go_to(5);
    assert_eq!(c.current_index(), 0);
    assert!(c.rendered_slots().is_empty());
    // an end with no tracked gesture settles to nothing
    let settle = c.end_drag();
    assert_eq!(settle.direction, None);
}

#[test]
fn committed_gesture_advances_forward() {
    let mut c = Carousel::new(4);
    c.begin_drag(200.0, 100.0, 0.0);
    assert_eq!(c.phase(), Phase::Dragging);
    c.drag_to(80.0, 100.0, 160.0, WIDTH);
    assert!(c.drag_progress() < 0.0);
    let settle = c.end_drag();
    assert_eq!(settle.direction, Some(SwipeDirection::Forward));
    assert_eq!(settle.index, 1);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.drag_progress(), 0.0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn undersized_gesture_settles_back_in_place() {
    let mut c = Carousel::new(4);
    c.begin_drag(200.0, 100.0, 0.0);
    c.drag_to(175.0, 100.0, 125.0, WIDTH);
    c.drag_to(150.0, 100.0, 250.0, WIDTH);
    let settle = c.end_drag();
    assert_eq!(settle.direction, None);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.drag_progress(), 0.0);
}

#[test]
fn programmatic_navigation_loses_to_an_active_gesture() {
    let mut c = Carousel::new(4);
    c.begin_drag(200.0, 100.0, 0.0);
    c.drag_to(185.0, 100.0, 50.0, WIDTH); // locked, below both thresholds
    c.next();
    c.previous();
    c.go_to(2);
    assert_eq!(c.current_index(), 0, "gesture wins until released");
    let settle = c.end_drag();
    assert_eq!(settle.direction, None);
    // released: buttons work again
    c.go_to(2);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn set_len_clamps_the_index_and_cancels_the_gesture() {
    let mut c = Carousel::new(5);
    c.go_to(4);
    c.begin_drag(200.0, 100.0, 0.0);
    c.set_len(3);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.current_index(), 1); // 4 mod 3
    assert_eq!(c.len(), 3);
    c.set_len(0);
    assert_eq!(c.current_index(), 0);
    assert!(c.is_empty());
}

#[test]
fn rendered_slots_wrap_their_item_indices() {
    let c = Carousel::new(4);
    let slots = c.rendered_slots();
    assert_eq!(slots.len(), 3);
    assert_eq!((slots[0].slot, slots[0].index), (-1, 3));
    assert_eq!((slots[1].slot, slots[1].index), (0, 0));
    assert_eq!((slots[2].slot, slots[2].index), (1, 1));
    // at rest the three slots sit on their base poses
    assert_eq!(slots[0].transform, LEFT_POSE);
    assert_eq!(slots[1].transform, CENTER_POSE);
    assert_eq!(slots[2].transform, RIGHT_POSE);
}

#[test]
fn auto_advance_accumulates_whole_steps() {
    let mut auto = AutoAdvance::new(Duration::from_secs(5));
    assert_eq!(auto.tick(Duration::from_secs(3)), 0);
    assert_eq!(auto.tick(Duration::from_secs(3)), 1);
    // a long stall yields every missed step at once
    assert_eq!(auto.tick(Duration::from_secs(10)), 2);
}

#[test]
fn auto_advance_reset_discards_partial_progress() {
    let mut auto = AutoAdvance::new(Duration::from_secs(5));
    auto.tick(Duration::from_secs(4));
    auto.reset();
    assert_eq!(auto.tick(Duration::from_secs(4)), 0);
    assert_eq!(auto.tick(Duration::from_secs(1)), 1);
}

#[test]
fn auto_advance_with_zero_interval_is_inert() {
    let mut auto = AutoAdvance::new(Duration::ZERO);
    assert_eq!(auto.tick(Duration::from_secs(60)), 0);
}

#[test]
fn carousel_set_routes_by_section_id() {
    let mut set = CarouselSet::default();
    set.insert("stories", Carousel::new(4));
    set.insert("testimonials", Carousel::new(2));
    set.get_mut("stories").unwrap().next();
    assert_eq!(set.get("stories").unwrap().current_index(), 1);
    assert_eq!(set.get("testimonials").unwrap().current_index(), 0);
    assert!(set.get("missing").is_none());
}

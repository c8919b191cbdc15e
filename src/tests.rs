use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_i64(start as i64, end_exclusive as i64) as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Card {
    id: u64,
}

fn cards(n: usize) -> Vec<Card> {
    (0..n).map(|i| Card { id: i as u64 }).collect()
}

fn opts(capacity: usize) -> CarouselOptions<Card> {
    CarouselOptions::new(capacity, |c: &Card| c.id)
}

fn drag_opts(card_step_px: f64, item_count: usize) -> DragOptions {
    DragOptions::new()
        .with_enabled(true)
        .with_card_step_px(card_step_px)
        .with_item_count(item_count)
}

fn down(id: PointerId, x: f64) -> PointerEvent {
    PointerEvent::mouse(id, PointerButton::Primary, x)
}

fn at(id: PointerId, x: f64) -> PointerEvent {
    PointerEvent::mouse(id, PointerButton::Primary, x)
}

fn visible_ids<P: Clone>(c: &Carousel<P>) -> Vec<String> {
    let mut ids = Vec::new();
    c.for_each_visible(|slot| ids.push(slot.carousel_id.clone()));
    ids
}

#[test]
fn mod_floor_handles_negative_offsets() {
    assert_eq!(mod_floor(0, 5), 0);
    assert_eq!(mod_floor(7, 5), 2);
    assert_eq!(mod_floor(-1, 5), 4);
    assert_eq!(mod_floor(-5, 5), 0);
    assert_eq!(mod_floor(-11, 5), 4);
    assert_eq!(mod_floor(123, 0), 0);
}

#[test]
fn mod_floor_is_periodic_and_in_range() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..1000 {
        let len = rng.gen_range_usize(1, 100);
        let offset = rng.gen_range_i64(-1_000_000_000, 1_000_000_000);
        let m = mod_floor(offset, len);
        assert!(m < len);
        assert_eq!(m, mod_floor(offset + len as i64, len));
        assert_eq!(m, mod_floor(offset - len as i64, len));
    }
}

#[test]
fn track_loops_when_items_exceed_capacity() {
    let items = cards(10);
    let track = Track::build(&items, 4, |c: &Card| c.id);
    assert!(track.loop_enabled());
    assert_eq!(track.len(), 30);

    let ids: HashSet<String> = track
        .slots()
        .iter()
        .map(|slot| slot.carousel_id.clone())
        .collect();
    assert_eq!(ids.len(), 30);
}

#[test]
fn track_stays_flat_when_items_fit() {
    let items = cards(3);
    let track = Track::build(&items, 4, |c: &Card| c.id);
    assert!(!track.loop_enabled());
    assert_eq!(track.len(), 3);
    assert_eq!(track.slots()[0].carousel_id, "0");
    assert_eq!(track.slots()[2].carousel_id, "2");
}

#[test]
fn track_never_loops_when_empty() {
    let track = Track::build(&[] as &[Card], 0, |c: &Card| c.id);
    assert!(!track.loop_enabled());
    assert!(track.is_empty());
}

#[test]
fn track_build_is_deterministic() {
    let items = cards(6);
    let a = Track::build(&items, 2, |c: &Card| c.id);
    let b = Track::build(&items, 2, |c: &Card| c.id);
    let ids = |t: &Track<Card>| -> Vec<String> {
        t.slots().iter().map(|s| s.carousel_id.clone()).collect()
    };
    assert_eq!(ids(&a), ids(&b));
    assert_eq!(a.slots()[7].index, 7);
    assert_eq!(a.slots()[7].carousel_id, "1-dup-7");
}

#[test]
fn visible_at_offset_zero_is_the_base_order() {
    let c = Carousel::new(cards(10), opts(4));
    let base: Vec<String> = c
        .track()
        .slots()
        .iter()
        .map(|s| s.carousel_id.clone())
        .collect();
    assert_eq!(visible_ids(&c), base);
}

#[test]
fn rotation_moves_the_tail_to_the_front() {
    // 3 items, capacity 1 -> looping, base length 9.
    let mut c = Carousel::new(cards(3), opts(1));
    c.apply_shift(2);
    assert_eq!(c.effective_offset(), 2);

    let ids = visible_ids(&c);
    assert_eq!(ids.len(), 9);
    // last two slots (base[7], base[8]) come first
    assert_eq!(ids[0], "1-dup-7");
    assert_eq!(ids[1], "2-dup-8");
    assert_eq!(ids[2], "0-dup-0");
}

#[test]
fn full_cycle_restores_the_base_order() {
    let mut c = Carousel::new(cards(5), opts(2));
    let len = c.len() as i64;
    assert_eq!(len, 15);
    let base = visible_ids(&c);

    c.apply_shift(4);
    assert_ne!(visible_ids(&c), base);
    c.apply_shift(len - 4);
    assert_eq!(visible_ids(&c), base);
}

#[test]
fn paging_moves_a_full_viewport() {
    let mut c = Carousel::new(cards(10), opts(4));
    c.move_left();
    assert_eq!(c.effective_offset(), 4);
    c.move_right();
    assert_eq!(c.effective_offset(), 0);
    c.move_right();
    assert_eq!(c.effective_offset(), 26);
}

#[test]
fn paging_never_moves_less_than_one_card() {
    let mut c = Carousel::new(cards(3), opts(0));
    assert!(c.loop_enabled());
    assert_eq!(c.page_shift(), 1);
    c.move_left();
    assert_eq!(c.effective_offset(), 1);
}

#[test]
fn paging_is_a_strict_noop_while_not_looping() {
    let notified = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&notified);
    let options =
        opts(5).with_on_change(Some(move |_: &Carousel<Card>| {
            n.fetch_add(1, Ordering::SeqCst);
        }));

    let mut c = Carousel::new(cards(3), options);
    assert!(!c.loop_enabled());

    c.move_left();
    c.move_right();
    c.apply_shift(7);
    assert_eq!(c.effective_offset(), 0);
    assert_eq!(c.offset(), 0);
    assert_eq!(notified.load(Ordering::SeqCst), 0);
}

#[test]
fn apply_shift_normalizes_negative_deltas() {
    let mut c = Carousel::new(cards(5), opts(2));
    c.apply_shift(-1);
    assert_eq!(c.effective_offset(), 14);
    assert_eq!(c.offset(), 14);
}

#[test]
fn head_first_direction_inverts_the_rotation() {
    let mut c = Carousel::new(cards(3), opts(1));
    c.set_direction(RotationDirection::HeadFirst);
    c.apply_shift(1);

    let ids = visible_ids(&c);
    assert_eq!(ids[0], "1-dup-1");
    assert_eq!(ids[8], "0-dup-0");
}

#[test]
fn set_capacity_rebuilds_only_across_the_loop_boundary() {
    let mut c = Carousel::new(cards(5), opts(10));
    assert!(!c.loop_enabled());
    assert_eq!(c.len(), 5);
    assert_eq!(c.track().slots()[0].carousel_id, "0");

    c.set_capacity(2);
    assert!(c.loop_enabled());
    assert_eq!(c.len(), 15);
    assert_eq!(c.track().slots()[0].carousel_id, "0-dup-0");

    c.set_capacity(3);
    assert!(c.loop_enabled());
    assert_eq!(c.len(), 15);
}

#[test]
fn set_items_rebuilds_the_track() {
    let mut c = Carousel::new(cards(10), opts(4));
    assert_eq!(c.len(), 30);
    c.set_items(cards(2));
    assert!(!c.loop_enabled());
    assert_eq!(c.len(), 2);
}

#[test]
fn batch_update_coalesces_notifications() {
    let notified = Arc::new(AtomicUsize::new(0));
    let n = Arc::clone(&notified);
    let options =
        opts(2).with_on_change(Some(move |_: &Carousel<Card>| {
            n.fetch_add(1, Ordering::SeqCst);
        }));

    let mut c = Carousel::new(cards(10), options);
    c.batch_update(|c| {
        c.move_left();
        c.move_left();
        c.apply_shift(3);
    });
    assert_eq!(notified.load(Ordering::SeqCst), 1);
    assert_eq!(c.effective_offset(), 7);
}

#[test]
fn rotation_state_roundtrips() {
    let mut c = Carousel::new(cards(10), opts(4));
    c.apply_shift(9);
    let snap = c.rotation_state();
    assert_eq!(snap.offset, 9);

    let mut restored = Carousel::new(cards(10), opts(4));
    restored.restore_rotation_state(snap);
    assert_eq!(restored.effective_offset(), 9);
    assert_eq!(visible_ids(&restored), visible_ids(&c));
}

#[test]
fn metrics_measure_floors_capacity() {
    let m = Metrics::measure(1000.0, 220.0);
    assert_eq!(m.capacity, 4);
    assert_eq!(m.card_step_px, 220.0);
}

#[test]
fn metrics_measure_degrades_on_bad_input() {
    assert_eq!(Metrics::measure(0.0, 220.0).capacity, 0);
    assert_eq!(Metrics::measure(-50.0, 220.0).capacity, 0);
    assert_eq!(Metrics::measure(1000.0, 0.0).capacity, 0);
    let nan = Metrics::measure(f64::NAN, 220.0);
    assert_eq!(nan.capacity, 0);
    assert_eq!(nan.card_step_px, 220.0);
}

#[test]
fn short_release_past_threshold_still_shifts_one_card() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, -40.0));
    d.on_frame();
    assert_eq!(d.drag_x(), -40.0);

    // raw = -0.4: crosses 0.35 but rounds to zero, forced to -1
    assert_eq!(d.pointer_up(&at(1, -40.0)), Some(-1));
    assert!(d.is_settling());
    assert_eq!(d.drag_x(), 0.0);
}

#[test]
fn release_below_threshold_emits_nothing() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, 20.0));
    d.on_frame();
    assert_eq!(d.pointer_up(&at(1, 20.0)), None);
    assert!(d.is_settling());
}

#[test]
fn long_release_is_clamped() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, 950.0)), Some(8));

    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, -950.0)), Some(-8));
}

#[test]
fn release_rounds_to_the_nearest_page() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, -440.0)), Some(-4));

    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, 260.0)), Some(3));
}

#[test]
fn degenerate_metrics_suppress_the_shift_but_reset_visuals() {
    let mut d = DragMachine::new(drag_opts(0.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, -300.0)), None);
    assert!(!d.is_dragging());
    assert!(d.is_settling());
    assert_eq!(d.drag_x(), 0.0);

    let mut d = DragMachine::new(drag_opts(100.0, 0));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, -300.0)), None);
}

#[test]
fn release_while_disabled_resets_without_emitting() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.set_enabled(false);
    assert_eq!(d.pointer_up(&at(1, -300.0)), None);
    assert!(!d.is_dragging());
    assert!(d.is_settling());
}

#[test]
fn pointer_down_requires_enabled_and_primary_button() {
    let mut d = DragMachine::new(drag_opts(100.0, 30).with_enabled(false));
    assert!(!d.pointer_down(&down(1, 0.0)));

    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(!d.pointer_down(&PointerEvent::mouse(1, PointerButton::Secondary, 0.0)));
    assert!(!d.pointer_down(&PointerEvent::mouse(1, PointerButton::Auxiliary, 0.0)));
    assert!(d.pointer_down(&PointerEvent::touch(2, 0.0)));
}

#[test]
fn touch_and_pen_always_start_a_gesture() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&PointerEvent::pen(7, 10.0)));
    assert_eq!(d.captured_pointer(), Some(7));
}

#[test]
fn second_pointer_down_is_rejected() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert!(!d.pointer_down(&down(2, 50.0)));
    assert_eq!(d.captured_pointer(), Some(1));
}

#[test]
fn foreign_pointer_events_are_ignored() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));

    d.pointer_move(&at(2, 500.0));
    assert!(!d.needs_frame());
    assert_eq!(d.drag_x(), 0.0);

    assert_eq!(d.pointer_up(&at(2, 500.0)), None);
    assert!(d.is_dragging());

    assert_eq!(d.pointer_up(&at(1, 120.0)), Some(1));
}

#[test]
fn moves_coalesce_last_writer_wins() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, 10.0));
    d.pointer_move(&at(1, 25.0));
    assert!(d.needs_frame());

    d.on_frame();
    assert_eq!(d.drag_x(), 25.0);
    assert!(!d.needs_frame());
}

#[test]
fn settling_lasts_exactly_one_frame() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert_eq!(d.phase(), DragPhase::Idle);

    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.phase(), DragPhase::Dragging);

    assert_eq!(d.pointer_up(&at(1, 200.0)), Some(2));
    assert_eq!(d.phase(), DragPhase::Settling);
    assert!(d.needs_frame());

    d.on_frame();
    assert_eq!(d.phase(), DragPhase::Idle);
    assert!(!d.needs_frame());
}

#[test]
fn release_cancels_the_pending_move_frame() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, 300.0));
    assert_eq!(d.pointer_up(&at(1, 300.0)), Some(3));

    // the coalesced move was dropped; the settling frame must not revive it
    d.on_frame();
    assert_eq!(d.drag_x(), 0.0);
}

#[test]
fn click_suppression_latches_and_resets_on_the_next_down() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));

    // a tap: never crosses the 8 px threshold
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, 5.0));
    d.on_frame();
    assert_eq!(d.pointer_up(&at(1, 5.0)), None);
    assert!(!d.should_suppress_click());

    // crosses once, comes back: stays latched for the whole gesture
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, 100.0));
    d.on_frame();
    d.pointer_move(&at(1, 3.0));
    d.on_frame();
    assert_eq!(d.pointer_up(&at(1, 3.0)), None);
    assert!(d.should_suppress_click());

    // next pointer-down clears the flag
    assert!(d.pointer_down(&down(1, 0.0)));
    assert!(!d.should_suppress_click());
}

#[test]
fn fast_release_without_a_frame_still_suppresses_the_click() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_up(&at(1, 100.0)), Some(1));
    assert!(d.should_suppress_click());
}

#[test]
fn cancel_behaves_like_pointer_up() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    assert_eq!(d.pointer_cancel(&at(1, -120.0)), Some(-1));
    assert!(d.is_settling());
}

#[test]
fn reset_drops_the_session_and_pending_frame() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, 250.0));
    assert!(d.needs_frame());

    d.reset();
    assert!(!d.needs_frame());
    assert_eq!(d.phase(), DragPhase::Idle);
    assert!(!d.should_suppress_click());
    assert_eq!(d.drag_x(), 0.0);
}

#[test]
fn snapshot_reflects_the_live_preview() {
    let mut d = DragMachine::new(drag_opts(100.0, 30));
    assert!(d.pointer_down(&down(1, 0.0)));
    d.pointer_move(&at(1, -75.0));
    d.on_frame();

    let snap = d.snapshot();
    assert_eq!(snap.drag_x, -75.0);
    assert!(snap.is_dragging);
    assert!(!snap.is_settling);

    assert_eq!(d.pointer_up(&at(1, -75.0)), Some(-1));
    let snap = d.snapshot();
    assert_eq!(snap.drag_x, 0.0);
    assert!(!snap.is_dragging);
    assert!(snap.is_settling);
}

#[test]
fn random_gestures_keep_the_shift_within_bounds() {
    let mut rng = Lcg::new(42);
    let mut d = DragMachine::new(drag_opts(100.0, 30));

    for i in 0..500 {
        let id = rng.gen_range_i64(1, 4) as PointerId;
        let x = rng.gen_range_i64(-2000, 2000) as f64;
        match rng.gen_range_usize(0, 4) {
            0 => {
                d.pointer_down(&down(id, x));
            }
            1 => d.pointer_move(&at(id, x)),
            2 => {
                if let Some(shift) = d.pointer_up(&at(id, x)) {
                    assert!(shift != 0);
                    assert!(shift.abs() <= 8, "shift {shift} out of bounds at step {i}");
                }
            }
            _ => d.on_frame(),
        }
    }
}

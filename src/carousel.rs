use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::options::CarouselOptions;
use crate::rotation::{mod_floor, split_point};
use crate::state::RotationState;
use crate::track::Track;
use crate::types::{DisplayItem, ItemKey, RotationDirection};

/// The stateful rotation owner.
///
/// Holds the item list, the derived base sequence and the sole copy of the
/// rotation `offset`. Gesture code proposes deltas (see
/// [`crate::DragMachine`]); only this type writes `offset`, via
/// [`Self::apply_shift`] and the paging moves.
///
/// This type is intentionally UI-agnostic: rendering is exposed through the
/// zero-allocation [`Self::for_each_visible`] iteration, and layout changes
/// are pushed in by the adapter (`set_capacity`, `set_items`).
#[derive(Clone, Debug)]
pub struct Carousel<P, K = ItemKey> {
    options: CarouselOptions<P, K>,
    items: Vec<P>,
    track: Track<P>,
    offset: i64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<P: Clone, K: core::fmt::Display> Carousel<P, K> {
    pub fn new(items: Vec<P>, options: CarouselOptions<P, K>) -> Self {
        let track = Track::build(&items, options.capacity, |p| (options.get_item_key)(p));
        cdebug!(
            items = items.len(),
            capacity = options.capacity,
            loop_enabled = track.loop_enabled(),
            "Carousel::new"
        );
        Self {
            options,
            items,
            track,
            offset: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions<P, K> {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions<P, K>) {
        let get_item_key_unchanged =
            Arc::ptr_eq(&self.options.get_item_key, &options.get_item_key);
        let prev_loop = self.track.loop_enabled();
        self.options = options;

        let next_loop = self.would_loop(self.options.capacity);
        if prev_loop != next_loop || !get_item_key_unchanged {
            self.rebuild_track();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`, which decides whether the base sequence needs a
    /// rebuild.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<P, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel<P, K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Replaces the item list and rebuilds the base sequence.
    pub fn set_items(&mut self, items: Vec<P>) {
        self.items = items;
        self.rebuild_track();
        self.notify();
    }

    /// Applies a new viewport capacity. The base sequence is rebuilt only
    /// when this flips the loop flag; the track depends on nothing else.
    pub fn set_capacity(&mut self, capacity: usize) {
        if self.options.capacity == capacity {
            return;
        }
        let prev_loop = self.track.loop_enabled();
        self.options.capacity = capacity;
        if prev_loop != self.would_loop(capacity) {
            self.rebuild_track();
        }
        self.notify();
    }

    pub fn set_direction(&mut self, direction: RotationDirection) {
        if self.options.direction == direction {
            return;
        }
        self.options.direction = direction;
        self.notify();
    }

    pub fn items(&self) -> &[P] {
        &self.items
    }

    pub fn track(&self) -> &Track<P> {
        &self.track
    }

    /// Base sequence length (`3N` when looping, `N` otherwise).
    pub fn len(&self) -> usize {
        self.track.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    pub fn loop_enabled(&self) -> bool {
        self.track.loop_enabled()
    }

    pub fn capacity(&self) -> usize {
        self.options.capacity
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// The normalized rotation amount, in `[0, len)`.
    pub fn effective_offset(&self) -> usize {
        let len = self.track.len();
        if !self.track.loop_enabled() || len == 0 {
            return 0;
        }
        let signed = match self.options.direction {
            RotationDirection::TailFirst => self.offset,
            RotationDirection::HeadFirst => -self.offset,
        };
        mod_floor(signed, len)
    }

    /// Visits the base sequence in visible order (the cyclic rotation by the
    /// effective offset) without allocating.
    pub fn for_each_visible(&self, mut f: impl FnMut(&DisplayItem<P>)) {
        let len = self.track.len();
        if len == 0 {
            return;
        }
        let split = split_point(len, self.effective_offset());
        for slot in &self.track.slots()[split..] {
            f(slot);
        }
        for slot in &self.track.slots()[..split] {
            f(slot);
        }
    }

    /// Collects the visible ordering into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_visible`]; adapters that
    /// render every frame should prefer the iteration and reuse a buffer.
    pub fn collect_visible(&self, out: &mut Vec<DisplayItem<P>>) {
        out.clear();
        self.for_each_visible(|slot| out.push(slot.clone()));
    }

    /// How far one paging move travels: a full viewport, never less than one
    /// card.
    pub fn page_shift(&self) -> i64 {
        cmp::max(1, self.options.capacity) as i64
    }

    /// Rotates content one page to the left. Strict no-op while not looping.
    pub fn move_left(&mut self) {
        self.page(1);
    }

    /// Rotates content one page to the right. Strict no-op while not looping.
    pub fn move_right(&mut self) {
        self.page(-1);
    }

    fn page(&mut self, sign: i64) {
        if !self.track.loop_enabled() || self.track.is_empty() {
            return;
        }
        self.shift_offset(sign * self.page_shift());
    }

    /// Applies a signed shift proposed by gesture code, normalized into
    /// `[0, len)`. Strict no-op while not looping or when `delta` is zero.
    pub fn apply_shift(&mut self, delta: i64) {
        if !self.track.loop_enabled() || self.track.is_empty() || delta == 0 {
            return;
        }
        self.shift_offset(delta);
    }

    fn shift_offset(&mut self, delta: i64) {
        let len = self.track.len();
        self.offset = mod_floor(self.offset + delta, len) as i64;
        ctrace!(delta, offset = self.offset, "shift_offset");
        self.notify();
    }

    pub fn rotation_state(&self) -> RotationState {
        RotationState {
            offset: self.offset,
        }
    }

    /// Restores a previously captured rotation snapshot. The offset is
    /// normalized lazily, so a snapshot taken against a different item list
    /// stays safe.
    pub fn restore_rotation_state(&mut self, state: RotationState) {
        if self.offset == state.offset {
            return;
        }
        self.offset = state.offset;
        self.notify();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when a release applies a shift and a metrics change in the
    /// same tick and the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn would_loop(&self, capacity: usize) -> bool {
        self.items.len() > capacity && !self.items.is_empty()
    }

    fn rebuild_track(&mut self) {
        self.track = Track::build(&self.items, self.options.capacity, |p| {
            (self.options.get_item_key)(p)
        });
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}

use crate::options::DragOptions;
use crate::state::DragSnapshot;
use crate::types::{DragPhase, PointerEvent, PointerId};

/// Pointer-drag state machine: `Idle → Dragging → Settling → Idle`.
///
/// The machine never touches the rotation offset. A release that crosses the
/// trigger threshold returns the proposed shift from [`Self::pointer_up`];
/// the owning component applies it to the rotation owner.
///
/// Preview updates are coalesced: pointer moves overwrite a single pending
/// payload, and the host applies it by calling [`Self::on_frame`] once per
/// animation frame while [`Self::needs_frame`] reports true. Settling lasts
/// exactly one such frame, so the snap back to rest renders without a
/// transition.
///
/// One gesture at a time: events from any pointer other than the captured
/// one are ignored, including a second pointer-down.
#[derive(Clone, Debug)]
pub struct DragMachine {
    options: DragOptions,

    pointer_id: Option<PointerId>,
    start_x: f64,
    last_x: f64,
    frame_pending: bool,
    did_drag: bool,

    drag_x: f64,
    is_settling: bool,
}

impl DragMachine {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            pointer_id: None,
            start_x: 0.0,
            last_x: 0.0,
            frame_pending: false,
            did_drag: false,
            drag_x: 0.0,
            is_settling: false,
        }
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DragOptions) {
        self.options = options;
    }

    /// Mirrors the upstream loop flag. Does not end a gesture in flight; a
    /// release while disabled resets visuals and emits nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn set_card_step_px(&mut self, card_step_px: f64) {
        self.options.card_step_px = card_step_px;
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.options.item_count = item_count;
    }

    /// Starts a gesture. Returns `true` when the pointer was captured (the
    /// host should then capture it on the surface element too).
    ///
    /// Rejected: downs while disabled, non-primary mouse buttons, and any
    /// down while another pointer holds the capture.
    pub fn pointer_down(&mut self, ev: &PointerEvent) -> bool {
        if !self.options.enabled {
            return false;
        }
        if !ev.starts_drag() {
            return false;
        }
        if self.pointer_id.is_some() {
            ctrace!(pointer_id = ev.pointer_id, "pointer_down: gesture already active");
            return false;
        }

        self.pointer_id = Some(ev.pointer_id);
        self.start_x = ev.x;
        self.last_x = ev.x;
        self.did_drag = false;
        self.drag_x = 0.0;
        self.frame_pending = false;
        // is_settling stays untouched: the settling frame runs out on its own
        ctrace!(pointer_id = ev.pointer_id, x = ev.x, "pointer_down");
        true
    }

    /// Records a move sample for the captured pointer. Samples coalesce
    /// last-writer-wins; the preview updates on the next [`Self::on_frame`].
    pub fn pointer_move(&mut self, ev: &PointerEvent) {
        if !self.options.enabled {
            return;
        }
        let Some(id) = self.pointer_id else {
            return;
        };
        if id != ev.pointer_id {
            return;
        }
        self.last_x = ev.x;
        self.frame_pending = true;
    }

    /// Ends the gesture for the captured pointer and returns the proposed
    /// page shift, if the release crossed the trigger threshold.
    ///
    /// Settling is entered in the same update: the preview resets to zero,
    /// the pending coalesced frame is dropped, and the settling flag holds
    /// until the next [`Self::on_frame`].
    pub fn pointer_up(&mut self, ev: &PointerEvent) -> Option<i64> {
        let id = self.pointer_id?;
        if id != ev.pointer_id {
            return None;
        }
        self.pointer_id = None;

        let dx = ev.x - self.start_x;
        if dx.abs() >= self.options.click_suppress_px {
            self.did_drag = true;
        }

        let shift = self.release_shift(dx);

        self.is_settling = true;
        self.drag_x = 0.0;
        self.frame_pending = false;
        ctrace!(dx, shift = ?shift, "pointer_up");
        shift
    }

    /// Pointer-cancel is a graceful end of gesture, identical to pointer-up.
    pub fn pointer_cancel(&mut self, ev: &PointerEvent) -> Option<i64> {
        self.pointer_up(ev)
    }

    /// True while the host owes the machine one animation-frame callback:
    /// either a coalesced move is pending or the settling frame has not
    /// elapsed yet.
    pub fn needs_frame(&self) -> bool {
        self.frame_pending || self.is_settling
    }

    /// Applies the pending coalesced preview update and ends the settling
    /// frame. Call at most once per animation frame.
    pub fn on_frame(&mut self) {
        if self.frame_pending {
            self.frame_pending = false;
            let dx = self.last_x - self.start_x;
            self.drag_x = dx;
            if dx.abs() >= self.options.click_suppress_px {
                self.did_drag = true;
            }
        }
        if self.is_settling {
            self.is_settling = false;
        }
    }

    /// Was the just-completed gesture a drag rather than a tap? Consumers
    /// call this from their click handler to decide whether to cancel the
    /// default action. Resets on the next pointer-down.
    pub fn should_suppress_click(&self) -> bool {
        self.did_drag
    }

    /// Live preview shift in pixels.
    pub fn drag_x(&self) -> f64 {
        self.drag_x
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer_id.is_some()
    }

    pub fn is_settling(&self) -> bool {
        self.is_settling
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.pointer_id
    }

    pub fn phase(&self) -> DragPhase {
        if self.pointer_id.is_some() {
            DragPhase::Dragging
        } else if self.is_settling {
            DragPhase::Settling
        } else {
            DragPhase::Idle
        }
    }

    pub fn snapshot(&self) -> DragSnapshot {
        DragSnapshot {
            drag_x: self.drag_x,
            is_dragging: self.is_dragging(),
            is_settling: self.is_settling,
        }
    }

    /// Drops any active session and pending frame without emitting a shift.
    /// Call when the owning view is torn down, so no update lands on
    /// released state.
    pub fn reset(&mut self) {
        self.pointer_id = None;
        self.frame_pending = false;
        self.did_drag = false;
        self.drag_x = 0.0;
        self.is_settling = false;
    }

    fn release_shift(&self, dx: f64) -> Option<i64> {
        if !self.options.enabled
            || self.options.item_count == 0
            || self.options.card_step_px <= 0.0
        {
            return None;
        }

        let raw = dx / self.options.card_step_px;
        if raw.abs() < self.options.min_trigger_fraction {
            return None;
        }

        let mut shift = round_away_from_zero(raw);
        // crossing the threshold must always move at least one card
        if shift == 0 {
            shift = if raw > 0.0 { 1 } else { -1 };
        }

        let max = self.options.max_shift_per_release.max(0);
        Some(shift.clamp(-max, max))
    }
}

/// `f64::round` lives in `std`; this stays core-friendly and keeps ties away
/// from zero.
fn round_away_from_zero(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5) as i64
    } else {
        -((0.5 - x) as i64)
    }
}

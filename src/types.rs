use alloc::string::String;

/// Default item key type (a stable product id).
pub type ItemKey = u64;

/// Identifies one pointer for the lifetime of a gesture.
pub type PointerId = u64;

/// The input device class behind a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// Which button produced a pointer-down (only meaningful for mice).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
    Other,
}

/// One pointer event sample, as delivered by the UI layer.
///
/// Only the horizontal coordinate is carried; the carousel drags along a
/// single axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub kind: PointerKind,
    pub button: PointerButton,
    pub x: f64,
}

impl PointerEvent {
    pub fn mouse(pointer_id: PointerId, button: PointerButton, x: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Mouse,
            button,
            x,
        }
    }

    pub fn touch(pointer_id: PointerId, x: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Touch,
            button: PointerButton::Primary,
            x,
        }
    }

    pub fn pen(pointer_id: PointerId, x: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Pen,
            button: PointerButton::Primary,
            x,
        }
    }

    /// Mouse gestures start on the primary button only; touch and pen always
    /// qualify.
    pub(crate) fn starts_drag(&self) -> bool {
        self.kind != PointerKind::Mouse || self.button == PointerButton::Primary
    }
}

/// Which end of the base sequence a positive offset pulls to the front.
///
/// `TailFirst` is the storefront convention: a positive offset brings the
/// trailing items in front, so content appears to travel left under a "next"
/// action. `HeadFirst` inverts the sign for layouts that read the other way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationDirection {
    #[default]
    TailFirst,
    HeadFirst,
}

/// Where the drag state machine currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Viewport-derived measurements the engine consumes.
///
/// `capacity` is how many cards the viewport shows at once; `card_step_px` is
/// the pixel distance covered by one logical shift. Both are environment
/// measurements owned by the hosting layer; any values are accepted,
/// including zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub capacity: usize,
    pub card_step_px: f64,
}

impl Metrics {
    pub fn new(capacity: usize, card_step_px: f64) -> Self {
        Self {
            capacity,
            card_step_px,
        }
    }

    /// Derives metrics from a measured container width and per-card step.
    ///
    /// Non-finite or non-positive inputs degrade to zero capacity rather than
    /// erroring; downstream code already treats zero as "nothing fits".
    pub fn measure(container_px: f64, card_step_px: f64) -> Self {
        if !container_px.is_finite()
            || !card_step_px.is_finite()
            || container_px <= 0.0
            || card_step_px <= 0.0
        {
            cwarn!(container_px, card_step_px, "Metrics::measure: degenerate input");
            return Self {
                capacity: 0,
                card_step_px: card_step_px.max(0.0),
            };
        }
        Self {
            capacity: (container_px / card_step_px) as usize,
            card_step_px,
        }
    }
}

/// A payload occupying one slot of the base sequence.
///
/// Looping triplicates the item list, so the same payload can appear three
/// times; `carousel_id` stays unique and stable per duplicate so render
/// identity never collides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayItem<P> {
    /// Render identity, unique within the base sequence.
    pub carousel_id: String,
    /// Position within the base sequence.
    pub index: usize,
    pub item: P,
}

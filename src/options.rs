use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::types::{ItemKey, RotationDirection};

/// A callback fired when the carousel's rotation state changes.
pub type OnChangeCallback<P, K> = Arc<dyn Fn(&Carousel<P, K>) + Send + Sync>;

/// Maps a payload to its stable identity key.
///
/// The key must be stable across rebuilds: it is baked into each slot's
/// `carousel_id`, which render layers use as element identity.
pub type GetItemKey<P, K> = Arc<dyn Fn(&P) -> K + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the key extractor and callback are stored in `Arc`s so
/// callers can tweak a field and hand the result to `set_options` without
/// reallocating closures.
pub struct CarouselOptions<P, K = ItemKey> {
    /// How many cards the viewport fits at once. Looping engages only when
    /// there are more items than this.
    pub capacity: usize,
    /// Sign convention for the rotation; see [`RotationDirection`].
    pub direction: RotationDirection,
    pub get_item_key: GetItemKey<P, K>,
    /// Optional callback fired after every rotation state change.
    pub on_change: Option<OnChangeCallback<P, K>>,
}

impl<P, K> CarouselOptions<P, K> {
    pub fn new(capacity: usize, get_item_key: impl Fn(&P) -> K + Send + Sync + 'static) -> Self {
        Self {
            capacity,
            direction: RotationDirection::default(),
            get_item_key: Arc::new(get_item_key),
            on_change: None,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_direction(mut self, direction: RotationDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(&P) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel<P, K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<P, K> Clone for CarouselOptions<P, K> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            direction: self.direction,
            get_item_key: Arc::clone(&self.get_item_key),
            on_change: self.on_change.clone(),
        }
    }
}

impl<P, K> core::fmt::Debug for CarouselOptions<P, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("capacity", &self.capacity)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::DragMachine`].
///
/// `enabled`, `card_step_px` and `item_count` mirror upstream state (the loop
/// flag, layout metrics and base sequence length) and are kept in sync by the
/// owning component; the remaining fields are tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOptions {
    /// Whether gestures are accepted at all.
    pub enabled: bool,
    /// Pixel distance covered by one logical shift. Non-positive values
    /// suppress shift emission entirely.
    pub card_step_px: f64,
    /// Base sequence length; zero suppresses shift emission.
    pub item_count: usize,
    /// Fraction of one card step a release must have travelled to trigger a
    /// shift.
    pub min_trigger_fraction: f64,
    /// Released shifts are clamped to this many steps either way.
    pub max_shift_per_release: i64,
    /// Gestures travelling at least this many pixels cancel the pending
    /// click.
    pub click_suppress_px: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            card_step_px: 0.0,
            item_count: 0,
            min_trigger_fraction: 0.35,
            max_shift_per_release: 8,
            click_suppress_px: 8.0,
        }
    }
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_card_step_px(mut self, card_step_px: f64) -> Self {
        self.card_step_px = card_step_px;
        self
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_min_trigger_fraction(mut self, min_trigger_fraction: f64) -> Self {
        self.min_trigger_fraction = min_trigger_fraction;
        self
    }

    pub fn with_max_shift_per_release(mut self, max_shift_per_release: i64) -> Self {
        self.max_shift_per_release = max_shift_per_release;
        self
    }

    pub fn with_click_suppress_px(mut self, click_suppress_px: f64) -> Self {
        self.click_suppress_px = click_suppress_px;
        self
    }
}

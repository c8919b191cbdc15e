use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::types::DisplayItem;

/// The base sequence the rotation logic sees: the item list as-is, or the
/// list laid end to end three times when there are more items than the
/// viewport fits.
///
/// Building is pure: equal inputs yield an equal track, so the owner keeps a
/// track until the item list or the loop flag changes and rebuilds only then.
#[derive(Clone, Debug)]
pub struct Track<P> {
    base: Vec<DisplayItem<P>>,
    loop_enabled: bool,
}

impl<P: Clone> Track<P> {
    /// Decides looping and lays out the base sequence.
    ///
    /// Looping requires more items than `capacity`; an empty list never
    /// loops. When looping, each slot's `carousel_id` combines the item key
    /// with the slot position, so the three duplicates of an item stay
    /// distinct; otherwise the key is used verbatim.
    pub fn build<K, F>(items: &[P], capacity: usize, get_item_key: F) -> Self
    where
        K: core::fmt::Display,
        F: Fn(&P) -> K,
    {
        let loop_enabled = items.len() > capacity && !items.is_empty();
        let copies = if loop_enabled { 3 } else { 1 };

        let mut base = Vec::with_capacity(items.len() * copies);
        for copy in 0..copies {
            for (i, item) in items.iter().enumerate() {
                let index = copy * items.len() + i;
                let key = get_item_key(item);
                let carousel_id = if loop_enabled {
                    format!("{key}-dup-{index}")
                } else {
                    key.to_string()
                };
                base.push(DisplayItem {
                    carousel_id,
                    index,
                    item: item.clone(),
                });
            }
        }

        cdebug!(
            items = items.len(),
            capacity,
            loop_enabled,
            "Track::build"
        );
        Self { base, loop_enabled }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// All slots in base order.
    pub fn slots(&self) -> &[DisplayItem<P>] {
        &self.base
    }

    pub fn get(&self, index: usize) -> Option<&DisplayItem<P>> {
        self.base.get(index)
    }
}

//! A headless infinite-loop carousel engine.
//!
//! For storefront-level utilities (product values, tab sorting, cached
//! retrieval, a framework-neutral controller), see the `carousel-adapter`
//! crate.
//!
//! This crate focuses on the discrete state and arithmetic behind a
//! pointer-draggable, endlessly looping card strip: a virtual rotation over a
//! finite item list, and a drag state machine that turns raw pointer movement
//! into page shifts, with frame-coalesced previews and click suppression.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - viewport measurements (visible card capacity, pixel step per card)
//! - pointer events (down/move/up/cancel) from a single draggable surface
//! - one animation-frame callback whenever the engine reports `needs_frame`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod drag;
mod options;
mod rotation;
mod state;
mod track;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use drag::DragMachine;
pub use options::{CarouselOptions, DragOptions, GetItemKey, OnChangeCallback};
pub use rotation::mod_floor;
pub use state::{DragSnapshot, FrameState, RotationState};
pub use track::Track;
pub use types::{
    DisplayItem, DragPhase, ItemKey, Metrics, PointerButton, PointerEvent, PointerId, PointerKind,
    RotationDirection,
};

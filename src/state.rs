/// A lightweight snapshot of the live drag preview: what a render layer reads
/// each frame to position and style the strip.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSnapshot {
    /// Live preview shift in pixels while a gesture is active.
    pub drag_x: f64,
    pub is_dragging: bool,
    /// True for exactly one frame after a release, so the snap to the new
    /// rotation renders without a transition.
    pub is_settling: bool,
}

/// A lightweight snapshot of the rotation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationState {
    pub offset: i64,
}

/// A combined render-boundary snapshot for one frame.
///
/// Useful for restoring UI state across frames or sessions without coupling
/// the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub rotation: RotationState,
    pub drag: DragSnapshot,
}

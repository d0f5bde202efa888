//! Per-floor call-button state.

/// Activation flags for one floor's up/down call buttons.
///
/// The layout suppresses the down triangle on the bottom floor and the up
/// triangle on the top floor; the model is free to leave those flags false.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorControls {
    pub up_active:   bool,
    pub down_active: bool,
}

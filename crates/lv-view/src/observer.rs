//! Frame lifecycle callbacks for hosts that want to watch the driver work.

use lv_core::SimTime;
use lv_scene::Scene;

use crate::error::ViewError;
use crate::graph::GraphSample;

/// Callbacks invoked by [`ViewDriver::update_with`][crate::ViewDriver::update_with]
/// at key points in a render pass.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait FrameObserver {
    /// A scene was composed and handed to the surface.
    fn on_frame(&mut self, _clock: SimTime, _scene: &Scene) {}

    /// Newly drained trips were remapped and pushed to the graph.
    fn on_trips(&mut self, _samples: &[GraphSample]) {}

    /// The pass aborted; the previous frame stays on screen.
    fn on_render_error(&mut self, _error: &ViewError) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopFrameObserver;

impl FrameObserver for NoopFrameObserver {}

//! The update/render driver.

use lv_model::{ModelSource, OutputSource, RuleSink};
use lv_scene::{Scene, SceneComposer};

use crate::error::ViewResult;
use crate::graph::{GraphSample, TripGraph};
use crate::menu::MenuAction;
use crate::observer::{FrameObserver, NoopFrameObserver};

/// Share of the viewport height given to the elevator scene; the remainder
/// is reserved for the trend-graph tab below it.
pub const SCENE_HEIGHT_FRACTION: f64 = 0.7;

/// The host's drawing target.  A draw replaces the previous frame wholesale;
/// the driver never patches a frame incrementally.
pub trait RenderSurface {
    fn draw(&mut self, scene: &Scene);
}

/// Viewport dimensions of the host's drawing area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width:  f64,
    pub height: f64,
}

/// Drives one full re-render per model change notification.
///
/// Owns the model handle, the surface, and the graph handle for the life of
/// the view.  Entity cardinalities are read from the first snapshot and
/// frozen — a model whose entity counts change needs a new driver.  Viewport
/// resizes are supported via [`set_viewport`][Self::set_viewport].
///
/// On a failed pass the surface is left untouched, so the last good frame
/// persists rather than a partially projected one.
pub struct ViewDriver<M, S, G> {
    model:    M,
    surface:  S,
    graph:    G,
    composer: SceneComposer,
    viewport: Viewport,
    counts:   (u32, u32, u32),
}

impl<M, S, G> ViewDriver<M, S, G>
where
    M: ModelSource + OutputSource + RuleSink,
    S: RenderSurface,
    G: TripGraph,
{
    /// Build a driver; takes one snapshot to learn the entity cardinalities.
    pub fn new(model: M, surface: S, graph: G, viewport: Viewport) -> Self {
        let snap = model.snapshot();
        let counts = (snap.num_floors(), snap.num_elevators(), snap.num_people());
        Self {
            composer: Self::make_composer(viewport, counts),
            model,
            surface,
            graph,
            viewport,
            counts,
        }
    }

    fn make_composer(viewport: Viewport, counts: (u32, u32, u32)) -> SceneComposer {
        let (floors, elevators, people) = counts;
        SceneComposer::new(
            viewport.width,
            viewport.height * SCENE_HEIGHT_FRACTION,
            floors,
            elevators,
            people,
        )
    }

    /// The sole entry point the host calls after any model mutation.
    ///
    /// Snapshot → compose → draw → drain trips → push to the graph.  Safe to
    /// call redundantly: with an unchanged model it redraws the identical
    /// scene and pushes nothing.
    pub fn update(&mut self) -> ViewResult<()> {
        self.update_with(&mut NoopFrameObserver)
    }

    /// [`update`][Self::update] with frame lifecycle callbacks.
    pub fn update_with<O: FrameObserver>(&mut self, observer: &mut O) -> ViewResult<()> {
        let clock = self.model.clock();
        let snap = self.model.snapshot();
        let highlights = self.model.highlights();

        let scene = match self.composer.compose(&snap, clock, &highlights) {
            Ok(scene) => scene,
            Err(e) => {
                let err = e.into();
                observer.on_render_error(&err);
                return Err(err);
            }
        };

        self.surface.draw(&scene);
        observer.on_frame(clock, &scene);

        let output = self.model.take_output();
        if !output.is_empty() {
            let samples: Vec<GraphSample> =
                output.trips.into_iter().map(GraphSample::from).collect();
            observer.on_trips(&samples);
            self.graph.push(samples);
        }
        Ok(())
    }

    /// Forward a selected menu entry to the model's rule-firing mechanism.
    ///
    /// Fire-and-forget: the model may reject or no-op silently, and its
    /// resulting state change (if any) arrives through the normal change
    /// notification → [`update`][Self::update] path.
    pub fn invoke(&mut self, action: MenuAction) {
        self.model.fire_rule(action.rule_name(), action.target());
    }

    /// Adopt a new viewport size.  The next `update` renders at the new
    /// geometry; entity counts stay frozen.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.composer = Self::make_composer(viewport, self.counts);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

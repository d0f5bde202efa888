//! Unit tests for the view driver and menus.

use lv_core::{ElevatorId, FloorId, PersonId, SimTime, Span};
use lv_model::{
    Direction, ElevatorState, FloorControls, HighlightSet, Location, ModelOutput,
    ModelSnapshot, ModelSource, OutputSource, PersonState, RuleSink, TripRecord,
};
use lv_scene::Scene;

use crate::{
    ElevatorAction, ElevatorHandle, GraphSample, Hoverable, MenuAction, MenuBound,
    PersonAction, PersonHandle, RenderSurface, TripGraph, ViewDriver, Viewport,
};

// ── Test doubles ──────────────────────────────────────────────────────────────

struct StubModel {
    clock:   SimTime,
    snap:    ModelSnapshot,
    pending: Vec<TripRecord>,
    fired:   Vec<(String, u32)>,
}

impl StubModel {
    fn new(snap: ModelSnapshot) -> Self {
        Self {
            clock:   SimTime(0.0),
            snap,
            pending: Vec::new(),
            fired:   Vec::new(),
        }
    }
}

impl ModelSource for StubModel {
    fn clock(&self) -> SimTime {
        self.clock
    }

    fn snapshot(&self) -> ModelSnapshot {
        self.snap.clone()
    }

    fn highlights(&self) -> HighlightSet {
        HighlightSet::default()
    }
}

impl OutputSource for StubModel {
    fn take_output(&mut self) -> ModelOutput {
        ModelOutput { trips: std::mem::take(&mut self.pending) }
    }
}

impl RuleSink for StubModel {
    fn fire_rule(&mut self, rule: &str, target: u32) {
        self.fired.push((rule.to_owned(), target));
    }
}

#[derive(Default)]
struct RecordingSurface {
    frames: Vec<Scene>,
}

impl RenderSurface for RecordingSurface {
    fn draw(&mut self, scene: &Scene) {
        self.frames.push(scene.clone());
    }
}

#[derive(Default)]
struct RecordingGraph {
    batches: Vec<Vec<GraphSample>>,
}

impl TripGraph for RecordingGraph {
    fn push(&mut self, samples: Vec<GraphSample>) {
        self.batches.push(samples);
    }
}

fn small_snapshot() -> ModelSnapshot {
    ModelSnapshot {
        elevators: vec![ElevatorState::parked(FloorId(2), Direction::Up)],
        people: vec![PersonState::Waiting {
            floor:       FloorId(1),
            destination: FloorId(3),
        }],
        floor_controls: vec![FloorControls::default(); 3],
    }
}

fn make_driver(
    model: StubModel,
) -> ViewDriver<StubModel, RecordingSurface, RecordingGraph> {
    ViewDriver::new(
        model,
        RecordingSurface::default(),
        RecordingGraph::default(),
        Viewport { width: 1000.0, height: 1000.0 },
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod update {
    use super::*;

    #[test]
    fn draws_one_frame_per_update() {
        let mut driver = make_driver(StubModel::new(small_snapshot()));
        driver.update().unwrap();
        driver.update().unwrap();
        assert_eq!(driver.surface().frames.len(), 2);
        // identical model state → bit-identical frames
        assert_eq!(driver.surface().frames[0], driver.surface().frames[1]);
    }

    #[test]
    fn remaps_and_pushes_drained_trips() {
        let mut model = StubModel::new(small_snapshot());
        model.pending = vec![TripRecord {
            person: PersonId(1),
            board:  SimTime(4.0),
            end:    SimTime(9.0),
        }];
        let mut driver = make_driver(model);

        driver.update().unwrap();
        let batches = &driver.graph().batches;
        assert_eq!(batches.len(), 1);
        assert_eq!(
            batches[0],
            vec![GraphSample {
                person:  PersonId(1),
                waiting: SimTime(4.0),
                riding:  SimTime(9.0),
            }]
        );

        // drained — the next pass pushes nothing
        driver.update().unwrap();
        assert_eq!(driver.graph().batches.len(), 1);
    }

    #[test]
    fn failed_pass_leaves_the_surface_untouched() {
        let mut snap = small_snapshot();
        snap.elevators[0].location = Location::Between {
            span: Span::new(20.0, 10.0), // inverted
            next: FloorId(3),
        };
        let mut driver = make_driver(StubModel::new(snap));

        assert!(driver.update().is_err());
        assert!(driver.surface().frames.is_empty());
        assert!(driver.graph().batches.is_empty());
    }

    #[test]
    fn resize_changes_the_rendered_geometry() {
        let mut driver = make_driver(StubModel::new(small_snapshot()));
        driver.update().unwrap();
        driver.set_viewport(Viewport { width: 500.0, height: 500.0 });
        driver.update().unwrap();

        let frames = &driver.surface().frames;
        assert_ne!(frames[0], frames[1]);
        assert_eq!(driver.viewport(), Viewport { width: 500.0, height: 500.0 });
    }
}

#[cfg(test)]
mod menus {
    use super::*;

    #[test]
    fn invoke_forwards_rule_name_and_target() {
        let mut driver = make_driver(StubModel::new(small_snapshot()));
        driver.invoke(MenuAction::Elevator(ElevatorId(1), ElevatorAction::ChangeDirection));
        driver.invoke(MenuAction::Person(PersonId(1), PersonAction::Wake));
        assert_eq!(
            driver.model().fired,
            vec![
                ("changeDirection".to_owned(), 1),
                ("wake".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn elevator_menu_is_complete_and_ordered() {
        let names: Vec<_> = ElevatorAction::ALL.iter().map(|a| a.rule_name()).collect();
        assert_eq!(names, vec!["move", "moveDoors", "changeDirection", "clearControl"]);
    }

    #[test]
    fn person_menu_is_complete_and_ordered() {
        let names: Vec<_> = PersonAction::ALL.iter().map(|a| a.rule_name()).collect();
        assert_eq!(names, vec!["wake", "boardOrLeave", "leave"]);
    }

    #[test]
    fn handles_bind_to_stable_anchors() {
        let ev = ElevatorHandle { id: ElevatorId(2) };
        assert_eq!(ev.anchor_id(), "elevator-2");
        assert_eq!(ev.actions().len(), 4);
        assert_eq!(ev.actions()[0], MenuAction::Elevator(ElevatorId(2), ElevatorAction::Move));

        let p = PersonHandle { id: PersonId(5) };
        assert_eq!(p.anchor_id(), "person-5");
        assert_eq!(p.actions()[2], MenuAction::Person(PersonId(5), PersonAction::Leave));
    }
}

#[cfg(test)]
mod observer {
    use super::*;
    use crate::{FrameObserver, ViewError};

    #[derive(Default)]
    struct CountingObserver {
        frames: usize,
        trips:  usize,
        errors: usize,
    }

    impl FrameObserver for CountingObserver {
        fn on_frame(&mut self, _clock: SimTime, _scene: &Scene) {
            self.frames += 1;
        }

        fn on_trips(&mut self, samples: &[GraphSample]) {
            self.trips += samples.len();
        }

        fn on_render_error(&mut self, _error: &ViewError) {
            self.errors += 1;
        }
    }

    #[test]
    fn callbacks_fire_in_order() {
        let mut model = StubModel::new(small_snapshot());
        model.pending = vec![TripRecord {
            person: PersonId(1),
            board:  SimTime(1.0),
            end:    SimTime(2.0),
        }];
        let mut driver = make_driver(model);
        let mut obs = CountingObserver::default();

        driver.update_with(&mut obs).unwrap();
        assert_eq!(obs.frames, 1);
        assert_eq!(obs.trips, 1);
        assert_eq!(obs.errors, 0);
    }

    #[test]
    fn error_callback_fires_on_failed_pass() {
        let mut snap = small_snapshot();
        snap.elevators[0].location = Location::Between {
            span: Span::new(1.0, 1.0),
            next: FloorId(2),
        };
        let mut driver = make_driver(StubModel::new(snap));
        let mut obs = CountingObserver::default();

        assert!(driver.update_with(&mut obs).is_err());
        assert_eq!(obs.frames, 0);
        assert_eq!(obs.errors, 1);
    }
}

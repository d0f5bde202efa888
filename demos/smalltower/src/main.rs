//! smalltower — smallest demo for the liftview visualization workspace.
//!
//! Scripts a 3-floor, 1-elevator, 2-person building through one full trip
//! (call → descend → board → ride → leave), rendering every keyframe
//! through the real driver.  Writes the final frame as `smalltower.svg` and
//! `smalltower.json` in the working directory.

mod svg;

use std::fs;

use anyhow::{Context, Result};

use lv_core::{ElevatorId, FloorId, PersonId, SimTime, Span};
use lv_model::{
    Direction, DoorState, ElevatorState, FloorCall, FloorControls, HighlightSet,
    Location, ModelOutput, ModelSnapshot, ModelSource, OutputSource, PersonState,
    RuleSink, TripRecord,
};
use lv_scene::Scene;
use lv_view::{
    ElevatorAction, FrameObserver, GraphSample, MenuAction, RenderSurface, TripGraph,
    ViewDriver, Viewport,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const VIEW_W: f64 = 800.0;
const VIEW_H: f64 = 600.0;

// ── Scripted model ────────────────────────────────────────────────────────────

/// One keyframe of the scripted run.
struct Frame {
    clock: f64,
    snap:  ModelSnapshot,
    trips: Vec<TripRecord>,
}

/// A canned stand-in for the external state machine: plays back a fixed
/// sequence of snapshots and emits trips at the scripted moments.
struct ScriptedModel {
    frames:  Vec<Frame>,
    current: usize,
    pending: Vec<TripRecord>,
}

impl ScriptedModel {
    fn new(frames: Vec<Frame>) -> Self {
        Self { frames, current: 0, pending: Vec::new() }
    }

    /// Move to the next keyframe; false when the script is exhausted.
    fn advance(&mut self) -> bool {
        if self.current + 1 >= self.frames.len() {
            return false;
        }
        self.current += 1;
        self.pending.extend(self.frames[self.current].trips.iter().copied());
        true
    }
}

impl ModelSource for ScriptedModel {
    fn clock(&self) -> SimTime {
        SimTime(self.frames[self.current].clock)
    }

    fn snapshot(&self) -> ModelSnapshot {
        self.frames[self.current].snap.clone()
    }

    fn highlights(&self) -> HighlightSet {
        HighlightSet::default()
    }
}

impl OutputSource for ScriptedModel {
    fn take_output(&mut self) -> ModelOutput {
        ModelOutput { trips: std::mem::take(&mut self.pending) }
    }
}

impl RuleSink for ScriptedModel {
    fn fire_rule(&mut self, rule: &str, target: u32) {
        // A real controller would run this inside a state transition; the
        // script just reports what the menu asked for.
        println!("  rule fired: {rule}({target})");
    }
}

// ── Script ────────────────────────────────────────────────────────────────────

fn base_snapshot() -> ModelSnapshot {
    ModelSnapshot {
        elevators: vec![ElevatorState {
            location: Location::AtFloor {
                floor: FloorId(2),
                doors: DoorState::Closed,
            },
            direction:   Direction::Down,
            riders:      Vec::new(),
            floor_calls: vec![FloorCall { floor: FloorId(1) }],
        }],
        people: vec![
            PersonState::Waiting { floor: FloorId(1), destination: FloorId(3) },
            PersonState::Sleeping { floor: FloorId(2) },
        ],
        floor_controls: vec![
            FloorControls { up_active: true, down_active: false },
            FloorControls::default(),
            FloorControls::default(),
        ],
    }
}

/// The whole run: person 1 calls from floor 1, the car descends from
/// floor 2, doors cycle, person 1 rides to floor 3 and leaves.
fn script() -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut snap = base_snapshot();

    let mut push = |clock: f64, snap: &ModelSnapshot, trips: Vec<TripRecord>| {
        frames.push(Frame { clock, snap: snap.clone(), trips });
    };

    // Parked at floor 2, call pending below.
    push(0.0, &snap, vec![]);

    // Descend toward floor 1 over [1, 3] — two mid-transit keyframes show
    // the interpolation.
    snap.elevators[0].location = Location::Between {
        span: Span::new(1.0, 3.0),
        next: FloorId(1),
    };
    push(1.0, &snap, vec![]);
    push(2.0, &snap, vec![]);

    // Arrive, open the doors, clear the call.
    snap.elevators[0].location = Location::AtFloor {
        floor: FloorId(1),
        doors: DoorState::Opening(Span::new(3.0, 4.0)),
    };
    snap.elevators[0].direction = Direction::Up;
    snap.elevators[0].floor_calls.clear();
    push(3.0, &snap, vec![]);
    push(3.5, &snap, vec![]);

    // Person 1 boards.
    snap.elevators[0].location = Location::AtFloor {
        floor: FloorId(1),
        doors: DoorState::Open,
    };
    snap.elevators[0].riders = vec![PersonId(1)];
    snap.people[0] = PersonState::Riding {
        elevator:    ElevatorId(1),
        destination: FloorId(3),
    };
    snap.floor_controls[0].up_active = false;
    push(4.0, &snap, vec![]);

    // Doors close, ride up to floor 3.
    snap.elevators[0].location = Location::AtFloor {
        floor: FloorId(1),
        doors: DoorState::Closing(Span::new(5.0, 6.0)),
    };
    push(5.0, &snap, vec![]);

    snap.elevators[0].location = Location::Between {
        span: Span::new(6.0, 10.0),
        next: FloorId(3),
    };
    push(7.0, &snap, vec![]);
    push(9.0, &snap, vec![]);

    // Arrive and let person 1 out: the trip completes.
    snap.elevators[0].location = Location::AtFloor {
        floor: FloorId(3),
        doors: DoorState::Open,
    };
    snap.elevators[0].riders.clear();
    snap.people[0] = PersonState::Sleeping { floor: FloorId(3) };
    push(
        10.0,
        &snap,
        vec![TripRecord {
            person: PersonId(1),
            board:  SimTime(4.0),
            end:    SimTime(10.0),
        }],
    );

    frames
}

// ── Host-side collaborators ───────────────────────────────────────────────────

/// Keeps the last drawn frame so it can be written out at the end.
#[derive(Default)]
struct LastFrameSurface {
    last: Option<Scene>,
}

impl RenderSurface for LastFrameSurface {
    fn draw(&mut self, scene: &Scene) {
        self.last = Some(scene.clone());
    }
}

/// Collects everything pushed toward the trend graph.
#[derive(Default)]
struct CollectingGraph {
    samples: Vec<GraphSample>,
}

impl TripGraph for CollectingGraph {
    fn push(&mut self, samples: Vec<GraphSample>) {
        self.samples.extend(samples);
    }
}

/// Prints a one-line summary per frame.
struct PrintObserver;

impl FrameObserver for PrintObserver {
    fn on_frame(&mut self, clock: SimTime, scene: &Scene) {
        println!("frame {clock}: {} primitives", scene.primitive_count());
    }

    fn on_trips(&mut self, samples: &[GraphSample]) {
        for s in samples {
            println!(
                "  trip complete: {} waited until {}, rode until {}",
                s.person, s.waiting, s.riding
            );
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let model = ScriptedModel::new(script());
    let mut driver = ViewDriver::new(
        model,
        LastFrameSurface::default(),
        CollectingGraph::default(),
        Viewport { width: VIEW_W, height: VIEW_H },
    );

    let mut observer = PrintObserver;
    loop {
        driver.update_with(&mut observer)?;
        if !driver.model_mut().advance() {
            break;
        }
    }

    // Exercise the menu path once: ask the car to move again.
    driver.invoke(MenuAction::Elevator(ElevatorId(1), ElevatorAction::Move));

    let scene = driver
        .surface()
        .last
        .as_ref()
        .context("no frame was drawn")?;
    fs::write("smalltower.svg", svg::render(scene, VIEW_W, VIEW_H))
        .context("writing smalltower.svg")?;
    fs::write("smalltower.json", serde_json::to_string_pretty(scene)?)
        .context("writing smalltower.json")?;
    println!(
        "wrote smalltower.svg and smalltower.json ({} graph samples collected)",
        driver.graph().samples.len()
    );
    Ok(())
}

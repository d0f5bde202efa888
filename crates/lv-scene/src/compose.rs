//! The full-scene rebuild.

use lv_core::{BBox, Color, ElevatorId, FloorId, Point, SimTime};
use lv_layout::{font_size, Layout};
use lv_model::{
    elevator::elevator_anchor, person::person_anchor, ElevatorState, HighlightSet,
    ModelSnapshot, PersonState,
};
use rustc_hash::FxHashSet;

use crate::error::{SceneError, SceneResult};
use crate::primitive::{EntityGroup, Marker, Primitive, Scene};
use crate::projection;

/// Radius of a destination-marker dot.
const DEST_RADIUS: f64 = 2.0;

/// Composes one [`Scene`] per render pass.
///
/// Holds only the [`Layout`] — which is fixed by the viewport size and the
/// entity cardinalities, both set at construction.  Rebuild the composer on
/// viewport resize; entity counts changing at runtime requires
/// re-initializing the whole view.
///
/// `compose` is a pure function of its arguments: identical snapshot, clock,
/// and highlights produce a bit-identical scene.
#[derive(Copy, Clone, Debug)]
pub struct SceneComposer {
    layout: Layout,
}

impl SceneComposer {
    pub fn new(width: f64, height: f64, floors: u32, elevators: u32, people: u32) -> Self {
        Self {
            layout: Layout::new(width, height, floors, elevators, people),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Build the complete scene, in draw order: background, destination
    /// markers, elevators, floor controls, people.
    ///
    /// Fails (and emits nothing) on the first projection error, so a partial
    /// or mixed frame can never reach the surface.
    pub fn compose(
        &self,
        snap:       &ModelSnapshot,
        clock:      SimTime,
        highlights: &HighlightSet,
    ) -> SceneResult<Scene> {
        Ok(Scene {
            background:     self.background(snap),
            destinations:   self.destinations(snap)?,
            elevators:      self.elevators(snap, clock, highlights)?,
            floor_controls: self.floor_controls(snap)?,
            people:         self.people(snap, clock, highlights)?,
        })
    }

    // ── Background: floor separator lines and numeric labels ──────────────

    fn background(&self, snap: &ModelSnapshot) -> Vec<Primitive> {
        let floors = snap.num_floors();
        let mut out = Vec::with_capacity(floors as usize * 2 + 1);

        // One separator under every band, plus one above the top band.
        for id in 1..=floors + 1 {
            let band = self.layout.floor_band(id as f64);
            out.push(Primitive::Line {
                from:       Point::new(band.x, band.y2()),
                to:         Point::new(band.x2(), band.y2()),
                stroke:     Color::GRAY,
                marker_end: None,
            });
        }

        for id in 1..=floors {
            let bbox = self.layout.label(FloorId(id));
            out.push(Primitive::Text {
                origin:  Point::new(bbox.x, bbox.y2()),
                size:    font_size(&bbox),
                fill:    Color::BLACK,
                bold:    false,
                content: id.to_string(),
            });
        }
        out
    }

    // ── Destination markers ───────────────────────────────────────────────

    /// One dot per (elevator, floor) pair where the floor is a pending hall
    /// call or a current rider's destination; deduplicated, sorted for
    /// deterministic output.
    fn destinations(&self, snap: &ModelSnapshot) -> SceneResult<Vec<Primitive>> {
        let mut out = Vec::new();
        for (eid, ev) in snap.elevators_with_ids() {
            let mut floors: FxHashSet<u32> = FxHashSet::default();
            for call in &ev.floor_calls {
                floors.insert(call.floor.0);
            }
            for &pid in &ev.riders {
                match snap.person(pid)? {
                    PersonState::Riding { destination, .. } => {
                        floors.insert(destination.0);
                    }
                    _ => {
                        return Err(SceneError::RiderNotRiding { person: pid, elevator: eid });
                    }
                }
            }

            let mut floors: Vec<u32> = floors.into_iter().collect();
            floors.sort_unstable();
            for floor in floors {
                let bbox = self.layout.elevator(floor as f64, eid);
                out.push(Primitive::Circle {
                    center: bbox.center(),
                    radius: DEST_RADIUS,
                    fill:   Color::BLACK,
                });
            }
        }
        Ok(out)
    }

    // ── Elevators ─────────────────────────────────────────────────────────

    fn elevators(
        &self,
        snap:       &ModelSnapshot,
        clock:      SimTime,
        highlights: &HighlightSet,
    ) -> SceneResult<Vec<EntityGroup>> {
        snap.elevators_with_ids()
            .map(|(eid, ev)| {
                let bbox = self.car_box(ev, clock, eid)?;

                let frac = projection::door_fraction(
                    projection::active_doors(&ev.location),
                    clock,
                )?;
                let stroke = if highlights.elevator_active(clock, eid) {
                    Color::RED
                } else {
                    Color::BLACK
                };
                let (from, to) = projection::direction_arrow(ev.direction, &bbox);

                Ok(EntityGroup {
                    anchor: elevator_anchor(eid),
                    body:   vec![
                        Primitive::Rect {
                            bbox,
                            fill: Color::door_gray(frac),
                            stroke,
                        },
                        Primitive::Line {
                            from,
                            to,
                            stroke: Color::GREEN,
                            marker_end: Some(Marker::Triangle),
                        },
                    ],
                })
            })
            .collect()
    }

    fn car_box(
        &self,
        ev:    &ElevatorState,
        clock: SimTime,
        eid:   ElevatorId,
    ) -> SceneResult<BBox> {
        let floor = projection::elevator_floor(ev, clock)?;
        Ok(self.layout.elevator(floor, eid))
    }

    // ── Floor controls ────────────────────────────────────────────────────

    fn floor_controls(&self, snap: &ModelSnapshot) -> SceneResult<Vec<Primitive>> {
        let floors = snap.num_floors();
        let mut out = Vec::new();
        for id in 1..=floors {
            let floor = FloorId(id);
            let strip = self.layout.floor_controls(floor);
            let controls = snap.floor_controls(floor)?;

            // No up calls exist on the top floor, no down calls on floor 1.
            if id != floors {
                out.push(Primitive::Polygon {
                    points: projection::up_triangle(&strip).to_vec(),
                    fill:   active_fill(controls.up_active),
                });
            }
            if id != 1 {
                out.push(Primitive::Polygon {
                    points: projection::down_triangle(&strip).to_vec(),
                    fill:   active_fill(controls.down_active),
                });
            }
        }
        Ok(out)
    }

    // ── People ────────────────────────────────────────────────────────────

    fn people(
        &self,
        snap:       &ModelSnapshot,
        clock:      SimTime,
        highlights: &HighlightSet,
    ) -> SceneResult<Vec<EntityGroup>> {
        snap.people_with_ids()
            .map(|(pid, person)| {
                let bbox = match *person {
                    PersonState::Sleeping { floor } | PersonState::Waiting { floor, .. } => {
                        self.layout.person(floor, pid)
                    }
                    PersonState::Riding { elevator, .. } => {
                        let ev = snap.elevator(elevator)?;
                        let car = self.car_box(ev, clock, elevator)?;
                        let index = ev.rider_index(pid).ok_or(SceneError::RiderNotListed {
                            person:   pid,
                            elevator,
                        })?;
                        projection::rider_box(&car, ev.riders.len(), index)
                    }
                };

                let highlighted = highlights.person_active(clock, pid);
                Ok(EntityGroup {
                    anchor: person_anchor(pid),
                    body:   vec![Primitive::Text {
                        origin:  Point::new(bbox.x, bbox.y2()),
                        size:    font_size(&bbox),
                        fill:    if highlighted { Color::RED } else { Color::BLACK },
                        bold:    highlighted,
                        content: person.label(),
                    }],
                })
            })
            .collect()
    }
}

fn active_fill(active: bool) -> Color {
    if active { Color::RED } else { Color::GRAY }
}

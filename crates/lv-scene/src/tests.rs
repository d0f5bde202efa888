//! Unit tests for projection and scene composition.

use lv_core::{BBox, Color, ElevatorId, FloorId, PersonId, SimTime, Span};
use lv_model::{
    Direction, DoorState, ElevatorState, FloorCall, FloorControls, HighlightKind,
    HighlightRecord, HighlightSet, HighlightSubject, Location, ModelSnapshot, PersonState,
};

use crate::{projection, SceneComposer, SceneError, Primitive};

const W: f64 = 1000.0;
const H: f64 = 700.0;

fn composer(floors: u32, elevators: u32, people: u32) -> SceneComposer {
    SceneComposer::new(W, H, floors, elevators, people)
}

fn between(left_at: f64, next_at: f64, next: u32, direction: Direction) -> ElevatorState {
    ElevatorState {
        location: Location::Between {
            span: Span::new(left_at, next_at),
            next: FloorId(next),
        },
        direction,
        riders:      Vec::new(),
        floor_calls: Vec::new(),
    }
}

#[cfg(test)]
mod elevator_floor {
    use super::*;
    use crate::elevator_floor;

    #[test]
    fn at_floor_is_exact() {
        let ev = ElevatorState::parked(FloorId(2), Direction::Up);
        assert_eq!(elevator_floor(&ev, SimTime(123.0)).unwrap(), 2.0);
    }

    #[test]
    fn rising_car_sweeps_from_below() {
        let ev = between(10.0, 20.0, 3, Direction::Up);
        assert_eq!(elevator_floor(&ev, SimTime(10.0)).unwrap(), 2.0);
        assert_eq!(elevator_floor(&ev, SimTime(15.0)).unwrap(), 2.5);
        assert_eq!(elevator_floor(&ev, SimTime(20.0)).unwrap(), 3.0);
    }

    #[test]
    fn descending_car_sweeps_from_above() {
        let ev = between(10.0, 20.0, 2, Direction::Down);
        assert_eq!(elevator_floor(&ev, SimTime(10.0)).unwrap(), 3.0);
        assert_eq!(elevator_floor(&ev, SimTime(15.0)).unwrap(), 2.5);
        assert_eq!(elevator_floor(&ev, SimTime(20.0)).unwrap(), 2.0);
    }

    #[test]
    fn sweep_is_monotone() {
        let ev = between(0.0, 1.0, 5, Direction::Up);
        let mut prev = elevator_floor(&ev, SimTime(0.0)).unwrap();
        for i in 1..=100 {
            let f = elevator_floor(&ev, SimTime(i as f64 / 100.0)).unwrap();
            assert!(f >= prev, "position went backwards at step {i}");
            prev = f;
        }
        assert_eq!(prev, 5.0);
    }

    #[test]
    fn out_of_window_clock_clamps() {
        let ev = between(10.0, 20.0, 3, Direction::Up);
        assert_eq!(elevator_floor(&ev, SimTime(5.0)).unwrap(), 2.0);
        assert_eq!(elevator_floor(&ev, SimTime(25.0)).unwrap(), 3.0);
    }

    #[test]
    fn inverted_window_is_fatal() {
        let ev = between(20.0, 10.0, 3, Direction::Up);
        assert!(matches!(
            elevator_floor(&ev, SimTime(15.0)),
            Err(SceneError::Span(_))
        ));
    }
}

#[cfg(test)]
mod doors {
    use super::*;
    use crate::{active_doors, door_fraction};

    #[test]
    fn in_transit_doors_are_closed() {
        let ev = between(0.0, 10.0, 2, Direction::Up);
        assert_eq!(*active_doors(&ev.location), DoorState::Closed);
    }

    #[test]
    fn fraction_per_variant() {
        let clock = SimTime(15.0);
        assert_eq!(door_fraction(&DoorState::Closed, clock).unwrap(), 0.0);
        assert_eq!(door_fraction(&DoorState::Open, clock).unwrap(), 1.0);
        assert_eq!(
            door_fraction(&DoorState::Opening(Span::new(10.0, 20.0)), clock).unwrap(),
            0.5
        );
        assert_eq!(
            door_fraction(&DoorState::Closing(Span::new(10.0, 30.0)), clock).unwrap(),
            0.75
        );
    }

    #[test]
    fn inverted_animation_is_fatal() {
        let doors = DoorState::Opening(Span::new(20.0, 20.0));
        assert!(door_fraction(&doors, SimTime(20.0)).is_err());
    }
}

#[cfg(test)]
mod arrows {
    use super::*;
    use crate::direction_arrow;

    #[test]
    fn up_points_out_of_the_top_edge() {
        let b = BBox::new(10.0, 100.0, 20.0, 50.0);
        let (from, to) = direction_arrow(Direction::Up, &b);
        assert_eq!(from.x, b.cx());
        assert_eq!(from.y, b.y);
        assert_eq!(to.y, b.y - 4.0);
    }

    #[test]
    fn down_points_out_of_the_bottom_edge() {
        let b = BBox::new(10.0, 100.0, 20.0, 50.0);
        let (from, to) = direction_arrow(Direction::Down, &b);
        assert_eq!(from.y, b.y2());
        assert_eq!(to.y, b.y2() + 4.0);
    }
}

#[cfg(test)]
mod riders {
    use super::*;
    use crate::rider_box;

    #[test]
    fn offsets_are_distinct_and_sequence_ordered() {
        let car = BBox::new(100.0, 200.0, 40.0, 60.0);
        let boxes: Vec<BBox> = (0..3).map(|i| rider_box(&car, 3, i)).collect();
        assert!(boxes[0].x < boxes[1].x && boxes[1].x < boxes[2].x);
        // all raised above the car by 10% of its height
        for b in &boxes {
            assert_eq!(b.y, car.y - car.h * 0.1);
        }
    }

    #[test]
    fn source_box_is_never_mutated() {
        let car = BBox::new(100.0, 200.0, 40.0, 60.0);
        let _ = rider_box(&car, 2, 1);
        assert_eq!(car, BBox::new(100.0, 200.0, 40.0, 60.0));
    }
}

#[cfg(test)]
mod triangles {
    use super::*;

    #[test]
    fn up_triangle_apex_is_above_its_base() {
        let strip = BBox::new(750.0, 100.0, 5.0, 50.0);
        let pts = projection::up_triangle(&strip);
        // template order: base-left, base-right, apex
        assert!(pts[2].y < pts[0].y);
        assert_eq!(pts[0].y, pts[1].y);
    }

    #[test]
    fn down_triangle_apex_is_below_its_base() {
        let strip = BBox::new(750.0, 100.0, 5.0, 50.0);
        let pts = projection::down_triangle(&strip);
        assert!(pts[2].y > pts[0].y);
        assert_eq!(pts[0].y, pts[1].y);
    }

    #[test]
    fn both_triangles_sit_inside_the_strip() {
        let strip = BBox::new(750.0, 100.0, 5.0, 50.0);
        for p in projection::up_triangle(&strip)
            .into_iter()
            .chain(projection::down_triangle(&strip))
        {
            assert!(p.y >= strip.y && p.y <= strip.y2());
        }
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

fn rush_hour_snapshot() -> ModelSnapshot {
    // 3 floors, 1 parked elevator at floor 2, 1 person waiting on floor 1
    // for floor 3.
    ModelSnapshot {
        elevators: vec![ElevatorState::parked(FloorId(2), Direction::Up)],
        people: vec![PersonState::Waiting {
            floor:       FloorId(1),
            destination: FloorId(3),
        }],
        floor_controls: vec![FloorControls::default(); 3],
    }
}

#[cfg(test)]
mod compose {
    use super::*;

    #[test]
    fn end_to_end_parked_elevator_and_waiting_person() {
        let c = composer(3, 1, 1);
        let scene = c
            .compose(&rush_hour_snapshot(), SimTime(0.0), &HighlightSet::default())
            .unwrap();

        // Elevator: closed-door gray rect in floor 2's lane, plus an arrow.
        assert_eq!(scene.elevators.len(), 1);
        assert_eq!(scene.elevators[0].anchor, "elevator-1");
        let expected_box = c.layout().elevator(2.0, ElevatorId(1));
        match &scene.elevators[0].body[0] {
            Primitive::Rect { bbox, fill, stroke } => {
                assert_eq!(*bbox, expected_box);
                assert_eq!(fill.to_string(), "#555555");
                assert_eq!(*stroke, Color::BLACK);
            }
            other => panic!("expected a rect first, got {other:?}"),
        }
        assert!(matches!(scene.elevators[0].body[1], Primitive::Line { .. }));

        // Person: label "3" at the floor-1 people cell.
        assert_eq!(scene.people.len(), 1);
        assert_eq!(scene.people[0].anchor, "person-1");
        let cell = c.layout().person(FloorId(1), PersonId(1));
        match &scene.people[0].body[0] {
            Primitive::Text { origin, content, bold, fill, .. } => {
                assert_eq!(content, "3");
                assert_eq!(origin.x, cell.x);
                assert_eq!(origin.y, cell.y2());
                assert!(!*bold);
                assert_eq!(*fill, Color::BLACK);
            }
            other => panic!("expected a text label, got {other:?}"),
        }

        // Background: 4 separator lines + 3 labels.
        assert_eq!(scene.background.len(), 7);
    }

    #[test]
    fn compose_is_idempotent() {
        let c = composer(3, 2, 4);
        let mut snap = rush_hour_snapshot();
        snap.elevators.push(between(5.0, 15.0, 3, Direction::Up));
        let highlights = HighlightSet::default();
        let a = c.compose(&snap, SimTime(7.5), &highlights).unwrap();
        let b = c.compose(&snap, SimTime(7.5), &highlights).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn projection_error_aborts_the_whole_scene() {
        let c = composer(3, 1, 0);
        let snap = ModelSnapshot {
            elevators:      vec![between(20.0, 10.0, 2, Direction::Up)],
            people:         vec![],
            floor_controls: vec![FloorControls::default(); 3],
        };
        assert!(c
            .compose(&snap, SimTime(15.0), &HighlightSet::default())
            .is_err());
    }

    #[test]
    fn highlighted_elevator_gets_a_red_stroke() {
        let c = composer(3, 1, 1);
        let highlights = HighlightSet::new(vec![HighlightRecord {
            kind:    HighlightKind::TimeSegment(Span::new(0.0, 100.0)),
            subject: HighlightSubject::elevator(ElevatorId(1)),
        }]);
        let scene = c.compose(&rush_hour_snapshot(), SimTime(50.0), &highlights).unwrap();
        match &scene.elevators[0].body[0] {
            Primitive::Rect { stroke, .. } => assert_eq!(*stroke, Color::RED),
            other => panic!("expected a rect, got {other:?}"),
        }
    }

    #[test]
    fn highlighted_person_is_bold_and_red() {
        let c = composer(3, 1, 1);
        let highlights = HighlightSet::new(vec![HighlightRecord {
            kind:    HighlightKind::TimeSegment(Span::new(0.0, 100.0)),
            subject: HighlightSubject::person(PersonId(1)),
        }]);
        let scene = c.compose(&rush_hour_snapshot(), SimTime(50.0), &highlights).unwrap();
        match &scene.people[0].body[0] {
            Primitive::Text { bold, fill, .. } => {
                assert!(*bold);
                assert_eq!(*fill, Color::RED);
            }
            other => panic!("expected a text label, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod destinations {
    use super::*;

    /// Elevator 1 has a floor call at 2 and one rider bound for 4:
    /// exactly two markers, on floors 2 and 4.
    #[test]
    fn call_and_rider_destination_both_marked() {
        let c = composer(5, 1, 1);
        let mut ev = ElevatorState::parked(FloorId(1), Direction::Up);
        ev.floor_calls = vec![FloorCall { floor: FloorId(2) }];
        ev.riders = vec![PersonId(1)];
        let snap = ModelSnapshot {
            elevators: vec![ev],
            people: vec![PersonState::Riding {
                elevator:    ElevatorId(1),
                destination: FloorId(4),
            }],
            floor_controls: vec![FloorControls::default(); 5],
        };

        let scene = c.compose(&snap, SimTime(0.0), &HighlightSet::default()).unwrap();
        assert_eq!(scene.destinations.len(), 2);
        let expected: Vec<_> = [2.0, 4.0]
            .iter()
            .map(|&f| c.layout().elevator(f, ElevatorId(1)).center())
            .collect();
        for (prim, want) in scene.destinations.iter().zip(expected) {
            match prim {
                Primitive::Circle { center, radius, .. } => {
                    assert_eq!(*center, want);
                    assert_eq!(*radius, 2.0);
                }
                other => panic!("expected a circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn coinciding_call_and_destination_deduplicate() {
        let c = composer(5, 1, 1);
        let mut ev = ElevatorState::parked(FloorId(1), Direction::Up);
        ev.floor_calls = vec![FloorCall { floor: FloorId(4) }];
        ev.riders = vec![PersonId(1)];
        let snap = ModelSnapshot {
            elevators: vec![ev],
            people: vec![PersonState::Riding {
                elevator:    ElevatorId(1),
                destination: FloorId(4),
            }],
            floor_controls: vec![FloorControls::default(); 5],
        };
        let scene = c.compose(&snap, SimTime(0.0), &HighlightSet::default()).unwrap();
        assert_eq!(scene.destinations.len(), 1);
    }

    #[test]
    fn listed_rider_who_is_not_riding_is_fatal() {
        let c = composer(3, 1, 1);
        let mut ev = ElevatorState::parked(FloorId(1), Direction::Up);
        ev.riders = vec![PersonId(1)];
        let snap = ModelSnapshot {
            elevators:      vec![ev],
            people:         vec![PersonState::Sleeping { floor: FloorId(1) }],
            floor_controls: vec![FloorControls::default(); 3],
        };
        assert!(matches!(
            c.compose(&snap, SimTime(0.0), &HighlightSet::default()),
            Err(SceneError::RiderNotRiding { .. })
        ));
    }
}

#[cfg(test)]
mod riding_people {
    use super::*;

    #[test]
    fn riders_render_in_boarding_order() {
        let c = composer(3, 1, 4);
        let mut ev = ElevatorState::parked(FloorId(2), Direction::Up);
        ev.riders = vec![PersonId(3), PersonId(1), PersonId(4)];
        let riding = |_| PersonState::Riding {
            elevator:    ElevatorId(1),
            destination: FloorId(3),
        };
        let snap = ModelSnapshot {
            elevators: vec![ev],
            people: vec![
                riding(1),
                PersonState::Sleeping { floor: FloorId(1) },
                riding(3),
                riding(4),
            ],
            floor_controls: vec![FloorControls::default(); 3],
        };

        let scene = c.compose(&snap, SimTime(0.0), &HighlightSet::default()).unwrap();
        let x_of = |group: &crate::EntityGroup| match &group.body[0] {
            Primitive::Text { origin, .. } => origin.x,
            other => panic!("expected text, got {other:?}"),
        };
        // people vector order: person 1, 2 (sleeping), 3, 4
        let x1 = x_of(&scene.people[0]);
        let x3 = x_of(&scene.people[2]);
        let x4 = x_of(&scene.people[3]);
        // boarding order is [3, 1, 4] → left-to-right x3 < x1 < x4
        assert!(x3 < x1 && x1 < x4);
    }

    #[test]
    fn rider_missing_from_the_list_is_fatal() {
        let c = composer(3, 1, 1);
        let snap = ModelSnapshot {
            // rider list is empty but the person claims to ride
            elevators: vec![ElevatorState::parked(FloorId(2), Direction::Up)],
            people: vec![PersonState::Riding {
                elevator:    ElevatorId(1),
                destination: FloorId(3),
            }],
            floor_controls: vec![FloorControls::default(); 3],
        };
        assert!(matches!(
            c.compose(&snap, SimTime(0.0), &HighlightSet::default()),
            Err(SceneError::RiderNotListed { .. })
        ));
    }
}

#[cfg(test)]
mod floor_controls {
    use super::*;

    #[test]
    fn extreme_floors_suppress_impossible_triangles() {
        let c = composer(3, 1, 0);
        let snap = ModelSnapshot {
            elevators:      vec![],
            people:         vec![],
            floor_controls: vec![FloorControls::default(); 3],
        };
        let scene = c.compose(&snap, SimTime(0.0), &HighlightSet::default()).unwrap();
        // floor 1: up only; floor 2: both; floor 3: down only → 4 triangles.
        assert_eq!(scene.floor_controls.len(), 4);
    }

    #[test]
    fn active_flags_color_the_triangles() {
        let c = composer(2, 1, 0);
        let snap = ModelSnapshot {
            elevators: vec![],
            people:    vec![],
            floor_controls: vec![
                FloorControls { up_active: true, down_active: false },
                FloorControls::default(),
            ],
        };
        let scene = c.compose(&snap, SimTime(0.0), &HighlightSet::default()).unwrap();
        // floor 1 up (active), floor 2 down (inactive)
        assert_eq!(scene.floor_controls.len(), 2);
        match &scene.floor_controls[0] {
            Primitive::Polygon { fill, .. } => assert_eq!(*fill, Color::RED),
            other => panic!("expected polygon, got {other:?}"),
        }
        match &scene.floor_controls[1] {
            Primitive::Polygon { fill, .. } => assert_eq!(*fill, Color::GRAY),
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}

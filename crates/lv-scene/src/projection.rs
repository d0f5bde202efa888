//! Pure projection functions: model state + clock → geometry and color.

use lv_core::{BBox, Point, SimTime};
use lv_model::{Direction, DoorState, ElevatorState, Location};

use crate::error::SceneResult;

/// Length of the direction-arrow tick, absolute units.
const ARROW_LEN: f64 = 4.0;

/// The rider slot lateral offsets are measured from.  Offsets are
/// `(rider_index − RIDER_ANCHOR_SLOT)` lane-fractions, so the third rider
/// sits dead center and earlier riders fan out to the left.
const RIDER_ANCHOR_SLOT: f64 = 2.0;

/// Share of the car width one rider step covers, before dividing by the
/// rider count.
const RIDER_SPREAD: f64 = 0.9;

// ── Elevator position ─────────────────────────────────────────────────────────

/// The car's current floor as a continuous coordinate.
///
/// At a floor this is the exact integer.  In transit, the transition window
/// gives a fraction of progress toward `next`: rising cars sweep
/// `next − 1 → next`, descending cars `next + 1 → next`, so the value is
/// continuous across the boundary with the adjacent at-floor state.  Clocks
/// outside the window clamp to its edges; an inverted window is an error.
pub fn elevator_floor(ev: &ElevatorState, clock: SimTime) -> SceneResult<f64> {
    match ev.location {
        Location::AtFloor { floor, .. } => Ok(floor.0 as f64),
        Location::Between { span, next } => {
            let frac = span.progress(clock)?;
            Ok(match ev.direction {
                Direction::Up   => next.0 as f64 - 1.0 + frac,
                Direction::Down => next.0 as f64 + (1.0 - frac),
            })
        }
    }
}

// ── Doors ─────────────────────────────────────────────────────────────────────

/// The door sub-state to draw.  A car in transit always draws closed doors.
pub fn active_doors(location: &Location) -> &DoorState {
    match location {
        Location::AtFloor { doors, .. } => doors,
        Location::Between { .. } => &DoorState::Closed,
    }
}

/// How open the doors are, in `[0.0, 1.0]`.
pub fn door_fraction(doors: &DoorState, clock: SimTime) -> SceneResult<f64> {
    Ok(match doors {
        DoorState::Closed        => 0.0,
        DoorState::Open          => 1.0,
        DoorState::Opening(span) => span.progress(clock)?,
        DoorState::Closing(span) => 1.0 - span.progress(clock)?,
    })
}

// ── Direction arrow ───────────────────────────────────────────────────────────

/// Endpoints of the 4-unit direction tick: outward from the car's top edge
/// when rising, from its bottom edge when descending, centered horizontally.
pub fn direction_arrow(direction: Direction, bbox: &BBox) -> (Point, Point) {
    match direction {
        Direction::Up => (
            Point::new(bbox.cx(), bbox.y),
            Point::new(bbox.cx(), bbox.y - ARROW_LEN),
        ),
        Direction::Down => (
            Point::new(bbox.cx(), bbox.y2()),
            Point::new(bbox.cx(), bbox.y2() + ARROW_LEN),
        ),
    }
}

// ── Riders ────────────────────────────────────────────────────────────────────

/// Where a rider is drawn: the car box shifted laterally by its position in
/// the rider sequence and raised by 10% of the car height.
///
/// Offsets are strictly increasing in `rider_index`, so riders always render
/// in boarding order with no two at the same spot (unless a single rider
/// collapses the formula, which is fine).
pub fn rider_box(car: &BBox, rider_count: usize, rider_index: usize) -> BBox {
    debug_assert!(rider_index < rider_count);
    let step = car.w * RIDER_SPREAD / rider_count as f64;
    let shift = step * (rider_index as f64 - RIDER_ANCHOR_SLOT);
    car.shifted(shift, -car.h * 0.1)
}

// ── Call-button triangles ─────────────────────────────────────────────────────

/// The up-triangle template: a 5×3 isosceles shape, apex at the top.
const TRI_UP: [(f64, f64); 3] = [(0.0, 3.0), (5.0, 3.0), (2.5, 0.0)];

/// Template-unit scale: each triangle gets 80% of half the strip height,
/// measured against the template's 2.5-unit half-width.
fn triangle_scale(strip: &BBox) -> f64 {
    strip.h / 2.0 * 0.8 / 2.5
}

/// Vertices of the up-call triangle within a floor's control strip.
pub fn up_triangle(strip: &BBox) -> [Point; 3] {
    let s = triangle_scale(strip);
    let (tx, ty) = (strip.x, strip.y + strip.h * 0.1);
    TRI_UP.map(|(px, py)| Point::new(tx + px * s, ty + py * s))
}

/// Vertices of the down-call triangle: the template rotated a half turn
/// about its center `(2.5, 1.5)`, placed in the lower half of the strip.
pub fn down_triangle(strip: &BBox) -> [Point; 3] {
    let s = triangle_scale(strip);
    let (tx, ty) = (strip.x, strip.y + strip.h * 0.1 + strip.h / 2.0);
    TRI_UP.map(|(px, py)| Point::new(tx + (5.0 - px) * s, ty + (3.0 - py) * s))
}

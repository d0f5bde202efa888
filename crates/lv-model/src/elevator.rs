//! Per-elevator state.

use lv_core::{ElevatorId, FloorId, PersonId, Span};

/// Travel direction.  Always defined, even while the car is stationary —
/// a parked elevator still shows its arrow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

/// Door sub-state while the car is at a floor.
///
/// `Opening`/`Closing` carry the animation window; the opening fraction at a
/// given clock comes from [`Span::progress`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    Closed,
    Open,
    Opening(Span),
    Closing(Span),
}

/// A pending hall call assigned to an elevator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorCall {
    pub floor: FloorId,
}

/// Where the car is.
///
/// `Between` describes an in-transit interval: the car left its previous
/// floor at `span.start` and reaches `next` at `span.end`.  Doors are
/// necessarily closed in transit, so `Between` carries no door state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    AtFloor { floor: FloorId, doors: DoorState },
    Between { span: Span, next: FloorId },
}

/// One elevator's full state for a render pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorState {
    pub location:  Location,
    pub direction: Direction,

    /// People currently inside, in boarding order.  The order determines
    /// each rider's lateral offset when drawn.
    pub riders: Vec<PersonId>,

    /// Pending hall calls; each marks a destination indicator.
    pub floor_calls: Vec<FloorCall>,
}

impl ElevatorState {
    /// A parked car: at `floor`, doors closed, facing `direction`, empty.
    pub fn parked(floor: FloorId, direction: Direction) -> Self {
        Self {
            location:    Location::AtFloor { floor, doors: DoorState::Closed },
            direction,
            riders:      Vec::new(),
            floor_calls: Vec::new(),
        }
    }

    /// 0-based position of `person` in the rider sequence, if aboard.
    #[inline]
    pub fn rider_index(&self, person: PersonId) -> Option<usize> {
        self.riders.iter().position(|&p| p == person)
    }
}

/// Anchor id for the interactive-menu subsystem, stable across renders.
pub fn elevator_anchor(id: ElevatorId) -> String {
    format!("elevator-{}", id.0)
}

//! Per-person state.

use lv_core::{ElevatorId, FloorId, PersonId};

/// What a person is doing.  Transitions are driven entirely by the external
/// model; the visualization only reads the current variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonState {
    /// Asleep at home on `floor`; drawn with a "z" label.
    Sleeping { floor: FloorId },

    /// Waiting on `floor` for a car toward `destination`.
    Waiting { floor: FloorId, destination: FloorId },

    /// Inside `elevator`, heading to `destination`.
    Riding { elevator: ElevatorId, destination: FloorId },
}

impl PersonState {
    /// The label drawn for this person: the destination floor number, or
    /// `"z"` while sleeping.
    pub fn label(&self) -> String {
        match *self {
            PersonState::Sleeping { .. } => "z".to_owned(),
            PersonState::Waiting { destination, .. }
            | PersonState::Riding { destination, .. } => destination.0.to_string(),
        }
    }
}

/// Anchor id for the interactive-menu subsystem, stable across renders.
pub fn person_anchor(id: PersonId) -> String {
    format!("person-{}", id.0)
}

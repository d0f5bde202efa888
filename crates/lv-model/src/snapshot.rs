//! One render pass's view of every entity.

use lv_core::{ElevatorId, FloorId, PersonId};

use crate::elevator::ElevatorState;
use crate::error::{ModelError, ModelResult};
use crate::floor::FloorControls;
use crate::person::PersonState;

/// A snapshot of the full model state, taken once per render pass.
///
/// Vectors are indexed by 0-based slot; the accessors take the model's
/// 1-based ids and fail with [`ModelError`] on ids outside the snapshot —
/// that means the projection is out of sync with the model's shape and the
/// render pass must abort.
///
/// Entity counts are fixed at initialization (a resize re-creates the whole
/// view); only the per-entity state inside changes between passes.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelSnapshot {
    pub elevators:      Vec<ElevatorState>,
    pub people:         Vec<PersonState>,
    pub floor_controls: Vec<FloorControls>,
}

impl ModelSnapshot {
    pub fn num_floors(&self) -> u32 {
        self.floor_controls.len() as u32
    }

    pub fn num_elevators(&self) -> u32 {
        self.elevators.len() as u32
    }

    pub fn num_people(&self) -> u32 {
        self.people.len() as u32
    }

    pub fn elevator(&self, id: ElevatorId) -> ModelResult<&ElevatorState> {
        id.slot()
            .and_then(|s| self.elevators.get(s))
            .ok_or(ModelError::UnknownElevator(id))
    }

    pub fn person(&self, id: PersonId) -> ModelResult<&PersonState> {
        id.slot()
            .and_then(|s| self.people.get(s))
            .ok_or(ModelError::UnknownPerson(id))
    }

    pub fn floor_controls(&self, id: FloorId) -> ModelResult<&FloorControls> {
        id.slot()
            .and_then(|s| self.floor_controls.get(s))
            .ok_or(ModelError::UnknownFloor(id))
    }

    /// Iterate elevators with their 1-based ids.
    pub fn elevators_with_ids(&self) -> impl Iterator<Item = (ElevatorId, &ElevatorState)> {
        self.elevators
            .iter()
            .enumerate()
            .map(|(slot, e)| (ElevatorId::from_slot(slot), e))
    }

    /// Iterate people with their 1-based ids.
    pub fn people_with_ids(&self) -> impl Iterator<Item = (PersonId, &PersonState)> {
        self.people
            .iter()
            .enumerate()
            .map(|(slot, p)| (PersonId::from_slot(slot), p))
    }
}

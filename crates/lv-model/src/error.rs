use lv_core::{ElevatorId, FloorId, PersonId};
use thiserror::Error;

/// A snapshot lookup that cannot succeed — the view's picture of the model
/// shape is out of sync, which must abort the render pass.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("elevator {0} not in snapshot")]
    UnknownElevator(ElevatorId),

    #[error("person {0} not in snapshot")]
    UnknownPerson(PersonId),

    #[error("floor {0} not in snapshot")]
    UnknownFloor(FloorId),
}

pub type ModelResult<T> = Result<T, ModelError>;

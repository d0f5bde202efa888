use lv_core::{ElevatorId, PersonId, SpanError};
use lv_model::ModelError;
use thiserror::Error;

/// A fatal projection failure.  All of these mean the view's picture of the
/// model is out of sync; the render pass aborts and the last good frame
/// stays on screen.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// A transition window in the snapshot ends before it starts.
    #[error("transition window from the model is inverted: {0}")]
    Span(#[from] SpanError),

    /// An id didn't resolve against the snapshot.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A person claims to ride an elevator whose rider list doesn't
    /// contain them.
    #[error("{person} is riding {elevator} but is absent from its rider list")]
    RiderNotListed { person: PersonId, elevator: ElevatorId },

    /// An elevator's rider list names a person who is not in `Riding` state.
    #[error("{person} is listed as a rider of {elevator} but is not riding")]
    RiderNotRiding { person: PersonId, elevator: ElevatorId },
}

pub type SceneResult<T> = Result<T, SceneError>;

//! Trip records drained from the model.

use lv_core::{PersonId, SimTime};

/// A completed (or completing) person journey, as the model reports it.
///
/// `board` is when the person entered a car, `end` when the trip finished.
/// The view remaps these to the trend graph's `waiting`/`riding` series
/// before forwarding.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    pub person: PersonId,
    pub board:  SimTime,
    pub end:    SimTime,
}

/// Everything the model emitted since the last drain.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelOutput {
    pub trips: Vec<TripRecord>,
}

impl ModelOutput {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

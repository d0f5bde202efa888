//! The feed contract for the external stacked-events trend graph.

use lv_core::{PersonId, SimTime};
use lv_model::TripRecord;

/// One trip reshaped for the graph's `waiting`/`riding` series: the boarding
/// time becomes the end of the waiting segment, the trip end the end of the
/// riding segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSample {
    pub person:  PersonId,
    pub waiting: SimTime,
    pub riding:  SimTime,
}

impl From<TripRecord> for GraphSample {
    fn from(trip: TripRecord) -> Self {
        Self {
            person:  trip.person,
            waiting: trip.board,
            riding:  trip.end,
        }
    }
}

/// The graph widget handle, owned by the host and passed to the driver at
/// construction.  There is no process-wide graph singleton.
pub trait TripGraph {
    /// Append a batch of samples.  Called at most once per render pass,
    /// only when the model drained new trips.
    fn push(&mut self, samples: Vec<GraphSample>);
}

/// A [`TripGraph`] that discards everything — for hosts without the graph
/// tab mounted.
pub struct NoopGraph;

impl TripGraph for NoopGraph {
    fn push(&mut self, _samples: Vec<GraphSample>) {}
}

//! Collaborator traits — the contract between the view and the external
//! state machine.
//!
//! The external model owns all simulation state; the view only takes
//! snapshots, drains output, and forwards user-triggered rules.  The three
//! capabilities are separate traits so test doubles and partial hosts can
//! implement exactly what they need; a real controller implements all of
//! them on one handle.

use lv_core::SimTime;

use crate::highlight::HighlightSet;
use crate::output::ModelOutput;
use crate::snapshot::ModelSnapshot;

/// Read access to the model's current state.
pub trait ModelSource {
    /// Current simulation clock, monotonic non-decreasing across calls.
    fn clock(&self) -> SimTime;

    /// A fresh snapshot of every entity's state.  Taken exactly once per
    /// render pass; the pass never re-reads live model state mid-compose.
    fn snapshot(&self) -> ModelSnapshot;

    /// The controller's highlight collection, refreshed each pass.
    fn highlights(&self) -> HighlightSet {
        HighlightSet::default()
    }
}

/// Drains events the model produced since the last drain.
pub trait OutputSource {
    /// Take all pending trip records.  A second call before the model emits
    /// anything new returns an empty output.
    fn take_output(&mut self) -> ModelOutput;
}

/// Accepts user-triggered rule invocations.
///
/// Fire-and-forget: the implementation wraps the firing in its own
/// state-transition scope, and may reject or no-op silently.  The view
/// neither validates applicability nor rolls anything back — success is
/// only observable through subsequent state changes.
pub trait RuleSink {
    fn fire_rule(&mut self, rule: &str, target: u32);
}

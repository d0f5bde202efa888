//! Time-windowed highlight annotations and the highlight matcher.
//!
//! The controller supplies a collection of highlight records each pass.  A
//! record emphasizes one entity during a half-open clock window; records
//! whose window or subject doesn't match the queried entity are skipped,
//! and several matching records apply the same single highlight (the effect
//! is idempotent, never stacked).

use lv_core::{ElevatorId, PersonId, SimTime, Span};

/// What kind of annotation a record is.
///
/// Only time-segment highlights affect this view today; adding a kind here
/// forces every match site to handle it before the crate compiles again.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightKind {
    /// Active while `clock ∈ [span.start, span.end)`.
    TimeSegment(Span),
}

/// Which entity a record emphasizes.  A record may name an elevator, a
/// person, both, or neither (neither matches nothing).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightSubject {
    pub elevator: Option<ElevatorId>,
    pub person:   Option<PersonId>,
}

impl HighlightSubject {
    pub fn elevator(id: ElevatorId) -> Self {
        Self { elevator: Some(id), person: None }
    }

    pub fn person(id: PersonId) -> Self {
        Self { elevator: None, person: Some(id) }
    }
}

/// One highlight annotation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightRecord {
    pub kind:    HighlightKind,
    pub subject: HighlightSubject,
}

impl HighlightRecord {
    /// Is this record's window active at `clock`?
    pub fn active_at(&self, clock: SimTime) -> bool {
        match self.kind {
            HighlightKind::TimeSegment(span) => span.contains(clock),
        }
    }
}

/// The controller's highlight collection for one pass.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightSet(pub Vec<HighlightRecord>);

impl HighlightSet {
    pub fn new(records: Vec<HighlightRecord>) -> Self {
        Self(records)
    }

    /// True iff any active record names this elevator.
    pub fn elevator_active(&self, clock: SimTime, id: ElevatorId) -> bool {
        self.0
            .iter()
            .any(|h| h.active_at(clock) && h.subject.elevator == Some(id))
    }

    /// True iff any active record names this person.
    pub fn person_active(&self, clock: SimTime, id: PersonId) -> bool {
        self.0
            .iter()
            .any(|h| h.active_at(clock) && h.subject.person == Some(id))
    }
}

//! `lv-model` — read-only mirror of the external elevator state machine.
//!
//! The simulation itself lives outside this workspace: an external model
//! advances through discrete transitions and owns every entity's state.
//! This crate defines the sum types a snapshot of that state is expressed
//! in, plus the traits the visualization uses to talk back to the model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`elevator`]  | `ElevatorState`, `Location`, `DoorState`, `Direction`         |
//! | [`person`]    | `PersonState` (`Sleeping` / `Waiting` / `Riding`)             |
//! | [`floor`]     | `FloorControls` — per-floor call-button flags                 |
//! | [`snapshot`]  | `ModelSnapshot` — one render pass's view of all entities      |
//! | [`highlight`] | `HighlightSet` and the time-segment highlight matcher         |
//! | [`output`]    | `TripRecord`, `ModelOutput` — drained trip events             |
//! | [`source`]    | `ModelSource`, `OutputSource`, `RuleSink` collaborator traits |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                                |
//!
//! # Design notes
//!
//! Every state variant is an explicit enum matched exhaustively downstream;
//! a state shape this crate cannot represent is a compile error, not a
//! silently skipped draw.  Snapshot accessors take the model's 1-based ids
//! and return `Err(ModelError::…)` for ids outside the snapshot — the
//! out-of-sync condition that must abort a render pass.

pub mod elevator;
pub mod error;
pub mod floor;
pub mod highlight;
pub mod output;
pub mod person;
pub mod snapshot;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use elevator::{Direction, DoorState, ElevatorState, FloorCall, Location};
pub use error::{ModelError, ModelResult};
pub use floor::FloorControls;
pub use highlight::{HighlightKind, HighlightRecord, HighlightSet, HighlightSubject};
pub use output::{ModelOutput, TripRecord};
pub use person::PersonState;
pub use snapshot::ModelSnapshot;
pub use source::{ModelSource, OutputSource, RuleSink};

//! `lv-core` — foundational value types for the `liftview` workspace.
//!
//! This crate is a dependency of every other `lv-*` crate.  It intentionally
//! has no `lv-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `FloorId`, `ElevatorId`, `PersonId`                     |
//! | [`geom`]   | `BBox`, `Point` — immutable scene geometry              |
//! | [`color`]  | `Color`, the door gray ramp, named palette constants    |
//! | [`time`]   | `SimTime`, `Span` — clock values and timed windows      |
//! | [`error`]  | `SpanError`, `SpanResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (demo scene dumps).   |

pub mod color;
pub mod error;
pub mod geom;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use error::{SpanError, SpanResult};
pub use geom::{BBox, Point};
pub use ids::{ElevatorId, FloorId, PersonId};
pub use time::{SimTime, Span};

//! `lv-view` — the update/render driver and host-facing surface of the
//! elevator-bank view.
//!
//! The host owns three things and hands them to [`ViewDriver`]: a model
//! handle (the external state machine), a render surface (whatever actually
//! draws), and the trend-graph widget handle.  After every model mutation
//! the host calls [`ViewDriver::update`]; the driver takes a snapshot,
//! rebuilds the whole scene, replaces the drawn frame, and forwards any
//! newly drained trip records to the graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`driver`]   | `ViewDriver`, `Viewport`, `RenderSurface`              |
//! | [`graph`]    | `TripGraph`, `GraphSample` — the trend-graph feed      |
//! | [`menu`]     | Menu actions, `Hoverable`/`MenuBound` entity handles   |
//! | [`observer`] | `FrameObserver` callbacks                              |
//! | [`error`]    | `ViewError`, `ViewResult<T>`                           |
//!
//! # Concurrency
//!
//! Everything is single-threaded and synchronous.  `update` is idempotent
//! and side-effect-free except for the final draw and graph push, so a host
//! that coalesces overlapping change notifications into repeated `update`
//! calls needs no locking: the latest call wins wholesale.

pub mod driver;
pub mod error;
pub mod graph;
pub mod menu;
pub mod observer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use driver::{RenderSurface, ViewDriver, Viewport, SCENE_HEIGHT_FRACTION};
pub use error::{ViewError, ViewResult};
pub use graph::{GraphSample, NoopGraph, TripGraph};
pub use menu::{
    ElevatorAction, ElevatorHandle, Hoverable, MenuAction, MenuBound, PersonAction,
    PersonHandle,
};
pub use observer::{FrameObserver, NoopFrameObserver};

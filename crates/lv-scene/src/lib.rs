//! `lv-scene` — state projection and scene composition.
//!
//! This crate turns a [`ModelSnapshot`][lv_model::ModelSnapshot] plus the
//! current clock into one complete renderable [`Scene`]: it interpolates the
//! continuous elevator position and door-opening fraction out of the model's
//! discrete transition windows, places every entity with the layout engine,
//! applies highlights, and emits plain drawing primitives for the
//! presentation layer.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`projection`] | Pure state → geometry/color functions                |
//! | [`primitive`]  | `Primitive`, `EntityGroup`, `Scene`                  |
//! | [`compose`]    | `SceneComposer` — the full-scene rebuild             |
//! | [`error`]      | `SceneError`, `SceneResult<T>`                       |
//!
//! Composition is all-or-nothing: any projection error (inverted transition
//! window, id out of sync with the snapshot) aborts the whole pass, so a
//! caller never receives a scene mixing new and stale geometry.

pub mod compose;
pub mod error;
pub mod primitive;
pub mod projection;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compose::SceneComposer;
pub use error::{SceneError, SceneResult};
pub use primitive::{EntityGroup, Marker, Primitive, Scene};
pub use projection::{
    active_doors, direction_arrow, door_fraction, elevator_floor, rider_box,
};

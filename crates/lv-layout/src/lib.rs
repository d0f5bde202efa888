//! `lv-layout` — the pure layout engine for the elevator-bank scene.
//!
//! Everything here is a closed-form function of five numbers: the viewport
//! width and height, and the floor / elevator / person cardinalities.  No
//! state, no I/O, bit-identical output for identical input.
//!
//! # Scene anatomy
//!
//! The viewport is divided into horizontal **floor bands**, stacked
//! bottom-to-top (floor 1 at the bottom).  Inside each band, left to right:
//! a fixed-width numeric label, the **elevators region** subdivided into one
//! lane per elevator, a narrow **control strip** for the call-button
//! triangles, and the **people region** subdivided into one cell per person.
//!
//! Band and lane functions take a *fractional* floor coordinate so that an
//! interpolated elevator position (say floor 2.4) feeds straight back into
//! the same formulas that place the discrete floors.
//!
//! This crate has no error type: degenerate inputs (zero floors, elevators,
//! or people) produce zero-area boxes, never a division by zero.

mod layout;


pub use layout::{font_size, Layout};

//! Core error type.
//!
//! Downstream `lv-*` crates define their own error enums and wrap
//! `SpanError` as one variant via `#[from]`.

use thiserror::Error;

use crate::time::SimTime;

/// Errors produced by [`Span`][crate::Span] arithmetic.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum SpanError {
    /// The window ends at or before it starts — a logic error in the
    /// upstream model, never silently repaired here.
    #[error("inverted time span: start {start} is not before end {end}")]
    Inverted { start: SimTime, end: SimTime },
}

/// Shorthand result type for span arithmetic.
pub type SpanResult<T> = Result<T, SpanError>;

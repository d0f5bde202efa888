//! Simulation time model.
//!
//! # Design
//!
//! The external state machine owns time: it exposes a monotonically
//! non-decreasing real-valued clock, and every timed transition (an elevator
//! travelling between floors, a door opening or closing, a highlight window)
//! is described by an absolute `[start, end]` pair in the same unit.  The
//! visualization never advances time itself — it only reads the clock and
//! converts transition windows into interpolation fractions.
//!
//! `SimTime` is a transparent `f64` newtype so clock values can't be mixed up
//! with geometry coordinates, and `Span` centralizes the two interval
//! semantics the projection layer needs: clamped progress for motion and
//! half-open containment for highlights.

use std::fmt;

use crate::error::{SpanError, SpanResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation clock value.
///
/// Read-only from this workspace's perspective; supplied by the external
/// model on every render pass.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl From<f64> for SimTime {
    #[inline]
    fn from(t: f64) -> SimTime {
        SimTime(t)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

// ── Span ──────────────────────────────────────────────────────────────────────

/// An absolute `[start, end]` transition window.
///
/// Used for elevator transit (`leftAt` → `nextAt`), door animations
/// (`startAt` → `doneAt`), and highlight windows.  A well-formed span has
/// `start < end`; an inverted span is a logic error in the upstream model
/// and is surfaced as [`SpanError::Inverted`] rather than clamped away.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: SimTime,
    pub end:   SimTime,
}

impl Span {
    #[inline]
    pub fn new(start: impl Into<SimTime>, end: impl Into<SimTime>) -> Self {
        Self { start: start.into(), end: end.into() }
    }

    /// Duration of the window.  Negative for inverted spans.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Interpolation fraction of `now` through the window, in `[0.0, 1.0]`.
    ///
    /// A clock outside `[start, end]` indicates the projection ran against a
    /// state the model has already moved past (or not yet reached); the
    /// fraction fails closed by clamping to the nearer boundary.  An
    /// inverted span (`end <= start`) is an error.
    pub fn progress(&self, now: SimTime) -> SpanResult<f64> {
        let total = self.duration();
        if total <= 0.0 {
            return Err(SpanError::Inverted { start: self.start, end: self.end });
        }
        Ok(((now - self.start) / total).clamp(0.0, 1.0))
    }

    /// Half-open containment test: `start <= now < end`.
    ///
    /// This is the highlight-window semantics — a window `[10, 20)` matches
    /// at 10 and 19.999 but not at 20.
    #[inline]
    pub fn contains(&self, now: SimTime) -> bool {
        self.start <= now && now < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start.0, self.end.0)
    }
}

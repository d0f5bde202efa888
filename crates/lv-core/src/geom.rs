//! Scene geometry value types.
//!
//! `BBox` is an immutable `Copy` value: every layout and projection function
//! returns a fresh box, and shifting is copy-then-shift via
//! [`BBox::shifted`].  In-place mutation of a box that another draw call may
//! still hold is the aliasing hazard this design rules out — there are no
//! `&mut self` methods on `BBox` at all.

/// A 2-D point in scene coordinates (x right, y down, SVG convention).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box with derived edge and center accessors.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BBox {
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The degenerate box at the origin.  Zero-entity layouts return this
    /// instead of dividing by zero.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Right edge.
    #[inline]
    pub fn x2(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    #[inline]
    pub fn y2(&self) -> f64 {
        self.y + self.h
    }

    /// Horizontal center.
    #[inline]
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Vertical center.
    #[inline]
    pub fn cy(&self) -> f64 {
        self.y + self.h / 2.0
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx(), self.cy())
    }

    /// A fresh box translated by `(dx, dy)`.  `self` is left untouched.
    #[inline]
    #[must_use]
    pub fn shifted(&self, dx: f64, dy: f64) -> BBox {
        BBox { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// True when the box covers no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

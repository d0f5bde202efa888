//! Renderable drawing primitives and the composed scene.
//!
//! Primitives are deliberately dumb: plain geometry plus resolved colors,
//! with no references back into model state.  A presentation layer (SVG,
//! canvas, terminal) maps them 1:1 onto its own drawing calls.

use lv_core::{BBox, Color, Point};

/// End-of-line marker for direction arrows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Triangle,
}

/// One drawing instruction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Rect {
        bbox:   BBox,
        fill:   Color,
        stroke: Color,
    },
    Line {
        from:       Point,
        to:         Point,
        stroke:     Color,
        marker_end: Option<Marker>,
    },
    Polygon {
        points: Vec<Point>,
        fill:   Color,
    },
    Circle {
        center: Point,
        radius: f64,
        fill:   Color,
    },
    Text {
        /// Left edge of the text, at the baseline (SVG `text` convention).
        origin:  Point,
        size:    f64,
        fill:    Color,
        bold:    bool,
        content: String,
    },
}

/// The primitives for one interactive entity, tagged with its stable anchor
/// (`elevator-<id>` / `person-<id>`).  The host binds menus and tooltips to
/// the anchor; it is identical across renders for the same entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityGroup {
    pub anchor: String,
    pub body:   Vec<Primitive>,
}

/// One fully composed frame, in draw order: background first, people last.
///
/// A scene is rebuilt wholesale every pass and replaces the previous one;
/// nothing in it is patched incrementally.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub background:     Vec<Primitive>,
    pub destinations:   Vec<Primitive>,
    pub elevators:      Vec<EntityGroup>,
    pub floor_controls: Vec<Primitive>,
    pub people:         Vec<EntityGroup>,
}

impl Scene {
    /// Total primitive count across all groups — handy for tests and
    /// frame-size reporting.
    pub fn primitive_count(&self) -> usize {
        self.background.len()
            + self.destinations.len()
            + self.floor_controls.len()
            + self.elevators.iter().map(|g| g.body.len()).sum::<usize>()
            + self.people.iter().map(|g| g.body.len()).sum::<usize>()
    }
}

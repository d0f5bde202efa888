//! Bounding-box formulas for every visual region.

use lv_core::{BBox, ElevatorId, FloorId, PersonId};

// Proportions of the viewport, fixed by the scene design.
const SIDE_INSET: f64 = 0.02; // left/right margin of each floor band
const TOP_MARGIN: f64 = 0.05; // sky above the top floor
const BAND_FILL: f64 = 0.90; // share of the height covered by floor bands
const VERTICAL_INSET: f64 = 0.02; // inner top/bottom inset of band content
const LABEL_X: f64 = 0.05; // left edge of the floor-number label
const LABEL_W: f64 = 0.08; // width of the floor-number label
const ELEVATORS_W: f64 = 0.60; // width of the elevators region
const LANE_GAP: f64 = 0.10; // gap on each side of a car within its lane
const CONTROLS_W: f64 = 5.0; // control strip width, absolute units

/// The layout engine: pure bounding-box functions for one viewport size and
/// one set of entity cardinalities.
///
/// Cheap to copy; rebuild on viewport resize.  Entity counts changing at
/// runtime is not supported — re-initialize the view instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    width:     f64,
    height:    f64,
    floors:    u32,
    elevators: u32,
    people:    u32,
}

impl Layout {
    pub fn new(width: f64, height: f64, floors: u32, elevators: u32, people: u32) -> Self {
        Self { width, height, floors, elevators, people }
    }

    pub fn num_floors(&self) -> u32 {
        self.floors
    }

    /// Height of one floor band; zero when there are no floors.
    fn band_height(&self) -> f64 {
        if self.floors == 0 {
            0.0
        } else {
            self.height * BAND_FILL / self.floors as f64
        }
    }

    /// Vertical inset applied to all content inside a band, floored at zero
    /// so tiny bands degrade to zero-height content instead of negative.
    fn inner_height(&self) -> f64 {
        (self.band_height() - self.height * VERTICAL_INSET * 2.0).max(0.0)
    }

    fn inner_y(&self, floor: f64) -> f64 {
        self.floor_band(floor).y + self.height * VERTICAL_INSET
    }

    // ── Regions ───────────────────────────────────────────────────────────

    /// The full horizontal band for a floor.  Floor 1 sits at the bottom;
    /// fractional coordinates land proportionally between bands, which is
    /// how interpolated elevator positions are placed.
    pub fn floor_band(&self, floor: f64) -> BBox {
        let h = self.band_height();
        BBox::new(
            self.width * SIDE_INSET,
            h * (self.floors as f64 - floor) + self.height * TOP_MARGIN,
            self.width * (1.0 - SIDE_INSET * 2.0),
            h,
        )
    }

    /// The floor-number label region at the left of a band.
    pub fn label(&self, floor: FloorId) -> BBox {
        BBox::new(
            self.width * LABEL_X,
            self.inner_y(floor.0 as f64),
            self.width * LABEL_W,
            self.inner_height(),
        )
    }

    /// The region holding all elevator lanes, right of the label.
    pub fn elevators_region(&self, floor: f64) -> BBox {
        BBox::new(
            self.width * (LABEL_X + LABEL_W),
            self.inner_y(floor),
            self.width * ELEVATORS_W,
            self.inner_height(),
        )
    }

    /// One elevator's box at a (possibly fractional) floor: the central 80%
    /// of its lane.
    pub fn elevator(&self, floor: f64, id: ElevatorId) -> BBox {
        let region = self.elevators_region(floor);
        let lane = if self.elevators == 0 {
            0.0
        } else {
            region.w / self.elevators as f64
        };
        BBox::new(
            region.x + lane * (id.0 as f64 - 1.0) + lane * LANE_GAP,
            region.y,
            lane * (1.0 - LANE_GAP * 2.0),
            region.h,
        )
    }

    /// The fixed-width call-button strip right of the elevators region.
    pub fn floor_controls(&self, floor: FloorId) -> BBox {
        let region = self.elevators_region(floor.0 as f64);
        BBox::new(
            region.x2() + self.width * SIDE_INSET,
            region.y,
            CONTROLS_W,
            region.h,
        )
    }

    /// The remaining width right of the control strip, out to the band edge.
    pub fn people_region(&self, floor: FloorId) -> BBox {
        let band = self.floor_band(floor.0 as f64);
        let controls = self.floor_controls(floor);
        let x = controls.x2() + self.width * SIDE_INSET;
        BBox::new(x, controls.y, (band.x2() - x).max(0.0), controls.h)
    }

    /// One person's cell in a floor's people region.
    ///
    /// Cells are sized by the *total* person count, not the number of people
    /// on that floor, so a person's horizontal slot never moves as others
    /// come and go.  `slot` is the person's own id.
    pub fn person(&self, floor: FloorId, slot: PersonId) -> BBox {
        let region = self.people_region(floor);
        let w = if self.people == 0 {
            0.0
        } else {
            region.w / self.people as f64
        };
        BBox::new(region.x + w * (slot.0 as f64 - 1.0), region.y, w, region.h)
    }
}

/// Font size that fits a label inside `bbox` — its height, capped by its
/// width so degenerate regions get degenerate text.
pub fn font_size(bbox: &BBox) -> f64 {
    bbox.h.min(bbox.w).max(0.0)
}

//! Scene colors and the door gray ramp.

use std::fmt;

/// Channel value of a fully closed door's gray fill.
const DOOR_CLOSED_CHANNEL: u8 = 0x55;
/// Channel value of a fully open door's gray fill.
const DOOR_OPEN_CHANNEL: u8 = 0xff;

/// An opaque RGB color, displayed as a lowercase `#rrggbb` hex string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);
    pub const RED:   Color = Color(0xff, 0x00, 0x00);
    pub const GRAY:  Color = Color(0x80, 0x80, 0x80);
    pub const GREEN: Color = Color(0x00, 0x80, 0x00);

    /// A pure gray with the given channel value replicated across R, G, B.
    #[inline]
    pub fn gray(channel: u8) -> Color {
        Color(channel, channel, channel)
    }

    /// Door fill for an opening fraction in `[0.0, 1.0]`.
    ///
    /// Linear ramp of a single gray channel from `0x55` (closed) to `0xff`
    /// (open); monotonically non-decreasing in `frac`.  Out-of-range input
    /// is clamped.
    pub fn door_gray(frac: f64) -> Color {
        let frac = frac.clamp(0.0, 1.0);
        let range = (DOOR_OPEN_CHANNEL - DOOR_CLOSED_CHANNEL) as f64;
        let channel = DOOR_CLOSED_CHANNEL + (range * frac).round() as u8;
        Color::gray(channel)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

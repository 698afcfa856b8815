//! RGB colors and pairwise color mixing
//!
//! Touching balls take the per-channel average of their two colors. The
//! average is rounded half away from zero so odd sums always round up, and
//! the result is identical regardless of argument order.

use serde::{Deserialize, Serialize};

use crate::clamp;

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from arbitrary integer channels, clamping each to [0, 255]
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: channel(r as f32),
            g: channel(g as f32),
            b: channel(b as f32),
        }
    }

    /// Channels as an array (handy for uploading to a renderer)
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Pastel palette used for freshly spawned balls
pub const PASTEL_PALETTE: [Rgb; 5] = [
    Rgb::new(196, 189, 151),
    Rgb::new(175, 196, 211),
    Rgb::new(205, 173, 176),
    Rgb::new(183, 205, 186),
    Rgb::new(211, 199, 173),
];

/// Round and clamp a channel value into u8 range
#[inline]
fn channel(value: f32) -> u8 {
    clamp(value.round(), 0.0, 255.0) as u8
}

/// Average of two channels, rounded half away from zero
#[inline]
fn avg(a: u8, b: u8) -> u8 {
    channel((a as f32 + b as f32) / 2.0)
}

/// Mix two colors: per-channel mean, rounded, clamped to [0, 255].
///
/// `mix_colors(a, b) == mix_colors(b, a)` for all inputs.
pub fn mix_colors(c1: Rgb, c2: Rgb) -> Rgb {
    Rgb {
        r: avg(c1.r, c2.r),
        g: avg(c1.g, c2.g),
        b: avg(c1.b, c2.b),
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colors in 8-bit RGB, plus the transfer functions that turn a
//! normalized density into a color.  The transfer functions use a
//! quartic ramp: densities near the ceiling swing hard toward the
//! bright end while sparse pixels stay close to the background, which
//! keeps the wispy edges of the fern visible next to its saturated
//! spine.

use std::io;
use std::io::Write;

/// An 8-bit RGB triple.  Channels are reduced modulo 256 at every
/// construction site, so a Color is always valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

/// Pure black, the low end of the grayscale ramp.
pub const BLACK: Color = Color {
    red: 0,
    green: 0,
    blue: 0,
};

/// Pure white, the high end of both ramps.
pub const WHITE: Color = Color {
    red: 255,
    green: 255,
    blue: 255,
};

/// Full-intensity green, the base hue of the green palette.
pub const GREEN: Color = Color {
    red: 0,
    green: 255,
    blue: 0,
};

impl Color {
    /// Builds a color from arbitrary integers.  Each channel becomes
    /// the absolute value of its input reduced modulo 256, so
    /// negative and out-of-range values are folded back into [0, 255]
    /// rather than rejected.
    pub fn new(red: i64, green: i64, blue: i64) -> Color {
        Color {
            red: (red.unsigned_abs() & 0xFF) as u8,
            green: (green.unsigned_abs() & 0xFF) as u8,
            blue: (blue.unsigned_abs() & 0xFF) as u8,
        }
    }

    /// Scales the intensity of the color, returning a new one.  Each
    /// channel independently becomes trunc(|factor * channel|) mod
    /// 256; the sign of the factor is irrelevant.
    pub fn scale(&self, factor: f64) -> Color {
        Color {
            red: scale_channel(self.red, factor),
            green: scale_channel(self.green, factor),
            blue: scale_channel(self.blue, factor),
        }
    }

    /// The in-place form of [`scale`](#method.scale).
    pub fn scale_in_place(&mut self, factor: f64) {
        *self = self.scale(factor);
    }

    /// Writes the color to a sink as a PPM sample line, `R G B`
    /// followed by a newline.
    pub fn write<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{} {} {}\n", self.red, self.green, self.blue)
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    (((factor * f64::from(channel)).abs() as u64) & 0xFF) as u8
}

/// Black-to-white ramp.  Non-positive inputs are black; everything
/// else is white scaled by the fourth power of the input, so the ramp
/// hugs black for most of [0, 1] and shoots up near the ceiling.
pub fn grayscale(val: f64) -> Color {
    if val <= 0.0 {
        return BLACK;
    }

    let scale = val * val * val * val;
    WHITE.scale(scale)
}

/// Green-tinted ramp.  Non-positive inputs get a dim green floor,
/// in-range inputs ride the same quartic curve on top of that floor,
/// and inputs at or past 1 (the untouched background) come out white.
pub fn greenscale(val: f64) -> Color {
    if val <= 0.0 {
        return GREEN.scale(0.5);
    }

    if val < 1.0 {
        let scale = 0.5 + val * val * val * val;
        return GREEN.scale(scale);
    }

    WHITE
}

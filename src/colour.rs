// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps an escape rate onto a colour.
//!
//! The three channels are independent rational and polynomial fits to
//! a perceptual gradient running from purple through blue and green
//! to a warm red.  The coefficients are fixed; there is no palette to
//! configure.

use num::clamp;

/// An RGB triple, one byte per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Colour {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Colour {
    /// Builds a colour from its channels.
    pub fn new(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }
}

// Truncates toward zero like an integer cast, then pins to a byte.
// NaN ends up as 0.
fn channel(v: f64) -> u8 {
    clamp((v * 255.0).trunc(), 0.0, 255.0) as u8
}

/// Colour for an escape rate `x` in `[0, 1]`.  Values outside the
/// range are not rejected; the channels are clamped instead.
pub fn colour_map(x: f64) -> Colour {
    let r = (0.472 - 0.567 * x + 4.05 * x.powi(2))
        / (1. + 8.72 * x - 19.17 * x.powi(2) + 14.1 * x.powi(3));
    let g = 0.108932 - 1.22635 * x + 27.284 * x.powi(2) - 98.577 * x.powi(3)
        + 163.3 * x.powi(4)
        - 131.395 * x.powi(5)
        + 40.634 * x.powi(6);
    let b = 1. / (1.97 + 3.54 * x - 68.5 * x.powi(2) + 243. * x.powi(3) - 297. * x.powi(4)
        + 125. * x.powi(5));

    Colour::new(channel(r), channel(g), channel(b))
}

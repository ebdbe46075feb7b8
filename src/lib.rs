#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! An escape-time fractal classifies a point on the complex plane by
//! repeatedly applying a rule to it, `z -> z² + c`, and counting how
//! many steps pass before the result wanders outside a circle of
//! radius two.  Points that never leave within the iteration cap are
//! treated as members of the set.  The Mandelbrot set varies `c` with
//! the sampled point and always starts from zero; a Julia set fixes
//! `c` and starts from the sampled point instead.
//!
//! This crate renders either family to a terminal: as `#` glyphs for
//! members and spaces for everything else, or in 24-bit colour, where
//! each character cell carries two samples by painting the upper half
//! block in the foreground colour and the lower half in the background
//! colour.

#[macro_use]
extern crate failure;
extern crate itertools;
extern crate num;
#[macro_use]
extern crate tracing;

pub mod colour;
pub mod errors;
pub mod fractal;
pub mod iterate;
pub mod parse;
pub mod planes;
pub mod render;

pub use colour::{colour_map, Colour};
pub use errors::{FractalError, Result};
pub use fractal::{Family, Fractal};
pub use parse::parse_number;
pub use planes::Viewport;
pub use render::{render, render_double_colour};

/// A sample on the complex plane.
pub type Point = num::Complex<f64>;

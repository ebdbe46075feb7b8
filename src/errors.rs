// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while parsing arguments or rendering.

use std::io;

/// Everything that can go wrong between the command line and the
/// terminal.  The arithmetic itself cannot fail; only degenerate
/// rasters, unparseable numbers and the output stream can.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// The requested width produces a raster with no rows or no columns.
    #[fail(
        display = "a width of {} leaves a {}x{} raster with nothing to draw",
        width, width, height
    )]
    EmptyRaster {
        /// Requested width, in character cells.
        width: usize,
        /// Number of sample rows derived from the width.
        height: usize,
    },

    /// A command-line value could not be read as a number.
    #[fail(display = "could not parse {:?} as {}", value, kind)]
    Parse {
        /// The text that failed to parse.
        value: String,
        /// The type it was meant to become.
        kind: &'static str,
    },

    /// Writing the rendered output failed.
    #[fail(display = "could not write output: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for FractalError {
    fn from(err: io::Error) -> FractalError {
        FractalError::Io(err)
    }
}

/// Result type used throughout the crate.
pub type Result<T> = ::std::result::Result<T, FractalError>;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of character cells with an origin at 0,0 and a
//! rectangle on the complex plane whose corners are the top-left and
//! bottom-right of the picture.

use errors::{FractalError, Result};
use Point;

/// The rectangle of the complex plane being drawn.  `a` is the corner
/// drawn at the top left, `b` the corner drawn at the bottom right.
/// Callers are expected to keep `a.re < b.re` and `a.im < b.im`; a
/// reversed rectangle is drawn mirrored rather than rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Top-left corner.
    pub a: Point,
    /// Bottom-right corner.
    pub b: Point,
}

impl Viewport {
    /// A viewport spanning `a` to `b`.
    pub fn new(a: Point, b: Point) -> Viewport {
        Viewport { a, b }
    }
}

/// Column and row of a cell on the character grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell(pub usize, pub usize);

/// Maps cells of a `columns` by `rows` grid onto a viewport.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Number of columns in the grid.
    pub columns: usize,
    /// Number of rows in the grid.
    pub rows: usize,
    origin: Point,
    // Width and height of one cell on the complex plane.
    scale: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Fails when the grid has no columns or no rows,
    /// since there would be nothing to divide the viewport among.
    pub fn new(columns: usize, rows: usize, viewport: &Viewport) -> Result<PlaneMapper> {
        if columns == 0 || rows == 0 {
            return Err(FractalError::EmptyRaster {
                width: columns,
                height: rows,
            });
        }

        let scale = (
            (viewport.b.re - viewport.a.re) / (columns as f64),
            (viewport.b.im - viewport.a.im) / (rows as f64),
        );

        Ok(PlaneMapper {
            columns,
            rows,
            origin: viewport.a,
            scale,
        })
    }

    /// Given a cell on the grid, return the complex number sampled for
    /// it: the cell's top-left corner.
    pub fn cell_to_point(&self, cell: &Cell) -> Point {
        self.origin + Point::new((cell.0 as f64) * self.scale.0, (cell.1 as f64) * self.scale.1)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Terminal renderers.  Both stream their output a row at a time; no
//! picture is kept in memory.

use std::fmt;
use std::io::Write;

use itertools::Itertools;

use colour::{colour_map, Colour};
use errors::{FractalError, Result};
use planes::{Cell, PlaneMapper, Viewport};
use Point;

/// Drawn for points inside the set.
pub const MEMBER: u8 = b'#';
/// Drawn for points that escape.
pub const OUTSIDE: u8 = b' ';
/// Upper half block.  Its foreground colour fills the top half of the
/// cell and the background colour the bottom half.
pub const HALF_BLOCK: char = '\u{2580}';
/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[m";

/// Rows in the monochrome raster.  Glyphs are roughly three times as
/// tall as they are wide.
pub fn mono_height(width: usize) -> usize {
    width / 3
}

/// Sample rows in the colour raster.  Each printed line carries two.
/// Saturates rather than overflowing for absurd widths.
pub fn colour_height(width: usize) -> usize {
    width.saturating_mul(10) / 16
}

/// Two vertically stacked samples sharing one character cell.
struct HalfBlock {
    upper: Colour,
    lower: Colour,
}

impl fmt::Display for HalfBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
            self.upper.r,
            self.upper.g,
            self.upper.b,
            self.lower.r,
            self.lower.g,
            self.lower.b,
            HALF_BLOCK
        )
    }
}

/// Draw `viewport` as `#` for every point `predicate` accepts and a
/// space otherwise, `width` columns by `width / 3` rows.
pub fn render<F, W>(predicate: F, viewport: &Viewport, width: usize, out: &mut W) -> Result<()>
where
    F: Fn(Point) -> bool,
    W: Write,
{
    let plane = PlaneMapper::new(width, mono_height(width), viewport)?;
    debug!(
        columns = plane.columns,
        rows = plane.rows,
        "rendering monochrome raster"
    );

    let mut line: Vec<u8> = Vec::with_capacity(plane.columns + 1);
    for row in 0..plane.rows {
        line.clear();
        line.extend((0..plane.columns).map(|column| {
            if predicate(plane.cell_to_point(&Cell(column, row))) {
                MEMBER
            } else {
                OUTSIDE
            }
        }));
        line.push(b'\n');
        out.write_all(&line)?;
        trace!(row, "row written");
    }
    Ok(())
}

/// Draw `viewport` in truecolour at double vertical resolution.  Every
/// printed line packs sample rows `j` and `j + 1` into half blocks, so
/// `width * 10 / 16` sample rows print as half as many lines.  When the
/// sample row count is odd the last row has no partner and is left out.
pub fn render_double_colour<F, W>(
    unit_map: F,
    viewport: &Viewport,
    width: usize,
    out: &mut W,
) -> Result<()>
where
    F: Fn(Point) -> f64,
    W: Write,
{
    let height = colour_height(width);
    if height / 2 == 0 {
        return Err(FractalError::EmptyRaster { width, height });
    }
    let plane = PlaneMapper::new(width, height, viewport)?;
    debug!(
        columns = plane.columns,
        rows = plane.rows,
        lines = plane.rows / 2,
        "rendering colour raster"
    );

    let sample = |column, row| colour_map(unit_map(plane.cell_to_point(&Cell(column, row))));
    let mut line: Vec<u8> = Vec::new();
    for (upper, lower) in (0..plane.rows).tuples::<(usize, usize)>() {
        line.clear();
        for column in 0..plane.columns {
            let cell = HalfBlock {
                upper: sample(column, upper),
                lower: sample(column, lower),
            };
            write!(line, "{}", cell)?;
        }
        writeln!(line, "{}", RESET)?;
        out.write_all(&line)?;
        trace!(upper, lower, "row written");
    }
    Ok(())
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two families of quadratic escape-time fractals and the
//! classifiers the renderers consume.

use std::fmt;

use iterate::{bounded, iterate, quadratic};
use Point;

/// Which member of the quadratic family to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Family {
    /// `c` is the sampled point; iteration starts from zero.
    Mandelbrot,
    /// `c` is fixed; iteration starts from the sampled point.
    Julia(Point),
}

/// A fractal family together with its iteration cap.  Immutable, and
/// cheap to copy into the closures handed to a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fractal {
    /// The rule being iterated.
    pub family: Family,
    /// Steps after which a point is considered bounded.
    pub max_iterations: usize,
}

impl Fractal {
    /// The Mandelbrot set.
    pub fn mandelbrot(max_iterations: usize) -> Fractal {
        Fractal {
            family: Family::Mandelbrot,
            max_iterations,
        }
    }

    /// The Julia set for the constant `c`.
    pub fn julia(c: Point, max_iterations: usize) -> Fractal {
        Fractal {
            family: Family::Julia(c),
            max_iterations,
        }
    }

    /// Number of steps `point` survives before escaping, capped at
    /// `max_iterations`.
    pub fn escape_count(&self, point: Point) -> usize {
        match self.family {
            Family::Mandelbrot => iterate(
                quadratic(point),
                bounded,
                Point::new(0.0, 0.0),
                self.max_iterations,
            ),
            Family::Julia(c) => iterate(quadratic(c), bounded, point, self.max_iterations),
        }
    }

    /// True when `point` survives every iteration.
    pub fn is_member(&self, point: Point) -> bool {
        self.escape_count(point) == self.max_iterations
    }

    /// How long `point` held out, as `sqrt(steps / max_iterations)`.
    /// Always within `[0, 1]`; members score exactly 1.  A zero cap
    /// scores everything 0.
    pub fn escape_rate(&self, point: Point) -> f64 {
        if self.max_iterations == 0 {
            return 0.0;
        }
        (self.escape_count(point) as f64 / self.max_iterations as f64).sqrt()
    }

    /// The membership test as a free-standing closure.
    pub fn predicate(&self) -> impl Fn(Point) -> bool {
        let fractal = *self;
        move |point| fractal.is_member(point)
    }

    /// The escape rate as a free-standing closure.
    pub fn unit_map(&self) -> impl Fn(Point) -> f64 {
        let fractal = *self;
        move |point| fractal.escape_rate(point)
    }
}

impl fmt::Display for Fractal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.family {
            Family::Mandelbrot => write!(f, "mandelbrot")?,
            Family::Julia(c) => write!(f, "julia({}{:+}i)", c.re, c.im)?,
        }
        write!(f, " ({} iterations)", self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandelbrot_membership() {
        let m = Fractal::mandelbrot(256);
        assert!(m.is_member(Point::new(0.0, 0.0)));
        assert!(m.is_member(Point::new(-1.0, 0.0)));
        assert!(!m.is_member(Point::new(2.0, 2.0)));
        assert!(!m.is_member(Point::new(1.0, 0.0)));
    }

    #[test]
    fn julia_membership() {
        let j = Fractal::julia(Point::new(0.0, 0.0), 256);
        assert!(j.is_member(Point::new(0.0, 0.0)));
        assert!(j.is_member(Point::new(0.5, -0.5)));
        assert!(!j.is_member(Point::new(2.0, 2.0)));
        assert!(!j.is_member(Point::new(1.1, 0.0)));
    }

    #[test]
    fn julia_starts_from_the_sample() {
        // With c = 0 the orbit of 2 is already outside the circle.
        let j = Fractal::julia(Point::new(0.0, 0.0), 256);
        assert_eq!(j.escape_count(Point::new(2.0, 0.0)), 0);
        // The Mandelbrot orbit of 2 starts at 0 and escapes on the next check.
        let m = Fractal::mandelbrot(256);
        assert_eq!(m.escape_count(Point::new(2.0, 0.0)), 1);
    }

    #[test]
    fn escape_rate_is_the_root_of_the_count() {
        let m = Fractal::mandelbrot(256);
        for &(re, im) in &[(0.0, 0.0), (2.0, 2.0), (0.3, 0.5), (-0.75, 0.1), (0.26, 0.0)] {
            let p = Point::new(re, im);
            let rate = m.escape_rate(p);
            let expected = (m.escape_count(p) as f64 / 256.0).sqrt();
            assert_eq!(rate, expected);
            assert!(rate >= 0.0 && rate <= 1.0);
        }
        assert_eq!(m.escape_rate(Point::new(0.0, 0.0)), 1.0);
    }

    #[test]
    fn zero_cap_is_total() {
        let m = Fractal::mandelbrot(0);
        assert!(m.is_member(Point::new(5.0, 5.0)));
        assert_eq!(m.escape_rate(Point::new(5.0, 5.0)), 0.0);
    }

    #[test]
    fn closures_agree_with_methods() {
        let j = Fractal::julia(Point::new(-0.8, 0.156), 64);
        let pred = j.predicate();
        let map = j.unit_map();
        for &(re, im) in &[(0.0, 0.0), (0.1, 0.1), (1.5, -0.3)] {
            let p = Point::new(re, im);
            assert_eq!(pred(p), j.is_member(p));
            assert_eq!(map(p), j.escape_rate(p));
        }
    }

    #[test]
    fn display_names_the_family() {
        assert_eq!(
            Fractal::mandelbrot(256).to_string(),
            "mandelbrot (256 iterations)"
        );
        assert_eq!(
            Fractal::julia(Point::new(-0.8, 0.156), 100).to_string(),
            "julia(-0.8+0.156i) (100 iterations)"
        );
    }
}

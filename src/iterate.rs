// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time engine: apply a rule to a point until it leaves
//! the region of interest or the iteration cap runs out.

use Point;

/// Squared radius of the escape circle.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Starting from `start`, apply `step` for as long as `keep_going`
/// holds, at most `max_iterations` times.  Returns the number of steps
/// taken; a result equal to `max_iterations` means the point never
/// escaped.
pub fn iterate<F, P>(step: F, keep_going: P, start: Point, max_iterations: usize) -> usize
where
    F: Fn(Point) -> Point,
    P: Fn(Point) -> bool,
{
    let mut z = start;
    let mut i = 0;
    while i < max_iterations && keep_going(z) {
        z = step(z);
        i += 1;
    }
    i
}

/// The quadratic map `z -> z² + c`.
pub fn quadratic(c: Point) -> impl Fn(Point) -> Point {
    move |z| z * z + c
}

/// True while `z` is strictly inside the escape circle.  A point
/// exactly on the circle has escaped.
#[inline]
pub fn bounded(z: Point) -> bool {
    z.norm_sqr() < ESCAPE_RADIUS_SQR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn bounded_is_strict() {
        assert!(bounded(Point::new(0.0, 0.0)));
        assert!(bounded(Point::new(1.99, 0.0)));
        assert!(!bounded(Point::new(2.0, 0.0)));
        assert!(!bounded(Point::new(0.0, -2.0)));
        assert!(!bounded(Point::new(2.0, 2.0)));
        assert!(!bounded(Point::new(-3.0, 0.5)));
    }

    #[test]
    fn zero_cap_takes_no_steps() {
        let calls = Cell::new(0);
        let step = |z: Point| {
            calls.set(calls.get() + 1);
            z
        };
        assert_eq!(iterate(step, |_| true, Point::new(0.0, 0.0), 0), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn cap_bounds_the_step_count() {
        let calls = Cell::new(0);
        let step = |z: Point| {
            calls.set(calls.get() + 1);
            z
        };
        assert_eq!(iterate(step, |_| true, Point::new(0.0, 0.0), 17), 17);
        assert_eq!(calls.get(), 17);
    }

    #[test]
    fn stops_when_the_predicate_fails() {
        // Walks along the real axis one unit at a time: 0, 1, 2 escapes.
        let step = |z: Point| z + Point::new(1.0, 0.0);
        assert_eq!(iterate(step, bounded, Point::new(0.0, 0.0), 100), 2);
        assert_eq!(iterate(step, bounded, Point::new(5.0, 0.0), 100), 0);
    }

    #[test]
    fn quadratic_squares_and_adds() {
        let f = quadratic(Point::new(1.0, -1.0));
        // (1 + 2i)² = -3 + 4i
        assert_eq!(f(Point::new(1.0, 2.0)), Point::new(-2.0, 3.0));
        assert_eq!(f(Point::new(0.0, 0.0)), Point::new(1.0, -1.0));
    }
}

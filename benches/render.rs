#[macro_use]
extern crate criterion;
extern crate fractals;

use criterion::Criterion;
use fractals::{render, render_double_colour, Fractal, Point, Viewport};
use std::io;

fn mono(c: &mut Criterion) {
    let view = Viewport::new(Point::new(-2.0, -1.0), Point::new(1.0, 1.0));
    let fractal = Fractal::mandelbrot(256);
    c.bench_function("mandelbrot mono 80", move |b| {
        b.iter(|| render(fractal.predicate(), &view, 80, &mut io::sink()).unwrap())
    });
}

fn colour(c: &mut Criterion) {
    let view = Viewport::new(Point::new(-2.0, -1.2), Point::new(2.0, 1.2));
    let fractal = Fractal::julia(Point::new(-0.8, 0.156), 256);
    c.bench_function("julia colour 80", move |b| {
        b.iter(|| render_double_colour(fractal.unit_map(), &view, 80, &mut io::sink()).unwrap())
    });
}

criterion_group!(benches, mono, colour);
criterion_main!(benches);

use crate::domain::ports::{OutputSink, Shape};

/// Fixed approximation of π; results must match the reference output digit for digit.
pub const PI_APPROX: f64 = 3.1416;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    // Not reachable from outside the type; callers only see area/perimeter.
    fn pi() -> f64 {
        PI_APPROX
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        Self::pi() * self.radius.powi(2)
    }

    fn perimeter(&self) -> f64 {
        2.0 * Self::pi() * self.radius
    }
}

/// Formats area and perimeter with two decimals, knowing nothing but [`Shape`].
pub fn metrics_lines(shape: &dyn Shape) -> [String; 2] {
    [
        format!("Area: {:.2}", shape.area()),
        format!("Perimeter: {:.2}", shape.perimeter()),
    ]
}

pub fn print_metrics(shape: &dyn Shape, sink: &dyn OutputSink) {
    for line in metrics_lines(shape) {
        sink.emit(&line);
    }
}

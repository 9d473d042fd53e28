use derive_more::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, Mul)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Direction of travel from `self` towards `to`, in degrees.
    pub fn heading(self, to: Point) -> f64 {
        (to.y - self.y).atan2(to.x - self.x).to_degrees()
    }

    /// Walks `length` units away from `self` at `degrees`.
    pub fn project(self, length: f64, degrees: f64) -> Point {
        let r = degrees.to_radians();
        Point::new(self.x + length * r.cos(), self.y + length * r.sin())
    }

    /// Weighted blend: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self * (1.0 - t) + other * t
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }
}

/// Third vertex of the isosceles triangle with base `ab` and the given height.
///
/// The apex lies on the side reached by turning 90 degrees counter to the
/// `a -> b` heading, which is outward for a pie traversed by increasing angle.
pub fn isosceles_apex(a: Point, b: Point, height: f64) -> Point {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return a;
    }
    let k = height / len;
    Point::new(a.x + dx / 2.0 + dy * k, a.y + dy / 2.0 - dx * k)
}

/// Signed distance of `p` from the infinite line through `a` and `b`.
///
/// Collapses to the plain distance from `a` when `a == b`.
#[cfg(test)]
pub(crate) fn offset_from_line(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return p.distance(a);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx) / len
}

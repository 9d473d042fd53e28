use crate::config::PoseSet;
use crate::geometry::{Point, isosceles_apex};
use std::iter;

pub const MAX_HEIGHT: f64 = 30.0;
pub const THREE_POSE_HEIGHT_DIVISOR: f64 = 3.0;
pub const FIVE_POSE_HEIGHT_DIVISOR: f64 = 2.8;

const CLAW_BASE: f64 = 7.0 / 8.0; // along the edge, from the far endpoint
const CLAW_SPREAD: f64 = 25.0; // degrees off the edge
const CLAW_REACH_DIVISOR: f64 = 2.5;
const LEAN_CLAW_STRETCH: f64 = 1.3;
const HULL_TILT: f64 = 70.0; // degrees off the edge for one-sided poses
const LEAN: f64 = 20.0; // degrees the apex swings for leaning poses
const LOWER_HULL_RATIO: f64 = 1.0 / 3.0;
const DETACH_AT: f64 = 2.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Left,
    LeanLeft,
    Center,
    LeanRight,
    Right,
}

impl Pose {
    pub fn from_alignment(set: PoseSet, alignment: usize) -> Self {
        match set {
            PoseSet::Three => [Self::Left, Self::Center, Self::Right][alignment % 3],
            PoseSet::Five => [
                Self::Left,
                Self::LeanLeft,
                Self::Center,
                Self::LeanRight,
                Self::Right,
            ][alignment % 5],
        }
    }
}

impl PoseSet {
    fn height_divisor(&self) -> f64 {
        match self {
            Self::Three => THREE_POSE_HEIGHT_DIVISOR,
            Self::Five => FIVE_POSE_HEIGHT_DIVISOR,
        }
    }
}

/// Closed outline of the ship.
///
/// Stroked by moving to `anchor` and drawing through every vertex; the last
/// vertex is the anchor again.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipShape {
    pub anchor: Point,
    pub vertices: [Point; 8],
}

impl ShipShape {
    pub fn apex(&self) -> Point {
        self.vertices[0]
    }

    pub fn path(&self) -> impl Iterator<Item = Point> + '_ {
        iter::once(self.anchor).chain(self.vertices.iter().copied())
    }
}

struct Hull {
    apex: Point,
    lower: Point,
}

/// Builds the ship for one slice edge `a -> b`.
pub fn build(a: Point, b: Point, alignment: usize, set: PoseSet) -> ShipShape {
    let length = a.distance(b);
    let height = (length / set.height_divisor()).min(MAX_HEIGHT);
    let reach = length / CLAW_REACH_DIVISOR;
    let outward = a.heading(b) - 90.0;
    let lifted = height * LOWER_HULL_RATIO;

    match (set, Pose::from_alignment(set, alignment)) {
        (_, Pose::Center) => {
            let hull = Hull {
                apex: isosceles_apex(a, b, height),
                lower: isosceles_apex(a, b, lifted),
            };
            assemble(a, b, hull, reach, reach)
        }
        (PoseSet::Three, Pose::Left) => toward_a(a, a.midpoint(b), height, reach),
        (PoseSet::Three, Pose::Right) => toward_b(a.midpoint(b), b, height, reach),
        (_, Pose::Left) => {
            let corner = a.lerp(b, DETACH_AT).project(lifted, outward);
            toward_a(a, corner, height, reach)
        }
        (_, Pose::Right) => {
            let corner = b.lerp(a, DETACH_AT).project(lifted, b.heading(a) + 90.0);
            toward_b(corner, b, height, reach)
        }
        (_, Pose::LeanLeft) => {
            let hull = leaning(a, b, height, outward - LEAN);
            assemble(a, b, hull, reach * LEAN_CLAW_STRETCH, reach)
        }
        (_, Pose::LeanRight) => {
            let hull = leaning(a, b, height, outward + LEAN);
            assemble(a, b, hull, reach, reach * LEAN_CLAW_STRETCH)
        }
    }
}

fn toward_a(a: Point, b: Point, height: f64, reach: f64) -> ShipShape {
    let tilt = a.heading(b) - HULL_TILT;
    let hull = Hull {
        apex: a.project(height, tilt),
        lower: b.lerp(a, CLAW_BASE).project(height * LOWER_HULL_RATIO, tilt),
    };
    assemble(a, b, hull, reach, reach)
}

fn toward_b(a: Point, b: Point, height: f64, reach: f64) -> ShipShape {
    let tilt = b.heading(a) + HULL_TILT;
    let hull = Hull {
        apex: b.project(height, tilt),
        lower: a.lerp(b, CLAW_BASE).project(height * LOWER_HULL_RATIO, tilt),
    };
    assemble(a, b, hull, reach, reach)
}

fn leaning(a: Point, b: Point, height: f64, direction: f64) -> Hull {
    let mid = a.midpoint(b);
    Hull {
        apex: mid.project(height, direction),
        lower: mid.project(height * LOWER_HULL_RATIO, direction),
    }
}

fn assemble(a: Point, b: Point, hull: Hull, reach_a: f64, reach_b: f64) -> ShipShape {
    let claw_base_b = a.lerp(b, CLAW_BASE);
    let claw_base_a = b.lerp(a, CLAW_BASE);
    let claw_tip_b = b.project(reach_b, b.heading(a) - CLAW_SPREAD);
    let claw_tip_a = a.project(reach_a, a.heading(b) + CLAW_SPREAD);

    ShipShape {
        anchor: a,
        vertices: [
            hull.apex,
            b,
            claw_tip_b,
            claw_base_b,
            hull.lower,
            claw_base_a,
            claw_tip_a,
            a,
        ],
    }
}

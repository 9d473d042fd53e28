pub mod model;
pub mod ship;
pub mod view;

pub use model::{BoundaryPoints, Selection, State};
pub use ship::{Pose, ShipShape};
pub use view::{Surface, draw};

pub const FULL_TURN: f64 = 360.0; // degrees
pub const SLICE_VARIANCE: f64 = 0.5; // fraction of the mean slice angle
pub const START_POSITION: usize = 1; // second pose of the first slice
pub const MARKER_RADIUS: f64 = 10.0;
pub const LINE_WIDTH: f64 = 1.0;

use super::{FULL_TURN, SLICE_VARIANCE, START_POSITION};
use crate::config::{Config, ConfigError, Highlight, PoseSet};
use crate::events::Navigation;
use crate::geometry::Point;
use crate::gui::pie::ship::{self, ShipShape};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Outer rim of the pie: one point per slice, ordered by angle.
///
/// Slice `i` is bounded by point `i` and point `(i + 1) % len`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPoints {
    points: Vec<Point>,
    angles: Vec<f64>,
}

impl BoundaryPoints {
    /// Splits the full turn into `count` irregular slices.
    ///
    /// Each increment is drawn around the mean of what is left of the turn, so
    /// slices stay roughly even. The running angle is clamped at a full turn.
    pub fn generate<R: Rng>(
        rng: &mut R,
        center: Point,
        count: usize,
        min_radius: f64,
        max_radius: f64,
    ) -> Self {
        let mut points = Vec::with_capacity(count);
        let mut angles = Vec::with_capacity(count);
        let mut swept = 0.0;

        for remaining in (1..=count).rev() {
            let mean = (FULL_TURN - swept) / remaining as f64;
            let variance = mean * SLICE_VARIANCE;
            let increment = rng.gen_range(mean - variance..=mean + variance);
            swept = FULL_TURN.min(swept + increment);

            let radius = rng.gen_range(min_radius..=max_radius);
            points.push(center.project(radius, swept));
            angles.push(swept);
        }

        Self { points, angles }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Cumulative angle of each point, in degrees.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn edge(&self, slice: usize) -> (Point, Point) {
        let n = self.points.len();
        (self.points[slice % n], self.points[(slice + 1) % n])
    }

    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..self.points.len()).map(|i| self.edge(i))
    }
}

/// Where the ship sits: a position in `[0, slices * poses)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    position: usize,
    slices: usize,
    poses: usize,
}

impl Selection {
    pub fn new(slices: usize, poses: usize) -> Self {
        Self::at(START_POSITION, slices, poses)
    }

    pub fn at(position: usize, slices: usize, poses: usize) -> Self {
        let slices = slices.max(1);
        let poses = poses.max(1);
        Self {
            position: position % (slices * poses),
            slices,
            poses,
        }
    }

    fn positions(&self) -> usize {
        self.slices * self.poses
    }

    pub fn navigate(self, nav: Navigation) -> Self {
        let total = self.positions();
        let position = match nav {
            Navigation::Previous => (self.position + total - 1) % total,
            Navigation::Next => (self.position + 1) % total,
        };
        Self { position, ..self }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slice(&self) -> usize {
        self.position / self.poses
    }

    pub fn alignment(&self) -> usize {
        self.position % self.poses
    }
}

pub struct State {
    pub center: Point,
    pub size: u32,
    pub selection: Selection,
    pub poses: PoseSet,
    pub highlight: Highlight,
    pub debug_markers: bool,
    slices: usize,
    min_radius: f64,
    max_radius: f64,
    boundary: Option<BoundaryPoints>,
    rng: SmallRng,
}

impl State {
    /// Fails with `ConfigError::Invalid` for a config the pie cannot be drawn from.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Self {
            center: config.center(),
            size: config.size,
            selection: Selection::new(config.slices, config.poses.count()),
            poses: config.poses,
            highlight: config.highlight,
            debug_markers: config.debug_markers,
            slices: config.slices,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            boundary: None,
            rng,
        })
    }

    pub fn boundary(&self) -> Option<&BoundaryPoints> {
        self.boundary.as_ref()
    }

    /// Returns the rim, generating it on first use.
    pub fn ensure_boundary(&mut self) -> &BoundaryPoints {
        let Self {
            boundary,
            rng,
            center,
            slices,
            min_radius,
            max_radius,
            ..
        } = self;
        boundary.get_or_insert_with(|| {
            log::info!("Generating pie with {} slices", slices);
            BoundaryPoints::generate(rng, *center, *slices, *min_radius, *max_radius)
        })
    }

    pub fn navigate(&mut self, nav: Navigation) {
        self.selection = self.selection.navigate(nav);
        log::debug!(
            "{nav}: position {} slice {} alignment {}",
            self.selection.position(),
            self.selection.slice(),
            self.selection.alignment()
        );
    }

    /// Ship on the selected edge, once the rim exists.
    pub fn ship(&self) -> Option<ShipShape> {
        let (a, b) = self.boundary.as_ref()?.edge(self.selection.slice());
        Some(ship::build(a, b, self.selection.alignment(), self.poses))
    }
}

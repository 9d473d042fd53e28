use super::model::State;
use super::{LINE_WIDTH, MARKER_RADIUS};
use crate::config::Highlight;
use crate::geometry::Point;
use crate::gui::pie::ship;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

/// Something the pie can be painted onto.
pub trait Surface {
    type Error;

    fn fill_background(&self, color: Srgba<f64>) -> Result<(), Self::Error>;

    fn stroke_polyline(&self, points: &[Point], color: Srgba<f64>) -> Result<(), Self::Error>;

    fn fill_dot(&self, center: Point, radius: f64, color: Srgba<f64>) -> Result<(), Self::Error>;

    fn stroke_line(&self, from: Point, to: Point, color: Srgba<f64>) -> Result<(), Self::Error> {
        self.stroke_polyline(&[from, to], color)
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

impl Surface for Context {
    type Error = cairo::Error;

    fn fill_background(&self, color: Srgba<f64>) -> Result<(), cairo::Error> {
        set_source(self, color);
        self.paint()
    }

    fn stroke_polyline(&self, points: &[Point], color: Srgba<f64>) -> Result<(), cairo::Error> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        set_source(self, color);
        self.set_line_width(LINE_WIDTH);
        self.new_path();
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.stroke()
    }

    fn fill_dot(&self, center: Point, radius: f64, color: Srgba<f64>) -> Result<(), cairo::Error> {
        set_source(self, color);
        self.new_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        self.fill()
    }
}

fn stroke_slice<S: Surface>(
    surface: &S,
    center: Point,
    (a, b): (Point, Point),
    color: Srgba<f64>,
) -> Result<(), S::Error> {
    surface.stroke_line(center, a, color)?;
    surface.stroke_line(center, b, color)?;
    surface.stroke_line(a, b, color)
}

/// Repaints the whole frame: pie, highlighted slice, then the ship.
pub fn draw<S: Surface>(
    surface: &S,
    state: &mut State,
    colors: &ThemeColors,
) -> Result<(), S::Error> {
    surface.fill_background(colors.background)?;

    let center = state.center;
    let selection = state.selection;
    let (poses, highlight, markers) = (state.poses, state.highlight, state.debug_markers);
    let boundary = state.ensure_boundary();

    for edge in boundary.edges() {
        stroke_slice(surface, center, edge, colors.pie)?;
    }

    let (a, b) = boundary.edge(selection.slice());
    match highlight {
        Highlight::Edge => surface.stroke_line(a, b, colors.ship)?,
        Highlight::Triangle => stroke_slice(surface, center, (a, b), colors.ship)?,
    }

    let ship = ship::build(a, b, selection.alignment(), poses);
    let path: Vec<Point> = ship.path().collect();
    surface.stroke_polyline(&path, colors.ship)?;

    if markers {
        surface.fill_dot(ship.anchor, MARKER_RADIUS, colors.pie)?;
        surface.fill_dot(ship.apex(), MARKER_RADIUS, colors.ship)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PoseSet};
    use crate::events::Navigation;
    use std::cell::RefCell;
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Srgba<f64>),
        Stroke(Vec<Point>, Srgba<f64>),
        Dot(Point, Srgba<f64>),
    }

    #[derive(Default)]
    struct Recorder {
        ops: RefCell<Vec<Op>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<Op> {
            self.ops.take()
        }
    }

    impl Surface for Recorder {
        type Error = Infallible;

        fn fill_background(&self, color: Srgba<f64>) -> Result<(), Infallible> {
            self.ops.borrow_mut().push(Op::Clear(color));
            Ok(())
        }

        fn stroke_polyline(&self, points: &[Point], color: Srgba<f64>) -> Result<(), Infallible> {
            self.ops.borrow_mut().push(Op::Stroke(points.to_vec(), color));
            Ok(())
        }

        fn fill_dot(&self, center: Point, _: f64, color: Srgba<f64>) -> Result<(), Infallible> {
            self.ops.borrow_mut().push(Op::Dot(center, color));
            Ok(())
        }
    }

    fn state(config: Config) -> State {
        State::new(&Config {
            seed: Some(1234),
            ..config
        })
        .unwrap()
    }

    fn strokes_in(ops: &[Op], color: Srgba<f64>) -> Vec<Vec<Point>> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Stroke(points, c) if *c == color => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_frame_layout_edge_highlight() {
        let colors = ThemeColors::default();
        let surface = Recorder::default();
        let mut state = state(Config::default());

        draw(&surface, &mut state, &colors).unwrap();
        let ops = surface.take();

        assert_eq!(ops[0], Op::Clear(colors.background));
        assert_eq!(strokes_in(&ops, colors.pie).len(), 15 * 3);

        let highlighted = strokes_in(&ops, colors.ship);
        assert_eq!(highlighted.len(), 2);
        let (a, b) = state.boundary().unwrap().edge(0);
        assert_eq!(highlighted[0], vec![a, b]);
        assert_eq!(highlighted[1].len(), 9);
        assert_eq!(highlighted[1], state.ship().unwrap().path().collect::<Vec<_>>());
    }

    #[test]
    fn test_triangle_highlight_strokes_three_sides() {
        let colors = ThemeColors::default();
        let surface = Recorder::default();
        let mut state = state(Config {
            highlight: Highlight::Triangle,
            ..Config::default()
        });

        draw(&surface, &mut state, &colors).unwrap();
        let highlighted = strokes_in(&surface.take(), colors.ship);
        assert_eq!(highlighted.len(), 4);

        let (a, b) = state.boundary().unwrap().edge(0);
        assert_eq!(highlighted[0], vec![state.center, a]);
        assert_eq!(highlighted[1], vec![state.center, b]);
        assert_eq!(highlighted[2], vec![a, b]);
    }

    #[test]
    fn test_redraw_keeps_rim_and_follows_selection() {
        let colors = ThemeColors::default();
        let surface = Recorder::default();
        let mut state = state(Config {
            slices: 4,
            poses: PoseSet::Three,
            ..Config::default()
        });

        draw(&surface, &mut state, &colors).unwrap();
        let first = surface.take();
        let rim = state.boundary().unwrap().clone();

        // position 1 -> 11 wraps to slice 3
        for _ in 0..2 {
            state.navigate(Navigation::Previous);
        }
        draw(&surface, &mut state, &colors).unwrap();
        let second = surface.take();

        assert_eq!(state.boundary().unwrap(), &rim);
        assert_eq!(strokes_in(&first, colors.pie), strokes_in(&second, colors.pie));
        assert_eq!(state.selection.slice(), 3);
        let (a, b) = rim.edge(3);
        assert_eq!(b, rim.points()[0]);
        assert_eq!(strokes_in(&second, colors.ship)[0], vec![a, b]);
    }

    #[test]
    fn test_debug_markers() {
        let colors = ThemeColors::default();
        let surface = Recorder::default();
        let mut state = state(Config {
            debug_markers: true,
            ..Config::default()
        });

        draw(&surface, &mut state, &colors).unwrap();
        let ship = state.ship().unwrap();
        let dots: Vec<_> = surface
            .take()
            .into_iter()
            .filter(|op| matches!(op, Op::Dot(..)))
            .collect();
        assert_eq!(
            dots,
            vec![Op::Dot(ship.anchor, colors.pie), Op::Dot(ship.apex(), colors.ship)]
        );
    }

    #[test]
    fn test_draws_onto_cairo_image() {
        let colors = ThemeColors::default();
        let mut state = state(Config {
            size: 200,
            min_radius: 40.0,
            max_radius: 90.0,
            ..Config::default()
        });
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 200).unwrap();
        let cr = Context::new(&image).unwrap();
        draw(&cr, &mut state, &colors).unwrap();
    }
}

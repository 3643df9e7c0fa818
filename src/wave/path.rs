use super::points::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    QuadTo { control: Point, to: Point },
    LineTo(Point),
    Close,
}

/// Closed outline of the water: a run of quadratic curves on top, straight
/// sides and a flat floor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WavePath {
    commands: Vec<PathCommand>,
}

/// Assembles the outline from the point buffer. Odd indices are control
/// points, even indices are curve anchors.
pub fn build_path(points: &[Point], first_point_x: f32, height: f32) -> WavePath {
    let Some(&start) = points.first() else {
        return WavePath::default();
    };
    let mut commands = Vec::with_capacity(points.len() / 2 + 4);
    commands.push(PathCommand::MoveTo(start));

    let mut index = 0;
    while index + 2 < points.len() {
        commands.push(PathCommand::QuadTo {
            control: points[index + 1],
            to: points[index + 2],
        });
        index += 2;
    }

    commands.push(PathCommand::LineTo(Point::new(points[index].x, height)));
    commands.push(PathCommand::LineTo(Point::new(first_point_x, height)));
    commands.push(PathCommand::Close);
    WavePath { commands }
}

impl WavePath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Flattens the curved top edge into a polyline with `steps` segments per
    /// curve. Stops at the first straight segment.
    pub fn surface(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut polyline = Vec::with_capacity(self.curve_count() * steps + 1);
        let mut cursor = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    polyline.push(point);
                    cursor = Some(point);
                }
                PathCommand::QuadTo { control, to } => {
                    let Some(from) = cursor else { break };
                    for step in 1..=steps {
                        let t = step as f32 / steps as f32;
                        polyline.push(quadratic(from, control, to, t));
                    }
                    cursor = Some(to);
                }
                PathCommand::LineTo(_) | PathCommand::Close => break,
            }
        }
        polyline
    }

    /// Y of the flat floor the outline closes along.
    pub fn floor(&self) -> Option<f32> {
        self.commands.iter().find_map(|command| match command {
            PathCommand::LineTo(point) => Some(point.y),
            _ => None,
        })
    }
}

fn quadratic(from: Point, control: Point, to: Point, t: f32) -> Point {
    let inv = 1.0 - t;
    let a = inv * inv;
    let b = 2.0 * inv * t;
    let c = t * t;
    Point::new(
        a * from.x + b * control.x + c * to.x,
        a * from.y + b * control.y + c * to.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::points::PointBuffer;

    #[test]
    fn empty_buffer_builds_empty_path() {
        assert!(build_path(&[], 0.0, 100.0).is_empty());
    }

    #[test]
    fn curves_consume_points_in_pairs() {
        let buffer = PointBuffer::seed(1, 400.0, 50.0, 10.0);
        let path = build_path(buffer.as_slice(), -400.0, 100.0);
        let commands = path.commands();

        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(-400.0, 50.0)));
        assert_eq!(path.curve_count(), 4);
        assert_eq!(
            commands[1],
            PathCommand::QuadTo {
                control: Point::new(-300.0, 60.0),
                to: Point::new(-200.0, 50.0),
            }
        );
        assert_eq!(commands[5], PathCommand::LineTo(Point::new(400.0, 100.0)));
        assert_eq!(commands[6], PathCommand::LineTo(Point::new(-400.0, 100.0)));
        assert_eq!(commands[7], PathCommand::Close);
        assert_eq!(path.floor(), Some(100.0));
    }

    #[test]
    fn surface_passes_through_anchors() {
        let buffer = PointBuffer::seed(1, 400.0, 50.0, 10.0);
        let path = build_path(buffer.as_slice(), -400.0, 100.0);
        let surface = path.surface(4);
        assert_eq!(surface.len(), 4 * 4 + 1);
        assert_eq!(surface[4], Point::new(-200.0, 50.0));
        assert_eq!(surface.last().copied(), Some(Point::new(400.0, 50.0)));
        // Halfway along the sag curve sits half a crest below the line.
        assert_eq!(surface[2], Point::new(-300.0, 55.0));
    }
}

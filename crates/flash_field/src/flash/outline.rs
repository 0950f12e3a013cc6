//! Tapered double-line outline of a grown flash.
//!
//! The outline is a single closed loop: the forward centerline followed by a
//! reversed "backflash" boundary offset from each interior joint. The offset
//! grows from zero at the first joint toward `thickness` at the tip, which
//! gives the filled shape its taper.
use crate::flash::Flash;
use crate::geometry::{angle_between, Point, Vector};

/// Absolute path command in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl PathCommand {
    pub fn point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        }
    }
}

/// One closed polygon describing a filled flash.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutlinePath {
    pub commands: Vec<PathCommand>,
}

impl OutlinePath {
    /// Polygon vertices in drawing order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(PathCommand::point)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl Flash {
    /// Builds the closed outline polygon for this flash.
    ///
    /// # Panics
    ///
    /// Panics if two consecutive edges do not share their joint, which
    /// means the centerline itself is broken.
    pub fn render_path(&self, thickness: f64) -> OutlinePath {
        let points = self.points();
        let mut commands = Vec::with_capacity(2 * points.len() + 1);

        commands.push(PathCommand::MoveTo(points[0]));
        commands.extend(points[1..].iter().copied().map(PathCommand::LineTo));

        let edges: Vec<Vector> = self.edges().collect();
        let backflash: Vec<Point> = edges
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let (v1, v2) = (&pair[0], &pair[1]);
                assert_eq!(v1.b, v2.a, "edge {} does not end where edge {} starts", i, i + 1);
                let phi = angle_between(v1, v2);
                let distance = thickness - thickness / (i as f64 + 1.0);
                Vector::from_polar(v1.b, phi, distance).b
            })
            .collect();

        commands.extend(backflash.into_iter().rev().map(PathCommand::LineTo));
        commands.push(PathCommand::Close);

        OutlinePath { commands }
    }
}

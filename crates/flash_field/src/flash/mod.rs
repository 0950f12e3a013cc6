//! A single lightning branch: an append-only path grown toward a target.
//!
//! - [`walk`]: the biased random walk that grows a [`Flash`] one node at a time
//! - [`outline`]: the tapered double-line polygon built from a grown path
use std::fmt;

use crate::geometry::{Point, Vector};

pub mod outline;
pub mod walk;

pub use outline::{OutlinePath, PathCommand};
pub use walk::{WalkParams, WalkStep};

/// A flash that forked off one of this flash's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    /// Index into the parent's points where the fork starts.
    pub node_index: usize,
    /// Index of the spawned flash in the owning field.
    pub flash_index: usize,
}

#[derive(Debug, Clone)]
pub struct Flash {
    width: f64,
    height: f64,
    end: Point,
    nodes: Vec<Point>,
    branches: Vec<Branch>,
    alternate_flag: bool,
}

impl Flash {
    /// Flash crossing the canvas from the middle of the bottom edge to the
    /// middle of the top edge.
    pub fn new(width: f64, height: f64) -> Self {
        let start = Point::new(width / 2.0, height);
        let end = Point::new(width / 2.0, 0.0);
        Self::between(width, height, start, end)
    }

    pub fn between(width: f64, height: f64, start: Point, end: Point) -> Self {
        Self {
            width,
            height,
            end,
            nodes: vec![start],
            branches: Vec::new(),
            alternate_flag: false,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn start(&self) -> Point {
        self.nodes[0]
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// The most recently appended node.
    pub fn tip(&self) -> Point {
        // Seeded with `start`, never empty.
        self.nodes[self.nodes.len() - 1]
    }

    pub fn points(&self) -> &[Point] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; kept for symmetry with [`Flash::len`].
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub(crate) fn record_branch(&mut self, branch: Branch) {
        debug_assert!(branch.node_index < self.nodes.len());
        self.branches.push(branch);
    }

    /// Consecutive segments along the path.
    pub fn edges(&self) -> impl Iterator<Item = Vector> + '_ {
        self.nodes.windows(2).map(|w| Vector::new(w[0], w[1]))
    }

    /// True once the tip is strictly within `radius` of the target.
    pub fn arrived(&self, radius: f64) -> bool {
        self.tip().within_perimeter(&self.end, radius)
    }
}

impl fmt::Display for Flash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flash_crosses_the_canvas_vertically() {
        let flash = Flash::new(100.0, 100.0);
        assert_eq!(flash.start(), Point::new(50.0, 100.0));
        assert_eq!(flash.end(), Point::new(50.0, 0.0));
        assert_eq!(flash.points(), &[Point::new(50.0, 100.0)]);
        assert_eq!(flash.tip(), flash.start());
        assert!(!flash.is_empty());
    }

    #[test]
    fn edges_pair_consecutive_points() {
        let mut flash = Flash::between(10.0, 10.0, Point::new(0.0, 0.0), Point::new(9.0, 9.0));
        flash.nodes.push(Point::new(1.0, 1.0));
        flash.nodes.push(Point::new(2.0, 3.0));

        let edges: Vec<_> = flash.edges().collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].b, edges[1].a);
        assert_eq!(edges[1].b, flash.tip());
    }

    #[test]
    fn single_node_flash_has_no_edges() {
        assert_eq!(Flash::new(10.0, 10.0).edges().count(), 0);
    }

    #[test]
    fn arrived_uses_strict_radius() {
        let flash = Flash::between(10.0, 10.0, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!(!flash.arrived(5.0));
        assert!(flash.arrived(5.0001));
    }

    #[test]
    fn instances_do_not_share_nodes() {
        let mut a = Flash::new(10.0, 10.0);
        let b = Flash::new(10.0, 10.0);
        a.nodes.push(Point::new(1.0, 1.0));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn display_joins_nodes_with_arrows() {
        let mut flash = Flash::between(10.0, 10.0, Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        flash.nodes.push(Point::new(1.0, 2.0));
        assert_eq!(flash.to_string(), "<0, 0> → <1, 2>");
    }
}

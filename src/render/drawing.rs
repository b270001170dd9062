//! Polyline drawings used as tile payloads
//!
//! A drawing is a list of open paths in tile coordinates (y grows downward).
//! Rotation and mirroring are exact coordinate maps about the tile
//! footprint, so a quarter turn of a unit tile lands back on the unit tile
//! with no floating point drift beyond the arithmetic itself.

use crate::spatial::tiles::TilePayload;

/// A 2-D point in tile or board coordinates
pub type Point = [f64; 2];

/// An ordered list of polyline paths
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    paths: Vec<Vec<Point>>,
}

impl Drawing {
    /// Create an empty drawing
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Create a drawing from a list of paths
    pub const fn from_paths(paths: Vec<Vec<Point>>) -> Self {
        Self { paths }
    }

    /// Append one path
    pub fn add_path(&mut self, path: Vec<Point>) {
        self.paths.push(path);
    }

    /// Append every path of another drawing
    pub fn append(&mut self, other: &Self) {
        self.paths.extend(other.paths.iter().cloned());
    }

    /// The paths in insertion order
    pub fn paths(&self) -> &[Vec<Point>] {
        &self.paths
    }

    /// Test if the drawing has no paths
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// A copy shifted by the given offsets
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|[x, y]| [x + dx, y + dy])
    }

    /// Smallest axis-aligned box containing every point, as [min, max]
    pub fn bounds(&self) -> Option<[Point; 2]> {
        let mut points = self.paths.iter().flatten();
        let &first = points.next()?;
        let mut min = first;
        let mut max = first;
        for &[x, y] in points {
            min = [min[0].min(x), min[1].min(y)];
            max = [max[0].max(x), max[1].max(y)];
        }
        Some([min, max])
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            paths: self
                .paths
                .iter()
                .map(|path| path.iter().map(|&point| f(point)).collect())
                .collect(),
        }
    }
}

impl TilePayload for Drawing {
    /// Rotate clockwise about the tile center, one quarter turn at a time
    fn rotated(&self, quarter_turns: usize, tile_size: [f64; 2]) -> Self {
        let [center_x, center_y] = [tile_size[0] / 2.0, tile_size[1] / 2.0];
        let mut out = self.clone();
        for _ in 0..quarter_turns % 4 {
            out = out.map_points(|[x, y]| [center_x - (y - center_y), center_y + (x - center_x)]);
        }
        out
    }

    /// Flip across the tile's vertical midline
    fn mirrored(&self, tile_size: [f64; 2]) -> Self {
        let width = tile_size[0];
        self.map_points(|[x, y]| [width - x, y])
    }
}

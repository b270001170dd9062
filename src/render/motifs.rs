//! Built-in tile catalogs for the command-line generator

use crate::render::drawing::Drawing;
use crate::spatial::tiles::{EdgeLabel, TileSet};
use std::collections::BTreeMap;

/// Conventional label for an edge nothing connects through
///
/// The solver gives it no special meaning; it matches other blank edges by
/// ordinary equality.
pub const BLANK_EDGE: EdgeLabel = -1;

/// Quarter-turn elbow connecting the west and north edge midpoints
fn elbow() -> Drawing {
    Drawing::from_paths(vec![vec![[0.0, 0.5], [0.5, 0.5], [0.5, 0.0]]])
}

/// Straight stroke connecting the west and east edge midpoints
fn horizontal() -> Drawing {
    Drawing::from_paths(vec![vec![[0.0, 0.5], [1.0, 0.5]]])
}

/// Straight stroke connecting the north and south edge midpoints
fn vertical() -> Drawing {
    Drawing::from_paths(vec![vec![[0.5, 0.0], [0.5, 1.0]]])
}

fn single_layer(layer: usize, drawing: Drawing) -> BTreeMap<usize, Drawing> {
    let mut layers = BTreeMap::new();
    layers.insert(layer, drawing);
    layers
}

/// Multi-color pipe network over unit tiles
///
/// Per color: an elbow in all four orientations and a straight in both,
/// drawn on that color's layer. One blank tile (weighted by
/// `blank_weight`) lets pipes end, and every unordered color pair gets
/// both crossing orientations. Any rectangle is tileable with this
/// catalog, so solving cannot fail.
pub fn pipes(colors: usize, blank_weight: f64) -> TileSet<Drawing> {
    let mut tile_set = TileSet::new([1.0, 1.0]);

    for color in 0..colors {
        let c = color as EdgeLabel;
        tile_set.make_tile(
            single_layer(color, elbow()),
            [BLANK_EDGE, BLANK_EDGE, c, c],
            4,
            false,
            1.0,
        );
        tile_set.make_tile(
            single_layer(color, horizontal()),
            [c, BLANK_EDGE, c, BLANK_EDGE],
            2,
            false,
            1.0,
        );
    }

    tile_set.make_tile(BTreeMap::new(), [BLANK_EDGE; 4], 1, false, blank_weight);

    for c0 in 0..colors {
        for c1 in (c0 + 1)..colors {
            let mut layers = BTreeMap::new();
            layers.insert(c0, horizontal());
            layers.insert(c1, vertical());
            tile_set.make_tile(
                layers,
                [c0 as EdgeLabel, c1 as EdgeLabel, c0 as EdgeLabel, c1 as EdgeLabel],
                2,
                false,
                1.0,
            );
        }
    }

    tile_set
}

/// Single-layer maze of elbows and straights over unit tiles
///
/// The classic two-template catalog: an elbow with edges `[0, 0, 1, 1]` in
/// all four orientations and a straight with edges `[1, 0, 1, 0]` in both.
/// Universally tileable on any rectangle.
pub fn angles() -> TileSet<Drawing> {
    let mut tile_set = TileSet::new([1.0, 1.0]);
    tile_set.make_tile(single_layer(0, elbow()), [0, 0, 1, 1], 4, false, 1.0);
    tile_set.make_tile(single_layer(0, horizontal()), [1, 0, 1, 0], 2, false, 1.0);
    tile_set
}

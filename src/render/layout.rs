//! Placement of solved tiles into per-layer board drawings

use crate::render::drawing::Drawing;
use crate::spatial::tiles::TileSet;
use ndarray::Array2;

/// Translate a solved grid into one drawing per layer
///
/// Each cell's tile payloads are shifted to the cell origin
/// `(col * tile_w, row * tile_h)` and merged into the output drawing for
/// their layer. The layer list grows on demand; layers no tile uses stay
/// empty rather than being skipped, so layer keys remain stable indices.
pub fn assemble_layers(solution: &Array2<usize>, tile_set: &TileSet<Drawing>) -> Vec<Drawing> {
    let [tile_w, tile_h] = tile_set.tile_size();
    let mut layers: Vec<Drawing> = Vec::new();

    for ((row, col), &tile_id) in solution.indexed_iter() {
        let Some(tile) = tile_set.tile(tile_id) else {
            continue;
        };
        for (&layer, drawing) in tile.layers() {
            while layers.len() <= layer {
                layers.push(Drawing::new());
            }
            let placed = drawing.translated(col as f64 * tile_w, row as f64 * tile_h);
            if let Some(target) = layers.get_mut(layer) {
                target.append(&placed);
            }
        }
    }

    layers
}

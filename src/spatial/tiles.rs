//! Tile templates, variant generation, and edge-matching adjacency rules
//!
//! A tile set owns an append-only list of tiles; a tile's id is its index in
//! that list and is the only identity the solver ever uses. Registering a
//! tile can fan out into rotated and mirrored variants, each an independent
//! tile with its own id. The adjacency table is derived from edge-label
//! equality and must be rebuilt after the last registration.

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::WEIGHT_EPSILON;
use crate::spatial::direction::Direction;
use std::collections::BTreeMap;

/// Comparable tag on one side of a tile; facing labels must be equal for
/// two tiles to sit next to each other
pub type EdgeLabel = i32;

/// Drawing content attached to a tile, opaque to the solver
///
/// The solver only ever clones payloads and asks for rotated or mirrored
/// copies while registering tile variants; it never inspects or compares
/// them. Renderers supply the real implementation.
pub trait TilePayload: Clone {
    /// A copy rotated clockwise by `quarter_turns` about the tile center
    fn rotated(&self, quarter_turns: usize, tile_size: [f64; 2]) -> Self;

    /// A copy flipped horizontally across the tile's vertical midline
    fn mirrored(&self, tile_size: [f64; 2]) -> Self;
}

/// Payload for solver-only use where nothing is drawn
impl TilePayload for () {
    fn rotated(&self, _quarter_turns: usize, _tile_size: [f64; 2]) -> Self {}

    fn mirrored(&self, _tile_size: [f64; 2]) -> Self {}
}

/// Immutable tile template: four edge labels, a selection weight, and
/// per-layer drawing payloads
#[derive(Clone, Debug)]
pub struct Tile<P> {
    edges: [EdgeLabel; 4],
    weight: f64,
    layers: BTreeMap<usize, P>,
}

impl<P: TilePayload> Tile<P> {
    /// All four edge labels in direction-index order
    pub const fn edges(&self) -> [EdgeLabel; 4] {
        self.edges
    }

    /// The edge label facing the given direction
    pub const fn edge(&self, direction: Direction) -> EdgeLabel {
        match direction {
            Direction::East => self.edges[0],
            Direction::South => self.edges[1],
            Direction::West => self.edges[2],
            Direction::North => self.edges[3],
        }
    }

    /// Relative likelihood of this tile among equally constrained options
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Drawing payloads keyed by layer
    pub const fn layers(&self) -> &BTreeMap<usize, P> {
        &self.layers
    }

    fn rotated(&self, quarter_turns: usize, tile_size: [f64; 2]) -> Self {
        let mut edges = self.edges;
        edges.rotate_right(quarter_turns % 4);
        let layers = self
            .layers
            .iter()
            .map(|(&layer, payload)| (layer, payload.rotated(quarter_turns, tile_size)))
            .collect();
        Self {
            edges,
            weight: self.weight,
            layers,
        }
    }

    fn mirrored(&self, tile_size: [f64; 2]) -> Self {
        let [east, south, west, north] = self.edges;
        let layers = self
            .layers
            .iter()
            .map(|(&layer, payload)| (layer, payload.mirrored(tile_size)))
            .collect();
        Self {
            edges: [west, south, east, north],
            weight: self.weight,
            layers,
        }
    }
}

/// Edge-compatibility table derived from a tile set
///
/// For each direction and tile id, a bitset of the tiles allowed to sit on
/// that side. By construction `allowed(d, i)` contains `j` exactly when
/// `allowed(opposite(d), j)` contains `i`.
#[derive(Clone, Debug)]
pub struct AdjacencyRules {
    allowed: Vec<Vec<TileBitset>>,
}

impl AdjacencyRules {
    /// Tiles allowed next to `tile` in `direction`
    pub fn allowed(&self, direction: Direction, tile: usize) -> Option<&TileBitset> {
        self.allowed
            .get(direction.index())
            .and_then(|row| row.get(tile))
    }

    /// Test whether tile `b` may sit on tile `a`'s side facing `direction`
    pub fn permits(&self, direction: Direction, a: usize, b: usize) -> bool {
        self.allowed(direction, a).is_some_and(|set| set.contains(b))
    }
}

/// Append-only catalog of tiles sharing one physical footprint
#[derive(Clone, Debug)]
pub struct TileSet<P> {
    tile_size: [f64; 2],
    tiles: Vec<Tile<P>>,
    rules: Option<AdjacencyRules>,
}

impl<P: TilePayload> TileSet<P> {
    /// Create an empty tile set for tiles of the given width and height
    pub const fn new(tile_size: [f64; 2]) -> Self {
        Self {
            tile_size,
            tiles: Vec::new(),
            rules: None,
        }
    }

    /// Register a tile and its rotated and mirrored variants
    ///
    /// `rotations` is the number of quarter-turn variants to register,
    /// clamped to 1..=4 and counting the base orientation; with `mirror`
    /// the horizontally flipped tile gets the same rotations. Non-positive
    /// weights are clamped to a small epsilon rather than rejected, so a
    /// "never prefer this" tile still participates in exhaustive search.
    /// Registration invalidates any previously built adjacency rules.
    /// Returns the ids of the new tiles in registration order.
    pub fn make_tile(
        &mut self,
        layers: BTreeMap<usize, P>,
        edges: [EdgeLabel; 4],
        rotations: usize,
        mirror: bool,
        weight: f64,
    ) -> Vec<usize> {
        let base = Tile {
            edges,
            weight: weight.max(WEIGHT_EPSILON),
            layers,
        };

        let rotations = rotations.clamp(1, 4);
        let mut variants = Vec::with_capacity(if mirror { rotations * 2 } else { rotations });
        for quarter_turns in 0..rotations {
            variants.push(base.rotated(quarter_turns, self.tile_size));
        }
        if mirror {
            let flipped = base.mirrored(self.tile_size);
            for quarter_turns in 0..rotations {
                variants.push(flipped.rotated(quarter_turns, self.tile_size));
            }
        }

        let mut ids = Vec::with_capacity(variants.len());
        for tile in variants {
            ids.push(self.tiles.len());
            self.tiles.push(tile);
        }
        self.rules = None;
        ids
    }

    /// Derive the adjacency table from edge-label equality
    ///
    /// Total and idempotent; must be called after the last registration and
    /// before constructing any grid over this tile set.
    pub fn build_adjacency_rules(&mut self) {
        let tile_count = self.tiles.len();
        let mut allowed = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            let mut rows = Vec::with_capacity(tile_count);
            for tile in &self.tiles {
                let facing = tile.edge(direction);
                let mut partners = TileBitset::empty(tile_count);
                for (other_id, other) in self.tiles.iter().enumerate() {
                    if other.edge(direction.opposite()) == facing {
                        partners.insert(other_id);
                    }
                }
                rows.push(partners);
            }
            allowed.push(rows);
        }
        self.rules = Some(AdjacencyRules { allowed });
    }

    /// The adjacency table, if built since the last registration
    pub const fn rules(&self) -> Option<&AdjacencyRules> {
        self.rules.as_ref()
    }

    /// Number of registered tiles (variants included)
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Test if no tiles are registered
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by id
    pub fn tile(&self, id: usize) -> Option<&Tile<P>> {
        self.tiles.get(id)
    }

    /// Selection weight of a tile, or the clamp floor for unknown ids
    pub fn weight(&self, id: usize) -> f64 {
        self.tiles.get(id).map_or(WEIGHT_EPSILON, Tile::weight)
    }

    /// Physical tile footprint used by renderers
    pub const fn tile_size(&self) -> [f64; 2] {
        self.tile_size
    }
}

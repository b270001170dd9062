//! Validates possibility bitsets, variant registration, and adjacency derivation

use std::collections::BTreeMap;
use wavetile::algorithm::bitset::TileBitset;
use wavetile::algorithm::selection::RandomSelector;
use wavetile::spatial::direction::Direction;
use wavetile::spatial::tiles::TileSet;

fn plain_tile_set(edge_lists: &[[i32; 4]]) -> TileSet<()> {
    let mut tile_set = TileSet::new([1.0, 1.0]);
    for &edges in edge_lists {
        tile_set.make_tile(BTreeMap::new(), edges, 1, false, 1.0);
    }
    tile_set
}

#[test]
fn test_bitset_operations() {
    let mut set1 = TileBitset::empty(10);
    set1.insert(0);
    set1.insert(3);
    set1.insert(5);

    let mut set2 = TileBitset::empty(10);
    set2.insert(3);
    set2.insert(5);
    set2.insert(7);

    set1.intersect_with(&set2);
    assert_eq!(set1.iter().collect::<Vec<_>>(), vec![3, 5]);
    assert_eq!(set1.count(), 2);
    assert!(!set1.is_empty());

    set1.union_with(&set2);
    assert_eq!(set1.iter().collect::<Vec<_>>(), vec![3, 5, 7]);
}

#[test]
fn test_bitset_filled_single_collapsed() {
    let filled = TileBitset::filled(6);
    assert_eq!(filled.count(), 6);
    assert_eq!(filled.collapsed(), None);

    let single = TileBitset::single(6, 4);
    assert_eq!(single.count(), 1);
    assert_eq!(single.collapsed(), Some(4));

    let mut emptied = single;
    emptied.remove(4);
    assert!(emptied.is_empty());
    assert_eq!(emptied.collapsed(), None);
}

#[test]
fn test_empty_intersection() {
    let mut set1 = TileBitset::empty(10);
    set1.insert(1);
    set1.insert(2);

    let mut set2 = TileBitset::empty(10);
    set2.insert(3);
    set2.insert(4);

    set1.intersect_with(&set2);
    assert!(set1.is_empty());
    assert_eq!(set1.count(), 0);
}

// Rotation by one quarter turn shifts the edge array right by one; the
// registered variants reproduce every cyclic shift of the base
#[test]
fn test_rotation_shifts_edges() {
    let mut tile_set: TileSet<()> = TileSet::new([1.0, 1.0]);
    let ids = tile_set.make_tile(BTreeMap::new(), [0, 1, 2, 3], 4, false, 1.0);
    assert_eq!(ids, vec![0, 1, 2, 3]);

    let edges: Vec<[i32; 4]> = ids
        .iter()
        .filter_map(|&id| tile_set.tile(id).map(|tile| tile.edges()))
        .collect();
    assert_eq!(edges, vec![[0, 1, 2, 3], [3, 0, 1, 2], [2, 3, 0, 1], [1, 2, 3, 0]]);
}

#[test]
fn test_mirror_swaps_east_and_west() {
    let mut tile_set: TileSet<()> = TileSet::new([1.0, 1.0]);
    let ids = tile_set.make_tile(BTreeMap::new(), [0, 1, 2, 3], 1, true, 1.0);
    assert_eq!(ids.len(), 2);

    let mirrored = tile_set.tile(1).map(|tile| tile.edges());
    assert_eq!(mirrored, Some([2, 1, 0, 3]));
}

#[test]
fn test_adjacency_symmetry() {
    let mut tile_set = plain_tile_set(&[[1, 0, 2, 0], [2, 2, 1, 0], [0, 1, 0, 2]]);
    tile_set.build_adjacency_rules();
    let rules = tile_set.rules().unwrap();

    for direction in Direction::ALL {
        for a in 0..tile_set.tile_count() {
            for b in 0..tile_set.tile_count() {
                assert_eq!(
                    rules.permits(direction, a, b),
                    rules.permits(direction.opposite(), b, a),
                    "symmetry broken for {direction:?} {a} {b}"
                );
            }
        }
    }
}

#[test]
fn test_adjacency_matches_facing_edges() {
    let mut tile_set = plain_tile_set(&[[1, 0, 2, 0], [2, 2, 1, 0]]);
    tile_set.build_adjacency_rules();
    let rules = tile_set.rules().unwrap();

    // Tile 0's east edge is 1; only tile 1 has 1 on its west edge
    assert!(rules.permits(Direction::East, 0, 1));
    assert!(!rules.permits(Direction::East, 0, 0));

    // Tile 0's south edge is 0; both tiles carry 0 on their north edge
    assert!(rules.permits(Direction::South, 0, 0));
    assert!(rules.permits(Direction::South, 0, 1));

    // Tile 1's south edge is 2; no tile has 2 on its north edge
    assert!(!rules.permits(Direction::South, 1, 0));
    assert!(!rules.permits(Direction::South, 1, 1));
}

// Registration invalidates rules; rebuilding covers the new tiles
#[test]
fn test_registration_invalidates_rules() {
    let mut tile_set = plain_tile_set(&[[0, 0, 0, 0]]);
    tile_set.build_adjacency_rules();
    assert!(tile_set.rules().is_some());

    tile_set.make_tile(BTreeMap::new(), [0, 0, 0, 0], 1, false, 1.0);
    assert!(tile_set.rules().is_none());

    tile_set.build_adjacency_rules();
    let rules = tile_set.rules().unwrap();
    assert!(rules.permits(Direction::East, 0, 1));
}

#[test]
fn test_weight_clamped_above_zero() {
    let mut tile_set: TileSet<()> = TileSet::new([1.0, 1.0]);
    let ids = tile_set.make_tile(BTreeMap::new(), [0; 4], 1, false, 0.0);
    let id = ids.first().copied().unwrap();
    assert!(tile_set.weight(id) > 0.0);
}

#[test]
fn test_weighted_order_is_a_permutation() {
    let mut selector = RandomSelector::new(99);
    let mut order = selector.weighted_order(&[1.0, 5.0, 2.0, 0.5]);
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_weighted_choice_respects_zero_weights() {
    let mut selector = RandomSelector::new(7);
    for _ in 0..50 {
        let choice = selector.weighted_choice(&[0.0, 1.0, 0.0]);
        assert_eq!(choice, 1);
    }
}

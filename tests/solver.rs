//! End-to-end backtracking search: solvable catalogs, unsolvable catalogs, determinism

use std::collections::BTreeMap;
use wavetile::algorithm::executor::solve_grid;
use wavetile::algorithm::selection::RandomSelector;
use wavetile::render::motifs;
use wavetile::spatial::direction::Direction;
use wavetile::spatial::grid::{Grid, Topology};
use wavetile::spatial::tiles::TileSet;

// The angle/straight catalog can tile any rectangle, so solving must
// always terminate with a fully determined grid
#[test]
fn test_angles_three_by_three_always_solves() {
    let mut tile_set = motifs::angles();
    tile_set.build_adjacency_rules();

    for seed in [1, 7, 42, 1234] {
        let grid = Grid::new(&tile_set, 3, 3, Topology::Clamped).unwrap();
        let mut selector = RandomSelector::new(seed);
        let solved = solve_grid(grid, &mut selector, &mut None);

        let solved = solved.unwrap_or_else(|| unreachable!("seed {seed} failed"));
        assert_eq!(solved.unresolved_cells(), Some(0));
        assert!(solved.solution().is_some());
    }
}

// Every adjacent pair of a returned solution satisfies the adjacency table
#[test]
fn test_solution_satisfies_adjacency() {
    let mut tile_set = motifs::angles();
    tile_set.build_adjacency_rules();

    let grid = Grid::new(&tile_set, 4, 4, Topology::Clamped).unwrap();
    let mut selector = RandomSelector::new(5);
    let solved = solve_grid(grid, &mut selector, &mut None).unwrap();
    let rules = solved.rules();

    for position in solved.positions() {
        let here = solved.determined(position[0], position[1]).unwrap();
        for direction in [Direction::East, Direction::South] {
            if let Some(neighbor) = solved.neighbor(position, direction) {
                let there = solved.determined(neighbor[0], neighbor[1]).unwrap();
                assert!(
                    rules.permits(direction, here, there),
                    "tiles {here} and {there} clash across {direction:?}"
                );
            }
        }
    }
}

// Two tiles whose edges never match anything cannot fill a 2x2 board
#[test]
fn test_mutually_incompatible_tiles_are_unsolvable() {
    let mut tile_set: TileSet<()> = TileSet::new([1.0, 1.0]);
    tile_set.make_tile(BTreeMap::new(), [1, 2, 3, 4], 1, false, 1.0);
    tile_set.make_tile(BTreeMap::new(), [5, 6, 7, 8], 1, false, 1.0);
    tile_set.build_adjacency_rules();

    let grid = Grid::new(&tile_set, 2, 2, Topology::Clamped).unwrap();
    let mut selector = RandomSelector::new(3);
    assert!(solve_grid(grid, &mut selector, &mut None).is_none());
}

#[test]
fn test_single_cell_single_tile_is_trivially_solved() {
    let mut tile_set: TileSet<()> = TileSet::new([1.0, 1.0]);
    tile_set.make_tile(BTreeMap::new(), [0; 4], 1, false, 1.0);
    tile_set.build_adjacency_rules();

    let grid = Grid::new(&tile_set, 1, 1, Topology::Clamped).unwrap();
    let mut selector = RandomSelector::new(1);
    let solved = solve_grid(grid, &mut selector, &mut None).unwrap();
    assert_eq!(solved.determined(0, 0), Some(0));
}

#[test]
fn test_identical_seeds_produce_identical_solutions() {
    let mut tile_set = motifs::pipes(2, 1.0);
    tile_set.build_adjacency_rules();

    let solve = |seed: u64| {
        let grid = Grid::new(&tile_set, 5, 5, Topology::Clamped).unwrap();
        let mut selector = RandomSelector::new(seed);
        solve_grid(grid, &mut selector, &mut None)
            .and_then(|solved| solved.solution())
            .unwrap()
    };

    assert_eq!(solve(12), solve(12));
}

#[test]
fn test_toroidal_grid_solves() {
    let mut tile_set = motifs::angles();
    tile_set.build_adjacency_rules();

    let grid = Grid::new(&tile_set, 3, 3, Topology::Toroidal).unwrap();
    let mut selector = RandomSelector::new(11);
    let solved = solve_grid(grid, &mut selector, &mut None);
    assert!(solved.is_some());
}

#[test]
fn test_pipes_catalog_solves() {
    let mut tile_set = motifs::pipes(2, 2.0);
    tile_set.build_adjacency_rules();

    let grid = Grid::new(&tile_set, 4, 4, Topology::Clamped).unwrap();
    let mut selector = RandomSelector::new(8);
    let solved = solve_grid(grid, &mut selector, &mut None).unwrap();
    let solution = solved.solution().unwrap();
    assert_eq!(solution.dim(), (4, 4));
}

// Construction preconditions fail fast instead of solving a wrong problem
#[test]
fn test_grid_construction_preconditions() {
    let empty: TileSet<()> = TileSet::new([1.0, 1.0]);
    assert!(Grid::new(&empty, 2, 2, Topology::Clamped).is_err());

    let mut unbuilt: TileSet<()> = TileSet::new([1.0, 1.0]);
    unbuilt.make_tile(BTreeMap::new(), [0; 4], 1, false, 1.0);
    assert!(Grid::new(&unbuilt, 2, 2, Topology::Clamped).is_err());

    let mut built = unbuilt;
    built.build_adjacency_rules();
    assert!(Grid::new(&built, 0, 2, Topology::Clamped).is_err());
    assert!(Grid::new(&built, 2, 2, Topology::Clamped).is_ok());
}

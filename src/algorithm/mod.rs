//! The solver core: possibility sets, propagation, selection, and search

/// Possibility bitset over tile ids
pub mod bitset;
/// Backtracking search driver over resumable choice frames
pub mod executor;
/// Local consistency enforcement radiating out from changed cells
pub mod propagation;
/// Seeded randomness and entropy-ordered candidate selection
pub mod selection;

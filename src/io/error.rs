//! Error types for solver construction and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and export operations
///
/// Contradictions during search are not represented here: a dead branch is
/// recovered by backtracking, and an exhausted search space is reported as
/// an ordinary `None` from the solver. These variants cover caller mistakes
/// caught up front and failures at the output boundary.
#[derive(Debug)]
pub enum SolverError {
    /// A grid was requested over a tile set with no registered tiles
    EmptyTileSet,

    /// A grid was requested before adjacency rules were (re)built
    ///
    /// Registering a tile invalidates the rules; they must be rebuilt
    /// after the last registration.
    RulesNotBuilt,

    /// Grid dimensions must both be nonzero
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Solver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The search space was exhausted without a solution
    ///
    /// Produced at the CLI boundary; the library itself reports
    /// unsatisfiability as a value, not an error.
    Unsolvable {
        /// Grid rows
        rows: usize,
        /// Grid columns
        cols: usize,
        /// Number of tiles in the catalog
        tile_count: usize,
    },

    /// Failed to save the rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTileSet => {
                write!(f, "Tile set has no registered tiles")
            }
            Self::RulesNotBuilt => {
                write!(
                    f,
                    "Adjacency rules were not built after the last tile registration"
                )
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Grid dimensions {rows}x{cols} must both be nonzero")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Unsolvable {
                rows,
                cols,
                tile_count,
            } => {
                write!(
                    f,
                    "No solution exists for a {rows}x{cols} grid over {tile_count} tiles"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = SolverError::Unsolvable {
            rows: 2,
            cols: 2,
            tile_count: 2,
        };
        let message = err.to_string();
        assert!(message.contains("2x2"));
        assert!(message.contains("2 tiles"));
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("colors", &0, &"at least one color is required");
        match err {
            SolverError::InvalidParameter { parameter, .. } => {
                assert_eq!(parameter, "colors");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }
}

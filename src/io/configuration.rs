//! Solver constants and runtime configuration defaults

// Floor applied to tile weights at registration so probability
// normalization never divides by zero
/// Smallest weight a registered tile can carry
pub const WEIGHT_EPSILON: f64 = 1e-6;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 20;

/// Default number of grid columns
pub const DEFAULT_COLS: usize = 20;

/// Default number of pipe colors in the pipes motif
pub const DEFAULT_COLORS: usize = 2;

/// Default relative weight of the empty tile in the pipes motif
pub const DEFAULT_BLANK_WEIGHT: f64 = 1.0;

// Output settings
/// Default edge length of one rendered tile in pixels
pub const DEFAULT_PIXELS_PER_TILE: u32 = 48;

/// Default output path
pub const DEFAULT_OUTPUT: &str = "wavetile.png";

/// Canvas background color (opaque white, paper-like)
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Stroke colors cycled by drawing layer
pub const LAYER_PALETTE: [[u8; 4]; 6] = [
    [25, 25, 25, 255],
    [200, 60, 40, 255],
    [40, 90, 180, 255],
    [30, 140, 90, 255],
    [220, 160, 40, 255],
    [130, 60, 160, 255],
];

//! Engine constants and validation limits

/// Side length of one grid cell in centimetres
pub const CELL_SIZE_CM: u32 = 5;

/// Smallest accepted plot side in centimetres
pub const MIN_PLOT_SIDE_CM: u32 = 100;

/// Largest accepted plot side in centimetres
pub const MAX_PLOT_SIDE_CM: u32 = 1000;

/// Largest possible plot side in cells, derived from the ceiling above
pub const MAX_CELLS_PER_SIDE: usize = (MAX_PLOT_SIDE_CM / CELL_SIZE_CM) as usize;

// Bounds worst-case planner work; rejected units still count toward it
/// Maximum total units a single request may ask for
pub const MAX_REQUEST_UNITS: u64 = 10_000;

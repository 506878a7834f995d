//! Spatial primitives for the discretised plot

/// Plot occupancy tracking with rectangle commit semantics
pub mod grid;
/// Axis-aligned cell rectangles and the adjacency rule
pub mod rect;

pub use grid::OccupancyGrid;
pub use rect::Rect;

//! Wire contract of the layout engine and plot validation
//!
//! Field names follow the JSON contract of the catalog service:
//! `snake_case`, dimensions in centimetres on the way in, grid cells on the
//! way out.

use serde::{Deserialize, Serialize};

use crate::catalog::vegetable::VegetableId;
use crate::io::configuration::{CELL_SIZE_CM, MAX_PLOT_SIDE_CM, MIN_PLOT_SIDE_CM};
use crate::io::error::{LayoutError, Result};
use crate::spatial::rect::Rect;

/// One requested line item: a vegetable type and how many units of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    /// Catalog id of the requested type
    pub vegetable_id: VegetableId,
    /// Requested unit count; zero-quantity items are ignored
    pub quantity: u32,
}

/// A layout generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Plot width in centimetres
    pub width_cm: u32,
    /// Plot height in centimetres
    pub height_cm: u32,
    /// Requested vegetables and quantities
    pub items: Vec<RequestItem>,
}

impl LayoutRequest {
    /// Validate the plot dimensions and convert them to cells
    ///
    /// # Errors
    ///
    /// Returns an error when either side is outside
    /// [`MIN_PLOT_SIDE_CM`]`..=`[`MAX_PLOT_SIDE_CM`] or is not a multiple of
    /// [`CELL_SIZE_CM`].
    pub fn plot(&self) -> Result<PlotDimensions> {
        PlotDimensions::from_centimeters(self.width_cm, self.height_cm)
    }
}

/// Validated plot size in grid cells
///
/// Each side is at most [`MAX_CELLS_PER_SIDE`] cells once validated.
///
/// [`MAX_CELLS_PER_SIDE`]: crate::io::configuration::MAX_CELLS_PER_SIDE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotDimensions {
    width: usize,
    height: usize,
}

impl PlotDimensions {
    /// Validate centimetre dimensions and derive the cell grid
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidPlotDimension`] when a side is outside
    /// the accepted range or not a multiple of the cell size.
    pub fn from_centimeters(width_cm: u32, height_cm: u32) -> Result<Self> {
        Ok(Self {
            width: validate_side("width", width_cm)?,
            height: validate_side("height", height_cm)?,
        })
    }

    /// Plot width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Plot height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total cell count of the plot
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Check one plot side and convert it to cells
fn validate_side(axis: &'static str, value_cm: u32) -> Result<usize> {
    if value_cm < MIN_PLOT_SIDE_CM {
        return Err(LayoutError::InvalidPlotDimension {
            axis,
            value_cm,
            reason: format!("below the {MIN_PLOT_SIDE_CM} cm minimum"),
        });
    }
    if value_cm > MAX_PLOT_SIDE_CM {
        return Err(LayoutError::InvalidPlotDimension {
            axis,
            value_cm,
            reason: format!("above the {MAX_PLOT_SIDE_CM} cm maximum"),
        });
    }
    if value_cm % CELL_SIZE_CM != 0 {
        return Err(LayoutError::InvalidPlotDimension {
            axis,
            value_cm,
            reason: format!("not a multiple of the {CELL_SIZE_CM} cm cell size"),
        });
    }
    Ok((value_cm / CELL_SIZE_CM) as usize)
}

/// One successfully placed vegetable unit, in grid-cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedVegetable {
    /// Catalog id of the placed type
    pub vegetable_id: VegetableId,
    /// Column of the top-left cell
    pub x: usize,
    /// Row of the top-left cell
    pub y: usize,
    /// Footprint width in cells
    pub w: usize,
    /// Footprint height in cells
    pub h: usize,
}

impl PlacedVegetable {
    /// Build from a committed rectangle
    pub const fn from_rect(vegetable_id: VegetableId, rect: Rect) -> Self {
        Self {
            vegetable_id,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }

    /// Occupied rectangle of this unit
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// The layout generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResponse {
    /// Placed units in commit order
    pub placed: Vec<PlacedVegetable>,
    /// One entry per unit that found no feasible anchor, in rejection order
    pub rejected: Vec<VegetableId>,
    /// Sum of association scores over adjacent placed pairs, each pair
    /// counted exactly once
    pub global_score: i64,
}

#[cfg(test)]
mod tests {
    use super::{LayoutRequest, PlacedVegetable, PlotDimensions};
    use crate::io::configuration::MAX_CELLS_PER_SIDE;
    use crate::spatial::rect::Rect;

    #[test]
    fn test_valid_dimensions_convert_to_cells() {
        let Ok(plot) = PlotDimensions::from_centimeters(100, 1000) else {
            unreachable!("bounds are valid");
        };
        assert_eq!(plot.width(), 20);
        assert_eq!(plot.height(), MAX_CELLS_PER_SIDE);
        assert_eq!(plot.cell_count(), 20 * MAX_CELLS_PER_SIDE);
    }

    #[test]
    fn test_sides_outside_range_rejected() {
        assert!(PlotDimensions::from_centimeters(95, 200).is_err());
        assert!(PlotDimensions::from_centimeters(200, 1005).is_err());
    }

    #[test]
    fn test_non_cell_multiple_rejected() {
        assert!(PlotDimensions::from_centimeters(103, 200).is_err());
        assert!(PlotDimensions::from_centimeters(200, 198).is_err());
    }

    #[test]
    fn test_placed_round_trips_through_rect() {
        let placed = PlacedVegetable::from_rect(4, Rect::new(3, 5, 2, 6));
        assert_eq!(placed.rect(), Rect::new(3, 5, 2, 6));
    }

    #[test]
    fn test_request_parses_wire_format() {
        let parsed: Result<LayoutRequest, _> = serde_json::from_str(
            r#"{"width_cm": 200, "height_cm": 150, "items": [{"vegetable_id": 1, "quantity": 3}]}"#,
        );
        let Ok(request) = parsed else {
            unreachable!("fixture JSON must parse");
        };
        assert_eq!(request.width_cm, 200);
        assert_eq!(request.items.len(), 1);
        assert!(request.plot().is_ok());
    }
}

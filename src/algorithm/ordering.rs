//! Unit expansion and deterministic placement order
//!
//! Requests arrive as (type, quantity) pairs; the planner works on individual
//! units. Larger footprints go first to limit fragmentation, the standard
//! bin-packing heuristic. Ties break by ascending vegetable id, then by
//! occurrence order in the request, so identical input always yields the
//! identical sequence.

use crate::catalog::CatalogSnapshot;
use crate::catalog::vegetable::VegetableId;
use crate::io::configuration::MAX_REQUEST_UNITS;
use crate::io::contract::RequestItem;
use crate::io::error::{LayoutError, Result};

/// One vegetable unit awaiting placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementUnit {
    /// Catalog id of the type
    pub vegetable_id: VegetableId,
    /// Footprint width in cells
    pub width: usize,
    /// Footprint height in cells
    pub height: usize,
}

impl PlacementUnit {
    /// Cells this unit occupies when placed
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Expand request items into individually placeable units in planner order
///
/// Zero-quantity items contribute nothing. The sort is stable, which
/// preserves occurrence order among units tying on both area and id.
///
/// # Errors
///
/// Returns [`LayoutError::UnknownVegetable`] when an item references an id
/// absent from the snapshot and [`LayoutError::RequestTooLarge`] when the
/// summed quantities exceed the per-request cap.
pub fn expand_and_order(
    items: &[RequestItem],
    snapshot: &CatalogSnapshot,
) -> Result<Vec<PlacementUnit>> {
    let total: u64 = items.iter().map(|item| u64::from(item.quantity)).sum();
    if total > MAX_REQUEST_UNITS {
        return Err(LayoutError::RequestTooLarge {
            requested: total,
            limit: MAX_REQUEST_UNITS,
        });
    }

    let mut units = Vec::with_capacity(total as usize);
    for item in items {
        let vegetable = snapshot
            .vegetable(item.vegetable_id)
            .ok_or(LayoutError::UnknownVegetable {
                id: item.vegetable_id,
            })?;
        let (width, height) = vegetable.footprint();
        for _ in 0..item.quantity {
            units.push(PlacementUnit {
                vegetable_id: item.vegetable_id,
                width,
                height,
            });
        }
    }

    units.sort_by(|a, b| {
        b.area()
            .cmp(&a.area())
            .then(a.vegetable_id.cmp(&b.vegetable_id))
    });
    Ok(units)
}

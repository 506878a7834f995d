//! Anchor scanning and commit/reject decisions
//!
//! Single-pass greedy placement: every unit gets one turn, scans feasible
//! anchors in row-major order, and commits the best-scoring one. Rejection is
//! a normal outcome and never aborts the pass; smaller units later in the
//! order may still fit around earlier commitments. No backtracking.

use crate::algorithm::ordering::PlacementUnit;
use crate::algorithm::scoring::score_candidate;
use crate::catalog::associations::AssociationTable;
use crate::catalog::vegetable::VegetableId;
use crate::io::contract::{PlacedVegetable, PlotDimensions};
use crate::spatial::grid::OccupancyGrid;
use crate::spatial::rect::Rect;

/// Outcome of one placement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Units committed to the grid, in commit order
    pub placed: Vec<PlacedVegetable>,
    /// One id per unit that found no feasible anchor, in rejection order
    pub rejected: Vec<VegetableId>,
}

/// Place ordered units on a fresh grid
///
/// For each unit the scan keeps the strictly best-scoring feasible anchor;
/// on ties the earliest anchor in row-major order wins, which keeps output
/// deterministic and packs toward the top-left corner. Units whose footprint
/// exceeds the plot, or whose area exceeds the remaining free cells, are
/// rejected without scanning.
pub fn place_units(
    units: &[PlacementUnit],
    plot: &PlotDimensions,
    table: &AssociationTable,
) -> PlacementOutcome {
    let mut grid = OccupancyGrid::new(plot.width(), plot.height());
    let mut placed: Vec<PlacedVegetable> = Vec::new();
    let mut rejected: Vec<VegetableId> = Vec::new();

    for unit in units {
        if unit.width > grid.width() || unit.height > grid.height() {
            rejected.push(unit.vegetable_id);
            continue;
        }
        if unit.area() > grid.free_cells() {
            rejected.push(unit.vegetable_id);
            continue;
        }

        if let Some(anchor) = best_anchor(&grid, unit, &placed, table) {
            // Owner markers are 1-based commit indices
            let owner = placed.len() as u32 + 1;
            grid.occupy(&anchor, owner);
            placed.push(PlacedVegetable::from_rect(unit.vegetable_id, anchor));
        } else {
            rejected.push(unit.vegetable_id);
        }
    }

    PlacementOutcome { placed, rejected }
}

/// Scan anchors row-major and return the best feasible one
///
/// When the unit's type has no scored association against any placed type,
/// every anchor ties at zero and the first feasible anchor wins outright, so
/// the scan stops there.
fn best_anchor(
    grid: &OccupancyGrid,
    unit: &PlacementUnit,
    placed: &[PlacedVegetable],
    table: &AssociationTable,
) -> Option<Rect> {
    let neutral = placed
        .iter()
        .all(|other| table.score(unit.vegetable_id, other.vegetable_id) == 0);

    let mut best: Option<(i64, Rect)> = None;
    for y in 0..=(grid.height() - unit.height) {
        for x in 0..=(grid.width() - unit.width) {
            let candidate = Rect::new(x, y, unit.width, unit.height);
            if !grid.is_free(&candidate) {
                continue;
            }
            if neutral {
                return Some(candidate);
            }
            let score = score_candidate(&candidate, unit.vegetable_id, placed, table);
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }
    }
    best.map(|(_, rect)| rect)
}

//! Adjacency-weighted association scoring
//!
//! One function decides how much a candidate rectangle is worth next to the
//! units already on the grid. The assembler reuses it over placed prefixes,
//! so the reported global score and the planner's ranking can never drift
//! apart.

use crate::catalog::associations::AssociationTable;
use crate::catalog::vegetable::VegetableId;
use crate::io::contract::PlacedVegetable;
use crate::spatial::rect::Rect;

/// Score a candidate placement against every adjacent placed unit
///
/// Sums the association score between the candidate type and each placed
/// unit whose rectangle is adjacent to `candidate` (separated by at most one
/// cell on both axes). Unknown pairs contribute zero. A unit is never
/// compared against itself because candidates are scored before commit.
pub fn score_candidate(
    candidate: &Rect,
    vegetable_id: VegetableId,
    placed: &[PlacedVegetable],
    table: &AssociationTable,
) -> i64 {
    placed
        .iter()
        .filter(|other| candidate.is_adjacent(&other.rect()))
        .map(|other| i64::from(table.score(vegetable_id, other.vegetable_id)))
        .sum()
}

/// Sum association scores over all adjacent placed pairs, each counted once
///
/// Scores every unit against the prefix placed before it, which visits each
/// unordered pair exactly once without a dedup set.
pub fn global_score(placed: &[PlacedVegetable], table: &AssociationTable) -> i64 {
    placed
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let earlier = placed.get(..index).unwrap_or_default();
            score_candidate(&unit.rect(), unit.vegetable_id, earlier, table)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{global_score, score_candidate};
    use crate::catalog::associations::{Association, AssociationTable};
    use crate::io::contract::PlacedVegetable;
    use crate::spatial::rect::Rect;

    fn table(entries: &[(u32, u32, i32)]) -> AssociationTable {
        let entries: Vec<Association> = entries
            .iter()
            .map(|&(a, b, score)| Association {
                vegetable_id_main: a,
                vegetable_id_target: b,
                score,
                reason: String::new(),
            })
            .collect();
        let Ok(table) = AssociationTable::from_entries(&entries) else {
            unreachable!("fixture entries must validate");
        };
        table
    }

    fn placed(id: u32, x: usize, y: usize, w: usize, h: usize) -> PlacedVegetable {
        PlacedVegetable {
            vegetable_id: id,
            x,
            y,
            w,
            h,
        }
    }

    #[test]
    fn test_adjacent_pair_scores() {
        let table = table(&[(1, 2, 10)]);
        let others = vec![placed(2, 0, 0, 2, 2)];
        let score = score_candidate(&Rect::new(2, 0, 2, 2), 1, &others, &table);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_distant_pair_contributes_nothing() {
        let table = table(&[(1, 2, 10)]);
        let others = vec![placed(2, 0, 0, 2, 2)];
        let score = score_candidate(&Rect::new(5, 5, 2, 2), 1, &others, &table);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_multiple_neighbours_accumulate() {
        let table = table(&[(1, 2, 10), (1, 3, -5)]);
        let others = vec![placed(2, 0, 0, 2, 2), placed(3, 5, 0, 2, 2)];
        // Candidate touches the first and sits one cell from the second.
        let score = score_candidate(&Rect::new(2, 0, 2, 2), 1, &others, &table);
        assert_eq!(score, 5);
    }

    #[test]
    fn test_global_score_counts_each_pair_once() {
        let table = table(&[(1, 2, 10), (1, 1, 4)]);
        let layout = vec![
            placed(1, 0, 0, 2, 2),
            placed(2, 2, 0, 2, 2),
            placed(1, 3, 3, 2, 2),
        ];
        // Pairs: (0,1) touch for 10, (1,2) touch diagonally for 10, and
        // (0,2) sit one cell apart so the same-type pair adds 4.
        assert_eq!(global_score(&layout, &table), 24);
    }

    #[test]
    fn test_global_score_empty_layout_is_zero() {
        assert_eq!(global_score(&[], &table(&[])), 0);
    }
}

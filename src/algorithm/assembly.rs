//! Response assembly from the placement outcome
//!
//! The global score reuses the planner's scoring function over placed
//! prefixes, so each unordered adjacent pair contributes exactly once and the
//! response can be re-verified from its own placed list.

use crate::algorithm::planner::PlacementOutcome;
use crate::algorithm::scoring::global_score;
use crate::catalog::associations::AssociationTable;
use crate::io::contract::LayoutResponse;

/// Turn a placement outcome into the wire response
pub fn assemble(outcome: PlacementOutcome, table: &AssociationTable) -> LayoutResponse {
    let global_score = global_score(&outcome.placed, table);
    LayoutResponse {
        placed: outcome.placed,
        rejected: outcome.rejected,
        global_score,
    }
}

#[cfg(test)]
mod tests {
    use super::assemble;
    use crate::algorithm::planner::PlacementOutcome;
    use crate::algorithm::scoring::global_score;
    use crate::catalog::associations::{Association, AssociationTable};
    use crate::io::contract::PlacedVegetable;

    #[test]
    fn test_response_preserves_order_and_score() {
        let Ok(table) = AssociationTable::from_entries(&[Association {
            vegetable_id_main: 1,
            vegetable_id_target: 2,
            score: 10,
            reason: String::new(),
        }]) else {
            unreachable!("fixture entries must validate");
        };
        let outcome = PlacementOutcome {
            placed: vec![
                PlacedVegetable {
                    vegetable_id: 1,
                    x: 0,
                    y: 0,
                    w: 2,
                    h: 2,
                },
                PlacedVegetable {
                    vegetable_id: 2,
                    x: 2,
                    y: 0,
                    w: 2,
                    h: 2,
                },
            ],
            rejected: vec![2, 2],
        };

        let response = assemble(outcome.clone(), &table);
        assert_eq!(response.placed, outcome.placed);
        assert_eq!(response.rejected, vec![2, 2]);
        assert_eq!(response.global_score, 10);
        assert_eq!(
            response.global_score,
            global_score(&response.placed, &table)
        );
    }
}

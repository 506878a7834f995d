//! Request orchestration
//!
//! One synchronous computation per request: validate the plot, expand and
//! order the units, run the greedy pass, assemble the response. All state
//! lives on the stack of this call; concurrent invocations share nothing.

use crate::algorithm::assembly::assemble;
use crate::algorithm::ordering::expand_and_order;
use crate::algorithm::planner::place_units;
use crate::catalog::CatalogSnapshot;
use crate::io::contract::{LayoutRequest, LayoutResponse};
use crate::io::error::Result;

/// Generate a layout for one request against a catalog snapshot
///
/// Infeasible units surface in the rejected list of a successful response;
/// only malformed input fails the call.
///
/// # Errors
///
/// Returns an error when the plot dimensions fail validation, an item
/// references an id absent from the snapshot, or the summed quantities exceed
/// the per-request cap.
pub fn generate_layout(
    request: &LayoutRequest,
    snapshot: &CatalogSnapshot,
) -> Result<LayoutResponse> {
    let plot = request.plot()?;
    let units = expand_and_order(&request.items, snapshot)?;
    let outcome = place_units(&units, &plot, snapshot.associations());
    Ok(assemble(outcome, snapshot.associations()))
}

#[cfg(test)]
mod tests {
    use super::generate_layout;
    use crate::catalog::{Association, CatalogSnapshot, Vegetable};
    use crate::io::contract::{LayoutRequest, RequestItem};

    fn snapshot() -> CatalogSnapshot {
        let vegetables = vec![
            Vegetable {
                id: 1,
                name: "Tomate".to_owned(),
                variety: String::new(),
                slug: "tomate".to_owned(),
                grid_width: 2,
                grid_height: 2,
                color: "#ef4444".to_owned(),
            },
            Vegetable {
                id: 2,
                name: "Basilic".to_owned(),
                variety: String::new(),
                slug: "basilic".to_owned(),
                grid_width: 2,
                grid_height: 2,
                color: "#15803d".to_owned(),
            },
        ];
        let associations = [Association {
            vegetable_id_main: 1,
            vegetable_id_target: 2,
            score: 10,
            reason: "fixture".to_owned(),
        }];
        let Ok(snapshot) = CatalogSnapshot::from_parts(vegetables, &associations) else {
            unreachable!("fixture catalog must validate");
        };
        snapshot
    }

    #[test]
    fn test_generate_layout_end_to_end() {
        let request = LayoutRequest {
            width_cm: 100,
            height_cm: 100,
            items: vec![
                RequestItem {
                    vegetable_id: 1,
                    quantity: 1,
                },
                RequestItem {
                    vegetable_id: 2,
                    quantity: 1,
                },
            ],
        };
        let Ok(response) = generate_layout(&request, &snapshot()) else {
            unreachable!("request is valid");
        };
        assert_eq!(response.placed.len(), 2);
        assert!(response.rejected.is_empty());
        assert_eq!(response.global_score, 10);
    }

    #[test]
    fn test_invalid_plot_fails_before_placement() {
        let request = LayoutRequest {
            width_cm: 90,
            height_cm: 100,
            items: vec![],
        };
        assert!(generate_layout(&request, &snapshot()).is_err());
    }

    #[test]
    fn test_unknown_id_fails_validation() {
        let request = LayoutRequest {
            width_cm: 100,
            height_cm: 100,
            items: vec![RequestItem {
                vegetable_id: 42,
                quantity: 1,
            }],
        };
        assert!(generate_layout(&request, &snapshot()).is_err());
    }
}

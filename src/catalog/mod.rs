//! Catalog snapshots consumed by the layout engine
//!
//! The engine never owns the vegetable catalog; it receives an immutable
//! snapshot per invocation and only reads from it. Snapshots are validated on
//! construction so the planner can assume well-formed data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::io::error::{LayoutError, Result};

/// Symmetric companion score lookup
pub mod associations;
/// Built-in companion-planting data set
pub mod seed;
/// Vegetable type records
pub mod vegetable;

pub use associations::{Association, AssociationTable};
pub use vegetable::{Vegetable, VegetableId};

/// Serialised catalog document as read from disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Vegetable type records
    pub vegetables: Vec<Vegetable>,
    /// Pairwise companion scores
    #[serde(default)]
    pub associations: Vec<Association>,
}

impl CatalogDocument {
    /// Validate the document into an engine-ready snapshot
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate vegetable ids, degenerate footprints,
    /// association scores outside the conventional range, or conflicting
    /// scores for the same unordered pair.
    pub fn into_snapshot(self) -> Result<CatalogSnapshot> {
        CatalogSnapshot::from_parts(self.vegetables, &self.associations)
    }
}

/// Immutable per-invocation view of the vegetable and association catalogs
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    vegetables: HashMap<VegetableId, Vegetable>,
    associations: AssociationTable,
}

impl CatalogSnapshot {
    /// Build a snapshot from vegetable records and association entries
    ///
    /// # Errors
    ///
    /// Returns an error when two records share an id, a footprint has a zero
    /// side, or the association entries fail validation (see
    /// [`AssociationTable::from_entries`]).
    pub fn from_parts(vegetables: Vec<Vegetable>, associations: &[Association]) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(vegetables.len());
        for vegetable in vegetables {
            if vegetable.grid_width == 0 || vegetable.grid_height == 0 {
                return Err(LayoutError::InvalidCatalog {
                    reason: format!(
                        "vegetable '{}' (id {}) has an empty footprint",
                        vegetable.slug, vegetable.id
                    ),
                });
            }
            if by_id.insert(vegetable.id, vegetable).is_some() {
                return Err(LayoutError::InvalidCatalog {
                    reason: "duplicate vegetable id in catalog".to_owned(),
                });
            }
        }
        let associations = AssociationTable::from_entries(associations)?;
        Ok(Self {
            vegetables: by_id,
            associations,
        })
    }

    /// Look up one vegetable type by id
    pub fn vegetable(&self, id: VegetableId) -> Option<&Vegetable> {
        self.vegetables.get(&id)
    }

    /// Number of vegetable types in the snapshot
    pub fn vegetable_count(&self) -> usize {
        self.vegetables.len()
    }

    /// Companion score table
    pub const fn associations(&self) -> &AssociationTable {
        &self.associations
    }
}

#[cfg(test)]
mod tests {
    use super::{Association, CatalogSnapshot, Vegetable};

    fn vegetable(id: u32, slug: &str, w: usize, h: usize) -> Vegetable {
        Vegetable {
            id,
            name: slug.to_owned(),
            variety: String::new(),
            slug: slug.to_owned(),
            grid_width: w,
            grid_height: h,
            color: "#22c55e".to_owned(),
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = CatalogSnapshot::from_parts(
            vec![vegetable(1, "tomato", 2, 2), vegetable(1, "basil", 1, 1)],
            &[],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_footprint_rejected() {
        let result = CatalogSnapshot::from_parts(vec![vegetable(1, "tomato", 0, 2)], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_and_scores() {
        let snapshot = CatalogSnapshot::from_parts(
            vec![vegetable(1, "tomato", 2, 2), vegetable(2, "basil", 1, 1)],
            &[Association {
                vegetable_id_main: 1,
                vegetable_id_target: 2,
                score: 40,
                reason: String::new(),
            }],
        );
        let Ok(snapshot) = snapshot else {
            unreachable!("catalog fixture must validate");
        };
        assert_eq!(snapshot.vegetable_count(), 2);
        assert!(snapshot.vegetable(1).is_some_and(|v| v.slug == "tomato"));
        assert!(snapshot.vegetable(3).is_none());
        assert_eq!(snapshot.associations().score(2, 1), 40);
    }
}

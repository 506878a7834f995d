//! Symmetric companion score lookup
//!
//! Entries are keyed by unordered pair so `score(a, b)` and `score(b, a)`
//! always agree, whichever direction the catalog stored. Unknown pairs are
//! neutral and score zero.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::catalog::vegetable::VegetableId;
use crate::io::error::{LayoutError, Result};

/// Lowest companion score the catalog convention allows
pub const MIN_ASSOCIATION_SCORE: i32 = -50;
/// Highest companion score the catalog convention allows
pub const MAX_ASSOCIATION_SCORE: i32 = 50;

/// One directed association entry as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    /// First vegetable of the pair
    pub vegetable_id_main: VegetableId,
    /// Second vegetable of the pair
    pub vegetable_id_target: VegetableId,
    /// Companion score, negative for antagonists
    pub score: i32,
    /// Human-readable rationale for the score
    #[serde(default)]
    pub reason: String,
}

/// Validated symmetric score table
#[derive(Debug, Clone, Default)]
pub struct AssociationTable {
    scores: HashMap<(VegetableId, VegetableId), i32>,
}

impl AssociationTable {
    /// Build a table from catalog entries
    ///
    /// Catalogs commonly store both directions of a pair; identical
    /// duplicates collapse silently.
    ///
    /// # Errors
    ///
    /// Returns an error when a score falls outside
    /// [`MIN_ASSOCIATION_SCORE`]`..=`[`MAX_ASSOCIATION_SCORE`] or when two
    /// entries give the same unordered pair different scores.
    pub fn from_entries(entries: &[Association]) -> Result<Self> {
        let mut scores = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.score < MIN_ASSOCIATION_SCORE || entry.score > MAX_ASSOCIATION_SCORE {
                return Err(LayoutError::AssociationOutOfRange {
                    a: entry.vegetable_id_main,
                    b: entry.vegetable_id_target,
                    score: entry.score,
                });
            }
            let key = pair_key(entry.vegetable_id_main, entry.vegetable_id_target);
            match scores.entry(key) {
                Entry::Occupied(slot) => {
                    let existing = *slot.get();
                    if existing != entry.score {
                        return Err(LayoutError::AssociationConflict {
                            a: key.0,
                            b: key.1,
                            existing,
                            conflicting: entry.score,
                        });
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry.score);
                }
            }
        }
        Ok(Self { scores })
    }

    /// Companion score between two types, zero for unknown pairs
    pub fn score(&self, a: VegetableId, b: VegetableId) -> i32 {
        self.scores.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    /// Number of distinct scored pairs
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no pair carries a score
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Normalise an unordered pair into a canonical key
const fn pair_key(a: VegetableId, b: VegetableId) -> (VegetableId, VegetableId) {
    if a <= b { (a, b) } else { (b, a) }
}

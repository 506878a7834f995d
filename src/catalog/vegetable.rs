//! Vegetable type records
//!
//! A vegetable type is plain data: identity, a rectangular footprint in grid
//! cells, and display metadata the engine carries through untouched.

use serde::{Deserialize, Serialize};

/// Catalog identifier of a vegetable type
pub type VegetableId = u32;

/// One vegetable type from the catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vegetable {
    /// Catalog identifier
    pub id: VegetableId,
    /// Display name
    pub name: String,
    /// Optional cultivar name
    #[serde(default)]
    pub variety: String,
    /// URL-safe identifier
    pub slug: String,
    /// Footprint width in grid cells
    pub grid_width: usize,
    /// Footprint height in grid cells
    pub grid_height: usize,
    /// Display colour as a hex string
    #[serde(default = "default_color")]
    pub color: String,
}

impl Vegetable {
    /// Footprint as `(width, height)` in cells
    pub const fn footprint(&self) -> (usize, usize) {
        (self.grid_width, self.grid_height)
    }

    /// Number of cells one unit of this type occupies
    pub const fn footprint_area(&self) -> usize {
        self.grid_width * self.grid_height
    }
}

fn default_color() -> String {
    "#22c55e".to_owned()
}

#[cfg(test)]
mod tests {
    use super::Vegetable;

    #[test]
    fn test_footprint_accessors() {
        let v = Vegetable {
            id: 3,
            name: "Courgette".to_owned(),
            variety: String::new(),
            slug: "courgette".to_owned(),
            grid_width: 16,
            grid_height: 16,
            color: "#65a30d".to_owned(),
        };
        assert_eq!(v.footprint(), (16, 16));
        assert_eq!(v.footprint_area(), 256);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let parsed: Result<Vegetable, _> = serde_json::from_str(
            r#"{"id": 7, "name": "Carotte", "slug": "carotte", "grid_width": 1, "grid_height": 1}"#,
        );
        let Ok(v) = parsed else {
            unreachable!("fixture JSON must parse");
        };
        assert_eq!(v.variety, "");
        assert_eq!(v.color, "#22c55e");
    }
}

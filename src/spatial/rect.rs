//! Axis-aligned cell rectangles and the neighbourhood rule
//!
//! All coordinates are grid cells with the origin in the top-left corner.
//! A rectangle anchored at `(x, y)` covers the half-open ranges
//! `[x, x + w)` and `[y, y + h)`.

/// An axis-aligned rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Column of the top-left cell
    pub x: usize,
    /// Row of the top-left cell
    pub y: usize,
    /// Width in cells
    pub w: usize,
    /// Height in cells
    pub h: usize,
}

impl Rect {
    /// Create a rectangle from its anchor and footprint
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// First column beyond the rectangle
    pub const fn right(&self) -> usize {
        self.x + self.w
    }

    /// First row beyond the rectangle
    pub const fn bottom(&self) -> usize {
        self.y + self.h
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.w * self.h
    }

    /// True when the two rectangles share at least one cell
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Horizontal gap in cells between the two rectangles (0 when touching
    /// or overlapping on that axis)
    pub const fn gap_x(&self, other: &Self) -> usize {
        axis_gap(self.x, self.right(), other.x, other.right())
    }

    /// Vertical gap in cells between the two rectangles
    pub const fn gap_y(&self, other: &Self) -> usize {
        axis_gap(self.y, self.bottom(), other.y, other.bottom())
    }

    /// Neighbourhood rule: two rectangles are adjacent when they are
    /// separated by at most one cell on both axes, so touching, diagonal,
    /// and one-cell-gap placements all count as neighbours.
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        self.gap_x(other) <= 1 && self.gap_y(other) <= 1
    }
}

/// Gap between two half-open intervals on one axis
const fn axis_gap(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> usize {
    let start = if a_start > b_start { a_start } else { b_start };
    let end = if a_end < b_end { a_end } else { b_end };
    start.saturating_sub(end)
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn test_area_and_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert_eq!(r.area(), 20);
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(2, 2, 3, 3);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges_is_false() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(3, 0, 3, 3);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_gap_touching_is_zero() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(3, 0, 2, 2);
        assert_eq!(a.gap_x(&b), 0);
        assert_eq!(a.gap_y(&b), 0);
    }

    #[test]
    fn test_gap_one_cell_apart() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(4, 0, 2, 2);
        assert_eq!(a.gap_x(&b), 1);
        assert!(a.is_adjacent(&b));
    }

    #[test]
    fn test_diagonal_neighbours_are_adjacent() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(2, 2, 2, 2);
        assert_eq!(a.gap_x(&b), 0);
        assert_eq!(a.gap_y(&b), 0);
        assert!(a.is_adjacent(&b));
    }

    #[test]
    fn test_two_cell_gap_is_not_adjacent() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(4, 0, 2, 2);
        assert_eq!(a.gap_x(&b), 2);
        assert!(!a.is_adjacent(&b));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let a = Rect::new(1, 1, 3, 2);
        let b = Rect::new(5, 2, 2, 2);
        assert_eq!(a.is_adjacent(&b), b.is_adjacent(&a));
    }
}

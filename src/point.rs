//! Board coordinates and ordered sets of them.
//!
//! A [`Point`] is a `(row, col)` pair with row 0 at the top of the board.
//! Derived neighbor points may lie off the grid; callers filter them with
//! [`Point::is_on_grid`].

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::{CORNERS, LOCALITY, LOCALITY2, N, NEIGHBORS};

/// A point on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_on_grid(self) -> bool {
        (0..N as i32).contains(&self.row) && (0..N as i32).contains(&self.col)
    }

    #[inline]
    fn offset(self, (dr, dc): (i32, i32)) -> Point {
        Point::new(self.row + dr, self.col + dc)
    }

    /// The 4 orthogonal neighbors (W, E, N, S).
    #[inline]
    pub fn neighbors(self) -> [Point; 4] {
        NEIGHBORS.map(|d| self.offset(d))
    }

    /// The 4 diagonal neighbors.
    #[inline]
    pub fn corners(self) -> [Point; 4] {
        CORNERS.map(|d| self.offset(d))
    }

    /// The 8 points of the 3x3 ring around this point.
    pub fn locality(self) -> [Point; 8] {
        LOCALITY.map(|d| self.offset(d))
    }

    /// The 24 points of the 5x5 square around this point.
    pub fn locality2(self) -> [Point; 24] {
        LOCALITY2.map(|d| self.offset(d))
    }

    /// Every point of the board, row by row.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..N as i32).flat_map(|row| (0..N as i32).map(move |col| Point::new(row, col)))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&str_coord(*self))
    }
}

/// Parse a GTP coordinate string (e.g., "D4") into a Point.
///
/// Columns use letters A-T (skipping I), rows count up from the bottom edge.
/// Returns `None` for malformed or off-board coordinates.
pub fn parse_coord(s: &str) -> Option<Point> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let col_char = bytes[0].to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == b'I' {
        return None;
    }
    let mut col = (col_char - b'A') as i32;
    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if col_char > b'I' {
        col -= 1;
    }

    let row: usize = s[1..].parse().ok()?;
    if !(1..=N).contains(&row) {
        return None;
    }
    let pt = Point::new((N - row) as i32, col);
    pt.is_on_grid().then_some(pt)
}

/// Convert a Point to a GTP coordinate string (e.g., "D4").
pub fn str_coord(pt: Point) -> String {
    let mut c = (b'A' + pt.col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    format!("{c}{}", N as i32 - pt.row)
}

/// A set of points with set semantics; iteration is in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    elements: BTreeSet<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has(&self, pt: Point) -> bool {
        self.elements.contains(&pt)
    }

    /// Insert a point. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, pt: Point) -> bool {
        self.elements.insert(pt)
    }

    /// Remove a point, reporting whether it was present.
    #[inline]
    pub fn remove(&mut self, pt: Point) -> bool {
        self.elements.remove(&pt)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// An arbitrary element (the smallest one).
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.elements.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.elements.iter().copied()
    }

    /// Add every point of `other` to this set.
    pub fn union_with(&mut self, other: &PointSet) {
        self.elements.extend(other.iter());
    }

    /// The union of two sets as a new set.
    pub fn union(&self, other: &PointSet) -> PointSet {
        let mut res = self.clone();
        res.union_with(other);
        res
    }

    /// Remove every point yielded by `points` from this set.
    pub fn difference_with<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for pt in points {
            self.elements.remove(&pt);
        }
    }

    pub fn is_disjoint(&self, other: &PointSet) -> bool {
        self.elements.is_disjoint(&other.elements)
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::collections::btree_set::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_coord_roundtrip() {
        for pt in Point::all() {
            let s = str_coord(pt);
            assert_eq!(parse_coord(&s), Some(pt), "Failed roundtrip for {s}");
        }
    }

    #[test]
    fn test_parse_coord_skips_i() {
        let h5 = parse_coord("H5").unwrap();
        let j5 = parse_coord("J5").unwrap();
        assert_eq!(j5.col - h5.col, 1, "J should be one column after H");
        assert_eq!(parse_coord("I5"), None);
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("5A"), None);
        assert_eq!(parse_coord(&format!("A{}", N + 1)), None);
        assert_eq!(parse_coord("A-1"), None);
        assert_eq!(parse_coord("A-2147483648"), None);
        assert_eq!(parse_coord("A99999999999999999999"), None);
    }

    #[test]
    fn test_a1_is_bottom_left() {
        let a1 = parse_coord("a1").unwrap();
        assert_eq!(a1, Point::new(N as i32 - 1, 0));
    }

    #[test]
    fn test_neighbor_shapes() {
        let pt = Point::new(4, 4);
        assert!(pt.neighbors().iter().all(|n| (n.row - 4).abs() + (n.col - 4).abs() == 1));
        assert!(pt.corners().iter().all(|n| (n.row - 4).abs() == 1 && (n.col - 4).abs() == 1));

        let ring: PointSet = pt.locality2().into_iter().collect();
        assert_eq!(ring.len(), 24);
        assert!(!ring.has(pt));
        assert!(pt.locality().iter().all(|&n| ring.has(n)));
    }

    #[test]
    fn test_corner_point_has_two_on_grid_neighbors() {
        let on_grid = Point::new(0, 0).neighbors().iter().filter(|p| p.is_on_grid()).count();
        assert_eq!(on_grid, 2);
    }

    #[test]
    fn test_point_set_operations() {
        let mut a: PointSet = [Point::new(0, 0), Point::new(1, 1)].into_iter().collect();
        let b: PointSet = [Point::new(1, 1), Point::new(2, 2)].into_iter().collect();

        assert!(!a.insert(Point::new(0, 0)));
        assert_eq!(a.union(&b).len(), 3);

        a.difference_with(b.iter());
        assert_eq!(a.to_vec(), vec![Point::new(0, 0)]);
        assert!(a.is_disjoint(&b));

        assert!(a.remove(Point::new(0, 0)));
        assert!(!a.remove(Point::new(0, 0)));
        assert_eq!(a.first(), None);
    }
}

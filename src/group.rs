//! Groups: maximal connected sets of same-colored stones and their liberties.

use crate::board::Color;
use crate::point::{Point, PointSet};

/// A group of connected stones.
///
/// `liberties` never overlaps `stones`. A group with no liberties is dead and
/// is removed by the board in the same placement that killed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: PointSet,
    pub liberties: PointSet,
}

impl Group {
    /// A single stone with the given liberties.
    pub fn singleton(color: Color, stone: Point, mut liberties: PointSet) -> Self {
        liberties.remove(stone);
        let mut stones = PointSet::new();
        stones.insert(stone);
        Self {
            color,
            stones,
            liberties,
        }
    }

    /// Absorb another group of the same color.
    ///
    /// # Panics
    ///
    /// Panics if the colors differ: that can only come from a broken board
    /// invariant, never from a game position.
    pub fn merge(&mut self, other: &Group) {
        assert_eq!(
            self.color, other.color,
            "cannot merge groups of different colors"
        );
        self.stones.union_with(&other.stones);
        self.liberties.union_with(&other.liberties);
        self.liberties.difference_with(self.stones.iter());
    }

    #[inline]
    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }

    #[inline]
    pub fn is_in_atari(&self) -> bool {
        self.num_liberties() == 1
    }

    /// The only liberty of a group in atari.
    pub fn sole_liberty(&self) -> Option<Point> {
        if self.is_in_atari() {
            self.liberties.first()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn libs(points: &[(i32, i32)]) -> PointSet {
        points.iter().map(|&(r, c)| Point::new(r, c)).collect()
    }

    #[test]
    fn test_singleton_never_its_own_liberty() {
        let stone = Point::new(3, 3);
        let g = Group::singleton(Color::Black, stone, libs(&[(3, 3), (3, 4)]));
        assert!(!g.liberties.has(stone));
        assert_eq!(g.num_liberties(), 1);
        assert_eq!(g.sole_liberty(), Some(Point::new(3, 4)));
    }

    #[test]
    fn test_merge_subtracts_stones_from_liberties() {
        let mut a = Group::singleton(Color::White, Point::new(3, 3), libs(&[(3, 4), (2, 3)]));
        let b = Group::singleton(Color::White, Point::new(3, 4), libs(&[(3, 3), (3, 5)]));
        a.merge(&b);

        assert_eq!(a.stones.len(), 2);
        assert_eq!(a.liberties, libs(&[(2, 3), (3, 5)]));
        assert!(a.stones.is_disjoint(&a.liberties));
    }

    #[test]
    #[should_panic(expected = "different colors")]
    fn test_merge_different_colors_panics() {
        let mut a = Group::singleton(Color::White, Point::new(0, 0), PointSet::new());
        let b = Group::singleton(Color::Black, Point::new(0, 1), PointSet::new());
        a.merge(&b);
    }

    #[test]
    fn test_dead_group() {
        let g = Group::singleton(Color::Black, Point::new(0, 0), PointSet::new());
        assert!(g.is_dead());
        assert!(!g.is_in_atari());
        assert_eq!(g.sole_liberty(), None);
    }
}

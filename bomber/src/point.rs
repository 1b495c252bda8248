use serde::{Deserialize, Serialize};

use crate::Direction;

/// A cell position on the arena.
///
/// `(0, 0)` is the top-left corner; `x` grows to the right and `y` grows
/// downwards, matching the row order of the board text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this point lies outside a `size` x `size` arena.
    pub fn is_out_of_bounds(&self, size: i32) -> bool {
        self.x < 0 || self.y < 0 || self.x >= size || self.y >= size
    }

    /// The up-to-8 cells surrounding this one, clipped to the arena.
    ///
    /// The order is fixed: row-major over the 3x3 block around the point,
    /// the point itself excluded. Deduplication downstream relies on this
    /// order being stable.
    pub fn surrounds(&self, size: i32) -> Vec<Point> {
        let mut result = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let pt = Point::new(self.x + dx, self.y + dy);
                if !pt.is_out_of_bounds(size) {
                    result.push(pt);
                }
            }
        }
        result
    }

    /// The point one cell away in the given direction.
    ///
    /// `Act` and `Stop` do not move, so they return the point unchanged.
    pub fn step(&self, direction: Direction) -> Point {
        match direction {
            Direction::Left => Point::new(self.x - 1, self.y),
            Direction::Right => Point::new(self.x + 1, self.y),
            Direction::Up => Point::new(self.x, self.y - 1),
            Direction::Down => Point::new(self.x, self.y + 1),
            Direction::Act | Direction::Stop => *self,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds() {
        assert!(!Point::new(0, 0).is_out_of_bounds(3));
        assert!(!Point::new(2, 2).is_out_of_bounds(3));
        assert!(Point::new(3, 2).is_out_of_bounds(3));
        assert!(Point::new(2, 3).is_out_of_bounds(3));
        assert!(Point::new(-1, 0).is_out_of_bounds(3));
        assert!(Point::new(0, -1).is_out_of_bounds(3));
    }

    #[test]
    fn surrounds_in_the_middle() {
        let surrounds = Point::new(1, 1).surrounds(3);
        assert_eq!(
            surrounds,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn surrounds_clipped_at_corner_and_edge() {
        assert_eq!(
            Point::new(0, 0).surrounds(3),
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        assert_eq!(Point::new(2, 1).surrounds(3).len(), 5);
    }

    #[test]
    fn step_moves_one_cell() {
        let pt = Point::new(1, 1);
        assert_eq!(pt.step(Direction::Left), Point::new(0, 1));
        assert_eq!(pt.step(Direction::Right), Point::new(2, 1));
        assert_eq!(pt.step(Direction::Up), Point::new(1, 0));
        assert_eq!(pt.step(Direction::Down), Point::new(1, 2));
        assert_eq!(pt.step(Direction::Act), pt);
        assert_eq!(pt.step(Direction::Stop), pt);
    }
}

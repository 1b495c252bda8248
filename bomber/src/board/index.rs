use crate::Point;

/// Bidirectional mapping between linear buffer offsets and 2-D points,
/// for a square arena stored row by row.
///
/// No bounds checking happens here; callers clip coordinates before
/// indexing.
#[derive(Clone, Copy, Debug)]
pub struct RowMajor {
    size: i32,
}

impl RowMajor {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn index_of(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    pub fn point_at(&self, index: usize) -> Point {
        Point::new(index as i32 % self.size, index as i32 / self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_point_are_inverse() {
        let index = RowMajor::new(5);
        assert_eq!(index.index_of(0, 0), 0);
        assert_eq!(index.index_of(4, 0), 4);
        assert_eq!(index.index_of(0, 1), 5);
        assert_eq!(index.index_of(3, 2), 13);
        for i in 0..25 {
            let pt = index.point_at(i);
            assert_eq!(index.index_of(pt.x, pt.y), i);
        }
    }
}

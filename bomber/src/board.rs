mod index;

use std::collections::HashSet;
use std::str::FromStr;

pub use index::*;

use crate::{BoardError, Element, Point, BOMBS, MY_BOMBERMAN, OTHER_BOMBERMANS};

/// One decoded snapshot of the arena.
///
/// A board is built fresh from the raw text of each game turn and never
/// mutated afterwards; every query is a pure function of the snapshot.
/// Query results are owned copies, so callers can keep and filter them
/// without borrowing the board.
#[derive(Clone, Debug)]
pub struct Board {
    /// Row-major cell buffer, exactly `size * size` entries.
    cells: Vec<Element>,
    size: i32,
    index: RowMajor,
}

impl FromStr for Board {
    type Err = BoardError;

    /// Decodes a newline-delimited (or already flattened) board text.
    ///
    /// Fails when the stripped buffer is not a perfect square, or when any
    /// cell character falls outside the element alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(s.len());
        for (i, ch) in s.chars().filter(|&ch| ch != '\n').enumerate() {
            match Element::from_char(ch) {
                Ok(el) => cells.push(el),
                Err(_) => return Err(BoardError::UnknownElement { ch, index: i }),
            }
        }
        let size = (cells.len() as f64).sqrt().round() as i32;
        if (size * size) as usize != cells.len() {
            return Err(BoardError::NotSquare { len: cells.len() });
        }
        Ok(Board {
            cells,
            size,
            index: RowMajor::new(size),
        })
    }
}

impl Board {
    /// The side length of the (square) arena.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The element at `(x, y)`.
    ///
    /// The coordinate must be in bounds; route through [`Self::is_at`] for
    /// checked access.
    pub fn get_at(&self, x: i32, y: i32) -> Element {
        self.cells[self.index.index_of(x, y)]
    }

    /// Whether the cell at `(x, y)` holds the given element.
    ///
    /// Out-of-bounds coordinates are treated as "nothing there" and
    /// return `false`.
    pub fn is_at(&self, x: i32, y: i32, el: Element) -> bool {
        if Point::new(x, y).is_out_of_bounds(self.size) {
            return false;
        }
        self.get_at(x, y) == el
    }

    /// Whether the cell at `(x, y)` holds any of the given elements.
    pub fn is_any_at(&self, x: i32, y: i32, els: &[Element]) -> bool {
        els.iter().any(|&el| self.is_at(x, y, el))
    }

    /// Every cell holding the given element, in row-major scan order.
    pub fn find_all(&self, el: Element) -> Vec<Point> {
        let mut result = Vec::new();
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell == el {
                result.push(self.index.point_at(i));
            }
        }
        result
    }

    /// Concatenated [`Self::find_all`] results, category by category.
    fn find_all_of(&self, els: &[Element]) -> Vec<Point> {
        let mut result = Vec::new();
        for &el in els {
            result.extend(self.find_all(el));
        }
        result
    }

    /// Where our own bomberman is, whatever state it is drawn in.
    ///
    /// Every well-formed board carries exactly one self marker; a board
    /// without one yields [`BoardError::NoBomberman`] instead of an
    /// arbitrary cell.
    pub fn bomberman(&self) -> Result<Point, BoardError> {
        self.find_all_of(&MY_BOMBERMAN)
            .into_iter()
            .next()
            .ok_or(BoardError::NoBomberman)
    }

    /// All other players, in any state.
    pub fn other_bombermans(&self) -> Vec<Point> {
        self.find_all_of(&OTHER_BOMBERMANS)
    }

    /// Whether our own bomberman was killed this round.
    pub fn is_my_bomberman_dead(&self) -> bool {
        self.cells.contains(&Element::DeadBomberman)
    }

    pub fn meat_choppers(&self) -> Vec<Point> {
        self.find_all(Element::MeatChopper)
    }

    pub fn walls(&self) -> Vec<Point> {
        self.find_all(Element::Wall)
    }

    pub fn destroy_walls(&self) -> Vec<Point> {
        self.find_all(Element::DestroyWall)
    }

    /// All ticking bombs, including the one our own bomberman stands on.
    pub fn bombs(&self) -> Vec<Point> {
        self.find_all_of(&BOMBS)
    }

    /// Cells currently covered by an explosion.
    pub fn blasts(&self) -> Vec<Point> {
        self.find_all(Element::Boom)
    }

    /// Everything that blocks movement, without duplicates.
    pub fn barriers(&self) -> Vec<Point> {
        let mut result = self.meat_choppers();
        result.extend(self.walls());
        result.extend(self.bombs());
        result.extend(self.destroy_walls());
        result.extend(self.other_bombermans());
        dedup_points(result)
    }

    /// Cells at risk from the bombs currently on the board, without
    /// duplicates.
    ///
    /// Each bomb threatens its own cell plus every surrounding cell that
    /// is not a solid wall; destructible walls and everything else count
    /// as at risk. This is a one-step projection: it does not tick timers
    /// forward, and a blast setting off a second bomb is not chained into
    /// the result.
    pub fn future_blasts(&self) -> Vec<Point> {
        let mut bombs = self.bombs();
        bombs.extend(self.find_all(Element::OtherBombBomberman));

        let walls = self.walls();
        let mut result = Vec::new();
        for bomb in bombs {
            result.push(bomb);
            for surr in bomb.surrounds(self.size) {
                if !walls.contains(&surr) {
                    result.push(surr);
                }
            }
        }
        dedup_points(result)
    }

    /// Whether any cell surrounding `(x, y)` holds the given element.
    ///
    /// The origin cell itself is not counted. An out-of-bounds origin has
    /// no surroundings, so the answer is `false`.
    pub fn is_near(&self, x: i32, y: i32, el: Element) -> bool {
        if Point::new(x, y).is_out_of_bounds(self.size) {
            return false;
        }
        Point::new(x, y)
            .surrounds(self.size)
            .iter()
            .any(|pt| self.is_at(pt.x, pt.y, el))
    }

    /// How many cells surrounding `(x, y)` hold the given element.
    ///
    /// The origin itself is not bounds-checked; its surroundings are
    /// clipped to the arena either way.
    pub fn count_near(&self, x: i32, y: i32, el: Element) -> usize {
        Point::new(x, y)
            .surrounds(self.size)
            .iter()
            .filter(|pt| self.is_at(pt.x, pt.y, el))
            .count()
    }

    /// Bounds-checked membership test against the full barrier set.
    pub fn is_barrier_at(&self, x: i32, y: i32) -> bool {
        let pt = Point::new(x, y);
        if pt.is_out_of_bounds(self.size) {
            return false;
        }
        self.barriers().contains(&pt)
    }

    /// The grid as text, one row per line, newline after every row.
    pub fn board_as_string(&self) -> String {
        let mut out = String::with_capacity((self.size * (self.size + 1)) as usize);
        for y in 0..self.size {
            for x in 0..self.size {
                out.push(self.get_at(x, y).to_char());
            }
            out.push('\n');
        }
        out
    }
}

/// Order-preserving removal of duplicate points.
fn dedup_points(points: Vec<Point>) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.into_iter().filter(|&pt| seen.insert(pt)).collect()
}

fn points_to_string(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Diagnostic dump of the whole snapshot. Not part of the query
/// contract; meant for logging by callers.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{}", self.board_as_string())?;
        match self.bomberman() {
            Ok(pt) => writeln!(f, "Bomberman at: {}", pt)?,
            Err(_) => writeln!(f, "Bomberman at: <none>")?,
        }
        writeln!(
            f,
            "Other bombermans at: {}",
            points_to_string(&self.other_bombermans())
        )?;
        writeln!(
            f,
            "Meat choppers at: {}",
            points_to_string(&self.meat_choppers())
        )?;
        writeln!(
            f,
            "Destroy walls at: {}",
            points_to_string(&self.destroy_walls())
        )?;
        writeln!(f, "Bombs at: {}", points_to_string(&self.bombs()))?;
        writeln!(f, "Blasts: {}", points_to_string(&self.blasts()))?;
        writeln!(
            f,
            "Expected blasts at: {}",
            points_to_string(&self.future_blasts())
        )
    }
}

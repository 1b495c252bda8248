use crate::{Board, Direction};

/// The capability a turn-taking agent must provide: look at one arena
/// snapshot and commit to a single move.
///
/// A solver may call any subset of the board queries, any number of
/// times, in any order, but must always come back with exactly one
/// direction for a well-formed board; [`Direction::Stop`] is the answer
/// of last resort, never a panic.
pub trait DirectionSolver {
    fn choose_direction(&mut self, board: &Board) -> Direction;
}

/// Plain closures count as solvers too.
impl<F> DirectionSolver for F
where
    F: FnMut(&Board) -> Direction,
{
    fn choose_direction(&mut self, board: &Board) -> Direction {
        self(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_closure_is_a_solver() {
        let board: Board = "000\n0B0\n000".parse().unwrap();
        let mut stubborn = |_: &Board| Direction::Up;
        assert_eq!(stubborn.choose_direction(&board), Direction::Up);
    }
}

/// The error type for decoding a [`Board`](crate::Board) and for the
/// queries with a hard precondition on the board's content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The cell buffer, after stripping newlines, cannot form a square
    /// arena.
    NotSquare { len: usize },
    /// A character outside the element alphabet, at the given offset into
    /// the stripped buffer.
    UnknownElement { ch: char, index: usize },
    /// The board contains no marker for our own bomberman, in any of its
    /// three states.
    NoBomberman,
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::NotSquare { len } => write!(
                f,
                "Board text has {} cells, which is not a perfect square",
                len
            ),
            BoardError::UnknownElement { ch, index } => write!(
                f,
                "Unknown element character {:?} at cell offset {}",
                ch, index
            ),
            BoardError::NoBomberman => {
                write!(f, "Board contains no bomberman marker")
            }
        }
    }
}

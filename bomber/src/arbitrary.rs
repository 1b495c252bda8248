use crate::{Board, ALL_ELEMENTS};

/// A random decoded board together with the text it came from.
///
/// The text is always square, but carries no other guarantees; in
/// particular there may be zero or many bomberman markers, which is
/// exactly what the hardened queries need to cope with.
#[derive(Clone, Debug)]
pub struct ArbitraryBoard {
    /// Rows joined with `\n`, no trailing newline.
    pub text: String,
    pub board: Board,
}

impl quickcheck::Arbitrary for ArbitraryBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = usize::arbitrary(g) % 6 + 2;
        let rows: Vec<String> = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| g.choose(&ALL_ELEMENTS).unwrap().to_char())
                    .collect()
            })
            .collect();
        let text = rows.join("\n");
        let board = text.parse().expect("generated board text must decode");
        ArbitraryBoard { text, board }
    }
}

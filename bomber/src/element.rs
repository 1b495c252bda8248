use serde::{Deserialize, Serialize};

/// What a single arena cell contains.
///
/// The alphabet is closed: every character of a valid board text maps to
/// exactly one variant, and every variant renders back to that character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    /// A walkable, empty cell.
    #[serde(rename = "0")]
    Space,
    /// An indestructible wall. Blocks movement and blasts.
    #[serde(rename = "W")]
    Wall,
    /// A wall that a blast can remove. Blocks movement, not blasts.
    #[serde(rename = "#")]
    DestroyWall,
    /// Our own bomberman.
    #[serde(rename = "B")]
    Bomberman,
    /// Our own bomberman, standing on the bomb it just dropped.
    #[serde(rename = "@")]
    BombBomberman,
    /// Our own bomberman, killed this round.
    #[serde(rename = "X")]
    DeadBomberman,
    #[serde(rename = "P")]
    OtherBomberman,
    #[serde(rename = "Q")]
    OtherBombBomberman,
    #[serde(rename = "Y")]
    OtherDeadBomberman,
    /// An enemy that chases bombermans.
    #[serde(rename = "&")]
    MeatChopper,
    #[serde(rename = "1")]
    BombTimer1,
    #[serde(rename = "2")]
    BombTimer2,
    #[serde(rename = "3")]
    BombTimer3,
    #[serde(rename = "4")]
    BombTimer4,
    #[serde(rename = "5")]
    BombTimer5,
    /// A cell currently covered by an explosion.
    #[serde(rename = "*")]
    Boom,
}

/// The error type for [`Element::from_char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownElementChar(pub char);

impl Element {
    /// Looks up the category for a cell character.
    ///
    /// This is the single validation point for board text at the cell
    /// level: any character outside the alphabet is rejected here.
    pub fn from_char(ch: char) -> Result<Self, UnknownElementChar> {
        Ok(match ch {
            '0' => Element::Space,
            'W' => Element::Wall,
            '#' => Element::DestroyWall,
            'B' => Element::Bomberman,
            '@' => Element::BombBomberman,
            'X' => Element::DeadBomberman,
            'P' => Element::OtherBomberman,
            'Q' => Element::OtherBombBomberman,
            'Y' => Element::OtherDeadBomberman,
            '&' => Element::MeatChopper,
            '1' => Element::BombTimer1,
            '2' => Element::BombTimer2,
            '3' => Element::BombTimer3,
            '4' => Element::BombTimer4,
            '5' => Element::BombTimer5,
            '*' => Element::Boom,
            _ => return Err(UnknownElementChar(ch)),
        })
    }

    pub fn to_char(self) -> char {
        match self {
            Element::Space => '0',
            Element::Wall => 'W',
            Element::DestroyWall => '#',
            Element::Bomberman => 'B',
            Element::BombBomberman => '@',
            Element::DeadBomberman => 'X',
            Element::OtherBomberman => 'P',
            Element::OtherBombBomberman => 'Q',
            Element::OtherDeadBomberman => 'Y',
            Element::MeatChopper => '&',
            Element::BombTimer1 => '1',
            Element::BombTimer2 => '2',
            Element::BombTimer3 => '3',
            Element::BombTimer4 => '4',
            Element::BombTimer5 => '5',
            Element::Boom => '*',
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Our own bomberman, in all three states it can be drawn in.
pub static MY_BOMBERMAN: [Element; 3] = [
    Element::Bomberman,
    Element::BombBomberman,
    Element::DeadBomberman,
];

/// The other players, in all three states they can be drawn in.
pub static OTHER_BOMBERMANS: [Element; 3] = [
    Element::OtherBomberman,
    Element::OtherBombBomberman,
    Element::OtherDeadBomberman,
];

/// Ticking bombs, including the one our own bomberman stands on.
pub static BOMBS: [Element; 6] = [
    Element::BombTimer1,
    Element::BombTimer2,
    Element::BombTimer3,
    Element::BombTimer4,
    Element::BombTimer5,
    Element::BombBomberman,
];

/// Every category, in declaration order.
pub static ALL_ELEMENTS: [Element; 16] = [
    Element::Space,
    Element::Wall,
    Element::DestroyWall,
    Element::Bomberman,
    Element::BombBomberman,
    Element::DeadBomberman,
    Element::OtherBomberman,
    Element::OtherBombBomberman,
    Element::OtherDeadBomberman,
    Element::MeatChopper,
    Element::BombTimer1,
    Element::BombTimer2,
    Element::BombTimer3,
    Element::BombTimer4,
    Element::BombTimer5,
    Element::Boom,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping_is_bijective() {
        for &el in ALL_ELEMENTS.iter() {
            assert_eq!(Element::from_char(el.to_char()), Ok(el));
        }
        let chars: std::collections::BTreeSet<char> =
            ALL_ELEMENTS.iter().map(|el| el.to_char()).collect();
        assert_eq!(chars.len(), ALL_ELEMENTS.len());
    }

    #[test]
    fn unknown_chars_are_rejected() {
        assert_eq!(Element::from_char('z'), Err(UnknownElementChar('z')));
        assert_eq!(Element::from_char(' '), Err(UnknownElementChar(' ')));
        assert_eq!(Element::from_char('\n'), Err(UnknownElementChar('\n')));
    }
}

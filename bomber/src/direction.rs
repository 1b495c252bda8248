use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One turn's movement command.
///
/// `Act` drops a bomb on the spot, `Stop` stays put; the wire names are
/// the uppercase variant names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    Act,
    Stop,
}

/// The four directions that actually move, in a fixed order.
pub static MOVES: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Act => "ACT",
            Direction::Stop => "STOP",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type for the [`FromStr`] instance of [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "LEFT" => Direction::Left,
            "RIGHT" => Direction::Right,
            "UP" => Direction::Up,
            "DOWN" => Direction::Down,
            "ACT" => Direction::Act,
            "STOP" => Direction::Stop,
            _ => return Err(UnknownDirection(s.to_string())),
        })
    }
}

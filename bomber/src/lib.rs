pub use board::*;
pub use direction::*;
pub use element::*;
pub use errors::*;
pub use point::*;
pub use solver::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod direction;
mod element;
mod errors;
mod point;
mod solver;

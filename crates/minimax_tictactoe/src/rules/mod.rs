//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated
//! from board storage so the search can compose them freely.

pub mod draw;
pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use moves::{apply, legal_actions};
pub(crate) use moves::successors;
pub use terminal::{is_terminal, outcome, utility};
pub use turn::next_player;
pub use win::winner;

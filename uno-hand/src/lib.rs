//! A single hand of UNO: dealing, turn order, legal plays, card effects,
//! reshuffling the discard pile and UNO calls.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;
pub mod shuffle;
pub mod turn;

pub use card::{parse_color, Card, CardColor, ColoredCard};
pub use deck::Pile;
pub use error::{Result, UnoError};
pub use hand::{Direction, Hand, HandEnd, HandOptions, Phase};
pub use shuffle::{RandomShuffler, Shuffler};
pub use turn::{PlayTurnResult, TurnAction, TurnActionResult};

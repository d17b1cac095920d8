use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("A hand needs between 2 and 10 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("Dealer {dealer} is not one of the {players} players")]
    InvalidDealer { dealer: usize, players: usize },
    #[error("Cannot deal {0} cards to every player")]
    InvalidCardsPerPlayer(usize),
    #[error("Index {index} is out of bounds for {len} cards")]
    InvalidIndex { index: usize, len: usize },
    #[error("{0} cannot be played now")]
    IllegalPlay(Card),
    #[error("A color must be named when playing {0}")]
    ColorRequired(Card),
    #[error("A color cannot be named when playing {0}")]
    ColorNotAllowed(Card),
    #[error("Unknown color `{0}`")]
    InvalidColor(String),
    #[error("Not enough cards left to reshuffle")]
    InsufficientCards,
    #[error("Could not reveal a non-wild opening card")]
    NoOpeningCard,
    #[error("The hand has already ended")]
    HandEnded,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;

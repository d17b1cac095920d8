use crate::card::{Card, CardColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Play the card at `index` in the current player's hand.
    Play {
        index: usize,
        color: Option<CardColor>,
    },
    Draw,
    SayUno(usize),
    CatchUnoFailure {
        accuser: usize,
        accused: usize,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Played(Card),
    Drew { card: Card, turn_passed: bool },
    UnoCalled(bool),
    UnoCaught(bool),
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub turn_action_result: TurnActionResult,
    pub won: bool,
}

use crate::card::{Card, CardColor};

#[derive(Debug)]
pub struct Player {
    name: String,
    pub(crate) hand: Vec<Card>,
    pub(crate) uno_called: bool,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::new(),
            uno_called: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn uno_called(&self) -> bool {
        self.uno_called
    }

    pub fn has_color(&self, color: CardColor) -> bool {
        self.hand.iter().any(|card| card.color() == Some(color))
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.uno_called = false;
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.uno_called = false;
        self.hand.remove(index)
    }

    /// Records an UNO call. Only a player holding exactly one card can call it.
    pub fn uno(&mut self) -> bool {
        if self.cards_count() == 1 {
            self.uno_called = true;
        }
        self.uno_called
    }

    pub fn points_in_hand(&self) -> u32 {
        self.hand.iter().map(Card::points).sum()
    }
}

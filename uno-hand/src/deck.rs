use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
    shuffle::Shuffler,
};

/// An ordered stack of cards. The top of the pile is the last element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile(pub(crate) Vec<Card>);

impl Pile {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The standard 108-card deck in a fixed order, bottom card first.
    pub fn standard_deck() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self(cards)
    }

    pub fn shuffle(&mut self, shuffler: &mut dyn Shuffler) {
        shuffler.shuffle(&mut self.0);
    }

    /// Takes the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn insert_bottom(&mut self, card: Card) {
        self.0.insert(0, card);
    }

    /// Removes every card except the top one, bottom card first.
    pub(crate) fn take_all_but_top(&mut self) -> Vec<Card> {
        let keep_from = self.0.len().saturating_sub(1);
        self.0.drain(..keep_from).collect()
    }

    /// Puts `cards` underneath the current contents, keeping their order.
    pub(crate) fn extend_bottom(&mut self, mut cards: Vec<Card>) {
        cards.append(&mut self.0);
        self.0 = cards;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cards from bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

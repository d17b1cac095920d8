use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS};
use crate::error::{Result, UnoError};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Parses a color name such as `"red"` or `"GREEN"`.
pub fn parse_color(name: &str) -> Result<CardColor> {
    name.trim()
        .parse()
        .map_err(|_| UnoError::InvalidColor(name.to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn points(&self) -> u32 {
        match self {
            ColoredCard::Number(number) => u32::from(*number),
            ColoredCard::Skip | ColoredCard::Reverse | ColoredCard::DrawTwo => ACTION_CARD_POINTS,
        }
    }
}

/// A single UNO card. Wild cards carry no color of their own; the color named
/// when one is played is tracked by the hand, not by the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Card {
    pub fn number(color: CardColor, number: u8) -> Self {
        Card::Colored(color, ColoredCard::Number(number))
    }

    pub fn skip(color: CardColor) -> Self {
        Card::Colored(color, ColoredCard::Skip)
    }

    pub fn reverse(color: CardColor) -> Self {
        Card::Colored(color, ColoredCard::Reverse)
    }

    pub fn draw_two(color: CardColor) -> Self {
        Card::Colored(color, ColoredCard::DrawTwo)
    }

    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    pub fn has_color(&self) -> bool {
        self.color().is_some()
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }

    /// Whether `self` may be laid on `top` judging by the two cards alone.
    ///
    /// Wild cards are compatible with anything and anything is compatible with
    /// a wild top, since the color bound to a played wild is not known here.
    pub fn matches(&self, top: &Card) -> bool {
        match (self, top) {
            (Card::Wild | Card::WildDrawFour, _) | (_, Card::Wild | Card::WildDrawFour) => true,
            (Card::Colored(color, face), Card::Colored(top_color, top_face)) => {
                color == top_color || face == top_face
            }
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Card::Colored(_, card) => card.points(),
            Card::Wild | Card::WildDrawFour => WILD_CARD_POINTS,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

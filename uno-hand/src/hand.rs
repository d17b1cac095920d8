use std::fmt::{self, Debug};

use strum_macros::Display;
use tracing::{debug, info, warn};

use crate::card::{Card, CardColor, ColoredCard};
use crate::constants::*;
use crate::deck::Pile;
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::shuffle::Shuffler;
use crate::turn::{PlayTurnResult, TurnAction, TurnActionResult};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Phase {
    GameStart,
    InPlay,
    GameOver,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandOptions {
    pub cards_per_player: usize,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
        }
    }
}

/// Passed to every [`Hand::on_end`] listener when a player empties their hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandEnd {
    pub winner: usize,
    pub winner_name: String,
    pub score: u32,
}

type EndListener = Box<dyn FnMut(&HandEnd)>;

/// One round of UNO, from the deal until a player runs out of cards.
///
/// Every mutation acts on the player whose turn it is, except for UNO calls and
/// accusations which name their players explicitly. A failed call leaves the
/// hand untouched.
pub struct Hand {
    players: Vec<Player>,
    dealer: usize,
    direction: Direction,
    current_player: usize,
    draw_pile: Pile,
    discard_pile: Pile,
    active_color: Option<CardColor>,
    phase: Phase,
    winner: Option<usize>,
    shuffler: Box<dyn Shuffler>,
    end_listeners: Vec<EndListener>,
}

impl Hand {
    pub fn new(
        player_names: Vec<String>,
        dealer: usize,
        shuffler: impl Shuffler + 'static,
    ) -> Result<Self> {
        Self::new_with_options(player_names, dealer, shuffler, HandOptions::default())
    }

    pub fn new_with_options(
        player_names: Vec<String>,
        dealer: usize,
        shuffler: impl Shuffler + 'static,
        options: HandOptions,
    ) -> Result<Self> {
        let player_count = player_names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(UnoError::InvalidPlayerCount(player_count));
        }
        if dealer >= player_count {
            return Err(UnoError::InvalidDealer {
                dealer,
                players: player_count,
            });
        }
        let cards_per_player = options.cards_per_player;
        // At least one card has to stay behind for the opening discard.
        if cards_per_player == 0
            || cards_per_player
                .checked_mul(player_count)
                .map_or(true, |total| total >= usize::from(TOTAL_CARDS_IN_DECK))
        {
            return Err(UnoError::InvalidCardsPerPlayer(cards_per_player));
        }

        let mut hand = Hand {
            players: player_names.into_iter().map(Player::new).collect(),
            dealer,
            direction: Direction::Clockwise,
            current_player: dealer,
            draw_pile: Pile::standard_deck(),
            discard_pile: Pile::new(),
            active_color: None,
            phase: Phase::GameStart,
            winner: None,
            shuffler: Box::new(shuffler),
            end_listeners: Vec::new(),
        };

        hand.draw_pile.shuffle(&mut *hand.shuffler);
        hand.deal(cards_per_player);

        let opening_card = hand.reveal_opening_card()?;
        hand.discard_pile.push(opening_card);
        hand.resolve_opening_card(opening_card);
        hand.phase = Phase::InPlay;

        debug!(
            players = player_count,
            dealer,
            %opening_card,
            current_player = hand.current_player,
            "Hand started"
        );

        Ok(hand)
    }

    /// Whether the card at `index` in the current player's hand may be played.
    pub fn can_play(&self, index: usize) -> bool {
        if self.phase != Phase::InPlay {
            return false;
        }
        let player = self.current();
        match player.hand.get(index) {
            Some(card) => self.is_legal(player, card),
            None => false,
        }
    }

    pub fn can_play_any(&self) -> bool {
        (0..self.current().cards_count()).any(|index| self.can_play(index))
    }

    /// Plays the card at `index` from the current player's hand and returns it.
    ///
    /// `color` names the active color and must be given exactly when the card
    /// is a wild.
    pub fn play(&mut self, index: usize, color: Option<CardColor>) -> Result<Card> {
        self.ensure_in_play()?;

        let player = self.current();
        let card = *player.hand.get(index).ok_or(UnoError::InvalidIndex {
            index,
            len: player.cards_count(),
        })?;
        if !self.is_legal(player, &card) {
            return Err(UnoError::IllegalPlay(card));
        }
        let chosen_color = match (card.is_wild(), color) {
            (true, Some(color)) => Some(color),
            (true, None) => return Err(UnoError::ColorRequired(card)),
            (false, Some(_)) => return Err(UnoError::ColorNotAllowed(card)),
            (false, None) => None,
        };

        let acting_player = self.current_player;
        self.players[acting_player].remove_card(index);
        self.discard_pile.push(card);
        self.active_color = chosen_color;

        debug!(player = acting_player, %card, color = ?chosen_color, "Card played");

        self.apply_card_effect(card);

        if self.players[acting_player].cards_count() == 0 {
            self.end_hand(acting_player);
        }

        Ok(card)
    }

    /// Draws one card for the current player.
    ///
    /// The turn passes unless the drawn card can be played right away, in which
    /// case the same player stays in turn.
    pub fn draw(&mut self) -> Result<Card> {
        self.ensure_in_play()?;

        let card = self.deal_one().ok_or(UnoError::InsufficientCards)?;
        let drawing_player = self.current_player;
        self.players[drawing_player].add_card(card);

        let playable = self.is_legal(&self.players[drawing_player], &card);
        if !playable {
            self.move_turn_n_players_ahead(1);
        }

        debug!(player = drawing_player, %card, playable, "Card drawn");

        Ok(card)
    }

    /// Shuffles every discarded card except the top one back into the draw pile.
    pub fn reshuffle(&mut self) -> Result<()> {
        self.ensure_in_play()?;
        self.reshuffle_piles()
    }

    /// Records an UNO call for `player`. Calls made while holding any number of
    /// cards other than one are ignored.
    pub fn say_uno(&mut self, player: usize) -> bool {
        if self.phase != Phase::InPlay {
            return false;
        }
        let Some(caller) = self.players.get_mut(player) else {
            return false;
        };

        let called = caller.uno();
        debug!(player, called, "UNO called");
        called
    }

    /// Penalizes `accused` with two cards if they hold a single card without
    /// having called UNO.
    pub fn catch_uno_failure(&mut self, accuser: usize, accused: usize) -> bool {
        if self.phase != Phase::InPlay || accuser == accused || accuser >= self.players.len() {
            return false;
        }
        let Some(target) = self.players.get(accused) else {
            return false;
        };
        if target.cards_count() != 1 || target.uno_called() {
            return false;
        }

        let drawn = self.draw_cards_to_player(accused, UNO_PENALTY);
        debug!(accuser, accused, drawn, "Caught missing UNO call");
        true
    }

    pub fn play_turn(&mut self, turn_action: TurnAction) -> Result<PlayTurnResult> {
        self.ensure_in_play()?;

        let turn_action_result = match turn_action {
            TurnAction::Play { index, color } => TurnActionResult::Played(self.play(index, color)?),
            TurnAction::Draw => {
                let drawing_player = self.current_player;
                let card = self.draw()?;
                TurnActionResult::Drew {
                    card,
                    turn_passed: self.current_player != drawing_player,
                }
            }
            TurnAction::SayUno(player) => TurnActionResult::UnoCalled(self.say_uno(player)),
            TurnAction::CatchUnoFailure { accuser, accused } => {
                TurnActionResult::UnoCaught(self.catch_uno_failure(accuser, accused))
            }
        };

        Ok(PlayTurnResult {
            turn_action_result,
            won: self.has_ended(),
        })
    }

    /// Registers a listener called once, when the hand ends.
    pub fn on_end(&mut self, listener: impl FnMut(&HandEnd) + 'static) {
        self.end_listeners.push(Box::new(listener));
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_hand(&self, index: usize) -> Option<&[Card]> {
        self.players.get(index).map(Player::hand)
    }

    pub fn has_called_uno(&self, index: usize) -> bool {
        self.players
            .get(index)
            .map_or(false, Player::uno_called)
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The player in turn, or `None` once the hand has ended.
    pub fn player_in_turn(&self) -> Option<usize> {
        (self.phase == Phase::InPlay).then_some(self.current_player)
    }

    pub fn draw_pile(&self) -> &Pile {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &Pile {
        &self.discard_pile
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    /// The color named for the wild card on top of the discard pile.
    pub fn active_color(&self) -> Option<CardColor> {
        self.active_color
    }

    pub fn has_ended(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|index| self.players[index].name())
    }

    /// Points left in the losers' hands, once the hand has ended.
    pub fn score(&self) -> Option<u32> {
        self.winner
            .map(|_| self.players.iter().map(Player::points_in_hand).sum())
    }

    /// Cards in all hands and both piles.
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::cards_count).sum::<usize>()
            + self.draw_pile.len()
            + self.discard_pile.len()
    }

    fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    fn ensure_in_play(&self) -> Result<()> {
        match self.phase {
            Phase::GameOver => Err(UnoError::HandEnded),
            Phase::GameStart | Phase::InPlay => Ok(()),
        }
    }

    /// The color the next card has to follow.
    fn current_color(&self) -> Option<CardColor> {
        match self.discard_pile.top() {
            Some(Card::Wild | Card::WildDrawFour) => self.active_color,
            Some(card) => card.color(),
            None => None,
        }
    }

    fn is_legal(&self, player: &Player, card: &Card) -> bool {
        let Some(top) = self.discard_pile.top() else {
            return false;
        };

        match card {
            Card::Wild => true,
            Card::WildDrawFour => match self.current_color() {
                Some(color) => !player.has_color(color),
                None => true,
            },
            Card::Colored(color, _) => match top {
                Card::Colored(_, _) => card.matches(top),
                Card::Wild | Card::WildDrawFour => self.active_color == Some(*color),
            },
        }
    }

    fn deal(&mut self, cards_per_player: usize) {
        let player_count = self.players.len();
        let first = (self.dealer + 1) % player_count;

        for seat in (0..cards_per_player * player_count).map(|n| (first + n) % player_count) {
            if let Some(card) = self.draw_pile.deal() {
                self.players[seat].add_card(card);
            }
        }
    }

    fn reveal_opening_card(&mut self) -> Result<Card> {
        for _ in 0..TOTAL_CARDS_IN_DECK {
            let card = self.draw_pile.deal().ok_or(UnoError::InsufficientCards)?;
            if !card.is_wild() {
                return Ok(card);
            }

            debug!(%card, "Burying wild opening card");
            self.draw_pile.insert_bottom(card);
            self.draw_pile.shuffle(&mut *self.shuffler);
        }

        Err(UnoError::NoOpeningCard)
    }

    /// The opening card takes effect as though the dealer had just played it,
    /// except that the dealer never leads.
    fn resolve_opening_card(&mut self, card: Card) {
        self.current_player = self.dealer;
        match card {
            // Two players: the reverse skips the dealer's turn.
            Card::Colored(_, ColoredCard::Reverse) if self.players.len() == 2 => {
                self.direction = self.direction.reversed();
                self.move_turn_n_players_ahead(1);
            }
            _ => self.apply_card_effect(card),
        }
    }

    fn apply_card_effect(&mut self, card: Card) {
        match card {
            Card::Colored(_, ColoredCard::Number(_)) | Card::Wild => {
                self.move_turn_n_players_ahead(1);
            }
            Card::Colored(_, ColoredCard::Skip) => {
                self.move_turn_n_players_ahead(2);
            }
            Card::Colored(_, ColoredCard::Reverse) => {
                self.perform_reverse();
            }
            Card::Colored(_, ColoredCard::DrawTwo) => {
                self.draw_cards_to_player(self.get_nth_turn_player(1), DRAW_TWO_PENALTY);
                self.move_turn_n_players_ahead(2);
            }
            Card::WildDrawFour => {
                self.draw_cards_to_player(self.get_nth_turn_player(1), WILD_DRAW_FOUR_PENALTY);
                self.move_turn_n_players_ahead(2);
            }
        }
    }

    fn perform_reverse(&mut self) {
        self.direction = self.direction.reversed();
        // With two players a reverse hands the turn straight back.
        if self.players.len() == 2 {
            self.move_turn_n_players_ahead(2);
        } else {
            self.move_turn_n_players_ahead(1);
        }
    }

    fn deal_one(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() {
            if let Err(err) = self.reshuffle_piles() {
                warn!(%err, "Draw pile exhausted");
                return None;
            }
        }
        self.draw_pile.deal()
    }

    fn draw_cards_to_player(&mut self, player: usize, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            let Some(card) = self.deal_one() else {
                break;
            };
            self.players[player].add_card(card);
            drawn += 1;
        }
        drawn
    }

    fn reshuffle_piles(&mut self) -> Result<()> {
        if self.draw_pile.len() + self.discard_pile.len() <= 1 {
            return Err(UnoError::InsufficientCards);
        }

        let recycled = self.discard_pile.take_all_but_top();
        debug!(recycled = recycled.len(), "Reshuffling discard pile");
        self.draw_pile.extend_bottom(recycled);
        self.draw_pile.shuffle(&mut *self.shuffler);
        Ok(())
    }

    fn end_hand(&mut self, winner: usize) {
        self.phase = Phase::GameOver;
        self.winner = Some(winner);

        let hand_end = HandEnd {
            winner,
            winner_name: self.players[winner].name().to_string(),
            score: self.score().unwrap_or_default(),
        };
        info!(winner = %hand_end.winner_name, score = hand_end.score, "Hand ended");

        let mut listeners = std::mem::take(&mut self.end_listeners);
        for listener in &mut listeners {
            listener(&hand_end);
        }
    }

    fn get_nth_turn_player(&self, n: usize) -> usize {
        let player_count = self.players.len();
        let steps = n % player_count;
        match self.direction {
            Direction::Clockwise => (self.current_player + steps) % player_count,
            Direction::CounterClockwise => {
                (self.current_player + player_count - steps) % player_count
            }
        }
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        self.current_player = self.get_nth_turn_player(n);
    }
}

impl Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("players", &self.players)
            .field("dealer", &self.dealer)
            .field("direction", &self.direction)
            .field("current_player", &self.current_player)
            .field("draw_pile", &self.draw_pile)
            .field("discard_pile", &self.discard_pile)
            .field("active_color", &self.active_color)
            .field("phase", &self.phase)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

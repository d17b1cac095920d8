use rand::Rng;
use strum::IntoEnumIterator;
use uno_hand::{Card, CardColor, Hand, TurnAction};

/// Picks the current player's move: the first playable colored card, then a
/// wild, and a draw when nothing fits.
pub fn choose_action(hand: &Hand) -> TurnAction {
    let cards = hand
        .player_hand(hand.current_player())
        .unwrap_or_default();

    let best = (0..cards.len())
        .filter(|index| hand.can_play(*index))
        .min_by_key(|index| cards[*index].is_wild());

    match best {
        Some(index) => TurnAction::Play {
            index,
            color: cards[index]
                .is_wild()
                .then(|| favourite_color(cards, index)),
        },
        None => TurnAction::Draw,
    }
}

/// The color the player holds most of, not counting the card being played.
fn favourite_color(cards: &[Card], played: usize) -> CardColor {
    CardColor::iter()
        .max_by_key(|color| {
            cards
                .iter()
                .enumerate()
                .filter(|(index, card)| *index != played && card.color() == Some(*color))
                .count()
        })
        .unwrap_or(CardColor::Red)
}

/// Gives every player a chance to call out the one sitting after them.
pub fn call_out_forgetful_players(hand: &mut Hand, rng: &mut impl Rng) -> Vec<usize> {
    let player_count = hand.player_count();
    let mut caught = Vec::new();

    for accuser in 0..player_count {
        let accused = (accuser + 1) % player_count;
        if rng.gen_bool(0.5) && hand.catch_uno_failure(accuser, accused) {
            caught.push(accused);
        }
    }

    caught
}

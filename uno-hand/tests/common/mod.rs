#![allow(dead_code)]

use uno_hand::{Card, Hand, HandOptions};

pub fn create_player_names(count: usize) -> Vec<String> {
    let mut player_names = Vec::new();
    for i in 0..count {
        player_names.push(format!("Player {}", i + 1));
    }
    player_names
}

pub fn keep_order(_: &mut [Card]) {}

/// A shuffler that, the first time it runs, moves `deal_order` to the top of
/// the deck so those cards come off first and in that order. Later shuffles
/// leave the cards alone.
pub fn stacked(deal_order: Vec<Card>) -> impl FnMut(&mut [Card]) {
    let mut stacked = false;
    move |cards: &mut [Card]| {
        if stacked {
            return;
        }
        stacked = true;

        let mut rest = cards.to_vec();
        let mut top = Vec::with_capacity(deal_order.len());
        for card in &deal_order {
            let position = rest
                .iter()
                .position(|x| x == card)
                .expect("Not enough copies of the card in the deck.");
            top.push(rest.remove(position));
        }
        top.reverse();
        rest.extend(top);
        cards.copy_from_slice(&rest);
    }
}

/// The deck order that deals `hands` (one card at a time, starting after the
/// dealer), followed by `then` for the opening card and later draws.
pub fn deal_order(dealer: usize, hands: &[Vec<Card>], then: &[Card]) -> Vec<Card> {
    let player_count = hands.len();
    let cards_per_player = hands[0].len();
    let mut order = Vec::new();
    for round in 0..cards_per_player {
        for offset in 1..=player_count {
            order.push(hands[(dealer + offset) % player_count][round]);
        }
    }
    order.extend_from_slice(then);
    order
}

pub fn rigged_hand(dealer: usize, hands: &[Vec<Card>], then: &[Card]) -> Hand {
    Hand::new_with_options(
        create_player_names(hands.len()),
        dealer,
        stacked(deal_order(dealer, hands, then)),
        HandOptions {
            cards_per_player: hands[0].len(),
        },
    )
    .expect("A rigged hand must deal.")
}

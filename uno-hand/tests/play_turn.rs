mod common;

use common::{create_player_names, keep_order, rigged_hand};
use uno_hand::{
    card::{Card, CardColor},
    hand::{Direction, Hand, HandOptions, Phase},
    turn::{PlayTurnResult, TurnAction, TurnActionResult},
    UnoError,
};

fn play(index: usize) -> TurnAction {
    TurnAction::Play { index, color: None }
}

/// Four players, dealer 0, so player 1 leads on the opening Red 7.
fn four_player_hand(leader_cards: Vec<Card>, then: &[Card]) -> Hand {
    let filler = |color| vec![Card::number(color, 1), Card::number(color, 2)];
    let mut opening = vec![Card::number(CardColor::Red, 7)];
    opening.extend_from_slice(then);

    rigged_hand(
        0,
        &[
            filler(CardColor::Green),
            leader_cards,
            filler(CardColor::Blue),
            filler(CardColor::Yellow),
        ],
        &opening,
    )
}

#[test]
fn play_turn_works_if_card_in_hand() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );
    assert_eq!(hand.current_player(), 1);

    let turn_result = hand.play_turn(play(0)).unwrap();

    assert_eq!(
        turn_result,
        PlayTurnResult {
            turn_action_result: TurnActionResult::Played(Card::number(CardColor::Red, 1)),
            won: false
        }
    );
    assert_eq!(hand.top_card(), Some(&Card::number(CardColor::Red, 1)));
    assert_eq!(hand.current_player(), 2);
}

#[test]
fn play_turn_fails_if_card_not_in_hand() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );

    let error = hand.play_turn(play(2)).unwrap_err();

    assert_eq!(error, UnoError::InvalidIndex { index: 2, len: 2 });
    assert_eq!(hand.top_card(), Some(&Card::number(CardColor::Red, 7)));
    assert_eq!(hand.current_player(), 1);
}

#[test]
fn play_turn_skips_player_properly() {
    let mut hand = four_player_hand(
        vec![Card::skip(CardColor::Red), Card::number(CardColor::Green, 9)],
        &[],
    );

    hand.play_turn(play(0)).unwrap();

    assert_eq!(hand.current_player(), 3);
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut hand = four_player_hand(
        vec![
            Card::reverse(CardColor::Red),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );

    hand.play_turn(play(0)).unwrap();

    assert_eq!(hand.direction(), Direction::CounterClockwise);
    assert_eq!(hand.current_player(), 0);
}

#[test]
fn play_turn_performs_draw_two_properly() {
    let mut hand = four_player_hand(
        vec![
            Card::draw_two(CardColor::Red),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );

    hand.play_turn(play(0)).unwrap();

    assert_eq!(hand.current_player(), 3);
    assert_eq!(hand.get_player(2).unwrap().cards_count(), 4);
}

#[test]
fn play_turn_performs_wild_properly() {
    let mut hand = four_player_hand(
        vec![Card::Wild, Card::number(CardColor::Green, 9)],
        &[],
    );

    let turn_result = hand
        .play_turn(TurnAction::Play {
            index: 0,
            color: Some(CardColor::Yellow),
        })
        .unwrap();

    assert_eq!(
        turn_result.turn_action_result,
        TurnActionResult::Played(Card::Wild)
    );
    assert_eq!(hand.active_color(), Some(CardColor::Yellow));
    assert_eq!(hand.current_player(), 2);
}

#[test]
fn play_turn_performs_wild_draw_four_properly() {
    let mut hand = four_player_hand(
        vec![Card::WildDrawFour, Card::number(CardColor::Green, 9)],
        &[],
    );

    hand.play_turn(TurnAction::Play {
        index: 0,
        color: Some(CardColor::Green),
    })
    .unwrap();

    assert_eq!(hand.active_color(), Some(CardColor::Green));
    assert_eq!(hand.get_player(2).unwrap().cards_count(), 6);
    assert_eq!(hand.current_player(), 3);
}

#[test]
fn play_turn_draw_reports_the_card() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Blue, 4),
            Card::number(CardColor::Green, 9),
        ],
        &[Card::number(CardColor::Blue, 8), Card::number(CardColor::Red, 3)],
    );

    let turn_result = hand.play_turn(TurnAction::Draw).unwrap();
    assert_eq!(
        turn_result.turn_action_result,
        TurnActionResult::Drew {
            card: Card::number(CardColor::Blue, 8),
            turn_passed: true
        }
    );
    assert_eq!(hand.current_player(), 2);

    // Player 2 holds Blue 1 and Blue 2; the Red 3 matches the top card.
    let turn_result = hand.play_turn(TurnAction::Draw).unwrap();
    assert_eq!(
        turn_result.turn_action_result,
        TurnActionResult::Drew {
            card: Card::number(CardColor::Red, 3),
            turn_passed: false
        }
    );
    assert_eq!(hand.current_player(), 2);
}

#[test]
fn turn_uno_works_if_only_one_card() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );
    hand.play_turn(play(0)).unwrap();

    let turn_result = hand.play_turn(TurnAction::SayUno(1)).unwrap();

    assert_eq!(
        turn_result,
        PlayTurnResult {
            turn_action_result: TurnActionResult::UnoCalled(true),
            won: false
        }
    );
    assert!(hand.has_called_uno(1));
}

#[test]
fn turn_uno_does_not_work_if_more_than_one_card() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );

    let turn_result = hand.play_turn(TurnAction::SayUno(1)).unwrap();

    assert_eq!(
        turn_result.turn_action_result,
        TurnActionResult::UnoCalled(false)
    );
    assert_eq!(hand.get_player(1).unwrap().cards_count(), 2);
}

#[test]
fn turn_callout_works_if_player_forgot_uno() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );
    hand.play_turn(play(0)).unwrap();

    let turn_result = hand
        .play_turn(TurnAction::CatchUnoFailure {
            accuser: 2,
            accused: 1,
        })
        .unwrap();

    assert_eq!(
        turn_result.turn_action_result,
        TurnActionResult::UnoCaught(true)
    );
    assert_eq!(hand.get_player(1).unwrap().cards_count(), 3);
}

#[test]
fn turn_callout_does_not_work_if_no_player_eligible() {
    let mut hand = four_player_hand(
        vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Green, 9),
        ],
        &[],
    );

    let turn_result = hand
        .play_turn(TurnAction::CatchUnoFailure {
            accuser: 2,
            accused: 1,
        })
        .unwrap();

    assert_eq!(
        turn_result.turn_action_result,
        TurnActionResult::UnoCaught(false)
    );
    assert_eq!(hand.get_player(1).unwrap().cards_count(), 2);
}

#[test]
fn turn_winning_works_properly() {
    let mut hand = rigged_hand(
        0,
        &[
            vec![Card::number(CardColor::Blue, 9)],
            vec![Card::skip(CardColor::Red)],
        ],
        &[Card::number(CardColor::Red, 7)],
    );
    assert_eq!(hand.current_player(), 1);

    let turn_result = hand.play_turn(play(0)).unwrap();

    assert_eq!(
        turn_result,
        PlayTurnResult {
            turn_action_result: TurnActionResult::Played(Card::skip(CardColor::Red)),
            won: true
        }
    );
    assert_eq!(hand.phase(), Phase::GameOver);
    assert_eq!(hand.winner(), Some("Player 2"));
    assert_eq!(hand.score(), Some(9));
    assert_eq!(
        hand.play_turn(TurnAction::Draw).unwrap_err(),
        UnoError::HandEnded
    );
}

#[test]
fn two_players_unshuffled_deck_starts_after_the_dealer() {
    let hand = Hand::new_with_options(
        vec!["A".to_string(), "B".to_string()],
        0,
        keep_order,
        HandOptions {
            cards_per_player: 7,
        },
    )
    .unwrap();

    assert_eq!(hand.phase(), Phase::InPlay);
    assert_eq!(hand.top_card(), Some(&Card::number(CardColor::Yellow, 9)));
    assert_eq!(hand.player_in_turn(), Some(1));
    assert_eq!(hand.player_names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(hand.dealer(), 0);
}

#[test]
fn wild_draw_four_hits_the_next_player_and_skips_them() {
    let mut hand = rigged_hand(
        0,
        &[
            vec![Card::number(CardColor::Red, 1), Card::number(CardColor::Red, 2)],
            vec![Card::WildDrawFour, Card::number(CardColor::Blue, 3)],
            vec![Card::number(CardColor::Red, 4), Card::number(CardColor::Red, 5)],
        ],
        &[Card::number(CardColor::Yellow, 6)],
    );
    assert_eq!(hand.current_player(), 1);
    assert!(hand.can_play(0));

    let card = hand.play(0, Some(CardColor::Green)).unwrap();

    assert_eq!(card, Card::WildDrawFour);
    assert_eq!(hand.get_player(2).unwrap().cards_count(), 6);
    assert_eq!(hand.current_player(), 0);
    assert_eq!(hand.active_color(), Some(CardColor::Green));
}

#[test]
fn invalid_player_count_is_rejected() {
    let error = Hand::new(create_player_names(1), 0, keep_order).unwrap_err();
    assert_eq!(error, UnoError::InvalidPlayerCount(1));
}

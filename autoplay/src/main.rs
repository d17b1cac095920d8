mod config;
mod strategy;

use color_eyre::eyre::{Result, WrapErr};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uno_hand::{Hand, HandOptions, RandomShuffler, TurnAction, TurnActionResult};

use crate::config::AutoplayConfig;

// Chance that a player with one card remembers to call UNO.
const UNO_MEMORY: f64 = 0.75;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AutoplayConfig::from_env()?;
    let (mut rng, shuffler) = match config.seed {
        Some(seed) => (StdRng::seed_from_u64(seed), RandomShuffler::seeded(seed)),
        None => (StdRng::from_entropy(), RandomShuffler::new()),
    };

    let dealer = rng.gen_range(0..config.players.len());
    let mut hand = Hand::new_with_options(
        config.players.clone(),
        dealer,
        shuffler,
        HandOptions {
            cards_per_player: config.cards_per_player,
        },
    )
    .wrap_err("Could not deal the hand")?;

    hand.on_end(|hand_end| {
        info!(
            winner = %hand_end.winner_name,
            score = hand_end.score,
            "Hand won"
        );
    });

    info!(
        players = ?config.players,
        dealer = %config.players[dealer],
        top = %hand.top_card().map(ToString::to_string).unwrap_or_default(),
        "Hand dealt"
    );

    for turn in 1..=config.max_turns {
        let Some(player) = hand.player_in_turn() else {
            break;
        };
        let name = config.players[player].as_str();

        let action = strategy::choose_action(&hand);
        let result = hand
            .play_turn(action)
            .wrap_err_with(|| format!("{name} could not take turn {turn}"))?;
        info!(turn, player = name, result = ?result.turn_action_result, "Turn taken");

        if result.won {
            break;
        }

        let down_to_one = matches!(result.turn_action_result, TurnActionResult::Played(_))
            && hand.player_hand(player).map_or(0, <[_]>::len) == 1;
        if down_to_one && rng.gen_bool(UNO_MEMORY) {
            hand.play_turn(TurnAction::SayUno(player))?;
            info!(player = name, "UNO!");
        }

        for caught in strategy::call_out_forgetful_players(&mut hand, &mut rng) {
            info!(player = %config.players[caught], "Caught without calling UNO");
        }
    }

    if !hand.has_ended() {
        warn!(max_turns = config.max_turns, "No winner before the turn limit");
    }

    Ok(())
}

use std::thread;
use std::time::Duration;

use log::{error, info};

use crate::ai::MoveProvider;
use crate::game::{Game, GameOutcome, Player, TurnReport};
use crate::ui::Renderer;

/// Play `game` to the end, Red and Yellow asking their own providers.
///
/// `turn_delay` is a cosmetic pause before each turn. `on_turn` sees every
/// report before the board is rendered.
pub fn play_match(
    game: &mut Game,
    red: &mut dyn MoveProvider,
    yellow: &mut dyn MoveProvider,
    renderer: &mut dyn Renderer,
    turn_delay: Duration,
    mut on_turn: impl FnMut(&Game, &TurnReport),
) -> GameOutcome {
    renderer.render(game.board(), game.rotation());

    while !game.is_terminal() {
        if !turn_delay.is_zero() {
            thread::sleep(turn_delay);
        }

        let provider: &mut dyn MoveProvider = match game.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let report = match game.play_turn(provider) {
            Ok(report) => report,
            Err(err) => {
                error!("match stopped after {} moves: {err}", game.history().len());
                break;
            }
        };

        on_turn(game, &report);
        renderer.render(game.board(), game.rotation());
    }

    info!(
        "match over after {} moves: {:?}",
        game.history().len(),
        game.outcome()
    );
    game.outcome()
}

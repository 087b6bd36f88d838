//! Random self-play.
//!
//! Plays uniformly random legal moves until the game ends. Used by the
//! `selfplay` demo and as a driver for whole-game invariant tests.

use crate::constants::MAX_GAME_LEN;
use crate::game::Game;

/// Play a random game from the starting position.
///
/// The same seed always produces the same game.
pub fn random_game(rng: &mut fastrand::Rng) -> Game {
    let mut game = Game::new();
    play_out(&mut game, rng);
    game
}

/// Continue `game` with random legal moves until it is over.
///
/// Returns the number of discs placed.
pub fn play_out(game: &mut Game, rng: &mut fastrand::Rng) -> usize {
    let mut placed = 0;
    while !game.is_over() && placed < MAX_GAME_LEN {
        let moves = game.valid_moves();
        // Resumed positions can start with the side to move blocked
        if moves.is_empty() {
            if game.pass().is_err() {
                break;
            }
            continue;
        }
        let pos = moves[rng.usize(..moves.len())];
        if game.play(pos).is_err() {
            break;
        }
        placed += 1;
    }
    placed
}

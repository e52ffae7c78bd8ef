//! Scripted demo game on a 3x3 board.

use anyhow::Result;
use gridgame::{Game, GameConfig, Mark, Player, messages, render};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = Game::new(GameConfig::default())?;
    game.add_player(Player::new("Wonder Woman".to_string(), Mark('X')));
    game.add_player(Player::new("Wonder Man".to_string(), Mark('O')));

    print!("{}", render::render_board(game.board()));
    println!("{}", messages::status_line(game.status()));
    println!("{}", messages::summary(&game));

    let script = [(0, 0), (0, 0), (1, 1), (0, 2), (2, 2), (0, 1), (2, 1)];
    for (row, col) in script {
        if let Err(rejection) = game.submit_move(row, col) {
            println!("{}", messages::illegal_move(&rejection));
        }
    }

    print!("{}", render::render_board(game.board()));
    println!("{}", messages::summary(&game));

    Ok(())
}

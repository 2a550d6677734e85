//! Reversi AI Engine CLI
//!
//! Plays one engine-vs-engine game on the console. Set `RUST_LOG=reversi=debug`
//! to see the search details for every move.

use std::time::Duration;

use reversi::{AIEngine, EngineConfig, GameState, Player};

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("       Reversi AI Engine v0.1.0");
    println!("===========================================\n");

    // Smaller budget than the default keeps the demo quick
    let engine = AIEngine::with_config(EngineConfig {
        node_budget: Some(100_000),
        ..EngineConfig::default()
    });
    let mut game = GameState::new();
    let mut ply = 0;

    while !game.is_over() {
        let player = game.current_player();
        let result = engine.get_move_with_stats(game.position());
        let Some(pos) = result.best_move else {
            // Unreachable for a well-formed game: apply_move passes automatically.
            println!("{} has no move", player);
            break;
        };

        ply += 1;
        if let Err(err) = game.apply_move(pos) {
            eprintln!("{}", err);
            break;
        }
        println!(
            "{:>2}. {:<5} {}  (depth {}, score {}, {} nodes, {}ms)",
            ply, player, pos, result.depth, result.score, result.nodes, result.time_ms
        );
    }

    println!("\n{}", game.board());
    let (black, white) = game.score();
    println!("Black {}  White {}", black, white);
    match game.winner() {
        Some(winner) => println!("Winner: {}", winner),
        None => println!("Draw"),
    }
    println!(
        "Time: Black {}  White {}",
        format_time(game.player_time(Player::Black)),
        format_time(game.player_time(Player::White))
    );
}

fn format_time(duration: Duration) -> String {
    format!("{}.{:03}s", duration.as_secs(), duration.subsec_millis())
}

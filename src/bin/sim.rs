use core::time::Duration;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, GameConfig, Match, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut board_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let p1 = AiPlayer::new(SmallRng::seed_from_u64(seed1))
        .with_name("player1")
        .with_pause(Duration::ZERO);
    let p2 = AiPlayer::new(SmallRng::seed_from_u64(seed2))
        .with_name("player2")
        .with_pause(Duration::ZERO);

    let mut game = Match::with_random_boards(
        &mut board_rng,
        &GameConfig::default(),
        Box::new(p1),
        Box::new(p2),
    )?;
    let result = game.run()?;

    let winner = match result.winner() {
        Side::Human => "player1",
        Side::Computer => "player2",
    };
    let summary = |side: Side| {
        let board = game.board(side);
        json!({"ships": board.ship_count(), "sunk": board.sunk_count()})
    };

    let result = json!({
        "winner": winner,
        "result": result,
        "turns": game.turn(),
        "player1": summary(Side::Human),
        "player2": summary(Side::Computer),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, render::render_boards, AiPlayer, GameConfig, HumanPlayer, Match, MatchResult,
    Side, BOARD_SIZE,
};

const DIVIDER: &str = "-----------------------------------------";

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Side of the square board")]
    size: usize,
    #[arg(long, help = "Show the computer's ships")]
    reveal: bool,
}

fn greet() {
    println!("{}", DIVIDER);
    println!("   Welcome to sea battle");
    println!("{}", DIVIDER);
    println!(" input format: x y");
    println!(" x - row number");
    println!(" y - column number");
    println!("{}", DIVIDER);
}

fn play(cli: Cli) -> anyhow::Result<()> {
    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let config = GameConfig {
        size: cli.size,
        reveal_computer: cli.reveal,
        ..GameConfig::default()
    };

    let human = HumanPlayer::stdio();
    let computer = AiPlayer::new(SmallRng::from_rng(&mut rng));
    let mut game = Match::with_random_boards(&mut rng, &config, Box::new(human), Box::new(computer))?;

    greet();
    let result = game.run()?;

    println!("{}", DIVIDER);
    print!(
        "{}",
        render_boards(
            "Player",
            game.board(Side::Human),
            "Computer",
            game.board(Side::Computer)
        )
    );
    match result {
        MatchResult::HumanWins => println!("You won!"),
        MatchResult::ComputerWins => println!("The computer won!"),
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = play(cli) {
        log::error!("{:#}", e);
        eprintln!("An unexpected situation occurred!");
        std::process::exit(1);
    }
}

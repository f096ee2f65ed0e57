use broadside::{
    init_logging, Game, GameStatus, Player, PlayerConfig, RandomTargeting, Side, BOARD_SIZE,
};

use clap::Parser;
use log::{debug, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

/// Play a full game with random targeting on both sides and print a JSON
/// summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE)]
    board_size: usize,
    #[arg(short, long, help = "Log every placement and shot")]
    verbose: bool,
}

#[derive(Serialize)]
struct SideSummary {
    name: String,
    shots: usize,
    ships_sunk: usize,
}

#[derive(Serialize)]
struct Summary {
    winner: Option<Side>,
    human: SideSummary,
    computer: SideSummary,
}

fn seeded(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn summarize(game: &Game, side: Side) -> SideSummary {
    // ships_sunk counts the opponent's losses
    let opponent = game.player(side.opponent());
    SideSummary {
        name: game.player(side).name().to_string(),
        shots: game.shots_fired(side),
        ships_sunk: opponent.fleet().iter().filter(|s| s.is_sunk()).count(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose.then_some(LevelFilter::Debug));

    if let Some(s) = cli.seed {
        debug!("using fixed seed {} (game will be reproducible)", s);
    }
    let mut setup_rng = seeded(cli.seed, 0);
    let human = Player::deployed(
        PlayerConfig::default()
            .with_name("Human")
            .with_board_size(cli.board_size),
        &mut setup_rng,
    )?;
    let computer = Player::deployed(
        PlayerConfig::default()
            .with_name("Computer")
            .with_board_size(cli.board_size),
        &mut setup_rng,
    )?;

    let mut human_targeting = RandomTargeting::new(seeded(cli.seed, 1));
    let mut computer_targeting = RandomTargeting::new(seeded(cli.seed, 2));

    let mut game = Game::new(human, computer);
    game.start(Side::Human)?;

    let max_shots = 2 * game.player(Side::Human).board().remaining_targets();
    while let GameStatus::InProgress { turn } = game.status() {
        if game.shots_fired(Side::Human) + game.shots_fired(Side::Computer) > max_shots {
            anyhow::bail!("game did not finish within {} shots", max_shots);
        }
        match turn {
            Side::Human => game.play_turn(&mut human_targeting)?,
            Side::Computer => game.play_computer_turn(&mut computer_targeting)?,
        };
    }

    let summary = Summary {
        winner: game.winner(),
        human: summarize(&game, Side::Human),
        computer: summarize(&game, Side::Computer),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

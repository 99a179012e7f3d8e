#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, player::cli::render_board, run_match, CliPlayer, ComputerPlayer, Match,
    MatchSummary, Seat, Strategy,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum StrategyArg {
    Random,
    Smart,
}

#[cfg(feature = "std")]
impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Smart => Strategy::Smart,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = StrategyArg::Smart)]
        strategy: StrategyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Two players sharing this terminal, taking turns.
    Hotseat {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, value_enum, default_value_t = StrategyArg::Smart)]
        first: StrategyArg,
        #[arg(long, value_enum, default_value_t = StrategyArg::Smart)]
        second: StrategyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn print_summary(summary: &MatchSummary, names: [&str; 2]) {
    println!(
        "\n{} wins after {} turns.",
        names[summary.winner.index()],
        summary.turns
    );
    for seat in [Seat::First, Seat::Second] {
        println!(
            "  {}: {} attacks, {} ships sunk",
            names[seat.index()],
            summary.attacks[seat.index()],
            summary.ships_sunk[seat.index()]
        );
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { strategy, seed } => {
            let mut rng = make_rng(seed);
            let mut game = Match::new(Strategy::default(), strategy.into());
            let mut human = CliPlayer::new("You");
            let mut computer = ComputerPlayer::new();
            let summary = run_match(&mut game, [&mut human, &mut computer], &mut rng)?;
            print_summary(&summary, ["You", "Computer"]);
        }
        Commands::Hotseat { seed } => {
            let mut rng = make_rng(seed);
            let mut game = Match::default();
            let mut p1 = CliPlayer::new("Player 1");
            let mut p2 = CliPlayer::new("Player 2");
            let summary = run_match(&mut game, [&mut p1, &mut p2], &mut rng)?;
            print_summary(&summary, ["Player 1", "Player 2"]);
        }
        Commands::Watch {
            first,
            second,
            seed,
        } => {
            println!("Starting computer vs computer game...");
            let mut rng = make_rng(seed);
            let mut game = Match::new(first.into(), second.into());
            let mut p1 = ComputerPlayer::new();
            let mut p2 = ComputerPlayer::new();
            let summary = run_match(&mut game, [&mut p1, &mut p2], &mut rng)?;
            for seat in [Seat::First, Seat::Second] {
                println!("\nComputer {} board:", seat.index() + 1);
                print!("{}", render_board(game.board(seat), None));
            }
            print_summary(&summary, ["Computer 1", "Computer 2"]);
        }
    }
    Ok(())
}

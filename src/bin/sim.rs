use broadside::{run_match, ComputerPlayer, Match, MatchSummary, Player, Seat, Strategy};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

/// One line of JSON per simulated match.
#[derive(Serialize)]
struct SimReport {
    strategies: [Strategy; 2],
    #[serde(flatten)]
    summary: MatchSummary,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("sim");
        eprintln!("Usage: {} <seed1> <seed2>", program);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // Each seat places its fleet from its own seed; play uses the first.
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Match::new(Strategy::Smart, Strategy::Random);
    let mut p1 = ComputerPlayer::new();
    let mut p2 = ComputerPlayer::new();
    p1.place_fleet(&mut rng1, game.board_mut(Seat::First))?;
    p2.place_fleet(&mut rng2, game.board_mut(Seat::Second))?;
    let summary = run_match(&mut game, [&mut p1, &mut p2], &mut rng1)?;

    let report = SimReport {
        strategies: [Seat::First, Seat::Second].map(|seat| game.attacker(seat).strategy()),
        summary,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

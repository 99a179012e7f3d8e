use broadside::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(seed: u64, first: Strategy, second: Strategy) -> (Match, MatchSummary) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new(first, second);
    let mut p1 = ComputerPlayer::new();
    let mut p2 = ComputerPlayer::new();
    let summary = run_match(&mut game, [&mut p1, &mut p2], &mut rng).unwrap();
    (game, summary)
}

#[test]
fn test_ai_vs_ai_game() {
    let (game, summary) = play(123, Strategy::Smart, Strategy::Smart);
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(summary.winner));
    assert!(summary.turns <= 200, "game took too many turns");
    assert_eq!(summary.ships_sunk[summary.winner.index()], FLEET.len());
    assert_eq!(summary.attacks[0] + summary.attacks[1], summary.turns);
    // First moves first, so it has made as many or one more attack.
    assert!(summary.attacks[0] == summary.attacks[1] || summary.attacks[0] == summary.attacks[1] + 1);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let (_, a) = play(77, Strategy::Smart, Strategy::Random);
    let (_, b) = play(77, Strategy::Smart, Strategy::Random);
    assert_eq!(a, b);
}

#[test]
fn test_smart_beats_random_on_average() {
    let mut smart_wins = 0;
    for seed in 0..40 {
        let (_, summary) = play(seed, Strategy::Smart, Strategy::Random);
        if summary.winner == Seat::First {
            smart_wins += 1;
        }
    }
    assert!(smart_wins > 20, "smart won only {} of 40", smart_wins);
}

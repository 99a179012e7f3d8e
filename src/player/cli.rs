#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    attacker::Attacker,
    board::Board,
    common::{AttackOutcome, Coordinate, GameError},
    config::{BOARD_SIZE, FLEET},
    game::{Match, Seat, TurnReport},
    ship::Orientation,
};

use super::Player;

/// Human player reading commands from a line-based input.
pub struct CliPlayer {
    name: String,
    // `None` reads stdin, locking it only for the duration of each line.
    input: Option<Box<dyn BufRead>>,
}

impl CliPlayer {
    /// Player reading from standard input.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: None,
        }
    }

    /// Player reading from any line source (scripts, tests).
    pub fn with_input(name: impl Into<String>, input: Box<dyn BufRead>) -> Self {
        Self {
            name: name.into(),
            input: Some(input),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = match self.input.as_mut() {
            Some(input) => input.read_line(&mut line)?,
            None => io::stdin().read_line(&mut line)?,
        };
        if read == 0 {
            anyhow::bail!("input closed while waiting for {}", self.name);
        }
        Ok(line.trim().to_string())
    }
}

/// Format a coordinate as column letter + 1-based row, e.g. `A5`.
pub fn coord_to_string(coord: Coordinate) -> String {
    let col = (b'A' + coord.col() as u8) as char;
    format!("{}{}", col, coord.row() + 1)
}

/// Parse `A5`-style input into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let invalid_row = || format!("Invalid row '{}' - must be a number 1-10", row_str);
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_row());
    }
    let row: usize = row_str.parse().map_err(|_| invalid_row())?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    Coordinate::new(row - 1, col).map_err(|e| e.to_string())
}

/// Parse `A5 H` / `B3 V` placement input. Orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Result<(Coordinate, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().ok_or("Please enter coordinates (e.g., A5 H)")?)?;
    let orientation = match parts.next().and_then(|s| s.chars().next()) {
        None | Some('h') | Some('H') => Orientation::Horizontal,
        Some('v') | Some('V') => Orientation::Vertical,
        Some(other) => return Err(format!("Invalid orientation '{}' - use H or V", other)),
    };
    Ok((coord, orientation))
}

/// Render a board as text.
///
/// With `view` set, only cells that attacker has targeted are revealed
/// (`X` hit, `o` miss). Without it the owner's view is drawn: ships as `S`
/// plus every strike and miss recorded on the board.
pub fn render_board(board: &Board, view: Option<&Attacker>) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    let misses = board.misses();
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "  {:2}", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match Coordinate::new(r, c) {
                Ok(coord) => match view {
                    Some(attacker) if attacker.has_attacked(coord) => {
                        if board.is_occupied(coord) {
                            'X'
                        } else {
                            'o'
                        }
                    }
                    Some(_) => '.',
                    None if board.hits().contains(coord) => 'X',
                    None if misses.contains(&coord) => 'o',
                    None if board.is_occupied(coord) => 'S',
                    None => '.',
                },
                Err(_) => '?',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

fn describe(outcome: AttackOutcome) -> &'static str {
    match outcome {
        AttackOutcome::Miss => "Miss",
        AttackOutcome::Hit => "Hit!",
        AttackOutcome::Sunk => "Hit! Ship sunk!",
    }
}

impl Player for CliPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        println!("\n{}: place your fleet", self.name);
        println!("  Enter a start cell and orientation (e.g., A5 H or B3 V).");
        println!("  Press ENTER for random placement.");

        for (i, ship) in FLEET.iter().enumerate() {
            loop {
                print!("{}", render_board(board, None));
                let line = self.prompt(&format!(
                    "Ship {}/{}: {} (length {}): ",
                    i + 1,
                    FLEET.len(),
                    ship.name(),
                    ship.length()
                ))?;

                let (origin, orientation) = if line.is_empty() {
                    board
                        .random_placement(rng, ship.length())
                        .map_err(|e| anyhow::anyhow!(e))?
                } else {
                    match parse_placement(&line) {
                        Ok(placement) => placement,
                        Err(e) => {
                            println!("✗ Error: {}", e);
                            continue;
                        }
                    }
                };

                match board.place_ship(origin, ship.length(), orientation) {
                    Ok(()) => {
                        println!("✓ {} placed at {}", ship.name(), coord_to_string(origin));
                        break;
                    }
                    Err(e) => println!("✗ Error: {}", e),
                }
            }
        }
        Ok(())
    }

    fn take_turn(&mut self, _rng: &mut SmallRng, game: &mut Match) -> anyhow::Result<TurnReport> {
        println!("\n{}'s turn", self.name);
        println!("Opponent board:");
        print!("{}", render_board(game.opponent_board(), Some(game.current_turn_attacker())));
        println!("Your board:");
        print!("{}", render_board(game.board(game.current_turn()), None));

        loop {
            let line = self.prompt("Enter target (e.g., A5): ")?;
            let target = match parse_coord(&line) {
                Ok(coord) => coord,
                Err(e) => {
                    println!("✗ Invalid coordinate: {}", e);
                    continue;
                }
            };
            match game.take_turn(target) {
                Ok(report) => return Ok(report),
                Err(e @ GameError::AlreadyAttacked(_)) => println!("✗ {}", e),
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }

    fn handle_turn(&mut self, me: Seat, report: &TurnReport) {
        let at = coord_to_string(report.target);
        if report.seat == me {
            println!("{} -> {}", at, describe(report.outcome));
        } else {
            println!("Opponent fired at {} -> {}", at, describe(report.outcome));
        }
        if let Some(winner) = report.winner {
            if winner == me {
                println!("🎉 {} wins!", self.name);
            } else {
                println!("💔 {} loses.", self.name);
            }
        }
    }
}

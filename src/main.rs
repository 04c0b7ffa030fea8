//! Terminal front end: mode selection and the interactive match loop.

use std::io::{self, Write};

use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use broadside::{init_logging, print_grid, ComputerPlayer, HumanPlayer, Match, Player, PlayerId};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Two players taking turns at one terminal.
    Multiplayer {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play against a computer opponent.
    Computer {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Multiplayer,
    Computer,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mode, seed) = match cli.command {
        Some(Commands::Multiplayer { seed }) => (Mode::Multiplayer, seed),
        Some(Commands::Computer { seed }) => (Mode::Computer, seed),
        None => (prompt_mode()?, None),
    };

    match mode {
        Mode::Multiplayer => println!("Starting multiplayer game..."),
        Mode::Computer => println!("Starting game against the computer..."),
    }
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Match::new(&mut rng)?;
    run_match(&mut game, &mut rng, mode)
}

/// Interactive menu shown when no subcommand is given.
fn prompt_mode() -> anyhow::Result<Mode> {
    println!("Welcome to Battleship!");
    println!("  1) Multiplayer");
    println!("  2) Play against the computer");
    loop {
        print!("Choose a mode: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("input closed before a mode was chosen");
        }
        match line.trim() {
            "1" => return Ok(Mode::Multiplayer),
            "2" => return Ok(Mode::Computer),
            _ => println!("Enter 1 or 2."),
        }
    }
}

fn side_label(mode: Mode, player: PlayerId) -> &'static str {
    match (mode, player) {
        (Mode::Computer, PlayerId::Two) => "Computer",
        (_, PlayerId::One) => "Player 1",
        (_, PlayerId::Two) => "Player 2",
    }
}

/// Boards shown before a human picks a target. Fleets stay hidden except
/// the human's own in a computer game.
fn show_view(game: &Match, mode: Mode) {
    match mode {
        Mode::Multiplayer => {
            print_grid("Player 1's waters", game.board(PlayerId::One), false);
            println!();
            print_grid("Player 2's waters", game.board(PlayerId::Two), false);
        }
        Mode::Computer => {
            print_grid("Enemy waters", game.board(PlayerId::Two), false);
            println!();
            print_grid("Your fleet", game.board(PlayerId::One), true);
        }
    }
}

fn run_match(game: &mut Match, rng: &mut SmallRng, mode: Mode) -> anyhow::Result<()> {
    let mut human1 = HumanPlayer::new(side_label(mode, PlayerId::One));
    let mut human2 = HumanPlayer::new(side_label(mode, PlayerId::Two));
    let mut computer = ComputerPlayer::new();

    while let Some(attacker) = game.to_move() {
        let is_human = mode == Mode::Multiplayer || attacker == PlayerId::One;
        if is_human {
            println!();
            println!("{}'s turn.", side_label(mode, attacker));
            show_view(game, mode);
        }
        // Keep asking until a move is accepted; rejected moves cost nothing.
        let (coord, outcome) = loop {
            let player: &mut dyn Player = match (mode, attacker) {
                (Mode::Computer, PlayerId::Two) => &mut computer,
                (_, PlayerId::One) => &mut human1,
                (_, PlayerId::Two) => &mut human2,
            };
            let coord = player.choose_target(rng, game)?;
            if let Some(outcome) = game.play(coord) {
                break (coord, outcome);
            }
        };
        println!("{} fires at {}: {}", side_label(mode, attacker), coord, outcome);
    }

    println!();
    println!("╔══════════════════════════════════════╗");
    println!("║              GAME OVER               ║");
    println!("╚══════════════════════════════════════╝");
    if let Some(winner) = game.winner() {
        println!("{} wins!", side_label(mode, winner));
    }
    Ok(())
}

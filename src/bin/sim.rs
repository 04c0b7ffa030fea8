//! Headless playout between two computer players, reporting JSON.

use broadside::{init_logging, ComputerPlayer, Match, Player, PlayerId, ShotOutcome};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    shots: u32,
    hits: u32,
}

#[derive(Serialize)]
struct MatchReport {
    winner: Option<&'static str>,
    turns: u32,
    player1: SideReport,
    player2: SideReport,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // Seed 1 also drives fleet placement, so a (seed1, seed2) pair pins
    // down the whole match.
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Match::new(&mut rng1)?;
    let mut p1 = ComputerPlayer::new();
    let mut p2 = ComputerPlayer::new();
    let mut reports = [
        SideReport { shots: 0, hits: 0 },
        SideReport { shots: 0, hits: 0 },
    ];

    while let Some(attacker) = game.to_move() {
        let (player, rng, idx) = match attacker {
            PlayerId::One => (&mut p1, &mut rng1, 0),
            PlayerId::Two => (&mut p2, &mut rng2, 1),
        };
        let coord = player.choose_target(rng, &game)?;
        if let Some(outcome) = game.play(coord) {
            reports[idx].shots += 1;
            if matches!(outcome, ShotOutcome::Hit(_)) {
                reports[idx].hits += 1;
            }
        }
    }

    let winner = game.winner().map(|w| match w {
        PlayerId::One => "player1",
        PlayerId::Two => "player2",
    });
    let [player1, player2] = reports;
    let report = MatchReport {
        winner,
        turns: game.turns_played(),
        player1,
        player2,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

use broadside::{Match, PlayerId};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Run a full random-vs-random match to completion. Random play resolves
/// every cell at most once per side, so 200 plies always suffice.
fn play_out(seed: u64) -> Match {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new(&mut rng).unwrap();
    for _ in 0..200 {
        let Some(coord) = game.computer_target(&mut rng) else {
            break;
        };
        game.play(coord).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A finished match has exactly one defeated fleet.
    #[test]
    fn playout_finishes_with_loser_defeated(seed in any::<u64>()) {
        let game = play_out(seed);
        prop_assert_eq!(game.to_move(), None);
        let winner = game.winner().unwrap();
        prop_assert!(game.board(winner.opponent()).is_defeated());
        prop_assert!(!game.board(winner).is_defeated());
    }

    /// The turn counter agrees with the recorded move sets, and every
    /// recorded move landed on the grid.
    #[test]
    fn turns_equal_recorded_moves(seed in any::<u64>()) {
        let game = play_out(seed);
        let recorded = game.moves(PlayerId::One).len() + game.moves(PlayerId::Two).len();
        prop_assert_eq!(game.turns_played() as usize, recorded);
        for player in [PlayerId::One, PlayerId::Two] {
            for coord in game.moves(player).iter() {
                prop_assert!(coord.in_bounds());
            }
        }
    }

    /// A win takes at least 17 hits and random play cannot outlast the grid.
    #[test]
    fn playout_length_in_bounds(seed in any::<u64>()) {
        let game = play_out(seed);
        let turns = game.turns_played();
        prop_assert!(turns >= 33, "match ended after only {} plies", turns);
        prop_assert!(turns <= 199, "match ran for {} plies", turns);
    }

    /// Seeded matches replay identically: same winner, same length, same
    /// moves, same final boards.
    #[test]
    fn same_seed_same_outcome(seed in any::<u64>()) {
        let a = play_out(seed);
        let b = play_out(seed);
        prop_assert_eq!(a.winner(), b.winner());
        prop_assert_eq!(a.turns_played(), b.turns_played());
        for player in [PlayerId::One, PlayerId::Two] {
            prop_assert_eq!(a.moves(player), b.moves(player));
            prop_assert_eq!(a.board(player), b.board(player));
        }
    }
}

//! Match state: two boards, alternating turns, and a winner.

use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::{BOARD_CELLS, BOARD_SIZE};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Where the match stands: waiting on a move, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(PlayerId),
    Over { winner: PlayerId },
}

/// The set of coordinates one player has fired at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    tried: HashSet<Coord>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.tried.contains(&coord)
    }

    pub fn record(&mut self, coord: Coord) {
        self.tried.insert(coord);
    }

    pub fn len(&self) -> usize {
        self.tried.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tried.is_empty()
    }

    /// The recorded coordinates, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tried.iter().copied()
    }

    /// Sample a uniformly random coordinate not yet in the set, re-rolling
    /// on collisions. `None` once every cell has been tried.
    pub fn sample_untried<R: Rng>(&self, rng: &mut R) -> Option<Coord> {
        if self.tried.len() >= BOARD_CELLS {
            return None;
        }
        loop {
            let coord = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !self.contains(coord) {
                return Some(coord);
            }
        }
    }
}

/// A full match between two players. All turn order and win detection
/// lives here; the UI layer only chooses coordinates.
#[derive(Debug, Clone)]
pub struct Match {
    boards: [Board; 2],
    moves: [MoveSet; 2],
    phase: Phase,
    turns: u32,
}

impl Match {
    /// Start a match with both fleets placed at random. Player 1 moves
    /// first.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut boards = [Board::new(), Board::new()];
        for board in &mut boards {
            board.place_fleet_randomly(rng)?;
        }
        info!("match started, {} to move", PlayerId::One);
        Ok(Self::from_boards(boards))
    }

    /// Start a match from pre-placed boards.
    pub fn from_boards(boards: [Board; 2]) -> Self {
        Match {
            boards,
            moves: [MoveSet::new(), MoveSet::new()],
            phase: Phase::AwaitingMove(PlayerId::One),
            turns: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player whose move is awaited, or `None` once the match is over.
    pub fn to_move(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            Phase::Over { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// `player`'s own waters.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// The coordinates `player` has fired at so far.
    pub fn moves(&self, player: PlayerId) -> &MoveSet {
        &self.moves[player.index()]
    }

    /// Number of moves resolved so far.
    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    /// Whether `coord` is a legal move for the player whose turn it is:
    /// on the grid and not fired at before by that player.
    pub fn validate_move(&self, coord: Coord) -> bool {
        match self.phase {
            Phase::AwaitingMove(player) => {
                coord.in_bounds() && !self.moves[player.index()].contains(coord)
            }
            Phase::Over { .. } => false,
        }
    }

    /// Resolve the current player's shot at `coord`. Invalid moves are
    /// ignored: the board is untouched, the turn does not pass, and the
    /// caller gets `None`.
    pub fn play(&mut self, coord: Coord) -> Option<ShotOutcome> {
        let attacker = match self.phase {
            Phase::AwaitingMove(player) => player,
            Phase::Over { .. } => {
                debug!("shot at {coord} ignored: match is over");
                return None;
            }
        };
        if !self.validate_move(coord) {
            debug!("{attacker} shot at {coord} ignored: off-grid or repeated");
            return None;
        }
        let defender = attacker.opponent();
        let outcome = match self.boards[defender.index()].resolve_shot(coord) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("{attacker} shot at {coord} ignored: {err}");
                return None;
            }
        };
        self.moves[attacker.index()].record(coord);
        self.turns += 1;
        debug!("{attacker} fires at {coord}: {outcome}");
        if self.boards[defender.index()].is_defeated() {
            info!("{attacker} wins after {} moves", self.turns);
            self.phase = Phase::Over { winner: attacker };
        } else {
            self.phase = Phase::AwaitingMove(defender);
        }
        Some(outcome)
    }

    /// A uniformly random legal target for the player to move, suitable
    /// for the computer opponent. `None` when the match is over or the
    /// grid is exhausted.
    pub fn computer_target<R: Rng>(&self, rng: &mut R) -> Option<Coord> {
        let player = self.to_move()?;
        self.moves[player.index()].sample_untried(rng)
    }
}

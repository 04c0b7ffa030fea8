//! Interface implemented by the different player types.

use rand::rngs::SmallRng;

use crate::common::Coord;
use crate::game::Match;

/// A source of moves for one side of a match.
pub trait Player {
    /// Choose the next target coordinate. The returned coordinate is not
    /// required to be legal; the match ignores invalid moves and the
    /// player is simply asked again.
    fn choose_target(&mut self, rng: &mut SmallRng, game: &Match) -> anyhow::Result<Coord>;
}

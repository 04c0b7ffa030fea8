//! The computer opponent: uniformly random shots at untried cells.

use anyhow::Context;
use rand::rngs::SmallRng;

use crate::common::Coord;
use crate::game::Match;
use crate::player::Player;

pub struct ComputerPlayer;

impl ComputerPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ComputerPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, game: &Match) -> anyhow::Result<Coord> {
        game.computer_target(rng)
            .context("no untried cell left to fire at")
    }
}

//! Interactive player reading targets from stdin, plus grid rendering.

use std::io::{self, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::board::{Board, Cell};
use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::game::Match;
use crate::player::Player;

pub struct HumanPlayer {
    label: String,
}

impl HumanPlayer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Player for HumanPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng, _game: &Match) -> anyhow::Result<Coord> {
        loop {
            print!("{}, enter target (e.g. B4): ", self.label);
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                bail!("input closed before a move was entered");
            }
            match line.trim().parse() {
                Ok(coord) => return Ok(coord),
                Err(_) => println!("Enter a column letter and row number, e.g. B4."),
            }
        }
    }
}

/// Print one board under a title. With `reveal` the fleet is shown;
/// without it every unresolved cell renders as open water.
pub fn print_grid(title: &str, board: &Board, reveal: bool) {
    println!("{title}:");
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!(" {}", (b'A' + col) as char);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{:2} ", row + 1);
        for col in 0..BOARD_SIZE {
            let cell = board.cell(Coord::new(row, col)).unwrap_or(Cell::Empty);
            let ch = match cell {
                Cell::Hit => 'X',
                Cell::Miss => 'O',
                _ if reveal => cell.marker(),
                _ => '~',
            };
            print!(" {ch}");
        }
        println!();
    }
}

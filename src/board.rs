//! Board state: a 10x10 cell grid holding ship placements and shot marks.

use core::fmt;

use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::{BOARD_CELLS, BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipClass};

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never shot at.
    Empty,
    /// An intact segment of the named ship.
    Ship(ShipClass),
    /// A ship segment that has been struck.
    Hit,
    /// Open water that has been shot at.
    Miss,
}

impl Cell {
    /// Marker used when rendering a revealed grid.
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Ship(class) => class.initial(),
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// One player's waters: ship placements plus every resolved shot.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    fn index(coord: Coord) -> usize {
        coord.row as usize * BOARD_SIZE as usize + coord.col as usize
    }

    /// Contents of the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds { coord });
        }
        Ok(self.cells[Self::index(coord)])
    }

    /// Whether any intact segment of a ship of `class` remains on the
    /// board.
    pub fn has_ship(&self, class: ShipClass) -> bool {
        self.cells.iter().any(|cell| *cell == Cell::Ship(class))
    }

    /// Place a ship of `class` with its bow at `origin`, extending along
    /// `orientation`. Fails without touching the board if the ship would
    /// run off the grid, overlap another ship, or duplicate a class.
    pub fn place(
        &mut self,
        class: ShipClass,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.has_ship(class) {
            return Err(BoardError::DuplicateShip { class });
        }
        let len = class.length();
        if !origin.in_bounds() || !orientation.step(origin, len - 1).in_bounds() {
            return Err(BoardError::ShipOutOfBounds { class });
        }
        // Check every cell before writing any, so a failed placement
        // leaves the board untouched.
        for i in 0..len {
            if self.cell(orientation.step(origin, i))? != Cell::Empty {
                return Err(BoardError::Overlap { class });
            }
        }
        for i in 0..len {
            self.cells[Self::index(orientation.step(origin, i))] = Cell::Ship(class);
        }
        Ok(())
    }

    /// Place one ship of `class` at a random position and orientation,
    /// retrying until an open spot is found or the attempts run out.
    pub fn place_randomly<R: Rng>(&mut self, rng: &mut R, class: ShipClass) -> Result<(), BoardError> {
        let len = class.length();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // Sample origins only where the whole ship fits, so every
            // retry is spent on a genuine overlap check.
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
                Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            };
            let origin = Coord::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));
            match self.place(class, origin, orientation) {
                Ok(()) => return Ok(()),
                Err(err @ BoardError::DuplicateShip { .. }) => return Err(err),
                Err(_) => continue,
            }
        }
        Err(BoardError::PlacementExhausted { class })
    }

    /// Place the full standard fleet at random.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for class in FLEET {
            self.place_randomly(rng, class)?;
        }
        Ok(())
    }

    /// Resolve a shot at `coord`, marking the cell and reporting the
    /// outcome. Shooting a cell twice is an error.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        match self.cell(coord)? {
            Cell::Ship(class) => {
                self.cells[Self::index(coord)] = Cell::Hit;
                Ok(ShotOutcome::Hit(class))
            }
            Cell::Empty => {
                self.cells[Self::index(coord)] = Cell::Miss;
                Ok(ShotOutcome::Miss)
            }
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyResolved { coord }),
        }
    }

    /// Whether every ship segment has been struck.
    pub fn is_defeated(&self) -> bool {
        !self.cells.iter().any(|cell| matches!(cell, Cell::Ship(_)))
    }

    /// Number of intact ship segments left.
    pub fn ship_cells_remaining(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Ship(_)))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[Self::index(Coord::new(row, col))].marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

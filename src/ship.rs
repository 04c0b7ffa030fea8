//! Ship classes and placement orientation.

use core::fmt;

use crate::common::Coord;

/// One of the five ship classes in the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipClass {
    /// Display name of the ship.
    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> u8 {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// One-letter marker used when rendering a revealed grid. Carrier and
    /// Cruiser share `C`; cells carry the class itself, so the marker is
    /// display-only.
    pub const fn initial(self) -> char {
        match self {
            ShipClass::Carrier => 'C',
            ShipClass::Battleship => 'B',
            ShipClass::Cruiser => 'C',
            ShipClass::Submarine => 'S',
            ShipClass::Destroyer => 'D',
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The coordinate `offset` cells along the ship from `origin`.
    pub fn step(self, origin: Coord, offset: u8) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + offset),
            Orientation::Vertical => Coord::new(origin.row + offset, origin.col),
        }
    }
}

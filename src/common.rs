//! Common types: coordinates, shot outcomes and board errors.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;
use crate::ship::ShipClass;

/// A cell position on the grid. `row` and `col` are zero-based, so the
/// printable square "A1" is `Coord { row: 0, col: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the standard grid.
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Coord {
    /// Renders in column-letter row-number notation, e.g. `B4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = char::from_u32('A' as u32 + self.col as u32).unwrap_or('?');
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Error parsing a coordinate from text like `B4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCoordError;

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a column letter followed by a row number")
    }
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses `B4`-style notation, case-insensitively. Bounds are not
    /// checked here; callers validate against the grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars.next().ok_or(ParseCoordError)?;
        if !col_ch.is_ascii_alphabetic() {
            return Err(ParseCoordError);
        }
        let col = (col_ch.to_ascii_uppercase() as u32 - 'A' as u32) as u8;
        let row: u8 = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| ParseCoordError)?
            .checked_sub(1)
            .ok_or(ParseCoordError)?;
        Ok(Coord { row, col })
    }
}

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot struck a segment of the named ship.
    Hit(ShipClass),
    /// The shot landed on open water.
    Miss,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit(class) => write!(f, "Hit {}!", class),
            ShotOutcome::Miss => write!(f, "Miss!"),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { coord: Coord },
    /// Ship placement would run off the edge of the grid.
    ShipOutOfBounds { class: ShipClass },
    /// Ship placement overlaps another ship.
    Overlap { class: ShipClass },
    /// The board already holds a ship of this class.
    DuplicateShip { class: ShipClass },
    /// Random placement gave up after exhausting its retry limit.
    PlacementExhausted { class: ShipClass },
    /// A shot was already resolved at this coordinate.
    AlreadyResolved { coord: Coord },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { coord } => {
                write!(f, "coordinate {} is outside the grid", coord)
            }
            BoardError::ShipOutOfBounds { class } => {
                write!(f, "{} placement runs off the grid", class)
            }
            BoardError::Overlap { class } => {
                write!(f, "{} placement overlaps another ship", class)
            }
            BoardError::DuplicateShip { class } => {
                write!(f, "board already holds a {}", class)
            }
            BoardError::PlacementExhausted { class } => {
                write!(f, "could not find an open placement for {}", class)
            }
            BoardError::AlreadyResolved { coord } => {
                write!(f, "shot at {} was already resolved", coord)
            }
        }
    }
}

impl std::error::Error for BoardError {}

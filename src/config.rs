use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
pub const NUM_SHIPS: usize = 5;

/// The fixed fleet, in placement order.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Submarine,
    ShipClass::Destroyer,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

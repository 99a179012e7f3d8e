use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const MAX_SHIP_LENGTH: usize = BOARD_SIZE;
pub const FLEET_SIZE: usize = 5;
pub const FLEET: [ShipType; FLEET_SIZE] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Attempts per ship before random placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

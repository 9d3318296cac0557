use crate::shape::{ShipDefinition, ShipShape};

/// Engine-level ceiling on map side length.
pub const MAX_MAP_SIZE: i32 = 20;
/// Exactly two players per game.
pub const NUM_PLAYERS: usize = 2;
/// Retry budget for a single randomized ship placement.
pub const MAX_PLACE_ATTEMPTS: u32 = 100;

const SINGLE_CELL: &[(i32, i32)] = &[(0, 0)];
const TWO_CELL_LINE: &[(i32, i32)] = &[(0, 0), (1, 0)];
const THREE_CELL_LINE: &[(i32, i32)] = &[(0, 0), (1, 0), (2, 0)];
const ELL: &[(i32, i32)] = &[(0, 0), (1, 0), (1, 1)];
const CROSS: &[(i32, i32)] = &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)];
const TEE: &[(i32, i32)] = &[(0, 0), (1, 0), (2, 0), (3, 0), (2, 1)];

/// One-cell ship.
pub fn single_cell() -> ShipShape {
    ShipShape::new(SINGLE_CELL.iter().copied())
}

/// Two cells in a line.
pub fn two_cell_line() -> ShipShape {
    ShipShape::new(TWO_CELL_LINE.iter().copied())
}

/// Three cells in a line.
pub fn three_cell_line() -> ShipShape {
    ShipShape::new(THREE_CELL_LINE.iter().copied())
}

/// Three-cell L. Not part of the fixed fleet.
pub fn ell() -> ShipShape {
    ShipShape::new(ELL.iter().copied())
}

/// Five-cell plus sign.
pub fn cross() -> ShipShape {
    ShipShape::new(CROSS.iter().copied())
}

/// Four cells in a line with one perpendicular offshoot.
pub fn tee() -> ShipShape {
    ShipShape::new(TEE.iter().copied())
}

/// The fixed fleet placed on every board. Not configurable per game.
pub fn fleet() -> Vec<ShipDefinition> {
    vec![
        ShipDefinition::new(single_cell(), 2),
        ShipDefinition::new(two_cell_line(), 2),
        ShipDefinition::new(three_cell_line(), 1),
        ShipDefinition::new(cross(), 1),
        ShipDefinition::new(tee(), 1),
    ]
}
